//! Dashboard state and key handling.
//!
//! The app owns the config (roster + preferences) and the rows computed from
//! it for the current instant. Rendering reads this state; only key events
//! and ticks change it.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;
use worldclock_core::{
    catalog, compute_indexed_times, search, ComputedTime, Config, SearchResult, ViewerZone,
};

/// Colleague rows shown at once.
pub const MAX_VISIBLE: usize = 8;
/// Search results shown at once.
pub const SEARCH_VISIBLE: usize = 10;
/// Selection highlight disappears after this much inactivity.
pub const AUTO_HIDE_TIMEOUT: Duration = Duration::from_secs(3);
/// Longest accepted colleague name.
pub const NAME_CHAR_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    AddName,
    SearchTimezone,
    EditName,
    EditSearchTimezone,
    Help,
    Timeline,
}

/// A computed row plus its position in the roster.
#[derive(Debug, Clone)]
pub struct Row {
    pub roster_index: usize,
    pub time: ComputedTime,
}

pub struct App {
    pub config: Config,
    /// Where changes are saved; `None` keeps everything in memory.
    config_path: Option<PathBuf>,
    pub viewer: ViewerZone,
    pub now: DateTime<Utc>,
    pub rows: Vec<Row>,
    pub mode: Mode,

    pub cursor: Option<usize>,
    pub selection_active: bool,
    last_action: Instant,
    pub scroll_offset: usize,

    pub name_input: String,
    edit_index: Option<usize>,

    pub search_query: String,
    pub search_results: Vec<SearchResult>,
    pub search_cursor: usize,
    pub search_scroll: usize,

    pub error: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, config_path: Option<PathBuf>, now: DateTime<Utc>) -> Self {
        let viewer = ViewerZone::detect(config.viewer_timezone.as_deref());
        let mut app = Self {
            config,
            config_path,
            viewer,
            now,
            rows: Vec::new(),
            mode: Mode::Normal,
            cursor: None,
            selection_active: false,
            last_action: Instant::now(),
            scroll_offset: 0,
            name_input: String::new(),
            edit_index: None,
            search_query: String::new(),
            search_results: Vec::new(),
            search_cursor: 0,
            search_scroll: 0,
            error: None,
            should_quit: false,
        };
        app.recompute();
        app
    }

    /// Recompute every row for `self.now`. Entries whose timezone does not
    /// resolve are left out.
    pub fn recompute(&mut self) {
        self.rows = compute_indexed_times(&self.config.colleagues, &self.viewer, self.now)
            .into_iter()
            .map(|(roster_index, time)| Row { roster_index, time })
            .collect();

        if let Some(cursor) = self.cursor {
            if cursor >= self.rows.len() {
                self.cursor = self.rows.len().checked_sub(1);
            }
        }
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    /// Once-a-second update: new instant, new rows, selection timeout.
    pub fn on_tick(&mut self, now: DateTime<Utc>, instant: Instant) {
        self.now = now;
        self.recompute();
        if self.selection_active && instant.duration_since(self.last_action) > AUTO_HIDE_TIMEOUT {
            self.selection_active = false;
        }
    }

    pub fn max_scroll(&self) -> usize {
        self.rows.len().saturating_sub(MAX_VISIBLE)
    }

    fn persist(&mut self) {
        let Some(path) = &self.config_path else {
            return;
        };
        if let Err(e) = self.config.save_to(path) {
            warn!("failed to save config: {e}");
            self.error = Some(e.to_string());
        }
    }

    // ── Selection ────────────────────────────────────────────────────

    fn activate_selection(&mut self) {
        self.selection_active = true;
        self.last_action = Instant::now();
    }

    /// Bring a hidden selection back without acting on it. Returns `true`
    /// if the key press was spent doing so.
    fn reactivate_selection(&mut self) -> bool {
        if self.cursor.is_some() && !self.selection_active {
            self.activate_selection();
            return true;
        }
        false
    }

    fn selected_roster_index(&self) -> Option<usize> {
        if !self.selection_active {
            return None;
        }
        self.cursor
            .and_then(|c| self.rows.get(c))
            .map(|row| row.roster_index)
    }

    fn select_roster_index(&mut self, roster_index: usize) {
        self.cursor = self.rows.iter().position(|r| r.roster_index == roster_index);
        if let Some(cursor) = self.cursor {
            if cursor >= self.scroll_offset + MAX_VISIBLE {
                self.scroll_offset = cursor + 1 - MAX_VISIBLE;
            } else if cursor < self.scroll_offset {
                self.scroll_offset = cursor;
            }
        }
        self.activate_selection();
    }

    // ── Keys ─────────────────────────────────────────────────────────

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::AddName | Mode::EditName => self.handle_name_key(key),
            Mode::SearchTimezone | Mode::EditSearchTimezone => self.handle_search_key(key),
            Mode::Help => self.mode = Mode::Normal,
            Mode::Timeline => self.handle_timeline_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Char('a') => {
                self.mode = Mode::AddName;
                self.name_input.clear();
                self.edit_index = None;
                self.error = None;
            }
            KeyCode::Char('d') => {
                if self.reactivate_selection() {
                    return;
                }
                if let Some(index) = self.selected_roster_index() {
                    match self.config.remove_colleague(index) {
                        Ok(_) => {
                            self.persist();
                            self.cursor = None;
                            self.selection_active = false;
                            self.recompute();
                        }
                        Err(e) => self.error = Some(e.to_string()),
                    }
                }
            }
            KeyCode::Char('e') => {
                if self.reactivate_selection() {
                    return;
                }
                if let Some(index) = self.selected_roster_index() {
                    self.mode = Mode::EditName;
                    self.edit_index = Some(index);
                    self.name_input = self.config.colleagues[index].name.clone();
                    self.error = None;
                }
            }
            KeyCode::Char('f') => {
                self.config.time_format = self.config.time_format.toggle();
                self.persist();
            }
            KeyCode::Char('?') | KeyCode::Char('h') => self.mode = Mode::Help,
            KeyCode::Char('t') => self.mode = Mode::Timeline,
            _ => {}
        }
    }

    fn move_up(&mut self) {
        if self.reactivate_selection() {
            return;
        }
        match self.cursor {
            None if !self.rows.is_empty() => {
                self.cursor = Some(0);
                self.activate_selection();
            }
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                self.last_action = Instant::now();
                if cursor - 1 < self.scroll_offset {
                    self.scroll_offset = cursor - 1;
                }
            }
            _ => {}
        }
    }

    fn move_down(&mut self) {
        if self.reactivate_selection() {
            return;
        }
        match self.cursor {
            None if !self.rows.is_empty() => {
                self.cursor = Some(0);
                self.activate_selection();
            }
            Some(cursor) if cursor + 1 < self.rows.len() => {
                self.cursor = Some(cursor + 1);
                self.last_action = Instant::now();
                if cursor + 1 >= self.scroll_offset + MAX_VISIBLE {
                    self.scroll_offset = cursor + 2 - MAX_VISIBLE;
                }
            }
            _ => {}
        }
    }

    fn handle_name_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if !self.name_input.trim().is_empty() {
                    self.mode = if self.mode == Mode::EditName {
                        Mode::EditSearchTimezone
                    } else {
                        Mode::SearchTimezone
                    };
                    self.search_query.clear();
                    self.update_search_results();
                }
            }
            KeyCode::Esc => self.exit_to_normal(),
            KeyCode::Backspace => {
                self.name_input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.name_input.chars().count() < NAME_CHAR_LIMIT {
                    self.name_input.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.commit_search_selection(),
            KeyCode::Esc => self.exit_to_normal(),
            KeyCode::Up => {
                if self.search_cursor > 0 {
                    self.search_cursor -= 1;
                    if self.search_cursor < self.search_scroll {
                        self.search_scroll = self.search_cursor;
                    }
                }
            }
            KeyCode::Down => {
                if self.search_cursor + 1 < self.search_results.len() {
                    self.search_cursor += 1;
                    if self.search_cursor >= self.search_scroll + SEARCH_VISIBLE {
                        self.search_scroll = self.search_cursor + 1 - SEARCH_VISIBLE;
                    }
                }
            }
            KeyCode::Backspace => {
                if self.search_query.pop().is_some() {
                    self.update_search_results();
                }
            }
            KeyCode::Char(c)
                if (' '..='~').contains(&c) && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.search_query.push(c);
                self.update_search_results();
            }
            _ => {}
        }
    }

    fn handle_timeline_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('t') => self.mode = Mode::Normal,
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.scroll_offset < self.max_scroll() {
                    self.scroll_offset += 1;
                }
            }
            KeyCode::Char('c') => {
                self.config.color_scheme = self.config.color_scheme.next();
                self.persist();
            }
            KeyCode::Char('m') => {
                self.config.timeline_mode = self.config.timeline_mode.toggle();
                self.persist();
            }
            KeyCode::Char('?') | KeyCode::Char('h') => self.mode = Mode::Help,
            _ => {}
        }
    }

    // ── Add / edit flow ──────────────────────────────────────────────

    fn exit_to_normal(&mut self) {
        self.mode = Mode::Normal;
        self.edit_index = None;
        self.error = None;
    }

    fn update_search_results(&mut self) {
        self.search_results = search(&self.search_query, catalog::all(), self.now);
        self.search_cursor = 0;
        self.search_scroll = 0;
    }

    fn commit_search_selection(&mut self) {
        let Some(result) = self.search_results.get(self.search_cursor) else {
            return;
        };
        let city = result.city;
        let base_name = self.name_input.trim().to_string();

        let committed = match (self.mode, self.edit_index) {
            (Mode::EditSearchTimezone, Some(index)) => self
                .config
                .update_from_search(index, &base_name, &city, &self.search_query)
                .map(|()| index),
            _ => self
                .config
                .add_from_search(&base_name, &city, &self.search_query),
        };

        match committed {
            Ok(index) => {
                self.persist();
                self.recompute();
                self.exit_to_normal();
                self.select_roster_index(index);
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}
