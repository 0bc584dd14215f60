//! Dashboard rendering.
//!
//! Every screen is built as a list of [`Line`]s and drawn as one paragraph.
//! Colors come from the [`Palette`] passed down from [`render`].

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use worldclock_core::timeline::{NAME_FIELD_WIDTH, TIME_FIELD_WIDTH};
use worldclock_core::{
    bar_width_for_terminal, format_date, format_time, hour_labels, render_bar, SearchResult,
    TimelineBar,
};

use super::app::{App, Mode, Row, MAX_VISIBLE, SEARCH_VISIBLE};
use super::theme::{
    cell_glyph, status_glyph, Palette, AWAKE_OFF_GLYPH, SLEEP_GLYPH, WORK_GLYPH,
};
use crate::text::fit;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let palette = Palette::for_scheme(app.config.color_scheme);
    let area = frame.area();

    let lines = match app.mode {
        Mode::Help => help_lines(&palette),
        Mode::Timeline => timeline_lines(app, &palette, usize::from(area.width)),
        _ => main_lines(app, &palette),
    };
    frame.render_widget(Paragraph::new(lines), area);
}

fn header(app: &App, palette: &Palette, title: &str) -> Line<'static> {
    let local = app.viewer.local_time(app.now);
    Line::styled(
        format!(
            "🌍 {title} - Local Time: {} ({})",
            format_time(&local, app.config.time_format),
            format_date(&local)
        ),
        palette.header(),
    )
}

fn footer(palette: &Palette, items: &[&str]) -> Line<'static> {
    Line::styled(items.join(" • "), palette.muted())
}

/// `▲ n more above` / `▼ n more below` around a window of `visible` items.
fn scroll_indicators(
    offset: usize,
    visible: usize,
    total: usize,
    palette: &Palette,
) -> (Option<Line<'static>>, Option<Line<'static>>) {
    let end = (offset + visible).min(total);
    let top = (offset > 0)
        .then(|| Line::styled(format!("  ▲ {offset} more above"), palette.muted()));
    let bottom = (end < total)
        .then(|| Line::styled(format!("  ▼ {} more below", total - end), palette.muted()));
    (top, bottom)
}

// ── Main screen ──────────────────────────────────────────────────────

fn main_lines(app: &App, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![header(app, palette, "World Clock"), Line::default()];

    match app.mode {
        Mode::AddName | Mode::EditName => {
            let prompt = if app.mode == Mode::AddName {
                "Add colleague - Name: "
            } else {
                "Edit colleague - Name: "
            };
            lines.push(Line::from(vec![
                Span::styled(prompt, palette.prompt()),
                Span::raw(format!("{}_", app.name_input)),
            ]));
            lines.push(Line::default());
            lines.push(footer(palette, &["Press Enter to continue", "Esc to cancel"]));
        }
        Mode::SearchTimezone | Mode::EditSearchTimezone => {
            let prompt = if app.mode == Mode::SearchTimezone {
                format!("Add colleague '{}' - Search timezone: ", app.name_input)
            } else {
                format!("Edit '{}' - Search timezone: ", app.name_input)
            };
            lines.push(Line::from(vec![
                Span::styled(prompt, palette.prompt()),
                Span::raw(format!("{}_", app.search_query)),
            ]));
            lines.push(Line::default());
            lines.extend(search_result_lines(app, palette));
            lines.push(Line::default());
            lines.push(footer(
                palette,
                &["Type to search", "↑/↓ navigate", "Enter select", "Esc cancel"],
            ));
        }
        _ => lines.extend(colleague_lines(app, palette)),
    }

    if let Some(error) = &app.error {
        lines.push(Line::default());
        lines.push(Line::styled(format!("Error: {error}"), palette.error()));
    }

    if app.mode == Mode::Normal {
        lines.push(Line::default());
        lines.push(footer(
            palette,
            &[
                "↑/k up", "↓/j down", "a add", "e edit", "d delete", "f format", "t timeline",
                "? help", "q quit",
            ],
        ));
    }
    lines
}

fn colleague_lines(app: &App, palette: &Palette) -> Vec<Line<'static>> {
    if app.rows.is_empty() {
        return vec![Line::styled(
            "No colleagues configured. Press 'a' to add one.",
            palette.muted(),
        )];
    }

    let (top, bottom) = scroll_indicators(app.scroll_offset, MAX_VISIBLE, app.rows.len(), palette);
    let mut lines: Vec<Line> = top.into_iter().collect();

    let end = (app.scroll_offset + MAX_VISIBLE).min(app.rows.len());
    for (i, row) in app.rows.iter().enumerate().take(end).skip(app.scroll_offset) {
        let selected = app.selection_active && app.cursor == Some(i);
        lines.push(colleague_line(app, row, selected, palette));
    }

    lines.extend(bottom);
    lines
}

fn colleague_line(app: &App, row: &Row, selected: bool, palette: &Palette) -> Line<'static> {
    let ct = &row.time;
    let status = ct.status();
    let (cursor, name_style) = if selected {
        ("▶ ", palette.selected())
    } else {
        ("  ", Style::default())
    };

    Line::from(vec![
        Span::styled(cursor, name_style),
        Span::styled(format!("{} ", status_glyph(status)), palette.status(status)),
        Span::styled(ct.entry.name.clone(), name_style),
        Span::raw("  "),
        Span::styled(
            format_time(&ct.local_time, app.config.time_format),
            palette.status(status),
        ),
        Span::raw("  "),
        Span::styled(ct.offset_label.clone(), palette.offset()),
        Span::raw("  "),
        Span::styled(format_date(&ct.local_time), palette.date()),
    ])
}

fn search_result_lines(app: &App, palette: &Palette) -> Vec<Line<'static>> {
    if app.search_results.is_empty() {
        return vec![Line::styled(
            format!("No results found for '{}'", app.search_query),
            palette.muted(),
        )];
    }

    let total = app.search_results.len();
    let (top, bottom) = scroll_indicators(app.search_scroll, SEARCH_VISIBLE, total, palette);
    let mut lines: Vec<Line> = top.into_iter().collect();

    let end = (app.search_scroll + SEARCH_VISIBLE).min(total);
    for (i, result) in app
        .search_results
        .iter()
        .enumerate()
        .take(end)
        .skip(app.search_scroll)
    {
        lines.push(search_result_line(app, result, i == app.search_cursor, palette));
    }

    lines.extend(bottom);
    lines
}

fn search_result_line(
    app: &App,
    result: &SearchResult,
    selected: bool,
    palette: &Palette,
) -> Line<'static> {
    let (cursor, style) = if selected {
        ("▶ ", palette.selected())
    } else {
        ("  ", Style::default())
    };
    let abbrevs = if result.city.abbreviations.is_empty() {
        String::new()
    } else {
        format!(" [{}]", result.city.abbreviations.join("/"))
    };

    Line::from(vec![
        Span::styled(
            format!(
                "{cursor}{}, {} ({}){abbrevs} - ",
                result.city.city, result.city.country, result.city.timezone
            ),
            style,
        ),
        Span::styled(
            format_time(&result.current_time, app.config.time_format),
            palette.status(worldclock_core::Status::Working),
        ),
    ])
}

// ── Timeline screen ──────────────────────────────────────────────────

fn timeline_lines(app: &App, palette: &Palette, columns: usize) -> Vec<Line<'static>> {
    let mode = app.config.timeline_mode;
    let bar_width = bar_width_for_terminal(columns);
    let viewer_now = app.viewer.local_time(app.now);

    let mut lines = vec![header(app, palette, "Timeline View"), Line::default()];

    let (top, bottom) = scroll_indicators(app.scroll_offset, MAX_VISIBLE, app.rows.len(), palette);
    lines.extend(top);

    let end = (app.scroll_offset + MAX_VISIBLE).min(app.rows.len());
    for row in app.rows.iter().take(end).skip(app.scroll_offset) {
        let bar = render_bar(&row.time, bar_width, mode, &viewer_now);
        let status = row.time.status();

        let mut spans = vec![
            Span::styled(fit(&row.time.entry.name, NAME_FIELD_WIDTH), palette.status(status)),
            Span::raw(" "),
            Span::raw(fit(
                &format_time(&row.time.local_time, app.config.time_format),
                TIME_FIELD_WIDTH,
            )),
            Span::raw(" "),
        ];
        spans.extend(bar_spans(&bar, palette));
        lines.push(Line::from(spans));
    }

    lines.extend(bottom);

    let indent = " ".repeat(NAME_FIELD_WIDTH + TIME_FIELD_WIDTH + 2);
    lines.push(Line::styled(
        format!("{indent}{}", hour_labels(bar_width, mode)),
        palette.muted(),
    ));
    lines.push(Line::default());
    lines.push(legend(palette));
    let mode_hint = format!("m {}", mode.name());
    let color_hint = format!("c colors ({})", app.config.color_scheme.name());
    lines.push(footer(
        palette,
        &[
            "t normal mode",
            mode_hint.as_str(),
            "↑/↓ scroll",
            color_hint.as_str(),
            "? help",
            "q back",
        ],
    ));
    lines
}

/// `[`, one styled span per cell, `]`.
fn bar_spans(bar: &TimelineBar, palette: &Palette) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(bar.width() + 2);
    spans.push(Span::raw("["));
    for cell in &bar.cells {
        let glyph = if cell.is_marker {
            WORK_GLYPH
        } else {
            cell_glyph(cell.class)
        };
        spans.push(Span::styled(
            glyph.to_string(),
            palette.cell(cell.class, cell.is_marker),
        ));
    }
    spans.push(Span::raw("]"));
    spans
}

fn legend(palette: &Palette) -> Line<'static> {
    use worldclock_core::CellClass;

    let sep = || Span::styled(" • ", palette.muted());
    Line::from(vec![
        Span::styled(SLEEP_GLYPH.to_string(), palette.cell(CellClass::Sleep, false)),
        Span::styled(" sleep", palette.muted()),
        sep(),
        Span::styled(AWAKE_OFF_GLYPH.to_string(), palette.cell(CellClass::AwakeOff, false)),
        Span::styled(" off-hours", palette.muted()),
        sep(),
        Span::styled(WORK_GLYPH.to_string(), palette.cell(CellClass::Work, false)),
        Span::styled(" work", palette.muted()),
        sep(),
        Span::styled(
            AWAKE_OFF_GLYPH.to_string(),
            palette.cell(CellClass::WeekendWork, false),
        ),
        Span::styled(" weekend", palette.muted()),
        sep(),
        Span::styled(WORK_GLYPH.to_string(), palette.cell(CellClass::Work, true)),
        Span::styled(" now", palette.muted()),
    ])
}

// ── Help ─────────────────────────────────────────────────────────────

const HELP_TEXT: &str = "\
NAVIGATION
  ↑, k         Move cursor up
  ↓, j         Move cursor down

ACTIONS
  a            Add a new colleague
  e            Edit selected colleague
  d            Delete selected colleague
  f            Toggle time format (12h/24h)
  t            Timeline view

TIMELINE
  m            Toggle individual/shared mode
  c            Cycle color scheme
  t, q, Esc    Back to the list

STATUS INDICATORS
  ●            Working hours (weekdays)
  ○            Off hours
  ◆            Weekend

GENERAL
  ?, h         Show this help
  q, Esc       Quit application
  Ctrl+C       Force quit

Press any key to return...";

fn help_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled("🌍 World Clock - Help", palette.header()),
        Line::default(),
    ];
    lines.extend(HELP_TEXT.lines().map(|l| Line::styled(l, palette.muted())));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use worldclock_core::Config;

    fn app() -> App {
        let config = Config {
            viewer_timezone: Some("America/New_York".to_string()),
            ..Config::default()
        };
        App::new(config, None, "2024-01-17T15:00:00Z".parse().unwrap())
    }

    fn draw(app: &App, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn normal_screen_lists_colleagues() {
        let screen = draw(&app(), 100);
        assert!(screen.contains("Alice (New York)"));
        assert!(screen.contains("Bob (London)"));
        assert!(screen.contains("+5h"));
        assert!(screen.contains("10:00:00"));
    }

    #[test]
    fn timeline_screen_has_axis_and_legend() {
        let mut app = app();
        app.mode = Mode::Timeline;
        let screen = draw(&app, 100);
        assert!(screen.contains("Timeline View"));
        assert!(screen.contains("12:00"));
        assert!(screen.contains("off-hours"));
    }

    #[test]
    fn scroll_indicator_counts() {
        let palette = Palette::for_scheme(Default::default());
        let (top, bottom) = scroll_indicators(2, 8, 12, &palette);
        assert_eq!(top.unwrap().to_string(), "  ▲ 2 more above");
        assert_eq!(bottom.unwrap().to_string(), "  ▼ 2 more below");

        let (top, bottom) = scroll_indicators(0, 8, 3, &palette);
        assert!(top.is_none());
        assert!(bottom.is_none());
    }
}
