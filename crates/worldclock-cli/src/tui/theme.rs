//! Color palettes and glyphs.
//!
//! A [`Palette`] is built from the configured [`ColorScheme`] and handed to
//! every render function; nothing here is global state.

use ratatui::style::{Color, Modifier, Style};
use worldclock_core::{CellClass, ColorScheme, Status};

pub const SLEEP_GLYPH: char = '░';
pub const AWAKE_OFF_GLYPH: char = '▓';
pub const WORK_GLYPH: char = '█';
/// Marker in uncolored output, where a tinted block would be invisible.
pub const PLAIN_MARKER: char = '|';

/// Bar glyph for a cell class. Weekend work hours keep the off-hours glyph
/// and are told apart by color.
pub fn cell_glyph(class: CellClass) -> char {
    match class {
        CellClass::Sleep => SLEEP_GLYPH,
        CellClass::AwakeOff | CellClass::WeekendWork => AWAKE_OFF_GLYPH,
        CellClass::Work => WORK_GLYPH,
    }
}

pub fn status_glyph(status: Status) -> char {
    match status {
        Status::Working => '●',
        Status::OffHours => '○',
        Status::Weekend => '◆',
    }
}

/// Every color the dashboard uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub sleep: Color,
    pub awake_off: Color,
    pub work: Color,
    pub marker: Color,
    pub weekend_tint: Color,
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl Palette {
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Classic => Self {
                sleep: Color::Indexed(240),
                awake_off: Color::Indexed(244),
                work: Color::Indexed(42),
                marker: Color::Indexed(196),
                weekend_tint: Color::Indexed(141),
                primary: Color::Indexed(86),
                secondary: Color::Indexed(212),
                success: Color::Indexed(42),
                warning: Color::Indexed(214),
                error: Color::Indexed(196),
                muted: Color::Indexed(240),
            },
            ColorScheme::Dark => Self {
                sleep: Color::Indexed(235),
                awake_off: Color::Indexed(238),
                work: Color::Indexed(28),
                marker: Color::Indexed(226),
                weekend_tint: Color::Indexed(97),
                primary: Color::Indexed(75),
                secondary: Color::Indexed(176),
                success: Color::Indexed(34),
                warning: Color::Indexed(178),
                error: Color::Indexed(160),
                muted: Color::Indexed(243),
            },
            ColorScheme::HighContrast => Self {
                sleep: Color::DarkGray,
                awake_off: Color::Gray,
                work: Color::LightGreen,
                marker: Color::LightRed,
                weekend_tint: Color::LightMagenta,
                primary: Color::White,
                secondary: Color::LightCyan,
                success: Color::LightGreen,
                warning: Color::LightYellow,
                error: Color::LightRed,
                muted: Color::Gray,
            },
            ColorScheme::Nord => Self {
                sleep: Color::Rgb(0x4C, 0x56, 0x6A),
                awake_off: Color::Rgb(0x81, 0xA1, 0xC1),
                work: Color::Rgb(0xA3, 0xBE, 0x8C),
                marker: Color::Rgb(0xBF, 0x61, 0x6A),
                weekend_tint: Color::Rgb(0xB4, 0x8E, 0xAD),
                primary: Color::Rgb(0x88, 0xC0, 0xD0),
                secondary: Color::Rgb(0x5E, 0x81, 0xAC),
                success: Color::Rgb(0xA3, 0xBE, 0x8C),
                warning: Color::Rgb(0xEB, 0xCB, 0x8B),
                error: Color::Rgb(0xBF, 0x61, 0x6A),
                muted: Color::Rgb(0x4C, 0x56, 0x6A),
            },
            ColorScheme::Solarized => Self {
                sleep: Color::Rgb(0x93, 0xA1, 0xA1),
                awake_off: Color::Rgb(0x65, 0x7B, 0x83),
                work: Color::Rgb(0x85, 0x99, 0x00),
                marker: Color::Rgb(0xDC, 0x32, 0x2F),
                weekend_tint: Color::Rgb(0x6C, 0x71, 0xC4),
                primary: Color::Rgb(0x26, 0x8B, 0xD2),
                secondary: Color::Rgb(0xD3, 0x36, 0x82),
                success: Color::Rgb(0x85, 0x99, 0x00),
                warning: Color::Rgb(0xB5, 0x89, 0x00),
                error: Color::Rgb(0xDC, 0x32, 0x2F),
                muted: Color::Rgb(0x58, 0x6E, 0x75),
            },
            ColorScheme::SolarizedDark => Self {
                sleep: Color::Rgb(0x07, 0x36, 0x42),
                awake_off: Color::Rgb(0x58, 0x6E, 0x75),
                work: Color::Rgb(0x85, 0x99, 0x00),
                marker: Color::Rgb(0xCB, 0x4B, 0x16),
                weekend_tint: Color::Rgb(0x6C, 0x71, 0xC4),
                primary: Color::Rgb(0x2A, 0xA1, 0x98),
                secondary: Color::Rgb(0xD3, 0x36, 0x82),
                success: Color::Rgb(0x85, 0x99, 0x00),
                warning: Color::Rgb(0xB5, 0x89, 0x00),
                error: Color::Rgb(0xDC, 0x32, 0x2F),
                muted: Color::Rgb(0x83, 0x94, 0x96),
            },
        }
    }

    // ── Styles ───────────────────────────────────────────────────────

    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn prompt(&self) -> Style {
        self.header()
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn offset(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn date(&self) -> Style {
        Style::default()
            .fg(self.muted)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.error)
            .add_modifier(Modifier::BOLD)
    }

    /// Clock and name color for a colleague's availability.
    pub fn status(&self, status: Status) -> Style {
        match status {
            Status::Working => Style::default()
                .fg(self.success)
                .add_modifier(Modifier::BOLD),
            Status::OffHours => Style::default().fg(self.muted),
            Status::Weekend => Style::default().fg(self.weekend_tint),
        }
    }

    pub fn cell(&self, class: CellClass, is_marker: bool) -> Style {
        if is_marker {
            return Style::default()
                .fg(self.marker)
                .add_modifier(Modifier::BOLD);
        }
        let color = match class {
            CellClass::Sleep => self.sleep,
            CellClass::AwakeOff => self.awake_off,
            CellClass::Work => self.work,
            CellClass::WeekendWork => self.weekend_tint,
        };
        Style::default().fg(color)
    }
}
