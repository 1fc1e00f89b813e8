//! Color theme for the TUI - ANSI colors picked per light/dark preference

use ratatui::style::{Color, Modifier, Style};

use crate::preferences::ThemePreference;

/// Palette derived from the theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    mode: ThemePreference,
}

impl Theme {
    pub const RED: Color = Color::Red;
    pub const YELLOW: Color = Color::Yellow;
    pub const GREEN: Color = Color::Green;

    pub fn new(mode: ThemePreference) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ThemePreference {
        self.mode
    }

    fn primary(&self) -> Color {
        match self.mode {
            ThemePreference::Dark => Color::Green,
            ThemePreference::Light => Color::Blue,
        }
    }

    fn foreground(&self) -> Color {
        match self.mode {
            ThemePreference::Dark => Color::White,
            ThemePreference::Light => Color::Black,
        }
    }

    fn muted_color(&self) -> Color {
        match self.mode {
            ThemePreference::Dark => Color::Gray,
            ThemePreference::Light => Color::DarkGray,
        }
    }

    // Semantic styles
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary())
            .add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.foreground())
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.primary())
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted_color())
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(Self::YELLOW)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(Self::RED)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.muted_color())
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.primary())
    }

    // Transcript entries
    pub fn input_entry(&self) -> Style {
        Style::default()
            .fg(self.primary())
            .add_modifier(Modifier::BOLD)
    }

    pub fn output_entry(&self) -> Style {
        self.muted()
    }

    pub fn link(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn prompt(&self) -> Style {
        self.accent().add_modifier(Modifier::BOLD)
    }

    pub fn badge(&self) -> Style {
        Style::default()
            .bg(self.primary())
            .fg(match self.mode {
                ThemePreference::Dark => Color::Black,
                ThemePreference::Light => Color::White,
            })
            .add_modifier(Modifier::BOLD)
    }

    // Key hints
    pub fn key(&self) -> Style {
        self.accent().add_modifier(Modifier::BOLD)
    }

    pub fn key_desc(&self) -> Style {
        self.muted()
    }

    /// Moon for dark, sun for light
    pub fn indicator(&self) -> &'static str {
        match self.mode {
            ThemePreference::Dark => "☾",
            ThemePreference::Light => "☀",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemePreference::default())
    }
}
