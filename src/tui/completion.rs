//! Command completion popup
//!
//! Tab lists the command names that start with what has been typed so far.
//! Completion only edits the input line; lookup stays exact-match.

use ratatui::{
    layout::Rect,
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::theme::Theme;
use crate::console::complete;

/// Completion popup state
#[derive(Debug, Clone, Default)]
pub struct CommandPopup {
    /// Whether the popup is visible
    pub visible: bool,
    /// Current filter prefix
    pub filter: String,
    /// Matched (name, description) pairs
    pub matches: Vec<(&'static str, &'static str)>,
    /// Selected index
    pub selected: usize,
}

impl CommandPopup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, filter: &str) {
        self.visible = true;
        self.selected = 0;
        self.set_filter(filter);
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.filter.clear();
        self.matches.clear();
        self.selected = 0;
    }

    /// Update filter and refresh matches
    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.trim().to_string();
        self.matches = complete(&self.filter);
        if self.selected >= self.matches.len() {
            self.selected = 0;
        }
    }

    pub fn select_prev(&mut self) {
        let total = self.matches.len();
        if total > 0 {
            self.selected = if self.selected == 0 {
                total - 1
            } else {
                self.selected - 1
            };
        }
    }

    pub fn select_next(&mut self) {
        let total = self.matches.len();
        if total > 0 {
            self.selected = (self.selected + 1) % total;
        }
    }

    /// Name under the selection
    pub fn complete(&self) -> Option<&'static str> {
        self.matches.get(self.selected).map(|(name, _)| *name)
    }

    /// The only match, when exactly one remains
    pub fn single_match(&self) -> Option<&'static str> {
        match self.matches.as_slice() {
            [(name, _)] => Some(*name),
            _ => None,
        }
    }

    /// Draw above `input_area`
    pub fn render(&self, f: &mut Frame, input_area: Rect, theme: &Theme) {
        let popup_height = (self.matches.len() as u16 + 2).min(12);
        let popup_width = 44.min(input_area.width.saturating_sub(2));

        let popup_area = Rect {
            x: input_area.x + 1,
            y: input_area.y.saturating_sub(popup_height),
            width: popup_width,
            height: popup_height,
        };

        f.render_widget(Clear, popup_area);

        let lines: Vec<Line> = if self.matches.is_empty() {
            vec![Line::styled("  no matching command", theme.muted())]
        } else {
            self.matches
                .iter()
                .enumerate()
                .map(|(i, (name, desc))| {
                    let selected = i == self.selected;
                    let style = if selected { theme.accent() } else { theme.text() };
                    Line::from(vec![
                        Span::styled(if selected { "▸ " } else { "  " }, style),
                        Span::styled(*name, style.bold()),
                        Span::styled(format!(" - {}", desc), theme.muted()),
                    ])
                })
                .collect()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent())
            .title_top(Line::styled(" Commands (Tab) ", theme.title()));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, popup_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_filters_by_prefix() {
        let mut popup = CommandPopup::new();
        popup.open("s");
        assert!(popup.visible);
        let names: Vec<&str> = popup.matches.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["skills", "socials"]);
        assert_eq!(popup.single_match(), None);
    }

    #[test]
    fn test_selection_wraps() {
        let mut popup = CommandPopup::new();
        popup.open("s");
        popup.select_prev();
        assert_eq!(popup.complete(), Some("socials"));
        popup.select_next();
        assert_eq!(popup.complete(), Some("skills"));
    }

    #[test]
    fn test_single_match_and_close() {
        let mut popup = CommandPopup::new();
        popup.open("pro");
        assert_eq!(popup.single_match(), Some("projects"));
        popup.close();
        assert!(!popup.visible);
        assert!(popup.matches.is_empty());
    }

    #[test]
    fn test_no_match_keeps_selection_in_range() {
        let mut popup = CommandPopup::new();
        popup.open("");
        popup.select_prev();
        popup.set_filter("zzz");
        assert_eq!(popup.selected, 0);
        assert_eq!(popup.complete(), None);
    }
}
