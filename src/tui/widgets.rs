//! Custom widgets for the TUI

use std::sync::OnceLock;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use regex::Regex;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::Theme;
use crate::console::{Entry, EntryKind};
use crate::profile::Profile;

fn link_pattern() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| Regex::new(r"https?://[^\s)]+").expect("link pattern is valid"))
}

/// Split a line into spans, styling URLs with `link_style`
fn highlight_links(text: &str, base: Style, link_style: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut last = 0;
    for m in link_pattern().find_iter(text) {
        if m.start() > last {
            spans.push(Span::styled(text[last..m.start()].to_string(), base));
        }
        spans.push(Span::styled(m.as_str().to_string(), link_style));
        last = m.end();
    }
    if last < text.len() || spans.is_empty() {
        spans.push(Span::styled(text[last..].to_string(), base));
    }
    spans
}

/// Wrap a long string into multiple lines, respecting unicode width
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 || text.width() <= max_width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for c in text.chars() {
        let char_width = c.width().unwrap_or(1);
        if current_width + char_width > max_width && !current_line.is_empty() {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0;
        }
        current_line.push(c);
        current_width += char_width;
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

/// Render one transcript entry, wrapped to `max_width`, followed by a spacer
pub fn render_entry_lines(entry: &Entry, max_width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let style = match entry.kind() {
        EntryKind::Input => theme.input_entry(),
        EntryKind::Output => theme.output_entry(),
    };

    let mut lines = Vec::new();
    for content_line in entry.text().lines() {
        for wrapped in wrap_text(content_line, max_width) {
            lines.push(Line::from(highlight_links(&wrapped, style, theme.link())));
        }
    }
    if lines.is_empty() {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(""));
    lines
}

/// Panel header: window dots, title, theme indicator
pub struct HeaderBar<'a> {
    pub title: &'a str,
    pub theme: &'a Theme,
    pub minimized: bool,
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let dots = Line::from(vec![
            Span::styled("● ", Style::default().fg(Theme::RED)),
            Span::styled("● ", Style::default().fg(Theme::YELLOW)),
            Span::styled("●", Style::default().fg(Theme::GREEN)),
        ]);
        buf.set_line(area.x + 1, area.y, &dots, area.width.saturating_sub(2));

        let title = Line::from(Span::styled(self.title, self.theme.muted()))
            .alignment(Alignment::Center);
        title.render(area, buf);

        let hint = format!(
            "{} {} ",
            self.theme.indicator(),
            if self.minimized { "▢" } else { "─" }
        );
        let hint_len = hint.width() as u16;
        let hint_x = area.x + area.width.saturating_sub(hint_len + 1);
        buf.set_span(hint_x, area.y, &Span::styled(hint, self.theme.muted()), hint_len + 1);
    }
}

/// Single-line command input with a `$` prompt
pub struct InputBox<'a> {
    pub content: &'a str,
    pub theme: &'a Theme,
}

/// Columns taken by the prompt before the input text
pub const PROMPT_WIDTH: u16 = 2;

impl Widget for InputBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let body = if self.content.is_empty() {
            Span::styled("Type a command...", self.theme.muted().add_modifier(Modifier::DIM))
        } else {
            Span::styled(self.content, self.theme.text())
        };
        let line = Line::from(vec![Span::styled("$ ", self.theme.prompt()), body]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

/// Help bar showing key bindings
pub struct HelpBar<'a> {
    pub theme: &'a Theme,
    pub bindings: &'a [(&'a str, &'a str)],
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, desc)) in self.bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", self.theme.muted()));
            }
            spans.push(Span::styled(*key, self.theme.key()));
            spans.push(Span::styled(format!(" {}", desc), self.theme.key_desc()));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

/// Backdrop shown behind the panel: the profile hero and the launcher badge
pub struct Launcher<'a> {
    pub profile: &'a Profile,
    pub theme: &'a Theme,
    /// Alternates the badge emphasis
    pub pulse: bool,
    /// Whether the badge is shown (hidden while the panel is up)
    pub show_badge: bool,
}

impl Widget for Launcher<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let profile = self.profile;

        let hero = vec![
            Line::from(""),
            Line::styled(profile.name, theme.title()),
            Line::styled(profile.role, theme.accent()),
            Line::from(""),
            Line::styled(profile.location, theme.muted()),
            Line::from(vec![
                Span::styled(profile.github, theme.link()),
                Span::styled("  ", theme.muted()),
                Span::styled(profile.linkedin, theme.link()),
            ]),
        ];
        let top = area.height.saturating_sub(hero.len() as u16) / 3;
        let hero_area = Rect {
            y: area.y + top,
            height: area.height.saturating_sub(top),
            ..area
        };
        Paragraph::new(hero)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(hero_area, buf);

        if !self.show_badge || area.height < 3 {
            return;
        }

        let badge_style = if self.pulse {
            theme.badge()
        } else {
            theme.badge().add_modifier(Modifier::DIM)
        };
        let badge = " >_ Enter ";
        let badge_len = badge.width() as u16;
        let x = area.x + area.width.saturating_sub(badge_len + 2);
        let y = area.y + area.height.saturating_sub(2);
        buf.set_span(x, y, &Span::styled(badge, badge_style), badge_len);
    }
}
