//! Help overlay widget showing keyboard shortcuts.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::{centered_rect, theme::Theme};

/// Help overlay showing all keyboard shortcuts
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        HelpOverlay { theme }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        // Center the help popup
        let popup_area = centered_rect(60, 70, area);

        // Clear the background
        frame.render_widget(Clear, popup_area);

        const DESCRIPTION: &str = "A terminal dashboard for recording daily water intake and hours of sleep. Press a shortcut on the chart view to add today's entry; values are charted by day of week.";

        let shortcuts = [
            (
                "Recording",
                vec![
                    ("w", "Record water drunk today"),
                    ("s", "Record hours slept today"),
                ],
            ),
            (
                "Entry dialog",
                vec![
                    ("Enter", "Confirm the entry"),
                    ("Esc", "Cancel without recording"),
                    ("Backspace", "Erase the last character"),
                ],
            ),
            (
                "General",
                vec![("h / ?", "Toggle this help"), ("q", "Quit")],
            ),
        ];

        let mut lines: Vec<Line> = Vec::new();

        // Add description as a single wrapped line
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {DESCRIPTION}"),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));

        // Add keyboard shortcuts sections
        for (section, items) in shortcuts {
            lines.push(Line::from(Span::styled(
                format!("  {section} "),
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::UNDERLINED),
            )));
            lines.push(Line::from(""));

            for (key, desc) in items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("{key:<14}"),
                        Style::default().fg(self.theme.title),
                    ),
                    Span::raw(desc),
                ]));
            }
            lines.push(Line::from(""));
        }

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Personal Tracker Help ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(self.theme.border_style())
                    .title_style(self.theme.title_style()),
            )
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, popup_area);
    }
}
