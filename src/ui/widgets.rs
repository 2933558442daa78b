//! Auxiliary panel widgets for the tracker dashboard.

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::Theme;
use crate::tracker::EntryMode;

/// Status bar widget
pub struct StatusBar<'a> {
    mode: EntryMode,
    message: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(mode: EntryMode, message: Option<&'a str>, theme: &'a Theme) -> Self {
        StatusBar {
            mode,
            message,
            theme,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let text = match self.message {
            Some(m) => m.to_string(),
            None => format!(
                "personal-tracker ({} mode) | [w] Water [s] Sleep [h] Help [q] Quit",
                self.mode
            ),
        };

        let paragraph = Paragraph::new(text).style(self.theme.normal_style()).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(self.theme.border_style()),
        );

        frame.render_widget(paragraph, area);
    }
}
