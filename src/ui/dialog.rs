//! Modal entry dialog: state and widget.
//!
//! While a dialog is open it owns the keyboard. Confirmed input is parsed
//! before the dialog closes; rejected input keeps the dialog open with a
//! validation message.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::{centered_rect, theme::Theme};
use crate::data::Quantity;
use crate::tracker::{parse_entry, EntryError};

/// Text-art icons shown above the dialog prompt.
const WATER_ICON: &str = include_str!("../../assets/water.txt");
const SLEEP_ICON: &str = include_str!("../../assets/sleep.txt");

/// Longest input accepted by the entry field.
const MAX_INPUT_LEN: usize = 24;

/// State of an open entry dialog.
#[derive(Debug, Clone)]
pub struct DialogState {
    pub quantity: Quantity,
    input: String,
    error: Option<String>,
}

impl DialogState {
    pub fn new(quantity: Quantity) -> Self {
        DialogState {
            quantity,
            input: String::new(),
            error: None,
        }
    }

    /// Append a typed character to the input buffer.
    pub fn push(&mut self, c: char) {
        if self.input.len() < MAX_INPUT_LEN && !c.is_control() {
            self.input.push(c);
            self.error = None;
        }
    }

    /// Remove the last character.
    pub fn backspace(&mut self) {
        self.input.pop();
        self.error = None;
    }

    /// Current input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Validation message from the last rejected submit.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Try to confirm the dialog. Invalid input stores a validation message
    /// and returns the error, so the caller keeps the dialog open.
    pub fn submit(&mut self) -> Result<f64, EntryError> {
        match parse_entry(&self.input) {
            Ok(value) => Ok(value),
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn icon(&self) -> &'static str {
        match self.quantity {
            Quantity::Sleep => SLEEP_ICON,
            Quantity::Water => WATER_ICON,
        }
    }
}

/// Modal single-field entry prompt.
pub struct InputDialog<'a> {
    state: &'a DialogState,
    theme: &'a Theme,
}

impl<'a> InputDialog<'a> {
    pub fn new(state: &'a DialogState, theme: &'a Theme) -> Self {
        InputDialog { state, theme }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(50, 60, area);

        // Clear the chart underneath the popup
        frame.render_widget(Clear, popup_area);

        let mut lines: Vec<Line> = Vec::new();
        for icon_line in self.state.icon().lines() {
            lines.push(Line::from(Span::styled(
                format!("  {icon_line}"),
                self.theme.title_style(),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(format!("  {}", self.state.quantity.prompt())));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!(" {}█ ", self.state.input()),
                self.theme.input_style(),
            ),
        ]));
        lines.push(Line::from(""));
        match self.state.error() {
            Some(error) => lines.push(Line::from(Span::styled(
                format!("  {error}"),
                self.theme.error_style(),
            ))),
            None => lines.push(Line::from(Span::styled(
                "  [Enter] Confirm   [Esc] Cancel",
                Style::default().add_modifier(Modifier::DIM),
            ))),
        }

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!(" {} ", self.state.quantity.title()))
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(self.theme.title_style())
                    .title_style(self.theme.title_style()),
            )
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, popup_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_builds_input() {
        let mut state = DialogState::new(Quantity::Water);
        for c in "3.5".chars() {
            state.push(c);
        }
        assert_eq!(state.input(), "3.5");
    }

    #[test]
    fn test_backspace_erases_last_character() {
        let mut state = DialogState::new(Quantity::Sleep);
        state.push('7');
        state.push('5');
        state.backspace();
        assert_eq!(state.input(), "7");

        // Backspace on an empty buffer is a no-op.
        state.backspace();
        state.backspace();
        assert_eq!(state.input(), "");
    }

    #[test]
    fn test_control_characters_are_ignored() {
        let mut state = DialogState::new(Quantity::Water);
        state.push('\t');
        state.push('\u{7}');
        assert_eq!(state.input(), "");
    }

    #[test]
    fn test_input_length_is_capped() {
        let mut state = DialogState::new(Quantity::Water);
        for _ in 0..(MAX_INPUT_LEN + 10) {
            state.push('1');
        }
        assert_eq!(state.input().len(), MAX_INPUT_LEN);
    }

    #[test]
    fn test_submit_parses_valid_input() {
        let mut state = DialogState::new(Quantity::Water);
        for c in "3.5".chars() {
            state.push(c);
        }
        assert_eq!(state.submit(), Ok(3.5));
        assert!(state.error().is_none());
    }

    #[test]
    fn test_submit_rejects_garbage_and_keeps_input() {
        let mut state = DialogState::new(Quantity::Sleep);
        for c in "abc".chars() {
            state.push(c);
        }
        assert!(state.submit().is_err());
        assert_eq!(state.input(), "abc");
        assert!(state.error().is_some());
    }

    #[test]
    fn test_editing_clears_validation_message() {
        let mut state = DialogState::new(Quantity::Sleep);
        state.push('x');
        let _ = state.submit();
        assert!(state.error().is_some());

        state.backspace();
        assert!(state.error().is_none());
    }

    #[test]
    fn test_bundled_icons_are_present() {
        assert!(!WATER_ICON.trim().is_empty());
        assert!(!SLEEP_ICON.trim().is_empty());
    }
}
