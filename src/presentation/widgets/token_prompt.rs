//! Modal prompt for sending a raw IRCC token.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use tui_textarea::{CursorMove, TextArea};

use crate::domain::entities::RemoteCommand;

const PROMPT_WIDTH: u16 = 50;
const PLACEHOLDER: &str = "AAAAAQAAAAEAAAAVAw==";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Key handled, prompt stays open.
    Consumed,
    Cancel,
    Submit(RemoteCommand),
}

/// Single-line token editor.
pub struct TokenPrompt<'a> {
    textarea: TextArea<'a>,
}

impl Default for TokenPrompt<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenPrompt<'_> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            textarea: TextArea::default(),
        }
    }

    #[must_use]
    pub fn value(&self) -> String {
        self.textarea.lines().join("")
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PromptOutcome {
        match key.code {
            KeyCode::Esc => PromptOutcome::Cancel,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                PromptOutcome::Cancel
            }
            KeyCode::Enter => match RemoteCommand::new(self.value()) {
                Some(command) => PromptOutcome::Submit(command),
                None => PromptOutcome::Consumed,
            },
            KeyCode::Char(c) => {
                self.textarea.insert_char(c);
                PromptOutcome::Consumed
            }
            KeyCode::Backspace => {
                self.textarea.delete_char();
                PromptOutcome::Consumed
            }
            KeyCode::Delete => {
                self.textarea.delete_next_char();
                PromptOutcome::Consumed
            }
            KeyCode::Left => {
                self.textarea.move_cursor(CursorMove::Back);
                PromptOutcome::Consumed
            }
            KeyCode::Right => {
                self.textarea.move_cursor(CursorMove::Forward);
                PromptOutcome::Consumed
            }
            KeyCode::Home => {
                self.textarea.move_cursor(CursorMove::Head);
                PromptOutcome::Consumed
            }
            KeyCode::End => {
                self.textarea.move_cursor(CursorMove::End);
                PromptOutcome::Consumed
            }
            _ => PromptOutcome::Consumed,
        }
    }
}

impl Widget for &TokenPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = PROMPT_WIDTH.min(area.width);
        let popup = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + area.height.saturating_sub(3) / 2,
            width,
            3.min(area.height),
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Send IRCC token ")
            .title_bottom(Line::from(" ⏎ send · esc cancel ").right_aligned());

        let value = self.value();
        let (_, cursor_col) = self.textarea.cursor();
        let line = if value.is_empty() {
            Line::from(vec![
                Span::styled(" ", Style::default().bg(Color::White)),
                Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)),
            ])
        } else {
            let split = value
                .char_indices()
                .nth(cursor_col)
                .map_or(value.len(), |(i, _)| i);
            let (before, after) = value.split_at(split);
            let mut rest = after.chars();
            let under_cursor = rest.next().map_or_else(|| " ".to_string(), String::from);
            Line::from(vec![
                Span::raw(before.to_string()),
                Span::styled(under_cursor, Style::default().bg(Color::White).fg(Color::Black)),
                Span::raw(rest.as_str().to_string()),
            ])
        };

        Clear.render(popup, buf);
        Paragraph::new(line).block(block).render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    fn type_text(prompt: &mut TokenPrompt<'_>, text: &str) {
        for c in text.chars() {
            prompt.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_submit_typed_token() {
        let mut prompt = TokenPrompt::new();
        type_text(&mut prompt, "AAAAAQAAAAEAAAAVAw==");

        let outcome = prompt.handle_key(key(KeyCode::Enter));

        assert_eq!(
            outcome,
            PromptOutcome::Submit(RemoteCommand::new("AAAAAQAAAAEAAAAVAw==").unwrap())
        );
    }

    #[test]
    fn test_blank_token_is_not_submitted() {
        let mut prompt = TokenPrompt::new();
        type_text(&mut prompt, "   ");
        assert_eq!(prompt.handle_key(key(KeyCode::Enter)), PromptOutcome::Consumed);
    }

    #[test]
    fn test_editing_keys() {
        let mut prompt = TokenPrompt::new();
        type_text(&mut prompt, "abd");
        prompt.handle_key(key(KeyCode::Left));
        prompt.handle_key(key(KeyCode::Char('c')));
        prompt.handle_key(key(KeyCode::End));
        prompt.handle_key(key(KeyCode::Backspace));

        assert_eq!(prompt.value(), "abc");
    }

    #[test]
    fn test_arrows_and_space_stay_in_the_field() {
        let mut prompt = TokenPrompt::new();
        assert_eq!(prompt.handle_key(key(KeyCode::Up)), PromptOutcome::Consumed);
        assert_eq!(prompt.handle_key(key(KeyCode::Char(' '))), PromptOutcome::Consumed);
        assert_eq!(prompt.value(), " ");
    }

    #[test]
    fn test_escape_cancels() {
        let mut prompt = TokenPrompt::new();
        assert_eq!(prompt.handle_key(key(KeyCode::Esc)), PromptOutcome::Cancel);
    }
}
