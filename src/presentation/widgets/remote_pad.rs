//! On-screen remote pad.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::domain::entities::LoadingFlag;
use crate::domain::remote_pad::{PAD_BUTTONS, PAD_COLUMNS, PadButton};

/// Per-button loading flags plus the selected button.
#[derive(Debug, Clone)]
pub struct RemotePadState {
    flags: Vec<LoadingFlag>,
}

impl Default for RemotePadState {
    fn default() -> Self {
        Self::new()
    }
}

impl RemotePadState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            flags: PAD_BUTTONS.iter().map(|_| LoadingFlag::new()).collect(),
        }
    }

    /// Button and its flag at `index`.
    #[must_use]
    pub fn button(&self, index: usize) -> Option<(&'static PadButton, &LoadingFlag)> {
        Some((PAD_BUTTONS.get(index)?, self.flags.get(index)?))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        PAD_BUTTONS.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        PAD_BUTTONS.is_empty()
    }
}

pub struct RemotePad<'a> {
    state: &'a RemotePadState,
    selected: Option<usize>,
}

impl<'a> RemotePad<'a> {
    #[must_use]
    pub const fn new(state: &'a RemotePadState) -> Self {
        Self {
            state,
            selected: None,
        }
    }

    /// Highlights `selected` when the pad has focus.
    #[must_use]
    pub const fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for RemotePad<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.selected.is_some();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused { Color::Cyan } else { Color::Gray }))
            .title(" Remote ");
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = PAD_BUTTONS.len().div_ceil(PAD_COLUMNS);
        let row_areas = Layout::vertical(vec![Constraint::Length(3); rows]).split(inner);
        let columns = vec![Constraint::Ratio(1, PAD_COLUMNS as u32); PAD_COLUMNS];

        for (row, row_area) in row_areas.iter().enumerate() {
            let cells = Layout::horizontal(columns.clone()).split(*row_area);
            for (column, cell) in cells.iter().enumerate() {
                let index = row * PAD_COLUMNS + column;
                let Some((button, flag)) = self.state.button(index) else {
                    continue;
                };
                render_button(
                    button.label,
                    self.selected == Some(index),
                    flag.is_loading(),
                    *cell,
                    buf,
                );
            }
        }
    }
}

fn render_button(label: &str, selected: bool, loading: bool, area: Rect, buf: &mut Buffer) {
    let mut style = Style::default().fg(Color::White);
    if loading {
        style = style.fg(Color::Yellow).add_modifier(Modifier::DIM);
    }
    if selected {
        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }

    let text = if loading { format!("{label}…") } else { label.to_string() };

    Paragraph::new(text)
        .style(style)
        .centered()
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded))
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ControlHandle;

    #[test]
    fn test_one_flag_per_button() {
        let state = RemotePadState::new();
        assert_eq!(state.len(), PAD_BUTTONS.len());
        assert!(state.button(state.len()).is_none());
    }

    #[test]
    fn test_flags_are_independent() {
        let state = RemotePadState::new();
        let (_, first) = state.button(0).unwrap();
        first.set_loading(true);

        assert!(state.button(0).unwrap().1.is_loading());
        assert!(!state.button(1).unwrap().1.is_loading());
    }

    #[test]
    fn test_renders_labels() {
        let state = RemotePadState::new();
        let area = Rect::new(0, 0, 48, 14);
        let mut buf = Buffer::empty(area);

        RemotePad::new(&state).selected(Some(0)).render(area, &mut buf);

        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Power"));
        assert!(content.contains("OK"));
    }
}
