//! Grid rendering of an application or input list.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::application::services::{AppVisual, InputVisual, ListView, ResourceKind};
use crate::domain::entities::{AppIcon, InputCategory};

const CELL_HEIGHT: u16 = 3;
const SKELETON_CELL: &str = "░░░░░░░░";

/// How one list item is drawn inside its cell.
pub trait CellView {
    fn glyph(&self) -> Span<'static>;
    fn text(&self) -> &str;
}

impl CellView for AppVisual {
    fn glyph(&self) -> Span<'static> {
        match &self.icon {
            AppIcon::Pending(_) => Span::styled("◌", Style::default().fg(Color::DarkGray)),
            AppIcon::Loaded { .. } => Span::styled("▣", Style::default().fg(Color::Cyan)),
            AppIcon::Generic => Span::styled("□", Style::default().fg(Color::Gray)),
        }
    }

    fn text(&self) -> &str {
        &self.title
    }
}

impl CellView for InputVisual {
    fn glyph(&self) -> Span<'static> {
        let (glyph, color) = match self.category {
            InputCategory::Hdmi => ("⎚", Color::Magenta),
            InputCategory::Component => ("◍", Color::Magenta),
            InputCategory::Tv => ("📺", Color::Magenta),
            InputCategory::Generic => ("▭", Color::Gray),
        };
        Span::styled(glyph, Style::default().fg(color))
    }

    fn text(&self) -> &str {
        &self.text
    }
}

pub struct ResourceGrid<'a, K: ResourceKind> {
    view: &'a ListView<K>,
    title: &'a str,
    columns: usize,
    selected: Option<usize>,
    hint: Option<&'a str>,
}

impl<'a, K> ResourceGrid<'a, K>
where
    K: ResourceKind,
    K::Visual: CellView,
{
    #[must_use]
    pub const fn new(view: &'a ListView<K>, title: &'a str, columns: usize) -> Self {
        Self {
            view,
            title,
            columns: if columns == 0 { 1 } else { columns },
            selected: None,
            hint: None,
        }
    }

    /// Highlights `selected` when the grid has focus.
    #[must_use]
    pub const fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// Key hint shown in the border, e.g. the manual load trigger.
    #[must_use]
    pub const fn hint(mut self, hint: Option<&'a str>) -> Self {
        self.hint = hint;
        self
    }

    fn render_cells(
        &self,
        count: usize,
        area: Rect,
        buf: &mut Buffer,
        mut draw: impl FnMut(usize, Rect, &mut Buffer),
    ) {
        let rows = count.div_ceil(self.columns);
        let visible_rows = usize::from(area.height / CELL_HEIGHT).max(1);
        let selected_row = self.selected.map_or(0, |s| s / self.columns);
        let first_row = selected_row.saturating_sub(visible_rows - 1);

        let row_areas =
            Layout::vertical(vec![Constraint::Length(CELL_HEIGHT); visible_rows]).split(area);
        let columns = vec![Constraint::Ratio(1, self.columns as u32); self.columns];

        for (offset, row_area) in row_areas.iter().enumerate() {
            let row = first_row + offset;
            if row >= rows {
                break;
            }
            let cells = Layout::horizontal(columns.clone()).split(*row_area);
            for (column, cell) in cells.iter().enumerate() {
                let index = row * self.columns + column;
                if index < count {
                    draw(index, *cell, buf);
                }
            }
        }
    }
}

impl<K> Widget for ResourceGrid<'_, K>
where
    K: ResourceKind,
    K::Visual: CellView,
{
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.selected.is_some();
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused { Color::Cyan } else { Color::Gray }))
            .title(format!(" {} ", self.title));
        if let Some(hint) = self.hint {
            block = block.title_bottom(Line::from(format!(" {hint} ")).right_aligned());
        }
        let inner = block.inner(area);
        block.render(area, buf);

        match self.view {
            ListView::Idle => message(inner, buf, "Not loaded", Color::DarkGray),
            ListView::Skeleton { placeholders } => {
                self.render_cells(*placeholders, inner, buf, |_, cell, buf| {
                    Paragraph::new(SKELETON_CELL)
                        .style(Style::default().fg(Color::DarkGray))
                        .centered()
                        .block(
                            Block::default()
                                .borders(Borders::ALL)
                                .border_style(Style::default().fg(Color::DarkGray)),
                        )
                        .render(cell, buf);
                });
            }
            ListView::Empty { message: text } => message(inner, buf, text, Color::Gray),
            ListView::Failed { message: text } => {
                message(inner, buf, &format!("{text}. Press o to retry"), Color::Red);
            }
            ListView::Items(controls) => {
                let selected = self.selected;
                self.render_cells(controls.len(), inner, buf, |index, cell, buf| {
                    let control = &controls[index];
                    let loading = control.loading.is_loading();
                    let mut style = Style::default().fg(Color::White);
                    if loading {
                        style = style.fg(Color::Yellow).add_modifier(Modifier::DIM);
                    }
                    if selected == Some(index) {
                        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                    }
                    let mut spans = vec![control.visual.glyph(), Span::raw(" ")];
                    spans.push(Span::raw(control.visual.text().to_string()));
                    if loading {
                        spans.push(Span::raw("…"));
                    }
                    Paragraph::new(Line::from(spans))
                        .style(style)
                        .block(
                            Block::default()
                                .borders(Borders::ALL)
                                .border_type(BorderType::Rounded),
                        )
                        .render(cell, buf);
                });
            }
        }
    }
}

fn message(area: Rect, buf: &mut Buffer, text: &str, color: Color) {
    Paragraph::new(text.to_string())
        .style(Style::default().fg(color))
        .centered()
        .wrap(Wrap { trim: true })
        .render(area, buf);
}
