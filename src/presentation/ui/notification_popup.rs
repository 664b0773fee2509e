use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{Notification, NotificationKind};

const MAX_POPUP_WIDTH: u16 = 60;

/// Toast in the top-right corner.
pub struct NotificationPopup<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationPopup<'a> {
    #[must_use]
    pub const fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }

    fn color(&self) -> Color {
        match self.notification.kind {
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
        }
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let message = &self.notification.message;

        let max_popup_width = MAX_POPUP_WIDTH.min(area.width.saturating_sub(2));
        let width = u16::try_from(message.width())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(max_popup_width);

        let inner_width = width.saturating_sub(2).max(1);
        let content_width = u16::try_from(message.width()).unwrap_or(u16::MAX);
        let lines = content_width.div_ceil(inner_width).max(1);
        let height = lines.saturating_add(2).min(8);

        let popup_area = Rect::new(
            area.x + area.width.saturating_sub(width).saturating_sub(1),
            area.y + 1,
            width,
            height,
        );

        let intersection = area.intersection(popup_area);
        if intersection.area() == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(self.color()));

        let para = Paragraph::new(message.as_str())
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().add_modifier(Modifier::BOLD));

        Clear.render(intersection, buf);
        para.render(intersection, buf);
    }
}
