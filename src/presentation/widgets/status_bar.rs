//! Live device status indicator.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::application::services::LiveStatus;

const POWER_GLYPH: &str = "●";
const VOLUME_GLYPH: &str = "🔊";
const MUTED_GLYPH: &str = "🔇";

/// Render model of the status indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceStatusView {
    pub power_label: &'static str,
    pub power_color: Color,
    pub volume_glyph: &'static str,
    pub volume_color: Color,
    /// `None` until the first state frame arrives.
    pub volume: Option<i64>,
}

impl DeviceStatusView {
    /// Built from the last device state only. The channel state is never
    /// shown; a dropped channel just stops the updates.
    #[must_use]
    pub fn from_status(status: &LiveStatus) -> Self {
        let Some(state) = &status.state else {
            return Self {
                power_label: "--",
                power_color: Color::DarkGray,
                volume_glyph: VOLUME_GLYPH,
                volume_color: Color::DarkGray,
                volume: None,
            };
        };

        let (power_label, power_color) = if state.power_status.is_on() {
            ("ON", Color::Green)
        } else {
            ("OFF", Color::Gray)
        };
        let (volume_glyph, volume_color) = if state.muted {
            (MUTED_GLYPH, Color::Red)
        } else {
            (VOLUME_GLYPH, Color::White)
        };

        Self {
            power_label,
            power_color,
            volume_glyph,
            volume_color,
            volume: Some(state.volume),
        }
    }
}

/// Status bar showing power and volume.
pub struct StatusBar<'a> {
    view: &'a DeviceStatusView,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(view: &'a DeviceStatusView) -> Self {
        Self { view }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold = Modifier::BOLD;
        let volume = self
            .view
            .volume
            .map_or_else(|| "--".to_string(), |v| v.to_string());

        let line = Line::from(vec![
            Span::styled(
                format!("{POWER_GLYPH} {}", self.view.power_label),
                Style::default().fg(self.view.power_color).add_modifier(bold),
            ),
            Span::raw("   "),
            Span::styled(
                format!("{} {volume}", self.view.volume_glyph),
                Style::default().fg(self.view.volume_color).add_modifier(bold),
            ),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::LiveStateEvent;
    use crate::domain::entities::PowerStatus;
    use crate::domain::{ConnectionState, DeviceState};
    use test_case::test_case;

    fn status(power_status: PowerStatus, muted: bool, volume: i64) -> LiveStatus {
        LiveStatus {
            state: Some(DeviceState {
                power_status,
                muted,
                volume,
            }),
            connection: ConnectionState::Open,
        }
    }

    #[test_case(PowerStatus::Active, "ON", Color::Green ; "active")]
    #[test_case(PowerStatus::Standby, "OFF", Color::Gray ; "standby")]
    #[test_case(PowerStatus::Unknown, "OFF", Color::Gray ; "unknown")]
    fn test_power_indicator(power: PowerStatus, label: &str, color: Color) {
        let view = DeviceStatusView::from_status(&status(power, false, 10));
        assert_eq!(view.power_label, label);
        assert_eq!(view.power_color, color);
    }

    #[test]
    fn test_muted_volume_is_red_with_muted_glyph() {
        let view = DeviceStatusView::from_status(&status(PowerStatus::Active, true, 22));
        assert_eq!(view.volume_color, Color::Red);
        assert_eq!(view.volume_glyph, MUTED_GLYPH);
        assert_eq!(view.volume, Some(22));
    }

    #[test]
    fn test_unmuted_volume() {
        let view = DeviceStatusView::from_status(&status(PowerStatus::Active, false, 5));
        assert_eq!(view.volume_color, Color::White);
        assert_eq!(view.volume_glyph, VOLUME_GLYPH);
    }

    #[test]
    fn test_no_state_yet() {
        let view = DeviceStatusView::from_status(&LiveStatus::default());
        assert_eq!(view.volume, None);
        assert_eq!(view.power_label, "--");
    }

    #[test]
    fn test_renders_volume_number() {
        let view = DeviceStatusView::from_status(&status(PowerStatus::Active, false, 42));
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);

        StatusBar::new(&view).render(area, &mut buf);

        let text: String = (0..area.width).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(text.contains("ON"));
        assert!(text.contains("42"));
    }

    fn render(status: &LiveStatus) -> Buffer {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new(&DeviceStatusView::from_status(status)).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_channel_drop_leaves_status_unchanged() {
        let mut live = LiveStatus::default();
        live.apply(LiveStateEvent::Connection(ConnectionState::Open));
        live.apply(LiveStateEvent::State(DeviceState {
            power_status: PowerStatus::Active,
            muted: false,
            volume: 10,
        }));
        let before = render(&live);

        live.apply(LiveStateEvent::Connection(ConnectionState::ClosedPendingRetry));
        assert_eq!(render(&live), before);

        live.apply(LiveStateEvent::Connection(ConnectionState::Connecting));
        assert_eq!(render(&live), before);
    }
}
