//! Launchable applications and input sources.

use serde::Deserialize;

/// List payload returned by the remote server.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
}

/// Application installed on the television.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppEntry {
    pub title: String,
    pub uri: String,
    #[serde(default, deserialize_with = "crate::domain::serde_utils::empty_string_as_none")]
    pub icon: Option<String>,
}

/// External input terminal (HDMI port, tuner, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InputEntry {
    pub title: String,
    #[serde(default, deserialize_with = "crate::domain::serde_utils::empty_string_as_none")]
    pub label: Option<String>,
    pub uri: String,
}

impl InputEntry {
    /// Title followed by the user label in parentheses, when one is set.
    #[must_use]
    pub fn display_text(&self) -> String {
        match &self.label {
            Some(label) => format!("{} ({label})", self.title),
            None => self.title.clone(),
        }
    }

    #[must_use]
    pub fn category(&self) -> InputCategory {
        InputCategory::from_title(&self.title)
    }
}

/// Icon variant shown next to an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputCategory {
    Hdmi,
    Component,
    Tv,
    Generic,
}

impl InputCategory {
    /// Picks the category by keyword, first match wins: hdmi, component or
    /// composite, tv.
    #[must_use]
    pub fn from_title(title: &str) -> Self {
        let title = title.to_lowercase();

        if title.contains("hdmi") {
            Self::Hdmi
        } else if title.contains("component") || title.contains("composite") {
            Self::Component
        } else if title.contains("tv") {
            Self::Tv
        } else {
            Self::Generic
        }
    }
}

/// Resolution state of an application icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppIcon {
    /// URL supplied, not yet fetched.
    Pending(String),
    /// Fetched and decoded.
    Loaded { url: String, width: u32, height: u32 },
    /// Built-in icon, used when no URL exists or the URL failed.
    Generic,
}

impl AppIcon {
    #[must_use]
    pub fn for_entry(entry: &AppEntry) -> Self {
        entry
            .icon
            .as_ref()
            .map_or(Self::Generic, |url| Self::Pending(url.clone()))
    }

    #[must_use]
    pub fn pending_url(&self) -> Option<&str> {
        match self {
            Self::Pending(url) => Some(url),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_generic(&self) -> bool {
        matches!(self, Self::Generic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("HDMI 1", InputCategory::Hdmi ; "hdmi_upper")]
    #[test_case("hdmi 2/ARC", InputCategory::Hdmi ; "hdmi_lower")]
    #[test_case("HDMI TV Box", InputCategory::Hdmi ; "hdmi_beats_tv")]
    #[test_case("Component", InputCategory::Component ; "component")]
    #[test_case("Composite Video", InputCategory::Component ; "composite")]
    #[test_case("Composite TV", InputCategory::Component ; "composite_beats_tv")]
    #[test_case("TV", InputCategory::Tv ; "tv")]
    #[test_case("Antenna", InputCategory::Generic ; "generic")]
    #[test_case("", InputCategory::Generic ; "empty")]
    fn test_input_category(title: &str, expected: InputCategory) {
        assert_eq!(InputCategory::from_title(title), expected);
    }

    #[test]
    fn test_display_text_with_label() {
        let input = InputEntry {
            title: "HDMI 1".to_string(),
            label: Some("PlayStation".to_string()),
            uri: "extInput:hdmi?port=1".to_string(),
        };
        assert_eq!(input.display_text(), "HDMI 1 (PlayStation)");
    }

    #[test]
    fn test_display_text_without_label() {
        let json = r#"{"title": "HDMI 2", "label": "", "uri": "extInput:hdmi?port=2"}"#;
        let input: InputEntry = serde_json::from_str(json).unwrap();
        assert_eq!(input.label, None);
        assert_eq!(input.display_text(), "HDMI 2");
    }

    #[test]
    fn test_app_icon_starts_pending_or_generic() {
        let with_icon: AppEntry = serde_json::from_str(
            r#"{"title": "Netflix", "uri": "netflix", "icon": "http://tv/netflix.png"}"#,
        )
        .unwrap();
        let without_icon: AppEntry =
            serde_json::from_str(r#"{"title": "Settings", "uri": "com.sony.dtv.settings"}"#)
                .unwrap();

        assert_eq!(
            AppIcon::for_entry(&with_icon).pending_url(),
            Some("http://tv/netflix.png")
        );
        assert!(AppIcon::for_entry(&without_icon).is_generic());
    }

    #[test]
    fn test_list_response_parses_data() {
        let json = r#"{"success": true, "data": [{"title": "TV", "uri": "tv:dvbt"}]}"#;
        let response: ListResponse<InputEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].category(), InputCategory::Tv);
    }
}
