//! The two list resources: applications and inputs.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::domain::entities::{AppEntry, AppIcon, InputCategory, InputEntry};

/// One homogeneous list handled by [`super::ResourceLoader`].
pub trait ResourceKind: fmt::Debug + Send + Sync + 'static {
    type Item: DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static;
    /// Render model of one control.
    type Visual: Clone + fmt::Debug + Send + Sync + 'static;

    /// Plural noun used in messages ("apps").
    const PLURAL: &'static str;
    const LIST_ENDPOINT: &'static str;
    const SELECT_ENDPOINT: &'static str;
    /// Whether a manual load control exists that hides while loading.
    const HAS_MANUAL_TRIGGER: bool;

    fn uri(item: &Self::Item) -> &str;
    fn render(item: &Self::Item) -> Self::Visual;
    /// Notification shown after a successful selection.
    fn selected_message(item: &Self::Item) -> String;
}

#[derive(Debug, Clone, Copy)]
pub struct Apps;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppVisual {
    pub title: String,
    pub icon: AppIcon,
}

impl ResourceKind for Apps {
    type Item = AppEntry;
    type Visual = AppVisual;

    const PLURAL: &'static str = "apps";
    const LIST_ENDPOINT: &'static str = "/apps";
    const SELECT_ENDPOINT: &'static str = "/apps/open";
    const HAS_MANUAL_TRIGGER: bool = true;

    fn uri(item: &AppEntry) -> &str {
        &item.uri
    }

    fn render(item: &AppEntry) -> AppVisual {
        AppVisual {
            title: item.title.clone(),
            icon: AppIcon::for_entry(item),
        }
    }

    fn selected_message(item: &AppEntry) -> String {
        format!("Opened {}", item.title)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Inputs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputVisual {
    pub text: String,
    pub category: InputCategory,
}

impl ResourceKind for Inputs {
    type Item = InputEntry;
    type Visual = InputVisual;

    const PLURAL: &'static str = "inputs";
    const LIST_ENDPOINT: &'static str = "/inputs";
    const SELECT_ENDPOINT: &'static str = "/inputs/select";
    const HAS_MANUAL_TRIGGER: bool = false;

    fn uri(item: &InputEntry) -> &str {
        &item.uri
    }

    fn render(item: &InputEntry) -> InputVisual {
        InputVisual {
            text: item.display_text(),
            category: item.category(),
        }
    }

    fn selected_message(item: &InputEntry) -> String {
        format!("Selected {}", item.title)
    }
}
