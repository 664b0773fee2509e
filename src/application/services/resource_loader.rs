//! Fetch-and-render pipeline for the application and input lists.
//!
//! Loading is split in three steps so the network part can run as a task
//! while the view is only touched by its owner: [`ResourceLoader::begin_load`]
//! shows the skeleton and issues a sequence number, [`LoadRequest::run`]
//! fetches, and [`ResourceLoader::apply`] renders the outcome if it belongs to
//! the latest request.

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error, info};

use super::api_gateway::{ApiGateway, RequestOptions};
use super::command_dispatcher::{ActionOutcome, FEEDBACK_DELAY, with_feedback};
use super::resource_kinds::{Apps, ResourceKind};
use crate::domain::NotificationKind;
use crate::domain::entities::{AppIcon, ListResponse, LoadingFlag};
use crate::domain::errors::{IconError, RequestError};
use crate::domain::ports::IconDimensions;

/// Placeholder count shown while a list is loading.
pub const SKELETON_PLACEHOLDERS: usize = 6;

/// One interactive control in a rendered list.
#[derive(Debug, Clone)]
pub struct ResourceControl<K: ResourceKind> {
    pub item: K::Item,
    pub visual: K::Visual,
    pub loading: LoadingFlag,
}

/// Everything a list container can show.
#[derive(Debug, Clone)]
pub enum ListView<K: ResourceKind> {
    /// Never loaded.
    Idle,
    Skeleton { placeholders: usize },
    Empty { message: String },
    Items(Vec<ResourceControl<K>>),
    /// Load failed; a retry affordance is offered.
    Failed { message: String },
}

/// Fetch half of a load, detached from the view.
pub struct LoadRequest<K: ResourceKind> {
    seq: u64,
    gateway: Arc<ApiGateway>,
    kind: PhantomData<K>,
}

impl<K: ResourceKind> LoadRequest<K> {
    #[must_use]
    pub const fn seq(&self) -> u64 {
        self.seq
    }

    pub async fn run(self) -> LoadOutcome<K> {
        debug!(resource = K::PLURAL, seq = self.seq, "Fetching resource list");

        let result = self
            .gateway
            .call_as::<ListResponse<K::Item>>(K::LIST_ENDPOINT, RequestOptions::get())
            .await
            .map(|response| response.data);

        LoadOutcome {
            seq: self.seq,
            result,
        }
    }
}

#[derive(Debug)]
pub struct LoadOutcome<K: ResourceKind> {
    pub seq: u64,
    pub result: Result<Vec<K::Item>, RequestError>,
}

/// Selection of one control, detached from the view.
pub struct SelectRequest<K: ResourceKind> {
    item: K::Item,
    loading: LoadingFlag,
    gateway: Arc<ApiGateway>,
}

impl<K: ResourceKind> SelectRequest<K> {
    /// Opens or selects the item. Failures are logged and returned, never
    /// propagated to the list.
    pub async fn run(self) -> ActionOutcome {
        let uri = K::uri(&self.item).to_string();
        let gateway = &self.gateway;
        let item = &self.item;

        let outcome = with_feedback(Some(&self.loading), FEEDBACK_DELAY, async {
            gateway
                .call(K::SELECT_ENDPOINT, RequestOptions::post(&json!({ "uri": uri }))?)
                .await?;
            gateway
                .notifier()
                .notify(&K::selected_message(item), NotificationKind::Success);
            Ok(())
        })
        .await;

        if let ActionOutcome::Failed(e) = &outcome {
            error!(resource = K::PLURAL, uri = %uri, error = %e, "Failed to select item");
        }
        outcome
    }
}

pub struct ResourceLoader<K: ResourceKind> {
    gateway: Arc<ApiGateway>,
    view: ListView<K>,
    latest: u64,
    trigger_visible: bool,
}

impl<K: ResourceKind> ResourceLoader<K> {
    #[must_use]
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            gateway,
            view: ListView::Idle,
            latest: 0,
            trigger_visible: K::HAS_MANUAL_TRIGGER,
        }
    }

    #[must_use]
    pub const fn view(&self) -> &ListView<K> {
        &self.view
    }

    /// Sequence number of the latest issued load.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.latest
    }

    #[must_use]
    pub const fn manual_trigger_visible(&self) -> bool {
        K::HAS_MANUAL_TRIGGER && self.trigger_visible
    }

    #[must_use]
    pub const fn can_retry(&self) -> bool {
        matches!(self.view, ListView::Failed { .. })
    }

    #[must_use]
    pub fn controls(&self) -> &[ResourceControl<K>] {
        match &self.view {
            ListView::Items(controls) => controls,
            _ => &[],
        }
    }

    /// Replaces the list with a skeleton and returns the fetch to run.
    pub fn begin_load(&mut self) -> LoadRequest<K> {
        self.latest += 1;
        self.view = ListView::Skeleton {
            placeholders: SKELETON_PLACEHOLDERS,
        };
        self.trigger_visible = false;

        LoadRequest {
            seq: self.latest,
            gateway: self.gateway.clone(),
            kind: PhantomData,
        }
    }

    /// Renders `outcome`. Outcomes of superseded requests are dropped; returns
    /// whether the view changed.
    pub fn apply(&mut self, outcome: LoadOutcome<K>) -> bool {
        if outcome.seq != self.latest {
            debug!(
                resource = K::PLURAL,
                seq = outcome.seq,
                latest = self.latest,
                "Dropping stale list response"
            );
            return false;
        }

        match outcome.result {
            Ok(items) if items.is_empty() => {
                info!(resource = K::PLURAL, "No items returned");
                self.view = ListView::Empty {
                    message: format!("No {} found", K::PLURAL),
                };
                self.trigger_visible = true;
            }
            Ok(items) => {
                info!(resource = K::PLURAL, count = items.len(), "Loaded list");
                self.gateway.notifier().notify(
                    &format!("Loaded {} {}", items.len(), K::PLURAL),
                    NotificationKind::Success,
                );
                let controls = items
                    .into_iter()
                    .map(|item| ResourceControl {
                        visual: K::render(&item),
                        item,
                        loading: LoadingFlag::new(),
                    })
                    .collect();
                self.view = ListView::Items(controls);
            }
            Err(e) => {
                error!(resource = K::PLURAL, error = %e, "Failed to load list");
                self.view = ListView::Failed {
                    message: format!("Failed to load {}", K::PLURAL),
                };
            }
        }

        true
    }

    /// Loads the list in place.
    pub async fn load(&mut self) {
        let request = self.begin_load();
        let outcome = request.run().await;
        self.apply(outcome);
    }

    /// Prepares the selection of the control at `index`.
    #[must_use]
    pub fn begin_select(&self, index: usize) -> Option<SelectRequest<K>> {
        let control = self.controls().get(index)?;

        Some(SelectRequest {
            item: control.item.clone(),
            loading: control.loading.clone(),
            gateway: self.gateway.clone(),
        })
    }

    /// Selects the control at `index` in place.
    pub async fn select(&self, index: usize) -> Option<ActionOutcome> {
        let request = self.begin_select(index)?;
        Some(request.run().await)
    }
}

impl ResourceLoader<Apps> {
    /// Icons still waiting to be fetched, with their control index.
    #[must_use]
    pub fn pending_icons(&self) -> Vec<(usize, String)> {
        self.controls()
            .iter()
            .enumerate()
            .filter_map(|(index, control)| {
                control
                    .visual
                    .icon
                    .pending_url()
                    .map(|url| (index, url.to_string()))
            })
            .collect()
    }

    /// Records the outcome of an icon fetch. A failed icon turns into the
    /// generic one in the same slot. Returns whether the view changed.
    pub fn resolve_icon(
        &mut self,
        generation: u64,
        index: usize,
        result: Result<IconDimensions, IconError>,
    ) -> bool {
        if generation != self.latest {
            return false;
        }
        let ListView::Items(controls) = &mut self.view else {
            return false;
        };
        let Some(control) = controls.get_mut(index) else {
            return false;
        };
        let Some(url) = control.visual.icon.pending_url().map(str::to_string) else {
            return false;
        };

        control.visual.icon = match result {
            Ok(size) => AppIcon::Loaded {
                url,
                width: size.width,
                height: size.height,
            },
            Err(e) => {
                debug!(url = %url, error = %e, "Icon unavailable, using generic icon");
                AppIcon::Generic
            }
        };
        true
    }
}
