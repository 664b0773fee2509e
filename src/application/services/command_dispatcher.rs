//! Fire-and-forget remote commands with optimistic feedback.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::time::sleep;
use tracing::{debug, error};

use super::api_gateway::{ApiGateway, RequestOptions};
use crate::domain::entities::{DeviceAction, RemoteCommand};
use crate::domain::errors::RequestError;
use crate::domain::ports::ControlHandle;

/// Route for IRCC key presses, relative to the API base.
pub const COMMAND_ENDPOINT: &str = "/ircc/send";

/// How long a successful control keeps its loading state, so the feedback is
/// perceptible.
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(300);

/// Result of a fire-and-forget operation. Failures were already reported to
/// the user by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Delivered,
    Failed(RequestError),
}

impl ActionOutcome {
    #[must_use]
    pub const fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

#[derive(Serialize)]
struct CommandBody<'a> {
    command: &'a str,
}

pub struct CommandDispatcher {
    gateway: Arc<ApiGateway>,
}

impl CommandDispatcher {
    #[must_use]
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// Sends `command`. Without a source control no visual feedback is given.
    pub async fn dispatch(
        &self,
        command: &RemoteCommand,
        source: Option<&dyn ControlHandle>,
    ) -> ActionOutcome {
        debug!(command = %command, "Dispatching remote command");

        let options = match RequestOptions::post(&CommandBody {
            command: command.as_str(),
        }) {
            Ok(options) => options,
            Err(e) => return ActionOutcome::Failed(e),
        };

        let outcome = with_feedback(source, FEEDBACK_DELAY, async {
            self.gateway.call(COMMAND_ENDPOINT, options).await.map(drop)
        })
        .await;

        if let ActionOutcome::Failed(e) = &outcome {
            error!(command = %command, error = %e, "Failed to send remote command");
        }
        outcome
    }

    /// Runs a device action through its dedicated route.
    pub async fn perform(
        &self,
        action: DeviceAction,
        source: Option<&dyn ControlHandle>,
    ) -> ActionOutcome {
        debug!(action = action.label(), "Performing device action");

        let outcome = with_feedback(source, FEEDBACK_DELAY, async {
            self.gateway
                .call(action.endpoint(), RequestOptions::post_empty())
                .await
                .map(drop)
        })
        .await;

        if let ActionOutcome::Failed(e) = &outcome {
            error!(action = action.label(), error = %e, "Failed to perform device action");
        }
        outcome
    }
}

/// Marks `source` as loading while `operation` runs. The mark is cleared after
/// `delay` on success and immediately on failure.
pub(crate) async fn with_feedback<F>(
    source: Option<&dyn ControlHandle>,
    delay: Duration,
    operation: F,
) -> ActionOutcome
where
    F: Future<Output = Result<(), RequestError>>,
{
    if let Some(control) = source {
        control.set_loading(true);
    }

    match operation.await {
        Ok(()) => {
            if let Some(control) = source {
                sleep(delay).await;
                control.set_loading(false);
            }
            ActionOutcome::Delivered
        }
        Err(e) => {
            if let Some(control) = source {
                control.set_loading(false);
            }
            ActionOutcome::Failed(e)
        }
    }
}
