//! Persistent push connection feeding the status indicator.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::domain::ConnectionState;
use crate::domain::entities::{DeviceState, PushFrame};
use crate::domain::errors::StreamError;
use crate::domain::ports::{PushChannel, PushConnector};

/// Fixed wait before reopening a dropped channel.
pub const RECONNECT_DELAY: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveStateConfig {
    pub reconnect_delay: Duration,
}

impl Default for LiveStateConfig {
    fn default() -> Self {
        Self {
            reconnect_delay: RECONNECT_DELAY,
        }
    }
}

impl LiveStateConfig {
    #[must_use]
    pub const fn with_reconnect_delay(mut self, delay: Duration) -> Self {
        self.reconnect_delay = delay;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveStateEvent {
    Connection(ConnectionState),
    State(DeviceState),
}

pub struct LiveStateStream {
    connector: Arc<dyn PushConnector>,
    config: LiveStateConfig,
}

impl LiveStateStream {
    #[must_use]
    pub fn new(connector: Arc<dyn PushConnector>, config: LiveStateConfig) -> Self {
        Self { connector, config }
    }

    /// Starts the connection loop. It runs until the handle is shut down or
    /// dropped.
    #[must_use]
    pub fn connect(&self) -> LiveStateHandle {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let connector = self.connector.clone();
        let delay = self.config.reconnect_delay;

        let task = tokio::spawn(async move {
            run_push_loop(connector, event_tx, delay).await;
        });

        LiveStateHandle {
            events: event_rx,
            task,
        }
    }
}

/// Receiving end of a running [`LiveStateStream`].
pub struct LiveStateHandle {
    events: mpsc::UnboundedReceiver<LiveStateEvent>,
    task: JoinHandle<()>,
}

impl LiveStateHandle {
    /// Next event; `None` once the loop has stopped.
    pub async fn recv(&mut self) -> Option<LiveStateEvent> {
        self.events.recv().await
    }

    pub fn shutdown(&self) {
        self.task.abort();
    }
}

impl Drop for LiveStateHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run_push_loop(
    connector: Arc<dyn PushConnector>,
    event_tx: mpsc::UnboundedSender<LiveStateEvent>,
    delay: Duration,
) {
    loop {
        if event_tx
            .send(LiveStateEvent::Connection(ConnectionState::Connecting))
            .is_err()
        {
            break;
        }

        let error = match connector.open().await {
            Ok(channel) => {
                info!("Push channel open");
                if event_tx
                    .send(LiveStateEvent::Connection(ConnectionState::Open))
                    .is_err()
                {
                    break;
                }
                match read_frames(channel, &event_tx).await {
                    Some(error) => error,
                    None => break,
                }
            }
            Err(e) => e,
        };

        error!(error = %error, "Push channel failed");

        if event_tx
            .send(LiveStateEvent::Connection(ConnectionState::ClosedPendingRetry))
            .is_err()
        {
            break;
        }

        info!(delay_ms = delay.as_millis(), "Reconnecting push channel");
        sleep(delay).await;
    }

    debug!("Push loop terminated");
}

/// Forwards state frames until the channel fails. Frame-level errors are
/// dropped. Returns `None` when the receiver is gone.
async fn read_frames(
    mut channel: Box<dyn PushChannel>,
    event_tx: &mpsc::UnboundedSender<LiveStateEvent>,
) -> Option<StreamError> {
    loop {
        let frame = channel
            .next_frame()
            .await
            .and_then(|text| PushFrame::parse(&text));

        match frame {
            Ok(PushFrame::Handshake) => {}
            Ok(PushFrame::State(state)) => {
                if event_tx.send(LiveStateEvent::State(state)).is_err() {
                    return None;
                }
            }
            Err(e) if e.is_frame_error() => {
                warn!(error = %e, "Dropping malformed push frame");
            }
            Err(e) => return Some(e),
        }
    }
}

/// What the status indicator shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveStatus {
    /// Payload of the last state frame; kept across reconnects.
    pub state: Option<DeviceState>,
    pub connection: ConnectionState,
}

impl LiveStatus {
    pub fn apply(&mut self, event: LiveStateEvent) {
        match event {
            LiveStateEvent::Connection(connection) => self.connection = connection,
            LiveStateEvent::State(state) => self.state = Some(state),
        }
    }
}
