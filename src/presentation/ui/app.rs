//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tokio::sync::mpsc;
use tokio::time::{interval, sleep};
use tracing::{debug, info};

use crate::application::services::{
    ApiGateway, Apps, CommandDispatcher, Inputs, ListView, LiveStateConfig, LiveStateHandle,
    LiveStateStream, LiveStatus, LoadOutcome, NotificationService, ResourceLoader,
};
use crate::domain::entities::{DeviceAction, LoadingFlag, RemoteCommand};
use crate::domain::errors::IconError;
use crate::domain::keybinding::{Action as KeyAction, FocusContext, HELP};
use crate::domain::ports::{ControlHandle, HttpPort, IconDimensions, IconPort, PushConnector};
use crate::domain::remote_pad::PAD_COLUMNS;
use crate::presentation::events::{EventHandler, EventResult, KeyRoute};
use crate::presentation::ui::NotificationPopup;
use crate::presentation::widgets::{
    DeviceStatusView, Direction, GridCursor, PromptOutcome, RemotePad, RemotePadState,
    ResourceGrid, StatusBar, TokenPrompt,
};

const TICK_RATE: Duration = Duration::from_millis(100);
const AUTOLOAD_DELAY: Duration = Duration::from_millis(500);
const APP_COLUMNS: usize = 3;
const INPUT_COLUMNS: usize = 1;
const PAD_WIDTH: u16 = 52;

#[derive(Debug)]
enum Action {
    AppsLoaded(LoadOutcome<Apps>),
    InputsLoaded(LoadOutcome<Inputs>),
    IconResolved {
        generation: u64,
        index: usize,
        result: Result<IconDimensions, IconError>,
    },
    AutoLoadApps,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Panel {
    Pad,
    Apps,
    Inputs,
}

impl Panel {
    const fn next(self) -> Self {
        match self {
            Self::Pad => Self::Apps,
            Self::Apps => Self::Inputs,
            Self::Inputs => Self::Pad,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::Pad => Self::Inputs,
            Self::Apps => Self::Pad,
            Self::Inputs => Self::Apps,
        }
    }
}

pub struct App {
    running: bool,
    focus: Panel,
    dispatcher: Arc<CommandDispatcher>,
    apps: ResourceLoader<Apps>,
    inputs: ResourceLoader<Inputs>,
    icons: Arc<dyn IconPort>,
    notifications: NotificationService,
    live: LiveStateStream,
    status: LiveStatus,
    pad: RemotePadState,
    pad_cursor: GridCursor,
    apps_cursor: GridCursor,
    inputs_cursor: GridCursor,
    prompt: Option<TokenPrompt<'static>>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    autoload_apps: bool,
}

impl App {
    #[must_use]
    pub fn new(
        http: Arc<dyn HttpPort>,
        push: Arc<dyn PushConnector>,
        icons: Arc<dyn IconPort>,
        autoload_apps: bool,
    ) -> Self {
        let notifications = NotificationService::default();
        let gateway = Arc::new(ApiGateway::new(http, Arc::new(notifications.clone())));
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            running: true,
            focus: Panel::Pad,
            dispatcher: Arc::new(CommandDispatcher::new(gateway.clone())),
            apps: ResourceLoader::new(gateway.clone()),
            inputs: ResourceLoader::new(gateway),
            icons,
            notifications,
            live: LiveStateStream::new(push, LiveStateConfig::default()),
            status: LiveStatus::default(),
            pad: RemotePadState::new(),
            pad_cursor: GridCursor::new(PAD_COLUMNS),
            apps_cursor: GridCursor::new(APP_COLUMNS),
            inputs_cursor: GridCursor::new(INPUT_COLUMNS),
            prompt: None,
            action_tx,
            action_rx,
            autoload_apps,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut live = self.live.connect();

        if self.autoload_apps {
            self.schedule_autoload();
        }

        let result = self.run_event_loop(terminal, &mut live).await;

        live.shutdown();
        info!("Application exiting normally");
        result
    }

    async fn run_event_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        live: &mut LiveStateHandle,
    ) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut tick_interval = interval(TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            let terminal_event = terminal_events.next();

            tokio::select! {
                Some(event) = live.recv() => {
                    debug!(?event, "Live state event");
                    self.status.apply(event);
                }

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }

                _ = tick_interval.tick() => {
                    self.notifications.tick();
                }

                Some(Ok(event)) = terminal_event => {
                    if self.handle_event(&event) == EventResult::Exit {
                        self.running = false;
                    }
                }
            }

            terminal.draw(|frame| self.render(frame))?;
        }

        Ok(())
    }

    fn schedule_autoload(&self) {
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            sleep(AUTOLOAD_DELAY).await;
            let _ = tx.send(Action::AutoLoadApps);
        });
    }

    fn focus_context(&self) -> FocusContext {
        if self.prompt.is_some() {
            FocusContext::TextInput
        } else {
            FocusContext::Controls
        }
    }

    fn handle_event(&mut self, event: &Event) -> EventResult {
        match EventHandler::route(event, self.focus_context()) {
            KeyRoute::Remote(command) => self.spawn_command(command, None),
            KeyRoute::Ui(action) => return self.handle_key_action(action),
            KeyRoute::Text(key) => self.handle_prompt_key(key),
            KeyRoute::Ignored => {}
        }
        EventResult::Continue
    }

    fn handle_key_action(&mut self, action: KeyAction) -> EventResult {
        match action {
            KeyAction::Quit => return EventResult::Exit,
            KeyAction::FocusNext => self.focus = self.focus.next(),
            KeyAction::FocusPrevious => self.focus = self.focus.previous(),
            KeyAction::MoveUp => self.move_cursor(Direction::Up),
            KeyAction::MoveDown => self.move_cursor(Direction::Down),
            KeyAction::MoveLeft => self.move_cursor(Direction::Left),
            KeyAction::MoveRight => self.move_cursor(Direction::Right),
            KeyAction::Activate => self.activate_focused(),
            KeyAction::ReloadApps => {
                if self.apps.manual_trigger_visible() || self.apps.can_retry() {
                    self.load_apps();
                } else {
                    debug!("Apps load trigger not available");
                }
            }
            KeyAction::LoadInputs => self.load_inputs(),
            KeyAction::OpenPrompt => self.prompt = Some(TokenPrompt::new()),
            KeyAction::VolumeUp => self.spawn_device_action(DeviceAction::VolumeUp),
            KeyAction::VolumeDown => self.spawn_device_action(DeviceAction::VolumeDown),
            KeyAction::PowerOn => self.spawn_device_action(DeviceAction::PowerOn),
            KeyAction::PowerOff => self.spawn_device_action(DeviceAction::PowerOff),
        }
        EventResult::Continue
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = &mut self.prompt else {
            return;
        };
        match prompt.handle_key(key) {
            PromptOutcome::Consumed => {}
            PromptOutcome::Cancel => self.prompt = None,
            PromptOutcome::Submit(command) => {
                self.prompt = None;
                self.spawn_command(command, None);
            }
        }
    }

    fn move_cursor(&mut self, direction: Direction) {
        match self.focus {
            Panel::Pad => self.pad_cursor.step(direction, self.pad.len()),
            Panel::Apps => self.apps_cursor.step(direction, self.apps.controls().len()),
            Panel::Inputs => self
                .inputs_cursor
                .step(direction, self.inputs.controls().len()),
        }
    }

    fn activate_focused(&mut self) {
        match self.focus {
            Panel::Pad => {
                if let Some((button, flag)) = self.pad.button(self.pad_cursor.index()) {
                    self.spawn_command(button.command.to_command(), Some(flag.clone()));
                }
            }
            Panel::Apps => match self.apps.view() {
                ListView::Items(_) => {
                    if let Some(request) = self.apps.begin_select(self.apps_cursor.index()) {
                        tokio::spawn(request.run());
                    }
                }
                ListView::Skeleton { .. } => {}
                ListView::Idle | ListView::Empty { .. } | ListView::Failed { .. } => {
                    self.load_apps();
                }
            },
            Panel::Inputs => match self.inputs.view() {
                ListView::Items(_) => {
                    if let Some(request) = self.inputs.begin_select(self.inputs_cursor.index()) {
                        tokio::spawn(request.run());
                    }
                }
                ListView::Skeleton { .. } => {}
                ListView::Idle | ListView::Empty { .. } | ListView::Failed { .. } => {
                    self.load_inputs();
                }
            },
        }
    }

    fn spawn_command(&self, command: RemoteCommand, source: Option<LoadingFlag>) {
        let dispatcher = self.dispatcher.clone();
        tokio::spawn(async move {
            let source = source.as_ref().map(|flag| flag as &dyn ControlHandle);
            dispatcher.dispatch(&command, source).await
        });
    }

    fn spawn_device_action(&self, action: DeviceAction) {
        let dispatcher = self.dispatcher.clone();
        tokio::spawn(async move { dispatcher.perform(action, None).await });
    }

    fn load_apps(&mut self) {
        let request = self.apps.begin_load();
        self.apps_cursor.reset();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let outcome = request.run().await;
            let _ = tx.send(Action::AppsLoaded(outcome));
        });
    }

    fn load_inputs(&mut self) {
        let request = self.inputs.begin_load();
        self.inputs_cursor.reset();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let outcome = request.run().await;
            let _ = tx.send(Action::InputsLoaded(outcome));
        });
    }

    fn fetch_icons(&self) {
        let generation = self.apps.generation();
        for (index, url) in self.apps.pending_icons() {
            let icons = self.icons.clone();
            let tx = self.action_tx.clone();
            tokio::spawn(async move {
                let result = icons.resolve(&url).await;
                let _ = tx.send(Action::IconResolved {
                    generation,
                    index,
                    result,
                });
            });
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::AppsLoaded(outcome) => {
                if self.apps.apply(outcome) {
                    self.apps_cursor.clamp(self.apps.controls().len());
                    self.fetch_icons();
                }
            }
            Action::InputsLoaded(outcome) => {
                if self.inputs.apply(outcome) {
                    self.inputs_cursor.clamp(self.inputs.controls().len());
                }
            }
            Action::IconResolved {
                generation,
                index,
                result,
            } => {
                self.apps.resolve_icon(generation, index, result);
            }
            Action::AutoLoadApps => {
                if matches!(self.apps.view(), ListView::Idle) {
                    info!("Loading apps on startup");
                    self.load_apps();
                }
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_header(frame, header);

        let [pad_area, lists_area] =
            Layout::horizontal([Constraint::Length(PAD_WIDTH), Constraint::Min(0)]).areas(body);
        let [apps_area, inputs_area] =
            Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(lists_area);

        let pad_selected = (self.focus == Panel::Pad).then(|| self.pad_cursor.index());
        frame.render_widget(RemotePad::new(&self.pad).selected(pad_selected), pad_area);

        let apps_selected = (self.focus == Panel::Apps).then(|| self.apps_cursor.index());
        let apps_hint = if self.apps.manual_trigger_visible() {
            Some("r load apps")
        } else {
            None
        };
        frame.render_widget(
            ResourceGrid::new(self.apps.view(), "Apps", APP_COLUMNS)
                .selected(apps_selected)
                .hint(apps_hint),
            apps_area,
        );

        let inputs_selected = (self.focus == Panel::Inputs).then(|| self.inputs_cursor.index());
        frame.render_widget(
            ResourceGrid::new(self.inputs.view(), "Inputs", INPUT_COLUMNS)
                .selected(inputs_selected)
                .hint(Some("i load inputs")),
            inputs_area,
        );

        render_help(frame, footer);

        if let Some(notification) = self.notifications.current() {
            frame.render_widget(NotificationPopup::new(&notification), frame.area());
        }
        if let Some(prompt) = &self.prompt {
            frame.render_widget(prompt, frame.area());
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let [title_area, status_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(36)]).areas(area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                " Bravia Remote",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" v{}", crate::VERSION),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        frame.render_widget(title, title_area);

        let view = DeviceStatusView::from_status(&self.status);
        frame.render_widget(StatusBar::new(&view), status_area);
    }
}

fn render_help(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(Color::Cyan);
    let text_style = Style::default().fg(Color::DarkGray);

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, description)) in HELP.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", text_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {description}"), text_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{MockHttpPort, MockPushConnector};
    use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    struct UnreachableIcons;

    #[async_trait::async_trait]
    impl IconPort for UnreachableIcons {
        async fn resolve(&self, _url: &str) -> Result<IconDimensions, IconError> {
            Err(IconError::fetch("unreachable"))
        }
    }

    fn app() -> (App, Arc<MockHttpPort>) {
        let http = Arc::new(MockHttpPort::new());
        let app = App::new(
            http.clone(),
            Arc::new(MockPushConnector::new()),
            Arc::new(UnreachableIcons),
            false,
        );
        (app, http)
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press))
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    async fn drain_actions(app: &mut App) {
        settle().await;
        while let Ok(action) = app.action_rx.try_recv() {
            app.handle_action(action);
            settle().await;
        }
    }

    #[tokio::test]
    async fn test_arrow_key_sends_command() {
        let (mut app, http) = app();

        app.handle_event(&press(KeyCode::Up));
        settle().await;

        let requests = http.requests_to("/ircc/send");
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].body.as_deref(),
            Some(r#"{"command":"AAAAAQAAAAEAAAB0Aw=="}"#)
        );
    }

    #[tokio::test]
    async fn test_prompt_captures_remote_keys() {
        let (mut app, http) = app();

        app.handle_event(&press(KeyCode::Char(':')));
        app.handle_event(&press(KeyCode::Up));
        app.handle_event(&press(KeyCode::Char(' ')));
        settle().await;
        assert!(http.requests().is_empty());

        for c in "AAAAAQAAAAEAAAAVAw==".chars() {
            app.handle_event(&press(KeyCode::Char(c)));
        }
        app.handle_event(&press(KeyCode::Enter));
        settle().await;

        assert!(app.prompt.is_none());
        let requests = http.requests_to("/ircc/send");
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].body.as_deref(),
            Some(r#"{"command":"AAAAAQAAAAEAAAAVAw=="}"#)
        );
    }

    #[tokio::test]
    async fn test_apps_load_and_icon_fallback() {
        let (mut app, http) = app();
        http.respond(
            "/apps",
            200,
            r#"{"data": [{"title": "Netflix", "uri": "app:netflix", "icon": "http://tv/n.png"}]}"#,
        );

        app.handle_event(&press(KeyCode::Char('r')));
        assert!(matches!(app.apps.view(), ListView::Skeleton { .. }));

        drain_actions(&mut app).await;

        let controls = app.apps.controls();
        assert_eq!(controls.len(), 1);
        assert!(controls[0].visual.icon.is_generic());
        assert_eq!(
            app.notifications.current().unwrap().message,
            "Loaded 1 apps"
        );
    }

    #[tokio::test]
    async fn test_activate_failed_inputs_retries() {
        let (mut app, http) = app();
        http.respond("/inputs", 500, r#"{"error": "TV off"}"#);
        http.respond("/inputs", 200, r#"{"data": [{"title": "HDMI 1", "uri": "hdmi1"}]}"#);

        app.handle_event(&press(KeyCode::Char('i')));
        drain_actions(&mut app).await;
        assert!(app.inputs.can_retry());

        app.handle_event(&press(KeyCode::Tab));
        app.handle_event(&press(KeyCode::Tab));
        app.handle_event(&press(KeyCode::Char('o')));
        drain_actions(&mut app).await;

        assert_eq!(app.inputs.controls().len(), 1);
        assert_eq!(http.requests_to("/inputs").len(), 2);
    }

    #[tokio::test]
    async fn test_autoload_only_when_idle() {
        let (mut app, http) = app();
        http.respond("/apps", 200, r#"{"data": []}"#);

        app.handle_action(Action::AutoLoadApps);
        drain_actions(&mut app).await;
        app.handle_action(Action::AutoLoadApps);
        drain_actions(&mut app).await;

        assert_eq!(http.requests_to("/apps").len(), 1);
        assert!(app.apps.manual_trigger_visible());
    }

    #[tokio::test]
    async fn test_device_action_keys() {
        let (mut app, http) = app();

        app.handle_event(&press(KeyCode::Char('+')));
        app.handle_event(&press(KeyCode::Char('S')));
        settle().await;

        assert_eq!(http.requests_to("/volume/up").len(), 1);
        assert_eq!(http.requests_to("/power/off").len(), 1);
    }

    #[tokio::test]
    async fn test_quit() {
        let (mut app, _) = app();
        assert_eq!(
            app.handle_event(&press(KeyCode::Char('q'))),
            EventResult::Exit
        );
    }

    #[tokio::test]
    async fn test_render_main_screen() {
        let (app, _) = app();
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();

        terminal.draw(|frame| app.render(frame)).unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("Bravia Remote"));
        assert!(content.contains("Remote"));
        assert!(content.contains("Apps"));
        assert!(content.contains("Inputs"));
    }
}
