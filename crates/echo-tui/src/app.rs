use anyhow::{anyhow, Result};
use echo_core::{
    Backend, Carousel, ChatResponse, ChatWidget, Config, DispatchError, Effect, LogItem, Mode,
    ScenarioStore, StarterKind, WidgetEvent,
};
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Picker,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Which row of the chat screen the arrow keys act on in normal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatFocus {
    Starters,
    Options,
    Tone,
    Scenario,
}

pub struct PendingRequest {
    pub mode: Mode,
    pub task: JoinHandle<Result<ChatResponse, DispatchError>>,
}

pub struct App {
    // Core state
    pub should_quit: bool,
    pub screen: Screen,
    pub input_mode: InputMode,
    pub focus: ChatFocus,

    // Row cursors
    pub starter_cursor: usize,
    pub option_cursor: usize,
    pub tone_cursor: usize,
    pub scenario_cursor: usize,

    // Chat state
    pub widget: ChatWidget,
    pub pending: Option<PendingRequest>,
    pub chat_scroll: u16,
    pub chat_height: u16, // Height of transcript area for scroll calculations
    pub chat_width: u16,  // Width of transcript area for wrap calculations

    // Picker state
    pub carousel: Carousel,
    pub store: ScenarioStore,

    // Animation state
    pub animation_frame: u8, // 0-2 for ellipsis animation

    // Status line (backend health, storage errors)
    pub status_message: Option<String>,

    pub backend: Backend,
}

impl App {
    pub fn new(
        config: &Config,
        backend: Backend,
        store: ScenarioStore,
        start: Screen,
    ) -> Result<Self> {
        let widget = ChatWidget::new(config.initial_selection(), config.phrasing());
        let tone_cursor = widget.tones().active_index().unwrap_or(0);
        let scenario_cursor = widget.scenarios().active_index().unwrap_or(0);

        let carousel = Carousel::new(Carousel::default_cards())
            .ok_or_else(|| anyhow!("No scenario cards to pick from"))?;

        let mut app = Self {
            should_quit: false,
            screen: Screen::Chat,
            input_mode: InputMode::Normal,
            focus: ChatFocus::Starters,

            starter_cursor: 0,
            option_cursor: 0,
            tone_cursor,
            scenario_cursor,

            widget,
            pending: None,
            chat_scroll: 0,
            chat_height: 0,
            chat_width: 0,

            carousel,
            store,

            animation_frame: 0,
            status_message: None,

            backend,
        };

        match start {
            Screen::Chat => app.open_chat(),
            Screen::Picker => app.open_picker(),
        }
        Ok(app)
    }

    // Screen navigation

    /// Show the chat screen, seeding the scenario from local storage.
    pub fn open_chat(&mut self) {
        self.screen = Screen::Chat;
        self.input_mode = InputMode::Normal;

        match self.store.load_scenario() {
            Ok(Some(scenario)) => {
                tracing::info!(%scenario, "seeding scenario from picker");
                self.widget.seed_scenario(&scenario);
                if let Some(i) = self.widget.scenarios().active_index() {
                    self.scenario_cursor = i;
                }
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored scenario");
                self.status_message = Some(format!("Could not read saved scenario: {}", e));
            }
        }
    }

    pub fn open_picker(&mut self) {
        self.screen = Screen::Picker;
        self.input_mode = InputMode::Normal;
    }

    /// Persist the current card's scenario, then move to the chat screen.
    pub fn practice(&mut self) -> Result<()> {
        let scenario = self.carousel.current_card().id.clone();
        self.store.save_scenario(&scenario)?;
        self.open_chat();
        Ok(())
    }

    // Widget plumbing

    /// Feed one event to the widget and carry out whatever it asks for.
    pub fn apply(&mut self, event: WidgetEvent) {
        let before = self.widget.transcript().items().len();
        if let Some(effect) = self.widget.update(event) {
            self.run_effect(effect);
        }
        let new_chips = self.widget.transcript().items()[before..]
            .iter()
            .any(|item| matches!(item, LogItem::Options(_)));
        if new_chips {
            self.option_cursor = 0;
        }
        if self.widget.transcript_mut().take_scroll_request() {
            self.scroll_chat_to_bottom();
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Dispatch(request) => {
                let backend = self.backend.clone();
                let mode = request.mode;
                tracing::info!(mode = mode.as_str(), "sending request");
                self.pending = Some(PendingRequest {
                    mode,
                    task: tokio::spawn(async move { backend.send(&request).await }),
                });
            }
        }
    }

    /// Collect the in-flight request if it has finished.
    pub async fn poll_request(&mut self) {
        let finished = self
            .pending
            .as_ref()
            .map(|p| p.task.is_finished())
            .unwrap_or(false);
        if !finished {
            return;
        }

        let Some(pending) = self.pending.take() else {
            return;
        };
        let result = match pending.task.await {
            Ok(result) => result,
            Err(e) => Err(DispatchError::Interrupted(e.to_string())),
        };
        self.apply(WidgetEvent::Completed {
            mode: pending.mode,
            result,
        });
    }

    /// Turn the startup health check into a header notice. Never fatal.
    pub fn record_health(&mut self, result: Result<bool, DispatchError>) {
        match result {
            Ok(true) => {}
            Ok(false) => self.status_message = Some("backend not ready".to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "backend health check failed");
                self.status_message = Some("backend unreachable".to_string());
            }
        }
    }

    pub fn is_sending(&self) -> bool {
        self.widget.is_sending()
    }

    // Focus rows

    /// Rows reachable with Tab. Tone/scenario only while settings are open,
    /// options only once a chip group exists.
    pub fn focus_order(&self) -> Vec<ChatFocus> {
        let mut order = vec![ChatFocus::Starters];
        if self.widget.transcript().latest_options().is_some() {
            order.push(ChatFocus::Options);
        }
        if self.widget.settings().is_expanded() {
            order.push(ChatFocus::Tone);
            order.push(ChatFocus::Scenario);
        }
        order
    }

    pub fn cycle_focus(&mut self) {
        let order = self.focus_order();
        let next = order
            .iter()
            .position(|f| *f == self.focus)
            .map(|i| (i + 1) % order.len())
            .unwrap_or(0);
        self.focus = order[next];
    }

    /// Fall back to the starters row if the focused row has gone away.
    pub fn fix_focus(&mut self) {
        if !self.focus_order().contains(&self.focus) {
            self.focus = ChatFocus::Starters;
        }
    }

    fn row_len(&self, focus: ChatFocus) -> usize {
        match focus {
            ChatFocus::Starters => StarterKind::all().len(),
            ChatFocus::Options => self
                .widget
                .transcript()
                .latest_options()
                .map(|g| g.options.len())
                .unwrap_or(0),
            ChatFocus::Tone => self.widget.tones().len(),
            ChatFocus::Scenario => self.widget.scenarios().len(),
        }
    }

    fn cursor_mut(&mut self, focus: ChatFocus) -> &mut usize {
        match focus {
            ChatFocus::Starters => &mut self.starter_cursor,
            ChatFocus::Options => &mut self.option_cursor,
            ChatFocus::Tone => &mut self.tone_cursor,
            ChatFocus::Scenario => &mut self.scenario_cursor,
        }
    }

    pub fn focus_left(&mut self) {
        let focus = self.focus;
        let cursor = self.cursor_mut(focus);
        *cursor = cursor.saturating_sub(1);
    }

    pub fn focus_right(&mut self) {
        let focus = self.focus;
        let len = self.row_len(focus);
        if len == 0 {
            return;
        }
        let cursor = self.cursor_mut(focus);
        *cursor = (*cursor + 1).min(len - 1);
    }

    /// Press whatever the focused row's cursor is on.
    pub fn activate_focused(&mut self) {
        match self.focus {
            ChatFocus::Starters => {
                if let Some(kind) = StarterKind::all().get(self.starter_cursor) {
                    self.apply(WidgetEvent::Starter(kind.as_str().to_string()));
                    self.start_editing();
                }
            }
            ChatFocus::Options => {
                if self.widget.draft().is_enabled() {
                    self.apply(WidgetEvent::ChooseOption(self.option_cursor));
                    self.start_editing();
                }
            }
            ChatFocus::Tone => self.apply(WidgetEvent::TonePill(self.tone_cursor)),
            ChatFocus::Scenario => self.apply(WidgetEvent::ScenarioPill(self.scenario_cursor)),
        }
    }

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
        self.apply(WidgetEvent::FocusInput);
        self.fix_focus();
    }

    pub fn toggle_settings(&mut self) {
        self.apply(WidgetEvent::ToggleSettings);
        self.fix_focus();
    }

    // Scrolling

    pub fn scroll_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    /// Tick animation frame (called by Tick event)
    pub fn tick_animation(&mut self) {
        if self.is_sending() {
            self.animation_frame = (self.animation_frame + 1) % 3;
        }
    }

    /// Scroll the transcript so the newest item is visible
    pub fn scroll_chat_to_bottom(&mut self) {
        // Use actual chat width for wrap calculation, default to 50 if not set
        let wrap_width = if self.chat_width > 0 {
            self.chat_width as usize
        } else {
            50
        };

        let wrapped = |text: &str| -> usize {
            text.lines()
                .map(|line| line.chars().count() / wrap_width + 1)
                .sum::<usize>()
                .max(1)
        };

        let mut total_lines: usize = 0;
        for item in self.widget.transcript().items() {
            match item {
                LogItem::Message(entry) => {
                    total_lines += 1; // Sender line
                    total_lines += wrapped(&entry.text);
                }
                LogItem::Options(group) => {
                    total_lines += 1; // Label line
                    total_lines += group.options.iter().map(|o| wrapped(o)).sum::<usize>();
                }
            }
            total_lines += 1; // Blank line after item
        }

        if self.is_sending() {
            total_lines += 2; // "Echo:" + "Sending..."
        }
        let total_lines = u16::try_from(total_lines).unwrap_or(u16::MAX);

        let visible_height = if self.chat_height > 0 {
            self.chat_height
        } else {
            20
        };

        self.chat_scroll = total_lines.saturating_sub(visible_height);
    }
}
