//! Chat widget state machine
//!
//! All widget mutations go through named handlers on [`ChatWidget`]. A front
//! end feeds it [`WidgetEvent`]s through [`ChatWidget::update`] and executes
//! any returned [`Effect`]; the request result comes back as
//! [`WidgetEvent::Completed`].
//!
//! Per user action the request cycle is
//! `Idle -> Sending (input disabled) -> Idle`, with the reply or the error
//! rendered as a bot entry on the way back.

use crate::dispatch::DispatchError;
use crate::draft::DraftInput;
use crate::selection::{PillGroup, Selection, SelectionState};
use crate::settings::SettingsPanel;
use crate::state::{ChatRequest, ChatResponse, Mode, Sender};
use crate::templater::{PhrasingProfile, Templater};
use crate::transcript::Transcript;

pub const EMPTY_REWRITE_MESSAGE: &str =
    "Type or paste a draft first, then pick how you'd like it rewritten.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Idle,
    Sending { mode: Mode },
}

#[derive(Debug)]
pub enum WidgetEvent {
    TonePill(usize),
    ScenarioPill(usize),
    Send,
    Rewrite(Mode),
    ChooseOption(usize),
    Starter(String),
    ToggleSettings,
    FocusInput,
    Completed {
        mode: Mode,
        result: Result<ChatResponse, DispatchError>,
    },
}

/// Work the front end must carry out on the widget's behalf
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Dispatch(ChatRequest),
}

pub struct ChatWidget {
    selection: SelectionState,
    tones: PillGroup,
    scenarios: PillGroup,
    transcript: Transcript,
    draft: DraftInput,
    settings: SettingsPanel,
    templater: Templater,
    status: RequestStatus,
}

impl ChatWidget {
    pub fn new(initial: Selection, profile: PhrasingProfile) -> Self {
        let mut tones = PillGroup::tones();
        let mut scenarios = PillGroup::scenarios();
        tones.activate_value(&initial.tone);
        scenarios.activate_value(&initial.scenario);

        Self {
            selection: SelectionState::new(initial),
            tones,
            scenarios,
            transcript: Transcript::new(),
            draft: DraftInput::default(),
            settings: SettingsPanel::default(),
            templater: Templater::new(profile),
            status: RequestStatus::Idle,
        }
    }

    pub fn update(&mut self, event: WidgetEvent) -> Option<Effect> {
        match event {
            WidgetEvent::TonePill(index) => {
                self.select_tone(index);
                None
            }
            WidgetEvent::ScenarioPill(index) => {
                self.select_scenario(index);
                None
            }
            WidgetEvent::Send => self.submit().map(Effect::Dispatch),
            WidgetEvent::Rewrite(mode) => self.rewrite(mode).map(Effect::Dispatch),
            WidgetEvent::ChooseOption(index) => {
                self.choose_option(index);
                None
            }
            WidgetEvent::Starter(kind) => {
                self.apply_starter(&kind);
                None
            }
            WidgetEvent::ToggleSettings => {
                self.toggle_settings();
                None
            }
            WidgetEvent::FocusInput => {
                self.focus_input();
                None
            }
            WidgetEvent::Completed { mode, result } => {
                self.complete(mode, result);
                None
            }
        }
    }

    // Accessors

    pub fn selection(&self) -> Selection {
        self.selection.get()
    }

    pub fn tones(&self) -> &PillGroup {
        &self.tones
    }

    pub fn scenarios(&self) -> &PillGroup {
        &self.scenarios
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    pub fn draft(&self) -> &DraftInput {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftInput {
        &mut self.draft
    }

    pub fn settings(&self) -> &SettingsPanel {
        &self.settings
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.status, RequestStatus::Sending { .. })
    }

    // Selection handlers

    pub fn select_tone(&mut self, index: usize) -> bool {
        match self.tones.activate(index) {
            Some(value) => {
                self.selection.set_tone(value);
                true
            }
            None => false,
        }
    }

    pub fn select_scenario(&mut self, index: usize) -> bool {
        match self.scenarios.activate(index) {
            Some(value) => {
                self.selection.set_scenario(value);
                true
            }
            None => false,
        }
    }

    /// Take a scenario handed over from the picker. Unknown ids are kept
    /// verbatim with no pill lit.
    pub fn seed_scenario(&mut self, scenario: &str) {
        self.selection.set_scenario(scenario);
        if !self.scenarios.activate_value(scenario) {
            self.scenarios.clear();
        }
    }

    // Request cycle

    /// Send the draft as a chat message.
    pub fn submit(&mut self) -> Option<ChatRequest> {
        if self.is_sending() {
            return None;
        }

        let message = self.draft.trimmed().to_string();
        if message.is_empty() {
            return None;
        }

        self.transcript.append_message(message.clone(), Sender::User);
        self.draft.clear();
        Some(self.begin(message, Mode::Chat))
    }

    /// Ask for a rewrite of the current draft. An empty draft produces a
    /// local hint instead of a request.
    pub fn rewrite(&mut self, mode: Mode) -> Option<ChatRequest> {
        if self.is_sending() {
            return None;
        }

        let message = self.draft.trimmed().to_string();
        if message.is_empty() {
            self.transcript.append_message(EMPTY_REWRITE_MESSAGE, Sender::Bot);
            return None;
        }

        Some(self.begin(message, mode))
    }

    fn begin(&mut self, message: String, mode: Mode) -> ChatRequest {
        self.status = RequestStatus::Sending { mode };
        self.draft.set_enabled(false);

        let selection = self.selection.get();
        ChatRequest {
            message,
            tone: selection.tone,
            scenario: selection.scenario,
            mode,
        }
    }

    /// Finish the in-flight request and return to idle.
    pub fn complete(&mut self, mode: Mode, result: Result<ChatResponse, DispatchError>) {
        self.status = RequestStatus::Idle;
        self.draft.set_enabled(true);

        match result {
            Ok(response) => {
                self.transcript.append_message(response.reply, Sender::Bot);
                if mode == Mode::Chat {
                    if let Some(options) = response.options.as_ref() {
                        let label = self.templater.profile().options_label();
                        self.transcript.append_options(options, label);
                    }
                }
            }
            Err(err) => {
                tracing::error!(mode = mode.as_str(), error = %err, "chat request failed");
                self.transcript.append_message(err.user_message(), Sender::Bot);
            }
        }
    }

    // Draft helpers

    /// Copy a chip from the newest option group into the draft. Never sends.
    pub fn choose_option(&mut self, index: usize) -> bool {
        if !self.draft.is_enabled() {
            return false;
        }
        let Some(text) = self
            .transcript
            .latest_options()
            .and_then(|group| group.options.get(index))
            .cloned()
        else {
            return false;
        };

        self.draft.set_text(&text);
        true
    }

    pub fn apply_starter(&mut self, starter: &str) {
        if !self.draft.is_enabled() {
            return;
        }
        let text = self.templater.render(starter, &self.selection.get());
        self.draft.set_text(&text);
    }

    pub fn focus_input(&mut self) {
        self.settings.on_input_focus();
    }

    pub fn toggle_settings(&mut self) -> bool {
        self.settings.toggle()
    }
}
