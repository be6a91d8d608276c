pub mod carousel;
pub mod config;
pub mod dispatch;
pub mod draft;
pub mod scenario_store;
pub mod selection;
pub mod settings;
pub mod state;
pub mod templater;
pub mod transcript;
pub mod widget;

// Re-export main types for convenience
pub use carousel::{CardPosition, Carousel, ScenarioCard};
pub use config::Config;
pub use dispatch::{Backend, ChatClient, DispatchError, MockBackend};
pub use draft::DraftInput;
pub use scenario_store::ScenarioStore;
pub use selection::{Pill, PillGroup, Selection, SelectionState};
pub use settings::SettingsPanel;
pub use state::{ChatRequest, ChatResponse, Mode, Sender};
pub use templater::{PhrasingProfile, StarterKind, Templater};
pub use transcript::{DraftOptions, LogItem, Transcript, TranscriptEntry};
pub use widget::{ChatWidget, Effect, RequestStatus, WidgetEvent};
