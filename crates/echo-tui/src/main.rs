use anyhow::Result;
use clap::{Parser, ValueEnum};
use echo_core::{Backend, ChatClient, Config, MockBackend, PhrasingProfile, ScenarioStore};

mod app;
mod handler;
mod logging;
mod tui;
mod ui;

use app::{App, Screen};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Profile {
    Standard,
    Casual,
}

#[derive(Parser)]
#[command(name = "echo")]
#[command(about = "Draft, rewrite and send messages with the right tone")]
struct Cli {
    /// Open the scenario picker instead of the chat screen
    #[arg(long)]
    picker: bool,
    /// Base URL of the Echo backend (serves POST /chat)
    #[arg(long)]
    api_url: Option<String>,
    /// Development switch: answer from a canned mock instead of the backend
    #[arg(long)]
    mock: bool,
    /// Wording used for starters and suggestion labels
    #[arg(long, value_enum)]
    profile: Option<Profile>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = logging::init()?;

    // Config file, then environment, then flags
    let mut config = Config::load()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not load config, using defaults");
            Config::new()
        })
        .with_env_overrides();
    if let Some(url) = cli.api_url {
        config.api_url = Some(url);
    }
    if cli.mock {
        config.use_mock = Some(true);
    }
    if let Some(profile) = cli.profile {
        config.phrasing = Some(match profile {
            Profile::Standard => PhrasingProfile::Standard,
            Profile::Casual => PhrasingProfile::Casual,
        });
    }

    let backend = if config.use_mock() {
        Backend::Mock(MockBackend::new())
    } else {
        Backend::Http(ChatClient::new(config.api_url()).with_timeout(config.timeout()))
    };
    tracing::info!(backend = %backend.display_name(), "starting echo");

    let store = ScenarioStore::open_default()?;
    let start = if cli.picker { Screen::Picker } else { Screen::Chat };
    let mut app = App::new(&config, backend, store, start)?;

    if let Backend::Http(client) = &app.backend {
        let health = client.ping().await;
        app.record_health(health);
    }

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app).await;
    tui::restore()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "echo exited with an error");
    }
    result
}

async fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    let mut events = tui::EventHandler::new();

    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        match events.next().await {
            Some(event) => handler::handle_event(app, event).await?,
            None => break,
        }
    }

    Ok(())
}
