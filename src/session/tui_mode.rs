//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::logging::{self, LogSink};
use crate::ui::{self, UIConfig};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};
use tokio::sync::mpsc;

/// Runs the application in TUI mode
///
/// This function handles:
/// 1. Routing log records into the activity panel
/// 2. Terminal setup and cleanup
/// 3. UI application initialization and execution
///
/// # Arguments
/// * `session` - Session data from setup
/// * `route` - URL fragment of the first view, e.g. `#/kpi-summary`
/// * `with_background` - Whether to enable background colors
pub async fn run_tui_mode(
    session: SessionData,
    route: &str,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    print_session_starting(&session.source.describe());

    let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    if let Err(e) = logging::init(LogSink::Activity(event_sender.clone())) {
        crate::print_cmd_warn!("Logging", "{}", e);
    }
    log::info!("Loading data from {}", session.source.describe());

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let ui_config = UIConfig::new(with_background || session.config.with_background);
    let mut app = ui::App::new(
        session.source.clone(),
        session.source.describe(),
        session.router,
        event_sender,
        event_receiver,
        ui_config,
    );
    app.open_fragment(route);

    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle the result
    result?;

    print_session_shutdown();
    print_session_exit_success();

    Ok(())
}
