//! TUI mode execution

use super::messages::{print_session_exit_success, print_session_starting};
use crate::api::TerminologyApi;
use crate::ui::{self, UIConfig};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

/// Runs the interactive dashboard
///
/// This function handles:
/// 1. Terminal setup and cleanup
/// 2. UI application initialization and execution
///
/// # Arguments
/// * `api` - The terminology API the dashboard calls
/// * `with_background` - Whether to enable background colors
pub async fn run_tui_mode(
    api: &dyn TerminologyApi,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    print_session_starting(&api.environment().api_url());

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = ui::App::new(api.environment().clone(), UIConfig::new(with_background));
    let result = ui::run(&mut terminal, app, api).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    print_session_exit_success();

    Ok(())
}
