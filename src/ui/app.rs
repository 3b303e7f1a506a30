//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::actions::run_action;
use crate::api::TerminologyApi;
use crate::consts::cli_consts::{SPLASH_DURATION_MS, UI_POLL_INTERVAL_MS};
use crate::environment::Environment;
use crate::ui::dashboard::{DashboardState, KeyOutcome, handle_key, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The five actions, their inputs and results.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The API deployment the dashboard talks to.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    ui_config: UIConfig,
}

impl App {
    pub fn new(environment: Environment, ui_config: UIConfig) -> Self {
        Self {
            environment,
            current_screen: Screen::Splash,
            ui_config,
        }
    }

    fn open_dashboard(&mut self) {
        self.current_screen = Screen::Dashboard(Box::new(DashboardState::new(
            self.environment.clone(),
            self.ui_config.clone(),
        )));
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
///
/// Actions run one at a time: the loop redraws with the request marked as in
/// flight, then awaits the call before reading the next key.
pub async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    api: &dyn TerminologyApi,
) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_DURATION_MS);

    loop {
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        if matches!(app.current_screen, Screen::Splash) && splash_start.elapsed() >= splash_duration
        {
            app.open_dashboard();
            continue;
        }

        if !event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Skip events that are not KeyEventKind::Press
        if key.kind == event::KeyEventKind::Release {
            continue;
        }

        match &mut app.current_screen {
            Screen::Splash => {
                let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c');
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) || ctrl_c {
                    return Ok(());
                }
                // Any other key skips the splash screen
                app.open_dashboard();
            }
            Screen::Dashboard(state) => match handle_key(state, key) {
                KeyOutcome::Continue => {}
                KeyOutcome::Quit => return Ok(()),
                KeyOutcome::Run(action) => {
                    let input = state.input(action).to_string();
                    state.begin_request(action);
                    terminal.draw(|f| render_dashboard(f, state))?;

                    let report = run_action(api, action, &input).await;
                    state.apply_report(report);
                }
            },
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
