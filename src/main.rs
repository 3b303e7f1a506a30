mod actions;
mod api;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod events;
mod logging;
mod render;
mod session;
mod ui;
mod upload;

use crate::actions::Action;
use crate::api::ApiClient;
use crate::config::{Config, api_url_from_env, get_config_path, resolve_environment};
use crate::environment::Environment;
use crate::session::{run_headless_mode, run_tui_mode};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// NAMASTE ↔ ICD-11 integration dashboard
struct Args {
    /// Base URL of the terminology API. Overrides NAMASTE_API_URL and the saved config.
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Disable the dashboard background color.
    #[arg(long, global = true)]
    no_background_color: bool,

    /// Command to execute. Opens the dashboard when omitted.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Dashboard,
    /// Upload a NAMASTE CSV (code,term) and ingest it
    Ingest {
        /// Path of the CSV file
        #[arg(long, value_name = "CSV")]
        file: PathBuf,
    },
    /// Sync ICD-11 codes from the WHO API
    Sync,
    /// Autocomplete a condition in NAMASTE or ICD-11
    Search {
        /// Free-text query
        #[arg(long, short, value_name = "TEXT")]
        query: String,
    },
    /// Request a semantic mapping for a NAMASTE code
    Map {
        /// NAMASTE code. Sent as null when omitted or blank.
        #[arg(long, value_name = "CODE")]
        code: Option<String>,
    },
    /// Show the mapping audit log
    Audit,
    /// Save the API URL used by default
    UseApi {
        /// Base URL of the terminology API
        url: String,
    },
    /// Delete the saved configuration
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init_max_level();
    let args = Args::parse();
    let config_path = get_config_path()?;

    match &args.command {
        Some(Command::UseApi { url }) => {
            let environment: Environment = url.parse()?;
            Config::new(Some(environment.api_url()))
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("API URL saved", "{}", environment.api_url());
            return Ok(());
        }
        Some(Command::Reset) => {
            print_cmd_info!("Clearing configuration", "{}", config_path.display());
            Config::clear(&config_path)?;
            return Ok(());
        }
        _ => {}
    }

    let config = if config_path.exists() {
        match Config::load_from_file(&config_path) {
            Ok(config) => Some(config),
            Err(e) => {
                print_cmd_warn!("Ignoring unreadable config file", "{}", e);
                None
            }
        }
    } else {
        None
    };
    let environment = resolve_environment(
        args.api_url.as_deref(),
        api_url_from_env().as_deref(),
        config.as_ref(),
    )?;
    log::debug!("Using {:?}", environment);
    let api = ApiClient::new(environment)?;

    let (action, input) = match args.command.unwrap_or(Command::Dashboard) {
        Command::Dashboard => return run_tui_mode(&api, !args.no_background_color).await,
        Command::Ingest { file } => (Action::Ingest, file.to_string_lossy().into_owned()),
        Command::Sync => (Action::Sync, String::new()),
        Command::Search { query } => (Action::Autocomplete, query),
        Command::Map { code } => (Action::Mapping, code.unwrap_or_default()),
        Command::Audit => (Action::Audit, String::new()),
        Command::UseApi { .. } | Command::Reset => return Ok(()),
    };

    // The failure has already been printed.
    if run_headless_mode(&api, action, &input).await.is_err() {
        std::process::exit(1);
    }
    Ok(())
}
