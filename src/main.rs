//! Map change operator tool.
//!
//! # Architecture Overview
//!
//! ```text
//!   operator ──▶ clap CLI ──▶ ConsoleHost ──▶ MapChangePlugin
//!                                                 │
//!                      ┌──────────────────────────┤
//!                      ▼                          ▼
//!               ConfigRegistry             ChangeCoordinator
//!              (re-read list file)      gate → resolve → publish
//!                                                 │
//!                                                 ▼
//!                                  output file + RestartSignal
//! ```
//!
//! `list` and `resolve` only read. `change`, `random` and `console` act as
//! the server console: a successful change writes the output file and
//! requests a restart, which ends the process.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use mapchange::config::{load_settings, report_problems, PluginSettings};
use mapchange::host::console::{ConsoleInput, CONSOLE_ACTOR};
use mapchange::host::{ConsoleHost, LifecycleEvent, MapChangePlugin};
use mapchange::lifecycle::{signals, RestartSignal};
use mapchange::observability::logging;
use mapchange::registry::ConfigEntry;

#[derive(Parser)]
#[command(name = "mapchange")]
#[command(about = "Switch the active map configuration of a game server", long_about = None)]
struct Cli {
    /// Settings file (TOML) with a [mapchange] section.
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Override the configuration list location.
    #[arg(long)]
    configuration_file: Option<String>,

    /// Override the output file location.
    #[arg(long)]
    output_file: Option<String>,

    /// Callsign shown in restart announcements.
    #[arg(long, default_value = "console")]
    callsign: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available configurations
    List,
    /// Show the configuration a name resolves to
    Resolve { name: String },
    /// Publish the named configuration and request a restart
    Change { name: String },
    /// Publish a randomly selected configuration and request a restart
    Random,
    /// Interactive console: slash commands, match and poll events
    Console,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (mut settings, load_error) = match cli.settings.as_deref() {
        Some(path) => match load_settings(path) {
            Ok(settings) => (settings, None),
            Err(e) => (PluginSettings::default(), Some(e)),
        },
        None => (PluginSettings::default(), None),
    };

    logging::init(&settings.observability.log_level);

    if let Some(e) = load_error {
        tracing::error!(error = %e, "There was an error loading your configuration file");
    }
    if let Some(path) = cli.configuration_file {
        settings.mapchange.configuration_file = path;
    }
    if let Some(path) = cli.output_file {
        settings.mapchange.output_file = path;
    }
    report_problems(&settings);

    let restart = RestartSignal::new();
    let host = Arc::new(ConsoleHost::new(cli.callsign, restart.clone()));
    let plugin = MapChangePlugin::with_settings(&settings, host);

    match cli.command {
        Commands::List => {
            plugin.slash_command(CONSOLE_ACTOR, "maplist", &[]);
        }
        Commands::Resolve { name } => {
            match plugin.coordinator().registry().resolve(&name) {
                Some(path) => {
                    let entry = ConfigEntry { name, path };
                    println!("{}", serde_json::to_string_pretty(&entry)?);
                }
                None => {
                    eprintln!("Error: no configuration named {name}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Change { name } => {
            plugin.slash_command(CONSOLE_ACTOR, "mapchange", &[name]);
        }
        Commands::Random => {
            plugin.slash_command(CONSOLE_ACTOR, "maprandom", &[]);
        }
        Commands::Console => {
            run_console(&plugin, &restart).await?;
        }
    }

    Ok(())
}

/// Read console lines until quit, EOF, Ctrl+C or a restart request.
async fn run_console(plugin: &MapChangePlugin, restart: &RestartSignal) -> std::io::Result<()> {
    let mut restart_rx = restart.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    tracing::info!(plugin = plugin.name(), commands = ?plugin.commands(), "Console ready");

    loop {
        tokio::select! {
            _ = restart_rx.recv() => {
                tracing::info!("Restart requested, leaving console");
                break;
            }
            _ = signals::interrupted() => break,
            line = lines.next_line() => {
                let Some(line) = line? else { break };

                match ConsoleInput::parse(&line) {
                    Ok(ConsoleInput::Slash { command, params }) => {
                        if !plugin.slash_command(CONSOLE_ACTOR, &command, &params) {
                            println!("Unknown command: /{command}");
                        }
                    }
                    Ok(ConsoleInput::Match(true)) => plugin.handle_event(LifecycleEvent::MatchStarted),
                    Ok(ConsoleInput::Match(false)) => plugin.handle_event(LifecycleEvent::MatchEnded),
                    Ok(ConsoleInput::PollOpen(name)) => {
                        let (poll_type, _) = plugin.poll_type();
                        if plugin.poll_open(CONSOLE_ACTOR, poll_type, &name) {
                            println!("Poll opened for {name}");
                        }
                    }
                    Ok(ConsoleInput::PollClose { name, passed }) => {
                        let (poll_type, _) = plugin.poll_type();
                        plugin.poll_close(poll_type, &name, passed);
                    }
                    Ok(ConsoleInput::Quit) => break,
                    Ok(ConsoleInput::Blank) => {}
                    Err(e) => println!("{e}"),
                }
            }
        }
    }

    Ok(())
}
