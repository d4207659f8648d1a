use anyhow::{Context, Result};
use autopilot_hook::config::{Settings, LOG_ENV_VAR};
use autopilot_hook::hooks::{build_registry, run_exchange, AutoPilotHook};
use autopilot_hook::install::{self, InstallOutcome};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "autopilot-hook")]
#[command(about = "PreToolUse hook that turns --auto commands into autonomous plans")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Handle one hook event from stdin (the default)
    Run,
    /// Register the hook in the host settings file
    Install {
        /// Settings file to edit [default: ~/.claude/settings.json]
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Command the host should run [default: this executable]
        #[arg(long)]
        command: Option<String>,
    },
    /// Remove the hook from the host settings file
    Uninstall {
        /// Settings file to edit [default: ~/.claude/settings.json]
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Also remove entries running exactly this command
        #[arg(long)]
        command: Option<String>,
    },
    /// Print the feedback a command would produce
    Preview {
        /// Command text; the trigger flag is optional
        #[arg(
            required = true,
            num_args = 1..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        text: Vec<String>,
    },
}

fn main() -> ExitCode {
    dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            run_hook();
            ExitCode::SUCCESS
        }
        command => match run_command(command) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn init_logging() {
    // stdout carries the hook response, so logs go to stderr only
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(false),
        )
        .init();
}

fn run_hook() {
    let settings = Settings::load();
    let registry = build_registry(&settings);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_exchange(&registry, stdin.lock(), stdout.lock());
}

fn settings_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => Ok(install::default_settings_path()?),
    }
}

fn run_command(command: Command) -> Result<()> {
    match command {
        Command::Run => run_hook(),
        Command::Install { settings, command } => {
            let path = settings_path(settings)?;
            let command = match command {
                Some(command) => command,
                None => std::env::current_exe()
                    .context("Failed to resolve the hook executable path")?
                    .display()
                    .to_string(),
            };

            match install::install(&path, &command)? {
                InstallOutcome::Installed => {
                    println!("Installed AutoPilot hook in {}", path.display());
                }
                InstallOutcome::AlreadyInstalled => {
                    println!("AutoPilot hook already installed in {}", path.display());
                }
            }
            println!("Add --auto to a Bash command or Task prompt to activate it.");
        }
        Command::Uninstall { settings, command } => {
            let path = settings_path(settings)?;
            let removed = install::uninstall(&path, command.as_deref())?;
            println!("Removed {removed} hook entries from {}", path.display());
        }
        Command::Preview { text } => {
            let settings = Settings::load();
            let hook = AutoPilotHook::new(settings.trigger);
            println!("{}", hook.feedback_for(&text.join(" ")));
        }
    }

    Ok(())
}
