// src/main.rs
use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::ffi::OsString;

mod config;
mod naming;
mod scripts;
mod templates;

#[derive(Parser)]
#[command(name = "epreyn-scaffold")]
#[command(version)]
#[command(about = "Scaffold GetX screens and features for the epreyn Flutter app")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create lib/screens/<name>_screen with a view and a controller
    #[command(disable_help_flag = true)]
    Screen {
        /// Screen name, e.g. admin_users
        #[arg(allow_hyphen_values = true)]
        name: OsString,
    },
    /// Create lib/features/<name> with a view and a controller
    #[command(disable_help_flag = true)]
    Feature {
        /// Feature name, e.g. admin_users
        #[arg(allow_hyphen_values = true)]
        name: OsString,
    },
}

/// Names are arbitrary tokens, so a lone name after `screen`/`feature` is
/// passed behind `--` and never read as a flag or separator.
fn escape_name_argument(mut args: Vec<OsString>) -> Vec<OsString> {
    let is_scaffold_command = args
        .get(1)
        .map_or(false, |command| command == "screen" || command == "feature");
    if is_scaffold_command && args.len() == 3 {
        args.insert(2, OsString::from("--"));
    }
    args
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse_from(escape_name_argument(std::env::args_os().collect())) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // Wrong argument count: clap's message already carries the usage line.
            eprint!("{}", err);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Screen { name } => {
            scripts::screen::run(name)?;
        }
        Commands::Feature { name } => {
            scripts::feature::run(name)?;
        }
    }

    Ok(())
}
