//! # clipfile CLI
//!
//! Command-line interface for clipfile.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::{ArgAction, Parser};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use clipfile::{
    commands::{self, CaptureArgs, Session},
    constants::LOG_ENV_VAR,
    error::{exit_code_for, CaptureError},
    ConfigStore,
};

const GLOBAL_HELP: &str = "\
Configuration File:
  ~/.config/clipfile/config.toml    Nickname lookup table and default flags

Default Flags ([defaults] table):
  force-creation-of-new-directories   Create missing directories without asking
  use-default-lookup-name             Name new directories after their last path
                                      component instead of asking

Getting Started:
  clipfile ~/notes/work \"standup notes\"   Register ~/notes/work as 'work' and save
  clipfile work \"retro action items\"      Save into the 'work' directory
  clipfile --list                          Show registered nicknames

Files are named <YYYYMMDD>-<description>.txt and are never overwritten.
Set CLIPFILE_LOG (e.g. CLIPFILE_LOG=debug) for diagnostic output.";

#[derive(Parser)]
#[command(name = "clipfile")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Save the clipboard into a dated text file inside a nicknamed directory")]
#[command(
    long_about = "clipfile writes the current clipboard text into a new file named after \
today's date and a short description. The destination is given as a nickname that was \
registered earlier, or as a path that gets registered on first use.\n\n\
Missing directories can be recreated, directories referenced by path are matched to \
their existing nickname, and nickname clashes are resolved interactively."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Nickname of a registered directory, or a path to register
    nickname: Option<String>,

    /// Description of the clipboard contents, used for the filename
    description: Vec<String>,

    /// List registered nicknames and their directories
    #[arg(short, long)]
    list: bool,

    /// Show diagnostic output (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(exit_code_for(&err));
    }
}

/// Filter directive used when `CLIPFILE_LOG` is not set.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "clipfile=warn",
        1 => "clipfile=info",
        _ => "clipfile=debug",
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let store = ConfigStore::default_location()?;

    if cli.list {
        return commands::list(&store);
    }

    let Some(nickname) = cli.nickname else {
        return Err(
            CaptureError::Usage("No nickname entered, try --help or --list".to_string()).into(),
        );
    };

    if cli.description.is_empty() {
        return Err(CaptureError::Usage("No description entered".to_string()).into());
    }

    let args = CaptureArgs {
        nickname,
        description: cli.description.join(" "),
    };

    let mut session = Session::system(store)?;
    commands::capture(&args, &mut session)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(default_directive(0), "clipfile=warn");
        assert_eq!(default_directive(1), "clipfile=info");
        assert_eq!(default_directive(2), "clipfile=debug");
        assert_eq!(default_directive(5), "clipfile=debug");
    }

    #[test]
    fn test_verbose_flag_counts() {
        let cli = Cli::try_parse_from(["clipfile", "-vv", "--list"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.list);
    }
}
