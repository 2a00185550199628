mod commands;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use stylecfg_logger::{self as logger, LogOptions};

#[derive(Parser, Debug)]
#[command(name = "stylecfg", version, about = "Check and project CSS framework configuration documents")]
struct Cli {
    #[command(flatten)]
    opts: GlobalOpts,

    #[command(subcommand)]
    command: Command,
}

/// Flags shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a document, report lint warnings and validate it
    Check {
        /// Document to check (JSON, YAML or TOML); defaults to the configured document
        path: Option<PathBuf>,
        /// Report every validation problem instead of the first
        #[arg(long)]
        all: bool,
        /// Fail on top-level keys the loader does not recognise
        #[arg(long)]
        reject_unknown: bool,
    },
    /// Print the projection handed to the build tool
    Show {
        path: Option<PathBuf>,
        /// Output format: json, yaml or toml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// List theme names declared by each plugin
    Themes {
        path: Option<PathBuf>,
        /// Only list the themes of this plugin
        #[arg(short, long)]
        plugin: Option<String>,
    },
    /// Manage stylecfg settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print a setting
    Get { key: String },
    /// Store a setting
    Set { key: String, value: String },
    /// Print all stored settings
    List,
    /// Print the settings file location
    Path,
    /// Delete the settings file
    Reset {
        #[arg(long)]
        yes: bool,
    },
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let opts = cli.opts;
    match cli.command {
        Command::Check {
            path,
            all,
            reject_unknown,
        } => commands::check::run(path.as_deref(), all, reject_unknown, &opts),
        Command::Show { path, format } => commands::show::run(path.as_deref(), format.as_deref(), &opts),
        Command::Themes { path, plugin } => commands::themes::run(path.as_deref(), plugin.as_deref(), &opts),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => commands::settings::get(&key),
            ConfigAction::Set { key, value } => commands::settings::set(&key, value),
            ConfigAction::List => commands::settings::list(),
            ConfigAction::Path => commands::settings::path(),
            ConfigAction::Reset { yes } => commands::settings::reset(yes),
        },
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // step, success and errors go to stderr, listings to stdout
    let ansi = !cli.opts.no_color && std::io::stderr().is_terminal();
    if !ansi || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    logger::init(LogOptions {
        verbosity: cli.opts.verbose,
        quiet: cli.opts.quiet,
        json: cli.opts.log_json,
        ansi,
    });

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("command failed: {:?}", err);
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
