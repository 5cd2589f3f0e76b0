mod commands;
mod error;
mod parse;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{dispatch, Context};
use crate::error::{render_error, report_error};
use crate::parse::{parse_line, Command};
use palbook_config as config;
use palbook_core::rules::validate_horizon_days;
use palbook_core::AddressBook;

#[derive(Debug, Parser)]
#[command(name = "palbook", version, about = "palbook interactive contact manager")]
struct Cli {
    /// Explicit config file (must exist when given)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the upcoming-birthday horizon for this session
    #[arg(long, value_name = "DAYS")]
    horizon_days: Option<i64>,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let app_config = config::load(cli.config.clone()).with_context(|| "load config")?;
    if cli.verbose {
        if let Ok(path) = config::resolve_config_path(cli.config) {
            debug!(path = %path.display(), "config resolved");
        }
    }
    let horizon_days = validate_horizon_days(cli.horizon_days.unwrap_or(app_config.horizon_days))?;
    debug!(horizon_days, "session options resolved");

    let mut book = AddressBook::new();
    let mut input = io::stdin().lock();
    let mut stdout = io::stdout();
    let mut line = String::new();

    println!("Welcome to the assistant bot!");
    loop {
        write!(stdout, "{}", app_config.prompt)?;
        stdout.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF behaves like an explicit exit
            println!("Good bye!");
            return Ok(());
        }

        let parsed = match parse_line(&line) {
            Ok(parsed) => parsed,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        if parsed.command == Command::Exit {
            println!("Good bye!");
            return Ok(());
        }

        let mut ctx = Context {
            book: &mut book,
            horizon_days,
        };
        match dispatch(&mut ctx, parsed.command, &parsed.args) {
            Ok(reply) => println!("{reply}"),
            Err(err) => println!("{}", render_error(&err)),
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
