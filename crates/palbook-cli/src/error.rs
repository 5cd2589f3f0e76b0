use anyhow::Error;
use palbook_core::CoreError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum CliError {
    #[error("Invalid command. (empty input)")]
    EmptyInput,
    #[error("Invalid command.")]
    UnknownCommand(String),
    #[error("not enough arguments: usage: {0}")]
    MissingArguments(&'static str),
}

/// Picks the most specific typed error in the chain for the one-line
/// REPL reply.
pub fn render_error(err: &Error) -> String {
    for cause in err.chain() {
        if let Some(core_err) = cause.downcast_ref::<CoreError>() {
            return core_err.to_string();
        }
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return cli_err.to_string();
        }
    }
    err.to_string()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}
