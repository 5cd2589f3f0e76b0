use anyhow::Result;
use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::error::CliError;
use crate::parse::Command;
use palbook_core::{AddressBook, CoreError, Record};

pub mod birthdays;
pub mod contacts;

pub struct Context<'a> {
    pub book: &'a mut AddressBook,
    pub horizon_days: i64,
}

/// Runs one parsed command against the book and returns the reply to
/// print. `Exit` never reaches this point.
pub fn dispatch(ctx: &mut Context<'_>, command: Command, args: &[String]) -> Result<String> {
    debug!(?command, args = args.len(), "dispatch");
    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => contacts::add(ctx, args),
        Command::Change => contacts::change(ctx, args),
        Command::Phone => contacts::phone(ctx, args),
        Command::All => Ok(contacts::all(ctx)),
        Command::Delete => contacts::delete(ctx, args),
        Command::AddBirthday => birthdays::add(ctx, args),
        Command::ShowBirthday => birthdays::show(ctx, args),
        Command::Birthdays => Ok(birthdays::upcoming(ctx, today_local())),
        Command::Exit => unreachable!("exit handled by the repl loop"),
    }
}

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn missing_arguments(usage: &'static str) -> anyhow::Error {
    CliError::MissingArguments(usage).into()
}

pub(crate) fn find_record<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    book.find(name)
        .ok_or_else(|| CoreError::ContactNotFound(name.to_string()).into())
}

pub(crate) fn find_record_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| CoreError::ContactNotFound(name.to_string()).into())
}
