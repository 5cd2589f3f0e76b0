use anyhow::Result;
use chrono::NaiveDate;
use tracing::debug;

use crate::commands::{find_record, find_record_mut, missing_arguments, Context};
use palbook_core::format_date;

pub fn add(ctx: &mut Context<'_>, args: &[String]) -> Result<String> {
    let (name, raw_date) = match args {
        [name, date, ..] => (name, date),
        _ => return Err(missing_arguments("add-birthday NAME DD.MM.YYYY")),
    };
    let record = find_record_mut(ctx.book, name)?;
    record.add_birthday(raw_date)?;
    Ok("Birthday added.".to_string())
}

pub fn show(ctx: &mut Context<'_>, args: &[String]) -> Result<String> {
    let name = match args {
        [name, ..] => name,
        _ => return Err(missing_arguments("show-birthday NAME")),
    };
    let record = find_record(ctx.book, name)?;
    Ok(match record.birthday() {
        Some(birthday) => birthday.to_string(),
        None => "Birthday not set for this contact.".to_string(),
    })
}

/// Lists congratulation dates within the session horizon, one
/// `{name} - {DD.MM.YYYY}` line per upcoming birthday.
pub fn upcoming(ctx: &Context<'_>, today: NaiveDate) -> String {
    let upcoming = ctx.book.upcoming_birthdays(today, ctx.horizon_days);
    debug!(
        count = upcoming.len(),
        horizon_days = ctx.horizon_days,
        "birthday scan"
    );
    if upcoming.is_empty() {
        return format!(
            "No upcoming birthdays in the next {} days.",
            ctx.horizon_days
        );
    }
    upcoming
        .iter()
        .map(|entry| format!("{} - {}", entry.name, format_date(entry.congratulation_date)))
        .collect::<Vec<_>>()
        .join("\n")
}
