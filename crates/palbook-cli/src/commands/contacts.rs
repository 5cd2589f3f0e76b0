use anyhow::Result;

use crate::commands::{find_record, find_record_mut, missing_arguments, Context};
use palbook_core::{PhoneNumber, Record};

pub fn add(ctx: &mut Context<'_>, args: &[String]) -> Result<String> {
    let (name, raw_phone) = match args {
        [name, phone, ..] => (name, phone),
        _ => return Err(missing_arguments("add NAME PHONE")),
    };

    let message = match ctx.book.find_mut(name) {
        Some(record) => {
            record.add_phone(raw_phone)?;
            "Contact updated."
        }
        None => {
            let mut record = Record::new(name.as_str())?;
            // the record is stored even when the phone is rejected
            let added = record.add_phone(raw_phone);
            ctx.book.add_record(record);
            added?;
            "Contact added."
        }
    };
    Ok(message.to_string())
}

pub fn change(ctx: &mut Context<'_>, args: &[String]) -> Result<String> {
    let (name, old, new) = match args {
        [name, old, new, ..] => (name, old, new),
        _ => return Err(missing_arguments("change NAME OLD_PHONE NEW_PHONE")),
    };
    let record = find_record_mut(ctx.book, name)?;
    record.edit_phone(old, new)?;
    Ok("Contact updated.".to_string())
}

pub fn phone(ctx: &mut Context<'_>, args: &[String]) -> Result<String> {
    let name = match args {
        [name, ..] => name,
        _ => return Err(missing_arguments("phone NAME")),
    };
    let record = find_record(ctx.book, name)?;
    Ok(record
        .phones()
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join("; "))
}

pub fn all(ctx: &Context<'_>) -> String {
    if ctx.book.is_empty() {
        return "Address book is empty.".to_string();
    }
    ctx.book
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn delete(ctx: &mut Context<'_>, args: &[String]) -> Result<String> {
    let name = match args {
        [name, ..] => name,
        _ => return Err(missing_arguments("delete NAME")),
    };
    ctx.book.delete(name)?;
    Ok("Contact deleted.".to_string())
}
