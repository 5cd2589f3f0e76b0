use crate::error::CliError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    Delete,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "delete" => Ok(Command::Delete),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "close" | "exit" => Ok(Command::Exit),
            _ => Err(CliError::UnknownCommand(raw.to_string())),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParsedLine {
    pub command: Command,
    pub args: Vec<String>,
}

/// Splits an input line on whitespace into a lowercased command and its
/// arguments. Argument casing is preserved (names are case-sensitive
/// keys).
pub fn parse_line(line: &str) -> Result<ParsedLine, CliError> {
    let mut tokens = line.split_whitespace();
    let command = match tokens.next() {
        Some(token) => token.to_ascii_lowercase().parse()?,
        None => return Err(CliError::EmptyInput),
    };
    let args = tokens.map(str::to_string).collect();
    Ok(ParsedLine { command, args })
}
