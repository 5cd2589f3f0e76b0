use crate::domain::{Birthday, PhoneNumber};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a name, an ordered list of phone numbers (duplicates
/// allowed), and at most one birthday. The name doubles as the
/// AddressBook key and never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::EmptyName);
        }
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validates and appends. Identical numbers may coexist.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), CoreError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Removes the first phone equal to `raw`.
    pub fn remove_phone(&mut self, raw: &str) -> Result<(), CoreError> {
        let index = self
            .position(raw)
            .ok_or_else(|| CoreError::PhoneNotFound(raw.to_string()))?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replaces the first phone equal to `old` with a freshly validated
    /// `new`, keeping its position. The missing-phone check runs before
    /// the new value is validated.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), CoreError> {
        let index = self
            .position(old)
            .ok_or_else(|| CoreError::PhoneNotFound(old.to_string()))?;
        self.phones[index] = PhoneNumber::new(new)?;
        Ok(())
    }

    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    /// Sets the birthday, unconditionally replacing any existing one.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), CoreError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    fn position(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone.as_str() == raw)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
