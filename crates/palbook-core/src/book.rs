use crate::domain::Record;
use crate::dto::UpcomingBirthday;
use crate::error::CoreError;
use crate::rules::{congratulation_date, next_occurrence};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// All records of one session, keyed by contact name. Enumeration
/// follows insertion order; a record replaced under the same name keeps
/// its original position.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the record, replacing any existing record with the same
    /// name wholesale. Phone lists are never merged here.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|record| record.name() == name)
    }

    pub fn delete(&mut self, name: &str) -> Result<(), CoreError> {
        let index = self
            .position(name)
            .ok_or_else(|| CoreError::ContactNotFound(name.to_string()))?;
        self.records.remove(index);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record whose next birthday occurrence falls within
    /// `horizon_days` of `today` (today inclusive, the horizon end
    /// exclusive), in book order, with weekend occurrences shifted to
    /// the following Monday.
    pub fn upcoming_birthdays(&self, today: NaiveDate, horizon_days: i64) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();
        for record in &self.records {
            let birthday = match record.birthday() {
                Some(birthday) => birthday,
                None => continue,
            };
            let occurrence = next_occurrence(birthday.date(), today);
            let delta = (occurrence - today).num_days();
            if (0..horizon_days).contains(&delta) {
                upcoming.push(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: congratulation_date(occurrence),
                });
            }
        }
        upcoming
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|record| record.name() == name)
    }
}
