use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid phone number {0:?}: expected exactly 10 digits")]
    InvalidPhone(String),
    #[error("invalid birthday {0:?}: expected DD.MM.YYYY")]
    InvalidBirthday(String),
    #[error("phone number {0} not found")]
    PhoneNotFound(String),
    #[error("contact {0:?} not found")]
    ContactNotFound(String),
    #[error("contact name is required")]
    EmptyName,
    #[error("invalid horizon days: {0}")]
    InvalidHorizonDays(i64),
}
