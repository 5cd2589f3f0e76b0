pub mod book;
pub mod domain;
pub mod dto;
pub mod error;
pub mod rules;

pub use book::AddressBook;
pub use domain::*;
pub use dto::UpcomingBirthday;
pub use error::CoreError;
pub use rules::*;
