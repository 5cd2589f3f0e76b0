pub mod birthday;
pub mod phone;
pub mod record;

pub use birthday::{format_date, Birthday};
pub use phone::PhoneNumber;
pub use record::Record;
