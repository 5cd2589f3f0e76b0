pub mod birthdays;

pub use birthdays::{
    congratulation_date, next_occurrence, occurrence_in_year, validate_horizon_days,
    MAX_HORIZON_DAYS,
};
