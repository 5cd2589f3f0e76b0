use crate::domain::birthday;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry of the upcoming-birthday scan: whom to congratulate and on
/// which (weekend-adjusted) date. Rendering is the caller's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
    pub name: String,
    #[serde(with = "birthday::wire_date")]
    pub congratulation_date: NaiveDate,
}
