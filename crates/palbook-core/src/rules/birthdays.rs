use crate::error::CoreError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub const MAX_HORIZON_DAYS: i64 = 365;

pub fn validate_horizon_days(days: i64) -> Result<i64, CoreError> {
    if (1..=MAX_HORIZON_DAYS).contains(&days) {
        Ok(days)
    } else {
        Err(CoreError::InvalidHorizonDays(days))
    }
}

/// The occurrence of `birthday` in `year`. Feb 29 birthdays land on
/// Feb 28 in non-leap years.
pub fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()) {
        Some(date) => date,
        None => NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 exists in every year"),
    }
}

/// The next occurrence of `birthday` on or after `today`.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let occurrence = occurrence_in_year(birthday, today.year());
    if occurrence < today {
        occurrence_in_year(birthday, today.year() + 1)
    } else {
        occurrence
    }
}

/// Saturday occurrences shift two days and Sunday occurrences one day,
/// both landing on the following Monday.
pub fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    match occurrence.weekday() {
        Weekday::Sat => occurrence + Duration::days(2),
        Weekday::Sun => occurrence + Duration::days(1),
        _ => occurrence,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        congratulation_date, next_occurrence, occurrence_in_year, validate_horizon_days,
        MAX_HORIZON_DAYS,
    };
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn occurrence_keeps_month_and_day() {
        assert_eq!(
            occurrence_in_year(date(1987, 3, 5), 2024),
            date(2024, 3, 5)
        );
    }

    #[test]
    fn leap_day_falls_back_to_feb_28() {
        assert_eq!(
            occurrence_in_year(date(2000, 2, 29), 2023),
            date(2023, 2, 28)
        );
        assert_eq!(
            occurrence_in_year(date(2000, 2, 29), 2024),
            date(2024, 2, 29)
        );
    }

    #[test]
    fn next_occurrence_stays_in_year_when_not_yet_past() {
        // today is a Wednesday, the birthday projects to Friday the 8th
        assert_eq!(
            next_occurrence(date(2020, 3, 8), date(2024, 3, 6)),
            date(2024, 3, 8)
        );
        // today itself counts
        assert_eq!(
            next_occurrence(date(1990, 3, 6), date(2024, 3, 6)),
            date(2024, 3, 6)
        );
    }

    #[test]
    fn next_occurrence_rolls_to_next_year_when_past() {
        assert_eq!(
            next_occurrence(date(1990, 3, 5), date(2024, 3, 6)),
            date(2025, 3, 5)
        );
        assert_eq!(
            next_occurrence(date(2000, 1, 1), date(2024, 12, 28)),
            date(2025, 1, 1)
        );
    }

    #[test]
    fn weekday_occurrences_are_unchanged() {
        // 2024-03-12 is a Tuesday
        assert_eq!(congratulation_date(date(2024, 3, 12)), date(2024, 3, 12));
        // 2024-03-08 is a Friday
        assert_eq!(congratulation_date(date(2024, 3, 8)), date(2024, 3, 8));
    }

    #[test]
    fn saturday_shifts_to_the_following_monday() {
        // 2024-03-09 is a Saturday
        assert_eq!(congratulation_date(date(2024, 3, 9)), date(2024, 3, 11));
    }

    #[test]
    fn sunday_shifts_to_the_following_monday() {
        // 2024-03-10 is a Sunday
        assert_eq!(congratulation_date(date(2024, 3, 10)), date(2024, 3, 11));
    }

    #[test]
    fn horizon_bounds() {
        assert_eq!(validate_horizon_days(7), Ok(7));
        assert_eq!(validate_horizon_days(1), Ok(1));
        assert_eq!(validate_horizon_days(MAX_HORIZON_DAYS), Ok(MAX_HORIZON_DAYS));
        assert!(validate_horizon_days(0).is_err());
        assert!(validate_horizon_days(-3).is_err());
        assert!(validate_horizon_days(MAX_HORIZON_DAYS + 1).is_err());
    }
}
