//! Birth date (dataNascimento) validation: minimum age check.

use chrono::{Datelike, NaiveDate};

use crate::error::ValidationError;

/// Parses the formats a registration form produces.
///
/// `<input type="date">` yields `YYYY-MM-DD`; pasted values may carry a time
/// part (`YYYY-MM-DDTHH:MM`) or use the Brazilian `DD/MM/YYYY` layout.
pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Some((date, _time)) = value.split_once('T') {
        if let Ok(date) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            return Some(date);
        }
    }
    NaiveDate::parse_from_str(value, "%d/%m/%Y").ok()
}

/// Age in whole years on `today`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

pub fn validate_birth_date(
    value: &str,
    today: NaiveDate,
    minimum_age: u32,
) -> Result<(), ValidationError> {
    let birth = parse_birth_date(value).ok_or(ValidationError::MalformedDate)?;

    if i64::from(age_on(birth, today)) < i64::from(minimum_age) {
        return Err(ValidationError::UnderageApplicant {
            minimum: minimum_age,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case("2008-10-17", Some(date(2008, 10, 17)))]
    #[case(" 2008-10-17 ", Some(date(2008, 10, 17)))]
    #[case("2008-10-17T08:30", Some(date(2008, 10, 17)))]
    #[case("17/10/2008", Some(date(2008, 10, 17)))]
    #[case("2008-02-30", None)]
    #[case("not a date", None)]
    #[case("", None)]
    fn test_parse_birth_date(#[case] input: &str, #[case] expected: Option<NaiveDate>) {
        assert_eq!(parse_birth_date(input), expected);
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let today = date(2026, 10, 17);
        assert_eq!(age_on(date(2008, 10, 17), today), 18);
        assert_eq!(age_on(date(2008, 10, 18), today), 17);
        assert_eq!(age_on(date(2008, 11, 1), today), 17);
        assert_eq!(age_on(date(2008, 9, 30), today), 18);
    }

    #[test]
    fn test_leap_day_birthday() {
        let birth = date(2008, 2, 29);
        assert_eq!(age_on(birth, date(2026, 2, 28)), 17);
        assert_eq!(age_on(birth, date(2026, 3, 1)), 18);
    }

    #[test]
    fn test_exactly_eighteen_is_accepted() {
        let today = date(2026, 10, 17);
        assert_eq!(validate_birth_date("2008-10-17", today, 18), Ok(()));
    }

    #[test]
    fn test_one_day_short_is_rejected() {
        let today = date(2026, 10, 17);
        assert_eq!(
            validate_birth_date("2008-10-18", today, 18),
            Err(ValidationError::UnderageApplicant { minimum: 18 })
        );
    }

    #[test]
    fn test_future_date_is_underage() {
        let today = date(2026, 10, 17);
        assert!(matches!(
            validate_birth_date("2030-01-01", today, 18),
            Err(ValidationError::UnderageApplicant { .. })
        ));
    }

    #[test]
    fn test_minimum_age_beyond_i32_range() {
        let today = date(2026, 10, 17);
        assert_eq!(
            validate_birth_date("2020-01-01", today, 3_000_000_000),
            Err(ValidationError::UnderageApplicant {
                minimum: 3_000_000_000
            })
        );
        assert_eq!(
            validate_birth_date("1900-01-01", today, u32::MAX),
            Err(ValidationError::UnderageApplicant { minimum: u32::MAX })
        );
    }

    #[test]
    fn test_garbage_is_malformed() {
        let today = date(2026, 10, 17);
        assert_eq!(
            validate_birth_date("31/31/1990", today, 18),
            Err(ValidationError::MalformedDate)
        );
        assert_eq!(
            validate_birth_date("", today, 18),
            Err(ValidationError::MalformedDate)
        );
    }
}
