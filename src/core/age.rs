//! Equipment age calculation
//!
//! Ages are computed with a fixed day-count convention: 365.25 days per
//! year and 30.44 days per month. Every threshold and periodic rule keys
//! off the whole-year figure, so the convention is part of the scheduling
//! contract and must not be swapped for calendar-year arithmetic.

use chrono::NaiveDate;
use thiserror::Error;

const DAYS_PER_YEAR: f64 = 365.25;
const DAYS_PER_MONTH: f64 = 30.44;

/// Whole years and leftover months elapsed since manufacture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquipmentAge {
    /// Whole years elapsed (drives all scheduling decisions)
    pub years: u32,

    /// Whole months past the last whole year, 0..=11 (display only)
    pub months_remainder: u32,
}

/// The evaluation date precedes the manufacture date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("evaluation date {evaluated} is before manufacture date {manufactured}")]
pub struct InvalidDateRange {
    pub manufactured: NaiveDate,
    pub evaluated: NaiveDate,
}

/// Compute the equipment age between two dates
pub fn equipment_age(
    manufactured: NaiveDate,
    evaluated: NaiveDate,
) -> Result<EquipmentAge, InvalidDateRange> {
    if evaluated < manufactured {
        return Err(InvalidDateRange {
            manufactured,
            evaluated,
        });
    }

    let days = (evaluated - manufactured).num_days() as f64;
    Ok(EquipmentAge {
        years: (days / DAYS_PER_YEAR).floor() as u32,
        months_remainder: ((days / DAYS_PER_MONTH).floor() as u32) % 12,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_on_manufacture_day() {
        let age = equipment_age(date(2024, 3, 10), date(2024, 3, 10)).unwrap();
        assert_eq!(age.years, 0);
        assert_eq!(age.months_remainder, 0);
    }

    #[test]
    fn test_age_ten_years() {
        // 3653 days: 10 * 365 plus leap days in 2016, 2020 and 2024
        let age = equipment_age(date(2014, 3, 10), date(2024, 3, 10)).unwrap();
        assert_eq!(age.years, 10);
        assert_eq!(age.months_remainder, 0);
    }

    #[test]
    fn test_age_two_years() {
        let age = equipment_age(date(2022, 3, 10), date(2024, 3, 10)).unwrap();
        assert_eq!(age.years, 2);
        assert_eq!(age.months_remainder, 0);
    }

    #[test]
    fn test_non_leap_anniversary_is_still_year_zero() {
        // 365 elapsed days fall just short of the 365.25-day year
        let age = equipment_age(date(2021, 3, 10), date(2022, 3, 10)).unwrap();
        assert_eq!(age.years, 0);
        assert_eq!(age.months_remainder, 11);

        let age = equipment_age(date(2021, 3, 10), date(2022, 3, 11)).unwrap();
        assert_eq!(age.years, 1);
        assert_eq!(age.months_remainder, 0);
    }

    #[test]
    fn test_months_remainder() {
        // 364 days = 11.96 months
        let age = equipment_age(date(2021, 3, 10), date(2022, 3, 9)).unwrap();
        assert_eq!(age.years, 0);
        assert_eq!(age.months_remainder, 11);
    }

    #[test]
    fn test_evaluation_before_manufacture_is_rejected() {
        let err = equipment_age(date(2024, 3, 10), date(2024, 3, 9)).unwrap_err();
        assert_eq!(
            err,
            InvalidDateRange {
                manufactured: date(2024, 3, 10),
                evaluated: date(2024, 3, 9),
            }
        );
    }
}
