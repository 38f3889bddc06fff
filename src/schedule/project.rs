//! Forecast projection
//!
//! For rules not due at the current evaluation, the projector answers "in
//! which calendar year does this test next become mandatory". Year
//! granularity matches the precision of the business requirement; the
//! anniversary day within that year is survey-planning detail the fleet
//! layer owns.

use chrono::{Datelike, NaiveDate};

use crate::catalog::TestCondition;
use crate::core::EquipmentAge;

/// Next calendar year the rule becomes due, or `None` when there is no
/// future transition to report (always-annual rules, thresholds already
/// crossed)
pub fn next_due_year(
    condition: &TestCondition,
    manufactured: NaiveDate,
    age: &EquipmentAge,
) -> Option<i32> {
    match *condition {
        TestCondition::AlwaysAnnual => None,
        TestCondition::PeriodicSinceManufacture { interval_years }
        | TestCondition::AgeThresholdOrPeriodic { interval_years, .. } => {
            Some(next_cycle_year(manufactured, age, interval_years))
        }
        TestCondition::AgeThreshold { min_age_years } => {
            if age.years < min_age_years {
                Some(manufactured.year() + min_age_years as i32)
            } else {
                None
            }
        }
    }
}

/// Smallest whole multiple of `interval_years` strictly greater than the
/// current age, as a calendar year
fn next_cycle_year(manufactured: NaiveDate, age: &EquipmentAge, interval_years: u32) -> i32 {
    let next_multiple = (age.years / interval_years + 1) * interval_years;
    manufactured.year() + next_multiple as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn age(years: u32) -> EquipmentAge {
        EquipmentAge {
            years,
            months_remainder: 0,
        }
    }

    fn manufactured(year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, 3, 10).unwrap()
    }

    #[test]
    fn test_periodic_projection_from_year_two() {
        // manufactured 2022, age 2, 5-year cycle: next due 2027
        let condition = TestCondition::PeriodicSinceManufacture { interval_years: 5 };
        assert_eq!(
            next_due_year(&condition, manufactured(2022), &age(2)),
            Some(2027)
        );
    }

    #[test]
    fn test_periodic_projection_skips_past_multiples() {
        let condition = TestCondition::PeriodicSinceManufacture { interval_years: 5 };
        assert_eq!(
            next_due_year(&condition, manufactured(2010), &age(6)),
            Some(2020)
        );
        assert_eq!(
            next_due_year(&condition, manufactured(2010), &age(9)),
            Some(2020)
        );
    }

    #[test]
    fn test_periodic_projection_lands_on_cycle_years() {
        let condition = TestCondition::PeriodicSinceManufacture { interval_years: 3 };
        for years in 0..20 {
            if let Some(due_year) = next_due_year(&condition, manufactured(2000), &age(years)) {
                let due_age = due_year - 2000;
                assert_eq!(due_age % 3, 0, "projection for age {} missed the cycle", years);
                assert!(due_age > years as i32);
            }
        }
    }

    #[test]
    fn test_combined_uses_periodic_projection() {
        let condition = TestCondition::AgeThresholdOrPeriodic {
            min_age_years: 10,
            interval_years: 2,
        };
        assert_eq!(
            next_due_year(&condition, manufactured(2020), &age(3)),
            Some(2024)
        );
    }

    #[test]
    fn test_threshold_projection_is_the_crossing_year() {
        let condition = TestCondition::AgeThreshold { min_age_years: 10 };
        assert_eq!(
            next_due_year(&condition, manufactured(2014), &age(4)),
            Some(2024)
        );
    }

    #[test]
    fn test_threshold_already_crossed_has_no_projection() {
        let condition = TestCondition::AgeThreshold { min_age_years: 10 };
        assert_eq!(next_due_year(&condition, manufactured(2010), &age(12)), None);
    }

    #[test]
    fn test_always_annual_has_no_projection() {
        assert_eq!(
            next_due_year(&TestCondition::AlwaysAnnual, manufactured(2020), &age(1)),
            None
        );
    }
}
