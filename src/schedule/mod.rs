//! Schedule computation - the engine's single entry point
//!
//! `compute_schedule` is a pure function over the catalog and the profile:
//! no I/O, no shared mutable state, no partial results. It is safe to call
//! concurrently because the catalog is immutable once validated.

pub mod evaluate;
pub mod project;
pub mod result;

use chrono::{Local, NaiveDate};
use thiserror::Error;

use crate::catalog::RuleCatalog;
use crate::core::age::InvalidDateRange;
use crate::core::{equipment_age, EquipmentProfile};

pub use evaluate::{evaluate, Evaluation};
pub use project::next_due_year;
pub use result::{ScheduleResult, ScheduledTest};

/// Errors raised while computing a schedule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The profile has no manufacture date. Defaulting to "today" would
    /// silently report brand-new equipment for items with missing data, so
    /// the engine refuses instead.
    #[error("equipment profile has no manufacture date")]
    MissingManufactureDate,

    #[error(transparent)]
    InvalidDateRange(#[from] InvalidDateRange),
}

/// Compute the complete test schedule for one equipment item
///
/// Iterates the catalog once in declaration order, routes each rule to
/// `due_now` or `not_yet_due`, projects a next due year only for deferred
/// rules, and aggregates cost and duration strictly over `due_now`.
pub fn compute_schedule(
    catalog: &RuleCatalog,
    profile: &EquipmentProfile,
) -> Result<ScheduleResult, ScheduleError> {
    let manufactured = profile
        .manufacture_date
        .ok_or(ScheduleError::MissingManufactureDate)?;
    let evaluated = profile.evaluation_date.unwrap_or_else(today);
    let age = equipment_age(manufactured, evaluated)?;

    let mut due_now = Vec::new();
    let mut not_yet_due = Vec::new();

    for rule in catalog.rules() {
        let Evaluation { is_due_now, reason } = evaluate(&rule.condition, &age);
        if is_due_now {
            due_now.push(ScheduledTest {
                rule: rule.clone(),
                is_due_now,
                reason,
                next_due_year: None,
            });
        } else {
            not_yet_due.push(ScheduledTest {
                rule: rule.clone(),
                is_due_now,
                reason,
                next_due_year: next_due_year(&rule.condition, manufactured, &age),
            });
        }
    }

    let total_cost = due_now.iter().map(|t| t.rule.cost_amount).sum();
    let total_duration_hours_estimate = due_now
        .iter()
        .map(|t| t.rule.duration_hours.estimate())
        .sum();

    Ok(ScheduleResult {
        identifier: profile.identifier.clone(),
        capacity: profile.capacity,
        manufacture_date: manufactured,
        evaluation_date: evaluated,
        age_years: age.years,
        age_months_remainder: age.months_remainder,
        due_now,
        not_yet_due,
        total_cost,
        total_duration_hours_estimate,
    })
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DurationRange, TestCondition, TestRule};

    fn rule(code: &str, cost: f64, condition: TestCondition) -> TestRule {
        TestRule {
            code: code.to_string(),
            name: code.to_string(),
            norm_reference: "SOLAS III/20".to_string(),
            description: None,
            procedure: None,
            cost_amount: cost,
            currency: "EUR".to_string(),
            duration_hours: DurationRange { min: 1.0, max: 3.0 },
            condition,
        }
    }

    /// The illustrative catalog from the scheduling requirements: an annual
    /// rule at 500, a 2-year rule at 300, a 5-year rule at 800 and an
    /// age-10 threshold rule at 300.
    fn catalog() -> RuleCatalog {
        RuleCatalog::new(vec![
            rule("ANNUAL", 500.0, TestCondition::AlwaysAnnual),
            rule(
                "TWO-YEAR",
                300.0,
                TestCondition::PeriodicSinceManufacture { interval_years: 2 },
            ),
            rule(
                "FIVE-YEAR",
                800.0,
                TestCondition::PeriodicSinceManufacture { interval_years: 5 },
            ),
            rule("AGE-TEN", 300.0, TestCondition::AgeThreshold { min_age_years: 10 }),
        ])
        .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn profile(manufactured: NaiveDate, evaluated: NaiveDate) -> EquipmentProfile {
        EquipmentProfile::new(manufactured).evaluated_on(evaluated)
    }

    #[test]
    fn test_new_equipment_has_every_periodic_rule_due() {
        let result =
            compute_schedule(&catalog(), &profile(date(2024, 3, 10), date(2024, 3, 10))).unwrap();

        assert_eq!(result.age_years, 0);
        assert_eq!(result.due_codes(), ["ANNUAL", "TWO-YEAR", "FIVE-YEAR"]);
        assert_eq!(result.total_cost, 1600.0);
    }

    #[test]
    fn test_threshold_rule_joins_at_age_ten() {
        let result =
            compute_schedule(&catalog(), &profile(date(2014, 3, 10), date(2024, 3, 10))).unwrap();

        assert_eq!(result.age_years, 10);
        assert_eq!(
            result.due_codes(),
            ["ANNUAL", "TWO-YEAR", "FIVE-YEAR", "AGE-TEN"]
        );
        assert_eq!(result.total_cost, 1900.0);
    }

    #[test]
    fn test_deferred_five_year_rule_projects_to_2027() {
        let result =
            compute_schedule(&catalog(), &profile(date(2022, 3, 10), date(2024, 3, 10))).unwrap();

        assert_eq!(result.age_years, 2);
        assert_eq!(result.due_codes(), ["ANNUAL", "TWO-YEAR"]);
        assert_eq!(result.total_cost, 800.0);

        let five_year = result
            .not_yet_due
            .iter()
            .find(|t| t.rule.code == "FIVE-YEAR")
            .unwrap();
        assert_eq!(five_year.next_due_year, Some(2027));

        let age_ten = result
            .not_yet_due
            .iter()
            .find(|t| t.rule.code == "AGE-TEN")
            .unwrap();
        assert_eq!(age_ten.next_due_year, Some(2032));
    }

    #[test]
    fn test_evaluation_before_manufacture_fails() {
        let err =
            compute_schedule(&catalog(), &profile(date(2024, 3, 10), date(2023, 3, 10)))
                .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidDateRange(_)));
    }

    #[test]
    fn test_missing_manufacture_date_fails() {
        let no_date = EquipmentProfile {
            evaluation_date: Some(date(2024, 3, 10)),
            ..EquipmentProfile::default()
        };
        let err = compute_schedule(&catalog(), &no_date).unwrap_err();
        assert_eq!(err, ScheduleError::MissingManufactureDate);
    }

    #[test]
    fn test_schedule_is_deterministic() {
        let input = profile(date(2016, 7, 1), date(2024, 2, 29));
        let first = compute_schedule(&catalog(), &input).unwrap();
        let second = compute_schedule(&catalog(), &input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_threshold_stays_due_after_crossing() {
        let manufactured = date(2010, 3, 10);
        let mut crossed = false;
        for year in 2010..2040 {
            let result =
                compute_schedule(&catalog(), &profile(manufactured, date(year, 6, 1))).unwrap();
            let due = result.due_codes().contains(&"AGE-TEN");
            if crossed {
                assert!(due, "threshold rule dropped out of the due set in {}", year);
            }
            crossed = crossed || due;
        }
        assert!(crossed);
    }

    #[test]
    fn test_empty_due_set_has_zero_totals() {
        let only_periodic = RuleCatalog::new(vec![rule(
            "FIVE-YEAR",
            800.0,
            TestCondition::PeriodicSinceManufacture { interval_years: 5 },
        )])
        .unwrap();

        let result =
            compute_schedule(&only_periodic, &profile(date(2022, 3, 10), date(2024, 3, 10)))
                .unwrap();
        assert!(result.due_now.is_empty());
        assert_eq!(result.total_cost, 0.0);
        assert_eq!(result.total_duration_hours_estimate, 0.0);
    }

    #[test]
    fn test_totals_aggregate_only_the_due_set() {
        let result =
            compute_schedule(&catalog(), &profile(date(2022, 3, 10), date(2024, 3, 10))).unwrap();
        let expected: f64 = result.due_now.iter().map(|t| t.rule.cost_amount).sum();
        assert_eq!(result.total_cost, expected);
        // every rule has a 1-3 h range, so each due test contributes 2 h
        assert_eq!(
            result.total_duration_hours_estimate,
            2.0 * result.due_now.len() as f64
        );
    }

    #[test]
    fn test_profile_fields_are_echoed_untouched() {
        let mut input = profile(date(2022, 3, 10), date(2024, 3, 10));
        input.identifier = Some("SV-12P-2024-012".to_string());
        input.capacity = Some(12);

        let result = compute_schedule(&catalog(), &input).unwrap();
        assert_eq!(result.identifier.as_deref(), Some("SV-12P-2024-012"));
        assert_eq!(result.capacity, Some(12));
    }

    #[test]
    fn test_due_entries_never_carry_a_projection() {
        let result =
            compute_schedule(&catalog(), &profile(date(2014, 3, 10), date(2024, 3, 10))).unwrap();
        assert!(result.due_now.iter().all(|t| t.next_due_year.is_none()));
        assert!(result.due_now.iter().all(|t| t.is_due_now));
        assert!(result.not_yet_due.iter().all(|t| !t.is_due_now));
    }
}
