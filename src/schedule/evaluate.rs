//! Due-now evaluation
//!
//! Decides, for a single rule and a computed age, whether the test is
//! mandatory at this evaluation and why. Reasons are the only user-facing
//! text the engine produces; callers surface them verbatim to operators.

use crate::catalog::TestCondition;
use crate::core::EquipmentAge;

/// Verdict for one rule at one evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub is_due_now: bool,
    pub reason: String,
}

impl Evaluation {
    fn due(reason: String) -> Self {
        Self {
            is_due_now: true,
            reason,
        }
    }

    fn deferred(reason: String) -> Self {
        Self {
            is_due_now: false,
            reason,
        }
    }
}

/// Apply a rule condition to the computed age
///
/// When both clauses of `AgeThresholdOrPeriodic` hold, the displayed reason
/// is the threshold explanation: it is the stronger regulatory ground and
/// the one the surveyor must see. The tie-break never changes the verdict.
pub fn evaluate(condition: &TestCondition, age: &EquipmentAge) -> Evaluation {
    match *condition {
        TestCondition::AlwaysAnnual => {
            Evaluation::due("mandatory on every annual inspection".to_string())
        }
        TestCondition::PeriodicSinceManufacture { interval_years } => {
            evaluate_periodic(interval_years, age)
        }
        TestCondition::AgeThreshold { min_age_years } => evaluate_threshold(min_age_years, age),
        TestCondition::AgeThresholdOrPeriodic {
            min_age_years,
            interval_years,
        } => {
            if age.years >= min_age_years {
                Evaluation::due(format!(
                    "equipment age {} at or past {} years (reinforced requirement)",
                    age.years, min_age_years
                ))
            } else if age.years % interval_years == 0 {
                evaluate_periodic(interval_years, age)
            } else {
                Evaluation::deferred(format!(
                    "not at a {}-year anniversary and below age {} (year {})",
                    interval_years, min_age_years, age.years
                ))
            }
        }
    }
}

fn evaluate_periodic(interval_years: u32, age: &EquipmentAge) -> Evaluation {
    if age.years % interval_years == 0 {
        if age.years == 0 {
            // 0 mod n == 0 already makes new equipment due; only the
            // wording is special-cased
            Evaluation::due("new equipment (initial service)".to_string())
        } else {
            Evaluation::due(format!("{}-year cycle, year {}", interval_years, age.years))
        }
    } else {
        Evaluation::deferred(format!(
            "not at a {}-year anniversary (year {})",
            interval_years, age.years
        ))
    }
}

fn evaluate_threshold(min_age_years: u32, age: &EquipmentAge) -> Evaluation {
    if age.years >= min_age_years {
        Evaluation::due(format!(
            "mandatory past {} years (age {})",
            min_age_years, age.years
        ))
    } else {
        Evaluation::deferred(format!(
            "applies from age {} (currently {} years)",
            min_age_years, age.years
        ))
    }
}
