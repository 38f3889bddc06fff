//! Test rule definitions
//!
//! Every rule's triggering logic is one of four named condition variants.
//! Free-form boolean expressions are deliberately not representable: the
//! catalog is data, and the evaluator is the only place that interprets it.

use serde::{Deserialize, Serialize};

/// Estimated duration range for a test, in hours
///
/// Reporting and aggregation only; duration never affects scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationRange {
    pub min: f64,
    pub max: f64,
}

impl DurationRange {
    /// Midpoint of the range, used when summing schedule durations
    pub fn estimate(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

impl std::fmt::Display for DurationRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.min == self.max {
            write!(f, "{} h", self.min)
        } else {
            write!(f, "{}-{} h", self.min, self.max)
        }
    }
}

/// When a test becomes mandatory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TestCondition {
    /// Due at every annual inspection
    AlwaysAnnual,

    /// Due on every whole multiple of `interval_years` since manufacture,
    /// anchored to the manufacture anniversary rather than calendar years
    PeriodicSinceManufacture { interval_years: u32 },

    /// Due at every inspection once the equipment reaches `min_age_years`;
    /// a one-way transition, permanent once crossed
    AgeThreshold { min_age_years: u32 },

    /// Due on the periodic cycle, and unconditionally at every inspection
    /// past `min_age_years`
    AgeThresholdOrPeriodic {
        min_age_years: u32,
        interval_years: u32,
    },
}

impl std::fmt::Display for TestCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestCondition::AlwaysAnnual => write!(f, "every annual inspection"),
            TestCondition::PeriodicSinceManufacture { interval_years } => {
                write!(f, "every {} years since manufacture", interval_years)
            }
            TestCondition::AgeThreshold { min_age_years } => {
                write!(f, "every inspection from age {}", min_age_years)
            }
            TestCondition::AgeThresholdOrPeriodic {
                min_age_years,
                interval_years,
            } => write!(
                f,
                "every {} years since manufacture, and every inspection from age {}",
                interval_years, min_age_years
            ),
        }
    }
}

/// A regulatory test definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRule {
    /// Short unique identifier (e.g. "PRESS-TEST")
    pub code: String,

    /// Human-readable test name
    pub name: String,

    /// Regulation citation, carried through unchanged for reporting
    pub norm_reference: String,

    /// What the test covers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// How the test is performed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub procedure: Option<String>,

    /// Unit cost, non-negative
    pub cost_amount: f64,

    /// ISO currency code for `cost_amount`
    pub currency: String,

    /// Estimated duration range
    pub duration_hours: DurationRange,

    /// When the test becomes mandatory
    pub condition: TestCondition,
}

impl TestRule {
    /// Check the rule's invariants, returning the first violation
    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("code must not be empty".to_string());
        }
        if !self.cost_amount.is_finite() || self.cost_amount < 0.0 {
            return Err(format!("cost_amount {} must be non-negative", self.cost_amount));
        }
        if self.duration_hours.min < 0.0 || self.duration_hours.min > self.duration_hours.max {
            return Err(format!(
                "duration range {}..{} is not ordered",
                self.duration_hours.min, self.duration_hours.max
            ));
        }
        match self.condition {
            TestCondition::PeriodicSinceManufacture { interval_years }
            | TestCondition::AgeThresholdOrPeriodic { interval_years, .. }
                if interval_years == 0 =>
            {
                Err("interval_years must be greater than zero".to_string())
            }
            _ => Ok(()),
        }
    }
}
