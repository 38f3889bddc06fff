//! Schedule result types
//!
//! Everything here is produced fresh on each facade call and owned by the
//! caller. The originating rule is cloned into each entry so the result is
//! self-contained when it crosses a process or service boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::TestRule;

/// One rule's verdict within a schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTest {
    /// The originating rule, carried whole for downstream consumers
    pub rule: TestRule,

    /// Whether the test is mandatory at this evaluation
    pub is_due_now: bool,

    /// Human-readable justification for the verdict
    pub reason: String,

    /// Calendar year the test next becomes due; present only on deferred
    /// entries that have a future transition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_due_year: Option<i32>,
}

/// The complete schedule for one equipment item at one evaluation date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Equipment identifier, echoed from the profile (reporting only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Rated capacity in persons, echoed from the profile (reporting only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,

    pub manufacture_date: NaiveDate,
    pub evaluation_date: NaiveDate,

    /// Whole years elapsed since manufacture
    pub age_years: u32,

    /// Whole months past the last whole year (display only)
    pub age_months_remainder: u32,

    /// Tests mandatory now, in catalog declaration order
    pub due_now: Vec<ScheduledTest>,

    /// Remaining tests with their projected next due year, same order
    pub not_yet_due: Vec<ScheduledTest>,

    /// Sum of `cost_amount` over `due_now`
    pub total_cost: f64,

    /// Sum of duration-range midpoints over `due_now`, in hours
    pub total_duration_hours_estimate: f64,
}

impl ScheduleResult {
    /// Codes of the tests due now, in schedule order
    pub fn due_codes(&self) -> Vec<&str> {
        self.due_now.iter().map(|t| t.rule.code.as_str()).collect()
    }
}
