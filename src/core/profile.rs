//! Equipment profile - the per-evaluation input value
//!
//! Profiles are built by callers from external data (database rows, survey
//! forms, YAML files) and handed to the schedule facade by value. The
//! manufacture date is optional here because the upstream data is nullable;
//! the facade refuses to compute without it rather than guessing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifying and scheduling data for one piece of safety equipment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentProfile {
    /// Serial number or other external identifier (reporting only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Rated capacity in persons (reporting only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,

    /// Date of manufacture; absence is an error at evaluation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacture_date: Option<NaiveDate>,

    /// Date the schedule is evaluated for; defaults to today
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_date: Option<NaiveDate>,
}

impl EquipmentProfile {
    /// Create a profile for equipment manufactured on the given date
    pub fn new(manufacture_date: NaiveDate) -> Self {
        Self {
            manufacture_date: Some(manufacture_date),
            ..Self::default()
        }
    }

    /// Set an explicit evaluation date
    pub fn evaluated_on(mut self, date: NaiveDate) -> Self {
        self.evaluation_date = Some(date);
        self
    }
}
