//! Core module - fundamental types and utilities

pub mod age;
pub mod config;
pub mod profile;

pub use age::{equipment_age, EquipmentAge, InvalidDateRange};
pub use config::Config;
pub use profile::EquipmentProfile;
