//! Rule catalog - the static table of regulatory test definitions

pub mod loader;
pub mod rule;

pub use loader::{CatalogError, RuleCatalog};
pub use rule::{DurationRange, TestCondition, TestRule};
