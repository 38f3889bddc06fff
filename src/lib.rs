//! SST: SOLAS Survey Toolkit
//!
//! A library and CLI for computing the mandatory SOLAS/IMO test schedule
//! for inflatable liferafts and similar maritime safety equipment. The
//! scheduling engine is a pure function from an equipment profile and an
//! evaluation date to a schedule result; all I/O lives in the CLI layer.

pub mod catalog;
pub mod cli;
pub mod core;
pub mod schedule;
