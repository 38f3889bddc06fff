//! Command implementations

pub mod catalog;
pub mod completions;
pub mod forecast;
pub mod schedule;

use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::catalog::RuleCatalog;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;

/// Resolve the active catalog file, if any: flag first, then config
pub(crate) fn catalog_path(global: &GlobalOpts, config: &Config) -> Option<PathBuf> {
    global.catalog.clone().or_else(|| config.catalog.clone())
}

/// Load the active catalog: flag, then config, then the embedded default
pub(crate) fn load_catalog(global: &GlobalOpts, config: &Config) -> Result<RuleCatalog> {
    match catalog_path(global, config) {
        Some(path) => RuleCatalog::from_path(&path).into_diagnostic(),
        None => RuleCatalog::builtin().into_diagnostic(),
    }
}

/// Resolve the effective output format: flag beats config
pub(crate) fn resolve_format(global: &GlobalOpts, config: &Config) -> OutputFormat {
    match global.format {
        OutputFormat::Auto => config
            .default_format
            .as_deref()
            .map(OutputFormat::from_config)
            .unwrap_or(OutputFormat::Auto),
        other => other,
    }
}
