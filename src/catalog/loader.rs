//! Rule catalog loading and validation
//!
//! A catalog is validated once, at load time, and immutable afterwards. A
//! malformed rule is a configuration error surfaced to whoever shipped the
//! catalog file, never a per-evaluation failure.

use rust_embed::Embed;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::rule::TestRule;

#[derive(Embed)]
#[folder = "catalogs/"]
struct EmbeddedCatalogs;

const DEFAULT_CATALOG: &str = "default.yaml";

/// Errors raised while loading or validating a rule catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_yml::Error),

    #[error("invalid rule {code}: {reason}")]
    InvalidRule { code: String, reason: String },

    #[error("duplicate rule code {0}")]
    DuplicateCode(String),

    #[error("embedded default catalog is missing from the binary")]
    MissingEmbedded,
}

/// On-disk shape of a catalog file
#[derive(serde::Deserialize)]
struct CatalogFile {
    rules: Vec<TestRule>,
}

/// A validated, immutable set of test rules
///
/// Declaration order is preserved: schedule output lists rules in the order
/// the catalog defines them.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleCatalog {
    rules: Vec<TestRule>,
}

impl RuleCatalog {
    /// Build a catalog from rules, validating every invariant
    pub fn new(rules: Vec<TestRule>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for rule in &rules {
            rule.validate().map_err(|reason| CatalogError::InvalidRule {
                code: rule.code.clone(),
                reason,
            })?;
            if !seen.insert(rule.code.clone()) {
                return Err(CatalogError::DuplicateCode(rule.code.clone()));
            }
        }
        Ok(Self { rules })
    }

    /// Parse and validate a catalog from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yml::from_str(yaml)?;
        Self::new(file.rules)
    }

    /// Load and validate a catalog file
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    /// The embedded default SOLAS/IMO catalog
    pub fn builtin() -> Result<Self, CatalogError> {
        let asset = EmbeddedCatalogs::get(DEFAULT_CATALOG).ok_or(CatalogError::MissingEmbedded)?;
        let yaml = std::str::from_utf8(asset.data.as_ref())
            .map_err(|_| CatalogError::MissingEmbedded)?;
        Self::from_yaml(yaml)
    }

    /// Rules in declaration order
    pub fn rules(&self) -> &[TestRule] {
        &self.rules
    }

    /// Look up a rule by code
    pub fn get(&self, code: &str) -> Option<&TestRule> {
        self.rules.iter().find(|r| r.code == code)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
