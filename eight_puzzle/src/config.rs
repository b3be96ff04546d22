use crate::error::{PuzzleError, Result};
use crate::heuristics::Heuristic;
use serde::Deserialize;
use std::path::Path;

/// Solver settings, loadable from TOML.
///
/// ```toml
/// heuristic = "misplaced-tiles"
/// max_expansions = 200000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Estimate bound into the search for its whole run.
    pub heuristic: Heuristic,

    /// Stop with `SearchExhausted` after this many expansions. `None` runs
    /// until the open set is empty; the reachable space is only 181,440 states.
    pub max_expansions: Option<u64>,
}

impl SolverConfig {
    pub fn with_heuristic(heuristic: Heuristic) -> Self {
        SolverConfig {
            heuristic,
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| PuzzleError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        config.validate();
        Ok(config)
    }

    /// Logs a warning for settings that are legal but almost certainly a mistake.
    pub fn validate(&self) {
        if self.max_expansions == Some(0) {
            tracing::warn!(
                max_expansions = 0,
                "max_expansions = 0 stops every search before the root is expanded"
            );
        }
    }
}
