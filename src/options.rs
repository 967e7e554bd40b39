//! Configuration options for a [`Matcher`](crate::Matcher).
//!
//! Options are built in code with [`MatchOptionsBuilder`] or read from RON:
//!
//! ```
//! use runematch::prelude::*;
//!
//! let options = MatchOptions::from_ron("(algorithm: Exact, case: Ignore)").unwrap();
//! assert_eq!(options.algorithm, Algorithm::Exact);
//! assert!(options.forward);
//!
//! let built = MatchOptionsBuilder::default()
//!     .algorithm(Algorithm::Exact)
//!     .case(CaseMatching::Ignore)
//!     .build()
//!     .unwrap();
//! assert_eq!(options, built);
//! ```

use std::fs;
use std::path::Path;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algo::{Algorithm, BoundaryReset};
use crate::pattern::CaseMatching;

/// How a query is matched against candidate lines
#[derive(Builder, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[builder(default)]
#[serde(default)]
pub struct MatchOptions {
    /// Matching discipline
    pub algorithm: Algorithm,
    /// Case sensitivity of the query
    pub case: CaseMatching,
    /// Scan left to right; when false the match closest to the end wins
    pub forward: bool,
    /// Ignore diacritics on both sides
    pub normalize: bool,
    /// Penalty policy of the fuzzy algorithm
    pub boundary_reset: BoundaryReset,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            case: CaseMatching::default(),
            forward: true,
            normalize: false,
            boundary_reset: BoundaryReset::default(),
        }
    }
}

/// Error type for loading match options
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Error reading {0}: {1}")]
    Io(String, #[source] std::io::Error),
    /// The configuration is not valid RON for [`MatchOptions`]
    #[error("Error parsing options: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

impl MatchOptions {
    /// Parse options from RON text; missing fields keep their defaults.
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let options: MatchOptions = ron::from_str(text)?;
        debug!("parsed match options: {:?}", options);
        Ok(options)
    }

    /// Read options from a RON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.display().to_string(), e))?;
        Self::from_ron(&text).inspect_err(|e| warn!("invalid configuration in {}: {}", path.display(), e))
    }
}
