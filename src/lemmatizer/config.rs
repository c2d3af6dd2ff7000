//! Configuration for the lemmatizer.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMetric;
use crate::error::{LexitrieError, Result};
use crate::fuzzy::SearchConfig;

/// Configuration for [`Lemmatizer`](crate::lemmatizer::Lemmatizer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LemmatizerConfig {
    /// Fuzzy search budgets and switches.
    pub search: SearchConfig,
    /// Metric used to rank candidates against the query.
    pub metric: DistanceMetric,
    /// Maximum number of ranked candidates returned by `candidates`.
    pub max_candidates: usize,
}

impl Default for LemmatizerConfig {
    fn default() -> Self {
        LemmatizerConfig {
            search: SearchConfig::default(),
            metric: DistanceMetric::default(),
            max_candidates: 10,
        }
    }
}

impl LemmatizerConfig {
    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config: LemmatizerConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.search.validate()?;
        if self.max_candidates == 0 {
            return Err(LexitrieError::configuration(
                "max_candidates must be greater than 0",
            ));
        }
        Ok(())
    }
}
