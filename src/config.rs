use serde::{Deserialize, Serialize};

use crate::error::{RankingError, Result};
use crate::ranking::TiePolicy;

/// Environment variable selecting the tie policy
pub const TIE_POLICY_ENV: &str = "GEOCODE_RANKING_TIE_POLICY";

/// Environment variable capping the number of results kept after sorting
pub const LIMIT_ENV: &str = "GEOCODE_RANKING_LIMIT";

/// Sort options/configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortOptions {
    /// Score-tie handling. `slice::sort_by` is stable, so ties may be `Equal`.
    pub tie_policy: TiePolicy,
    /// Keep at most this many results after sorting
    pub limit: Option<usize>,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            tie_policy: TiePolicy::Equal,
            limit: None,
        }
    }
}

impl SortOptions {
    /// Defaults overridden by `GEOCODE_RANKING_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut options = Self::default();

        if let Some(value) = lookup(TIE_POLICY_ENV) {
            options.tie_policy = value.parse()?;
        }

        if let Some(value) = lookup(LIMIT_ENV) {
            let limit = value.trim().parse::<usize>().map_err(|e| RankingError::Config {
                key: LIMIT_ENV.to_string(),
                message: e.to_string(),
            })?;
            options.limit = Some(limit);
        }

        Ok(options)
    }

    pub fn with_tie_policy(mut self, tie_policy: TiePolicy) -> Self {
        self.tie_policy = tie_policy;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
