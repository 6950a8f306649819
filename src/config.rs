//! Search configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What a depth-limited search does when no evaluator was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingEvaluator {
    /// Score every cutoff node as `Heuristic(0.0)`.
    #[default]
    Neutral,
    /// Refuse to search with [`crate::error::Error::MissingEvaluator`].
    Fail,
}

/// Configuration shared by every search strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies below the root after which non-terminal nodes are scored by the
    /// evaluator instead of expanded. `None` searches to the end of the game.
    pub depth_limit: Option<usize>,

    /// Cutoff behaviour when no evaluator is available.
    pub missing_evaluator: MissingEvaluator,
}

impl SearchConfig {
    /// Exhaustive search, no cutoffs.
    pub fn exhaustive() -> Self {
        Self::default()
    }

    /// Depth-limited search with the default missing-evaluator policy.
    pub fn depth_limited(depth_limit: usize) -> Self {
        Self {
            depth_limit: Some(depth_limit),
            ..Self::default()
        }
    }

    /// Parses a config from JSON. Absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_is_exhaustive_and_neutral() {
        let config = SearchConfig::default();
        assert_eq!(config.depth_limit, None);
        assert_eq!(config.missing_evaluator, MissingEvaluator::Neutral);
        assert_eq!(config, SearchConfig::exhaustive());
    }

    #[test]
    fn test_from_json() {
        let config =
            SearchConfig::from_json(r#"{"depth_limit": 3, "missing_evaluator": "fail"}"#).unwrap();
        assert_eq!(config.depth_limit, Some(3));
        assert_eq!(config.missing_evaluator, MissingEvaluator::Fail);

        let config = SearchConfig::from_json(r#"{"depth_limit": 2}"#).unwrap();
        assert_eq!(config, SearchConfig::depth_limited(2));

        assert_eq!(SearchConfig::from_json("{}").unwrap(), SearchConfig::default());
    }

    #[test]
    fn test_from_json_rejects_unknown_policy() {
        let err = SearchConfig::from_json(r#"{"missing_evaluator": "guess"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
