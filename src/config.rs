//! Runtime configuration
//!
//! Defaults reproduce the stock behaviour (±5 jitter, unseeded, embedded
//! tables). Each field can be overridden from the environment:
//!
//! - `NUTRITION_JITTER`: jitter amplitude in `[0, 90]`, `0` disables jitter
//! - `NUTRITION_SEED`: u64 seed for reproducible jitter
//! - `REFERENCE_TABLES`: path to a JSON reference tables file

use crate::risk::heuristic::DEFAULT_JITTER;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub const ENV_JITTER: &str = "NUTRITION_JITTER";
pub const ENV_SEED: &str = "NUTRITION_SEED";
pub const ENV_TABLES: &str = "REFERENCE_TABLES";

#[derive(Debug, Clone, PartialEq)]
pub struct AssessorConfig {
    pub jitter: f64,
    pub seed: Option<u64>,
    pub tables_path: Option<PathBuf>,
}

impl Default for AssessorConfig {
    fn default() -> Self {
        Self {
            jitter: DEFAULT_JITTER,
            seed: None,
            tables_path: None,
        }
    }
}

impl AssessorConfig {
    /// Read overrides from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_JITTER) {
            config.jitter = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be a number, got '{}'", ENV_JITTER, raw))?;
        }

        if let Some(raw) = lookup(ENV_SEED) {
            config.seed = Some(
                raw.trim()
                    .parse()
                    .with_context(|| format!("{} must be an unsigned integer, got '{}'", ENV_SEED, raw))?,
            );
        }

        config.tables_path = lookup(ENV_TABLES)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AssessorConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AssessorConfig::default());
        assert_eq!(config.jitter, 5.0);
    }

    #[test]
    fn test_overrides() {
        let config = AssessorConfig::from_lookup(lookup_from(&[
            (ENV_JITTER, "0"),
            (ENV_SEED, " 1234 "),
            (ENV_TABLES, "/etc/nutrition/tables.json"),
        ]))
        .unwrap();

        assert_eq!(config.jitter, 0.0);
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.tables_path, Some(PathBuf::from("/etc/nutrition/tables.json")));
    }

    #[test]
    fn test_rejects_malformed_values() {
        assert!(AssessorConfig::from_lookup(lookup_from(&[(ENV_JITTER, "wide")])).is_err());
        assert!(AssessorConfig::from_lookup(lookup_from(&[(ENV_SEED, "-4")])).is_err());
    }
}
