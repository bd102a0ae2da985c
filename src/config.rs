// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Analysis configuration

use crate::geometry::DEFAULT_EPSILON;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "meshprobe.toml";

/// Which measurements to run and how
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Run the Monte Carlo volume estimate
    pub estimate_volume: bool,
    /// Monte Carlo sample count
    pub samples: u64,
    /// Seed for the sampler; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Sum triangle areas on the rayon pool
    pub parallel_area: bool,
    /// Spread Monte Carlo samples over the rayon pool
    pub parallel_sampling: bool,
    /// Worker threads for the area sum and parallel sampling; 0 uses the rayon default
    pub workers: usize,
    /// Parallel-ray determinant threshold
    pub epsilon: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            estimate_volume: true,
            samples: 100_000,
            seed: None,
            parallel_area: true,
            parallel_sampling: false,
            workers: 0,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl AnalysisConfig {
    /// Area and bounding box only, single threaded
    pub fn info_only() -> Self {
        Self {
            estimate_volume: false,
            parallel_area: false,
            ..Self::default()
        }
    }

    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: AnalysisConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `meshprobe.toml` if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config = if PathBuf::from(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `MESHPROBE_*` overrides read through `lookup`
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(samples) = lookup("MESHPROBE_SAMPLES") {
            self.samples = samples
                .parse()
                .with_context(|| format!("Invalid MESHPROBE_SAMPLES: {}", samples))?;
        }

        if let Some(seed) = lookup("MESHPROBE_SEED") {
            self.seed = Some(
                seed.parse()
                    .with_context(|| format!("Invalid MESHPROBE_SEED: {}", seed))?,
            );
        }

        if let Some(workers) = lookup("MESHPROBE_WORKERS") {
            self.workers = workers
                .parse()
                .with_context(|| format!("Invalid MESHPROBE_WORKERS: {}", workers))?;
        }

        Ok(self)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert!(config.estimate_volume);
        assert_eq!(config.samples, 100_000);
        assert_eq!(config.epsilon, 1e-6);

        let info = AnalysisConfig::info_only();
        assert!(!info.estimate_volume);
        assert!(!info.parallel_area);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AnalysisConfig = toml::from_str("samples = 500\nseed = 9\n").unwrap();
        assert_eq!(config.samples, 500);
        assert_eq!(config.seed, Some(9));
        assert!(config.parallel_area);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [("MESHPROBE_SAMPLES", "1234"), ("MESHPROBE_SEED", "77")]
            .into_iter()
            .collect();
        let config = AnalysisConfig::default()
            .with_env_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.samples, 1234);
        assert_eq!(config.seed, Some(77));
        assert_eq!(config.workers, 0);
    }

    #[test]
    fn test_bad_env_value() {
        let result = AnalysisConfig::default()
            .with_env_overrides(|key| (key == "MESHPROBE_WORKERS").then(|| "many".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let config = AnalysisConfig {
            samples: 42,
            seed: Some(3),
            ..AnalysisConfig::default()
        };
        config.save(&path).unwrap();
        assert_eq!(AnalysisConfig::from_file(&path).unwrap(), config);
    }
}
