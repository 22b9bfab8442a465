//! Engine configuration: defaults, env/file loading, and snapshot swapping.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use std::{env, fs};

use anyhow::Context;
use serde::Deserialize;

use crate::error::{AutoQueueError, Result};

/// Source that produced the engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
}

/// Auto-queue settings. Loaded once at startup and read on every playback
/// stop; reload means swapping the whole snapshot via [`ConfigWatch`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AutoQueueConfig {
    /// Master switch. When off, every playback stop is dropped at the gate.
    pub enable_auto_queue: bool,
    /// How much of a movie (0-100) the user must have watched before the
    /// next one is queued. The comparison is inclusive: watching exactly
    /// this much passes.
    pub required_watch_percentage: u8,
    /// Reserved. Declared for forward compatibility, never consulted.
    pub only_for_collections: bool,
    /// Reserved. Declared for forward compatibility, never consulted.
    pub delay_minutes: u32,
}

impl Default for AutoQueueConfig {
    fn default() -> Self {
        Self {
            enable_auto_queue: true,
            required_watch_percentage: 80,
            only_for_collections: false,
            delay_minutes: 0,
        }
    }
}

impl AutoQueueConfig {
    /// Load configuration overrides using environment variables.
    /// Evaluation order:
    /// 1) `$NEXTREEL_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$NEXTREEL_CONFIG_JSON` (inline JSON),
    /// 3) defaults if neither is set.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        if let Ok(path_str) = env::var("NEXTREEL_CONFIG_PATH")
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var("NEXTREEL_CONFIG_JSON")
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .context("failed to parse NEXTREEL_CONFIG_JSON")?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    /// Parse a TOML or JSON config file, picking the format by extension
    /// (anything that is not `.json` is treated as TOML).
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| {
            format!("failed to read config file {}", path.display())
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config: Self = if is_json {
            serde_json::from_str(&raw).with_context(|| {
                format!("invalid JSON config in {}", path.display())
            })?
        } else {
            toml::from_str(&raw).with_context(|| {
                format!("invalid TOML config in {}", path.display())
            })?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that cannot mean anything: the watch threshold is a
    /// percentage and must stay within 0-100.
    pub fn validate(&self) -> Result<()> {
        if self.required_watch_percentage > 100 {
            return Err(AutoQueueError::Config(format!(
                "required_watch_percentage must be 0-100, got {}",
                self.required_watch_percentage
            )));
        }
        Ok(())
    }
}

/// Shared, atomically swappable configuration snapshot.
///
/// The pipeline takes a [`ConfigWatch::snapshot`] per event, so a reload
/// never changes the rules mid-decision and fields are never mutated in
/// place.
#[derive(Debug)]
pub struct ConfigWatch {
    inner: RwLock<Arc<AutoQueueConfig>>,
}

impl ConfigWatch {
    pub fn new(config: AutoQueueConfig) -> Self {
        Self {
            inner: RwLock::new(Arc::new(config)),
        }
    }

    pub fn snapshot(&self) -> Arc<AutoQueueConfig> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn replace(&self, config: AutoQueueConfig) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) =
            Arc::new(config);
    }
}

impl Default for ConfigWatch {
    fn default() -> Self {
        Self::new(AutoQueueConfig::default())
    }
}
