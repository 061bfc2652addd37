//! Queue configuration

use crate::error::{QueueError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Startup settings for a queue
///
/// `random` is normally read from the player's persisted settings and
/// written back whenever a `RandomModeChanged` event is drained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QueueConfig {
    /// Start with random mode enabled
    #[serde(default)]
    pub random: bool,

    /// Fixed shuffle seed (reproducible sessions); entropy when unset
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

impl QueueConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// Environment variables are prefixed with `SOUL_QUEUE_`, e.g.
    /// `SOUL_QUEUE_RANDOM=true` or `SOUL_QUEUE_SHUFFLE_SEED=42`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        if let Some(path) = path.filter(|p| p.exists()) {
            settings = settings.add_source(config::File::from(path));
        }

        // Override with environment variables (prefixed with SOUL_QUEUE_)
        settings = settings.add_source(
            config::Environment::with_prefix("SOUL_QUEUE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| QueueError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| QueueError::Config(e.to_string()))
    }
}
