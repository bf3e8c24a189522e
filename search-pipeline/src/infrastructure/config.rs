// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Infrastructure Configuration
//!
//! Layered configuration for the executor runtime: built-in defaults,
//! optionally overridden by a config file, optionally overridden by
//! `SEARCH_PIPELINE_*` environment variables. Nothing here is read by the
//! domain crate; it only shapes how the infrastructure layer constructs
//! the executor and its adapters.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Runtime-tunable settings for the executor and its adapters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExecutorSettings {
    /// Default `limit` applied when a caller does not specify one.
    pub default_limit: u32,
    /// Default `offset` applied when a caller does not specify one.
    pub default_offset: u32,
    /// Prefix used to build the pubsub channel name: `<prefix>:<request_id>`.
    pub channel_prefix: String,
    /// Bound on the event emitter's internal queue.
    pub emitter_channel_capacity: usize,
}

impl Default for ExecutorSettings {
    fn default() -> Self {
        Self {
            default_limit: 10,
            default_offset: 0,
            channel_prefix: "search".to_string(),
            emitter_channel_capacity: crate::infrastructure::runtime::emitter::DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl ExecutorSettings {
    /// Loads settings from, in increasing precedence: built-in defaults,
    /// an optional file at `config_path` (any format `config` recognizes
    /// by extension; missing file is not an error), then environment
    /// variables prefixed `SEARCH_PIPELINE` (e.g. `SEARCH_PIPELINE_DEFAULT_LIMIT`).
    pub fn load(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("default_limit", defaults.default_limit)?
            .set_default("default_offset", defaults.default_offset)?
            .set_default("channel_prefix", defaults.channel_prefix.clone())?
            .set_default("emitter_channel_capacity", defaults.emitter_channel_capacity as i64)?;

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(false));
        }

        builder = builder.add_source(Environment::with_prefix("SEARCH_PIPELINE"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_without_a_file_or_environment() {
        let settings = ExecutorSettings::load(None).unwrap();
        assert_eq!(settings, ExecutorSettings::default());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = ExecutorSettings::load(Some("/nonexistent/search-pipeline.toml")).unwrap();
        assert_eq!(settings.default_limit, 10);
    }
}
