// crates/gate-core/src/config.rs
use std::str::FromStr;

use tracing::level_filters::LevelFilter;

pub const ENV_RUNTIME: &str = "ARXIV_GATE_RUNTIME";
pub const ENV_IMAGE: &str = "ARXIV_GATE_IMAGE";
pub const ENV_CONTAINER_NAME: &str = "ARXIV_GATE_CONTAINER_NAME";
pub const ENV_LOG: &str = "ARXIV_GATE_LOG";

pub const DEFAULT_RUNTIME: &str = "docker";
pub const DEFAULT_IMAGE: &str = "arxiv-processor:latest";
pub const DEFAULT_CONTAINER_NAME: &str = "arxiv-processor";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::WARN;

/// Where the processor image expects its output directory.
pub const CONTAINER_OUTPUT_DIR: &str = "/data/output";

/// Settings that decide how the processor container is launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    pub runtime: String,
    pub image: String,
    pub container_name: String,
    pub log_level: LevelFilter,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            runtime: DEFAULT_RUNTIME.to_string(),
            image: DEFAULT_IMAGE.to_string(),
            container_name: DEFAULT_CONTAINER_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl GateConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            runtime: get(ENV_RUNTIME).unwrap_or(defaults.runtime),
            image: get(ENV_IMAGE).unwrap_or(defaults.image),
            container_name: get(ENV_CONTAINER_NAME).unwrap_or(defaults.container_name),
            log_level: get(ENV_LOG)
                .and_then(|v| LevelFilter::from_str(v.trim()).ok())
                .unwrap_or(defaults.log_level),
        }
    }

    #[must_use]
    pub fn with_runtime(mut self, runtime: Option<String>) -> Self {
        if let Some(runtime) = runtime {
            self.runtime = runtime;
        }
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: Option<String>) -> Self {
        if let Some(image) = image {
            self.image = image;
        }
        self
    }

    #[must_use]
    pub fn with_container_name(mut self, name: Option<String>) -> Self {
        if let Some(name) = name {
            self.container_name = name;
        }
        self
    }
}
