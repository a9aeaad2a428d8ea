//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bst-node/bst-node.toml`
//! 3. Local config: the file passed to [`Settings::load`]
//! 4. Environment variables: `BSTNODE_*` prefix

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::{CountPolicy, NodeArena};
use crate::errors::{BstError, BstResult};

/// Prefix for environment overrides, e.g. `BSTNODE_COUNT_POLICY=checked`.
pub const ENV_PREFIX: &str = "BSTNODE";

const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Unified configuration for node arenas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Counter arithmetic at the edges of `u32` (default: wrap)
    pub count_policy: CountPolicy,
    /// Slots preallocated by arenas built from these settings
    pub initial_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            count_policy: CountPolicy::default(),
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

/// Get the XDG config directory for bst-node.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bst-node").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bst-node.toml"))
}

impl Settings {
    /// Build an empty arena sized and configured from these settings.
    pub fn new_arena<T>(&self) -> NodeArena<T> {
        NodeArena::with_capacity_and_policy(self.initial_capacity, self.count_policy)
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local` - Optional TOML file layered over the global config. It must
    ///   exist when given.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/bst-node/bst-node.toml`
    /// 3. Local config file
    /// 4. Environment variables: `BSTNODE_*`
    #[instrument(level = "debug")]
    pub fn load(local: Option<&Path>) -> BstResult<Self> {
        let mut builder = defaults_builder()?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                builder = builder.add_source(
                    File::from(global_path)
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        if let Some(local_path) = local {
            debug!(path = %local_path.display(), "loading local config");
            builder = builder.add_source(
                File::from(local_path)
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;

        Self::apply_env_overrides(settings, ENV_PREFIX)
    }

    /// Load defaults plus a single TOML file.
    ///
    /// Does NOT include the global config or environment variables.
    #[instrument(level = "debug")]
    pub fn load_file_only(path: &Path) -> BstResult<Self> {
        let config = defaults_builder()?
            .add_source(File::from(path).format(FileFormat::Toml).required(true))
            .build()
            .map_err(config_err)?;

        config.try_deserialize().map_err(config_err)
    }

    /// Apply `<prefix>_*` environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, prefix: &str) -> BstResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("count_policy") {
            debug!(value = %val, "count_policy overridden from environment");
            settings.count_policy = val.parse()?;
        }
        if let Ok(val) = config.get_string("initial_capacity") {
            debug!(value = %val, "initial_capacity overridden from environment");
            settings.initial_capacity = val.trim().parse().map_err(|e| BstError::Config {
                message: format!("initial_capacity: {e}"),
            })?;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> BstResult<String> {
        toml::to_string_pretty(self).map_err(|e| BstError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# bst-node configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/bst-node/bst-node.toml
#   Local:  file passed to Settings::load
#   Env:    BSTNODE_* environment variables (explicit overrides)

# Occurrence counter behaviour at the edges of u32:
#   "wrap"     - decrementing 0 yields u32::MAX (default)
#   "saturate" - clamp at 0 and u32::MAX
#   "checked"  - refuse the step with an error
# count_policy = "wrap"

# Slots preallocated by each arena
# initial_capacity = 16
"#
        .to_string()
    }
}

fn defaults_builder() -> BstResult<ConfigBuilder<DefaultState>> {
    let defaults = Settings::default();
    Config::builder()
        .set_default("count_policy", defaults.count_policy.as_str())
        .map_err(config_err)?
        .set_default("initial_capacity", defaults.initial_capacity as i64)
        .map_err(config_err)
}

fn config_err(e: ConfigError) -> BstError {
    BstError::Config {
        message: e.to_string(),
    }
}
