//! Configuration loading for the FleetNav client tools.
//!
//! Provides TOML-based configuration with:
//! - Config file layering (XDG user config + project-local overrides)
//! - `FLEETNAV_*` environment variables as the final layer
//! - Validation of the fields a client needs before it can authenticate

pub mod discovery;
pub mod error;
pub mod types;

pub use discovery::{
    load_config, load_config_file, load_config_with_options, xdg_config_dir, ConfigSource,
    LoadedConfig,
};
pub use error::{ConfigError, Result};
pub use types::{FleetConfig, PartialConfig};
