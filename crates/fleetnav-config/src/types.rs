//! Configuration types.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Validated client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetConfig {
    /// Base URL of the fleet service, e.g. `https://api.example.com`.
    pub url_prefix: String,
    /// Application id used for token requests.
    pub app_id: String,
    /// Shared secret used for request signing.
    pub app_secret: String,
    /// Raw authorization code sent as `Authorization: APPCODE …`.
    pub appcode: String,
    /// Default robot to address when a command doesn't name one.
    pub robot_id: Option<String>,
}

/// One configuration layer as read from a file or the environment.
///
/// All fields optional; layers merge with later layers overriding earlier
/// ones per field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialConfig {
    pub url_prefix: Option<String>,
    pub app_id: Option<String>,
    pub app_secret: Option<String>,
    pub appcode: Option<String>,
    pub robot_id: Option<String>,
}

impl PartialConfig {
    /// Overlay `other` on top of this layer.
    pub fn merge(&mut self, other: PartialConfig) {
        if other.url_prefix.is_some() {
            self.url_prefix = other.url_prefix;
        }
        if other.app_id.is_some() {
            self.app_id = other.app_id;
        }
        if other.app_secret.is_some() {
            self.app_secret = other.app_secret;
        }
        if other.appcode.is_some() {
            self.appcode = other.appcode;
        }
        if other.robot_id.is_some() {
            self.robot_id = other.robot_id;
        }
    }

    /// Parse a layer from TOML.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validate that all required fields are present.
    pub fn into_config(self) -> Result<FleetConfig> {
        Ok(FleetConfig {
            url_prefix: self.url_prefix.ok_or(ConfigError::MissingField {
                field: "url_prefix",
                env: "URL_PREFIX",
            })?,
            app_id: self.app_id.ok_or(ConfigError::MissingField {
                field: "app_id",
                env: "APP_ID",
            })?,
            app_secret: self.app_secret.ok_or(ConfigError::MissingField {
                field: "app_secret",
                env: "APP_SECRET",
            })?,
            appcode: self.appcode.ok_or(ConfigError::MissingField {
                field: "appcode",
                env: "APPCODE",
            })?,
            robot_id: self.robot_id,
        })
    }
}
