//! CLI command handlers.

use anyhow::Result;
use fleetnav_client::{FleetClient, Session};
use fleetnav_config::FleetConfig;

pub mod dispatch;
pub mod robots;
pub mod state;
pub mod task;
pub mod token;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Resolved client configuration.
    pub config: FleetConfig,
    /// Output as JSON for scripting.
    pub json_output: bool,
    /// Verbose output enabled.
    pub verbose: bool,
}

impl Context {
    /// Build a client against the configured service.
    pub fn client(&self) -> Result<FleetClient> {
        Ok(FleetClient::builder()
            .base_url(&self.config.url_prefix)
            .appcode(&self.config.appcode)
            .build()?)
    }

    /// Build an authenticated session over `client`.
    pub fn session(&self, client: &FleetClient) -> Session {
        client.session(&self.config.app_id, &self.config.app_secret)
    }

    /// Resolve the robot to address: explicit argument, then config default.
    pub fn robot_id(&self, arg: Option<String>) -> Result<String> {
        arg.or_else(|| self.config.robot_id.clone())
            .ok_or_else(|| anyhow::anyhow!("no robot id given — pass --robot or set robot_id in config"))
    }
}
