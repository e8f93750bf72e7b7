//! Robots API.

use crate::client::FleetClient;
use crate::error::Result;
use crate::types::{Envelope, RobotListRequest, RobotPage, RobotState, RobotSummary};

/// Robots API client.
pub struct RobotsApi {
    client: FleetClient,
}

impl RobotsApi {
    pub(crate) fn new(client: FleetClient) -> Self {
        Self { client }
    }

    /// List robots visible to this app.
    pub async fn list(&self, token: &str, page: RobotListRequest) -> Result<Vec<RobotSummary>> {
        let envelope: Envelope<RobotPage> = self
            .client
            .post("robot/v1.1/list", Some(token), &page)
            .await?;
        Ok(envelope.into_data()?.list)
    }

    /// Get the current state of one robot.
    pub async fn state(&self, token: &str, robot_id: &str) -> Result<RobotState> {
        let envelope: Envelope<RobotState> = self
            .client
            .get(&format!("robot/v1.1/{}/state", robot_id), Some(token))
            .await?;
        envelope.into_data()
    }
}
