//! Tasks API.

use crate::client::FleetClient;
use crate::error::Result;
use crate::types::{Envelope, TaskCreated, TaskInfo, TaskPayload};

/// Tasks API client.
pub struct TasksApi {
    client: FleetClient,
}

impl TasksApi {
    pub(crate) fn new(client: FleetClient) -> Self {
        Self { client }
    }

    /// Create a task from a rendered document. Returns the task id.
    pub async fn create(&self, token: &str, task: &TaskPayload) -> Result<String> {
        let envelope: Envelope<TaskCreated> =
            self.client.post("task/v1.1", Some(token), task).await?;
        Ok(envelope.into_data()?.task_id)
    }

    /// Start execution of a previously created task.
    pub async fn execute(&self, token: &str, task_id: &str) -> Result<()> {
        let envelope: Envelope<serde_json::Value> = self
            .client
            .post_empty(&format!("task/v1.1/{}/execute", task_id), Some(token))
            .await?;
        envelope.ack()
    }

    /// Fetch task detail. Not real-time; the service refreshes this lazily.
    pub async fn info(&self, token: &str, task_id: &str) -> Result<TaskInfo> {
        let envelope: Envelope<TaskInfo> = self
            .client
            .get(&format!("task/v1.1/{}", task_id), Some(token))
            .await?;
        envelope.into_data()
    }
}
