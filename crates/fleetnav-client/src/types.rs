//! Request and response types for the FleetNav cloud API.
//!
//! These types mirror the service's wire contract. Field names are fixed by
//! the remote side; do not rename them.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Response envelope
// ─────────────────────────────────────────────────────────────────────────────

/// Service response envelope.
///
/// Every endpoint answers `{ "status": int, "data": ... }` inside an HTTP 200;
/// `status == 200` signals success at the service layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Service-level status code.
    pub status: i64,
    /// Payload, present on success.
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Extract the payload, rejecting non-success envelopes.
    pub fn into_data(self) -> Result<T> {
        if self.status != 200 {
            return Err(Error::Service {
                status: self.status,
            });
        }
        self.data.ok_or(Error::Service { status: 200 })
    }

    /// Check the envelope status, discarding any payload.
    pub fn ack(self) -> Result<()> {
        if self.status != 200 {
            return Err(Error::Service {
                status: self.status,
            });
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Authentication
// ─────────────────────────────────────────────────────────────────────────────

/// Signed token request body.
///
/// `timestamp` must be the same value that went into `sign`; the service
/// recomputes the signature and rejects a mismatch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    /// Application id.
    pub app_id: String,
    /// Epoch milliseconds at signing time.
    pub timestamp: i64,
    /// Lowercase hex MD5 of `appId + timestamp + appSecret`.
    pub sign: String,
}

/// Token grant returned by the auth endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenGrant {
    /// Renewal key. Not consumed by any downstream call today, but retained.
    #[serde(default)]
    pub key: String,
    /// The opaque token for `X-Token` headers.
    pub token: String,
    /// Validity window in seconds from issuance.
    pub expire_time: i64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Robots
// ─────────────────────────────────────────────────────────────────────────────

/// Page request for the robot list endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotListRequest {
    pub page_size: u32,
    pub page_num: u32,
}

impl Default for RobotListRequest {
    fn default() -> Self {
        Self {
            page_size: 10,
            page_num: 1,
        }
    }
}

/// Robot list payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RobotPage {
    /// Robots on this page.
    #[serde(default)]
    pub list: Vec<RobotSummary>,
}

/// One robot in a list response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotSummary {
    /// Robot id.
    pub robot_id: String,
    /// Whether the robot is currently online.
    #[serde(default)]
    pub is_on_line: bool,
    /// Remaining fields the service may report.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Robot state payload.
///
/// The service's state schema is open-ended; this stays a raw mapping rather
/// than guessing a fixed shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RobotState(pub serde_json::Map<String, serde_json::Value>);

impl RobotState {
    /// Look up a state field by wire name.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tasks
// ─────────────────────────────────────────────────────────────────────────────

/// Payload of a successful task creation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreated {
    /// Id of the created task.
    pub task_id: String,
}

/// Task detail payload.
///
/// Open mapping with typed accessors for the progress flags the service
/// reports. Note the wire spelling of `isExcute`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TaskInfo(pub serde_json::Map<String, serde_json::Value>);

impl TaskInfo {
    /// Look up a detail field by wire name.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    fn flag(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(|v| v.as_bool())
    }

    /// Whether the task was cancelled.
    pub fn is_cancelled(&self) -> Option<bool> {
        self.flag("isCancel")
    }

    /// Whether the task has finished.
    pub fn is_finished(&self) -> Option<bool> {
        self.flag("isFinish")
    }

    /// Whether the task is currently executing.
    pub fn is_executing(&self) -> Option<bool> {
        self.flag("isExcute")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Task document wire shape
// ─────────────────────────────────────────────────────────────────────────────

/// Rendered task document, ready to POST to the task creation endpoint.
///
/// Produced by [`crate::task::TaskBuilder::render`]; the mode/type constants
/// are fixed for this client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub name: String,
    pub robot_id: String,
    pub route_mode: i64,
    pub run_mode: i64,
    pub run_num: i64,
    pub task_type: i64,
    pub run_type: i64,
    pub source_type: i64,
    pub ignore_public_site: bool,
    pub speed: f64,
    /// Waypoints in visit order.
    pub task_pts: Vec<TaskPointPayload>,
    /// Optional final waypoint, visited after `task_pts`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_pt: Option<TaskPointPayload>,
}

/// One rendered waypoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPointPayload {
    pub area_id: String,
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type")]
    pub point_type: i64,
    pub stop_radius: i64,
    pub ext: PointExt,
    /// Waypoint actions, executed in order.
    pub step_acts: Vec<ActionPayload>,
    /// Arrival heading. Omitted entirely when the heading is ignored; never
    /// serialized as null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaw: Option<f64>,
}

/// Waypoint extension block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointExt {
    /// Display name of the point of interest.
    pub name: String,
}

/// One rendered waypoint action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionPayload {
    /// Service action code.
    #[serde(rename = "type")]
    pub code: i64,
    /// Action parameters, keyed by wire name.
    pub data: serde_json::Map<String, serde_json::Value>,
}
