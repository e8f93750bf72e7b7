//! Waypoint actions.

use std::collections::HashMap;

use serde_json::{json, Map, Value};

use crate::types::ActionPayload;

/// Supported waypoint action kinds.
///
/// The discriminants are the service's action enumeration and must match
/// exactly. New kinds are added as new variants plus a constructor on
/// [`ActionRecord`]; existing constructors never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Hold position for a number of seconds.
    Pause,
    /// Play a pre-uploaded audio clip.
    PlayAudio,
    /// Emit a custom event and wait at the waypoint.
    Wait,
}

impl ActionKind {
    /// Wire code for this action kind.
    pub fn code(self) -> i64 {
        match self {
            ActionKind::Pause => 18,
            ActionKind::PlayAudio => 5,
            ActionKind::Wait => 40,
        }
    }
}

/// One waypoint action: a kind plus its parameter mapping.
///
/// Immutable once constructed; consumed by appending to a
/// [`TaskPoint`](crate::task::TaskPoint).
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRecord {
    kind: ActionKind,
    data: Map<String, Value>,
}

impl ActionRecord {
    /// Pause at the waypoint for `duration_secs` seconds.
    pub fn pause(duration_secs: i64) -> Self {
        let mut data = Map::new();
        data.insert("pauseTime".to_string(), json!(duration_secs));
        Self {
            kind: ActionKind::Pause,
            data,
        }
    }

    /// Play the audio clip `audio_id` once, full volume, single channel.
    ///
    /// The -1 values mean unbounded/unused and are part of the wire
    /// contract; the service rejects other playback profiles for this
    /// client's task type.
    pub fn play_audio(audio_id: impl Into<String>) -> Self {
        let mut data = Map::new();
        data.insert("mode".to_string(), json!(1));
        data.insert("url".to_string(), json!(""));
        data.insert("audioId".to_string(), json!(audio_id.into()));
        data.insert("interval".to_string(), json!(-1));
        data.insert("num".to_string(), json!(1));
        data.insert("volume".to_string(), json!(100));
        data.insert("channel".to_string(), json!(1));
        data.insert("duration".to_string(), json!(-1));
        Self {
            kind: ActionKind::PlayAudio,
            data,
        }
    }

    /// Wait at the waypoint and emit an event carrying `user_data`.
    ///
    /// The mapping is passed through opaquely; the service surfaces it on
    /// its event channel when the waypoint is reached.
    pub fn wait(user_data: HashMap<String, String>) -> Self {
        let mut data = Map::new();
        data.insert("userData".to_string(), json!(user_data));
        Self {
            kind: ActionKind::Wait,
            data,
        }
    }

    /// The action kind.
    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// Render to the wire shape.
    pub(crate) fn render(&self) -> ActionPayload {
        ActionPayload {
            code: self.kind.code(),
            data: self.data.clone(),
        }
    }
}
