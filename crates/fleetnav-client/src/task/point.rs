//! Waypoints and points of interest.

use crate::task::ActionRecord;
use crate::types::{PointExt, TaskPointPayload};

/// A point of interest: a named coordinate within a mapped area.
///
/// Typically obtained from the service's map data; only the fields the task
/// document consumes are modeled here.
#[derive(Debug, Clone, PartialEq)]
pub struct Poi {
    /// Id of the area (map) the point belongs to.
    pub area_id: String,
    /// X coordinate in map space.
    pub x: f64,
    /// Y coordinate in map space.
    pub y: f64,
    /// Display name.
    pub name: String,
    /// Heading at the point, in the map's convention.
    pub yaw: f64,
}

/// One waypoint of a task: a point of interest plus an ordered action list.
///
/// Actions execute in append order when the robot reaches the point.
#[derive(Debug, Clone)]
pub struct TaskPoint {
    area_id: String,
    x: f64,
    y: f64,
    name: String,
    yaw: Option<f64>,
    actions: Vec<ActionRecord>,
}

impl TaskPoint {
    /// Create a waypoint at `poi`.
    ///
    /// With `ignore_yaw` the arrival heading is left to the robot and the
    /// `yaw` field is omitted from the rendered document entirely.
    pub fn new(poi: &Poi, ignore_yaw: bool) -> Self {
        Self {
            area_id: poi.area_id.clone(),
            x: poi.x,
            y: poi.y,
            name: poi.name.clone(),
            yaw: (!ignore_yaw).then_some(poi.yaw),
            actions: Vec::new(),
        }
    }

    /// Append an action. Call order is execution order.
    pub fn add_action(&mut self, action: ActionRecord) -> &mut Self {
        self.actions.push(action);
        self
    }

    /// Render to the wire shape.
    pub(crate) fn render(&self) -> TaskPointPayload {
        TaskPointPayload {
            area_id: self.area_id.clone(),
            x: self.x,
            y: self.y,
            point_type: 0,
            stop_radius: 1,
            ext: PointExt {
                name: self.name.clone(),
            },
            step_acts: self.actions.iter().map(ActionRecord::render).collect(),
            yaw: self.yaw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn poi() -> Poi {
        Poi {
            area_id: "A1".to_string(),
            x: 1.5,
            y: -2.25,
            name: "dock".to_string(),
            yaw: 90.0,
        }
    }

    #[test]
    fn test_yaw_omitted_when_ignored() {
        let rendered = serde_json::to_value(TaskPoint::new(&poi(), true).render()).unwrap();
        assert!(rendered.get("yaw").is_none());
    }

    #[test]
    fn test_yaw_present_when_not_ignored() {
        let rendered = serde_json::to_value(TaskPoint::new(&poi(), false).render()).unwrap();
        assert_eq!(rendered["yaw"], json!(90.0));
    }

    #[test]
    fn test_point_carries_fixed_fields() {
        let rendered = serde_json::to_value(TaskPoint::new(&poi(), true).render()).unwrap();
        assert_eq!(rendered["areaId"], json!("A1"));
        assert_eq!(rendered["x"], json!(1.5));
        assert_eq!(rendered["y"], json!(-2.25));
        assert_eq!(rendered["type"], json!(0));
        assert_eq!(rendered["stopRadius"], json!(1));
        assert_eq!(rendered["ext"], json!({"name": "dock"}));
        assert_eq!(rendered["stepActs"], json!([]));
    }

    #[test]
    fn test_actions_render_in_append_order() {
        let mut point = TaskPoint::new(&poi(), true);
        point
            .add_action(ActionRecord::play_audio("a"))
            .add_action(ActionRecord::pause(3))
            .add_action(ActionRecord::play_audio("b"));

        let rendered = serde_json::to_value(point.render()).unwrap();
        let acts = rendered["stepActs"].as_array().unwrap();
        assert_eq!(acts.len(), 3);
        assert_eq!(acts[0]["data"]["audioId"], json!("a"));
        assert_eq!(acts[1]["type"], json!(18));
        assert_eq!(acts[2]["data"]["audioId"], json!("b"));
    }
}
