//! Task document builder.

use crate::task::TaskPoint;
use crate::types::TaskPayload;

// Routing/run-mode constants fixed for this client's task type.
const ROUTE_MODE: i64 = 1;
const RUN_MODE: i64 = 1;
const RUN_NUM: i64 = 1;
const TASK_TYPE: i64 = 4;
const RUN_TYPE: i64 = 21;
const SOURCE_TYPE: i64 = 6;
const SPEED: f64 = 1.0;

/// Builder for a multi-point navigation task.
///
/// Waypoints are visited in the order added; the optional back point is
/// visited after all of them. The builder performs no validation — an empty
/// route renders fine and is rejected by the service on submission.
///
/// # Example
///
/// ```
/// use fleetnav_client::task::{ActionRecord, Poi, TaskBuilder, TaskPoint};
///
/// let poi = Poi {
///     area_id: "A1".into(),
///     x: 0.5,
///     y: 2.0,
///     name: "hall".into(),
///     yaw: 0.0,
/// };
///
/// let mut stop = TaskPoint::new(&poi, true);
/// stop.add_action(ActionRecord::pause(10));
///
/// let mut task = TaskBuilder::new("patrol", "R1");
/// task.add_point(stop);
/// let payload = task.render();
/// ```
#[derive(Debug, Clone)]
pub struct TaskBuilder {
    name: String,
    robot_id: String,
    points: Vec<TaskPoint>,
    back_point: Option<TaskPoint>,
}

impl TaskBuilder {
    /// Start a task named `name` for robot `robot_id`.
    pub fn new(name: impl Into<String>, robot_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            robot_id: robot_id.into(),
            points: Vec::new(),
            back_point: None,
        }
    }

    /// Append a waypoint. Order of calls is visit order.
    pub fn add_point(&mut self, point: TaskPoint) -> &mut Self {
        self.points.push(point);
        self
    }

    /// Set the waypoint visited after the route, e.g. a docking location.
    ///
    /// At most one back point exists; calling again replaces the previous
    /// one.
    pub fn back_point(&mut self, point: TaskPoint) -> &mut Self {
        self.back_point = Some(point);
        self
    }

    /// Render the document to its wire shape.
    pub fn render(&self) -> TaskPayload {
        TaskPayload {
            name: self.name.clone(),
            robot_id: self.robot_id.clone(),
            route_mode: ROUTE_MODE,
            run_mode: RUN_MODE,
            run_num: RUN_NUM,
            task_type: TASK_TYPE,
            run_type: RUN_TYPE,
            source_type: SOURCE_TYPE,
            ignore_public_site: false,
            speed: SPEED,
            task_pts: self.points.iter().map(TaskPoint::render).collect(),
            back_pt: self.back_point.as_ref().map(TaskPoint::render),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{ActionRecord, Poi};
    use serde_json::json;

    fn poi(area: &str, x: f64, y: f64, name: &str) -> Poi {
        Poi {
            area_id: area.to_string(),
            x,
            y,
            name: name.to_string(),
            yaw: 0.0,
        }
    }

    #[test]
    fn test_single_point_document_matches_fixed_defaults() {
        let mut task = TaskBuilder::new("Task1", "R1");
        task.add_point(TaskPoint::new(&poi("A1", 1.0, 2.0, "m1"), true));

        let rendered = serde_json::to_value(task.render()).unwrap();
        assert_eq!(rendered["name"], json!("Task1"));
        assert_eq!(rendered["robotId"], json!("R1"));
        assert_eq!(rendered["routeMode"], json!(1));
        assert_eq!(rendered["runMode"], json!(1));
        assert_eq!(rendered["runNum"], json!(1));
        assert_eq!(rendered["taskType"], json!(4));
        assert_eq!(rendered["runType"], json!(21));
        assert_eq!(rendered["sourceType"], json!(6));
        assert_eq!(rendered["ignorePublicSite"], json!(false));
        assert_eq!(rendered["speed"], json!(1.0));
        assert_eq!(rendered["taskPts"].as_array().unwrap().len(), 1);
        assert!(rendered.get("backPt").is_none());
    }

    #[test]
    fn test_points_render_in_visit_order() {
        let mut task = TaskBuilder::new("t", "r");
        task.add_point(TaskPoint::new(&poi("A", 0.0, 0.0, "first"), true))
            .add_point(TaskPoint::new(&poi("A", 1.0, 1.0, "second"), true));

        let rendered = serde_json::to_value(task.render()).unwrap();
        let pts = rendered["taskPts"].as_array().unwrap();
        assert_eq!(pts[0]["ext"]["name"], json!("first"));
        assert_eq!(pts[1]["ext"]["name"], json!("second"));
    }

    #[test]
    fn test_back_point_last_call_wins_and_points_unaffected() {
        let mut task = TaskBuilder::new("t", "r");
        task.add_point(TaskPoint::new(&poi("A", 0.0, 0.0, "route"), true));
        task.back_point(TaskPoint::new(&poi("A", 5.0, 5.0, "old-dock"), true));
        task.back_point(TaskPoint::new(&poi("A", 9.0, 9.0, "new-dock"), true));

        let rendered = serde_json::to_value(task.render()).unwrap();
        assert_eq!(rendered["backPt"]["ext"]["name"], json!("new-dock"));
        assert_eq!(rendered["taskPts"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_sample_patrol_route_round_trips_through_wire_types() {
        // The shape the demo flow submits: plain point, action point, and a
        // wait-on-dock back point.
        let m1 = poi("66ea87fe6cb0037e92ba0ac4", -0.222, 1.640, "m1");
        let m2 = poi("66ea87fe6cb0037e92ba0ac4", -0.167, 3.853, "m2");

        let mut announce = TaskPoint::new(&m2, true);
        announce
            .add_action(ActionRecord::play_audio("3111002"))
            .add_action(ActionRecord::pause(10))
            .add_action(ActionRecord::play_audio("3111012"));

        let mut park = TaskPoint::new(&m1, true);
        park.add_action(ActionRecord::wait(
            [("cmd".to_string(), "test".to_string())].into(),
        ));

        let mut task = TaskBuilder::new("Task1", "8981307a02163yT");
        task.add_point(TaskPoint::new(&m1, true));
        task.add_point(announce);
        task.back_point(park);

        let rendered = serde_json::to_value(task.render()).unwrap();
        let pts = rendered["taskPts"].as_array().unwrap();
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[1]["stepActs"].as_array().unwrap().len(), 3);
        assert_eq!(
            rendered["backPt"]["stepActs"][0]["data"]["userData"],
            json!({"cmd": "test"})
        );
    }
}
