//! Endpoint tests over HTTP: robot queries and the task flow.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fleetnav_client::task::{ActionRecord, Poi, TaskBuilder, TaskPoint};
use fleetnav_client::{FleetClient, RobotListRequest};

fn client_for(server: &MockServer) -> FleetClient {
    FleetClient::builder()
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_robot_list_decodes_summary_and_extra_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/robot/v1.1/list"))
        .and(header("X-Token", "tok"))
        .and(body_json(json!({"pageSize": 10, "pageNum": 1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "data": {
                "list": [
                    {"robotId": "R1", "isOnLine": true, "model": "S2"},
                    {"robotId": "R2", "isOnLine": false}
                ]
            }
        })))
        .mount(&server)
        .await;

    let robots = client_for(&server)
        .robots()
        .list("tok", RobotListRequest::default())
        .await
        .unwrap();

    assert_eq!(robots.len(), 2);
    assert_eq!(robots[0].robot_id, "R1");
    assert!(robots[0].is_on_line);
    assert_eq!(robots[0].extra["model"], json!("S2"));
    assert!(!robots[1].is_on_line);
}

#[tokio::test]
async fn test_robot_state_stays_an_open_mapping() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robot/v1.1/R1/state"))
        .and(header("X-Token", "tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "data": {"battery": 88, "areaId": "A1"}
        })))
        .mount(&server)
        .await;

    let state = client_for(&server).robots().state("tok", "R1").await.unwrap();
    assert_eq!(state.get("battery"), Some(&json!(88)));
    assert_eq!(state.get("areaId"), Some(&json!("A1")));
}

#[tokio::test]
async fn test_robot_list_service_rejection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/robot/v1.1/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": 500})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .robots()
        .list("tok", RobotListRequest::default())
        .await
        .unwrap_err();
    assert!(err.is_service_rejection());
}

#[tokio::test]
async fn test_task_create_submits_rendered_document() {
    let server = MockServer::start().await;

    let poi = Poi {
        area_id: "A1".to_string(),
        x: 1.0,
        y: 2.0,
        name: "m1".to_string(),
        yaw: 0.0,
    };
    let mut stop = TaskPoint::new(&poi, true);
    stop.add_action(ActionRecord::pause(10));
    let mut task = TaskBuilder::new("Task1", "R1");
    task.add_point(stop);

    Mock::given(method("POST"))
        .and(path("/task/v1.1"))
        .and(header("X-Token", "tok"))
        .and(body_json(json!({
            "name": "Task1",
            "robotId": "R1",
            "routeMode": 1,
            "runMode": 1,
            "runNum": 1,
            "taskType": 4,
            "runType": 21,
            "sourceType": 6,
            "ignorePublicSite": false,
            "speed": 1.0,
            "taskPts": [{
                "areaId": "A1",
                "x": 1.0,
                "y": 2.0,
                "type": 0,
                "stopRadius": 1,
                "ext": {"name": "m1"},
                "stepActs": [{"type": 18, "data": {"pauseTime": 10}}]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "data": {"taskId": "T-77"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let task_id = client_for(&server)
        .tasks()
        .create("tok", &task.render())
        .await
        .unwrap();
    assert_eq!(task_id, "T-77");
}

#[tokio::test]
async fn test_task_execute_and_info() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/task/v1.1/T-77/execute"))
        .and(header("X-Token", "tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": 200})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/task/v1.1/T-77"))
        .and(header("X-Token", "tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "data": {"isCancel": false, "isFinish": true, "isExcute": false, "name": "Task1"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.tasks().execute("tok", "T-77").await.unwrap();

    let info = client.tasks().info("tok", "T-77").await.unwrap();
    assert_eq!(info.is_cancelled(), Some(false));
    assert_eq!(info.is_finished(), Some(true));
    assert_eq!(info.is_executing(), Some(false));
    assert_eq!(info.get("name"), Some(&json!("Task1")));
}

#[tokio::test]
async fn test_full_dispatch_flow_with_session_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1.1/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "data": {"key": "k", "token": "session-tok", "expireTime": 600}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/task/v1.1"))
        .and(header("X-Token", "session-tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "data": {"taskId": "T-1"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/task/v1.1/T-1/execute"))
        .and(header("X-Token", "session-tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": 200})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let session = client.session("app-id", "secret");
    let token = session.token().await.unwrap();

    let poi = Poi {
        area_id: "A1".to_string(),
        x: 0.0,
        y: 0.0,
        name: "m1".to_string(),
        yaw: 0.0,
    };
    let mut task = TaskBuilder::new("patrol", "R1");
    task.add_point(TaskPoint::new(&poi, true));

    let task_id = client.tasks().create(&token, &task.render()).await.unwrap();
    client.tasks().execute(&token, &task_id).await.unwrap();

    // Token was fetched once and reused for both task calls.
    let token_again = session.token().await.unwrap();
    assert_eq!(token_again, "session-tok");
}
