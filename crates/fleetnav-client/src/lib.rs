//! HTTP client SDK for the FleetNav robot-fleet cloud API.
//!
//! This crate provides a typed client for the fleet service: authenticated
//! sessions with transparent token renewal, robot queries, and construction
//! and dispatch of multi-point navigation tasks.
//!
//! # Example
//!
//! ```no_run
//! use fleetnav_client::task::{ActionRecord, Poi, TaskBuilder, TaskPoint};
//! use fleetnav_client::FleetClient;
//!
//! # async fn example() -> fleetnav_client::Result<()> {
//! let client = FleetClient::builder()
//!     .base_url("https://api.example.com")
//!     .appcode("raw-appcode")
//!     .build()?;
//!
//! // Tokens are cached and renewed transparently.
//! let session = client.session("app-id", "app-secret");
//! let token = session.token().await?;
//!
//! for robot in client.robots().list(&token, Default::default()).await? {
//!     println!("{} online={}", robot.robot_id, robot.is_on_line);
//! }
//!
//! // Build a route: go to the hall, announce, then dock.
//! let hall = Poi {
//!     area_id: "66ea87fe6cb0037e92ba0ac4".into(),
//!     x: -0.167,
//!     y: 3.853,
//!     name: "hall".into(),
//!     yaw: 0.0,
//! };
//! let mut stop = TaskPoint::new(&hall, true);
//! stop.add_action(ActionRecord::play_audio("3111002"))
//!     .add_action(ActionRecord::pause(10));
//!
//! let mut task = TaskBuilder::new("patrol", "R1");
//! task.add_point(stop);
//!
//! let task_id = client.tasks().create(&token, &task.render()).await?;
//! client.tasks().execute(&token, &task_id).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod credential;
pub mod error;
pub mod session;
pub mod sign;
pub mod task;
pub mod types;

pub use client::{ClientBuilder, FleetClient};
pub use error::{Error, Result};
pub use session::{Session, SharedTokenIssuer, TokenIssuer};
pub use types::*;
