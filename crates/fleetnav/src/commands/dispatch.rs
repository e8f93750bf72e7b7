//! Dispatch command - build a task from a route file and submit it.
//!
//! Route files are TOML:
//!
//! ```toml
//! name = "evening-patrol"
//!
//! [[points]]
//! area_id = "66ea87fe6cb0037e92ba0ac4"
//! x = -0.222
//! y = 1.640
//! name = "m1"
//!
//! [[points]]
//! area_id = "66ea87fe6cb0037e92ba0ac4"
//! x = -0.167
//! y = 3.853
//! name = "m2"
//! yaw = 90.0                 # honor arrival heading; omit to ignore
//!
//! [[points.actions]]
//! kind = "play-audio"
//! audio_id = "3111002"
//!
//! [[points.actions]]
//! kind = "pause"
//! seconds = 10
//!
//! [return_point]
//! area_id = "66ea87fe6cb0037e92ba0ac4"
//! x = -0.222
//! y = 1.640
//! name = "dock"
//!
//! [[return_point.actions]]
//! kind = "wait"
//! data = { cmd = "arrived" }
//! ```

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::Args;
use serde::Deserialize;

use fleetnav_client::task::{ActionRecord, Poi, TaskBuilder, TaskPoint};

use super::Context;

/// Arguments for the dispatch command.
#[derive(Args, Debug)]
pub struct DispatchArgs {
    /// Route file (TOML)
    pub route: PathBuf,

    /// Robot id (default: robot_id from config)
    #[arg(long)]
    pub robot: Option<String>,

    /// Start execution after creating the task
    #[arg(long)]
    pub execute: bool,

    /// After --execute, poll task detail once a second until it settles
    #[arg(long, requires = "execute")]
    pub watch: bool,

    /// Print the rendered task document instead of submitting it
    #[arg(long)]
    pub dry_run: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Route file model
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RouteFile {
    name: String,
    points: Vec<RoutePoint>,
    return_point: Option<RoutePoint>,
}

#[derive(Debug, Deserialize)]
struct RoutePoint {
    area_id: String,
    x: f64,
    y: f64,
    name: String,
    /// Arrival heading; omit to let the robot ignore heading.
    yaw: Option<f64>,
    #[serde(default)]
    actions: Vec<RouteAction>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
enum RouteAction {
    Pause {
        seconds: i64,
    },
    PlayAudio {
        audio_id: String,
    },
    Wait {
        #[serde(default)]
        data: HashMap<String, String>,
    },
}

impl RouteAction {
    fn to_record(&self) -> ActionRecord {
        match self {
            RouteAction::Pause { seconds } => ActionRecord::pause(*seconds),
            RouteAction::PlayAudio { audio_id } => ActionRecord::play_audio(audio_id.clone()),
            RouteAction::Wait { data } => ActionRecord::wait(data.clone()),
        }
    }
}

impl RoutePoint {
    fn to_task_point(&self) -> TaskPoint {
        let poi = Poi {
            area_id: self.area_id.clone(),
            x: self.x,
            y: self.y,
            name: self.name.clone(),
            yaw: self.yaw.unwrap_or(0.0),
        };
        let mut point = TaskPoint::new(&poi, self.yaw.is_none());
        for action in &self.actions {
            point.add_action(action.to_record());
        }
        point
    }
}

fn build_task(route: &RouteFile, robot_id: &str) -> TaskBuilder {
    let mut task = TaskBuilder::new(route.name.clone(), robot_id);
    for point in &route.points {
        task.add_point(point.to_task_point());
    }
    if let Some(park) = &route.return_point {
        task.back_point(park.to_task_point());
    }
    task
}

// ─────────────────────────────────────────────────────────────────────────────
// Run
// ─────────────────────────────────────────────────────────────────────────────

/// Run the dispatch command.
pub async fn run(args: DispatchArgs, ctx: &Context) -> Result<()> {
    let contents = std::fs::read_to_string(&args.route)
        .with_context(|| format!("failed to read route file {}", args.route.display()))?;
    let route: RouteFile = toml::from_str(&contents)
        .with_context(|| format!("invalid route file {}", args.route.display()))?;

    let robot_id = ctx.robot_id(args.robot.clone())?;
    let payload = build_task(&route, &robot_id).render();

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let client = ctx.client()?;
    let session = ctx.session(&client);
    let token = session.token().await?;

    let task_id = client.tasks().create(&token, &payload).await?;
    println!("Created task {} ({} waypoints)", task_id, route.points.len());

    if args.execute {
        client.tasks().execute(&token, &task_id).await?;
        println!("Task {} started", task_id);
    }

    if args.watch {
        watch(&client, &session, &task_id).await?;
    }

    Ok(())
}

/// Follow task detail until it finishes, is cancelled, or detail becomes
/// unavailable. Detail is not real-time; one poll a second matches the
/// service's refresh cadence.
async fn watch(
    client: &fleetnav_client::FleetClient,
    session: &fleetnav_client::Session,
    task_id: &str,
) -> Result<()> {
    loop {
        tokio::time::sleep(Duration::from_secs(1)).await;

        let token = session.token().await?;
        let info = match client.tasks().info(&token, task_id).await {
            Ok(info) => info,
            Err(e) => {
                tracing::warn!(error = %e, "task detail unavailable; stopping watch");
                return Ok(());
            }
        };

        let cancelled = info.is_cancelled().unwrap_or(false);
        let finished = info.is_finished().unwrap_or(false);
        let executing = info.is_executing().unwrap_or(false);
        println!(
            "cancelled:{} finished:{} executing:{}",
            cancelled, finished, executing
        );

        if cancelled || finished {
            return Ok(());
        }
    }
}
