//! Robots command - list robots registered with the fleet service.

use anyhow::Result;
use clap::Args;
use fleetnav_client::RobotListRequest;

use super::Context;

/// Arguments for the robots command.
#[derive(Args, Debug)]
pub struct RobotsArgs {
    /// Page number to fetch
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Robots per page
    #[arg(long, default_value_t = 10)]
    pub page_size: u32,
}

/// Run the robots command.
pub async fn run(args: RobotsArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let session = ctx.session(&client);
    let token = session.token().await?;

    let robots = client
        .robots()
        .list(
            &token,
            RobotListRequest {
                page_size: args.page_size,
                page_num: args.page,
            },
        )
        .await?;

    if ctx.json_output {
        println!("{}", serde_json::to_string(&serde_json::json!({
            "count": robots.len(),
            "robots": robots.iter().map(|r| serde_json::json!({
                "robotId": r.robot_id,
                "isOnLine": r.is_on_line,
            })).collect::<Vec<_>>(),
        }))?);
        return Ok(());
    }

    if robots.is_empty() {
        println!("No robots on page {}", args.page);
        return Ok(());
    }

    println!("Robots (page {})", args.page);
    println!("----------------");
    for robot in &robots {
        let status = if robot.is_on_line { "online" } else { "offline" };
        println!("{}  {}", robot.robot_id, status);
    }

    if ctx.verbose {
        println!("\nServer: {}", ctx.config.url_prefix);
    }

    Ok(())
}
