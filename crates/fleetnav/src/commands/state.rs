//! State command - show the live state of one robot.

use anyhow::Result;
use clap::Args;

use super::Context;

/// Arguments for the state command.
#[derive(Args, Debug)]
pub struct StateArgs {
    /// Robot id (default: robot_id from config)
    pub robot_id: Option<String>,
}

/// Run the state command.
pub async fn run(args: StateArgs, ctx: &Context) -> Result<()> {
    let robot_id = ctx.robot_id(args.robot_id)?;

    let client = ctx.client()?;
    let session = ctx.session(&client);
    let token = session.token().await?;

    let state = client.robots().state(&token, &robot_id).await?;

    // The state schema is service-defined; dump it as-is.
    println!("{}", serde_json::to_string_pretty(&state.0)?);

    Ok(())
}
