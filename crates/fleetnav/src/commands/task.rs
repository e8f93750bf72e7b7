//! Task command - one-off operations on an existing task.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::Context;

/// Arguments for the task command.
#[derive(Args, Debug)]
pub struct TaskArgs {
    #[command(subcommand)]
    pub command: TaskCommand,
}

#[derive(Subcommand, Debug)]
pub enum TaskCommand {
    /// Show task detail as reported by the service
    Info {
        /// Task id
        id: String,
    },

    /// Start execution of a created task
    Execute {
        /// Task id
        id: String,
    },
}

/// Run the task command.
pub async fn run(args: TaskArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let session = ctx.session(&client);
    let token = session.token().await?;

    match args.command {
        TaskCommand::Info { id } => {
            let info = client.tasks().info(&token, &id).await?;
            println!("{}", serde_json::to_string_pretty(&info.0)?);
        }
        TaskCommand::Execute { id } => {
            client.tasks().execute(&token, &id).await?;
            println!("Task {} started", id);
        }
    }

    Ok(())
}
