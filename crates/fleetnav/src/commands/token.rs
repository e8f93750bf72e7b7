//! Token command - obtain a session token.

use anyhow::Result;
use clap::Args;

use super::Context;

/// Arguments for the token command.
#[derive(Args, Debug)]
pub struct TokenArgs {
    /// Print the raw token (it is a credential; handle with care)
    #[arg(long)]
    pub show: bool,
}

/// Run the token command.
pub async fn run(args: TokenArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let session = ctx.session(&client);

    let token = session.token().await?;

    if ctx.json_output {
        let value = if args.show {
            serde_json::json!({"ok": true, "token": token})
        } else {
            serde_json::json!({"ok": true})
        };
        println!("{}", value);
        return Ok(());
    }

    println!("Authenticated against {}", ctx.config.url_prefix);
    if args.show {
        println!("Token: {}", token);
    } else {
        println!("Token obtained ({} chars); re-run with --show to print it", token.len());
    }

    Ok(())
}
