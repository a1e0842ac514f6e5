//! The `adduser` subcommand.

use slurm_common::prelude::*;

use crate::Context;

/// Run the `adduser` subcommand, printing the new user record as one line
/// of JSON.
pub fn run(ctx: &Context, username: &str, password: &str) -> Result<()> {
    let result = ctx.api.create_user(username, password)?;
    println!(
        "{}",
        serde_json::to_string(&result.data).context("can't serialize user record")?
    );
    Ok(())
}
