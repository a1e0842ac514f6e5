//! The `login` subcommand.

use slurm_common::prelude::*;

use crate::Context;

/// Run the `login` subcommand. On success, the returned auth object is
/// stored in the config file so later invocations can authenticate.
pub fn run(ctx: &mut Context, username: &str, password: &str) -> Result<()> {
    let auth = ctx.api.authenticate(username, password)?;
    ctx.config.put("auth", &auth)?;
    println!("Login Succeeded");
    Ok(())
}
