//! The `users` subcommand.

use slurm_common::prelude::*;

use crate::format;
use crate::Context;

/// Run the `users` subcommand.
pub fn run(ctx: &Context) -> Result<()> {
    let result = ctx.api.list_users()?;
    println!("{}", format::format_users(&result));
    Ok(())
}
