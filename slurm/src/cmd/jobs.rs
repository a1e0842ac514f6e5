//! The `jobs` subcommand.

use slurm_common::prelude::*;

use crate::format;
use crate::Context;

/// Run the `jobs` subcommand, listing one page of jobs.
pub fn run(ctx: &Context, query: Option<&str>, offset: u64, limit: u64) -> Result<()> {
    let result = ctx.api.list_jobs(query, offset, limit)?;
    println!("{}", format::format_jobs(&result, offset, limit));
    Ok(())
}
