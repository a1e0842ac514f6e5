//! The job state-transition subcommands: `pause`, `resume`, `retry` and
//! `delete`. Each one calls the matching API operation and echoes the job
//! ID on success.

use slurm_common::prelude::*;

use crate::Context;

/// Run the `pause` subcommand.
pub fn run_pause(ctx: &Context, job_id: i64) -> Result<()> {
    ctx.api.pause_job(job_id)?;
    println!("{}", job_id);
    Ok(())
}

/// Run the `resume` subcommand.
pub fn run_resume(ctx: &Context, job_id: i64) -> Result<()> {
    ctx.api.resume_job(job_id)?;
    println!("{}", job_id);
    Ok(())
}

/// Run the `retry` subcommand.
pub fn run_retry(ctx: &Context, job_id: i64) -> Result<()> {
    ctx.api.retry_job(job_id)?;
    println!("{}", job_id);
    Ok(())
}

/// Run the `delete` subcommand.
pub fn run_delete(ctx: &Context, job_id: i64) -> Result<()> {
    ctx.api.delete_job(job_id)?;
    println!("{}", job_id);
    Ok(())
}
