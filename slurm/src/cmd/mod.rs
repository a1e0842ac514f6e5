//! Implementations of our CLI subcommands.

pub mod adduser;
pub mod job;
pub mod jobs;
pub mod login;
pub mod users;
