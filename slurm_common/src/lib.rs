//! Code shared between the Slurm CLI and its REST API client.

#![warn(missing_docs)]

pub use chrono;
pub use serde_json;

pub mod config;
pub mod errors;
pub mod models;
pub mod rest_api;
pub mod tracing_support;

/// Common imports used by many modules.
pub mod prelude {
    pub use anyhow::{anyhow, bail, Context as _};
    pub use serde::{Deserialize, Serialize};
    pub use std::{
        fmt,
        path::{Path, PathBuf},
    };

    pub use crate::models::*;
    pub use crate::{Error, Result};
}

/// Error type for this crate's functions.
pub type Error = anyhow::Error;

/// Result type for this crate's functions.
pub type Result<T> = std::result::Result<T, Error>;
