//! Types returned by the Slurm REST API.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::prelude::*;

/// The envelope around list endpoints: one page of records plus pagination
/// metadata describing the full result set.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListResult<T> {
    /// The records on this page, in server order.
    pub data: Vec<T>,

    /// Pagination metadata.
    pub meta: Meta,
}

/// Pagination metadata attached to every list response.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Meta {
    /// The total number of records matching the request, across all pages.
    pub total_count: u64,
}

/// The envelope around endpoints which return a single record.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DataEnvelope<T> {
    /// The returned record.
    pub data: T,
}

/// A user account.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct User {
    /// The unique ID of this user.
    pub id: i64,

    /// The user's login name.
    pub username: String,

    /// When this user was created, as reported by the server.
    pub created_at: String,
}

/// A batch job.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Job {
    /// The unique ID of this job.
    pub id: i64,

    /// The human-readable job name.
    pub name: String,

    /// The user who owns this job.
    pub owner: String,

    /// How many members this job covers. `None` until the server has
    /// counted them.
    pub member_count: Option<i64>,

    /// How long this job ran, in seconds. `None` until the job has
    /// finished at least once.
    pub duration: Option<f64>,

    /// The current status of this job.
    pub status: Status,

    /// When this job was created, as reported by the server.
    pub created_at: String,
}

/// Possible job status values.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// This job is waiting to run.
    Queued,
    /// This job is currently running.
    Running,
    /// This job has been paused, and can be resumed later.
    Paused,
    /// This job finished successfully.
    Done,
    /// This job could not be completed.
    Failed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Status::Queued => "queued",
            Status::Running => "running",
            Status::Paused => "paused",
            Status::Done => "done",
            Status::Failed => "failed",
        };
        s.fmt(f)
    }
}

/// Credentials returned by `authenticate`, and stored under the `auth` key
/// of the config file.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Auth {
    /// The bearer token to send with authenticated requests.
    pub access_token: String,

    /// When `access_token` stops being valid, if the server told us.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<DateTime<Utc>>,

    /// Any further fields the server included. Kept so the stored auth
    /// object round-trips unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
