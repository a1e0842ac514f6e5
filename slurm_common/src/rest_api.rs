//! A client for the Slurm REST API.

use reqwest::blocking;
use serde_json::json;
use url::Url;

use crate::prelude::*;

/// A synchronous client for the Slurm REST API.
///
/// One request per operation, no retries: transport and HTTP failures
/// propagate straight to the caller.
pub struct Client {
    /// The server's base URL, typically ending in `/api`.
    base_url: Url,

    /// The bearer token from a previous `authenticate` call, if any.
    access_token: Option<String>,

    /// The underlying HTTP client.
    client: blocking::Client,
}

impl Client {
    /// Create a new client for the API server at `base_url`.
    pub fn new(base_url: &str, access_token: Option<String>) -> Result<Client> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("can't parse base URL {:?}", base_url))?;
        Ok(Client {
            base_url,
            access_token,
            client: blocking::Client::new(),
        })
    }

    /// Exchange user credentials for an access token.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Auth> {
        let url = self.endpoint("auth")?;
        let resp = self.send(self.client.post(url).json(&json!({
            "username": username,
            "password": password,
        })))?;
        resp.json().context("can't parse authentication response")
    }

    /// Create a new user account.
    pub fn create_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<DataEnvelope<User>> {
        let url = self.endpoint("users")?;
        let resp = self.send(self.client.post(url).json(&json!({
            "username": username,
            "password": password,
        })))?;
        resp.json().context("can't parse create user response")
    }

    /// List all user accounts.
    pub fn list_users(&self) -> Result<ListResult<User>> {
        let url = self.endpoint("users")?;
        let resp = self.send(self.client.get(url))?;
        resp.json().context("can't parse user list")
    }

    /// List jobs matching `query`, returning the page selected by `offset`
    /// and `limit`.
    pub fn list_jobs(
        &self,
        query: Option<&str>,
        offset: u64,
        limit: u64,
    ) -> Result<ListResult<Job>> {
        let mut url = self.endpoint("jobs")?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(query) = query {
                pairs.append_pair("query", query);
            }
            pairs.append_pair("offset", &offset.to_string());
            pairs.append_pair("limit", &limit.to_string());
        }
        let resp = self.send(self.client.get(url))?;
        resp.json().context("can't parse job list")
    }

    /// Pause a job.
    pub fn pause_job(&self, job_id: i64) -> Result<()> {
        self.job_action(job_id, "pause")
    }

    /// Resume a paused job.
    pub fn resume_job(&self, job_id: i64) -> Result<()> {
        self.job_action(job_id, "resume")
    }

    /// Put a job back in the queue.
    pub fn retry_job(&self, job_id: i64) -> Result<()> {
        self.job_action(job_id, "retry")
    }

    /// Delete a job.
    pub fn delete_job(&self, job_id: i64) -> Result<()> {
        let url = self.endpoint(&format!("jobs/{}", job_id))?;
        self.send(self.client.delete(url))?;
        Ok(())
    }

    /// `POST {base}/jobs/{id}/{action}`, discarding the response body.
    fn job_action(&self, job_id: i64, action: &str) -> Result<()> {
        let url = self.endpoint(&format!("jobs/{}/{}", job_id, action))?;
        self.send(self.client.post(url))?;
        Ok(())
    }

    /// Build the URL for `path` below our base URL.
    ///
    /// We append path segments instead of calling `Url::join`, because
    /// `join` would treat the base's final segment as a file and replace
    /// it, turning `https://host/api` + `jobs` into `https://host/jobs`.
    fn endpoint(&self, path: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("base URL {} cannot hold a path", self.base_url))?
            .pop_if_empty()
            .extend(path.split('/'));
        Ok(url)
    }

    /// Attach authentication to `req`, send it, and check for HTTP-level
    /// errors.
    fn send(&self, req: blocking::RequestBuilder) -> Result<blocking::Response> {
        let req = match &self.access_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        };
        let resp = req.send().context("error sending request to Slurm API")?;
        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            let body = resp.text().unwrap_or_default();
            Err(anyhow!(
                "Slurm API returned {}: {}",
                status,
                body.trim()
            ))
        }
    }
}
