//! The `slurm` command-line tool: manage users and jobs on a Slurm server
//! from the command line.

use slurm_common::{
    chrono::{Duration, Utc},
    config::Config,
    prelude::*,
    quick_main,
    rest_api::Client,
    tracing_support::initialize_tracing,
};
use structopt::StructOpt;
use tracing::{debug, warn};

mod cmd;
mod format;

/// The production API endpoint.
const BASE_URL: &str = "https://slurm.evolent.io/api";

/// The development API endpoint, selected with `--dev`.
const DEV_BASE_URL: &str = "https://slurm-dev.evolent.io/api";

/// The name of our config file, kept in the user's home directory.
const CONFIG_FILE_NAME: &str = ".slurm";

/// Command-line options, parsed using `structopt`.
#[derive(Debug, StructOpt)]
#[structopt(
    name = "slurm",
    about = "Manage Slurm users and jobs from the command line."
)]
struct Opt {
    /// Use dev endpoints.
    #[structopt(long = "dev")]
    dev: bool,

    /// Specify the Slurm REST API base url.
    #[structopt(long = "base_url")]
    base_url: Option<String>,

    /// The subcommand to run.
    #[structopt(subcommand)]
    cmd: Cmd,
}

/// Our subcommands.
#[derive(Debug, StructOpt)]
enum Cmd {
    /// Show the Slurm CLI version information.
    #[structopt(name = "version")]
    Version,

    /// Authenticate using user credentials.
    #[structopt(name = "login")]
    Login {
        /// Username.
        #[structopt(long = "username")]
        username: String,

        /// Password.
        #[structopt(long = "password")]
        password: String,
    },

    /// Add a new user.
    #[structopt(name = "adduser")]
    Adduser {
        /// Username.
        #[structopt(long = "username")]
        username: String,

        /// Password.
        #[structopt(long = "password")]
        password: String,
    },

    /// List available users.
    #[structopt(name = "users")]
    Users,

    /// List available jobs.
    #[structopt(name = "jobs")]
    Jobs {
        /// Search query.
        #[structopt(long = "query")]
        query: Option<String>,

        /// Offset of the first row.
        #[structopt(long = "offset", default_value = "0")]
        offset: u64,

        /// Limit the number of rows returned.
        #[structopt(long = "limit", default_value = "20")]
        limit: u64,
    },

    /// Pause a job.
    #[structopt(name = "pause")]
    Pause {
        /// The ID of the job to pause.
        job_id: i64,
    },

    /// Resume a paused job.
    #[structopt(name = "resume")]
    Resume {
        /// The ID of the job to resume.
        job_id: i64,
    },

    /// Change the job status to queued.
    #[structopt(name = "retry")]
    Retry {
        /// The ID of the job to retry.
        job_id: i64,
    },

    /// Delete a job.
    #[structopt(name = "delete")]
    Delete {
        /// The ID of the job to delete.
        job_id: i64,
    },
}

/// Everything a subcommand needs: an API client carrying any stored
/// credentials, and the config file those credentials live in.
pub struct Context {
    /// Our API client.
    pub api: Client,

    /// The user's persistent configuration.
    pub config: Config,
}

fn run() -> Result<()> {
    initialize_tracing();
    let opt = Opt::from_args();
    debug!("args: {:?}", opt);

    let config = Config::load_or_default(config_path()?)?;
    let auth = stored_auth(&config);
    if let Some(auth) = &auth {
        warn_if_expiring(auth);
    }

    let base_url = resolve_base_url(opt.base_url, opt.dev);
    let api = Client::new(&base_url, auth.map(|auth| auth.access_token))?;
    let mut ctx = Context { api, config };

    match opt.cmd {
        Cmd::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Cmd::Login { username, password } => {
            cmd::login::run(&mut ctx, &username, &password)
        }
        Cmd::Adduser { username, password } => {
            cmd::adduser::run(&ctx, &username, &password)
        }
        Cmd::Users => cmd::users::run(&ctx),
        Cmd::Jobs {
            query,
            offset,
            limit,
        } => cmd::jobs::run(&ctx, query.as_deref(), offset, limit),
        Cmd::Pause { job_id } => cmd::job::run_pause(&ctx, job_id),
        Cmd::Resume { job_id } => cmd::job::run_resume(&ctx, job_id),
        Cmd::Retry { job_id } => cmd::job::run_retry(&ctx, job_id),
        Cmd::Delete { job_id } => cmd::job::run_delete(&ctx, job_id),
    }
}

quick_main!(run);

/// Where the user's config file lives.
fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("can't locate home directory"))?;
    Ok(home.join(CONFIG_FILE_NAME))
}

/// The API base URL to use. An explicit `--base_url` wins over `--dev`.
fn resolve_base_url(base_url: Option<String>, dev: bool) -> String {
    match base_url {
        Some(url) => url,
        None if dev => DEV_BASE_URL.to_owned(),
        None => BASE_URL.to_owned(),
    }
}

/// The `auth` object stored by a previous `login`, if there is a readable
/// one. An unreadable entry shouldn't lock the user out of every command,
/// so we just warn and carry on unauthenticated.
fn stored_auth(config: &Config) -> Option<Auth> {
    let value = config.get("auth")?;
    match serde_json::from_value(value.clone()) {
        Ok(auth) => Some(auth),
        Err(err) => {
            warn!("ignoring unreadable auth entry in config: {}", err);
            None
        }
    }
}

/// Warn when the stored access token is expired or about to expire.
fn warn_if_expiring(auth: &Auth) {
    let expire_at = match auth.expire_at {
        Some(expire_at) => expire_at,
        None => return,
    };
    let now = Utc::now();
    if expire_at <= now {
        warn!(
            "access token expired at {}, run `slurm login` to get a new one",
            expire_at
        );
    } else if expire_at <= now + Duration::hours(24) {
        warn!("access token expires at {}", expire_at);
    }
}
