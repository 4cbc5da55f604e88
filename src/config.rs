//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/chat/";

/// Every conversation is filed under this session on the backend.
pub const SESSION_ID: &str = "default";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Chat endpoint that receives `{message, session_id}` posts
    #[arg(long, env = "DBCHAT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Seconds before an outstanding reply counts as failed
    #[arg(long, env = "DBCHAT_TIMEOUT_SECS", default_value_t = 120)]
    pub timeout_secs: u64,

    /// Diagnostics are written here while the terminal is in use
    #[arg(long, env = "DBCHAT_LOG_FILE", default_value = "dbchat.log")]
    pub log_file: PathBuf,

    /// Render bot replies as markdown
    #[arg(long, env = "DBCHAT_MARKDOWN")]
    pub markdown: bool,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
