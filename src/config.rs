//! Command-line and environment configuration for the `menu-audit` binary.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::repository::client::DEFAULT_ENDPOINT;
use crate::validate::{MAX_DEPTH, ValidatorOptions};

/// Fetch menu records and classify each menu tree as valid or invalid.
#[derive(Parser, Debug, Clone)]
#[command(name = "menu-audit", version)]
pub struct AuditConfig {
    /// Paginated menu endpoint
    #[arg(long, env = "MENU_AUDIT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Value of the `id` query parameter selecting the data set
    #[arg(long, env = "MENU_AUDIT_CHALLENGE_ID", default_value_t = 1)]
    pub challenge_id: u32,

    /// Where to write the JSON report
    #[arg(
        long,
        short = 'o',
        env = "MENU_AUDIT_OUTPUT",
        default_value = "output.json"
    )]
    pub output: PathBuf,

    /// Deepest allowed level (root is depth 0)
    #[arg(long, default_value_t = MAX_DEPTH)]
    pub max_depth: usize,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Validate a local JSON array of nodes instead of fetching
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,
}

impl AuditConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validator_options(&self) -> ValidatorOptions {
        ValidatorOptions {
            max_depth: self.max_depth,
        }
    }
}
