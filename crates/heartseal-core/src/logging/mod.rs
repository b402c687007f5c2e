//! Logging setup shared by the desktop app and the CLI.
//!
//! Console output goes through `tracing_subscriber::fmt`. When a logs
//! directory is given, every event is also appended to a JSONL file:
//!
//! ```text
//! logs/
//! ├── 2026-10-19_desktop.jsonl
//! └── 2026-10-19_cli.jsonl
//! ```
//!
//! ```bash
//! # Everything that went wrong in today's desktop session
//! jq 'select(.level == "warn" or .level == "error")' logs/*_desktop.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

use std::path::PathBuf;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::{ProposalError, ProposalResult};

pub use entry::JsonLogEntry;
pub use layer::JsonlLayer;
pub use writer::{read_entries, SessionLogWriter};

/// How to set up logging for a process.
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Filter used when `RUST_LOG` is not set
    pub default_filter: String,
    /// Write JSONL logs here as well
    pub logs_dir: Option<PathBuf>,
    /// Session name used in JSONL file names and entries
    pub session: String,
}

impl LogOptions {
    pub fn new(session: impl Into<String>) -> Self {
        Self {
            default_filter: "info".to_string(),
            logs_dir: None,
            session: session.into(),
        }
    }

    /// Map a `-v` count to a filter: 0 warn, 1 info, 2 debug, 3+ trace.
    pub fn verbosity(mut self, level: u8) -> Self {
        self.default_filter = match level {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
        .to_string();
        self
    }

    pub fn with_logs_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.logs_dir = dir;
        self
    }
}

/// Install the global subscriber. Returns the JSONL file path if one is used.
pub fn init_logging(options: LogOptions) -> ProposalResult<Option<PathBuf>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&options.default_filter));

    let jsonl = match &options.logs_dir {
        Some(dir) => Some(JsonlLayer::new(dir, &options.session)?),
        None => None,
    };
    let log_path = jsonl.as_ref().map(|l| l.log_path().to_path_buf());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(jsonl)
        .try_init()
        .map_err(|e| ProposalError::Logging(e.to_string()))?;

    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(LogOptions::new("cli").default_filter, "info");
        assert_eq!(LogOptions::new("cli").verbosity(0).default_filter, "warn");
        assert_eq!(LogOptions::new("cli").verbosity(1).default_filter, "info");
        assert_eq!(LogOptions::new("cli").verbosity(2).default_filter, "debug");
        assert_eq!(LogOptions::new("cli").verbosity(5).default_filter, "trace");
    }
}
