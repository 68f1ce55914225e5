use std::time::Duration;

use clap::{Parser, ValueEnum};
use joblist_engine::{FetchSettings, DEFAULT_BASE_URL};
use log::LevelFilter;

use super::logging::LogDestination;

#[derive(Parser, Debug)]
#[command(name = "joblist")]
#[command(about = "Browse a paginated job listing endpoint from the terminal")]
#[command(version)]
pub struct Args {
    /// Endpoint returning `{"results": [...]}` for `?page=N`
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogArg::File)]
    pub log: LogArg,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogArg {
    File,
    Terminal,
    Both,
}

impl Args {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            base_url: self.base_url.clone(),
            request_timeout: Duration::from_secs(self.timeout_secs),
            ..FetchSettings::default()
        }
    }

    pub fn log_destination(&self) -> LogDestination {
        match self.log {
            LogArg::File => LogDestination::File,
            LogArg::Terminal => LogDestination::Terminal,
            LogArg::Both => LogDestination::Both,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
