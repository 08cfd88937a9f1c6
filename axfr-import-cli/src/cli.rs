//! Command line arguments

use std::time::Duration;

use axfr_import_core::PollOptions;
use axfr_import_provider::ChangeAction;
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

/// Take an AXFR transfer on stdin and load it into a Route 53 hosted zone.
///
/// The zone is created when it does not exist yet. NS and SOA records are
/// skipped since Route 53 manages them itself.
#[derive(Parser, Debug)]
#[command(name = "axfr-import", version, about, long_about = None)]
#[command(after_help = "Example:\n  dig @ns1.example.com example.com axfr | axfr-import example.com")]
pub struct Cli {
    /// Access key of the AWS account or IAM user
    #[arg(
        short = 'a',
        long,
        value_name = "STR",
        env = "AWS_ACCESS_KEY_ID",
        hide_env_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub access_key: String,

    /// Secret key of the AWS account or IAM user
    #[arg(
        short = 's',
        long,
        value_name = "STR",
        env = "AWS_SECRET_ACCESS_KEY",
        hide_env_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub secret_key: String,

    /// Zone to import into, e.g. example.com
    #[arg(value_name = "DOMAIN", value_parser = NonEmptyStringValueParser::new())]
    pub domain: String,

    /// Seconds between two change status queries
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub poll_interval: u64,

    /// Give up waiting for INSYNC after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Submit UPSERT changes instead of CREATE
    #[arg(long)]
    pub upsert: bool,

    /// Comment stored with the change batch
    #[arg(long, value_name = "TEXT")]
    pub comment: Option<String>,

    /// Route 53 API endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Retries for throttled or failed requests
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub max_retries: u32,

    /// Print the change batch as JSON and exit without contacting Route 53
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    pub fn change_action(&self) -> ChangeAction {
        if self.upsert {
            ChangeAction::Upsert
        } else {
            ChangeAction::Create
        }
    }

    pub fn poll_options(&self) -> PollOptions {
        PollOptions {
            interval: Duration::from_secs(self.poll_interval),
            timeout: self.timeout.map(Duration::from_secs),
        }
    }
}
