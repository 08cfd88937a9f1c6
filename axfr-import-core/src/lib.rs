//! axfr-import Core Library
//!
//! Turns an AXFR text dump into hosted-zone record sets and drives their
//! submission:
//! - Zone file reading ([`zonefile`]): line classification, record parsing, aggregation
//! - Change batch building ([`batch`])
//! - Convergence polling ([`poller`])
//! - Hosted zone resolution ([`services::ZoneService`])
//!
//! The hosting service is reached only through
//! [`HostedZoneProvider`](axfr_import_provider::HostedZoneProvider), so every
//! stage can run against an in-memory provider.

pub mod batch;
pub mod error;
pub mod poller;
pub mod services;
pub mod zonefile;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use batch::build_change_batch;
pub use error::{CoreError, CoreResult};
pub use poller::{ConvergencePoller, PollOptions};
pub use services::{ZoneOutcome, ZoneService};
pub use zonefile::{ImportSummary, RecordAggregator, RecordSetEntry, RecordSets};
