//! AXFR dump reading
//!
//! Input is one record per line, as printed by `dig ... axfr`:
//!
//! ```text
//! example.com.      300  IN  A      1.2.3.4
//! www.example.com.  300  IN  CNAME  example.com.
//! ```
//!
//! `$ORIGIN`/`$TTL` directives, parenthesized records and trailing comments
//! are not understood.

mod aggregate;
mod classify;
mod parse;

pub use aggregate::{
    ImportSummary, RecordAggregator, RecordSetEntry, RecordSets, AUTO_MANAGED_TYPES,
};
pub use classify::{classify_line, LineKind};
pub use parse::{parse_record_line, LineParseError, ParsedRecord};

use std::io::BufRead;

/// Reads a whole dump and returns its aggregated record sets.
pub fn read_record_sets<R: BufRead>(reader: R) -> std::io::Result<RecordSets> {
    let mut aggregator = RecordAggregator::new();
    aggregator.read_from(reader)?;
    Ok(aggregator.finish())
}
