//! Record aggregation
//!
//! Groups parsed records into one entry per `(name, TYPE)` pair. Record types
//! the hosting service manages itself (NS, SOA) are dropped here.

use std::collections::HashMap;
use std::io::BufRead;

use serde::Serialize;

use super::classify::{classify_line, LineKind};
use super::parse::{parse_record_line, ParsedRecord};

/// Record types owned by the hosting service; never imported.
pub const AUTO_MANAGED_TYPES: [&str; 2] = ["NS", "SOA"];

/// All values of one `(name, type)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSetEntry {
    pub name: String,
    /// TTL of the first occurrence.
    pub ttl: u32,
    /// Class of the first occurrence.
    pub class: String,
    /// Upper-cased type mnemonic.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Rdata values in input order.
    pub rdata: Vec<String>,
}

/// Counters collected while aggregating one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub lines_read: usize,
    pub records_accepted: usize,
    /// NS/SOA records dropped.
    pub records_skipped: usize,
    pub lines_rejected: usize,
    /// Later occurrences whose TTL or class differed from the first one.
    pub conflicts: usize,
}

impl std::fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} lines read, {} records accepted, {} auto-managed records skipped, {} lines rejected, {} TTL/class conflicts",
            self.lines_read,
            self.records_accepted,
            self.records_skipped,
            self.lines_rejected,
            self.conflicts
        )
    }
}

/// Aggregated record sets, in first-seen key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSets {
    entries: Vec<RecordSetEntry>,
    summary: ImportSummary,
}

impl RecordSets {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RecordSetEntry] {
        &self.entries
    }

    pub fn summary(&self) -> ImportSummary {
        self.summary
    }

    /// Looks up an entry; `record_type` is compared case-insensitively.
    pub fn get(&self, name: &str, record_type: &str) -> Option<&RecordSetEntry> {
        self.entries
            .iter()
            .find(|e| e.name == name && e.record_type.eq_ignore_ascii_case(record_type))
    }
}

impl IntoIterator for RecordSets {
    type Item = RecordSetEntry;
    type IntoIter = std::vec::IntoIter<RecordSetEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Aggregation state for a single pass over the input.
#[derive(Debug, Default)]
pub struct RecordAggregator {
    entries: Vec<RecordSetEntry>,
    index: HashMap<(String, String), usize>,
    summary: ImportSummary,
}

impl RecordAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one parsed record.
    pub fn push(&mut self, record: ParsedRecord) {
        let record_type = record.record_type.to_ascii_uppercase();

        if AUTO_MANAGED_TYPES.contains(&record_type.as_str()) {
            log::debug!("Skipping auto-managed {record_type} record for {}", record.name);
            self.summary.records_skipped += 1;
            return;
        }

        self.summary.records_accepted += 1;

        let key = (record.name, record_type);
        if let Some(&idx) = self.index.get(&key) {
            let entry = &mut self.entries[idx];
            if entry.ttl != record.ttl || !entry.class.eq_ignore_ascii_case(&record.class) {
                log::warn!(
                    "{} {}: TTL/class {} {} differs from first occurrence {} {}, keeping the first",
                    entry.name,
                    entry.record_type,
                    record.ttl,
                    record.class,
                    entry.ttl,
                    entry.class
                );
                self.summary.conflicts += 1;
            }
            entry.rdata.push(record.rdata);
            return;
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(RecordSetEntry {
            name: key.0,
            ttl: record.ttl,
            class: record.class,
            record_type: key.1,
            rdata: vec![record.rdata],
        });
    }

    /// Classifies, parses and aggregates one raw line. Rejected lines are
    /// logged and counted; they never abort the pass.
    pub fn ingest_line(&mut self, line_no: usize, line: &str) {
        self.summary.lines_read += 1;

        if classify_line(line) == LineKind::Ignore {
            return;
        }

        match parse_record_line(line) {
            Ok(record) => self.push(record),
            Err(e) => {
                log::warn!("Skipping line {line_no}: {e}: {}", line.trim_end());
                self.summary.lines_rejected += 1;
            }
        }
    }

    /// Consumes `reader` to the end. Only I/O failures are returned; lines
    /// that are not valid UTF-8 are rejected one by one.
    pub fn read_from<R: BufRead>(&mut self, mut reader: R) -> std::io::Result<()> {
        let mut buf = Vec::new();
        let mut line_no = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let raw = buf.strip_suffix(b"\n").unwrap_or(&buf);
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            match std::str::from_utf8(raw) {
                Ok(line) => self.ingest_line(line_no, line),
                Err(_) => self.reject_undecodable(line_no, raw),
            }
        }
        Ok(())
    }

    fn reject_undecodable(&mut self, line_no: usize, raw: &[u8]) {
        self.summary.lines_read += 1;

        let line = String::from_utf8_lossy(raw);
        if classify_line(&line) == LineKind::Ignore {
            return;
        }

        log::warn!("Skipping line {line_no}: not valid UTF-8: {}", line.trim_end());
        self.summary.lines_rejected += 1;
    }

    pub fn summary(&self) -> ImportSummary {
        self.summary
    }

    pub fn finish(self) -> RecordSets {
        RecordSets {
            entries: self.entries,
            summary: self.summary,
        }
    }
}
