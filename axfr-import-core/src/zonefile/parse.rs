//! Record line parsing

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// `<name> <ttl> <class> <type> <rdata...>`
static RECORD_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\S+)\s+(\S+)\s+(\S+)\s+(\S+)\s+(.*)$").expect("record line pattern is valid")
});

/// One record line split into its five fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    pub name: String,
    pub ttl: u32,
    pub class: String,
    /// Type mnemonic exactly as written (not normalized).
    pub record_type: String,
    /// Unparsed remainder of the line, trailing whitespace removed.
    pub rdata: String,
}

/// Why a candidate line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineParseError {
    #[error("expected <name> <ttl> <class> <type> <rdata>")]
    Malformed,

    #[error("invalid TTL {0:?}")]
    InvalidTtl(String),
}

/// Splits a record line into `(name, ttl, class, type, rdata)`.
pub fn parse_record_line(line: &str) -> Result<ParsedRecord, LineParseError> {
    let caps = RECORD_LINE
        .captures(line)
        .ok_or(LineParseError::Malformed)?;

    let ttl_field = &caps[2];
    let ttl = ttl_field
        .parse::<u32>()
        .map_err(|_| LineParseError::InvalidTtl(ttl_field.to_string()))?;

    let rdata = caps[5].trim_end();
    if rdata.is_empty() {
        return Err(LineParseError::Malformed);
    }

    Ok(ParsedRecord {
        name: caps[1].to_string(),
        ttl,
        class: caps[3].to_string(),
        record_type: caps[4].to_string(),
        rdata: rdata.to_string(),
    })
}
