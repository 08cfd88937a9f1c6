//! Provider-neutral hosted-zone types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::datetime;

// ============ Hosted Zone ============

/// A hosted zone as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedZone {
    /// Provider-assigned zone ID, without any path prefix (e.g. `Z1D633PJN98FT9`).
    pub id: String,
    /// Zone apex name without the trailing dot.
    pub name: String,
    /// Number of record sets in the zone, if the provider reports it.
    pub record_count: Option<u64>,
}

// ============ Record Sets ============

/// All values of one `(name, type)` pair, sharing a single TTL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecordSet {
    /// Owner name, as it appeared in the source (usually fully qualified).
    pub name: String,
    /// Upper-case record type mnemonic (`A`, `TXT`, `MX`, ...).
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: u32,
    /// Presentation-format rdata values.
    pub records: Vec<String>,
}

/// Change operation applied to a record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    /// Fails if the record set already exists.
    #[default]
    Create,
    /// Creates the record set or replaces its values.
    Upsert,
}

impl ChangeAction {
    /// Wire name of the action.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Upsert => "UPSERT",
        }
    }
}

impl std::fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One operation of a [`ChangeBatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    pub action: ChangeAction,
    pub record_set: ResourceRecordSet,
}

/// A set of record-set changes submitted atomically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeBatch {
    /// Free-form comment stored with the change by the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub changes: Vec<Change>,
}

impl ChangeBatch {
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

// ============ Change Status ============

/// Propagation status of a submitted change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeStatus {
    /// Accepted but not yet applied on every authoritative server.
    Pending,
    /// Applied everywhere. Terminal.
    Insync,
}

impl ChangeStatus {
    /// Parses the provider's status string (case-insensitive).
    pub fn parse(status: &str) -> Option<Self> {
        if status.eq_ignore_ascii_case("PENDING") {
            Some(Self::Pending)
        } else if status.eq_ignore_ascii_case("INSYNC") {
            Some(Self::Insync)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Insync => "INSYNC",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Insync)
    }
}

impl std::fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status report for a change, returned on submission and on every status query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeInfo {
    /// Provider-assigned change ID, without any path prefix.
    pub id: String,
    pub status: ChangeStatus,
    #[serde(with = "datetime")]
    pub submitted_at: Option<DateTime<Utc>>,
}

// ============ Provider Credentials ============

/// Credentials for constructing a provider via [`create_provider`](crate::create_provider).
///
/// ```json
/// { "provider": "route53", "credentials": { "access_key_id": "...", "secret_access_key": "..." } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum ProviderCredentials {
    /// AWS credentials. Requires feature `route53`.
    #[cfg(feature = "route53")]
    #[serde(rename = "route53")]
    Route53 {
        /// AWS access key ID (`AKIA...`).
        access_key_id: String,
        /// AWS secret access key.
        secret_access_key: String,
    },
}
