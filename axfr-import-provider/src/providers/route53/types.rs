//! Route 53 REST API (2013-04-01) XML documents
//!
//! Reference: <https://docs.aws.amazon.com/Route53/latest/APIReference/API_Operations_Amazon_Route_53.html>

use serde::{Deserialize, Serialize};

// ============ Responses ============

/// Response payload for `ListHostedZones` and `ListHostedZonesByName`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListHostedZonesResponse {
    #[serde(default)]
    pub hosted_zones: HostedZoneList,
    #[serde(default)]
    pub is_truncated: bool,
    /// Only present when `IsTruncated` is true (`ListHostedZones`).
    pub next_marker: Option<String>,
}

/// `<HostedZones>` wrapper element.
#[derive(Debug, Default, Deserialize)]
pub struct HostedZoneList {
    #[serde(rename = "HostedZone", default)]
    pub items: Vec<Route53HostedZone>,
}

/// Hosted zone element.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Route53HostedZone {
    /// `/hostedzone/<id>`
    pub id: String,
    /// Fully qualified, with trailing dot.
    pub name: String,
    pub resource_record_set_count: Option<u64>,
}

/// Response payload for `CreateHostedZone`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateHostedZoneResponse {
    pub hosted_zone: Route53HostedZone,
    pub change_info: Option<Route53ChangeInfo>,
}

/// Response payload for `ChangeResourceRecordSets` and `GetChange`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeInfoResponse {
    pub change_info: Route53ChangeInfo,
}

/// `<ChangeInfo>` element.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Route53ChangeInfo {
    /// `/change/<id>`
    pub id: String,
    /// `PENDING` or `INSYNC`.
    pub status: String,
    pub submitted_at: Option<String>,
}

/// Error payload.
///
/// Covers both `<ErrorResponse><Error>..</Error></ErrorResponse>` and
/// `<InvalidChangeBatch><Messages>..</Messages></InvalidChangeBatch>`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorResponse {
    pub error: Option<ErrorDetail>,
    pub messages: Option<MessageList>,
}

/// `<Error>` element.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorDetail {
    pub code: Option<String>,
    pub message: Option<String>,
}

/// `<Messages>` element of `InvalidChangeBatch`.
#[derive(Debug, Default, Deserialize)]
pub struct MessageList {
    #[serde(rename = "Message", default)]
    pub items: Vec<String>,
}

// ============ Requests ============

/// `CreateHostedZoneRequest` document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateHostedZoneRequest {
    #[serde(rename = "@xmlns")]
    pub xmlns: &'static str,
    pub name: String,
    /// Unique per request; makes retried creations idempotent.
    pub caller_reference: String,
    pub hosted_zone_config: HostedZoneConfig,
}

/// `<HostedZoneConfig>` element.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HostedZoneConfig {
    pub comment: String,
    pub private_zone: bool,
}

/// `ChangeResourceRecordSetsRequest` document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeResourceRecordSetsRequest {
    #[serde(rename = "@xmlns")]
    pub xmlns: &'static str,
    pub change_batch: ChangeBatchXml,
}

/// `<ChangeBatch>` element.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeBatchXml {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub changes: ChangeList,
}

/// `<Changes>` element.
#[derive(Debug, Serialize)]
pub struct ChangeList {
    #[serde(rename = "Change")]
    pub items: Vec<ChangeXml>,
}

/// `<Change>` element.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeXml {
    pub action: &'static str,
    pub resource_record_set: ResourceRecordSetXml,
}

/// `<ResourceRecordSet>` element; element order follows the API schema.
#[derive(Debug, Serialize)]
pub struct ResourceRecordSetXml {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "TTL")]
    pub ttl: u32,
    #[serde(rename = "ResourceRecords")]
    pub resource_records: ResourceRecordList,
}

/// `<ResourceRecords>` element.
#[derive(Debug, Serialize)]
pub struct ResourceRecordList {
    #[serde(rename = "ResourceRecord")]
    pub items: Vec<ResourceRecordXml>,
}

/// `<ResourceRecord>` element.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceRecordXml {
    pub value: String,
}
