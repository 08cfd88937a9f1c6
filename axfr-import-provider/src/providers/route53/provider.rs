//! Route 53 `HostedZoneProvider` trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::providers::common::{last_path_segment, normalize_domain_name};
use crate::utils::domain::same_domain;
use crate::traits::{ErrorContext, HostedZoneProvider, ProviderErrorMapper};
use crate::types::{ChangeBatch, ChangeInfo, ChangeStatus, HostedZone};
use crate::utils::datetime::parse_timestamp;

use super::types::{
    ChangeBatchXml, ChangeInfoResponse, ChangeList, ChangeResourceRecordSetsRequest, ChangeXml,
    CreateHostedZoneRequest, CreateHostedZoneResponse, HostedZoneConfig,
    ListHostedZonesResponse, ResourceRecordList, ResourceRecordSetXml, ResourceRecordXml,
    Route53ChangeInfo, Route53HostedZone,
};
use super::{API_VERSION, MAX_PAGE_SIZE, Route53Provider, XML_NAMESPACE};

impl Route53Provider {
    pub(crate) fn convert_zone(zone: Route53HostedZone) -> HostedZone {
        HostedZone {
            id: last_path_segment(&zone.id),
            name: normalize_domain_name(&zone.name),
            record_count: zone.resource_record_set_count,
        }
    }

    pub(crate) fn convert_change_info(&self, info: Route53ChangeInfo) -> Result<ChangeInfo> {
        let status = ChangeStatus::parse(&info.status).ok_or_else(|| ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: format!("unknown change status: {}", info.status),
        })?;

        Ok(ChangeInfo {
            id: last_path_segment(&info.id),
            status,
            submitted_at: info.submitted_at.as_deref().and_then(parse_timestamp),
        })
    }

    pub(crate) fn change_batch_request(batch: &ChangeBatch) -> ChangeResourceRecordSetsRequest {
        let items = batch
            .changes
            .iter()
            .map(|change| ChangeXml {
                action: change.action.as_str(),
                resource_record_set: ResourceRecordSetXml {
                    name: change.record_set.name.clone(),
                    record_type: change.record_set.record_type.clone(),
                    ttl: change.record_set.ttl,
                    resource_records: ResourceRecordList {
                        items: change
                            .record_set
                            .records
                            .iter()
                            .map(|value| ResourceRecordXml {
                                value: value.clone(),
                            })
                            .collect(),
                    },
                },
            })
            .collect();

        ChangeResourceRecordSetsRequest {
            xmlns: XML_NAMESPACE,
            change_batch: ChangeBatchXml {
                comment: batch.comment.clone(),
                changes: ChangeList { items },
            },
        }
    }
}

#[async_trait]
impl HostedZoneProvider for Route53Provider {
    fn id(&self) -> &'static str {
        "route53"
    }

    async fn list_hosted_zones(&self) -> Result<Vec<HostedZone>> {
        let path = format!("/{API_VERSION}/hostedzone");
        let mut zones = Vec::new();
        let mut marker: Option<String> = None;

        // 按 NextMarker 翻页直到 IsTruncated 为 false
        loop {
            let mut query = format!("maxitems={MAX_PAGE_SIZE}");
            if let Some(ref m) = marker {
                query = format!("marker={}&{query}", urlencoding::encode(m));
            }

            let response: ListHostedZonesResponse = self
                .get(&path, &query, ErrorContext::default())
                .await?;

            zones.extend(
                response
                    .hosted_zones
                    .items
                    .into_iter()
                    .map(Self::convert_zone),
            );

            match response.next_marker {
                Some(next) if response.is_truncated => marker = Some(next),
                _ => break,
            }
        }

        log::debug!("[route53] listed {} hosted zones", zones.len());
        Ok(zones)
    }

    /// 使用 `ListHostedZonesByName`：结果从 `dnsname` 起按名称排序，只需检查第一条
    async fn get_hosted_zone_by_name(&self, name: &str) -> Result<Option<HostedZone>> {
        let path = format!("/{API_VERSION}/hostedzonesbyname");
        let query = format!(
            "dnsname={}&maxitems=1",
            urlencoding::encode(&normalize_domain_name(name))
        );
        let ctx = ErrorContext {
            zone: Some(name.to_string()),
            ..Default::default()
        };

        let response: ListHostedZonesResponse = self.get(&path, &query, ctx).await?;

        Ok(response
            .hosted_zones
            .items
            .into_iter()
            .map(Self::convert_zone)
            .find(|zone| same_domain(&zone.name, name)))
    }

    async fn create_hosted_zone(&self, name: &str) -> Result<HostedZone> {
        let path = format!("/{API_VERSION}/hostedzone");
        let request = CreateHostedZoneRequest {
            xmlns: XML_NAMESPACE,
            name: normalize_domain_name(name),
            caller_reference: uuid::Uuid::new_v4().to_string(),
            hosted_zone_config: HostedZoneConfig {
                comment: "Imported from AXFR".to_string(),
                private_zone: false,
            },
        };
        let ctx = ErrorContext {
            zone: Some(name.to_string()),
            ..Default::default()
        };

        let response: CreateHostedZoneResponse = self
            .post(&path, "CreateHostedZoneRequest", &request, ctx)
            .await?;

        if let Some(info) = response.change_info {
            log::info!(
                "[route53] zone {name} created, change {} is {}",
                last_path_segment(&info.id),
                info.status
            );
        }

        Ok(Self::convert_zone(response.hosted_zone))
    }

    async fn change_record_sets(&self, zone_id: &str, batch: &ChangeBatch) -> Result<ChangeInfo> {
        let zone_id = last_path_segment(zone_id);
        let path = format!("/{API_VERSION}/hostedzone/{zone_id}/rrset");
        let request = Self::change_batch_request(batch);
        let ctx = ErrorContext {
            zone: Some(zone_id.clone()),
            ..Default::default()
        };

        let response: ChangeInfoResponse = self
            .post(&path, "ChangeResourceRecordSetsRequest", &request, ctx)
            .await?;

        self.convert_change_info(response.change_info)
    }

    async fn get_change(&self, change_id: &str) -> Result<ChangeInfo> {
        let change_id = last_path_segment(change_id);
        let path = format!("/{API_VERSION}/change/{change_id}");
        let ctx = ErrorContext {
            change_id: Some(change_id.clone()),
            ..Default::default()
        };

        let response: ChangeInfoResponse = self.get(&path, "", ctx).await?;
        self.convert_change_info(response.change_info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Change, ChangeAction, ResourceRecordSet};

    fn provider() -> Route53Provider {
        Route53Provider::new("ak".to_string(), "sk".to_string())
    }

    #[test]
    fn convert_zone_strips_prefix_and_dot() {
        let zone = Route53Provider::convert_zone(Route53HostedZone {
            id: "/hostedzone/Z1D633PJN98FT9".to_string(),
            name: "example.com.".to_string(),
            resource_record_set_count: Some(3),
        });
        assert_eq!(zone.id, "Z1D633PJN98FT9");
        assert_eq!(zone.name, "example.com");
        assert_eq!(zone.record_count, Some(3));
    }

    #[test]
    fn convert_change_info_parses_status() {
        let info = provider()
            .convert_change_info(Route53ChangeInfo {
                id: "/change/C2682N5HXP0BZ4".to_string(),
                status: "INSYNC".to_string(),
                submitted_at: Some("2017-03-10T01:36:41.958Z".to_string()),
            })
            .unwrap();
        assert_eq!(info.id, "C2682N5HXP0BZ4");
        assert_eq!(info.status, ChangeStatus::Insync);
        assert!(info.submitted_at.is_some());
    }

    #[test]
    fn convert_change_info_rejects_unknown_status() {
        let r = provider().convert_change_info(Route53ChangeInfo {
            id: "/change/C1".to_string(),
            status: "APPLYING".to_string(),
            submitted_at: None,
        });
        assert!(matches!(r, Err(ProviderError::ParseError { .. })), "{r:?}");
    }

    #[test]
    fn change_batch_request_keeps_all_values() {
        let batch = ChangeBatch {
            comment: Some("import".to_string()),
            changes: vec![Change {
                action: ChangeAction::Upsert,
                record_set: ResourceRecordSet {
                    name: "example.com.".to_string(),
                    record_type: "A".to_string(),
                    ttl: 300,
                    records: vec!["1.2.3.4".to_string(), "5.6.7.8".to_string()],
                },
            }],
        };

        let req = Route53Provider::change_batch_request(&batch);
        assert_eq!(req.change_batch.comment.as_deref(), Some("import"));
        assert_eq!(req.change_batch.changes.items.len(), 1);
        let change = &req.change_batch.changes.items[0];
        assert_eq!(change.action, "UPSERT");
        assert_eq!(change.resource_record_set.ttl, 300);
        let values: Vec<_> = change
            .resource_record_set
            .resource_records
            .items
            .iter()
            .map(|r| r.value.as_str())
            .collect();
        assert_eq!(values, ["1.2.3.4", "5.6.7.8"]);
    }
}
