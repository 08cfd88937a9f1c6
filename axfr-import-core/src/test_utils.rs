//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use axfr_import_provider::{
    same_domain, ChangeBatch, ChangeInfo, ChangeStatus, HostedZone, HostedZoneProvider,
    ProviderError, Result,
};
use tokio::sync::RwLock;

use crate::services::ZoneService;

// ===== MockHostedZoneProvider =====

/// 内存中的 `HostedZoneProvider`
///
/// 变更状态按脚本依次返回：第一个用于提交响应，其余用于轮询；
/// 脚本只剩最后一个状态时重复返回它。
pub struct MockHostedZoneProvider {
    zones: RwLock<Vec<HostedZone>>,
    statuses: RwLock<VecDeque<ChangeStatus>>,
    submitted: RwLock<Vec<(String, ChangeBatch)>>,
    created: RwLock<usize>,
    get_change_calls: RwLock<usize>,
    /// 为 true 时 `get_hosted_zone_by_name` 始终返回 None
    hide_by_name: RwLock<bool>,
    list_error: RwLock<Option<ProviderError>>,
    create_error: RwLock<Option<ProviderError>>,
    submit_error: RwLock<Option<ProviderError>>,
    poll_error: RwLock<Option<ProviderError>>,
}

impl MockHostedZoneProvider {
    pub fn new() -> Self {
        Self {
            zones: RwLock::new(Vec::new()),
            statuses: RwLock::new(VecDeque::new()),
            submitted: RwLock::new(Vec::new()),
            created: RwLock::new(0),
            get_change_calls: RwLock::new(0),
            hide_by_name: RwLock::new(false),
            list_error: RwLock::new(None),
            create_error: RwLock::new(None),
            submit_error: RwLock::new(None),
            poll_error: RwLock::new(None),
        }
    }

    pub async fn add_zone(&self, zone: HostedZone) {
        self.zones.write().await.push(zone);
    }

    pub async fn set_statuses(&self, statuses: impl IntoIterator<Item = ChangeStatus>) {
        *self.statuses.write().await = statuses.into_iter().collect();
    }

    pub async fn set_hide_by_name(&self, hide: bool) {
        *self.hide_by_name.write().await = hide;
    }

    pub async fn set_list_error(&self, err: Option<ProviderError>) {
        *self.list_error.write().await = err;
    }

    pub async fn set_create_error(&self, err: Option<ProviderError>) {
        *self.create_error.write().await = err;
    }

    pub async fn set_submit_error(&self, err: Option<ProviderError>) {
        *self.submit_error.write().await = err;
    }

    pub async fn set_poll_error(&self, err: Option<ProviderError>) {
        *self.poll_error.write().await = err;
    }

    pub async fn zone_count(&self) -> usize {
        self.zones.read().await.len()
    }

    pub async fn created_count(&self) -> usize {
        *self.created.read().await
    }

    pub async fn get_change_calls(&self) -> usize {
        *self.get_change_calls.read().await
    }

    pub async fn submitted(&self) -> Vec<(String, ChangeBatch)> {
        self.submitted.read().await.clone()
    }

    async fn next_status(&self) -> ChangeStatus {
        let mut statuses = self.statuses.write().await;
        let next = if statuses.len() > 1 {
            statuses.pop_front()
        } else {
            statuses.front().copied()
        };
        next.unwrap_or(ChangeStatus::Insync)
    }

    fn change_info(status: ChangeStatus) -> ChangeInfo {
        ChangeInfo {
            id: "C0001".to_string(),
            status,
            submitted_at: None,
        }
    }
}

#[async_trait]
impl HostedZoneProvider for MockHostedZoneProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_hosted_zones(&self) -> Result<Vec<HostedZone>> {
        if let Some(ref err) = *self.list_error.read().await {
            return Err(err.clone());
        }
        Ok(self.zones.read().await.clone())
    }

    async fn get_hosted_zone_by_name(&self, name: &str) -> Result<Option<HostedZone>> {
        if *self.hide_by_name.read().await {
            return Ok(None);
        }
        Ok(self
            .zones
            .read()
            .await
            .iter()
            .find(|z| same_domain(&z.name, name))
            .cloned())
    }

    async fn create_hosted_zone(&self, name: &str) -> Result<HostedZone> {
        if let Some(ref err) = *self.create_error.read().await {
            return Err(err.clone());
        }
        let mut zones = self.zones.write().await;
        let zone = test_zone(
            &format!("ZMOCK{}", zones.len() + 1),
            name.trim_end_matches('.'),
        );
        zones.push(zone.clone());
        *self.created.write().await += 1;
        Ok(zone)
    }

    async fn change_record_sets(&self, zone_id: &str, batch: &ChangeBatch) -> Result<ChangeInfo> {
        if let Some(ref err) = *self.submit_error.read().await {
            return Err(err.clone());
        }
        self.submitted
            .write()
            .await
            .push((zone_id.to_string(), batch.clone()));
        Ok(Self::change_info(self.next_status().await))
    }

    async fn get_change(&self, _change_id: &str) -> Result<ChangeInfo> {
        *self.get_change_calls.write().await += 1;
        if let Some(ref err) = *self.poll_error.read().await {
            return Err(err.clone());
        }
        Ok(Self::change_info(self.next_status().await))
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `HostedZone`
pub fn test_zone(id: &str, name: &str) -> HostedZone {
    HostedZone {
        id: id.to_string(),
        name: name.to_string(),
        record_count: None,
    }
}

/// 创建测试用 `ZoneService`
pub fn create_test_zone_service() -> (ZoneService, Arc<MockHostedZoneProvider>) {
    let mock = Arc::new(MockHostedZoneProvider::new());
    let service = ZoneService::new(mock.clone());
    (service, mock)
}
