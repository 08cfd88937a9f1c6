use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{ChangeBatch, ChangeInfo, HostedZone};
use crate::utils::domain::same_domain;

/// 原始 API 错误（内部使用）
#[cfg(feature = "route53")]
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（各 Provider 格式不同）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

#[cfg(feature = "route53")]
impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 映射错误时补充请求涉及的资源
#[cfg(feature = "route53")]
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Zone 名称或 ID（用于 `ZoneNotFound` / `ZoneExists`）
    pub zone: Option<String>,
    /// Change ID（用于 `ChangeNotFound`）
    pub change_id: Option<String>,
}

/// Provider 错误映射 Trait（内部使用）
#[cfg(feature = "route53")]
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Hosted-zone DNS service.
///
/// Covers exactly what an AXFR import needs: find or create the zone, submit one
/// change batch, then follow the change until it is applied.
#[async_trait]
pub trait HostedZoneProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 列出账号下全部托管 Zone（内部处理分页）
    async fn list_hosted_zones(&self) -> Result<Vec<HostedZone>>;

    /// 按名称查找 Zone，不存在时返回 `Ok(None)`
    ///
    /// 默认实现遍历 `list_hosted_zones()`；名称比较忽略末尾的点和大小写。
    async fn get_hosted_zone_by_name(&self, name: &str) -> Result<Option<HostedZone>> {
        Ok(self
            .list_hosted_zones()
            .await?
            .into_iter()
            .find(|zone| same_domain(&zone.name, name)))
    }

    /// 创建托管 Zone
    async fn create_hosted_zone(&self, name: &str) -> Result<HostedZone>;

    /// 提交变更批次，返回 change ID 与初始状态
    async fn change_record_sets(&self, zone_id: &str, batch: &ChangeBatch) -> Result<ChangeInfo>;

    /// 查询变更状态
    async fn get_change(&self, change_id: &str) -> Result<ChangeInfo>;
}
