//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use axfr_import_provider::{
    Change, ChangeAction, ChangeBatch, HostedZoneProvider, ProviderCredentials, ResourceRecordSet,
    create_provider,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 测试用 TXT 记录的前缀，UPSERT 可重复执行，无需清理
pub const TEST_RECORD_LABEL: &str = "_axfr-import-test";

/// 测试上下文 - 封装 Provider 和测试域名
pub struct TestContext {
    pub provider: Arc<dyn HostedZoneProvider>,
    pub domain: String,
}

impl TestContext {
    /// 创建 Route 53 测试上下文
    pub fn route53() -> Option<Self> {
        let access_key_id = env::var("AWS_ACCESS_KEY_ID").ok()?;
        let secret_access_key = env::var("AWS_SECRET_ACCESS_KEY").ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;

        let provider = create_provider(ProviderCredentials::Route53 {
            access_key_id,
            secret_access_key,
        })
        .ok()?;

        Some(Self { provider, domain })
    }

    /// 测试记录的 UPSERT 批次
    pub fn test_record_batch(&self, value: &str) -> ChangeBatch {
        ChangeBatch {
            comment: Some("axfr-import integration test".to_string()),
            changes: vec![Change {
                action: ChangeAction::Upsert,
                record_set: ResourceRecordSet {
                    name: format!("{TEST_RECORD_LABEL}.{}.", self.domain.trim_end_matches('.')),
                    record_type: "TXT".to_string(),
                    ttl: 60,
                    records: vec![format!("\"{value}\"")],
                },
            }],
        }
    }
}
