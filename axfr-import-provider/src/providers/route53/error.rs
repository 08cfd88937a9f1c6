//! Route 53 错误映射
//!
//! 参考: <https://docs.aws.amazon.com/Route53/latest/APIReference/CommonErrors.html>
//!
//! ## 错误码分类
//!
//! - **认证错误**：InvalidClientTokenId, SignatureDoesNotMatch, IncompleteSignature,
//!   MissingAuthenticationToken, ExpiredToken, InvalidSignatureException
//! - **权限拒绝**：AccessDenied, AccessDeniedException, OptInRequired
//! - **限流**：Throttling, ThrottlingException, PriorRequestNotComplete
//! - **配额**：TooManyHostedZones, LimitsExceeded, `TooManyChanges`
//! - **Zone**：NoSuchHostedZone (`ZoneNotFound`), HostedZoneAlreadyExists (`ZoneExists`)
//! - **Change**：NoSuchChange (`ChangeNotFound`), InvalidChangeBatch
//! - **参数错误**：InvalidDomainName, InvalidInput, InvalidArgument
//! - **服务端**：ServiceUnavailable, InternalFailure

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::Route53Provider;

/// Route 53 错误码映射实现
impl ProviderErrorMapper for Route53Provider {
    fn provider_name(&self) -> &'static str {
        "route53"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // ============ 认证错误 ============
            Some(
                "InvalidClientTokenId"
                | "SignatureDoesNotMatch"
                | "IncompleteSignature"
                | "MissingAuthenticationToken"
                | "ExpiredToken"
                | "InvalidSignatureException",
            ) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ 权限拒绝 ============
            Some("AccessDenied" | "AccessDeniedException" | "OptInRequired") => {
                ProviderError::PermissionDenied {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // ============ 限流 ============
            Some("Throttling" | "ThrottlingException" | "PriorRequestNotComplete") => {
                ProviderError::RateLimited {
                    provider: self.provider_name().to_string(),
                    retry_after: None,
                    raw_message: Some(raw.message),
                }
            }

            // ============ 配额 ============
            Some("TooManyHostedZones" | "LimitsExceeded" | "TooManyChanges") => {
                ProviderError::QuotaExceeded {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // ============ Zone ============
            Some("NoSuchHostedZone") => ProviderError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                zone: context.zone.unwrap_or_default(),
                raw_message: Some(raw.message),
            },
            Some("HostedZoneAlreadyExists" | "ConflictingDomainExists") => {
                ProviderError::ZoneExists {
                    provider: self.provider_name().to_string(),
                    zone: context.zone.unwrap_or_default(),
                    raw_message: Some(raw.message),
                }
            }

            // ============ Change ============
            Some("NoSuchChange") => ProviderError::ChangeNotFound {
                provider: self.provider_name().to_string(),
                change_id: context.change_id.unwrap_or_default(),
                raw_message: Some(raw.message),
            },
            Some("InvalidChangeBatch") => ProviderError::InvalidChangeBatch {
                provider: self.provider_name().to_string(),
                messages: vec![raw.message],
            },

            // ============ 参数错误 ============
            Some("InvalidDomainName") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "name".to_string(),
                detail: raw.message,
            },
            Some("InvalidInput" | "InvalidArgument") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "input".to_string(),
                detail: raw.message,
            },

            // ============ 服务端 ============
            Some("ServiceUnavailable" | "InternalFailure") => ProviderError::NetworkError {
                provider: self.provider_name().to_string(),
                detail: raw.message,
            },

            _ => self.unknown_error(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> Route53Provider {
        Route53Provider::new("ak".to_string(), "sk".to_string())
    }

    fn map(code: &str, ctx: ErrorContext) -> ProviderError {
        provider().map_error(RawApiError::with_code(code, "message"), ctx)
    }

    #[test]
    fn signature_errors_are_invalid_credentials() {
        for code in ["InvalidClientTokenId", "SignatureDoesNotMatch", "ExpiredToken"] {
            let e = map(code, ErrorContext::default());
            assert!(
                matches!(e, ProviderError::InvalidCredentials { .. }),
                "{code} mapped to {e:?}"
            );
        }
    }

    #[test]
    fn throttling_is_rate_limited() {
        let e = map("Throttling", ErrorContext::default());
        assert!(matches!(e, ProviderError::RateLimited { .. }), "{e:?}");
    }

    #[test]
    fn no_such_hosted_zone_carries_zone() {
        let ctx = ErrorContext {
            zone: Some("Z1".to_string()),
            ..Default::default()
        };
        let e = map("NoSuchHostedZone", ctx);
        assert!(
            matches!(&e, ProviderError::ZoneNotFound { zone, .. } if zone == "Z1"),
            "{e:?}"
        );
    }

    #[test]
    fn no_such_change_carries_change_id() {
        let ctx = ErrorContext {
            change_id: Some("C1".to_string()),
            ..Default::default()
        };
        let e = map("NoSuchChange", ctx);
        assert!(
            matches!(&e, ProviderError::ChangeNotFound { change_id, .. } if change_id == "C1"),
            "{e:?}"
        );
    }

    #[test]
    fn hosted_zone_already_exists() {
        let ctx = ErrorContext {
            zone: Some("example.com".to_string()),
            ..Default::default()
        };
        let e = map("HostedZoneAlreadyExists", ctx);
        assert!(matches!(e, ProviderError::ZoneExists { .. }), "{e:?}");
    }

    #[test]
    fn unmapped_code_falls_back_to_unknown() {
        let e = map("SomethingNew", ErrorContext::default());
        assert!(
            matches!(&e, ProviderError::Unknown { raw_code: Some(code), .. } if code == "SomethingNew"),
            "{e:?}"
        );
    }
}
