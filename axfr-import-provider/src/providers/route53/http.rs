//! Route 53 HTTP 请求方法

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::Route53Provider;
use super::types::ErrorResponse;

/// `X-Amz-Date` 格式
const AMZ_DATE_FORMAT: &str = "%Y%m%dT%H%M%SZ";

impl Route53Provider {
    // ==================== 辅助方法 ====================

    /// 统一处理 Route 53 错误响应
    fn handle_response_error(
        &self,
        status: u16,
        response_text: &str,
        ctx: ErrorContext,
    ) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }

        if let Ok(error) = quick_xml::de::from_str::<ErrorResponse>(response_text) {
            // InvalidChangeBatch 携带多条消息
            if let Some(messages) = error.messages
                && !messages.items.is_empty()
            {
                return Err(ProviderError::InvalidChangeBatch {
                    provider: self.provider_name().to_string(),
                    messages: messages.items,
                });
            }

            if let Some(detail) = error.error {
                return Err(self.map_error(
                    RawApiError::with_code(
                        detail.code.unwrap_or_default(),
                        detail.message.unwrap_or_default(),
                    ),
                    ctx,
                ));
            }
        }

        Err(self.unknown_error(RawApiError::new(format!(
            "HTTP {status}: {}",
            truncate_for_log(response_text)
        ))))
    }

    /// 签名并发送请求，返回已校验状态码的响应体
    async fn send_signed(
        &self,
        method: &str,
        path: &str,
        query: &str,
        body: Option<String>,
        ctx: ErrorContext,
    ) -> Result<String> {
        let amz_date = Utc::now().format(AMZ_DATE_FORMAT).to_string();
        let payload = body.unwrap_or_default();

        let mut headers = vec![
            ("Host".to_string(), self.host.clone()),
            ("X-Amz-Date".to_string(), amz_date.clone()),
        ];
        if !payload.is_empty() {
            headers.push(("Content-Type".to_string(), "application/xml".to_string()));
        }

        let authorization = self.sign(method, path, query, &headers, &payload, &amz_date);

        let url = if query.is_empty() {
            format!("{}{path}", self.endpoint)
        } else {
            format!("{}{path}?{query}", self.endpoint)
        };

        let mut request = match method {
            "POST" => self.client.post(&url),
            "GET" => self.client.get(&url),
            _ => unreachable!("route53 client only issues GET/POST"),
        };
        for (name, value) in &headers {
            request = request.header(name.as_str(), value.as_str());
        }
        request = request.header("Authorization", authorization);
        if !payload.is_empty() {
            request = request.body(payload);
        }

        let (status, response_text) = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            method,
            &url,
            self.max_retries,
        )
        .await?;

        self.handle_response_error(status, &response_text, ctx)?;
        Ok(response_text)
    }

    // ==================== 公开 API 方法 ====================

    /// 执行 GET 请求
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
        ctx: ErrorContext,
    ) -> Result<T> {
        let text = self.send_signed("GET", path, query, None, ctx).await?;
        HttpUtils::parse_xml(&text, self.provider_name())
    }

    /// 执行 POST 请求，`root` 为请求文档的根元素名
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        root: &str,
        body: &B,
        ctx: ErrorContext,
    ) -> Result<T> {
        let payload = quick_xml::se::to_string_with_root(root, body).map_err(|e| {
            ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail: e.to_string(),
            }
        })?;

        log::debug!("Request Body: {}", truncate_for_log(&payload));

        let text = self
            .send_signed("POST", path, "", Some(payload), ctx)
            .await?;
        HttpUtils::parse_xml(&text, self.provider_name())
    }
}
