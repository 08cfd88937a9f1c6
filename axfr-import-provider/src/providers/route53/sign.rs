//! AWS Signature Version 4

use std::fmt::Write;

use crate::providers::common::{hmac_sha256, sha256_hex};
use crate::utils::log_sanitizer::{mask_secret, truncate_for_log};

use super::{Route53Provider, SERVICE_NAME};

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Signing identity and scope of one request.
pub(crate) struct SigV4<'a> {
    pub access_key_id: &'a str,
    pub secret_access_key: &'a str,
    pub region: &'a str,
    pub service: &'a str,
}

impl SigV4<'_> {
    /// Builds the `Authorization` header value.
    ///
    /// `query` is the already URI-encoded query string without `?`; `headers`
    /// must contain every header that is sent and signed, including `host`
    /// and `x-amz-date`. `amz_date` is `YYYYMMDD'T'HHMMSS'Z'`.
    /// Reference: <https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html>
    pub fn authorization(
        &self,
        method: &str,
        uri: &str,
        query: &str,
        headers: &[(String, String)],
        payload: &str,
        amz_date: &str,
    ) -> String {
        let date_stamp = amz_date.get(..8).unwrap_or(amz_date);

        // 1. Canonical query: parameters sorted by name
        let canonical_query = if query.is_empty() {
            String::new()
        } else {
            let mut params: Vec<&str> = query.split('&').collect();
            params.sort_unstable();
            params.join("&")
        };

        // 2. Canonical headers: lowercase names, trimmed values, sorted
        let mut sorted_headers: Vec<_> = headers
            .iter()
            .map(|(k, v)| (k.to_lowercase(), v.trim()))
            .collect();
        sorted_headers.sort_by(|a, b| a.0.cmp(&b.0));

        let canonical_headers = sorted_headers
            .iter()
            .fold(String::new(), |mut acc, (k, v)| {
                let _ = writeln!(acc, "{k}:{v}");
                acc
            });

        let signed_headers = sorted_headers
            .iter()
            .map(|(k, _)| k.as_str())
            .collect::<Vec<_>>()
            .join(";");

        // 3. Canonical request
        let canonical_uri = if uri.is_empty() { "/" } else { uri };
        let hashed_payload = sha256_hex(payload.as_bytes());
        let canonical_request = format!(
            "{method}\n{canonical_uri}\n{canonical_query}\n{canonical_headers}\n{signed_headers}\n{hashed_payload}"
        );

        log::debug!("CanonicalRequest:\n{}", truncate_for_log(&canonical_request));

        // 4. String to sign
        let scope = format!("{date_stamp}/{}/{}/aws4_request", self.region, self.service);
        let string_to_sign = format!(
            "{ALGORITHM}\n{amz_date}\n{scope}\n{}",
            sha256_hex(canonical_request.as_bytes())
        );

        log::debug!("StringToSign:\n{string_to_sign}");

        // 5. Derived signing key: date -> region -> service -> "aws4_request"
        let k_date = hmac_sha256(
            format!("AWS4{}", self.secret_access_key).as_bytes(),
            date_stamp.as_bytes(),
        );
        let k_region = hmac_sha256(&k_date, self.region.as_bytes());
        let k_service = hmac_sha256(&k_region, self.service.as_bytes());
        let k_signing = hmac_sha256(&k_service, b"aws4_request");

        let signature = hex::encode(hmac_sha256(&k_signing, string_to_sign.as_bytes()));

        log::debug!(
            "Signed request as {} with scope {scope}",
            mask_secret(self.access_key_id)
        );

        format!(
            "{ALGORITHM} Credential={}/{scope}, SignedHeaders={signed_headers}, Signature={signature}",
            self.access_key_id
        )
    }
}

impl Route53Provider {
    /// Signs a Route 53 request with this provider's credentials.
    pub(crate) fn sign(
        &self,
        method: &str,
        uri: &str,
        query: &str,
        headers: &[(String, String)],
        payload: &str,
        amz_date: &str,
    ) -> String {
        SigV4 {
            access_key_id: &self.access_key_id,
            secret_access_key: &self.secret_access_key,
            region: &self.region,
            service: SERVICE_NAME,
        }
        .authorization(method, uri, query, headers, payload, amz_date)
    }
}

#[cfg(test)]
mod tests {
    use super::super::Route53Provider;
    use super::SigV4;

    /// Credentials of the AWS SigV4 test suite.
    const SUITE_ACCESS_KEY: &str = "AKIDEXAMPLE";
    const SUITE_SECRET_KEY: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";
    const SUITE_DATE: &str = "20150830T123600Z";

    fn suite_signer() -> SigV4<'static> {
        SigV4 {
            access_key_id: SUITE_ACCESS_KEY,
            secret_access_key: SUITE_SECRET_KEY,
            region: "us-east-1",
            service: "service",
        }
    }

    fn suite_headers() -> Vec<(String, String)> {
        vec![
            ("Host".to_string(), "example.amazonaws.com".to_string()),
            ("X-Amz-Date".to_string(), SUITE_DATE.to_string()),
        ]
    }

    fn extract_signature(auth: &str) -> Option<&str> {
        auth.split("Signature=").nth(1)
    }

    fn extract_signed_headers(auth: &str) -> Option<&str> {
        auth.split("SignedHeaders=")
            .nth(1)
            .and_then(|s| s.split(',').next())
    }

    // ============ AWS test suite vectors ============

    #[test]
    fn sign_get_vanilla() {
        let auth = suite_signer().authorization("GET", "/", "", &suite_headers(), "", SUITE_DATE);
        assert_eq!(
            auth,
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, \
             SignedHeaders=host;x-amz-date, \
             Signature=5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
    }

    #[test]
    fn sign_get_vanilla_query_order() {
        let auth = suite_signer().authorization(
            "GET",
            "/",
            "Param2=value2&Param1=value1",
            &suite_headers(),
            "",
            SUITE_DATE,
        );
        assert_eq!(
            extract_signature(&auth),
            Some("b97d918cfa904a5beff61c982a1b6f458b799221646efd99d3219ec94cdf2500")
        );
    }

    // ============ Properties ============

    #[test]
    fn sign_empty_uri_is_root() {
        let signer = suite_signer();
        let headers = suite_headers();
        assert_eq!(
            signer.authorization("GET", "", "", &headers, "", SUITE_DATE),
            signer.authorization("GET", "/", "", &headers, "", SUITE_DATE)
        );
    }

    #[test]
    fn sign_headers_sorted_and_lowercased() {
        let headers = vec![
            ("X-Amz-Date".to_string(), SUITE_DATE.to_string()),
            ("Content-Type".to_string(), "text/xml".to_string()),
            ("Host".to_string(), "route53.amazonaws.com".to_string()),
        ];
        let auth = suite_signer().authorization("POST", "/", "", &headers, "<x/>", SUITE_DATE);
        assert_eq!(
            extract_signed_headers(&auth),
            Some("content-type;host;x-amz-date")
        );
    }

    #[test]
    fn sign_payload_changes_signature() {
        let signer = suite_signer();
        let headers = suite_headers();
        let a = signer.authorization("POST", "/", "", &headers, "<a/>", SUITE_DATE);
        let b = signer.authorization("POST", "/", "", &headers, "<b/>", SUITE_DATE);
        assert_ne!(extract_signature(&a), extract_signature(&b));
    }

    #[test]
    fn provider_signs_for_route53_scope() {
        let p = Route53Provider::new(SUITE_ACCESS_KEY.to_string(), SUITE_SECRET_KEY.to_string());
        let auth = p.sign(
            "GET",
            "/2013-04-01/hostedzone",
            "",
            &suite_headers(),
            "",
            SUITE_DATE,
        );
        assert!(
            auth.starts_with(
                "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/route53/aws4_request, "
            ),
            "unexpected authorization: {auth}"
        );
    }
}
