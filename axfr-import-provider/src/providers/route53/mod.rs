//! Amazon Route 53 Provider

mod error;
mod http;
mod provider;
mod sign;
/// Route 53 REST/XML request and response types.
pub(crate) mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;

/// Route 53 global API endpoint.
pub(crate) const ROUTE53_ENDPOINT: &str = "https://route53.amazonaws.com";
/// Route 53 API version prefix for every path.
pub(crate) const API_VERSION: &str = "2013-04-01";
/// Route 53 is a global service signed against this region.
pub(crate) const DEFAULT_REGION: &str = "us-east-1";
/// SigV4 service name.
pub(crate) const SERVICE_NAME: &str = "route53";
/// XML namespace of every request document.
pub(crate) const XML_NAMESPACE: &str = "https://route53.amazonaws.com/doc/2013-04-01/";
/// Maximum `maxitems` accepted by `ListHostedZones`.
pub(crate) const MAX_PAGE_SIZE: u32 = 100;

/// Amazon Route 53 provider implementation.
///
/// Authenticates with AWS Signature Version 4.
///
/// # Construction
///
/// ```rust,no_run
/// use axfr_import_provider::Route53Provider;
///
/// let provider = Route53Provider::builder(
///     "your-access-key-id".to_string(),
///     "your-secret-access-key".to_string(),
/// )
/// .max_retries(1)
/// .build();
/// ```
pub struct Route53Provider {
    pub(crate) client: Client,
    pub(crate) access_key_id: String,
    pub(crate) secret_access_key: String,
    pub(crate) endpoint: String,
    pub(crate) host: String,
    pub(crate) region: String,
    pub(crate) max_retries: u32,
}

/// Builder for [`Route53Provider`].
pub struct Route53ProviderBuilder {
    access_key_id: String,
    secret_access_key: String,
    endpoint: String,
    region: String,
    max_retries: u32,
}

impl Route53ProviderBuilder {
    fn new(access_key_id: String, secret_access_key: String) -> Self {
        Self {
            access_key_id,
            secret_access_key,
            endpoint: ROUTE53_ENDPOINT.to_string(),
            region: DEFAULT_REGION.to_string(),
            max_retries: 0,
        }
    }

    /// Set the maximum number of automatic retries for transient errors (default: 0).
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Override the API endpoint, e.g. for a local Route 53 emulator.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the signing region (default: `us-east-1`).
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Build the [`Route53Provider`] instance.
    pub fn build(self) -> Route53Provider {
        let host = host_of(&self.endpoint);
        Route53Provider {
            client: create_http_client(),
            access_key_id: self.access_key_id,
            secret_access_key: self.secret_access_key,
            endpoint: self.endpoint,
            host,
            region: self.region,
            max_retries: self.max_retries,
        }
    }
}

impl Route53Provider {
    /// Creates a provider against the public endpoint with no retries.
    pub fn new(access_key_id: String, secret_access_key: String) -> Self {
        Self::builder(access_key_id, secret_access_key).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(access_key_id: String, secret_access_key: String) -> Route53ProviderBuilder {
        Route53ProviderBuilder::new(access_key_id, secret_access_key)
    }
}

/// `https://host:port/path` -> `host:port`
fn host_of(endpoint: &str) -> String {
    let without_scheme = endpoint
        .split_once("://")
        .map_or(endpoint, |(_, rest)| rest);
    without_scheme
        .split('/')
        .next()
        .unwrap_or(without_scheme)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_from_default_endpoint() {
        assert_eq!(host_of(ROUTE53_ENDPOINT), "route53.amazonaws.com");
    }

    #[test]
    fn host_keeps_port() {
        assert_eq!(host_of("http://localhost:4566/"), "localhost:4566");
    }

    #[test]
    fn builder_defaults() {
        let p = Route53Provider::new("ak".to_string(), "sk".to_string());
        assert_eq!(p.endpoint, ROUTE53_ENDPOINT);
        assert_eq!(p.host, "route53.amazonaws.com");
        assert_eq!(p.region, DEFAULT_REGION);
        assert_eq!(p.max_retries, 0);
    }

    #[test]
    fn builder_overrides() {
        let p = Route53Provider::builder("ak".to_string(), "sk".to_string())
            .endpoint("http://localhost:4566/")
            .region("eu-west-1")
            .max_retries(3)
            .build();
        assert_eq!(p.endpoint, "http://localhost:4566");
        assert_eq!(p.host, "localhost:4566");
        assert_eq!(p.region, "eu-west-1");
        assert_eq!(p.max_retries, 3);
    }
}
