//! Provider factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::HostedZoneProvider;
use crate::types::ProviderCredentials;

#[cfg(feature = "route53")]
use crate::providers::Route53Provider;

/// Creates a [`HostedZoneProvider`] instance from the given credentials.
///
/// The concrete provider type is determined by the [`ProviderCredentials`] variant.
/// Use the concrete builder (e.g. [`Route53Provider::builder`]) to tune endpoint
/// or retry settings.
///
/// # Examples
///
/// ```rust,no_run
/// use axfr_import_provider::{create_provider, ProviderCredentials};
///
/// let provider = create_provider(ProviderCredentials::Route53 {
///     access_key_id: "AKIA...".to_string(),
///     secret_access_key: "...".to_string(),
/// }).unwrap();
/// ```
pub fn create_provider(credentials: ProviderCredentials) -> Result<Arc<dyn HostedZoneProvider>> {
    match credentials {
        #[cfg(feature = "route53")]
        ProviderCredentials::Route53 {
            access_key_id,
            secret_access_key,
        } => Ok(Arc::new(Route53Provider::new(
            access_key_id,
            secret_access_key,
        ))),
    }
}
