//! # axfr-import-provider
//!
//! Hosted-zone abstraction used to load an AXFR dump into a managed DNS service.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Auth Method |
//! |----------|-------------|-------------|
//! | [Amazon Route 53](https://aws.amazon.com/route53/) | `route53` | AWS Signature V4 |
//!
//! ## Feature Flags
//!
//! - **`all-providers`** *(default)*: Enable all providers listed above.
//! - **`route53`**: Enable the Amazon Route 53 provider.
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use axfr_import_provider::{
//!     Change, ChangeAction, ChangeBatch, HostedZoneProvider, ResourceRecordSet, Route53Provider,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = Route53Provider::new("AKIA...".to_string(), "secret".to_string());
//!
//!     let zone = match provider.get_hosted_zone_by_name("example.com").await? {
//!         Some(zone) => zone,
//!         None => provider.create_hosted_zone("example.com").await?,
//!     };
//!
//!     let batch = ChangeBatch {
//!         comment: None,
//!         changes: vec![Change {
//!             action: ChangeAction::Create,
//!             record_set: ResourceRecordSet {
//!                 name: "www.example.com.".to_string(),
//!                 record_type: "A".to_string(),
//!                 ttl: 300,
//!                 records: vec!["192.0.2.1".to_string()],
//!             },
//!         }],
//!     };
//!
//!     let info = provider.change_record_sets(&zone.id, &batch).await?;
//!     println!("{} {}", info.id, info.status);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! Transient errors (`NetworkError`, `Timeout`, `RateLimited`) are retried only
//! when the provider is built with `max_retries > 0`.

mod error;
mod factory;
#[cfg(feature = "route53")]
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::HostedZoneProvider;

// Re-export types
pub use types::{
    Change, ChangeAction, ChangeBatch, ChangeInfo, ChangeStatus, HostedZone, ProviderCredentials,
    ResourceRecordSet,
};

// Re-export utils module
pub use utils::datetime;
pub use utils::domain::same_domain;

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "route53")]
pub use providers::{Route53Provider, Route53ProviderBuilder};
