//! Utility modules.

/// Date/time serialization helpers shared by providers.
pub mod datetime;

/// Domain name comparison.
pub mod domain;

/// Log sanitization utilities to prevent sensitive data exposure.
#[cfg(feature = "route53")]
pub mod log_sanitizer;
