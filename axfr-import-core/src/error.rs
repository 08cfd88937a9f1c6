//! Unified error type definition

use thiserror::Error;

// Re-export library error type
pub use axfr_import_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Listing, looking up or creating the hosted zone failed
    #[error("Failed to resolve hosted zone {domain}: {source}")]
    ZoneResolution {
        domain: String,
        #[source]
        source: ProviderError,
    },

    /// Resolution finished without an error but yielded no zone
    #[error("Hosted zone not found: {0}")]
    ZoneNotFound(String),

    /// The change batch was rejected or could not be sent
    #[error("Change submission failed: {0}")]
    Submission(#[source] ProviderError),

    /// Querying the change status failed
    #[error("Polling change {change_id} failed: {source}")]
    Poll {
        change_id: String,
        #[source]
        source: ProviderError,
    },

    /// The change did not reach INSYNC before the deadline
    #[error("Timed out waiting for change {0} to reach INSYNC")]
    PollTimeout(String),

    /// Waiting was interrupted
    #[error("Cancelled while waiting for change {0}")]
    PollCancelled(String),

    /// Reading the zone transfer input failed
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ZoneNotFound(_) | Self::PollCancelled(_) => true,
            Self::ZoneResolution { source, .. }
            | Self::Submission(source)
            | Self::Poll { source, .. }
            | Self::Provider(source) => source.is_expected(),
            Self::PollTimeout(_) | Self::Io(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
