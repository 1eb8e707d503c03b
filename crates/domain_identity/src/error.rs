//! Identity domain errors

use thiserror::Error;

use identity_kernel::KernelError;
use infra_wilayah::WilayahError;

/// Errors that can occur in the identity domain.
///
/// Malformed input and region-data configuration failures are fatal at
/// construction. A well-shaped number whose region codes resolve nowhere
/// is not an error anywhere in this crate; that case is reported through
/// `validate()`, the minimal parse outcome, or the itemized validation
/// messages.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Malformed input or nonsense date digits
    #[error(transparent)]
    Kernel(#[from] KernelError),

    /// The region data source could not be loaded
    #[error(transparent)]
    Wilayah(#[from] WilayahError),

    /// The parse payload could not be projected to JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
