//! View error type.

use thiserror::Error;

/// Why a view operation did not complete.
#[derive(Debug, Error)]
pub enum ViewError {
    /// A create, update or delete is already in flight.
    #[error("another change is still being saved")]
    Busy,

    /// The gateway call failed, or the form failed its presence check.
    #[error(transparent)]
    Api(#[from] blog_core::Error),
}
