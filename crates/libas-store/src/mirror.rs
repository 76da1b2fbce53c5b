//! # Remote Wishlist Mirror
//!
//! When a signed-in identity is available, wishlist toggles additionally
//! update a remote per-user record. The store calls through this narrow
//! interface without knowing how (or whether) identity is established.
//!
//! ## At-Least-The-Local-Copy-Is-Correct
//! Mirror calls are best-effort. A failure is reported to the user as a
//! generic toast and logged; the local in-memory and durable-storage state
//! is never rolled back, so remote and local wishlists may transiently
//! diverge.

use thiserror::Error;

/// Remote mirror failures.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// No signed-in user; implementations that require identity may report
    /// this instead of silently succeeding.
    #[error("no signed-in user")]
    NotSignedIn,

    /// The remote record update was rejected.
    #[error("remote update rejected: {0}")]
    Rejected(String),

    /// The remote backend could not be reached.
    #[error("remote unreachable: {0}")]
    Unreachable(String),
}

/// Per-user remote wishlist record updates.
pub trait WishlistMirror: Send {
    /// Adds a product id to the remote wishlist record.
    fn add_product(&self, product_id: &str) -> Result<(), MirrorError>;

    /// Removes a product id from the remote wishlist record.
    fn remove_product(&self, product_id: &str) -> Result<(), MirrorError>;
}

/// Mirror for the signed-out case: every update succeeds locally only.
#[derive(Debug, Default)]
pub struct NoopMirror;

impl WishlistMirror for NoopMirror {
    fn add_product(&self, _product_id: &str) -> Result<(), MirrorError> {
        Ok(())
    }

    fn remove_product(&self, _product_id: &str) -> Result<(), MirrorError> {
        Ok(())
    }
}
