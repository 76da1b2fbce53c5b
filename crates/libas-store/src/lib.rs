//! # libas-store: The Stateful Cart/Wishlist Store
//!
//! Maintains the authoritative in-session cart and wishlist collections,
//! mirrors them to durable storage, and notifies the user of outcomes.
//!
//! ## Component Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        libas-store                                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                        CartStore                                │   │
//! │  │   cart • wishlist • currency     (in-memory, authoritative)     │   │
//! │  └───────┬──────────────────┬───────────────────────┬──────────────┘   │
//! │          │                  │                       │                   │
//! │          ▼                  ▼                       ▼                   │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────────────────┐    │
//! │  │StorageBackend│   │  ToastSink   │   │     WishlistMirror       │    │
//! │  │ FileStorage  │   │  LogSink     │   │  NoopMirror (signed out) │    │
//! │  │MemoryStorage │   │  QueueSink   │   │  remote impls (account)  │    │
//! │  └──────────────┘   └──────────────┘   └──────────────────────────┘    │
//! │                                                                         │
//! │  All three collaborators are fire-and-forget from the store's view:    │
//! │  their failures are logged/toasted, never rolled back into memory.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Visibility Contract
//! Every mutating operation commits synchronously; the next read through the
//! same store (or [`StoreState`] handle) observes it. There is no push
//! subscription mechanism; consumers re-query after invoking an operation.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod mirror;
pub mod notify;
pub mod state;
pub mod storage;
pub mod store;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use mirror::{MirrorError, NoopMirror, WishlistMirror};
pub use notify::{LogSink, QueueSink, Severity, Toast, ToastSink};
pub use state::StoreState;
pub use storage::{FileStorage, MemoryStorage, StorageBackend, StorageError};
pub use store::CartStore;
