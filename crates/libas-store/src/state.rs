//! # Store State Handle
//!
//! Shared handle for embedding hosts (desktop shells, web view bridges).
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple host callbacks may access/modify the store
//! 2. Only one callback should modify the store at a time
//! 3. Host runtimes may dispatch callbacks from worker threads
//!
//! The store itself assumes a single logical writer (UI event handlers run
//! one at a time); the mutex enforces that assumption at the boundary.

use std::sync::{Arc, Mutex};

use crate::store::CartStore;

/// Shared, thread-safe handle to the session store.
///
/// ## Why Not RwLock?
/// Store operations are quick and most of them mutate state. An RwLock
/// would add complexity with minimal benefit.
#[derive(Clone)]
pub struct StoreState {
    store: Arc<Mutex<CartStore>>,
}

impl StoreState {
    /// Wraps a constructed store in a shareable handle.
    pub fn new(store: CartStore) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let badge = state.with_store(|s| s.item_count());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartStore) -> R,
    {
        let store = self.store.lock().expect("store mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_store_mut(|s| s.add_to_cart(&product, None, Some("M"), Some("Black")))?;
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartStore) -> R,
    {
        let mut store = self.store.lock().expect("store mutex poisoned");
        f(&mut store)
    }

    /// Session-end teardown: flushes the current state to storage.
    pub fn shutdown(&self) {
        self.with_store_mut(CartStore::flush);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use libas_core::types::{Category, Product};

    use crate::mirror::NoopMirror;
    use crate::notify::QueueSink;
    use crate::storage::{MemoryStorage, StorageBackend};

    fn scarf(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Scarf {}", id),
            description: "Wool scarf".to_string(),
            price_cents,
            original_price_cents: None,
            image: format!("/images/{}.jpg", id),
            category: Category::Women,
            subcategory: "accessories".to_string(),
            sizes: Vec::new(),
            colors: Vec::new(),
            in_stock: true,
            stock_quantity: 8,
            is_new: false,
            is_featured: false,
        }
    }

    fn state_over(storage: MemoryStorage) -> StoreState {
        StoreState::new(CartStore::open(
            Box::new(storage),
            Box::new(QueueSink::new()),
            Box::new(NoopMirror),
        ))
    }

    #[test]
    fn test_mutation_is_visible_to_next_read() {
        let state = state_over(MemoryStorage::new());
        let product = scarf("1", 450);

        state
            .with_store_mut(|s| s.add_to_cart(&product, Some(2), None, None))
            .unwrap();

        assert_eq!(state.with_store(|s| s.item_count()), 2);
    }

    #[test]
    fn test_clones_share_the_same_store() {
        let state = state_over(MemoryStorage::new());
        let clone = state.clone();

        state
            .with_store_mut(|s| s.add_to_cart(&scarf("1", 450), None, None, None))
            .unwrap();

        assert_eq!(clone.with_store(|s| s.item_count()), 1);
    }

    #[test]
    fn test_shutdown_flushes_to_storage() {
        let storage = MemoryStorage::new();
        let state = state_over(storage.clone());

        state
            .with_store_mut(|s| s.add_to_cart(&scarf("1", 450), None, None, None))
            .unwrap();
        state.shutdown();

        assert!(storage.get("cart").unwrap().is_some());
    }
}
