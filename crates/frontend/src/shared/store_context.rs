//! Record store shared through Leptos context.

use contracts::shared::store::RecordStore;
use leptos::prelude::*;

/// Loads the embedded fixtures and provides them to the component tree.
/// A broken fixture is logged and the app continues with empty collections.
pub fn provide_record_store() {
    let store = match RecordStore::load_embedded() {
        Ok(store) => {
            log::info!(
                "record store loaded: {} candidates, {} clients, {} positions, {} users",
                store.candidates.len(),
                store.clients.len(),
                store.positions.len(),
                store.users.len()
            );
            store
        }
        Err(e) => {
            log::error!("failed to load fixtures: {}", e);
            RecordStore::default()
        }
    };
    provide_context(StoredValue::new(store));
}

pub fn use_record_store() -> StoredValue<RecordStore> {
    use_context::<StoredValue<RecordStore>>().expect("RecordStore not provided")
}
