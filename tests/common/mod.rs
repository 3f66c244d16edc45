#![allow(dead_code)]

use alumni_jobs_core::store::{KvStore, MemoryStore, Store};
use alumni_jobs_core::AppState;
use std::sync::Arc;

pub fn app_state() -> AppState {
    let (state, _) = app_state_with_kv();
    state
}

/// Also hands back the raw key-value handle so tests can plant or inspect
/// records underneath the typed layer.
pub fn app_state_with_kv() -> (AppState, Arc<dyn KvStore>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_test_writer()
        .try_init();

    let kv: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
    (AppState::new(Store::new(kv.clone())), kv)
}
