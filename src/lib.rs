pub mod config;
pub mod dto;
pub mod error;
pub mod filter;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

use crate::config::Config;
use crate::error::Result;
use crate::services::{
    account_service::AccountService, job_service::JobService, session_service::SessionService,
};
use crate::store::{FileStore, Store};
use std::sync::Arc;

/// Wires the store and the three core services. The presentation layer holds
/// one of these and calls through it.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub account_service: AccountService,
    pub session_service: SessionService,
    pub job_service: JobService,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        let account_service = AccountService::new(store.clone());
        let session_service = SessionService::new(store.clone());
        let job_service = JobService::new(store.clone());

        Self {
            store,
            account_service,
            session_service,
            job_service,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let file_store = FileStore::new(&config.storage_dir)?;
        Ok(Self::new(Store::new(Arc::new(file_store))))
    }
}
