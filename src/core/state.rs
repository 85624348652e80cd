// Application state (AppState)

use crate::core::config::Config;
use crate::core::error::StoreError;
use crate::models::{
    badge::{sample_badges, Badge},
    inventory::{sample_inventory, InventoryItem},
    wanted::{sample_wanted, WantedPerson},
};
use crate::security::{login::MockLogin, session::SessionContext};
use crate::stores::{
    collection::Collection,
    local_store::{LocalStore, BADGES_KEY, INVENTORY_KEY, WANTED_KEY},
};
use crate::utils::time::IdGenerator;
use std::sync::Arc;

/// Shared application state
///
/// Every collection and the session context write through to the same
/// local store.
pub struct AppState {
    /// Backing key/value store
    pub store: Arc<LocalStore>,

    /// Current session and access role
    pub sessions: SessionContext,

    /// Mock identity check used by the login endpoint
    pub login: MockLogin,

    pub badges: Collection<Badge>,
    pub inventory: Collection<InventoryItem>,
    pub wanted: Collection<WantedPerson>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, store: LocalStore) -> Result<Self, StoreError> {
        let config = Arc::new(config);
        let store = Arc::new(store);
        let ids = Arc::new(IdGenerator::new());

        let seeded = config.seed.sample_data;

        let badges = Collection::load(
            Arc::clone(&store),
            Arc::clone(&ids),
            BADGES_KEY,
            seed_if(seeded, sample_badges),
        )?;
        let inventory = Collection::load(
            Arc::clone(&store),
            Arc::clone(&ids),
            INVENTORY_KEY,
            seed_if(seeded, sample_inventory),
        )?;
        let wanted = Collection::load(
            Arc::clone(&store),
            Arc::clone(&ids),
            WANTED_KEY,
            seed_if(seeded, sample_wanted),
        )?;

        Ok(Self {
            sessions: SessionContext::restore(Arc::clone(&store))?,
            login: MockLogin::new(&config.auth),
            badges,
            inventory,
            wanted,
            store,
            config,
        })
    }
}

// Sample records only fill a key that has never been written
fn seed_if<T>(seeded: bool, records: fn() -> Vec<T>) -> Vec<T> {
    if seeded {
        records()
    } else {
        Vec::new()
    }
}
