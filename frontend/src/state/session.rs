use std::rc::Rc;

use leptos::*;

use crate::utils::storage::{self, KeyValueStore, MemoryStorage, StorageError};

pub const TOKEN_KEY: &str = "token";

/// The single persisted credential. Expiry is left to the API rejecting stale tokens.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    pub fn browser() -> Self {
        Self::new(storage::default_store())
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::default()))
    }

    pub fn get(&self) -> Option<String> {
        self.storage
            .get(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn set(&self, token: &str) -> Result<(), StorageError> {
        self.storage.set(TOKEN_KEY, token)
    }

    pub fn clear(&self) {
        if let Err(err) = self.storage.remove(TOKEN_KEY) {
            log::warn!("Failed to clear session token: {}", err);
        }
    }

    pub fn is_present(&self) -> bool {
        self.get().is_some()
    }
}

/// Session handle provided at the app root. `revision` changes whenever the
/// credential is written so reactive readers re-check the store.
#[derive(Clone)]
pub struct SessionContext {
    pub store: SessionStore,
    revision: RwSignal<u64>,
}

impl SessionContext {
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            revision: create_rw_signal(0),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        let _ = self.revision.get();
        self.store.is_present()
    }

    pub fn sign_in(&self, token: &str) -> Result<(), StorageError> {
        self.store.set(token)?;
        self.bump();
        Ok(())
    }

    pub fn sign_out(&self) {
        self.store.clear();
        self.bump();
    }

    fn bump(&self) {
        self.revision.update(|rev| *rev = rev.wrapping_add(1));
    }
}

pub fn provide_session(store: SessionStore) -> SessionContext {
    let ctx = SessionContext::new(store);
    provide_context(ctx.clone());
    ctx
}

pub fn use_session() -> SessionContext {
    match use_context::<SessionContext>() {
        Some(ctx) => ctx,
        None => {
            log::warn!("SessionContext missing; using a detached in-memory session");
            provide_session(SessionStore::in_memory())
        }
    }
}
