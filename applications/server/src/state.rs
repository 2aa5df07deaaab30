/// Shared application state
use crate::services::{AccountService, NoteService, TokenService};
use quill_core::{IdentityStore, NoteStore};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountService>,
    pub notes: Arc<NoteService>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(
        accounts: Arc<AccountService>,
        notes: Arc<NoteService>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            accounts,
            notes,
            tokens,
        }
    }

    /// Wire all services over one storage backend
    pub fn from_storage<S>(storage: Arc<S>, tokens: Arc<TokenService>, bcrypt_cost: u32) -> Self
    where
        S: IdentityStore + NoteStore + 'static,
    {
        let identity: Arc<dyn IdentityStore> = storage.clone();
        let notes: Arc<dyn NoteStore> = storage;

        Self::new(
            Arc::new(AccountService::new(identity, Arc::clone(&tokens), bcrypt_cost)),
            Arc::new(NoteService::new(notes)),
            tokens,
        )
    }
}
