//! Shared test doubles for the feed API tests.

#![allow(dead_code)]

pub mod memory_store;
pub mod scripted_completion;

pub use memory_store::InMemoryStore;
pub use scripted_completion::ScriptedCompletion;

use actix_web::web;
use feed_service::AppState;
use std::sync::Arc;

/// Application state over one shared in-memory store and a scripted provider.
pub fn test_state(
    store: &Arc<InMemoryStore>,
    completion: &Arc<ScriptedCompletion>,
) -> web::Data<AppState> {
    web::Data::new(AppState::new(
        store.clone(),
        store.clone(),
        store.clone(),
        completion.clone(),
    ))
}
