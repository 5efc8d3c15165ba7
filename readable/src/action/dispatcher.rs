// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use async_trait::async_trait;
use readable_redux::SharedStore;

use crate::{Action, AppState};

/// The two things an async action creator needs from a store. The real store implements
/// this, and so does [`crate::test_fixtures::MockStore`], which records every action.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(&self, action: Action);

    async fn get_state(&self) -> AppState;
}

#[async_trait]
impl Dispatcher for SharedStore<AppState, Action> {
    /// Holds the write lock for the whole middleware, reducer, subscriber pass, so
    /// dispatches from concurrent tasks are applied one at a time.
    async fn dispatch(&self, action: Action) {
        self.write().await.dispatch_action(action).await;
    }

    async fn get_state(&self) -> AppState { self.read().await.get_state() }
}
