// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use readable_redux::{AsyncMiddleware, AsyncReducer, AsyncSubscriber, SharedStore, Store};

use crate::{Action, ActionLoggerMiddleware, AppReducer, AppState, StateLoggerSubscriber};

/// A store with the app reducer, the action logger, and the state logger.
pub async fn create_store() -> SharedStore<AppState, Action> {
    let mut store = Store::<AppState, Action>::default();
    store
        .add_reducer(AppReducer::new())
        .await
        .add_middleware(ActionLoggerMiddleware::new())
        .await
        .add_subscriber(StateLoggerSubscriber::new())
        .await;
    store.into_shared()
}
