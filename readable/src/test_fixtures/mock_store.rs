// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::{Action, AppState, Dispatcher, reduce_app};

/// Records every dispatched action, and also reduces it, so thunks that read the state
/// back see their own writes.
#[derive(Debug, Default)]
pub struct MockStore {
    state: Mutex<AppState>,
    actions: Mutex<Vec<Action>>,
}

impl MockStore {
    #[must_use]
    pub fn with_state(state: AppState) -> Self {
        Self {
            state: Mutex::new(state),
            actions: Mutex::default(),
        }
    }

    /// Everything dispatched so far, oldest first.
    #[must_use]
    pub fn actions(&self) -> Vec<Action> {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear_actions(&self) {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    #[must_use]
    pub fn state(&self) -> AppState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Dispatcher for MockStore {
    async fn dispatch(&self, action: Action) {
        {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            *state = reduce_app(&state, &action);
        }
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(action);
    }

    async fn get_state(&self) -> AppState { self.state() }
}
