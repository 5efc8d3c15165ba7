// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use async_trait::async_trait;
use readable_redux::AsyncMiddleware;

use crate::{Action, AppState};

/// Logs every action before it reaches the reducers. Never produces an action of its own.
#[derive(Debug, Default)]
pub struct ActionLoggerMiddleware;

#[async_trait]
impl AsyncMiddleware<AppState, Action> for ActionLoggerMiddleware {
    async fn run(&self, action: Action, state: AppState) -> Option<Action> {
        // % is Display, ? is Debug.
        tracing::debug!(message = "action", action = %action, state = %state);
        None
    }
}
