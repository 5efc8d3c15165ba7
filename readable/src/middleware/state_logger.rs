// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use async_trait::async_trait;
use readable_redux::AsyncSubscriber;

use crate::AppState;

/// Logs a short summary each time the state changes.
#[derive(Debug, Default)]
pub struct StateLoggerSubscriber;

#[async_trait]
impl AsyncSubscriber<AppState> for StateLoggerSubscriber {
    async fn run(&self, state: AppState) {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "state changed",
            state = %state,
            posts_loading = ?state.posts.loading,
            comments_loading = ?state.comments.loading
        );
    }
}
