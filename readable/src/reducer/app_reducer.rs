// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use async_trait::async_trait;
use readable_redux::AsyncReducer;

use crate::{Action, AppState, reduce_categories, reduce_comments, reduce_posts};

/// Runs every slice reducer for one action. Slices that the action does not touch are
/// carried over as the same [std::sync::Arc].
#[must_use]
pub fn reduce_app(state: &AppState, action: &Action) -> AppState {
    AppState {
        posts: reduce_posts(&state.posts, action),
        comments: reduce_comments(&state.comments, action),
        categories: reduce_categories(&state.categories, action),
    }
}

/// Plugs [reduce_app] into the store.
#[derive(Debug, Default)]
pub struct AppReducer;

#[async_trait]
impl AsyncReducer<AppState, Action> for AppReducer {
    async fn run(&self, action: &Action, state: &AppState) -> AppState {
        reduce_app(state, action)
    }
}
