// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AppState,
            Dispatcher,
            ReadableApi,
            Route,
            clear_comments,
            clear_posts,
            fetch_comments,
            fetch_post,
            fetch_posts,
            set_active_category};

/// Brings the store in line with the page at `location`, and returns the route that
/// `location` resolved to.
///
/// - Root and category pages: set the active category, drop any loaded comments, and
///   fetch the posts (all of them, or only the category's).
/// - Post page: fetch the comments unless they are already loaded for this post, and
///   fetch the post itself if it is not in the store. Both run concurrently.
/// - Anything else: clear posts and comments.
pub async fn sync_route_to_state<D, Api>(dispatcher: &D, api: &Api, location: &str) -> Route
where
    D: Dispatcher + ?Sized,
    Api: ReadableApi + ?Sized,
{
    let route = Route::parse(location);

    // % is Display, ? is Debug.
    tracing::debug!(message = "sync_route_to_state", location = %location, route = ?route);

    match &route {
        Route::Root => {
            dispatcher.dispatch(set_active_category(None)).await;
            dispatcher.dispatch(clear_comments()).await;
            fetch_posts(dispatcher, api, None).await;
        }
        Route::Category { category } => {
            dispatcher
                .dispatch(set_active_category(Some(category.clone())))
                .await;
            dispatcher.dispatch(clear_comments()).await;
            fetch_posts(dispatcher, api, Some(category.as_str())).await;
        }
        Route::Post { category, post_id } => {
            dispatcher
                .dispatch(set_active_category(Some(category.clone())))
                .await;

            let state = dispatcher.get_state().await;
            let comments_fut = async {
                if should_fetch_comments(&state, post_id) {
                    fetch_comments(dispatcher, api, post_id).await;
                }
            };
            let post_fut = async {
                if !state.posts.by_id.contains_key(post_id.as_str()) {
                    fetch_post(dispatcher, api, post_id).await;
                }
            };
            tokio::join!(comments_fut, post_fut);
        }
        Route::NotFound => {
            dispatcher.dispatch(clear_posts()).await;
            dispatcher.dispatch(clear_comments()).await;
        }
    }

    route
}

/// Comments need loading when none are loaded, when the loaded ones belong to a
/// different post, or when a load is in flight (it may be for another post).
#[must_use]
pub fn should_fetch_comments(state: &AppState, post_id: &str) -> bool {
    let comments = &state.comments;
    comments.by_id.is_empty()
        || comments.parent_post_id.as_deref() != Some(post_id)
        || comments.loading.is_loading
}
