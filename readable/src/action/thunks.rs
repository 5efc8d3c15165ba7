// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Async action creators. Each one runs a fixed dispatch protocol around a single call
//! to the server.
//!
//! None of them return an error. A failed call turns into a state transition instead:
//! - Bulk fetches end with an empty collection and `has_errored` set.
//! - Mutations (vote, edit, delete) only drop the `processing` flag again.
//! - Creates dispatch nothing and return [None].
//!
//! The failure itself is logged with [tracing::warn!].

use crate::{Comment,
            CommentEdit,
            DEBUG_THUNK_MOD,
            Dispatcher,
            LoadingState,
            NewComment,
            NewPost,
            OperationId,
            Post,
            PostEdit,
            ReadableApi,
            Vote,
            add_comment,
            add_post,
            remove_comment,
            remove_post,
            set_categories,
            set_categories_load_error,
            set_categories_loading_state,
            set_comment_processing_state,
            set_comments,
            set_comments_loading_state,
            set_post_processing_state,
            set_posts,
            set_posts_loading_state,
            update_comment,
            update_post,
            vote_comment,
            vote_post};

/// Loads all posts, or only the ones in `maybe_category`, into the posts slice.
pub async fn fetch_posts<D, Api>(dispatcher: &D, api: &Api, maybe_category: Option<&str>)
where
    D: Dispatcher + ?Sized,
    Api: ReadableApi + ?Sized,
{
    let operation_id = OperationId::new_random();

    // % is Display, ? is Debug.
    DEBUG_THUNK_MOD.then(|| {
        tracing::debug!(
            message = "fetch_posts -> start",
            operation_id = %operation_id,
            category = ?maybe_category
        );
    });

    dispatcher
        .dispatch(set_posts_loading_state(LoadingState::started(
            operation_id.clone(),
        )))
        .await;

    let (posts, has_errored) = match api.get_posts(maybe_category).await {
        Ok(posts) => (posts, false),
        Err(report) => {
            tracing::warn!(
                message = "fetch_posts -> failed",
                operation_id = %operation_id,
                error = ?report
            );
            (vec![], true)
        }
    };

    dispatcher
        .dispatch(set_posts(posts, Some(operation_id.clone())))
        .await;
    dispatcher
        .dispatch(set_posts_loading_state(LoadingState::finished(
            operation_id,
            has_errored,
        )))
        .await;
}

/// Loads the comments of one post into the comments slice, and remembers which post
/// they belong to. On failure the slice is emptied and not tied to any post.
pub async fn fetch_comments<D, Api>(dispatcher: &D, api: &Api, post_id: &str)
where
    D: Dispatcher + ?Sized,
    Api: ReadableApi + ?Sized,
{
    let operation_id = OperationId::new_random();

    // % is Display, ? is Debug.
    DEBUG_THUNK_MOD.then(|| {
        tracing::debug!(
            message = "fetch_comments -> start",
            operation_id = %operation_id,
            post_id = %post_id
        );
    });

    dispatcher
        .dispatch(set_comments_loading_state(LoadingState::started(
            operation_id.clone(),
        )))
        .await;

    let (comments, parent_post_id, has_errored) =
        match api.get_post_comments(post_id).await {
            Ok(comments) => (comments, Some(post_id.to_owned()), false),
            Err(report) => {
                tracing::warn!(
                    message = "fetch_comments -> failed",
                    operation_id = %operation_id,
                    error = ?report
                );
                (vec![], None, true)
            }
        };

    dispatcher
        .dispatch(set_comments(
            comments,
            Some(operation_id.clone()),
            parent_post_id,
        ))
        .await;
    dispatcher
        .dispatch(set_comments_loading_state(LoadingState::finished(
            operation_id,
            has_errored,
        )))
        .await;
}

/// Categories are loaded once and are not fenced.
pub async fn fetch_categories<D, Api>(dispatcher: &D, api: &Api)
where
    D: Dispatcher + ?Sized,
    Api: ReadableApi + ?Sized,
{
    dispatcher.dispatch(set_categories_loading_state(true)).await;

    match api.get_categories().await {
        Ok(categories) => {
            dispatcher.dispatch(set_categories(categories)).await;
            dispatcher.dispatch(set_categories_load_error(false)).await;
        }
        Err(report) => {
            tracing::warn!(message = "fetch_categories -> failed", error = ?report);
            dispatcher.dispatch(set_categories_load_error(true)).await;
        }
    }

    dispatcher.dispatch(set_categories_loading_state(false)).await;
}

/// Loads a single post (eg: when a post page is opened directly) and adds it to the
/// posts slice. Nothing is dispatched if the call fails.
pub async fn fetch_post<D, Api>(dispatcher: &D, api: &Api, post_id: &str)
where
    D: Dispatcher + ?Sized,
    Api: ReadableApi + ?Sized,
{
    match api.get_post(post_id).await {
        Ok(post) => dispatcher.dispatch(add_post(post)).await,
        Err(report) => {
            tracing::warn!(
                message = "fetch_post -> failed",
                post_id = %post_id,
                error = ?report
            );
        }
    }
}

pub async fn create_post<D, Api>(dispatcher: &D, api: &Api, data: NewPost) -> Option<Post>
where
    D: Dispatcher + ?Sized,
    Api: ReadableApi + ?Sized,
{
    match api.create_post(&data).await {
        Ok(post) => {
            dispatcher.dispatch(add_post(post.clone())).await;
            Some(post)
        }
        Err(report) => {
            tracing::warn!(message = "create_post -> failed", error = ?report);
            None
        }
    }
}

pub async fn create_comment<D, Api>(
    dispatcher: &D,
    api: &Api,
    post_id: &str,
    data: NewComment,
) -> Option<Comment>
where
    D: Dispatcher + ?Sized,
    Api: ReadableApi + ?Sized,
{
    match api.create_comment(post_id, &data).await {
        Ok(comment) => {
            dispatcher.dispatch(add_comment(comment.clone())).await;
            Some(comment)
        }
        Err(report) => {
            tracing::warn!(
                message = "create_comment -> failed",
                post_id = %post_id,
                error = ?report
            );
            None
        }
    }
}

pub async fn delete_post<D, Api>(dispatcher: &D, api: &Api, post: &Post)
where
    D: Dispatcher + ?Sized,
    Api: ReadableApi + ?Sized,
{
    dispatcher
        .dispatch(set_post_processing_state(post, true))
        .await;

    match api.delete_post(&post.id).await {
        Ok(()) => dispatcher.dispatch(remove_post(post)).await,
        Err(report) => {
            tracing::warn!(
                message = "delete_post -> failed",
                post_id = %post.id,
                error = ?report
            );
            dispatcher
                .dispatch(set_post_processing_state(post, false))
                .await;
        }
    }
}

pub async fn delete_comment<D, Api>(dispatcher: &D, api: &Api, comment: &Comment)
where
    D: Dispatcher + ?Sized,
    Api: ReadableApi + ?Sized,
{
    dispatcher
        .dispatch(set_comment_processing_state(comment, true))
        .await;

    match api.delete_comment(&comment.id).await {
        Ok(()) => dispatcher.dispatch(remove_comment(comment)).await,
        Err(report) => {
            tracing::warn!(
                message = "delete_comment -> failed",
                comment_id = %comment.id,
                error = ?report
            );
            dispatcher
                .dispatch(set_comment_processing_state(comment, false))
                .await;
        }
    }
}

/// A rejected edit is dropped. The store keeps the old values.
/// Returns whether the server accepted the edit.
pub async fn edit_post<D, Api>(
    dispatcher: &D,
    api: &Api,
    post: &Post,
    data: PostEdit,
) -> bool
where
    D: Dispatcher + ?Sized,
    Api: ReadableApi + ?Sized,
{
    dispatcher
        .dispatch(set_post_processing_state(post, true))
        .await;

    let accepted = match api.update_post(&post.id, &data).await {
        Ok(_) => {
            dispatcher.dispatch(update_post(post, data)).await;
            true
        }
        Err(report) => {
            tracing::warn!(
                message = "edit_post -> failed",
                post_id = %post.id,
                error = ?report
            );
            false
        }
    };

    dispatcher
        .dispatch(set_post_processing_state(post, false))
        .await;

    accepted
}

/// Returns whether the server accepted the edit.
pub async fn edit_comment<D, Api>(
    dispatcher: &D,
    api: &Api,
    comment: &Comment,
    data: CommentEdit,
) -> bool
where
    D: Dispatcher + ?Sized,
    Api: ReadableApi + ?Sized,
{
    dispatcher
        .dispatch(set_comment_processing_state(comment, true))
        .await;

    let accepted = match api.update_comment(&comment.id, &data).await {
        Ok(_) => {
            dispatcher.dispatch(update_comment(comment, data)).await;
            true
        }
        Err(report) => {
            tracing::warn!(
                message = "edit_comment -> failed",
                comment_id = %comment.id,
                error = ?report
            );
            false
        }
    };

    dispatcher
        .dispatch(set_comment_processing_state(comment, false))
        .await;

    accepted
}

/// `raw` is normalized to a single up or down vote before it is sent.
pub async fn vote_on_post<D, Api>(dispatcher: &D, api: &Api, post: &Post, raw: i64)
where
    D: Dispatcher + ?Sized,
    Api: ReadableApi + ?Sized,
{
    let vote = Vote::normalize(raw);

    dispatcher
        .dispatch(set_post_processing_state(post, true))
        .await;

    match api.vote_on_post(&post.id, vote).await {
        Ok(_) => dispatcher.dispatch(vote_post(post, vote.delta())).await,
        Err(report) => {
            tracing::warn!(
                message = "vote_on_post -> failed",
                post_id = %post.id,
                error = ?report
            );
        }
    }

    dispatcher
        .dispatch(set_post_processing_state(post, false))
        .await;
}

pub async fn vote_on_comment<D, Api>(dispatcher: &D, api: &Api, comment: &Comment, raw: i64)
where
    D: Dispatcher + ?Sized,
    Api: ReadableApi + ?Sized,
{
    let vote = Vote::normalize(raw);

    dispatcher
        .dispatch(set_comment_processing_state(comment, true))
        .await;

    match api.vote_on_comment(&comment.id, vote).await {
        Ok(_) => dispatcher.dispatch(vote_comment(comment, vote.delta())).await,
        Err(report) => {
            tracing::warn!(
                message = "vote_on_comment -> failed",
                comment_id = %comment.id,
                error = ?report
            );
        }
    }

    dispatcher
        .dispatch(set_comment_processing_state(comment, false))
        .await;
}
