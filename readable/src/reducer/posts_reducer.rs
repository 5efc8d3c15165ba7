// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use crate::{Action,
            CommentsAction,
            DEBUG_REDUCER_MOD,
            LoadingState,
            OperationId,
            Post,
            PostsAction,
            PostsState};

/// Handles every [PostsAction], and also the comment adds and removes, which move the
/// `comment_count` of the parent post.
#[must_use]
pub fn reduce_posts(state: &Arc<PostsState>, action: &Action) -> Arc<PostsState> {
    match action {
        Action::Posts(posts_action) => reduce_posts_action(state, posts_action),
        Action::Comments(CommentsAction::Add(comment)) => {
            with_post_mut(state, &comment.parent_id, |post| {
                post.comment_count = post.comment_count.saturating_add(1);
            })
        }
        Action::Comments(CommentsAction::Remove { parent_id, .. }) => {
            with_post_mut(state, parent_id, |post| {
                post.comment_count = post.comment_count.saturating_sub(1);
            })
        }
        _ => Arc::clone(state),
    }
}

fn reduce_posts_action(state: &Arc<PostsState>, action: &PostsAction) -> Arc<PostsState> {
    match action {
        PostsAction::Set {
            posts,
            operation_id,
        } => set(state, posts, operation_id.as_ref()),
        PostsAction::Add(post) => {
            let mut next = PostsState::clone(state);
            Arc::make_mut(&mut next.by_id).insert(
                post.id.clone(),
                Post {
                    processing: false,
                    ..post.clone()
                },
            );
            Arc::new(next)
        }
        PostsAction::Remove { id } => {
            if !state.by_id.contains_key(id) {
                return Arc::clone(state);
            }
            let mut next = PostsState::clone(state);
            Arc::make_mut(&mut next.by_id).remove(id);
            Arc::new(next)
        }
        PostsAction::Update { id, data } => {
            with_post_mut(state, id, |post| post.apply_edit(data))
        }
        PostsAction::Vote { id, vote } => with_post_mut(state, id, |post| {
            post.vote_score = post.vote_score.saturating_add(*vote);
        }),
        PostsAction::SetLoadingState(incoming) => set_loading(state, incoming),
        PostsAction::SetProcessingState { id, processing } => {
            match state.by_id.get(id) {
                Some(post) if post.processing != *processing => {
                    with_post_mut(state, id, |post| post.processing = *processing)
                }
                _ => Arc::clone(state),
            }
        }
        PostsAction::SetSortOption(sort_option) => {
            if state.sort_option == *sort_option {
                return Arc::clone(state);
            }
            Arc::new(PostsState {
                sort_option: *sort_option,
                ..PostsState::clone(state)
            })
        }
    }
}

/// A fetch completion is only applied if it belongs to the fetch that owns the slice. A
/// set without an operation id is a clear. It always applies, and it also resets the
/// loading state so that whatever fetch is still in flight can no longer land.
fn set(
    state: &Arc<PostsState>,
    posts: &[Post],
    maybe_operation_id: Option<&OperationId>,
) -> Arc<PostsState> {
    let loading = match maybe_operation_id {
        Some(operation_id) if !state.loading.is_current(operation_id) => {
            // % is Display, ? is Debug.
            DEBUG_REDUCER_MOD.then(|| {
                tracing::debug!(
                    message = "posts -> stale set rejected",
                    operation_id = %operation_id,
                    current = ?state.loading.id
                );
            });
            return Arc::clone(state);
        }
        Some(_) => state.loading.clone(),
        None => LoadingState::default(),
    };

    let by_id = posts
        .iter()
        .map(|post| {
            let post = Post {
                processing: false,
                ..post.clone()
            };
            (post.id.clone(), post)
        })
        .collect();

    Arc::new(PostsState {
        by_id: Arc::new(by_id),
        loading,
        sort_option: state.sort_option,
    })
}

pub(crate) fn set_loading_allowed(current: &LoadingState, incoming: &LoadingState) -> bool {
    if current.accepts(incoming) {
        return true;
    }
    // % is Display, ? is Debug.
    DEBUG_REDUCER_MOD.then(|| {
        tracing::debug!(
            message = "stale loading state rejected",
            incoming = ?incoming.id,
            current = ?current.id
        );
    });
    false
}

fn set_loading(state: &Arc<PostsState>, incoming: &LoadingState) -> Arc<PostsState> {
    if state.loading == *incoming || !set_loading_allowed(&state.loading, incoming) {
        return Arc::clone(state);
    }
    Arc::new(PostsState {
        loading: incoming.clone(),
        ..PostsState::clone(state)
    })
}

/// Runs `mutate` on the post with `id`. When there is no such post, the given state is
/// returned untouched.
fn with_post_mut(
    state: &Arc<PostsState>,
    id: &str,
    mutate: impl FnOnce(&mut Post),
) -> Arc<PostsState> {
    if !state.by_id.contains_key(id) {
        return Arc::clone(state);
    }
    let mut next = PostsState::clone(state);
    if let Some(post) = Arc::make_mut(&mut next.by_id).get_mut(id) {
        mutate(post);
    }
    Arc::new(next)
}
