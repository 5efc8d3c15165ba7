// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use crate::{Action,
            Comment,
            CommentsAction,
            CommentsState,
            DEBUG_REDUCER_MOD,
            LoadingState,
            OperationId,
            PostId,
            PostsAction};

use super::posts_reducer::set_loading_allowed;

/// Handles every [CommentsAction]. Removing a post also removes all of its comments.
#[must_use]
pub fn reduce_comments(state: &Arc<CommentsState>, action: &Action) -> Arc<CommentsState> {
    match action {
        Action::Comments(comments_action) => reduce_comments_action(state, comments_action),
        Action::Posts(PostsAction::Remove { id }) => cascade_remove(state, id),
        _ => Arc::clone(state),
    }
}

fn reduce_comments_action(
    state: &Arc<CommentsState>,
    action: &CommentsAction,
) -> Arc<CommentsState> {
    match action {
        CommentsAction::Set {
            comments,
            operation_id,
            parent_post_id,
        } => set(state, comments, operation_id.as_ref(), parent_post_id.as_ref()),
        CommentsAction::Add(comment) => {
            let mut next = CommentsState::clone(state);
            Arc::make_mut(&mut next.by_id).insert(
                comment.id.clone(),
                Comment {
                    processing: false,
                    ..comment.clone()
                },
            );
            Arc::new(next)
        }
        CommentsAction::Remove { id, .. } => {
            if !state.by_id.contains_key(id) {
                return Arc::clone(state);
            }
            let mut next = CommentsState::clone(state);
            Arc::make_mut(&mut next.by_id).remove(id);
            Arc::new(next)
        }
        CommentsAction::Update { id, data } => {
            with_comment_mut(state, id, |comment| comment.apply_edit(data))
        }
        CommentsAction::Vote { id, vote } => with_comment_mut(state, id, |comment| {
            comment.vote_score = comment.vote_score.saturating_add(*vote);
        }),
        CommentsAction::SetLoadingState(incoming) => {
            if state.loading == *incoming
                || !set_loading_allowed(&state.loading, incoming)
            {
                return Arc::clone(state);
            }
            Arc::new(CommentsState {
                loading: incoming.clone(),
                ..CommentsState::clone(state)
            })
        }
        CommentsAction::SetProcessingState { id, processing } => {
            match state.by_id.get(id) {
                Some(comment) if comment.processing != *processing => {
                    with_comment_mut(state, id, |comment| comment.processing = *processing)
                }
                _ => Arc::clone(state),
            }
        }
    }
}

/// Same fencing as the posts slice. The parent post id travels with the comments, so
/// comments of a post that is no longer shown can't be mistaken for the current ones.
fn set(
    state: &Arc<CommentsState>,
    comments: &[Comment],
    maybe_operation_id: Option<&OperationId>,
    parent_post_id: Option<&PostId>,
) -> Arc<CommentsState> {
    let loading = match maybe_operation_id {
        Some(operation_id) if !state.loading.is_current(operation_id) => {
            // % is Display, ? is Debug.
            DEBUG_REDUCER_MOD.then(|| {
                tracing::debug!(
                    message = "comments -> stale set rejected",
                    operation_id = %operation_id,
                    current = ?state.loading.id
                );
            });
            return Arc::clone(state);
        }
        Some(_) => state.loading.clone(),
        None => LoadingState::default(),
    };

    let by_id = comments
        .iter()
        .map(|comment| {
            let comment = Comment {
                processing: false,
                ..comment.clone()
            };
            (comment.id.clone(), comment)
        })
        .collect();

    Arc::new(CommentsState {
        by_id: Arc::new(by_id),
        loading,
        parent_post_id: parent_post_id.cloned(),
    })
}

fn cascade_remove(state: &Arc<CommentsState>, post_id: &str) -> Arc<CommentsState> {
    if !state.by_id.values().any(|it| it.parent_id == post_id) {
        return Arc::clone(state);
    }
    let mut next = CommentsState::clone(state);
    Arc::make_mut(&mut next.by_id).retain(|_, it| it.parent_id != post_id);
    Arc::new(next)
}

fn with_comment_mut(
    state: &Arc<CommentsState>,
    id: &str,
    mutate: impl FnOnce(&mut Comment),
) -> Arc<CommentsState> {
    if !state.by_id.contains_key(id) {
        return Arc::clone(state);
    }
    let mut next = CommentsState::clone(state);
    if let Some(comment) = Arc::make_mut(&mut next.by_id).get_mut(id) {
        mutate(comment);
    }
    Arc::new(next)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{CommentEdit, Post, add_comment, clear_comments, remove_post, set_comments,
                set_comments_loading_state, update_comment, vote_comment};

    fn comment(id: &str, parent_id: &str) -> Comment {
        Comment {
            id: id.into(),
            parent_id: parent_id.into(),
            body: format!("body {id}"),
            author: "thingtwo".into(),
            ..Default::default()
        }
    }

    fn post(id: &str) -> Post {
        Post {
            id: id.into(),
            ..Default::default()
        }
    }

    fn loaded(comments: Vec<Comment>, parent: &str) -> Arc<CommentsState> {
        let state = Arc::new(CommentsState::default());
        let state = reduce_comments(
            &state,
            &set_comments_loading_state(LoadingState::started("X".into())),
        );
        reduce_comments(
            &state,
            &set_comments(comments, Some("X".into()), Some(parent.into())),
        )
    }

    #[test]
    fn test_removing_a_post_cascades_to_its_comments() {
        let state = Arc::new(CommentsState::default());
        let state = reduce_comments(&state, &add_comment(comment("c1", "p1")));
        let state = reduce_comments(&state, &add_comment(comment("c2", "p2")));

        let state = reduce_comments(&state, &remove_post(&post("p1")));
        assert_eq!(state.by_id.keys().collect::<Vec<_>>(), vec!["c2"]);

        let same = reduce_comments(&state, &remove_post(&post("p1")));
        assert!(Arc::ptr_eq(&state, &same));
    }

    #[test]
    fn test_set_records_parent_post() {
        let state = loaded(vec![comment("c1", "p1")], "p1");
        assert_eq!(state.parent_post_id.as_deref(), Some("p1"));
        assert_eq!(state.by_id.len(), 1);
    }

    #[test]
    fn test_stale_set_is_rejected() {
        let state = loaded(vec![comment("c1", "p1")], "p1");
        let state = reduce_comments(
            &state,
            &set_comments_loading_state(LoadingState::started("Y".into())),
        );
        let stale = reduce_comments(
            &state,
            &set_comments(vec![comment("c9", "p9")], Some("X".into()), Some("p9".into())),
        );
        assert!(Arc::ptr_eq(&state, &stale));
    }

    #[test]
    fn test_clear_forgets_parent_and_loading() {
        let state = loaded(vec![comment("c1", "p1")], "p1");
        let state = reduce_comments(&state, &clear_comments());
        assert!(state.by_id.is_empty());
        assert_eq!(state.parent_post_id, None);
        assert_eq!(state.loading, LoadingState::default());
    }

    #[test]
    fn test_update_and_vote() {
        let state = loaded(vec![comment("c1", "p1")], "p1");
        let edit = CommentEdit {
            body: Some("edited".into()),
        };
        let state = reduce_comments(&state, &update_comment(&comment("c1", "p1"), edit));
        let state = reduce_comments(&state, &vote_comment(&comment("c1", "p1"), -10));
        let it = &state.by_id["c1"];
        assert_eq!(it.body, "edited");
        assert_eq!(it.author, "thingtwo");
        assert_eq!(it.vote_score, -1);
    }

    #[test]
    fn test_missing_comment_leaves_state_alone() {
        let state = loaded(vec![comment("c1", "p1")], "p1");
        let next = reduce_comments(&state, &vote_comment(&comment("nope", "p1"), 1));
        assert!(Arc::ptr_eq(&state, &next));
    }
}
