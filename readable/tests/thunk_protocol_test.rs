// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The exact sequence of actions that each async action creator dispatches, for both
//! the success and the failure path.

use pretty_assertions::assert_eq;
use readable::{Action, CategoriesAction, CommentEdit, CommentsAction, Dispatcher,
               LoadingState, NewComment, NewPost, OperationId, PostEdit, PostsAction,
               add_comment, add_post, create_comment, create_post, delete_comment, delete_post, edit_comment, edit_post,
               fetch_categories, fetch_comments, fetch_post, fetch_posts, remove_comment,
               remove_post, set_categories, set_categories_load_error,
               set_categories_loading_state, set_comment_processing_state, set_comments,
               set_comments_loading_state, set_post_processing_state, set_posts,
               set_posts_loading_state,
               test_fixtures::{MockApi, MockStore, sample_categories, sample_comments,
                               sample_posts},
               update_comment, update_post, vote_comment, vote_on_comment, vote_on_post,
               vote_post};

/// The operation id is random, so it is read back from the loading start.
fn started_operation_id(action: &Action) -> OperationId {
    match action {
        Action::Posts(PostsAction::SetLoadingState(LoadingState {
            id: Some(id),
            is_loading: true,
            ..
        })) => id.clone(),
        Action::Comments(CommentsAction::SetLoadingState(LoadingState {
            id: Some(id),
            is_loading: true,
            ..
        })) => id.clone(),
        other => panic!("not a loading start: {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_posts_success() {
    let store = MockStore::default();
    let api = MockApi::with_sample_data();

    fetch_posts(&store, &api, Some("react")).await;

    let actions = store.actions();
    let op = started_operation_id(&actions[0]);
    let react_posts = sample_posts()
        .into_iter()
        .filter(|it| it.category == "react")
        .collect::<Vec<_>>();
    assert_eq!(
        actions,
        vec![
            set_posts_loading_state(LoadingState::started(op.clone())),
            set_posts(react_posts, Some(op.clone())),
            set_posts_loading_state(LoadingState::finished(op.clone(), false)),
        ]
    );
    assert_eq!(api.calls(), vec!["get_posts(react)"]);

    let state = store.state();
    assert_eq!(state.posts.by_id.len(), 1);
    assert_eq!(state.posts.loading, LoadingState::finished(op, false));
}

#[tokio::test]
async fn test_fetch_posts_failure() {
    let store = MockStore::default();
    let api = MockApi::failing();

    fetch_posts(&store, &api, None).await;

    let actions = store.actions();
    let op = started_operation_id(&actions[0]);
    assert_eq!(
        actions,
        vec![
            set_posts_loading_state(LoadingState::started(op.clone())),
            set_posts(vec![], Some(op.clone())),
            set_posts_loading_state(LoadingState::finished(op, true)),
        ]
    );

    let state = store.state();
    assert!(state.posts.by_id.is_empty());
    assert!(state.posts.loading.has_errored);
    assert!(!state.posts.loading.is_loading);
}

#[tokio::test]
async fn test_fetch_comments_success_and_failure() {
    let post_id = sample_posts()[0].id.clone();

    let store = MockStore::default();
    fetch_comments(&store, &MockApi::with_sample_data(), &post_id).await;
    let actions = store.actions();
    let op = started_operation_id(&actions[0]);
    assert_eq!(
        actions,
        vec![
            set_comments_loading_state(LoadingState::started(op.clone())),
            set_comments(sample_comments(), Some(op.clone()), Some(post_id.clone())),
            set_comments_loading_state(LoadingState::finished(op, false)),
        ]
    );
    assert_eq!(store.state().comments.parent_post_id, Some(post_id.clone()));

    let store = MockStore::default();
    fetch_comments(&store, &MockApi::failing(), &post_id).await;
    let actions = store.actions();
    let op = started_operation_id(&actions[0]);
    assert_eq!(
        actions,
        vec![
            set_comments_loading_state(LoadingState::started(op.clone())),
            set_comments(vec![], Some(op.clone()), None),
            set_comments_loading_state(LoadingState::finished(op, true)),
        ]
    );
    assert_eq!(store.state().comments.parent_post_id, None);
}

#[tokio::test]
async fn test_fetch_categories() {
    let store = MockStore::default();
    fetch_categories(&store, &MockApi::with_sample_data()).await;
    assert_eq!(
        store.actions(),
        vec![
            set_categories_loading_state(true),
            set_categories(sample_categories()),
            set_categories_load_error(false),
            set_categories_loading_state(false),
        ]
    );

    let store = MockStore::default();
    fetch_categories(&store, &MockApi::failing()).await;
    assert_eq!(
        store.actions(),
        vec![
            Action::Categories(CategoriesAction::SetLoadingState(true)),
            Action::Categories(CategoriesAction::SetLoadError(true)),
            Action::Categories(CategoriesAction::SetLoadingState(false)),
        ]
    );
    assert!(store.state().categories.has_errored);
}

#[tokio::test]
async fn test_fetch_post_adds_it() {
    let store = MockStore::default();
    let post = sample_posts()[1].clone();

    fetch_post(&store, &MockApi::with_sample_data(), &post.id).await;
    assert_eq!(store.actions(), vec![add_post(post)]);

    let store = MockStore::default();
    fetch_post(&store, &MockApi::with_sample_data(), "missing").await;
    assert!(store.actions().is_empty());
}

#[tokio::test]
async fn test_create_dispatches_only_on_success() {
    let store = MockStore::default();
    let data = NewPost {
        title: "t".into(),
        body: "b".into(),
        author: "a".into(),
        category: "redux".into(),
    };

    let created = create_post(&store, &MockApi::with_sample_data(), data.clone())
        .await
        .unwrap();
    assert_eq!(created.title, "t");
    assert_eq!(store.actions(), vec![add_post(created)]);

    store.clear_actions();
    assert_eq!(create_post(&store, &MockApi::failing(), data).await, None);
    assert!(store.actions().is_empty());
}

#[tokio::test]
async fn test_create_comment_bumps_parent_comment_count() {
    let post = sample_posts()[0].clone();
    let store = MockStore::default();
    store.dispatch(add_post(post.clone())).await;
    store.clear_actions();

    let data = NewComment {
        body: "nice".into(),
        author: "thingone".into(),
    };
    let created = create_comment(&store, &MockApi::with_sample_data(), &post.id, data)
        .await
        .unwrap();

    assert_eq!(store.actions(), vec![add_comment(created)]);
    assert_eq!(
        store.state().posts.by_id[&post.id].comment_count,
        post.comment_count + 1
    );
}

#[tokio::test]
async fn test_delete_post_protocol() {
    let post = sample_posts()[0].clone();

    let store = MockStore::default();
    delete_post(&store, &MockApi::with_sample_data(), &post).await;
    assert_eq!(
        store.actions(),
        vec![set_post_processing_state(&post, true), remove_post(&post)]
    );

    let store = MockStore::default();
    delete_post(&store, &MockApi::failing(), &post).await;
    assert_eq!(
        store.actions(),
        vec![
            set_post_processing_state(&post, true),
            set_post_processing_state(&post, false),
        ]
    );
}

#[tokio::test]
async fn test_delete_comment_protocol() {
    let comment = sample_comments()[1].clone();

    let store = MockStore::default();
    delete_comment(&store, &MockApi::with_sample_data(), &comment).await;
    assert_eq!(
        store.actions(),
        vec![
            set_comment_processing_state(&comment, true),
            remove_comment(&comment),
        ]
    );

    let store = MockStore::default();
    delete_comment(&store, &MockApi::failing(), &comment).await;
    assert_eq!(
        store.actions(),
        vec![
            set_comment_processing_state(&comment, true),
            set_comment_processing_state(&comment, false),
        ]
    );
}

#[tokio::test]
async fn test_edit_protocols() {
    let post = sample_posts()[0].clone();
    let edit = PostEdit {
        title: Some("new title".into()),
        body: None,
    };

    let store = MockStore::default();
    assert!(edit_post(&store, &MockApi::with_sample_data(), &post, edit.clone()).await);
    assert_eq!(
        store.actions(),
        vec![
            set_post_processing_state(&post, true),
            update_post(&post, edit.clone()),
            set_post_processing_state(&post, false),
        ]
    );

    let store = MockStore::default();
    assert!(!edit_post(&store, &MockApi::failing(), &post, edit).await);
    assert_eq!(
        store.actions(),
        vec![
            set_post_processing_state(&post, true),
            set_post_processing_state(&post, false),
        ]
    );

    let comment = sample_comments()[0].clone();
    let edit = CommentEdit {
        body: Some("edited".into()),
    };
    let store = MockStore::default();
    let accepted =
        edit_comment(&store, &MockApi::with_sample_data(), &comment, edit.clone()).await;
    assert!(accepted);
    assert_eq!(
        store.actions(),
        vec![
            set_comment_processing_state(&comment, true),
            update_comment(&comment, edit),
            set_comment_processing_state(&comment, false),
        ]
    );
}

#[tokio::test]
async fn test_vote_is_normalized_before_it_is_sent() {
    let post = sample_posts()[0].clone();
    let api = MockApi::with_sample_data();
    let store = MockStore::default();

    vote_on_post(&store, &api, &post, 4).await;
    vote_on_post(&store, &api, &post, 0).await;

    assert_eq!(
        api.calls(),
        vec![
            format!("vote_on_post({}, upVote)", post.id),
            format!("vote_on_post({}, downVote)", post.id),
        ]
    );
    assert_eq!(
        store.actions(),
        vec![
            set_post_processing_state(&post, true),
            vote_post(&post, 1),
            set_post_processing_state(&post, false),
            set_post_processing_state(&post, true),
            vote_post(&post, -1),
            set_post_processing_state(&post, false),
        ]
    );
}

#[tokio::test]
async fn test_failed_vote_only_toggles_processing() {
    let comment = sample_comments()[0].clone();
    let store = MockStore::default();

    vote_on_comment(&store, &MockApi::failing(), &comment, -3).await;

    assert_eq!(
        store.actions(),
        vec![
            set_comment_processing_state(&comment, true),
            set_comment_processing_state(&comment, false),
        ]
    );
    assert!(!store.actions().contains(&vote_comment(&comment, -1)));
}
