// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Commands, end to end, against the mock server.

use readable::{CLICommand, Dispatcher, SortOption, add_post, create_store,
               run_command_with,
               test_fixtures::{MockApi, MockStore, sample_comments, sample_posts}};

#[tokio::test]
async fn test_browse_root_lists_posts_by_score() {
    let store = create_store().await;
    let api = MockApi::with_sample_data();
    let command = CLICommand::Browse {
        path: "/".into(),
        sort: None,
    };

    let output = run_command_with(command, &store, &api).await.unwrap();

    let posts = sample_posts();
    let first = output.find(&posts[0].title).unwrap();
    let second = output.find(&posts[1].title).unwrap();
    assert!(first < second);
    assert!(output.contains("udacity"));
}

#[tokio::test]
async fn test_browse_with_ascending_sort() {
    let store = MockStore::default();
    let api = MockApi::with_sample_data();
    let command = CLICommand::Browse {
        path: "/".into(),
        sort: Some("voteScore".parse::<SortOption>().unwrap()),
    };

    let output = run_command_with(command, &store, &api).await.unwrap();

    let posts = sample_posts();
    assert!(output.find(&posts[1].title).unwrap() < output.find(&posts[0].title).unwrap());
}

#[tokio::test]
async fn test_browse_post_shows_comments() {
    let store = create_store().await;
    let api = MockApi::with_sample_data();
    let post = sample_posts()[0].clone();
    let command = CLICommand::Browse {
        path: format!("/{}/{}", post.category, post.id),
        sort: None,
    };

    let output = run_command_with(command, &store, &api).await.unwrap();

    assert!(output.contains(&post.body));
    for comment in sample_comments() {
        assert!(output.contains(&comment.body));
    }
}

#[tokio::test]
async fn test_vote_on_post() {
    let store = MockStore::default();
    let api = MockApi::with_sample_data();
    let post = sample_posts()[0].clone();
    let command = CLICommand::Vote {
        post: Some(post.id.clone()),
        comment: None,
        delta: 10,
    };

    run_command_with(command, &store, &api).await.unwrap();

    assert_eq!(
        store.state().posts.by_id[&post.id].vote_score,
        post.vote_score + 1
    );
}

#[tokio::test]
async fn test_vote_on_comment_fails_loudly_when_server_fails() {
    let store = MockStore::default();
    let api = MockApi::failing();
    let command = CLICommand::Vote {
        post: None,
        comment: Some(sample_comments()[0].id.clone()),
        delta: -1,
    };

    assert!(run_command_with(command, &store, &api).await.is_err());
}

#[tokio::test]
async fn test_delete_post_removes_its_comments() {
    let store = MockStore::default();
    let api = MockApi::with_sample_data();
    let post = sample_posts()[0].clone();

    let browse = CLICommand::Browse {
        path: format!("/{}/{}", post.category, post.id),
        sort: None,
    };
    run_command_with(browse, &store, &api).await.unwrap();
    assert!(!store.state().comments.by_id.is_empty());

    let output = run_command_with(CLICommand::DeletePost { id: post.id.clone() }, &store, &api)
        .await
        .unwrap();

    assert!(output.contains(&post.id));
    let state = store.state();
    assert!(!state.posts.by_id.contains_key(&post.id));
    assert!(state.comments.by_id.is_empty());
}

#[tokio::test]
async fn test_edit_comment() {
    let store = MockStore::default();
    let api = MockApi::with_sample_data();
    let comment = sample_comments()[1].clone();
    let command = CLICommand::EditComment {
        id: comment.id.clone(),
        body: "Edited.".into(),
    };

    let output = run_command_with(command, &store, &api).await.unwrap();

    assert!(output.contains("Edited."));
    assert_eq!(store.state().comments.by_id[&comment.id].body, "Edited.");
}

#[tokio::test]
async fn test_refused_edit_is_an_error_even_when_nothing_would_change() {
    let post = sample_posts()[0].clone();
    let store = MockStore::default();
    store.dispatch(add_post(post.clone())).await;
    let api = MockApi::failing();
    let command = CLICommand::EditPost {
        id: post.id.clone(),
        title: Some(post.title.clone()),
        body: None,
    };

    assert!(run_command_with(command, &store, &api).await.is_err());
    assert_eq!(api.calls(), vec![format!("update_post({})", post.id)]);
    assert_eq!(store.state().posts.by_id[&post.id], post);
}

#[tokio::test]
async fn test_create_post_failure_is_an_error() {
    let store = MockStore::default();
    let command = CLICommand::CreatePost {
        category: "react".into(),
        title: "t".into(),
        body: "b".into(),
        author: "a".into(),
    };

    assert!(
        run_command_with(command, &store, &MockApi::failing())
            .await
            .is_err()
    );
    assert!(store.state().posts.by_id.is_empty());
}
