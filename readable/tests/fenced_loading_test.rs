// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Two fetches race on a real store. The one that started last owns the slice, even
//! when the older one finishes after it.

use std::sync::Arc;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use readable::{Category, Comment, CommentEdit, CommonResult, Dispatcher, NewComment,
               NewPost, Post, PostEdit, ReadableApi, Vote, clear_posts, create_store,
               fetch_posts,
               test_fixtures::{MockApi, sample_posts}};
use tokio::sync::Notify;

/// Calls for the `slow` category park until `release` is notified. Everything else is
/// answered by the [MockApi] right away.
struct GatedApi {
    inner: MockApi,
    entered: Notify,
    release: Notify,
}

impl GatedApi {
    fn new() -> Self {
        let mut inner = MockApi::with_sample_data();
        inner.posts.push(Post {
            id: "slow-1".into(),
            category: "slow".into(),
            ..Default::default()
        });
        Self {
            inner,
            entered: Notify::new(),
            release: Notify::new(),
        }
    }
}

#[async_trait]
impl ReadableApi for GatedApi {
    async fn get_categories(&self) -> CommonResult<Vec<Category>> {
        self.inner.get_categories().await
    }

    async fn get_posts(&self, maybe_category: Option<&str>) -> CommonResult<Vec<Post>> {
        if maybe_category == Some("slow") {
            self.entered.notify_one();
            self.release.notified().await;
        }
        self.inner.get_posts(maybe_category).await
    }

    async fn get_post(&self, id: &str) -> CommonResult<Post> { self.inner.get_post(id).await }

    async fn get_post_comments(&self, post_id: &str) -> CommonResult<Vec<Comment>> {
        self.inner.get_post_comments(post_id).await
    }

    async fn get_comment(&self, id: &str) -> CommonResult<Comment> {
        self.inner.get_comment(id).await
    }

    async fn create_post(&self, data: &NewPost) -> CommonResult<Post> {
        self.inner.create_post(data).await
    }

    async fn create_comment(
        &self,
        post_id: &str,
        data: &NewComment,
    ) -> CommonResult<Comment> {
        self.inner.create_comment(post_id, data).await
    }

    async fn vote_on_post(&self, id: &str, vote: Vote) -> CommonResult<Post> {
        self.inner.vote_on_post(id, vote).await
    }

    async fn vote_on_comment(&self, id: &str, vote: Vote) -> CommonResult<Comment> {
        self.inner.vote_on_comment(id, vote).await
    }

    async fn update_post(&self, id: &str, data: &PostEdit) -> CommonResult<Post> {
        self.inner.update_post(id, data).await
    }

    async fn update_comment(&self, id: &str, data: &CommentEdit) -> CommonResult<Comment> {
        self.inner.update_comment(id, data).await
    }

    async fn delete_post(&self, id: &str) -> CommonResult<()> {
        self.inner.delete_post(id).await
    }

    async fn delete_comment(&self, id: &str) -> CommonResult<()> {
        self.inner.delete_comment(id).await
    }
}

#[tokio::test]
async fn test_superseded_fetch_cannot_clobber_newer_one() {
    let store = create_store().await;
    let api = Arc::new(GatedApi::new());

    // A starts, and parks inside the network call.
    let slow_fetch = tokio::spawn({
        let store = Arc::clone(&store);
        let api = Arc::clone(&api);
        async move { fetch_posts(&store, api.as_ref(), Some("slow")).await }
    });
    api.entered.notified().await;

    // B starts after A, and finishes first.
    fetch_posts(&store, api.as_ref(), Some("react")).await;
    let after_b = store.get_state().await;

    // A's response lands last.
    api.release.notify_one();
    slow_fetch.await.unwrap();
    let after_a = store.get_state().await;

    let react_ids = sample_posts()
        .into_iter()
        .filter(|it| it.category == "react")
        .map(|it| it.id)
        .collect::<Vec<_>>();
    assert_eq!(after_a.posts.by_id.keys().cloned().collect::<Vec<_>>(), react_ids);
    assert!(!after_a.posts.loading.is_loading);
    assert!(!after_a.posts.loading.has_errored);
    assert_eq!(after_a.posts, after_b.posts);
}

#[tokio::test]
async fn test_clear_while_fetching_drops_the_fetch() {
    let store = create_store().await;
    let api = Arc::new(GatedApi::new());

    let slow_fetch = tokio::spawn({
        let store = Arc::clone(&store);
        let api = Arc::clone(&api);
        async move { fetch_posts(&store, api.as_ref(), Some("slow")).await }
    });
    api.entered.notified().await;
    assert!(store.get_state().await.posts.loading.is_loading);

    store.dispatch(clear_posts()).await;

    api.release.notify_one();
    slow_fetch.await.unwrap();

    let state = store.get_state().await;
    assert!(state.posts.by_id.is_empty());
    assert!(!state.posts.loading.is_loading);
    assert_eq!(state.posts.loading.id, None);
}
