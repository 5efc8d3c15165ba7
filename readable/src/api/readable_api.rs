// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use async_trait::async_trait;

use crate::{Category,
            Comment,
            CommentEdit,
            CommonResult,
            NewComment,
            NewPost,
            Post,
            PostEdit,
            Vote};

/// Every call the client makes to the Readable server. The async action creators only
/// ever talk to the server through this trait, so tests can swap in
/// [`crate::test_fixtures::MockApi`].
///
/// Errors are [miette] reports. Callers in the action layer turn them into state
/// transitions and never pass them up.
#[async_trait]
pub trait ReadableApi: Send + Sync {
    async fn get_categories(&self) -> CommonResult<Vec<Category>>;

    async fn get_posts(&self, maybe_category: Option<&str>) -> CommonResult<Vec<Post>>;

    async fn get_post(&self, id: &str) -> CommonResult<Post>;

    async fn get_post_comments(&self, post_id: &str) -> CommonResult<Vec<Comment>>;

    async fn get_comment(&self, id: &str) -> CommonResult<Comment>;

    /// The returned post carries the id that was assigned to it.
    async fn create_post(&self, data: &NewPost) -> CommonResult<Post>;

    async fn create_comment(&self, post_id: &str, data: &NewComment)
    -> CommonResult<Comment>;

    async fn vote_on_post(&self, id: &str, vote: Vote) -> CommonResult<Post>;

    async fn vote_on_comment(&self, id: &str, vote: Vote) -> CommonResult<Comment>;

    async fn update_post(&self, id: &str, data: &PostEdit) -> CommonResult<Post>;

    async fn update_comment(&self, id: &str, data: &CommentEdit) -> CommonResult<Comment>;

    async fn delete_post(&self, id: &str) -> CommonResult<()>;

    async fn delete_comment(&self, id: &str) -> CommonResult<()>;
}
