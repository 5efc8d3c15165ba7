// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::{sample_categories, sample_comments, sample_posts};
use crate::{Category,
            Comment,
            CommentEdit,
            CommonResult,
            NewComment,
            NewPost,
            Post,
            PostEdit,
            ReadableApi,
            Vote};

/// Answers from canned data, and logs every call as a short string (eg:
/// `get_posts(react)`). With `fail` set, every call is logged and then fails.
///
/// Writes are not applied to the canned data. Each call is answered on its own.
#[derive(Debug, Default)]
pub struct MockApi {
    pub categories: Vec<Category>,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
    pub fail: bool,
    calls: Mutex<Vec<String>>,
}

impl MockApi {
    #[must_use]
    pub fn with_sample_data() -> Self {
        Self {
            categories: sample_categories(),
            posts: sample_posts(),
            comments: sample_comments(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::with_sample_data()
        }
    }

    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: String) -> CommonResult<()> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call.clone());
        if self.fail {
            miette::bail!("mock api refused {call}");
        }
        Ok(())
    }

    fn find_post(&self, id: &str) -> CommonResult<Post> {
        self.posts
            .iter()
            .find(|it| it.id == id)
            .cloned()
            .ok_or_else(|| miette::miette!("no post {id}"))
    }

    fn find_comment(&self, id: &str) -> CommonResult<Comment> {
        self.comments
            .iter()
            .find(|it| it.id == id)
            .cloned()
            .ok_or_else(|| miette::miette!("no comment {id}"))
    }

    fn next_id(&self, prefix: &str) -> String { format!("{prefix}-{}", self.calls().len()) }
}

#[async_trait]
impl ReadableApi for MockApi {
    async fn get_categories(&self) -> CommonResult<Vec<Category>> {
        self.record("get_categories".into())?;
        Ok(self.categories.clone())
    }

    async fn get_posts(&self, maybe_category: Option<&str>) -> CommonResult<Vec<Post>> {
        self.record(format!("get_posts({})", maybe_category.unwrap_or_default()))?;
        Ok(self
            .posts
            .iter()
            .filter(|it| maybe_category.is_none_or(|category| it.category == category))
            .cloned()
            .collect())
    }

    async fn get_post(&self, id: &str) -> CommonResult<Post> {
        self.record(format!("get_post({id})"))?;
        self.find_post(id)
    }

    async fn get_post_comments(&self, post_id: &str) -> CommonResult<Vec<Comment>> {
        self.record(format!("get_post_comments({post_id})"))?;
        Ok(self
            .comments
            .iter()
            .filter(|it| it.parent_id == post_id)
            .cloned()
            .collect())
    }

    async fn get_comment(&self, id: &str) -> CommonResult<Comment> {
        self.record(format!("get_comment({id})"))?;
        self.find_comment(id)
    }

    async fn create_post(&self, data: &NewPost) -> CommonResult<Post> {
        self.record(format!("create_post({})", data.title))?;
        Ok(Post {
            id: self.next_id("post"),
            title: data.title.clone(),
            body: data.body.clone(),
            author: data.author.clone(),
            category: data.category.clone(),
            vote_score: 1,
            ..Default::default()
        })
    }

    async fn create_comment(
        &self,
        post_id: &str,
        data: &NewComment,
    ) -> CommonResult<Comment> {
        self.record(format!("create_comment({post_id})"))?;
        Ok(Comment {
            id: self.next_id("comment"),
            parent_id: post_id.into(),
            body: data.body.clone(),
            author: data.author.clone(),
            vote_score: 1,
            ..Default::default()
        })
    }

    async fn vote_on_post(&self, id: &str, vote: Vote) -> CommonResult<Post> {
        self.record(format!("vote_on_post({id}, {vote})"))?;
        let mut post = self.find_post(id)?;
        post.vote_score += vote.delta();
        Ok(post)
    }

    async fn vote_on_comment(&self, id: &str, vote: Vote) -> CommonResult<Comment> {
        self.record(format!("vote_on_comment({id}, {vote})"))?;
        let mut comment = self.find_comment(id)?;
        comment.vote_score += vote.delta();
        Ok(comment)
    }

    async fn update_post(&self, id: &str, data: &PostEdit) -> CommonResult<Post> {
        self.record(format!("update_post({id})"))?;
        let mut post = self.find_post(id)?;
        post.apply_edit(data);
        Ok(post)
    }

    async fn update_comment(&self, id: &str, data: &CommentEdit) -> CommonResult<Comment> {
        self.record(format!("update_comment({id})"))?;
        let mut comment = self.find_comment(id)?;
        comment.apply_edit(data);
        Ok(comment)
    }

    async fn delete_post(&self, id: &str) -> CommonResult<()> {
        self.record(format!("delete_post({id})"))?;
        self.find_post(id).map(|_| ())
    }

    async fn delete_comment(&self, id: &str) -> CommonResult<()> {
        self.record(format!("delete_comment({id})"))?;
        self.find_comment(id).map(|_| ())
    }
}
