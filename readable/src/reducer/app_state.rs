// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::BTreeMap,
          fmt::{Display, Formatter, Result},
          sync::Arc};

use crate::{Category,
            CategoryPath,
            Comment,
            CommentId,
            LoadingState,
            Post,
            PostId,
            SortOption};

/// The whole client side state. Each slice sits behind an [Arc] so that an action which
/// only touches one slice leaves the other two shared with the previous state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub posts: Arc<PostsState>,
    pub comments: Arc<CommentsState>,
    pub categories: Arc<CategoriesState>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostsState {
    pub by_id: Arc<BTreeMap<PostId, Post>>,
    pub loading: LoadingState,
    /// [None] shows posts in map order.
    pub sort_option: Option<SortOption>,
}

impl Default for PostsState {
    fn default() -> Self {
        Self {
            by_id: Default::default(),
            loading: Default::default(),
            sort_option: Some(SortOption::default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommentsState {
    pub by_id: Arc<BTreeMap<CommentId, Comment>>,
    pub loading: LoadingState,
    /// The post that the loaded comments belong to.
    pub parent_post_id: Option<PostId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoriesState {
    pub by_path: Arc<BTreeMap<CategoryPath, Category>>,
    pub is_loading: bool,
    pub has_errored: bool,
    pub active: Option<CategoryPath>,
}

impl Display for AppState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "AppState[posts: {}, comments: {}, categories: {}, active: {:?}]",
            self.posts.by_id.len(),
            self.comments.by_id.len(),
            self.categories.by_path.len(),
            self.categories.active
        )
    }
}
