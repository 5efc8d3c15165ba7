// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::BTreeMap, sync::Arc};

use crate::{AppState, ByIdentity, CategoryPath, MemoSlot, Post, PostId, SortOption};

type PostsKey = (
    ByIdentity<BTreeMap<PostId, Post>>,
    Option<CategoryPath>,
    Option<SortOption>,
);

/// Posts of the active category (or all of them when no category is active), in the
/// order given by the sort option.
#[derive(Debug, Default)]
pub struct PostsSelector {
    memo: MemoSlot<PostsKey, Vec<Post>>,
}

impl PostsSelector {
    pub fn get_posts(&self, state: &AppState) -> Arc<Vec<Post>> {
        let key = (
            ByIdentity(Arc::clone(&state.posts.by_id)),
            state.categories.active.clone(),
            state.posts.sort_option,
        );
        self.memo.get_or_compute(key, |(by_id, active, sort_option)| {
            let mut posts = by_id
                .0
                .values()
                .filter(|post| active.as_ref().is_none_or(|it| post.category == *it))
                .cloned()
                .collect::<Vec<_>>();
            if let Some(sort_option) = sort_option {
                posts.sort_by(|lhs, rhs| sort_option.compare(lhs, rhs));
            }
            posts
        })
    }
}

/// [None] when the post is not loaded. It stands in for an empty post placeholder.
#[must_use]
pub fn get_post_by_id<'a>(state: &'a AppState, id: &str) -> Option<&'a Post> {
    state.posts.by_id.get(id)
}
