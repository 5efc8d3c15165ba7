// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Sync action creators. None of these have side effects, they only build an [Action].
//! Anything that needs the network lives in [`super::thunks`].

use crate::{Action,
            CategoriesAction,
            Category,
            CategoryPath,
            Comment,
            CommentEdit,
            CommentsAction,
            LoadingState,
            OperationId,
            Post,
            PostEdit,
            PostId,
            PostsAction,
            SortOption,
            Vote};

// Posts.

#[must_use]
pub fn set_posts(posts: Vec<Post>, operation_id: Option<OperationId>) -> Action {
    PostsAction::Set {
        posts,
        operation_id,
    }
    .into()
}

/// Empties the posts slice and resets its loading state.
#[must_use]
pub fn clear_posts() -> Action { set_posts(vec![], None) }

#[must_use]
pub fn add_post(post: Post) -> Action { PostsAction::Add(post).into() }

#[must_use]
pub fn remove_post(post: &Post) -> Action {
    PostsAction::Remove {
        id: post.id.clone(),
    }
    .into()
}

#[must_use]
pub fn update_post(post: &Post, data: PostEdit) -> Action {
    PostsAction::Update {
        id: post.id.clone(),
        data,
    }
    .into()
}

/// `raw` is normalized to a single unit, so `4` is an up vote and `0` a down vote.
#[must_use]
pub fn vote_post(post: &Post, raw: i64) -> Action {
    PostsAction::Vote {
        id: post.id.clone(),
        vote: Vote::normalize(raw).delta(),
    }
    .into()
}

#[must_use]
pub fn set_posts_loading_state(loading_state: LoadingState) -> Action {
    PostsAction::SetLoadingState(loading_state).into()
}

#[must_use]
pub fn set_post_processing_state(post: &Post, processing: bool) -> Action {
    PostsAction::SetProcessingState {
        id: post.id.clone(),
        processing,
    }
    .into()
}

#[must_use]
pub fn set_posts_sort_option(sort_option: Option<SortOption>) -> Action {
    PostsAction::SetSortOption(sort_option).into()
}

// Comments.

#[must_use]
pub fn set_comments(
    comments: Vec<Comment>,
    operation_id: Option<OperationId>,
    parent_post_id: Option<PostId>,
) -> Action {
    CommentsAction::Set {
        comments,
        operation_id,
        parent_post_id,
    }
    .into()
}

/// Empties the comments slice, forgets which post they belonged to, and resets the
/// loading state.
#[must_use]
pub fn clear_comments() -> Action { set_comments(vec![], None, None) }

#[must_use]
pub fn add_comment(comment: Comment) -> Action { CommentsAction::Add(comment).into() }

#[must_use]
pub fn remove_comment(comment: &Comment) -> Action {
    CommentsAction::Remove {
        id: comment.id.clone(),
        parent_id: comment.parent_id.clone(),
    }
    .into()
}

#[must_use]
pub fn update_comment(comment: &Comment, data: CommentEdit) -> Action {
    CommentsAction::Update {
        id: comment.id.clone(),
        data,
    }
    .into()
}

#[must_use]
pub fn vote_comment(comment: &Comment, raw: i64) -> Action {
    CommentsAction::Vote {
        id: comment.id.clone(),
        vote: Vote::normalize(raw).delta(),
    }
    .into()
}

#[must_use]
pub fn set_comments_loading_state(loading_state: LoadingState) -> Action {
    CommentsAction::SetLoadingState(loading_state).into()
}

#[must_use]
pub fn set_comment_processing_state(comment: &Comment, processing: bool) -> Action {
    CommentsAction::SetProcessingState {
        id: comment.id.clone(),
        processing,
    }
    .into()
}

// Categories.

#[must_use]
pub fn set_categories(categories: Vec<Category>) -> Action {
    CategoriesAction::Set(categories).into()
}

#[must_use]
pub fn set_categories_loading_state(is_loading: bool) -> Action {
    CategoriesAction::SetLoadingState(is_loading).into()
}

#[must_use]
pub fn set_categories_load_error(has_errored: bool) -> Action {
    CategoriesAction::SetLoadError(has_errored).into()
}

#[must_use]
pub fn set_active_category(path: Option<CategoryPath>) -> Action {
    CategoriesAction::SetActive(path).into()
}
