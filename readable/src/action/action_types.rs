// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{Category,
            CategoryPath,
            Comment,
            CommentEdit,
            CommentId,
            LoadingState,
            OperationId,
            Post,
            PostEdit,
            PostId,
            SortOption};

/// Every action that the store understands. One variant per slice, each wrapping that
/// slice's own action type.
///
/// Best practices for naming actions: <https://redux.js.org/style-guide/#write-action-types-as-domaineventname>
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Action {
    #[default]
    Noop,
    Posts(PostsAction),
    Comments(CommentsAction),
    Categories(CategoriesAction),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PostsAction {
    /// Replace every post. With an operation id this is the completion of a fetch, and it
    /// is fenced. Without one it is a plain clear (or replace), which is always applied
    /// and also resets the loading state.
    Set {
        posts: Vec<Post>,
        operation_id: Option<OperationId>,
    },
    Add(Post),
    Remove {
        id: PostId,
    },
    Update {
        id: PostId,
        data: PostEdit,
    },
    /// `vote` is always exactly `1` or `-1`.
    Vote {
        id: PostId,
        vote: i64,
    },
    SetLoadingState(LoadingState),
    SetProcessingState {
        id: PostId,
        processing: bool,
    },
    SetSortOption(Option<SortOption>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommentsAction {
    /// Same fencing rules as [`PostsAction::Set`]. `parent_post_id` records which post
    /// the comments belong to.
    Set {
        comments: Vec<Comment>,
        operation_id: Option<OperationId>,
        parent_post_id: Option<PostId>,
    },
    Add(Comment),
    /// Carries the parent id so the posts slice can keep its comment count in sync.
    Remove {
        id: CommentId,
        parent_id: PostId,
    },
    Update {
        id: CommentId,
        data: CommentEdit,
    },
    Vote {
        id: CommentId,
        vote: i64,
    },
    SetLoadingState(LoadingState),
    SetProcessingState {
        id: CommentId,
        processing: bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum CategoriesAction {
    Set(Vec<Category>),
    SetLoadingState(bool),
    SetLoadError(bool),
    SetActive(Option<CategoryPath>),
}

mod action_impl {
    use super::{Action, CategoriesAction, CommentsAction, Display, Formatter, PostsAction,
                Result};

    impl Display for Action {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{self:?}") }
    }

    impl From<PostsAction> for Action {
        fn from(it: PostsAction) -> Self { Action::Posts(it) }
    }

    impl From<CommentsAction> for Action {
        fn from(it: CommentsAction) -> Self { Action::Comments(it) }
    }

    impl From<CategoriesAction> for Action {
        fn from(it: CategoriesAction) -> Self { Action::Categories(it) }
    }
}
