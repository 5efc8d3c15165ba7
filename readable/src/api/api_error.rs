// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommentId, PostId};

#[derive(Debug, Clone, thiserror::Error, miette::Diagnostic)]
pub enum ApiErrorCouldNot {
    #[error("📂 Could not build the HTTP client")]
    BuildHttpClient,

    #[error("🏷️ Could not fetch categories")]
    FetchCategories,

    #[error("📰 Could not fetch posts")]
    FetchPosts,

    #[error("📰 Could not fetch post {0}")]
    FetchPost(PostId),

    #[error("💬 Could not fetch comments for post {0}")]
    FetchComments(PostId),

    #[error("💬 Could not fetch comment {0}")]
    FetchComment(CommentId),

    #[error("📝 Could not create post")]
    CreatePost,

    #[error("📝 Could not create comment on post {0}")]
    CreateComment(PostId),

    #[error("👍 Could not vote on post {0}")]
    VoteOnPost(PostId),

    #[error("👍 Could not vote on comment {0}")]
    VoteOnComment(CommentId),

    #[error("✏️ Could not update post {0}")]
    UpdatePost(PostId),

    #[error("✏️ Could not update comment {0}")]
    UpdateComment(CommentId),

    #[error("🗑️ Could not delete post {0}")]
    DeletePost(PostId),

    #[error("🗑️ Could not delete comment {0}")]
    DeleteComment(CommentId),
}
