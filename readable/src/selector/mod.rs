// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Derived, ordered views of the normalized state. Each selector remembers its last
//! input and output, and hands back the same [std::sync::Arc] for as long as its input
//! slices are unchanged.
//!
//! Selectors are plain values owned by whoever renders. There is no global cache.

// Attach sources.
pub mod categories_selector;
pub mod comments_selector;
pub mod memo;
pub mod posts_selector;

// Re-export.
pub use categories_selector::*;
pub use comments_selector::*;
pub use memo::*;
pub use posts_selector::*;

/// One of each selector.
#[derive(Debug, Default)]
pub struct Selectors {
    pub posts: PostsSelector,
    pub comments: CommentsSelector,
    pub categories: CategoriesSelector,
}
