// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Text output for the terminal. Everything here reads the state through the selectors,
//! and only ever sees the `is_loading`, `has_errored` and `processing` flags, never an
//! error.

use std::fmt::Write;

use chrono::DateTime;
use crossterm::style::Stylize;

use crate::{AppState, Category, Comment, Post, Route, Selectors, get_post_by_id};

pub mod ui_str {
    pub const LOADING_POSTS: &str = "⏳ Loading posts…";
    pub const LOADING_COMMENTS: &str = "⏳ Loading comments…";
    pub const LOAD_ERROR_POSTS: &str = "⚠️ Could not load posts. Try again later.";
    pub const LOAD_ERROR_COMMENTS: &str = "⚠️ Could not load comments. Try again later.";
    pub const LOAD_ERROR_CATEGORIES: &str = "⚠️ Could not load categories.";
    pub const NO_POSTS: &str = "No posts yet.";
    pub const NO_COMMENTS: &str = "No comments yet.";
    pub const POST_NOT_FOUND: &str = "Post not found.";
    pub const PAGE_NOT_FOUND: &str = "Page not found.";
}

/// The whole page for `route`.
#[must_use]
pub fn render_page(route: &Route, state: &AppState, selectors: &Selectors) -> String {
    let mut acc = String::new();

    acc.push_str(&render_categories(
        &selectors.categories.get_categories(state),
        state,
    ));
    acc.push('\n');

    match route {
        Route::Root | Route::Category { .. } => {
            acc.push_str(&render_posts(&selectors.posts.get_posts(state), state));
        }
        Route::Post { post_id, .. } => {
            acc.push_str(&render_post_detail(
                get_post_by_id(state, post_id),
                &selectors.comments.get_comments(state),
                state,
            ));
        }
        Route::NotFound => acc.push_str(ui_str::PAGE_NOT_FOUND),
    }

    acc
}

#[must_use]
pub fn render_categories(categories: &[Category], state: &AppState) -> String {
    if state.categories.has_errored {
        return ui_str::LOAD_ERROR_CATEGORIES.to_string();
    }
    let active = state.categories.active.as_deref();
    let items = categories
        .iter()
        .map(|it| {
            if Some(it.path.as_str()) == active {
                format!("[{}]", it.name).bold().to_string()
            } else {
                it.name.clone()
            }
        })
        .collect::<Vec<_>>();
    format!("{} {}", "Categories:".dark_grey(), items.join("  "))
}

#[must_use]
pub fn render_posts(posts: &[Post], state: &AppState) -> String {
    let loading = &state.posts.loading;
    if loading.is_loading {
        return ui_str::LOADING_POSTS.to_string();
    }
    if loading.has_errored {
        return ui_str::LOAD_ERROR_POSTS.red().to_string();
    }
    if posts.is_empty() {
        return ui_str::NO_POSTS.to_string();
    }
    let mut acc = String::new();
    for post in posts {
        _ = writeln!(acc, "{}", render_post_line(post));
    }
    acc
}

#[must_use]
pub fn render_post_line(post: &Post) -> String {
    let busy = if post.processing { " ⏳" } else { "" };
    format!(
        "{:>4}  {}{busy}\n      {} {} in {}, {} comments, {} {}",
        post.vote_score,
        post.title.as_str().bold(),
        "by".dark_grey(),
        post.author,
        post.category,
        post.comment_count,
        format_timestamp(post.timestamp).dark_grey(),
        post.id.as_str().dark_grey(),
    )
}

#[must_use]
pub fn render_comment_line(comment: &Comment) -> String {
    let busy = if comment.processing { " ⏳" } else { "" };
    format!(
        "{:>4}  {}: {}{busy}  {}",
        comment.vote_score,
        comment.author.as_str().bold(),
        comment.body,
        comment.id.as_str().dark_grey(),
    )
}

#[must_use]
pub fn render_post_detail(
    maybe_post: Option<&Post>,
    comments: &[Comment],
    state: &AppState,
) -> String {
    let Some(post) = maybe_post else {
        return ui_str::POST_NOT_FOUND.to_string();
    };

    let mut acc = String::new();
    _ = writeln!(acc, "{}", render_post_line(post));
    _ = writeln!(acc);
    _ = writeln!(acc, "{}", post.body);
    _ = writeln!(acc);

    let loading = &state.comments.loading;
    if loading.is_loading {
        acc.push_str(ui_str::LOADING_COMMENTS);
    } else if loading.has_errored {
        acc.push_str(&ui_str::LOAD_ERROR_COMMENTS.red().to_string());
    } else if comments.is_empty() {
        acc.push_str(ui_str::NO_COMMENTS);
    } else {
        _ = writeln!(acc, "{}", format!("Comments ({})", comments.len()).underlined());
        let mut by_score = comments.iter().collect::<Vec<_>>();
        by_score.sort_by(|lhs, rhs| rhs.vote_score.cmp(&lhs.vote_score));
        for comment in by_score {
            _ = writeln!(acc, "{}", render_comment_line(comment));
        }
    }

    acc
}

/// Milliseconds since the epoch, as a date.
#[must_use]
pub fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|it| it.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
