// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Client for a Readable server: posts and comments, organized by category.
//!
//! All client side state lives in one [`readable_redux::Store`]. The pieces, bottom up:
//!
//! - [`model`]: entities as they travel over the wire, plus the per slice
//!   [LoadingState].
//! - [`reducer`]: pure transitions for the posts, comments, and categories slices. Bulk
//!   fetches are fenced by an [OperationId], so a superseded fetch can't overwrite the
//!   result of the one that replaced it.
//! - [`action`]: sync action creators, and async ones (thunks) that wrap each server call
//!   in its dispatch protocol. Server errors never escape a thunk, they become flags.
//! - [`selector`]: memoized, ordered views for rendering.
//! - [`route`]: turns a location like `/react/8xf0y6ziyjabvozdd253nd` into the fetches
//!   that page needs.
//! - [`api`]: the [ReadableApi] trait and its HTTP implementation.
//!
//! The `readable` binary wires these up behind a [clap] command line.

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod action;
pub mod api;
pub mod app;
pub mod client_token;
pub mod config;
pub mod log;
pub mod middleware;
pub mod model;
pub mod reducer;
pub mod route;
pub mod selector;
pub mod test_fixtures;

// Re-export.
pub use action::*;
pub use api::*;
pub use app::*;
pub use client_token::{DEBUG_CLIENT_TOKEN_MOD, load_token_or_generate_and_save_it};
pub use config::*;
pub use log::*;
pub use middleware::*;
pub use model::*;
pub use reducer::*;
pub use route::*;
pub use selector::*;

pub type CommonResult<T> = miette::Result<T>;
