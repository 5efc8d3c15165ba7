// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Thread safe asynchronous Redux store, built on [`tokio`].
//!
//! 1. Reducers are run in sequence (never in Tokio tasks), and they never get access to
//!    the store. So a reducer can't dispatch an action while another one is running.
//! 2. Middlewares are run concurrently (cooperatively, on the task that is dispatching).
//!    An action that a middleware returns is dispatched for you.
//! 3. Subscribers are run concurrently after the reducers, only if the state actually
//!    changed.
//!
//! The [`SharedStore`] type alias wraps a [`Store`] in an [`std::sync::Arc`] and a
//! [`tokio::sync::RwLock`], which is how the store is shared between async tasks. The
//! write lock serializes all dispatches.

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod redux;

// Re-export.
pub use redux::*;
