// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Actions, and the functions that create them.
//!
//! - [`creators`]: sync action creators. Pure functions that return an [Action].
//! - [`thunks`]: async action creators. Each one encodes the dispatch protocol for one
//!   operation (loading start, network call, mutation, loading end) against a
//!   [Dispatcher] and a [`crate::ReadableApi`].

// Attach sources.
pub mod action_types;
pub mod creators;
pub mod dispatcher;
pub mod thunks;

// Re-export.
pub use action_types::*;
pub use creators::*;
pub use dispatcher::*;
pub use thunks::*;

/// Enable or disable tracing output for the async action creators.
pub const DEBUG_THUNK_MOD: bool = true;
