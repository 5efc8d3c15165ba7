// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pure state transitions. Each slice has its own reducer function of the shape
//! `fn(&Arc<Slice>, &Action) -> Arc<Slice>`, and [AppReducer] runs all of them for
//! every action.
//!
//! A slice reducer returns the very same [std::sync::Arc] it was given when the action
//! does not change the slice. Selectors rely on this to skip recomputation.

// Attach sources.
pub mod app_reducer;
pub mod app_state;
pub mod categories_reducer;
pub mod comments_reducer;
pub mod posts_reducer;

// Re-export.
pub use app_reducer::*;
pub use app_state::*;
pub use categories_reducer::*;
pub use comments_reducer::*;
pub use posts_reducer::*;

/// Enable or disable tracing output for rejected (fenced out) actions.
pub const DEBUG_REDUCER_MOD: bool = true;
