// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod async_middleware;
pub mod async_reducer;
pub mod async_subscriber;
pub mod store;

// Re-export.
pub use async_middleware::*;
pub use async_reducer::*;
pub use async_subscriber::*;
pub use store::*;

/// Enable or disable tracing output for dispatches in this crate.
pub const DEBUG_REDUX_MOD: bool = true;
