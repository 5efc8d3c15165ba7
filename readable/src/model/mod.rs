// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The entities of the Readable domain, and the small value types that travel with them
//! through actions and reducers.

// Attach sources.
pub mod category;
pub mod comment;
pub mod loading_state;
pub mod post;
pub mod sort_option;
pub mod vote;

// Re-export.
pub use category::*;
pub use comment::*;
pub use loading_state::*;
pub use post::*;
pub use sort_option::*;
pub use vote::*;
