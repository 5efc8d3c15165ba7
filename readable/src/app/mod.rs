// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Wiring: builds the store, runs one command against it, and renders the result.

// Attach sources.
pub mod create_store;
pub mod launcher;
pub mod render;

// Re-export.
pub use create_store::*;
pub use launcher::*;
