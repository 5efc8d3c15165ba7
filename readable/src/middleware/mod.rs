// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod action_logger;
pub mod state_logger;

// Re-export.
pub use action_logger::*;
pub use state_logger::*;
