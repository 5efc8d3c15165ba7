// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod route_parser;
pub mod route_sync;

// Re-export.
pub use route_parser::*;
pub use route_sync::*;
