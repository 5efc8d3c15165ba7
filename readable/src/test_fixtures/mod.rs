// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Test doubles for the two seams of the action layer: [MockStore] stands in for the
//! store and records what was dispatched, [MockApi] stands in for the server.

// Attach sources.
pub mod mock_api;
pub mod mock_store;
pub mod sample_data;

// Re-export.
pub use mock_api::*;
pub use mock_store::*;
pub use sample_data::*;
