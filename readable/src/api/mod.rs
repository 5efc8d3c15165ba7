// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod api_error;
pub mod http_api_client;
pub mod paths;
pub mod readable_api;

// Re-export.
pub use api_error::*;
pub use http_api_client::*;
pub use readable_api::*;

/// Enable or disable tracing output for the HTTP client.
pub const DEBUG_API_MOD: bool = true;
