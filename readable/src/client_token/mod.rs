// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The anonymous client token. It is generated once, saved in the user's config folder,
//! and sent in the `Authorization` header of every request.

// Attach sources.
pub mod client_token;
pub mod config_folder;

// Re-export.
pub use client_token::*;
pub use config_folder::*;

/// Enable or disable tracing output for loading and saving the token.
pub const DEBUG_CLIENT_TOKEN_MOD: bool = true;
