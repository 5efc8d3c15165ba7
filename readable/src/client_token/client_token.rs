// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fs, path::Path};

use miette::IntoDiagnostic;
use rand::Rng;

use super::config_folder;
use crate::{CommonResult, DEBUG_CLIENT_TOKEN_MOD};

pub const CLIENT_TOKEN_LEN: usize = 8;

const BASE_36_CHARS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A fresh token of [CLIENT_TOKEN_LEN] random base 36 characters.
#[must_use]
pub fn generate_client_token() -> String {
    let mut rng = rand::rng();
    (0..CLIENT_TOKEN_LEN)
        .map(|_| char::from(BASE_36_CHARS[rng.random_range(0..BASE_36_CHARS.len())]))
        .collect()
}

#[must_use]
pub fn is_valid_client_token(token: &str) -> bool {
    token.len() == CLIENT_TOKEN_LEN
        && token
            .bytes()
            .all(|it| it.is_ascii_digit() || it.is_ascii_lowercase())
}

/// Reads the token saved in `folder`. If there is none, or it is not a valid token, a
/// new one is generated and saved there.
pub fn load_token_from_folder_or_generate_and_save_it(folder: &Path) -> CommonResult<String> {
    let token_file_path = config_folder::get_token_file_path(folder);

    if let Ok(contents) = fs::read_to_string(&token_file_path) {
        let token = contents.trim();
        if is_valid_client_token(token) {
            DEBUG_CLIENT_TOKEN_MOD.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "Successfully read client token from file.",
                    token = %token
                );
            });
            return Ok(token.to_owned());
        }
    }

    let new_token = generate_client_token();
    fs::write(&token_file_path, &new_token).into_diagnostic()?;

    DEBUG_CLIENT_TOKEN_MOD.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "Successfully wrote client token to file.",
            new_token = %new_token
        );
    });

    Ok(new_token)
}

/// Same as [load_token_from_folder_or_generate_and_save_it], using the user's config
/// folder. If the token can't be saved, a fresh one is used for this run only.
#[must_use]
pub fn load_token_or_generate_and_save_it() -> String {
    let result = config_folder::create()
        .and_then(|folder| load_token_from_folder_or_generate_and_save_it(&folder));
    match result {
        Ok(token) => token,
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Could not load or save client token.",
                error = ?error
            );
            generate_client_token()
        }
    }
}
