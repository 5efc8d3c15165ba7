// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          fs::{self},
          path::{Path, PathBuf}};

use dirs::config_dir;
use miette::{IntoDiagnostic, WrapErr};

use crate::{CommonResult, DEBUG_CLIENT_TOKEN_MOD};

pub enum ConfigPaths {
    ReadableTopLevelFolderName,
    ClientTokenFile,
}

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigFolderErrorCouldNot {
    #[error("📂 Could not access the config folder")]
    AccessConfigFolder,

    #[error("📂 Could not create the config folder {0:?}")]
    CreateConfigFolder(PathBuf),
}

impl Display for ConfigPaths {
    /// This generates a `to_string()` method used by [get_token_file_path].
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let path = match self {
            ConfigPaths::ReadableTopLevelFolderName => "readable",
            ConfigPaths::ClientTokenFile => "token",
        };
        write!(f, "{path}")
    }
}

/// This is where the token file is stored, inside `folder`.
#[must_use]
pub fn get_token_file_path(folder: &Path) -> PathBuf {
    folder.join(ConfigPaths::ClientTokenFile.to_string())
}

/// This is where the config folder is.
#[must_use]
pub fn try_get_config_folder_path() -> Option<PathBuf> {
    let home_config_folder_path = config_dir()?;
    Some(home_config_folder_path.join(ConfigPaths::ReadableTopLevelFolderName.to_string()))
}

/// Creates the config folder (and its parents) if it does not exist yet.
pub fn create() -> CommonResult<PathBuf> {
    let config_folder_path = try_get_config_folder_path().ok_or_else(|| {
        // % is Display, ? is Debug.
        tracing::error!(message = "Could not access config folder.", error = "None");
        miette::Report::new(ConfigFolderErrorCouldNot::AccessConfigFolder)
    })?;

    fs::create_dir_all(&config_folder_path)
        .into_diagnostic()
        .wrap_err(ConfigFolderErrorCouldNot::CreateConfigFolder(
            config_folder_path.clone(),
        ))?;

    DEBUG_CLIENT_TOKEN_MOD.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "Config folder is ready.",
            config_folder = ?config_folder_path
        );
    });

    Ok(config_folder_path)
}
