// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// The natural key of a [Category]. Posts refer to their category by this value.
pub type CategoryPath = String;

/// Categories are loaded once and never change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub path: CategoryPath,
}

impl Category {
    pub fn new(name: impl Into<String>, path: impl Into<CategoryPath>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}
