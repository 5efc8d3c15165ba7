// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{CategoryPath, PostId};

/// The four page shapes of the client.
///
/// | path                  | route                |
/// |-----------------------|----------------------|
/// | `/`                   | [Route::Root]        |
/// | `/:category`          | [Route::Category]    |
/// | `/:category/:post_id` | [Route::Post]        |
/// | anything else         | [Route::NotFound]    |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Root,
    Category {
        category: CategoryPath,
    },
    Post {
        category: CategoryPath,
        post_id: PostId,
    },
    NotFound,
}

impl Route {
    /// A single trailing `/` is ignored, and so is any query string or fragment.
    #[must_use]
    pub fn parse(location: &str) -> Self {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        let Some(rest) = path.strip_prefix('/') else {
            return Route::NotFound;
        };
        let rest = match rest.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => rest,
        };

        if rest.is_empty() {
            return Route::Root;
        }

        let segments = rest.split('/').collect::<Vec<_>>();
        if segments.iter().any(|it| it.is_empty()) {
            return Route::NotFound;
        }

        match segments.as_slice() {
            [category] => Route::Category {
                category: (*category).into(),
            },
            [category, post_id] => Route::Post {
                category: (*category).into(),
                post_id: (*post_id).into(),
            },
            _ => Route::NotFound,
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Route::Root => write!(f, "/"),
            Route::Category { category } => write!(f, "/{category}"),
            Route::Post { category, post_id } => write!(f, "/{category}/{post_id}"),
            Route::NotFound => write!(f, "404"),
        }
    }
}
