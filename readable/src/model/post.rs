// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::CategoryPath;

pub type PostId = String;

/// A post, as the server sends it. The `processing` flag only exists on the client (it
/// is never sent or received), and is raised while a vote, edit or delete for this post
/// is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub author: String,
    pub category: CategoryPath,
    pub timestamp: i64,
    #[serde(default)]
    pub vote_score: i64,
    #[serde(default)]
    pub comment_count: u32,
    #[serde(skip)]
    pub processing: bool,
}

impl Post {
    /// Only the whitelisted editable fields are merged, everything else is kept.
    pub fn apply_edit(&mut self, edit: &PostEdit) {
        if let Some(title) = &edit.title {
            self.title.clone_from(title);
        }
        if let Some(body) = &edit.body {
            self.body.clone_from(body);
        }
    }
}

/// Input for creating a post. The id and timestamp are assigned by the client when the
/// request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub author: String,
    pub category: CategoryPath,
}

/// The editable fields of a [Post].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostEdit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}
