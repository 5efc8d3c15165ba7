// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::PostId;

pub type CommentId = String;

/// A comment on a post. Like [`crate::Post`], `processing` is client side only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub parent_id: PostId,
    pub body: String,
    pub author: String,
    pub timestamp: i64,
    #[serde(default)]
    pub vote_score: i64,
    #[serde(skip)]
    pub processing: bool,
}

impl Comment {
    pub fn apply_edit(&mut self, edit: &CommentEdit) {
        if let Some(body) = &edit.body {
            self.body.clone_from(body);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewComment {
    pub body: String,
    pub author: String,
}

/// Only the body of a comment can be edited.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommentEdit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}
