// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::BTreeMap, sync::Arc};

use crate::{AppState, ByIdentity, Comment, CommentId, MemoSlot};

/// Loaded comments, in the order of the store's map. No filtering or sorting.
#[derive(Debug, Default)]
pub struct CommentsSelector {
    memo: MemoSlot<ByIdentity<BTreeMap<CommentId, Comment>>, Vec<Comment>>,
}

impl CommentsSelector {
    pub fn get_comments(&self, state: &AppState) -> Arc<Vec<Comment>> {
        let key = ByIdentity(Arc::clone(&state.comments.by_id));
        self.memo
            .get_or_compute(key, |by_id| by_id.0.values().cloned().collect())
    }
}
