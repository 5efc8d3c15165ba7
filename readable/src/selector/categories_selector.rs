// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::BTreeMap, sync::Arc};

use crate::{AppState, ByIdentity, Category, CategoryPath, MemoSlot};

#[derive(Debug, Default)]
pub struct CategoriesSelector {
    memo: MemoSlot<ByIdentity<BTreeMap<CategoryPath, Category>>, Vec<Category>>,
}

impl CategoriesSelector {
    /// Ordered by path.
    pub fn get_categories(&self, state: &AppState) -> Arc<Vec<Category>> {
        let key = ByIdentity(Arc::clone(&state.categories.by_path));
        self.memo
            .get_or_compute(key, |by_path| by_path.0.values().cloned().collect())
    }
}
