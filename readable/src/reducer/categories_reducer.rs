// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use crate::{Action, CategoriesAction, CategoriesState};

#[must_use]
pub fn reduce_categories(
    state: &Arc<CategoriesState>,
    action: &Action,
) -> Arc<CategoriesState> {
    let Action::Categories(categories_action) = action else {
        return Arc::clone(state);
    };

    match categories_action {
        CategoriesAction::Set(categories) => Arc::new(CategoriesState {
            by_path: Arc::new(
                categories
                    .iter()
                    .map(|it| (it.path.clone(), it.clone()))
                    .collect(),
            ),
            ..CategoriesState::clone(state)
        }),
        CategoriesAction::SetLoadingState(is_loading) if state.is_loading != *is_loading => {
            Arc::new(CategoriesState {
                is_loading: *is_loading,
                ..CategoriesState::clone(state)
            })
        }
        CategoriesAction::SetLoadError(has_errored) if state.has_errored != *has_errored => {
            Arc::new(CategoriesState {
                has_errored: *has_errored,
                ..CategoriesState::clone(state)
            })
        }
        CategoriesAction::SetActive(active) if state.active != *active => {
            Arc::new(CategoriesState {
                active: active.clone(),
                ..CategoriesState::clone(state)
            })
        }
        _ => Arc::clone(state),
    }
}
