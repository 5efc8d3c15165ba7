// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

/// Opaque token minted for each bulk fetch. It is the fence that decides whether a
/// completion may still change a slice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationId(String);

impl OperationId {
    #[must_use]
    pub fn new_random() -> Self { Self(uuid::Uuid::new_v4().simple().to_string()) }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for OperationId {
    fn from(value: &str) -> Self { Self(value.to_owned()) }
}

impl Display for OperationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.0) }
}

/// Loading metadata for one slice (posts or comments).
///
/// `id` holds the [OperationId] of the most recently started fetch. Starting a fetch
/// always takes the slot. Ending one is only accepted when it carries the id that is in
/// the slot, so a slow fetch that was superseded can't flip the flags of the one that
/// replaced it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadingState {
    pub id: Option<OperationId>,
    pub is_loading: bool,
    pub has_errored: bool,
}

impl LoadingState {
    #[must_use]
    pub fn started(id: OperationId) -> Self {
        Self {
            id: Some(id),
            is_loading: true,
            has_errored: false,
        }
    }

    #[must_use]
    pub fn finished(id: OperationId, has_errored: bool) -> Self {
        Self {
            id: Some(id),
            is_loading: false,
            has_errored,
        }
    }

    /// Fencing check for an incoming loading state transition.
    #[must_use]
    pub fn accepts(&self, incoming: &LoadingState) -> bool {
        incoming.is_loading || self.id == incoming.id
    }

    /// Is `operation_id` the fetch that currently owns this slice?
    #[must_use]
    pub fn is_current(&self, operation_id: &OperationId) -> bool {
        self.id.as_ref() == Some(operation_id)
    }
}
