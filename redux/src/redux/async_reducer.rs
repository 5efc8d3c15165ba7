// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use async_trait::async_trait;

/// A reducer maps the current state and an action to the next state. It must be pure:
/// it has no access to the store, and it must not perform any I/O.
///
/// If the action is not one that the reducer cares about, it should return a clone of
/// the state that it was given (ideally one that shares all its data with the original).
#[async_trait]
pub trait AsyncReducer<S, A>
where
    S: Sync + Send,
    A: Sync + Send,
{
    async fn run(&self, action: &A, state: &S) -> S;

    /// <https://doc.rust-lang.org/book/ch10-02-traits.html>
    #[must_use]
    fn new() -> AsyncReducerItem<S, A>
    where
        Self: Default + Sized + Sync + Send + 'static,
    {
        Box::new(Self::default())
    }
}

pub type AsyncReducerItem<S, A> = Box<dyn AsyncReducer<S, A> + Send + Sync>;
pub type AsyncReducerVec<S, A> = Vec<AsyncReducerItem<S, A>>;
