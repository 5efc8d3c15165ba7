// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use async_trait::async_trait;

/// Middleware gets to see every action before the reducers do, along with a snapshot of
/// the state at that time.
///
/// If the `run()` method returns an action, it is dispatched to the reducers (and then
/// the subscribers) right away, before the original action. Return `None` to opt out.
///
/// The store's write lock is held while your middleware runs, and the
/// [`tokio::sync::RwLock`] is NOT reentrant. So don't try to dispatch from inside
/// `run()`; return the action instead.
#[async_trait]
pub trait AsyncMiddleware<S, A>
where
    S: Sync + Send,
    A: Sync + Send,
{
    async fn run(&self, action: A, state: S) -> Option<A>;

    /// <https://doc.rust-lang.org/book/ch10-02-traits.html>
    #[must_use]
    fn new() -> AsyncMiddlewareItem<S, A>
    where
        Self: Default + Sized + Sync + Send + 'static,
    {
        Box::new(Self::default())
    }
}

pub type AsyncMiddlewareItem<S, A> = Box<dyn AsyncMiddleware<S, A> + Send + Sync>;
pub type AsyncMiddlewareVec<S, A> = Vec<AsyncMiddlewareItem<S, A>>;
