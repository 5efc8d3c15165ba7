// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use async_trait::async_trait;

#[async_trait]
pub trait AsyncSubscriber<S>
where
    S: Sync + Send,
{
    async fn run(&self, state: S);

    /// <https://doc.rust-lang.org/book/ch10-02-traits.html>
    #[must_use]
    fn new() -> AsyncSubscriberItem<S>
    where
        Self: Default + Sized + Sync + Send + 'static,
    {
        Box::new(Self::default())
    }
}

pub type AsyncSubscriberItem<S> = Box<dyn AsyncSubscriber<S> + Send + Sync>;
pub type AsyncSubscriberVec<S> = Vec<AsyncSubscriberItem<S>>;
