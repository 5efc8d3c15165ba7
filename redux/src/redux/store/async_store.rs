// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          sync::Arc};

use tokio::sync::RwLock;

use crate::{AsyncMiddlewareItem,
            AsyncMiddlewareVec,
            AsyncReducerItem,
            AsyncReducerVec,
            AsyncSubscriberItem,
            AsyncSubscriberVec,
            DEBUG_REDUX_MOD};

/// This is how a [Store] is shared between async tasks. The write lock is what
/// serializes dispatches: only one [`Store::dispatch_action`] can run at a time.
pub type SharedStore<S, A> = Arc<RwLock<Store<S, A>>>;

/// Thread safe and async Redux store (using [`tokio`]).
pub struct Store<S, A>
where
    S: Clone + Default + PartialEq + Debug + Sync + Send,
    A: Clone + Default + Debug + Send + Sync,
{
    state: S,
    middleware_vec: AsyncMiddlewareVec<S, A>,
    subscriber_vec: AsyncSubscriberVec<S>,
    reducer_vec: AsyncReducerVec<S, A>,
    maybe_previous_state: Option<S>,
}

impl<S, A> Default for Store<S, A>
where
    S: Clone + Default + PartialEq + Debug + Sync + Send,
    A: Clone + Default + Debug + Send + Sync,
{
    fn default() -> Store<S, A> { Self::with_state(S::default()) }
}

impl<S, A> Debug for Store<S, A>
where
    S: Clone + Default + PartialEq + Debug + Sync + Send,
    A: Clone + Default + Debug + Send + Sync,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("middleware_count", &self.middleware_vec.len())
            .field("subscriber_count", &self.subscriber_vec.len())
            .field("reducer_count", &self.reducer_vec.len())
            .finish()
    }
}

// Handle construction and subscriber, middleware, reducer management.
impl<S, A> Store<S, A>
where
    S: Clone + Default + PartialEq + Debug + Sync + Send,
    A: Clone + Default + Debug + Send + Sync,
{
    #[must_use]
    pub fn with_state(state: S) -> Store<S, A> {
        Store {
            state,
            middleware_vec: Vec::new(),
            subscriber_vec: Vec::new(),
            reducer_vec: Vec::new(),
            maybe_previous_state: None,
        }
    }

    /// Move this store behind an [Arc] and a [RwLock] so it can be shared.
    #[must_use]
    pub fn into_shared(self) -> SharedStore<S, A> { Arc::new(RwLock::new(self)) }

    pub async fn add_subscriber(
        &mut self,
        subscriber_fn: AsyncSubscriberItem<S>,
    ) -> &mut Store<S, A> {
        self.subscriber_vec.push(subscriber_fn);
        self
    }

    pub async fn clear_subscribers(&mut self) -> &mut Store<S, A> {
        self.subscriber_vec.clear();
        self
    }

    pub async fn add_middleware(
        &mut self,
        middleware_fn: AsyncMiddlewareItem<S, A>,
    ) -> &mut Store<S, A> {
        self.middleware_vec.push(middleware_fn);
        self
    }

    pub async fn clear_middlewares(&mut self) -> &mut Store<S, A> {
        self.middleware_vec.clear();
        self
    }

    pub async fn add_reducer(
        &mut self,
        reducer_fn: AsyncReducerItem<S, A>,
    ) -> &mut Store<S, A> {
        self.reducer_vec.push(reducer_fn);
        self
    }

    pub async fn clear_reducers(&mut self) -> &mut Store<S, A> {
        self.reducer_vec.clear();
        self
    }
}

// Handle dispatch.
impl<S, A> Store<S, A>
where
    S: Clone + Default + PartialEq + Debug + Sync + Send,
    A: Clone + Default + Debug + Send + Sync,
{
    #[must_use]
    pub fn get_state(&self) -> S { self.state.clone() }

    #[must_use]
    pub fn state(&self) -> &S { &self.state }

    pub async fn dispatch_action(&mut self, action: A) {
        DEBUG_REDUX_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "🚀 dispatch action", action = ?action);
        });

        // Run middlewares.
        self.middleware_runner(action.clone()).await;

        // Dispatch the action.
        self.actually_dispatch_action(&action).await;
    }

    async fn actually_dispatch_action(&mut self, action: &A) {
        self.run_reducers(action).await;
        self.run_subscribers().await;
    }

    fn has_state_changed(&self) -> bool {
        match &self.maybe_previous_state {
            Some(previous_state) => *previous_state != self.state,
            None => true,
        }
    }

    fn save_state_to_previous_state(&mut self) {
        self.maybe_previous_state = Some(self.state.clone());
    }

    /// Run these in parallel.
    async fn run_subscribers(&mut self) {
        // Early return if state hasn't changed.
        if !self.has_state_changed() {
            return;
        }

        // Update previous state, for next time.
        self.save_state_to_previous_state();

        // Actually run the subscribers.
        let mut vec_fut = vec![];
        for fun in &self.subscriber_vec {
            vec_fut.push(fun.run(self.state.clone()));
        }
        futures::future::join_all(vec_fut).await;
    }

    /// Run these in sequence.
    async fn run_reducers(&mut self, action: &A) {
        for reducer in &self.reducer_vec {
            let new_state = reducer.run(action, &self.state).await;
            self.state = new_state;
        }
    }

    /// Run concurrently (cooperatively on a single thread). Any action returned by a
    /// middleware is dispatched to the reducers and subscribers.
    async fn middleware_runner(&mut self, my_action: A) {
        let mut vec_fut = vec![];

        for item in &self.middleware_vec {
            vec_fut.push(item.run(my_action.clone(), self.state.clone()));
        }

        let vec_opt_action = futures::future::join_all(vec_fut).await;

        for action in vec_opt_action.into_iter().flatten() {
            self.actually_dispatch_action(&action).await;
        }
    }
}
