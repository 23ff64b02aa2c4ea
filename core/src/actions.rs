//! The action factory: fetch-all, create, update and delete bound to one
//! resource, one transport and one page store.
//!
//! # Design
//! `CrudActions` closes over a `ResourceClient`, a shared `Transport`, the
//! page's `Store` and the empty form template. Each operation builds a
//! request, awaits the transport, parses the response and hands the outcome
//! to a `ResourceState` transition. The store lock is only taken around
//! those transitions, never across the network await, so operations may
//! overlap freely: no queueing, no deduplication, and whichever response is
//! applied last wins.
//!
//! The `spawn_*` variants detach an operation onto the tokio runtime.
//! Dropping the returned handle does not cancel the request.

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::client::ResourceClient;
use crate::entity::Entity;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::state::ResourceState;

/// Shared handle to one page's `ResourceState`.
#[derive(Debug)]
pub struct Store<E> {
    inner: Arc<RwLock<ResourceState<E>>>,
}

impl<E> Clone for Store<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: Entity> Default for Store<E> {
    fn default() -> Self {
        Self::new(ResourceState::new())
    }
}

impl<E: Entity> Store<E> {
    pub fn new(state: ResourceState<E>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    /// Reads from the current state.
    pub async fn state<R>(&self, f: impl FnOnce(&ResourceState<E>) -> R) -> R {
        f(&*self.inner.read().await)
    }

    /// Applies one transition to the state.
    pub async fn update<R>(&self, f: impl FnOnce(&mut ResourceState<E>) -> R) -> R {
        f(&mut *self.inner.write().await)
    }

    pub async fn snapshot(&self) -> ResourceState<E> {
        self.inner.read().await.clone()
    }
}

/// Fetch/create/update/delete for the `E::RESOURCE` collection.
#[derive(Debug)]
pub struct CrudActions<E, T> {
    client: ResourceClient<E>,
    transport: Arc<T>,
    store: Store<E>,
    template: E,
}

impl<E: Entity, T> Clone for CrudActions<E, T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            transport: Arc::clone(&self.transport),
            store: self.store.clone(),
            template: self.template.clone(),
        }
    }
}

impl<E: Entity, T: Transport> CrudActions<E, T> {
    /// `template` is the value the form is reset to after a successful
    /// create or update.
    pub fn new(base_url: &str, transport: Arc<T>, store: Store<E>, template: E) -> Self {
        Self {
            client: ResourceClient::new(base_url),
            transport,
            store,
            template,
        }
    }

    pub fn store(&self) -> &Store<E> {
        &self.store
    }

    pub fn template(&self) -> &E {
        &self.template
    }

    async fn round_trip(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method.as_str();
        let path = request.path.clone();
        tracing::debug!(method, %path, "sending request");
        let response = self.transport.execute(request).await;
        match &response {
            Ok(response) => tracing::debug!(method, %path, status = response.status, "response received"),
            Err(err) => tracing::debug!(method, %path, error = %err, "no response"),
        }
        response
    }

    async fn send(&self, request: Result<HttpRequest, ApiError>) -> Result<HttpResponse, ApiError> {
        self.round_trip(request?).await
    }

    /// Replaces the list with the server's collection. The loading flag is
    /// set for the duration of the call whatever the outcome. Returns the
    /// number of items fetched.
    pub async fn fetch_all(&self) -> Result<usize, ApiError> {
        self.store.update(ResourceState::begin_fetch).await;
        let result = self
            .send(Ok(self.client.build_list()))
            .await
            .and_then(|response| self.client.parse_list(response));
        let outcome = self.store.update(|state| state.apply_fetch(result)).await;
        match &outcome {
            Ok(count) => tracing::info!(resource = E::RESOURCE, count, "fetched"),
            Err(err) => tracing::warn!(resource = E::RESOURCE, error = %err, "fetch failed"),
        }
        outcome
    }

    /// Posts `item`, appends the server's representation under a freshly
    /// synthesized identifier and clears the form. Returns that identifier.
    pub async fn create(&self, item: E) -> Result<u64, ApiError> {
        self.store.update(ResourceState::begin).await;
        let result = self
            .send(self.client.build_create(&item))
            .await
            .and_then(|response| self.client.parse_create(response));
        let outcome = self
            .store
            .update(|state| state.apply_create(result, &self.template))
            .await;
        match &outcome {
            Ok(id) => tracing::info!(resource = E::RESOURCE, id, "created"),
            Err(err) => tracing::warn!(resource = E::RESOURCE, error = %err, "create failed"),
        }
        outcome
    }

    /// Puts `item` and replaces the matching row with the server's
    /// representation. An item without an identifier fails locally and no
    /// request is sent.
    pub async fn update(&self, item: E) -> Result<(), ApiError> {
        let Some(id) = item.id() else {
            let err = ApiError::validation(format!("cannot update a {} without an id", E::KIND));
            self.store.update(|state| state.fail(&err)).await;
            return Err(err);
        };
        self.store.update(ResourceState::begin).await;
        let result = self
            .send(self.client.build_update(id, &item))
            .await
            .and_then(|response| self.client.parse_update(response));
        let outcome = self
            .store
            .update(|state| state.apply_update(id, result, &self.template))
            .await;
        match &outcome {
            Ok(replaced) => tracing::info!(resource = E::RESOURCE, id, replaced, "updated"),
            Err(err) => tracing::warn!(resource = E::RESOURCE, id, error = %err, "update failed"),
        }
        outcome.map(|_| ())
    }

    /// Deletes `id` remotely, then filters it out of the list.
    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.store.update(ResourceState::begin).await;
        let result = self
            .send(Ok(self.client.build_delete(id)))
            .await
            .and_then(|response| self.client.parse_delete(response));
        let outcome = self
            .store
            .update(|state| state.apply_delete(id, result))
            .await;
        match &outcome {
            Ok(removed) => tracing::info!(resource = E::RESOURCE, id, removed, "deleted"),
            Err(err) => tracing::warn!(resource = E::RESOURCE, id, error = %err, "delete failed"),
        }
        outcome.map(|_| ())
    }

    pub fn spawn_fetch_all(&self) -> JoinHandle<Result<usize, ApiError>> {
        let this = self.clone();
        tokio::spawn(async move { this.fetch_all().await })
    }

    pub fn spawn_create(&self, item: E) -> JoinHandle<Result<u64, ApiError>> {
        let this = self.clone();
        tokio::spawn(async move { this.create(item).await })
    }

    pub fn spawn_update(&self, item: E) -> JoinHandle<Result<(), ApiError>> {
        let this = self.clone();
        tokio::spawn(async move { this.update(item).await })
    }

    pub fn spawn_delete(&self, id: u64) -> JoinHandle<Result<(), ApiError>> {
        let this = self.clone();
        tokio::spawn(async move { this.delete(id).await })
    }
}
