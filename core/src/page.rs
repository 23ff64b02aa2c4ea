//! Per-resource page model: the list, the create/edit form and the delete
//! confirmation, driven by UI events.
//!
//! The observable mode is derived from the state rather than stored:
//! `Loading` while a fetch is outstanding, `Editing` while the form draft
//! carries an identifier, `Viewing` otherwise.

use std::sync::Arc;

use crate::actions::{CrudActions, Store};
use crate::entity::Entity;
use crate::error::ApiError;
use crate::http::Transport;
use crate::state::ResourceState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    Loading,
    Viewing,
    Editing,
}

impl PageMode {
    pub fn of<E: Entity>(state: &ResourceState<E>) -> Self {
        if state.loading {
            PageMode::Loading
        } else if state.form.id().is_some() {
            PageMode::Editing
        } else {
            PageMode::Viewing
        }
    }
}

/// What a successful submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    Created(u64),
    Updated(u64),
}

/// One resource page.
#[derive(Debug)]
pub struct Page<E, T> {
    actions: CrudActions<E, T>,
    pending_delete: Option<u64>,
}

impl<E: Entity, T: Transport> Page<E, T> {
    pub fn new(actions: CrudActions<E, T>) -> Self {
        Self {
            actions,
            pending_delete: None,
        }
    }

    /// A fresh page with its own store and the empty record as form
    /// template. Nothing is fetched until [`Page::mount`].
    pub fn open(base_url: &str, transport: Arc<T>) -> Self {
        Self::new(CrudActions::new(
            base_url,
            transport,
            Store::default(),
            E::default(),
        ))
    }

    fn store(&self) -> &Store<E> {
        self.actions.store()
    }

    pub async fn mode(&self) -> PageMode {
        self.store().state(PageMode::of::<E>).await
    }

    pub async fn snapshot(&self) -> ResourceState<E> {
        self.store().snapshot().await
    }

    pub async fn mount(&self) -> Result<usize, ApiError> {
        tracing::debug!(resource = E::RESOURCE, "mounting page");
        self.actions.fetch_all().await
    }

    pub async fn refresh(&self) -> Result<usize, ApiError> {
        self.actions.fetch_all().await
    }

    /// Loads the row `id` into the form; the next submit updates it.
    pub async fn edit(&self, id: u64) -> Result<(), ApiError> {
        self.store()
            .update(|state| state.edit(id).inspect_err(|err| state.fail(err)))
            .await
    }

    /// Discards the draft and returns to viewing.
    pub async fn cancel(&self) {
        let template = self.actions.template();
        self.store()
            .update(|state| state.reset_form(template))
            .await;
    }

    pub async fn set_field(&self, name: &str, value: &str) -> Result<(), ApiError> {
        self.store()
            .update(|state| {
                state
                    .form
                    .set_field(name, value)
                    .inspect_err(|err| state.fail(err))
            })
            .await
    }

    /// Validates the draft, then creates it, or updates it when it carries an
    /// identifier. A draft with a blank required field never reaches the
    /// network.
    pub async fn submit(&self) -> Result<Submitted, ApiError> {
        let draft = self.store().state(|state| state.form.clone()).await;
        if let Err(err) = draft.validate() {
            self.store().update(|state| state.fail(&err)).await;
            return Err(err);
        }
        match draft.id() {
            Some(id) => self.actions.update(draft).await.map(|()| Submitted::Updated(id)),
            None => self.actions.create(draft).await.map(Submitted::Created),
        }
    }

    /// First step of a delete: remembers `id` until it is confirmed or
    /// declined.
    pub fn request_delete(&mut self, id: u64) {
        self.pending_delete = Some(id);
    }

    pub fn pending_delete(&self) -> Option<u64> {
        self.pending_delete
    }

    /// Second step of a delete. Only a confirmed request reaches the
    /// network; returns the deleted identifier, if any.
    pub async fn confirm_delete(&mut self, confirmed: bool) -> Result<Option<u64>, ApiError> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(None);
        };
        if !confirmed {
            tracing::debug!(resource = E::RESOURCE, id, "delete declined");
            return Ok(None);
        }
        self.actions.delete(id).await.map(|()| Some(id))
    }
}
