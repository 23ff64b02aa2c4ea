//! The page's authoritative in-memory view and its transition functions.
//!
//! # Design
//! All mutation goes through the `begin_*` / `apply_*` functions below, each
//! of which takes the outcome of one remote call. Nothing here performs I/O,
//! so every lifecycle rule (replace on fetch, append on create, replace in
//! place on update, filter out on delete) is unit-testable on plain values.

use crate::entity::Entity;
use crate::error::ApiError;

/// Item list, loading flag, last error and form draft for one resource page.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<E> {
    pub items: Vec<E>,
    pub loading: bool,
    pub error: Option<String>,
    pub form: E,
}

impl<E: Entity> Default for ResourceState<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> ResourceState<E> {
    /// A state that has not fetched yet; it reports `loading` until the
    /// first fetch settles.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            form: E::default(),
        }
    }

    /// A settled state holding `items`.
    pub fn with_items(items: Vec<E>) -> Self {
        Self {
            items,
            loading: false,
            error: None,
            form: E::default(),
        }
    }

    pub fn get(&self, id: u64) -> Option<&E> {
        self.items.iter().find(|item| item.id() == Some(id))
    }

    /// One plus the largest identifier in the list, or 1 when the list is
    /// empty. `None` once the largest identifier is `u64::MAX`.
    pub fn next_id(&self) -> Option<u64> {
        self.items
            .iter()
            .filter_map(Entity::id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
    }

    /// Starts a new create/update/delete attempt: the previous error is
    /// dropped.
    pub fn begin(&mut self) {
        self.error = None;
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Records a failure without touching the list or the form.
    pub fn fail(&mut self, err: &ApiError) {
        self.error = Some(err.to_string());
    }

    fn failed(&mut self, err: ApiError) -> ApiError {
        self.fail(&err);
        err
    }

    /// Settles a fetch. The loading flag is cleared whatever the outcome.
    /// Returns the number of items now listed.
    pub fn apply_fetch(&mut self, result: Result<Vec<E>, ApiError>) -> Result<usize, ApiError> {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                Ok(self.items.len())
            }
            Err(err) => Err(self.failed(err)),
        }
    }

    /// Appends the server's representation stamped with a locally
    /// synthesized identifier, then clears the form. Returns the identifier
    /// assigned.
    ///
    /// The remote service does not keep what it is sent, so the identifier it
    /// returns is not trusted to be unique within the list.
    pub fn apply_create(
        &mut self,
        result: Result<E, ApiError>,
        template: &E,
    ) -> Result<u64, ApiError> {
        let created = result.map_err(|err| self.failed(err))?;
        let Some(id) = self.next_id() else {
            let err = ApiError::validation(format!("no {} id left to assign", E::KIND));
            return Err(self.failed(err));
        };
        self.items.push(created.with_id(id));
        self.form = template.clone();
        Ok(id)
    }

    /// Replaces the element whose identifier is `id` with the server's
    /// representation, then clears the form. Returns whether an element was
    /// replaced.
    pub fn apply_update(
        &mut self,
        id: u64,
        result: Result<E, ApiError>,
        template: &E,
    ) -> Result<bool, ApiError> {
        let updated = result.map_err(|err| self.failed(err))?;
        let replaced = match self.items.iter_mut().find(|item| item.id() == Some(id)) {
            Some(slot) => {
                *slot = updated.with_id(id);
                true
            }
            None => false,
        };
        self.form = template.clone();
        Ok(replaced)
    }

    /// Filters out every element whose identifier is `id`. Returns how many
    /// were removed.
    pub fn apply_delete(&mut self, id: u64, result: Result<(), ApiError>) -> Result<usize, ApiError> {
        result.map_err(|err| self.failed(err))?;
        let before = self.items.len();
        self.items.retain(|item| item.id() != Some(id));
        Ok(before - self.items.len())
    }

    /// Loads the row with identifier `id` into the form draft.
    pub fn edit(&mut self, id: u64) -> Result<(), ApiError> {
        match self.get(id) {
            Some(item) => {
                self.form = item.clone();
                Ok(())
            }
            None => Err(ApiError::validation(format!("no {} with id {id}", E::KIND))),
        }
    }

    pub fn reset_form(&mut self, template: &E) {
        self.form = template.clone();
    }
}
