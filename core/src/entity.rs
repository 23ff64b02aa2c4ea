//! The record shape the generic client, state and page layers work over.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

/// A closed, per-resource record type with an optional server-assigned
/// identifier.
///
/// `Default` is the empty form template: no identifier, blank fields.
pub trait Entity:
    Clone + Debug + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Path segment of the resource collection, e.g. `users`.
    const RESOURCE: &'static str;

    /// Singular label used in messages, e.g. `user`.
    const KIND: &'static str;

    /// Editable fields, in form order.
    const FIELDS: &'static [&'static str];

    /// The identifier, if one has been assigned. Zero counts as unassigned.
    fn id(&self) -> Option<u64>;

    /// Returns the record stamped with `id`.
    fn with_id(self, id: u64) -> Self;

    /// Current value of a form field as text, `None` for unknown names.
    fn field(&self, name: &str) -> Option<String>;

    /// Sets a form field from text input.
    fn set_field(&mut self, name: &str, value: &str) -> Result<(), ApiError>;

    /// Text fields that must be non-blank before submit, with their values.
    fn required_fields(&self) -> Vec<(&'static str, &str)>;

    /// Rejects the record when a required field is empty or whitespace-only.
    fn validate(&self) -> Result<(), ApiError> {
        match self
            .required_fields()
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            Some((name, _)) => Err(ApiError::validation(format!("{name} is required"))),
            None => Ok(()),
        }
    }
}

pub(crate) fn unknown_field<E: Entity>(name: &str) -> ApiError {
    ApiError::validation(format!(
        "unknown {} field '{name}' (expected one of: {})",
        E::KIND,
        E::FIELDS.join(", ")
    ))
}
