//! Client core for the users/posts CRUD front-end.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). A host supplies a
//! [`Transport`] that performs the round-trip; everything above it, from the
//! action factory to the page model, is deterministic and testable with a
//! scripted transport.
//!
//! # Layout
//! - `entity` / `types`: the closed record types (`User`, `Post`) and the
//!   `Entity` trait the generic layers are parameterized over.
//! - `client`: per-resource `build_*` / `parse_*` pairs.
//! - `state`: the page's in-memory view and its transition functions.
//! - `actions`: the action factory binding client, transport and state.
//! - `page`: the Loading / Viewing / Editing page model.
//! - `router`: the static routing table.

pub mod actions;
pub mod client;
pub mod entity;
pub mod error;
pub mod http;
pub mod page;
pub mod router;
pub mod state;
pub mod types;

pub use actions::{CrudActions, Store};
pub use client::ResourceClient;
pub use entity::Entity;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use page::{Page, PageMode, Submitted};
pub use router::Route;
pub use state::ResourceState;
pub use types::{Post, User};
