//! Terminal front-end for the users/posts CRUD pages.
//!
//! Hosts the `crud-core` page models: supplies the HTTP transport, reads one
//! command per line, and renders the current page as plain text.

pub mod command;
pub mod config;
pub mod render;
pub mod shell;
pub mod transport;

pub use command::Command;
pub use config::Config;
pub use shell::Shell;
pub use transport::ReqwestTransport;
