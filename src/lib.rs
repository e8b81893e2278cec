//! User CRUD service backed by Neo4j.
//!
//! ## Structure
//!
//! - `domain` - The user entity and request payload
//! - `infrastructure` - Repository port and Neo4j adapter
//! - `api` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;

pub use app::App;
