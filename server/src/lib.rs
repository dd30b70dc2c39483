//! gridpath-server: the HTTP front end for a single shared [`Board`].
//!
//! The service owns exactly one board behind one lock. Every route takes the
//! lock for the whole operation, so a search never observes a half-applied
//! mutation and concurrent clients see last-writer-wins semantics.
//!
//! [`Board`]: gridpath_board::Board

pub mod config;
pub mod routes;
pub mod service;

pub use config::{ConfigError, ServerConfig, parse_options};
pub use routes::router;
pub use service::{CellUpdate, GridService};
