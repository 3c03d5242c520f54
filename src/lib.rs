//! `bit`: a bookmark manager over a flat JSON file.
//!
//! Layers:
//! - domain: bookmarks, the owning store, error taxonomy, ports
//! - usecase: the load-mutate-persist lifecycle + progress events
//! - infrastructure: serde + file IO, schema validation, opener, config
//! - interface: CLI wiring

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
