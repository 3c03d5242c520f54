// Infrastructure layer: adapters, file I/O, serde, eventing
pub mod config;
pub mod event_ndjson;
pub mod opener;
pub mod schema_validator;
pub mod serde_json_adapter;
