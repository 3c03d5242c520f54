//! Usecase layer: the per-invocation lifecycle + events.

pub mod command;
pub mod event;
pub mod lifecycle;
