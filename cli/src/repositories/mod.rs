//! Storage repositories
//!
//! File-backed implementations of the shared store traits.

pub mod json_store;

pub use json_store::JsonFileStore;
