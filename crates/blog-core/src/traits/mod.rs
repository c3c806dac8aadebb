//! Core traits for blog gateways.

mod api;

pub use api::BlogApi;
