//! Gateway selection and stored connection settings.

pub mod settings;
mod types;

pub use types::CliApi;
