//! Command implementations.
//!
//! - [`build`] - write the distribution layout
//! - [`check`] - verify build inputs
//! - [`schema`] - print the config JSON schema

pub mod build;
pub mod check;
pub mod schema;
pub(crate) mod utils;

pub use build::execute as build_execute;
pub use check::execute as check_execute;
pub use schema::execute as schema_execute;
