//! Response shapes shared by the API service and its clients.
//!
//! Every DTO derives `Validate`; use [`decode`] to go from raw bytes to a
//! checked value in one step.

pub mod health;
pub mod hello;
pub mod schema;
pub mod timestamp;

pub use health::{HealthResponse, HealthStatus};
pub use hello::{HelloResponse, HELLO_MESSAGE};
pub use schema::{decode, SchemaError};
