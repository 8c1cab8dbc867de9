//! Record types and their declarative schemas.
//! - `Model` ties a record struct to its type tag and schema.
//! - `user`, `account`, `message`, `location` are the built-in models.
//! - Persistence lives in the `service` crate.

pub mod errors;
pub mod schema;
pub mod model;
pub mod user;
pub mod account;
pub mod message;
pub mod location;

pub use model::{Id, Model};
pub use schema::{FieldType, Schema};

#[cfg(test)]
mod tests;
