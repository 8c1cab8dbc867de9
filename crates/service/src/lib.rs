//! Service layer persisting model records in memory.
//! - `storage::Store` holds one ordered space per model type.
//! - `repository::Persist` gives every `models::Model` create/save/find/destroy.
//! - Errors are reported as `errors::StoreError`.

pub mod errors;
pub mod storage;
pub mod repository;

pub use errors::StoreError;
pub use repository::Persist;
pub use storage::Store;
