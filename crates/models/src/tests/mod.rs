/// Construction defaults and schema declarations for every built-in model
pub mod schema_tests;

/// Field introspection through the serialized form
pub mod field_tests;
