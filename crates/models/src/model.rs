use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::ModelError;
use crate::schema::Schema;

/// Sequential record identifier, unique within one model's store space.
pub type Id = u64;

/// A record type with a static type tag and schema.
///
/// Implementors are plain structs holding `id: Option<Id>` plus one
/// `Option<_>` per schema field, so `Default` yields a record with nothing
/// set. Serialized field names must match the schema names.
pub trait Model: Clone + Debug + Default + PartialEq + Serialize + DeserializeOwned + 'static {
    /// Store key for this model's records.
    const TYPE_NAME: &'static str;

    fn schema() -> &'static Schema;

    fn id(&self) -> Option<Id>;

    fn set_id(&mut self, id: Id);

    /// Current value of a schema field as JSON; `null` when unset.
    fn field(&self, name: &str) -> Result<serde_json::Value, ModelError> {
        if !Self::schema().contains(name) {
            return Err(ModelError::UnknownField { model: Self::TYPE_NAME, field: name.to_string() });
        }
        let mut value = serde_json::to_value(self)?;
        Ok(value.get_mut(name).map(serde_json::Value::take).unwrap_or(serde_json::Value::Null))
    }

    fn is_new(&self) -> bool {
        self.id().is_none()
    }
}
