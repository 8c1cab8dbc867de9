//! Declarative field schemas.
//!
//! A schema is static metadata: field names in declaration order together with
//! the kind of value each field is expected to hold. Nothing checks assigned
//! values against it.

use std::fmt;

/// Expected value kind of a schema field.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Number,
    Timestamp,
    /// Holds a record of the named model type.
    Reference(&'static str),
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Text => f.write_str("text"),
            FieldType::Number => f.write_str("number"),
            FieldType::Timestamp => f.write_str("timestamp"),
            FieldType::Reference(target) => write!(f, "ref<{target}>"),
        }
    }
}

/// Ordered mapping of field name to [`FieldType`].
#[derive(Debug, PartialEq, Eq)]
pub struct Schema {
    fields: &'static [(&'static str, FieldType)],
}

impl Schema {
    pub const fn new(fields: &'static [(&'static str, FieldType)]) -> Self {
        Self { fields }
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &'static [(&'static str, FieldType)] {
        self.fields
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    /// Expected kind of `name`, if the schema declares it.
    pub fn get(&self, name: &str) -> Option<FieldType> {
        self.fields.iter().find(|(field, _)| *field == name).map(|(_, kind)| *kind)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
