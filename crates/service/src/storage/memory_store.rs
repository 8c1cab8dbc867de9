use std::any::Any;
use std::collections::BTreeMap;

use models::{Id, Model};
use tracing::debug;

use crate::errors::StoreError;

/// Default capacity reserved for a freshly created space.
pub const DEFAULT_SPACE_CAPACITY: usize = 16;

/// Type-erased view of one model's record sequence.
///
/// Lets the store answer name-keyed questions (length, removal, snapshot)
/// without knowing the concrete record type.
trait Space: Any {
    fn len(&self) -> usize;
    fn remove_by_id(&mut self, id: Id) -> bool;
    fn clear(&mut self);
    fn to_json(&self) -> Result<serde_json::Value, serde_json::Error>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<M: Model> Space for Vec<M> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn remove_by_id(&mut self, id: Id) -> bool {
        match self.iter().position(|record| record.id() == Some(id)) {
            Some(index) => {
                self.remove(index);
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        Vec::clear(self)
    }

    fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// In-memory record store keyed by model type name.
///
/// Each model gets its own ordered space, created on first use. Records keep
/// insertion order; removal shifts later records down without reordering them.
pub struct Store {
    spaces: BTreeMap<&'static str, Box<dyn Space>>,
    space_capacity: usize,
}

impl Default for Store {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_SPACE_CAPACITY)
    }
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose new spaces reserve room for `space_capacity` records.
    pub fn with_capacity(space_capacity: usize) -> Self {
        Self { spaces: BTreeMap::new(), space_capacity }
    }

    /// Reserve the space for `M` if missing and return it.
    pub fn ensure_space<M: Model>(&mut self) -> Result<&mut Vec<M>, StoreError> {
        let capacity = self.space_capacity;
        let space = self.spaces.entry(M::TYPE_NAME).or_insert_with(|| {
            debug!(model = M::TYPE_NAME, capacity, "store space reserved");
            Box::new(Vec::<M>::with_capacity(capacity))
        });
        space.as_any_mut().downcast_mut::<Vec<M>>().ok_or_else(StoreError::mismatch::<M>)
    }

    /// Records of `M` in insertion order; empty when the space does not exist yet.
    pub fn space<M: Model>(&self) -> Result<&[M], StoreError> {
        match self.spaces.get(M::TYPE_NAME) {
            None => Ok(&[]),
            Some(space) => space
                .as_any()
                .downcast_ref::<Vec<M>>()
                .map(Vec::as_slice)
                .ok_or_else(StoreError::mismatch::<M>),
        }
    }

    /// Direct write access to the records of `M`.
    pub fn space_mut<M: Model>(&mut self) -> Result<&mut Vec<M>, StoreError> {
        self.ensure_space::<M>()
    }

    pub fn append<M: Model>(&mut self, record: M) -> Result<(), StoreError> {
        let space = self.ensure_space::<M>()?;
        debug!(model = M::TYPE_NAME, id = ?record.id(), position = space.len(), "record appended");
        space.push(record);
        Ok(())
    }

    /// Remove the first `M` record with the given id, checking that the space
    /// under `M::TYPE_NAME` really holds `M` records.
    pub fn remove<M: Model>(&mut self, id: Id) -> Result<bool, StoreError> {
        let removed = match self.spaces.get_mut(M::TYPE_NAME) {
            None => false,
            Some(space) => {
                let records = space.as_any_mut().downcast_mut::<Vec<M>>().ok_or_else(StoreError::mismatch::<M>)?;
                Space::remove_by_id(records, id)
            }
        };
        debug!(model = M::TYPE_NAME, id, removed, "record removed");
        Ok(removed)
    }

    /// Remove the first record in `type_name`'s space with the given id.
    /// Returns whether a record was removed.
    pub fn remove_by_id(&mut self, type_name: &str, id: Id) -> bool {
        let removed = self.spaces.get_mut(type_name).map(|space| space.remove_by_id(id)).unwrap_or(false);
        debug!(model = type_name, id, removed, "remove by id");
        removed
    }

    pub fn contains_space(&self, type_name: &str) -> bool {
        self.spaces.contains_key(type_name)
    }

    /// Number of records saved under `type_name`; 0 for an unknown name.
    pub fn len(&self, type_name: &str) -> usize {
        self.spaces.get(type_name).map(|space| space.len()).unwrap_or(0)
    }

    pub fn is_empty(&self, type_name: &str) -> bool {
        self.len(type_name) == 0
    }

    /// Names of every reserved space, sorted.
    pub fn type_names(&self) -> Vec<&'static str> {
        self.spaces.keys().copied().collect()
    }

    /// Empty one space. The space stays reserved.
    pub fn clear(&mut self, type_name: &str) {
        if let Some(space) = self.spaces.get_mut(type_name) {
            space.clear();
            debug!(model = type_name, "store space cleared");
        }
    }

    /// Empty every space.
    pub fn reset(&mut self) {
        for space in self.spaces.values_mut() {
            space.clear();
        }
        debug!(spaces = self.spaces.len(), "store reset");
    }

    /// JSON object mapping each type name to its records.
    pub fn snapshot(&self) -> Result<serde_json::Value, StoreError> {
        let mut out = serde_json::Map::new();
        for (type_name, space) in &self.spaces {
            out.insert((*type_name).to_string(), space.to_json()?);
        }
        Ok(serde_json::Value::Object(out))
    }
}
