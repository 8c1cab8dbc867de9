use models::{Id, Model};
use tracing::debug;

use crate::errors::StoreError;
use crate::storage::Store;

/// Persistence behaviour shared by every model.
///
/// Implemented for all `M: Model`, so declaring a model is enough to make it
/// creatable, savable, findable and destroyable against a [`Store`].
pub trait Persist: Model {
    /// Blank record of this type; reserves the type's space in `store`.
    fn create(store: &mut Store) -> Result<Self, StoreError> {
        store.ensure_space::<Self>()?;
        Ok(Self::default())
    }

    /// Highest saved id plus one, or 1 for an empty space.
    fn next_id(store: &Store) -> Result<Id, StoreError> {
        let max = store.space::<Self>()?.iter().filter_map(|record| record.id()).max();
        Ok(max.map_or(1, |id| id + 1))
    }

    /// First saved record with `id`.
    fn find(store: &Store, id: Id) -> Result<Option<&Self>, StoreError> {
        Ok(store.space::<Self>()?.iter().find(|record| record.id() == Some(id)))
    }

    /// Saved records in insertion order.
    fn all(store: &Store) -> Result<&[Self], StoreError> {
        store.space::<Self>()
    }

    /// Assign the next id and append a copy of this record.
    ///
    /// A record that already has an id is left alone: nothing is appended and
    /// the stored copy is not updated.
    fn save(&mut self, store: &mut Store) -> Result<Id, StoreError> {
        if let Some(id) = self.id() {
            debug!(model = Self::TYPE_NAME, id, "save skipped, record already persisted");
            return Ok(id);
        }
        let id = Self::next_id(store)?;
        let mut stored = self.clone();
        stored.set_id(id);
        store.append(stored)?;
        self.set_id(id);
        debug!(model = Self::TYPE_NAME, id, "record saved");
        Ok(id)
    }

    /// Remove this record's stored copy. Returns whether anything was removed.
    fn destroy(&self, store: &mut Store) -> Result<bool, StoreError> {
        match self.id() {
            Some(id) => store.remove::<Self>(id),
            None => Ok(false),
        }
    }
}

impl<M: Model> Persist for M {}

#[cfg(test)]
mod tests {
    use super::*;
    use models::user::User;

    fn named(name: &str) -> User {
        User { username: Some(name.into()), ..Default::default() }
    }

    #[test]
    fn next_id_starts_at_one() -> Result<(), anyhow::Error> {
        let store = Store::new();
        assert_eq!(User::next_id(&store)?, 1);
        Ok(())
    }

    #[test]
    fn next_id_follows_max_not_length() -> Result<(), anyhow::Error> {
        let mut store = Store::new();
        store.space_mut::<User>()?.push(User { id: Some(9), ..Default::default() });
        store.space_mut::<User>()?.push(User { id: Some(4), ..Default::default() });
        assert_eq!(User::next_id(&store)?, 10);
        Ok(())
    }

    #[test]
    fn create_reserves_space() -> Result<(), anyhow::Error> {
        let mut store = Store::new();
        let user = User::create(&mut store)?;
        assert_eq!(user, User::default());
        assert!(store.contains_space("User"));
        assert!(User::all(&store)?.is_empty());
        Ok(())
    }

    #[test]
    fn save_assigns_sequential_ids() -> Result<(), anyhow::Error> {
        let mut store = Store::new();
        let mut a = named("a");
        let mut b = named("b");
        assert_eq!(a.save(&mut store)?, 1);
        assert_eq!(b.save(&mut store)?, 2);
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
        assert_eq!(User::next_id(&store)?, 3);
        Ok(())
    }

    #[test]
    fn resave_is_noop() -> Result<(), anyhow::Error> {
        let mut store = Store::new();
        let mut a = named("a");
        a.save(&mut store)?;

        a.username = Some("renamed".into());
        assert_eq!(a.save(&mut store)?, 1);
        assert_eq!(store.len("User"), 1);
        assert_eq!(User::find(&store, 1)?.and_then(|u| u.username.as_deref()), Some("a"));
        Ok(())
    }

    #[test]
    fn destroy_unsaved_record_does_nothing() -> Result<(), anyhow::Error> {
        let mut store = Store::new();
        let mut saved = named("saved");
        saved.save(&mut store)?;

        assert!(!named("unsaved").destroy(&mut store)?);
        assert_eq!(store.len("User"), 1);
        Ok(())
    }

    #[test]
    fn destroying_max_id_frees_it() -> Result<(), anyhow::Error> {
        let mut store = Store::new();
        let mut a = named("a");
        let mut b = named("b");
        a.save(&mut store)?;
        b.save(&mut store)?;

        assert!(b.destroy(&mut store)?);
        // b keeps its in-memory state after destroy
        assert_eq!(b.id, Some(2));
        assert_eq!(User::next_id(&store)?, 2);
        Ok(())
    }
}
