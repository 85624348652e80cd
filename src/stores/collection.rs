use crate::core::error::{PanelError, StoreError};
use crate::stores::local_store::LocalStore;
use crate::utils::search::matches_any;
use crate::utils::time::IdGenerator;
use crate::validation::forms::Validate;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// A record kept in a persisted [`Collection`]
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync {
    /// Form payload the record is built from, everything but the id
    type Draft: Validate;

    fn id(&self) -> &str;

    fn from_draft(id: String, draft: Self::Draft) -> Self;

    /// Fields matched by [`Collection::search`]
    fn search_fields(&self) -> Vec<&str>;
}

/// Ordered, append/delete-only list of records mirrored to one store key.
///
/// The whole list is re-encoded and written after every mutation.
pub struct Collection<T: Record> {
    key: &'static str,
    items: RwLock<Vec<T>>,
    store: Arc<LocalStore>,
    ids: Arc<IdGenerator>,
}

impl<T: Record> Collection<T> {
    /// Load the list stored under `key`.
    ///
    /// An absent key is initialized with `seed`. An unreadable value is
    /// left on disk untouched and the seed is served until the next write.
    pub fn load(
        store: Arc<LocalStore>,
        ids: Arc<IdGenerator>,
        key: &'static str,
        seed: Vec<T>,
    ) -> Result<Self, StoreError> {
        let items = match store.get_json::<Vec<T>>(key) {
            Ok(Some(items)) => items,
            Ok(None) => {
                store.set_json(key, &seed)?;
                debug!(key, records = seed.len(), "Collection seeded");
                seed
            }
            Err(e) => {
                warn!(key, error = %e, "Stored collection is unreadable, using defaults");
                seed
            }
        };

        Ok(Self {
            key,
            items: RwLock::new(items),
            store,
            ids,
        })
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn list(&self) -> Result<Vec<T>, StoreError> {
        let items = self.items.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(items.clone())
    }

    pub fn get(&self, id: &str) -> Result<Option<T>, StoreError> {
        let items = self.items.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(items.iter().find(|item| item.id() == id).cloned())
    }

    /// Records whose search fields contain `term`, case-insensitively, in list order
    pub fn search(&self, term: &str) -> Result<Vec<T>, StoreError> {
        let items = self.items.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(items
            .iter()
            .filter(|item| matches_any(term, &item.search_fields()))
            .cloned()
            .collect())
    }

    /// Validate `draft`, give it a fresh id and append it
    pub fn add(&self, draft: T::Draft) -> Result<T, PanelError> {
        draft.validate()?;

        let mut items = self.items.write().map_err(|_| StoreError::LockPoisoned)?;
        let record = T::from_draft(self.ids.next_id(), draft);
        items.push(record.clone());

        if let Err(e) = self.store.set_json(self.key, &*items) {
            items.pop();
            return Err(e.into());
        }

        Ok(record)
    }

    /// Remove the first record with `id`. Absent ids are a no-op.
    pub fn remove(&self, id: &str) -> Result<Option<T>, StoreError> {
        let mut items = self.items.write().map_err(|_| StoreError::LockPoisoned)?;

        let Some(index) = items.iter().position(|item| item.id() == id) else {
            return Ok(None);
        };

        let removed = items.remove(index);
        if let Err(e) = self.store.set_json(self.key, &*items) {
            items.insert(index, removed);
            return Err(e);
        }

        Ok(Some(removed))
    }

    pub fn len(&self) -> usize {
        self.items
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ValidationError;
    use crate::validation::forms::require;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: String,
        title: String,
    }

    struct NoteDraft {
        title: String,
    }

    impl Validate for NoteDraft {
        fn validate(&self) -> Result<(), ValidationError> {
            require("title", &self.title)
        }
    }

    impl Record for Note {
        type Draft = NoteDraft;

        fn id(&self) -> &str {
            &self.id
        }

        fn from_draft(id: String, draft: NoteDraft) -> Self {
            Note { id, title: draft.title }
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.title.as_str()]
        }
    }

    fn note(id: &str, title: &str) -> Note {
        Note { id: id.to_string(), title: title.to_string() }
    }

    fn open(dir: &TempDir, seed: Vec<Note>) -> Collection<Note> {
        let store = Arc::new(LocalStore::open(dir.path().join("store.json")).unwrap());
        Collection::load(store, Arc::new(IdGenerator::new()), "notes", seed).unwrap()
    }

    #[test]
    fn test_absent_key_is_seeded_and_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let notes = open(&temp_dir, vec![note("1", "first")]);

        assert_eq!(notes.len(), 1);
        assert!(notes.store.contains("notes"));
    }

    #[test]
    fn test_add_appends_with_generated_id() {
        let temp_dir = TempDir::new().unwrap();
        let notes = open(&temp_dir, vec![note("1", "first")]);

        let added = notes.add(NoteDraft { title: "second".to_string() }).unwrap();

        assert_eq!(notes.len(), 2);
        assert_eq!(notes.get(&added.id).unwrap(), Some(added.clone()));
        assert_eq!(notes.list().unwrap().last(), Some(&added));
    }

    #[test]
    fn test_invalid_draft_does_not_mutate() {
        let temp_dir = TempDir::new().unwrap();
        let notes = open(&temp_dir, vec![]);

        let err = notes.add(NoteDraft { title: " ".to_string() }).unwrap_err();
        assert!(matches!(err, PanelError::Validation(ValidationError::MissingField("title"))));
        assert!(notes.is_empty());
    }

    #[test]
    fn test_remove_present_and_absent() {
        let temp_dir = TempDir::new().unwrap();
        let notes = open(&temp_dir, vec![note("1", "a"), note("2", "b")]);

        assert_eq!(notes.remove("1").unwrap(), Some(note("1", "a")));
        assert_eq!(notes.len(), 1);

        assert_eq!(notes.remove("missing").unwrap(), None);
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn test_remove_takes_first_match_only() {
        let temp_dir = TempDir::new().unwrap();
        let notes = open(&temp_dir, vec![note("7", "a"), note("7", "b")]);

        notes.remove("7").unwrap();
        assert_eq!(notes.list().unwrap(), vec![note("7", "b")]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let temp_dir = TempDir::new().unwrap();
        let notes = open(&temp_dir, vec![note("1", "Alpha"), note("2", "Beta"), note("3", "alphabet")]);

        let hits = notes.search("ALPHA").unwrap();
        assert_eq!(hits, vec![note("1", "Alpha"), note("3", "alphabet")]);
        assert_eq!(notes.search("").unwrap().len(), 3);
    }

    #[test]
    fn test_reload_yields_same_order() {
        let temp_dir = TempDir::new().unwrap();
        let before = {
            let notes = open(&temp_dir, vec![note("1", "a")]);
            notes.add(NoteDraft { title: "b".to_string() }).unwrap();
            notes.add(NoteDraft { title: "c".to_string() }).unwrap();
            notes.remove("1").unwrap();
            notes.list().unwrap()
        };

        let notes = open(&temp_dir, vec![note("seed", "ignored")]);
        assert_eq!(notes.list().unwrap(), before);
    }

    #[test]
    fn test_unreadable_value_falls_back_to_seed() {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(LocalStore::open(temp_dir.path().join("store.json")).unwrap());
        store.set("notes", "[{").unwrap();

        let notes: Collection<Note> =
            Collection::load(Arc::clone(&store), Arc::new(IdGenerator::new()), "notes", vec![note("1", "a")]).unwrap();

        assert_eq!(notes.list().unwrap(), vec![note("1", "a")]);
        assert_eq!(store.get("notes").as_deref(), Some("[{"));
    }

    #[test]
    fn test_failed_add_is_not_persisted_later() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        let notes = open(&temp_dir, vec![note("1", "a")]);

        let blocker = path.with_extension("json.tmp");
        std::fs::create_dir(&blocker).unwrap();
        assert!(notes.add(NoteDraft { title: "ghost".to_string() }).is_err());
        assert_eq!(notes.len(), 1);
        std::fs::remove_dir(&blocker).unwrap();

        notes.store.set("other", "x").unwrap();

        let reopened = open(&temp_dir, vec![]);
        assert_eq!(reopened.list().unwrap(), vec![note("1", "a")]);
    }

    #[test]
    fn test_len_survives_poisoned_lock() {
        let temp_dir = TempDir::new().unwrap();
        let notes = Arc::new(open(&temp_dir, vec![note("1", "a"), note("2", "b")]));

        let poisoner = Arc::clone(&notes);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.items.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(notes.items.is_poisoned());
        assert_eq!(notes.len(), 2);
    }
}
