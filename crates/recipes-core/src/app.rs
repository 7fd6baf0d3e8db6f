//! Root application state
//!
//! [`RecipeBook`] owns the recipe collection together with the UI state that
//! acts on it: the search query, the selected recipe and the open modal.
//! Every mutation of the collection is mirrored to the store before the call
//! returns.

use crate::error::{RecipeError, Result};
use crate::models::{timestamp_now, Recipe, RecipeDraft, RecipeId};
use crate::search;
use crate::storage::{self, KeyValueStore, STORAGE_KEY};

/// The dialog currently shown. Only one can be open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    /// No dialog, just the grid
    #[default]
    None,
    /// Read-only detail of the selected recipe
    View,
    /// Empty form for a new recipe
    Create,
    /// Pre-filled form for the selected recipe
    Edit,
    /// Confirmation before deleting the selected recipe
    DeleteConfirm,
}

impl Modal {
    pub fn is_open(self) -> bool {
        self != Modal::None
    }
}

pub struct RecipeBook<S: KeyValueStore> {
    store: S,
    key: String,
    recipes: Vec<Recipe>,
    search: String,
    selected: Option<RecipeId>,
    modal: Modal,
}

impl<S: KeyValueStore> RecipeBook<S> {
    /// Load the collection from the default slot, seeding it if needed
    pub fn open(store: S) -> Self {
        Self::open_with_key(store, STORAGE_KEY)
    }

    /// Load the collection from `key`, seeding it if needed
    pub fn open_with_key(mut store: S, key: &str) -> Self {
        let recipes = storage::load_recipes(&mut store, key);
        Self {
            store,
            key: key.to_string(),
            recipes,
            search: String::new(),
            selected: None,
            modal: Modal::None,
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| &r.id == id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    // === Search ===

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Recipes matching the current search, in collection order
    pub fn filtered(&self) -> Vec<&Recipe> {
        search::filter_recipes(&self.recipes, &self.search)
    }

    // === Selection and modal state ===

    pub fn modal(&self) -> Modal {
        self.modal
    }

    /// The selected recipe as currently stored in the collection
    pub fn selected(&self) -> Option<&Recipe> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    pub fn open_create(&mut self) {
        self.modal = Modal::Create;
    }

    pub fn open_view(&mut self, id: &RecipeId) -> Result<&Recipe> {
        if self.get(id).is_none() {
            return Err(RecipeError::NotFound(id.clone()));
        }
        self.selected = Some(id.clone());
        self.modal = Modal::View;
        self.require_selected()
    }

    pub fn open_edit(&mut self) -> Result<()> {
        self.require_selected()?;
        self.modal = Modal::Edit;
        Ok(())
    }

    pub fn open_delete(&mut self) -> Result<()> {
        self.require_selected()?;
        self.modal = Modal::DeleteConfirm;
        Ok(())
    }

    /// Leave the edit form or delete confirmation without changes
    pub fn back_to_view(&mut self) {
        self.modal = if self.selected().is_some() {
            Modal::View
        } else {
            Modal::None
        };
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::None;
    }

    // === Mutations ===

    /// Create a recipe from the form and show it.
    ///
    /// The new recipe is placed first. An invalid draft leaves the collection
    /// and the modal untouched.
    pub fn save_new(&mut self, draft: RecipeDraft) -> Result<&Recipe> {
        let recipe = draft.into_recipe(None, timestamp_now())?;
        let id = recipe.id.clone();
        self.recipes.insert(0, recipe);
        self.persist();

        self.selected = Some(id);
        self.modal = Modal::View;
        self.require_selected()
    }

    /// Replace the selected recipe with the edited form and show it
    pub fn save_edit(&mut self, draft: RecipeDraft) -> Result<&Recipe> {
        let index = self.selected_index()?;
        let recipe = draft.into_recipe(Some(&self.recipes[index]), timestamp_now())?;
        self.recipes[index] = recipe;
        self.persist();

        self.modal = Modal::View;
        self.require_selected()
    }

    /// Remove the selected recipe and close the dialog
    pub fn confirm_delete(&mut self) -> Result<Recipe> {
        let index = self.selected_index()?;
        let removed = self.recipes.remove(index);
        self.persist();

        self.selected = None;
        self.modal = Modal::None;
        Ok(removed)
    }

    fn require_selected(&self) -> Result<&Recipe> {
        self.selected().ok_or(RecipeError::NoSelection)
    }

    fn selected_index(&self) -> Result<usize> {
        let id = self.selected.as_ref().ok_or(RecipeError::NoSelection)?;
        self.recipes
            .iter()
            .position(|r| &r.id == id)
            .ok_or(RecipeError::NoSelection)
    }

    fn persist(&mut self) {
        if let Err(e) = storage::save_recipes(&mut self.store, &self.key, &self.recipes) {
            log::warn!("Failed to persist recipes: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Recipe;
    use crate::storage::MemoryStore;
    use chrono::{TimeZone, Utc};

    fn persisted(book: &RecipeBook<MemoryStore>) -> Vec<Recipe> {
        let raw = book.store().get(STORAGE_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    fn draft(name: &str) -> RecipeDraft {
        RecipeDraft {
            name: name.to_string(),
            description: "Quick weeknight dinner".to_string(),
            ingredients: "Rice\nEggs".to_string(),
            steps: "Fry rice\nAdd eggs".to_string(),
            tags: "Dinner, Quick".to_string(),
            ..Default::default()
        }
    }

    fn old_recipe() -> Recipe {
        let created = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        Recipe {
            id: RecipeId::from("old0001"),
            name: "Old Soup".to_string(),
            description: String::new(),
            ingredients: vec!["Water".to_string()],
            steps: vec!["Boil".to_string()],
            image: None,
            tags: vec![],
            created_at: created,
            updated_at: created,
        }
    }

    /// Store that serves a fixed slot but rejects every write
    struct ReadOnlyStore {
        slot: Option<String>,
    }

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(self.slot.clone())
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(RecipeError::Storage("quota exceeded".to_string()))
        }
    }

    fn book_with(recipes: &[Recipe]) -> RecipeBook<MemoryStore> {
        let json = serde_json::to_string(recipes).unwrap();
        RecipeBook::open(MemoryStore::with_slot(STORAGE_KEY, &json))
    }

    #[test]
    fn test_open_fresh_store_seeds() {
        let book = RecipeBook::open(MemoryStore::new());

        assert_eq!(book.recipes().len(), 2);
        assert_eq!(book.modal(), Modal::None);
        assert!(book.selected().is_none());
        assert_eq!(persisted(&book), book.recipes());
    }

    #[test]
    fn test_save_new_adds_first_and_persists() {
        let mut book = RecipeBook::open(MemoryStore::new());
        book.open_create();
        assert_eq!(book.modal(), Modal::Create);

        let id = book.save_new(draft("Fried Rice")).unwrap().id.clone();

        assert_eq!(book.recipes().len(), 3);
        assert_eq!(book.recipes()[0].id, id);
        assert_eq!(book.modal(), Modal::View);
        assert_eq!(book.selected().map(|r| r.name.as_str()), Some("Fried Rice"));
        assert_eq!(persisted(&book), book.recipes());
    }

    #[test]
    fn test_save_new_empty_name_rejected() {
        let mut book = RecipeBook::open(MemoryStore::new());
        let before = book.recipes().to_vec();
        book.open_create();

        let result = book.save_new(draft("  "));

        assert!(matches!(result, Err(RecipeError::EmptyName)));
        assert_eq!(book.recipes(), before.as_slice());
        assert_eq!(persisted(&book), before);
        assert_eq!(book.modal(), Modal::Create);
    }

    #[test]
    fn test_save_edit_preserves_identity() {
        let original = old_recipe();
        let mut book = book_with(&[original.clone()]);
        book.open_view(&original.id).unwrap();
        book.open_edit().unwrap();

        let mut edit = RecipeDraft::from_recipe(&original);
        edit.name = "New Soup".to_string();
        edit.tags = "Warm".to_string();
        let saved = book.save_edit(edit).unwrap().clone();

        assert_eq!(saved.id, original.id);
        assert_eq!(saved.created_at, original.created_at);
        assert!(saved.updated_at > original.updated_at);
        assert_eq!(saved.name, "New Soup");
        assert_eq!(saved.tags, vec!["Warm"]);
        assert_eq!(book.recipes().len(), 1);
        assert_eq!(book.modal(), Modal::View);
        assert_eq!(book.selected(), Some(&saved));
        assert_eq!(persisted(&book), vec![saved]);
    }

    #[test]
    fn test_save_edit_replaces_in_place() {
        let mut first = old_recipe();
        first.id = RecipeId::from("first");
        let middle = old_recipe();
        let mut last = old_recipe();
        last.id = RecipeId::from("last");
        let mut book = book_with(&[first.clone(), middle.clone(), last.clone()]);
        book.open_view(&middle.id).unwrap();
        book.open_edit().unwrap();

        let mut edit = RecipeDraft::from_recipe(&middle);
        edit.name = "Middle Soup".to_string();
        book.save_edit(edit).unwrap();

        let ids: Vec<_> = book.recipes().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "old0001", "last"]);
        assert_eq!(book.recipes()[1].name, "Middle Soup");
        assert_eq!(book.recipes()[0], first);
        assert_eq!(book.recipes()[2], last);
        assert_eq!(persisted(&book), book.recipes());
    }

    #[test]
    fn test_write_failures_do_not_fail_mutations() {
        let slot = serde_json::to_string(&[old_recipe()]).unwrap();
        let mut book = RecipeBook::open(ReadOnlyStore { slot: Some(slot) });

        book.open_create();
        let id = book.save_new(draft("Fried Rice")).unwrap().id.clone();
        assert_eq!(book.recipes().len(), 2);
        assert_eq!(book.modal(), Modal::View);

        book.open_edit().unwrap();
        let saved = book.save_edit(draft("Egg Fried Rice")).unwrap();
        assert_eq!(saved.id, id);
        assert_eq!(saved.name, "Egg Fried Rice");

        book.open_delete().unwrap();
        let removed = book.confirm_delete().unwrap();
        assert_eq!(removed.id, id);
        assert_eq!(book.recipes(), &[old_recipe()]);
        assert_eq!(book.modal(), Modal::None);
    }

    #[test]
    fn test_seed_survives_failed_write() {
        let book = RecipeBook::open(ReadOnlyStore { slot: None });

        assert_eq!(book.recipes().len(), 2);
    }

    #[test]
    fn test_save_edit_empty_name_keeps_original() {
        let original = old_recipe();
        let mut book = book_with(&[original.clone()]);
        book.open_view(&original.id).unwrap();
        book.open_edit().unwrap();

        assert!(book.save_edit(draft("")).is_err());
        assert_eq!(book.recipes(), &[original]);
        assert_eq!(book.modal(), Modal::Edit);
    }

    #[test]
    fn test_confirm_delete_removes_and_persists() {
        let mut book = RecipeBook::open(MemoryStore::new());
        let target = book.recipes()[1].clone();
        book.open_view(&target.id).unwrap();
        book.open_delete().unwrap();
        assert_eq!(book.modal(), Modal::DeleteConfirm);

        let removed = book.confirm_delete().unwrap();

        assert_eq!(removed, target);
        assert_eq!(book.recipes().len(), 1);
        assert!(book.get(&target.id).is_none());
        assert!(persisted(&book).iter().all(|r| r.id != target.id));
        assert!(book.selected().is_none());
        assert_eq!(book.modal(), Modal::None);
    }

    #[test]
    fn test_edit_and_delete_need_selection() {
        let mut book = RecipeBook::open(MemoryStore::new());

        assert!(matches!(book.open_edit(), Err(RecipeError::NoSelection)));
        assert!(matches!(book.open_delete(), Err(RecipeError::NoSelection)));
        assert!(matches!(book.save_edit(draft("x")), Err(RecipeError::NoSelection)));
        assert!(matches!(book.confirm_delete(), Err(RecipeError::NoSelection)));
        assert_eq!(book.recipes().len(), 2);
    }

    #[test]
    fn test_open_view_unknown_id() {
        let mut book = RecipeBook::open(MemoryStore::new());

        let result = book.open_view(&RecipeId::from("missing"));

        assert!(matches!(result, Err(RecipeError::NotFound(_))));
        assert_eq!(book.modal(), Modal::None);
    }

    #[test]
    fn test_back_to_view_and_close() {
        let mut book = RecipeBook::open(MemoryStore::new());
        book.open_create();
        book.back_to_view();
        assert_eq!(book.modal(), Modal::None);

        let id = book.recipes()[0].id.clone();
        book.open_view(&id).unwrap();
        book.open_edit().unwrap();
        book.back_to_view();
        assert_eq!(book.modal(), Modal::View);

        book.close_modal();
        assert!(!book.modal().is_open());
        assert_eq!(book.selected().map(|r| &r.id), Some(&id));
    }

    #[test]
    fn test_search_filters_live() {
        let mut book = RecipeBook::open(MemoryStore::new());

        book.set_search("pasta");
        let names: Vec<_> = book.filtered().iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, vec!["Creamy Tomato Pasta"]);

        book.set_search("");
        assert_eq!(book.filtered().len(), 2);
    }

    #[test]
    fn test_custom_key_leaves_default_slot_alone() {
        let book = RecipeBook::open_with_key(MemoryStore::new(), "other_slot");

        assert_eq!(book.storage_key(), "other_slot");
        assert!(book.store().get("other_slot").unwrap().is_some());
        assert!(book.store().get(STORAGE_KEY).unwrap().is_none());
    }
}
