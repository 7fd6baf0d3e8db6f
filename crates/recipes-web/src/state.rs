//! Application state using Sycamore signals
//!
//! The [`RecipeBook`] lives in a single signal; components read derived
//! memos and call the action methods here, which update the book and let the
//! memos re-render what changed.

use crate::storage::BrowserStorage;
use recipes_core::{Modal, Recipe, RecipeBook, RecipeDraft, RecipeId};
use sycamore::prelude::*;

/// Application state context
#[derive(Clone, Copy)]
pub struct AppState {
    /// Recipe collection plus selection and modal state
    pub book: Signal<RecipeBook<BrowserStorage>>,

    /// Search box contents, mirrored into the book on every keystroke
    pub search: Signal<String>,
}

impl AppState {
    /// Load the collection from `localStorage` (seeding it on first run)
    pub fn new() -> Self {
        let book = create_signal(RecipeBook::open(BrowserStorage));
        let search = create_signal(String::new());

        create_effect(move || {
            let query = search.get_clone();
            book.update(|b| b.set_search(query));
        });

        Self { book, search }
    }

    /// Recipes matching the current search
    pub fn filtered(&self) -> ReadSignal<Vec<Recipe>> {
        let book = self.book;
        create_memo(move || book.with(|b| b.filtered().into_iter().cloned().collect()))
    }

    /// The open modal together with the recipe it shows
    pub fn modal(&self) -> ReadSignal<(Modal, Option<Recipe>)> {
        let book = self.book;
        create_selector(move || book.with(|b| (b.modal(), b.selected().cloned())))
    }

    // === Actions ===

    pub fn open_create(&self) {
        self.book.update(|b| b.open_create());
    }

    pub fn open_view(&self, id: &RecipeId) {
        self.book.update(|b| {
            if let Err(e) = b.open_view(id) {
                log::warn!("Cannot open recipe: {}", e);
            }
        });
    }

    pub fn open_edit(&self) {
        self.book.update(|b| {
            if let Err(e) = b.open_edit() {
                log::warn!("Cannot edit: {}", e);
            }
        });
    }

    pub fn open_delete(&self) {
        self.book.update(|b| {
            if let Err(e) = b.open_delete() {
                log::warn!("Cannot delete: {}", e);
            }
        });
    }

    pub fn back_to_view(&self) {
        self.book.update(|b| b.back_to_view());
    }

    pub fn close_modal(&self) {
        self.book.update(|b| b.close_modal());
    }

    /// Save the form, as a new recipe or over the selected one.
    /// Returns the message to show inline when the draft is rejected.
    pub fn save(&self, draft: RecipeDraft, editing: bool) -> Result<(), String> {
        self.book.update(|b| {
            let saved = if editing {
                b.save_edit(draft)
            } else {
                b.save_new(draft)
            };
            match saved {
                Ok(recipe) => {
                    log::info!("Saved recipe '{}'", recipe.name);
                    Ok(())
                }
                Err(e) => Err(e.to_string()),
            }
        })
    }

    pub fn confirm_delete(&self) {
        self.book.update(|b| match b.confirm_delete() {
            Ok(recipe) => log::info!("Deleted recipe '{}'", recipe.name),
            Err(e) => log::warn!("Delete failed: {}", e),
        });
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
