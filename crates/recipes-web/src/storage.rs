//! `localStorage` backend for the recipe store.

use recipes_core::{KeyValueStore, RecipeError, Result};
use wasm_bindgen::JsValue;

/// The browser's `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| RecipeError::Storage("No window available".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| RecipeError::Storage("localStorage is unavailable".to_string()))
    }
}

fn js_error(err: JsValue) -> RecipeError {
    RecipeError::Storage(format!("{:?}", err))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        Self::local_storage()?.set_item(key, value).map_err(js_error)
    }
}
