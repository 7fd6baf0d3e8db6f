//! Ocean Recipes Web - browser recipe manager
//!
//! This crate provides a WebAssembly UI for browsing, searching and editing
//! recipes. The collection is kept in the browser's `localStorage`.

pub mod components;
pub mod state;
pub mod storage;
pub mod styles;
pub mod theme;

use components::{EmptyState, ModalHost, Navbar, RecipeGrid};
use sycamore::prelude::*;
use wasm_bindgen::prelude::*;

/// Initialize the web application
#[wasm_bindgen(start)]
pub fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");

    log::info!("Ocean Recipes starting...");

    sycamore::render(App);
}

/// Main application component
#[component]
fn App() -> View {
    let state = state::AppState::new();
    let recipes = state.filtered();
    let is_empty = create_selector(move || recipes.with(Vec::is_empty));

    view! {
        div(style=styles::app()) {
            div(style=styles::app_gradient())
            Navbar(state=state)
            main(style=styles::main()) {
                (move || if is_empty.get() {
                    view! { EmptyState(state=state) }
                } else {
                    view! { RecipeGrid(state=state, recipes=recipes) }
                })
            }
            ModalHost(state=state)
            footer(style=styles::footer()) {
                "Made with ❤️ · Ocean Professional Theme"
            }
        }
    }
}
