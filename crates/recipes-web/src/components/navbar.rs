use crate::state::AppState;
use crate::styles::{self, ButtonKind};
use sycamore::prelude::*;

/// Top bar with branding, the search box and the new-recipe button
#[component(inline_props)]
pub fn Navbar(state: AppState) -> View {
    let search = state.search;

    view! {
        nav(style=styles::navbar()) {
            div(style=styles::navbar_side()) {
                div(style=styles::brand_badge()) { "🍳" }
                div {
                    div(style=styles::brand_title()) { "Ocean Recipes" }
                    div(style=styles::brand_subtitle()) { "Cook, curate, and create" }
                }
            }
            div(style=styles::navbar_side()) {
                div(style=styles::search_wrapper()) {
                    span(style=styles::search_icon()) { "🔎" }
                    input(
                        r#type="text",
                        placeholder="Search recipes...",
                        aria-label="Search recipes",
                        style=styles::search_input(),
                        bind:value=search,
                    )
                }
                button(
                    style=styles::button(ButtonKind::Primary),
                    aria-label="Add a new recipe",
                    on:click=move |_| state.open_create(),
                ) {
                    "+ New Recipe"
                }
            }
        }
    }
}
