use crate::state::AppState;
use crate::styles::{self, ButtonKind};
use sycamore::prelude::*;

/// Card shown when no recipe matches
#[component(inline_props)]
pub fn EmptyState(state: AppState) -> View {
    view! {
        div(style=styles::empty_wrapper()) {
            div(style=styles::empty_card()) {
                div(style=styles::empty_emoji()) { "🧑‍🍳" }
                h2(style=styles::empty_title()) { "No recipes yet" }
                p(style=styles::empty_desc()) {
                    "Start by creating your first recipe. Add ingredients, steps, and an optional image."
                }
                button(
                    style=styles::button(ButtonKind::Primary),
                    on:click=move |_| state.open_create(),
                ) {
                    "Create Recipe"
                }
            }
        }
    }
}
