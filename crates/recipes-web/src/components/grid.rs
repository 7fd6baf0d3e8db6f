use crate::state::AppState;
use crate::styles;
use recipes_core::Recipe;
use sycamore::prelude::*;
use web_sys::KeyboardEvent;

/// Keys that activate a focused card
pub(crate) fn is_activation_key(key: &str) -> bool {
    key == "Enter"
}

/// Responsive grid of recipe cards
#[component(inline_props)]
pub fn RecipeGrid(state: AppState, recipes: ReadSignal<Vec<Recipe>>) -> View {
    view! {
        div(style=styles::grid()) {
            Keyed(
                list=recipes,
                view=move |recipe: Recipe| view! { RecipeCard(state=state, recipe=recipe) },
                // Edited recipes keep their id, so the key includes the update time
                key=|recipe: &Recipe| (recipe.id.clone(), recipe.updated_at),
            )
        }
    }
}

#[component(inline_props)]
fn RecipeCard(state: AppState, recipe: Recipe) -> View {
    let click_id = recipe.id.clone();
    let key_id = recipe.id.clone();
    let image_style = styles::card_image(recipe.image_url());
    let name = recipe.name.clone();
    let description = recipe.description.clone();
    let label = format!("Open {}", recipe.name);
    let tags: Vec<View> = recipe
        .card_tags()
        .iter()
        .map(|tag| {
            let tag = tag.clone();
            view! { span(style=styles::tag()) { (tag) } }
        })
        .collect();

    let on_keydown = move |ev: KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            state.open_view(&key_id);
        }
    };

    view! {
        div(
            style=styles::card(),
            role="button",
            tabindex="0",
            aria-label=label,
            on:click=move |_| state.open_view(&click_id),
            on:keydown=on_keydown,
        ) {
            div(style=image_style)
            div(style=styles::card_body()) {
                div(style=styles::card_header()) {
                    h3(style=styles::card_title()) { (name) }
                    div(style=styles::tag_row()) { (tags) }
                }
                p(style=styles::card_desc()) { (description) }
            }
        }
    }
}
