use crate::styles;
use recipes_core::Recipe;
use sycamore::prelude::*;

fn list_items(items: &[String]) -> Vec<View> {
    items
        .iter()
        .map(|item| {
            let item = item.clone();
            view! { li(style=styles::detail_item()) { (item) } }
        })
        .collect()
}

/// Image, ingredients and numbered steps of a recipe
#[component(inline_props)]
pub fn DetailContent(recipe: Recipe) -> View {
    let ingredients = list_items(&recipe.ingredients);
    let steps = list_items(&recipe.steps);

    view! {
        div(style=styles::detail_layout()) {
            div(style=styles::detail_image(recipe.image_url()))
            div {
                h4(style=styles::detail_section()) { "Ingredients" }
                ul(style=styles::detail_list()) { (ingredients) }
            }
            div {
                h4(style=styles::detail_section()) { "Steps" }
                ol(style=styles::detail_list()) { (steps) }
            }
        }
    }
}
