use crate::state::AppState;
use crate::styles::{self, ButtonKind};
use recipes_core::RecipeDraft;
use sycamore::prelude::*;
use web_sys::SubmitEvent;

fn field(title: &'static str, control: View) -> View {
    view! {
        label(style=styles::field()) {
            span(style=styles::field_label()) { (title) }
            (control)
        }
    }
}

/// Create/edit form. `editing` decides whether submit replaces the selected
/// recipe and whether Cancel returns to its detail view.
#[component(inline_props)]
pub fn RecipeForm(state: AppState, initial: RecipeDraft, editing: bool) -> View {
    let name = create_signal(initial.name);
    let image = create_signal(initial.image);
    let description = create_signal(initial.description);
    let ingredients = create_signal(initial.ingredients);
    let steps = create_signal(initial.steps);
    let tags = create_signal(initial.tags);
    let error = create_signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = RecipeDraft {
            name: name.get_clone(),
            description: description.get_clone(),
            image: image.get_clone(),
            ingredients: ingredients.get_clone(),
            steps: steps.get_clone(),
            tags: tags.get_clone(),
        };
        if let Err(message) = state.save(draft, editing) {
            error.set(Some(message));
        }
    };

    let on_cancel = move |_: web_sys::MouseEvent| {
        if editing {
            state.back_to_view();
        } else {
            state.close_modal();
        }
    };

    let submit_label = if editing { "Save Changes" } else { "Create Recipe" };

    view! {
        form(style=styles::form(), on:submit=on_submit) {
            (move || match error.get_clone() {
                Some(message) => view! { div(style=styles::form_error(), role="alert") { (message) } },
                None => view! {},
            })
            div(style=styles::form_row()) {
                (field("Name", view! {
                    input(
                        r#type="text",
                        placeholder="e.g., Spicy Chickpea Curry",
                        style=styles::text_input(),
                        bind:value=name,
                    )
                }))
                (field("Image URL (optional)", view! {
                    input(
                        r#type="text",
                        placeholder="https://...",
                        style=styles::text_input(),
                        bind:value=image,
                    )
                }))
            }
            (field("Short Description", view! {
                input(
                    r#type="text",
                    placeholder="A quick summary of the dish",
                    style=styles::text_input(),
                    bind:value=description,
                )
            }))
            div(style=styles::form_row()) {
                (field("Ingredients (one per line)", view! {
                    textarea(
                        placeholder="2 cups flour\n1 tsp salt",
                        style=styles::text_area(),
                        bind:value=ingredients,
                    )
                }))
                (field("Steps (one per line)", view! {
                    textarea(
                        placeholder="Preheat oven\nMix ingredients",
                        style=styles::text_area(),
                        bind:value=steps,
                    )
                }))
            }
            (field("Tags (comma separated)", view! {
                input(
                    r#type="text",
                    placeholder="Vegan, Quick, Dinner",
                    style=styles::text_input(),
                    bind:value=tags,
                )
            }))
            div(style=styles::form_footer()) {
                button(r#type="button", style=styles::button(ButtonKind::Ghost), on:click=on_cancel) {
                    "Cancel"
                }
                button(r#type="submit", style=styles::button(ButtonKind::Primary)) {
                    (submit_label)
                }
            }
        }
    }
}
