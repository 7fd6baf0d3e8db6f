//! Modal dialogs
//!
//! [`ModalHost`] follows the book's modal state and renders at most one
//! dialog; [`ModalFrame`] supplies the shared overlay, header and footer.

use super::{DetailContent, RecipeForm};
use crate::state::AppState;
use crate::styles::{self, ButtonKind};
use recipes_core::{Modal, Recipe, RecipeDraft};
use sycamore::prelude::*;

/// What closing a dialog (overlay click or ✕) does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismiss {
    /// Close every dialog
    Close,
    /// Return to the selected recipe's detail view
    BackToView,
}

impl Dismiss {
    fn apply(self, state: AppState) {
        match self {
            Dismiss::Close => state.close_modal(),
            Dismiss::BackToView => state.back_to_view(),
        }
    }
}

/// Overlay and card shared by every dialog. Clicks on the overlay outside
/// the card dismiss it. The footer is only rendered when `actions` is given.
#[component(inline_props)]
pub fn ModalFrame(
    state: AppState,
    title: String,
    dismiss: Dismiss,
    body: View,
    actions: Option<View>,
) -> View {
    let footer = match actions {
        Some(actions) => view! {
            div(style=styles::modal_footer()) {
                div(style=styles::action_row()) { (actions) }
            }
        },
        None => view! {},
    };

    let label = title.clone();
    view! {
        div(style=styles::modal_overlay(), on:click=move |_| dismiss.apply(state)) {
            div(
                style=styles::modal_card(),
                role="dialog",
                aria-modal="true",
                aria-label=label,
                on:click=|ev: web_sys::MouseEvent| ev.stop_propagation(),
            ) {
                div(style=styles::modal_header()) {
                    h3(style=styles::modal_title()) { (title) }
                    button(
                        r#type="button",
                        title="Close",
                        aria-label="Close",
                        style=styles::modal_close(),
                        on:click=move |_| dismiss.apply(state),
                    ) {
                        "✕"
                    }
                }
                div(style=styles::modal_body()) { (body) }
                (footer)
            }
        }
    }
}

fn view_dialog(state: AppState, recipe: Recipe) -> View {
    let title = recipe.name.clone();
    let description = recipe.description.clone();
    let body = view! {
        p(style=styles::detail_description()) { (description) }
        DetailContent(recipe=recipe)
    };
    let actions = view! {
        button(style=styles::button(ButtonKind::Ghost), on:click=move |_| state.open_edit()) {
            "Edit"
        }
        button(style=styles::button(ButtonKind::Danger), on:click=move |_| state.open_delete()) {
            "Delete"
        }
        button(style=styles::button(ButtonKind::Primary), on:click=move |_| state.close_modal()) {
            "Close"
        }
    };

    view! {
        ModalFrame(state=state, title=title, dismiss=Dismiss::Close, body=body, actions=actions)
    }
}

fn form_dialog(state: AppState, editing: Option<Recipe>) -> View {
    let (title, initial, dismiss) = match &editing {
        Some(recipe) => (
            format!("Edit: {}", recipe.name),
            RecipeDraft::from_recipe(recipe),
            Dismiss::BackToView,
        ),
        None => ("Create Recipe".to_string(), RecipeDraft::default(), Dismiss::Close),
    };
    let body = view! {
        RecipeForm(state=state, initial=initial, editing=editing.is_some())
    };

    view! {
        ModalFrame(state=state, title=title, dismiss=dismiss, body=body)
    }
}

fn delete_dialog(state: AppState) -> View {
    let body = view! {
        p(style=styles::confirm_text()) {
            "This action cannot be undone. The recipe will be permanently removed."
        }
    };
    let actions = view! {
        button(style=styles::button(ButtonKind::Ghost), on:click=move |_| state.back_to_view()) {
            "Cancel"
        }
        button(style=styles::button(ButtonKind::Danger), on:click=move |_| state.confirm_delete()) {
            "Delete"
        }
    };

    view! {
        ModalFrame(
            state=state,
            title="Delete Recipe?".to_string(),
            dismiss=Dismiss::BackToView,
            body=body,
            actions=actions,
        )
    }
}

/// Renders the dialog for the current modal state
#[component(inline_props)]
pub fn ModalHost(state: AppState) -> View {
    let modal = state.modal();

    view! {
        (move || match modal.get_clone() {
            (Modal::None, _) => view! {},
            (Modal::Create, _) => form_dialog(state, None),
            // Without a selected recipe the remaining dialogs have nothing to show
            (_, None) => view! {},
            (Modal::View, Some(recipe)) => view_dialog(state, recipe),
            (Modal::Edit, Some(recipe)) => form_dialog(state, Some(recipe)),
            (Modal::DeleteConfirm, Some(_)) => delete_dialog(state),
        })
    }
}
