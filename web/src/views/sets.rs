//! Listing of the signed-in user's saved flashcard sets.

use dioxus::prelude::*;

use api::FlashcardSetInfo;
use ui::components::{Button, ButtonVariant};
use ui::{use_auth, Navbar};

use crate::Route;

#[component]
pub fn Sets() -> Element {
    let auth = use_auth();
    let mut sets = use_signal(Vec::<FlashcardSetInfo>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let nav = use_navigator();

    // Signed-out users land on the login page
    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_none() {
            nav.replace(Route::Login {});
        }
    });

    // Fetch the set list on mount; the names come back in append order
    let _loader = use_resource(move || async move {
        match api::list_flashcard_sets().await {
            Ok(list) => sets.set(list),
            Err(e) => error.set(Some(e.to_string())),
        }
        loading.set(false);
    });

    rsx! {
        Navbar {
            Link { to: Route::Generate {}, "Generate" }
            Link { to: Route::Sets {}, "My Sets" }
        }

        div {
            class: "page",

            h1 { "Your Flashcard Sets" }

            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| { nav.push(Route::Generate {}); },
                "Create New Flashcard Set"
            }

            if loading() {
                p { class: "muted", "Loading..." }
            } else if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            } else if sets().is_empty() {
                p { class: "muted", "No sets yet. Generate some flashcards and save them." }
            } else {
                div {
                    class: "set-grid",
                    for set in sets() {
                        Link {
                            key: "{set.name}",
                            to: Route::SetDetail { set_name: set.name.clone() },
                            class: "set-tile",
                            h3 { "{set.name}" }
                            p { class: "muted", "{set.card_count} cards" }
                        }
                    }
                }
            }
        }
    }
}
