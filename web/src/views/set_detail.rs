//! One saved set, shown as a grid of flip cards.

use dioxus::prelude::*;

use ui::{use_auth, FlipCard, Navbar, StudyDeck};

use crate::Route;

#[component]
pub fn SetDetail(set_name: String) -> Element {
    let auth = use_auth();
    // Track the name in a signal so the loader re-runs on route param change
    let mut name_signal = use_signal(|| set_name.clone());
    if *name_signal.peek() != set_name {
        name_signal.set(set_name.clone());
    }

    let mut deck = use_signal(StudyDeck::default);
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

    let _loader = use_resource(move || {
        let name = name_signal();
        async move {
            match api::get_set_cards(name).await {
                Ok(cards) => deck.set(StudyDeck::new(cards)),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        }
    });

    let current = deck();

    rsx! {
        Navbar {
            Link { to: Route::Generate {}, "Generate" }
            Link { to: Route::Sets {}, "My Sets" }
        }

        div {
            class: "page",

            h1 { "{name_signal()}" }

            if loading() {
                p { class: "muted", "Loading..." }
            } else if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            } else {
                div {
                    class: "card-grid",
                    for (i, card) in current.cards().iter().enumerate() {
                        FlipCard {
                            key: "{i}",
                            front: card.front.clone(),
                            back: card.back.clone(),
                            index: i,
                            flipped: current.is_flipped(i),
                            onclick: move |_| deck.write().toggle_flip(i),
                        }
                    }
                }
            }
        }
    }
}
