//! Generate view: source text in, ten flashcards out, optional save.

use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant};
use ui::{use_auth, FlipCard, Navbar, SaveSetDialog, StudyDeck};

use crate::Route;

#[component]
pub fn Generate() -> Element {
    let auth = use_auth();
    let mut text = use_signal(String::new);
    let mut deck = use_signal(StudyDeck::default);
    let mut generating = use_signal(|| false);
    let mut gen_error = use_signal(|| Option::<String>::None);
    let mut show_save = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut save_error = use_signal(|| Option::<String>::None);
    let nav = use_navigator();

    // Signed-out users land on the login page
    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_none() {
            nav.replace(Route::Login {});
        }
    });

    let handle_generate = move |_| {
        spawn(async move {
            let source = text();
            if source.trim().is_empty() {
                gen_error.set(Some("Enter some text to generate flashcards from".to_string()));
                return;
            }
            gen_error.set(None);
            generating.set(true);
            match api::generate_flashcards(source).await {
                Ok(cards) => deck.set(StudyDeck::new(cards)),
                Err(e) => gen_error.set(Some(e.to_string())),
            }
            generating.set(false);
        });
    };

    let handle_save = move |name: String| {
        spawn(async move {
            saving.set(true);
            save_error.set(None);
            match api::create_flashcard_set(name, deck().cards().to_vec()).await {
                Ok(_) => {
                    show_save.set(false);
                    // The sets view re-fetches on mount, so the new set shows
                    // up without any extra refresh.
                    nav.push(Route::Sets {});
                }
                Err(e) => save_error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    let current = deck();

    rsx! {
        Navbar {
            Link { to: Route::Generate {}, "Generate" }
            Link { to: Route::Sets {}, "My Sets" }
        }

        div {
            class: "page",

            h1 { "Generate Flashcards" }

            textarea {
                class: "generate-input",
                rows: 4,
                placeholder: "Paste the text you want to study...",
                value: text(),
                oninput: move |evt| text.set(evt.value()),
            }

            Button {
                variant: ButtonVariant::Primary,
                class: "w-full",
                disabled: generating(),
                onclick: handle_generate,
                if generating() { "Generating..." } else { "Generate Flashcards" }
            }

            if let Some(err) = gen_error() {
                div { class: "form-error", "{err}" }
            }

            if !current.is_empty() {
                h2 { "Generated Flashcards" }

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

                if let Some(card) = current.current() {
                    FlipCard {
                        front: card.front.clone(),
                        back: card.back.clone(),
                        index: current.cursor(),
                        flipped: current.is_flipped(current.cursor()),
                        large: true,
                        onclick: {
                            let cursor = current.cursor();
                            move |_| deck.write().toggle_flip(cursor)
                        },
                    }
                }

                div {
                    class: "cursor-controls",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: current.cursor() == 0,
                        onclick: move |_| deck.write().previous(),
                        "Previous"
                    }
                    span {
                        class: "cursor-position",
                        {format!("{} / {}", current.cursor() + 1, current.len())}
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: current.cursor() + 1 == current.len(),
                        onclick: move |_| deck.write().next(),
                        "Next"
                    }
                }

                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        save_error.set(None);
                        show_save.set(true);
                    },
                    "Save Flashcards"
                }
            }

            if show_save() {
                SaveSetDialog {
                    error: save_error(),
                    saving: saving(),
                    on_save: handle_save,
                    on_cancel: move |_| show_save.set(false),
                }
            }
        }
    }
}
