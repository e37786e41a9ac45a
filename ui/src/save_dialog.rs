//! Dialog for naming and saving a freshly generated card list.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};

/// Modal form asking for a set name.
///
/// An empty name is rejected here, before any network call; server-side
/// failures (a name conflict, a store error) arrive through `error` and are
/// shown inline so the user can correct the name and retry.
#[component]
pub fn SaveSetDialog(
    error: Option<String>,
    saving: bool,
    on_save: EventHandler<String>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut local_error = use_signal(|| Option::<String>::None);

    let handle_submit = move |_| {
        let n = name().trim().to_string();
        if n.is_empty() {
            local_error.set(Some(
                "Please enter a name for your flashcard set".to_string(),
            ));
            return;
        }
        local_error.set(None);
        on_save.call(n);
    };

    let message = local_error().or(error);

    rsx! {
        div {
            class: "dialog-overlay",
            div {
                class: "dialog",
                h2 { "Save Flashcards" }
                p { class: "dialog-hint", "Please enter a name for your flashcard set." }

                if let Some(msg) = message {
                    div { class: "form-error", "{msg}" }
                }

                div {
                    class: "form-field",
                    Label { html_for: "set-name", "Set name" }
                    Input {
                        id: "set-name",
                        class: "w-full",
                        placeholder: "Biology 101",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }

                div {
                    class: "form-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: saving,
                        onclick: handle_submit,
                        if saving { "Saving..." } else { "Save" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
