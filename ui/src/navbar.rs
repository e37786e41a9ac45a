//! Top navigation bar: brand, view links, and the signed-in user menu.

use dioxus::prelude::*;

use crate::{use_auth, LogoutButton};

#[component]
pub fn Navbar(children: Element) -> Element {
    let auth = use_auth();

    rsx! {
        div {
            class: "navbar",
            span { class: "navbar-brand", "FlashDeck" }
            div {
                class: "navbar-links",
                {children}
            }
            div {
                class: "navbar-user",
                if let Some(user) = auth().user {
                    span { class: "navbar-username", "{user.display_name()}" }
                    LogoutButton { class: "btn btn-outline" }
                }
            }
        }
    }
}
