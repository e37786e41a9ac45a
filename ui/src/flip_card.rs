//! A two-sided card that flips between its front and back.

use dioxus::prelude::*;

/// Background palette, cycled by card position.
const CARD_COLORS: [&str; 6] = [
    "#FFB74D", "#81C784", "#64B5F6", "#E57373", "#BA68C8", "#4DB6AC",
];

#[component]
pub fn FlipCard(
    front: String,
    back: String,
    index: usize,
    flipped: bool,
    #[props(default = false)] large: bool,
    #[props(default)] onclick: Option<EventHandler<()>>,
) -> Element {
    let color = CARD_COLORS[index % CARD_COLORS.len()];
    let outer = if large { "flip-card flip-card-large" } else { "flip-card" };
    let inner = if flipped { "card-inner is-flipped" } else { "card-inner" };

    rsx! {
        div {
            class: "{outer}",
            onclick: move |_| {
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
            div {
                class: "{inner}",
                div {
                    class: "card-face card-front",
                    style: "background-color: {color};",
                    "{front}"
                }
                div {
                    class: "card-face card-back",
                    style: "background-color: {color};",
                    "{back}"
                }
            }
        }
    }
}
