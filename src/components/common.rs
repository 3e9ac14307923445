use dioxus::prelude::*;

/// Pieces of confetti dropped when a claim confirms
const CONFETTI_PIECES: usize = 24;

#[component]
pub fn Spinner(size: u32) -> Element {
    rsx! {
        div {
            class: "spinner",
            style: "width: {size}px; height: {size}px;",
        }
    }
}

#[component]
pub fn Confetti(start: bool) -> Element {
    if !start {
        return rsx! {};
    }

    let pieces = (0..CONFETTI_PIECES).map(|i| {
        let class = format!("confetti-piece confetti-color-{}", i % 4);
        let style = format!("left: {}%; animation-delay: {}ms;", (i * 97) % 100, (i % 6) * 120);
        (i, class, style)
    });

    rsx! {
        div {
            class: "confetti",
            for (i, class, style) in pieces {
                span { key: "{i}", class: "{class}", style: "{style}" }
            }
        }
    }
}

/// Static stand-in for the animated token logo
#[component]
pub fn TokenBadge(symbol: String) -> Element {
    rsx! {
        div { class: "token-badge", "{symbol}" }
    }
}
