//! Public about page.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "page",
            section { class: "about",
                h1 { class: "page-title", "About" }
                p { class: "about-copy",
                    "Basqi is a small marketplace for independent artists. Every profile is a "
                    "working studio: a name, a medium, a story, and the work itself."
                }
                p { class: "about-copy",
                    "No feeds, no rankings. Artists list their pieces, set their prices, and "
                    "collectors reach them directly."
                }
                Link { class: "button-primary", to: Route::JoinWaitlist {}, "Join the waitlist" }
            }
        }
    }
}
