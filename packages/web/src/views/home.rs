//! Public landing page with the open gallery beneath the hero.

use dioxus::prelude::*;

use crate::views::format_price;
use crate::Route;

#[component]
pub fn Home() -> Element {
    let mut works = use_signal(Vec::<api::ArtworkInfo>::new);

    let _loader = use_resource(move || async move {
        match api::list_artworks().await {
            Ok(list) => works.set(list),
            Err(e) => tracing::error!("failed to load gallery: {}", e),
        }
    });

    rsx! {
        div { class: "page",
            section { class: "hero",
                span { class: "eyebrow", "For Artists, By Artists" }
                h1 { class: "hero-title", "Basqi" }
                p { class: "hero-copy",
                    "A gallery for working artists. Show your work, name your price, keep your voice."
                }
                div { class: "hero-actions",
                    Link { class: "button-primary", to: Route::JoinWaitlist {}, "Join Now" }
                    Link { class: "button-ghost", to: Route::About {}, "About" }
                }
            }

            section { class: "gallery",
                h2 { class: "section-title", "Latest Works" }
                if works().is_empty() {
                    p { class: "empty-state", "No works yet. Be the first to show yours." }
                } else {
                    div { class: "works-grid",
                        for artwork in works() {
                            Link {
                                class: "work-card",
                                key: "{artwork.id}",
                                to: Route::ArtworkDetail { id: artwork.id.clone() },
                                img { class: "work-image", src: "{artwork.image_url}", alt: "{artwork.title}" }
                                div { class: "work-meta",
                                    h3 { class: "work-title", "{artwork.title}" }
                                    p { class: "work-artist",
                                        {artwork.artist_name.clone().unwrap_or_default()}
                                    }
                                    p { class: "work-price", {format_price(artwork.price)} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
