//! Public single-artwork page: the image, its listing details, and the
//! artist's card.

use dioxus::prelude::*;

use crate::views::format_price;
use crate::Route;

#[component]
pub fn ArtworkDetail(id: String) -> Element {
    let mut artwork = use_signal(|| None::<api::ArtworkInfo>);
    let mut not_found = use_signal(|| false);

    let _loader = use_resource(move || {
        let id = id.clone();
        async move {
            match api::get_artwork(id).await {
                Ok(Some(found)) => artwork.set(Some(found)),
                Ok(None) => not_found.set(true),
                Err(e) => {
                    tracing::error!("failed to load artwork: {}", e);
                    not_found.set(true);
                }
            }
        }
    });

    rsx! {
        div { class: "page",
            if let Some(work) = artwork() {
                div { class: "work-detail",
                    img { class: "work-detail-image", src: "{work.image_url}", alt: "{work.title}" }
                    div { class: "work-detail-meta",
                        span { class: "eyebrow", "{work.category}" }
                        h1 { class: "page-title", "{work.title}" }
                        p { class: "work-price", {format_price(work.price)} }
                        if !work.description.is_empty() {
                            p { class: "work-description", "{work.description}" }
                        }
                        div { class: "artist-card",
                            h3 { class: "section-title",
                                {work.artist_name.clone().unwrap_or_default()}
                            }
                            p { class: "artist-medium",
                                {work.artist_medium.clone().unwrap_or_default()}
                            }
                            if let Some(bio) = work.artist_bio.clone() {
                                p { class: "artist-bio", "{bio}" }
                            }
                        }
                    }
                }
            } else if not_found() {
                div { class: "empty-state",
                    p { "This work is no longer listed." }
                    Link { class: "button-ghost", to: Route::Home {}, "Back to the gallery" }
                }
            }
        }
    }
}
