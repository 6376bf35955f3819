//! Artists page: grid of every artist with a completed profile.

use dioxus::prelude::*;
use ui::RequireProfile;

#[component]
pub fn Artists() -> Element {
    rsx! {
        RequireProfile {
            ArtistsInner {}
        }
    }
}

#[component]
fn ArtistsInner() -> Element {
    let mut artists = use_signal(Vec::<api::ProfileInfo>::new);
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || async move {
        match api::list_artists().await {
            Ok(list) => artists.set(list),
            Err(e) => tracing::error!("failed to load artists: {}", e),
        }
        loading.set(false);
    });

    rsx! {
        div { class: "page",
            h1 { class: "page-title", "Artists" }

            if loading() {
                p { "Loading artists..." }
            } else if artists().is_empty() {
                div { class: "empty-state",
                    p { "No artists yet" }
                }
            } else {
                div { class: "artist-grid",
                    for artist in artists() {
                        div { class: "artist-card", key: "{artist.id}",
                            if let Some(url) = &artist.profile_image {
                                img { class: "artist-avatar", src: "{url}", alt: "{artist.name}" }
                            } else {
                                div { class: "artist-avatar artist-avatar-empty" }
                            }
                            h3 { class: "artist-name", "{artist.name}" }
                            p { class: "artist-medium", "{artist.medium}" }
                            if let Some(bio) = &artist.bio {
                                p { class: "artist-bio", "{bio}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
