//! Dashboard: stat cards, profile preview, recent works.

use dioxus::prelude::*;
use ui::{use_session, RequireProfile};

use crate::views::format_price;
use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        RequireProfile {
            DashboardInner {}
        }
    }
}

#[component]
fn DashboardInner() -> Element {
    let session = use_session();
    let mut works = use_signal(Vec::<api::ArtworkInfo>::new);

    let _loader = use_resource(move || async move {
        match api::list_my_artworks().await {
            Ok(list) => works.set(list),
            Err(e) => tracing::error!("failed to load artworks: {}", e),
        }
    });

    let profile = session().profile;

    rsx! {
        div { class: "page",
            div { class: "section-head",
                h1 { class: "page-title", "Dashboard" }
                Link { class: "button-primary button-small", to: Route::Upload {}, "Upload Work" }
            }

            div { class: "dashboard-grid",
                div { class: "stat-cards",
                    StatCard { title: "Total Works", value: works().len().to_string() }
                    // Placeholders until view/follow tracking exists.
                    StatCard { title: "Views", value: "0" }
                    StatCard { title: "Followers", value: "0" }
                }

                div { class: "profile-preview",
                    div { class: "section-head",
                        h3 { class: "section-title", "Profile" }
                        Link { class: "form-footer-link", to: Route::Profile {}, "Edit" }
                    }
                    if let Some(p) = profile {
                        dl { class: "profile-fields",
                            dt { "Name" }
                            dd { "{p.display_name()}" }
                            dt { "Medium" }
                            dd { "{p.medium}" }
                            dt { "Bio" }
                            dd { {p.bio.as_deref().unwrap_or("Add your bio")} }
                        }
                    }
                }
            }

            section { class: "recent-works",
                h2 { class: "section-title", "Recent Works" }
                if works().is_empty() {
                    Link { class: "empty-state", to: Route::Upload {},
                        p { "Upload Your First Work" }
                    }
                } else {
                    div { class: "works-grid",
                        for artwork in works().into_iter().take(6) {
                            div { class: "work-card", key: "{artwork.id}",
                                img { class: "work-image", src: "{artwork.image_url}", alt: "{artwork.title}" }
                                div { class: "work-meta",
                                    h3 { class: "work-title", "{artwork.title}" }
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

#[component]
fn StatCard(title: String, value: String) -> Element {
    rsx! {
        div { class: "stat-card",
            p { class: "stat-title", "{title}" }
            p { class: "stat-value", "{value}" }
        }
    }
}
