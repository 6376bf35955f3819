//! Profile page: complete/edit the artist profile and manage uploaded works.
//!
//! This is the completion target the route guard redirects incomplete
//! profiles to, so it is wrapped in `RequireSession` rather than
//! `RequireProfile`.

use dioxus::prelude::*;
use ui::{use_session, ErrorBanner, MediumSelect, RequireSession, SessionState};

use crate::views::format_price;
use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WorkView {
    Grid,
    List,
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        RequireSession {
            ProfileInner {}
        }
    }
}

#[component]
fn ProfileInner() -> Element {
    let mut session = use_session();
    let profile = session().profile;

    let mut name = use_signal(|| profile.as_ref().map(|p| p.name.clone()).unwrap_or_default());
    let mut medium =
        use_signal(|| profile.as_ref().map(|p| p.medium.clone()).unwrap_or_default());
    let mut bio = use_signal(|| {
        profile
            .as_ref()
            .and_then(|p| p.bio.clone())
            .unwrap_or_default()
    });
    let avatar_url = use_memo(move || {
        session()
            .profile
            .as_ref()
            .and_then(|p| p.profile_image.clone())
    });

    // Newly picked avatar bytes, uploaded on save.
    let mut avatar = use_signal(|| Option::<(String, Vec<u8>)>::None);

    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let mut artworks = use_signal(Vec::<api::ArtworkInfo>::new);
    let mut works_loading = use_signal(|| true);
    let mut view = use_signal(|| WorkView::Grid);
    let nav = use_navigator();

    // Load this artist's works on mount.
    let _loader = use_resource(move || async move {
        match api::list_my_artworks().await {
            Ok(list) => artworks.set(list),
            Err(e) => tracing::error!("failed to load artworks: {}", e),
        }
        works_loading.set(false);
    });

    let handle_avatar_pick = move |evt: FormEvent| async move {
        if let Some(picked) = evt.files().first().cloned() {
            if let Ok(bytes) = picked.read_bytes().await {
                avatar.set(Some((picked.name(), bytes.to_vec())));
            }
        }
    };

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let m = medium();
            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if m.is_empty() {
                error.set(Some("Select your medium".to_string()));
                return;
            }

            saving.set(true);

            // Upload the avatar first so the profile update can reference it.
            let mut image_url = None;
            if let Some((file_name, bytes)) = avatar() {
                match api::upload_avatar(file_name, bytes).await {
                    Ok(url) => image_url = Some(url),
                    Err(e) => {
                        saving.set(false);
                        error.set(Some(e.to_string()));
                        return;
                    }
                }
            }

            let b = bio().trim().to_string();
            let b = if b.is_empty() { None } else { Some(b) };

            match api::update_profile(n, m, b, image_url).await {
                Ok(updated) => {
                    session.set(SessionState::resolved(Some(updated)));
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    saving.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let refetch = move || {
        spawn(async move {
            match api::list_my_artworks().await {
                Ok(list) => artworks.set(list),
                Err(e) => tracing::error!("failed to reload artworks: {}", e),
            }
        });
    };

    rsx! {
        div { class: "page",
            div { class: "profile-grid",
                // Profile form
                section { class: "profile-form",
                    h2 { class: "section-title", "Profile Info" }

                    if let Some(err) = error() {
                        ErrorBanner { message: err }
                    }

                    form { class: "form", onsubmit: handle_save,
                        label { class: "form-label", "Profile Image" }
                        label { class: "avatar-picker",
                            input {
                                class: "hidden-input",
                                r#type: "file",
                                accept: "image/*",
                                onchange: handle_avatar_pick,
                            }
                            if let Some((file_name, _)) = avatar() {
                                span { class: "avatar-pending", "{file_name}" }
                            } else if let Some(url) = avatar_url() {
                                img { class: "avatar-preview", src: "{url}", alt: "Avatar" }
                            } else {
                                span { class: "avatar-empty", "Choose an image" }
                            }
                        }

                        label { class: "form-label", "Name" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            placeholder: "Your full name",
                            required: true,
                            value: name(),
                            oninput: move |evt| name.set(evt.value()),
                        }

                        label { class: "form-label", "Medium" }
                        MediumSelect {
                            value: medium(),
                            oninput: move |evt: FormEvent| medium.set(evt.value()),
                        }

                        label { class: "form-label", "Bio" }
                        textarea {
                            class: "form-input",
                            placeholder: "Tell us about yourself and your art...",
                            rows: "4",
                            value: bio(),
                            oninput: move |evt| bio.set(evt.value()),
                        }

                        button {
                            class: "button-primary",
                            r#type: "submit",
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save Profile" }
                        }
                    }
                }

                // Artwork list
                section { class: "profile-works",
                    div { class: "section-head",
                        h2 { class: "section-title", "Your Work" }
                        div { class: "view-toggle",
                            button {
                                class: if view() == WorkView::Grid { "toggle active" } else { "toggle" },
                                onclick: move |_| view.set(WorkView::Grid),
                                "Grid"
                            }
                            button {
                                class: if view() == WorkView::List { "toggle active" } else { "toggle" },
                                onclick: move |_| view.set(WorkView::List),
                                "List"
                            }
                            Link { class: "button-primary button-small", to: Route::Upload {}, "Upload Work" }
                        }
                    }

                    if works_loading() {
                        p { "Loading your work..." }
                    } else if artworks().is_empty() {
                        div { class: "empty-state",
                            p { "No artworks yet" }
                            Link { class: "form-footer-link", to: Route::Upload {}, "Upload Your First Work" }
                        }
                    } else {
                        div {
                            class: if view() == WorkView::Grid { "works-grid" } else { "works-list" },
                            for artwork in artworks() {
                                ArtworkCard {
                                    key: "{artwork.id}",
                                    artwork: artwork.clone(),
                                    on_delete: move |_| refetch(),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A single owned artwork with a delete action.
#[component]
fn ArtworkCard(artwork: api::ArtworkInfo, on_delete: EventHandler<()>) -> Element {
    let id = artwork.id.clone();

    let handle_delete = move |_| {
        let id = id.clone();
        async move {
            match api::delete_artwork(id).await {
                Ok(()) => on_delete.call(()),
                Err(e) => tracing::error!("failed to delete artwork: {}", e),
            }
        }
    };

    rsx! {
        div { class: "work-card",
            img { class: "work-image", src: "{artwork.image_url}", alt: "{artwork.title}" }
            div { class: "work-meta",
                h3 { class: "work-title", "{artwork.title}" }
                p { class: "work-price", {format_price(artwork.price)} }
                button { class: "work-delete", onclick: handle_delete, "Delete" }
            }
        }
    }
}
