use dioxus::prelude::*;

use ui::{Navbar, SessionProvider};
use views::{About, Artists, ArtworkDetail, Dashboard, Home, JoinWaitlist, Login, Profile, Upload};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/login")]
    Login {},
    #[route("/join-waitlist")]
    JoinWaitlist {},
    #[route("/profile")]
    Profile {},
    #[route("/upload")]
    Upload {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/artists")]
    Artists {},
    #[route("/artworks/:id")]
    ArtworkDetail { id: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_http::services::ServeDir;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Initialize database pool
    let pool = api::db::get_pool()
        .await
        .expect("Failed to connect to database");

    // Run migrations
    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");

    // Create session store
    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .expect("Failed to migrate session store");

    // Session layer configuration
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into().unwrap(),
        )); // 7 days

    // Uploaded images are served read-only from the storage root.
    let uploads = api::storage::DiskStorage::from_env();
    std::fs::create_dir_all(uploads.root()).expect("Failed to create uploads directory");

    let router = axum::Router::new()
        .nest_service("/uploads", ServeDir::new(uploads.root()))
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Layout wrapping every page: the navbar routes through the client-side
/// router instead of triggering full page loads.
#[component]
fn Shell() -> Element {
    let nav = use_navigator();

    rsx! {
        Navbar {
            on_navigate: move |path: String| {
                nav.push(path.as_str());
            },
        }
        main {
            Outlet::<Route> {}
        }
    }
}
