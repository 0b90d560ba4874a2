//! # menuboard: a single-page menu listing service
//!
//! `menuboard` keeps a collection of menu items (a short text label and an integer price) and
//! serves them as an HTML page at `GET /menu`, one `label: value` line per item in the order
//! the items were added. When there are no items the page says "No items to display".
//!
//! ## Architecture
//!
//! The HTTP layer is [Axum](https://github.com/tokio-rs/axum). Items live behind the
//! [`store::MenuStore`] trait, backed either by PostgreSQL (through the repositories in [`db`])
//! or by an in-process store that forgets everything on shutdown. The page itself is produced by
//! [`render::MenuRenderer`], a `minijinja` template with HTML auto-escaping, so a label can never
//! inject markup.
//!
//! Items are added and edited through the admin JSON API at `/admin/api/v1/menu-items`, which is
//! only mounted when `admin.api_key` is configured, through the `menuboard add` subcommand, or
//! through `seed_items` in the config file on first start. The listing page never writes.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use menuboard::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = menuboard::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     menuboard::telemetry::init_telemetry(config.enable_otel_export)?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.
pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
pub mod render;
pub mod store;
pub mod telemetry;
pub mod types;

#[cfg(test)]
mod test_utils;

use crate::{
    config::{DatabaseConfig, SeedItem},
    openapi::AdminApiDoc,
    render::MenuRenderer,
    store::{InMemoryMenuStore, MenuStore, PgMenuStore},
};
use axum::{Json, Router, routing::get};
use bon::Builder;
pub use config::Config;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, debug, info, instrument};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

/// Application state shared across all request handlers.
///
/// # Example
///
/// ```ignore
/// let state = AppState::builder()
///     .store(Arc::new(InMemoryMenuStore::new()))
///     .renderer(Arc::new(MenuRenderer::new("Menu")?))
///     .config(config)
///     .build();
/// ```
#[derive(Clone, Builder)]
pub struct AppState {
    pub store: Arc<dyn MenuStore>,
    pub renderer: Arc<MenuRenderer>,
    pub config: Config,
}

/// Get the menuboard database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Open the store described by `database`.
///
/// For an external database this connects a pool with the configured settings and runs
/// migrations. The pool is returned alongside the store so the caller can close it on shutdown.
#[instrument(skip_all)]
pub async fn connect_store(database: &DatabaseConfig) -> anyhow::Result<(Arc<dyn MenuStore>, Option<PgPool>)> {
    match database {
        DatabaseConfig::Memory => {
            info!("Using in-memory store: menu items will be lost on shutdown");
            let store: Arc<dyn MenuStore> = Arc::new(InMemoryMenuStore::new());
            Ok((store, None))
        }
        DatabaseConfig::External { url, pool: settings } => {
            info!("Using external database");
            let pool = PgPoolOptions::new()
                .max_connections(settings.max_connections)
                .min_connections(settings.min_connections)
                .acquire_timeout(settings.acquire_timeout())
                .idle_timeout(settings.idle_timeout())
                .max_lifetime(settings.max_lifetime())
                .connect(url)
                .await?;

            migrator().run(&pool).await?;
            debug!("Migrations applied");

            let store: Arc<dyn MenuStore> = Arc::new(PgMenuStore::new(pool.clone()));
            Ok((store, Some(pool)))
        }
    }
}

/// Insert the configured seed items, but only into an empty store.
///
/// Once anything has been added, restarts leave the menu alone so edits made through the admin
/// API survive. Returns the number of items inserted.
#[instrument(skip_all)]
pub async fn seed_menu(seed_items: &[SeedItem], store: &dyn MenuStore) -> anyhow::Result<usize> {
    if seed_items.is_empty() {
        return Ok(0);
    }

    if store.count().await? > 0 {
        info!("Menu already has items, skipping seeding");
        return Ok(0);
    }

    info!("Seeding menu with {} items", seed_items.len());
    for seed in seed_items {
        store.insert(&seed.label, seed.value).await?;
    }

    Ok(seed_items.len())
}

/// Build the application router.
///
/// - `GET /healthz`
/// - `GET /menu`
/// - `/admin/api/v1/*`, `/admin/docs`: only when an admin API key is configured
pub fn build_router(state: &AppState) -> Router {
    let mut router = Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .route("/menu", get(api::handlers::menu::menu_page));

    if state.config.admin.api_key.is_some() {
        let admin_routes = Router::new()
            .route(
                "/menu-items",
                get(api::handlers::menu_items::list_menu_items).post(api::handlers::menu_items::create_menu_item),
            )
            .route(
                "/menu-items/{id}",
                get(api::handlers::menu_items::get_menu_item)
                    .patch(api::handlers::menu_items::update_menu_item)
                    .delete(api::handlers::menu_items::delete_menu_item),
            )
            .route("/openapi.json", get(|| async { Json(AdminApiDoc::openapi()) }));

        router = router
            .nest("/admin/api/v1", admin_routes)
            .merge(Scalar::with_url("/admin/docs", AdminApiDoc::openapi()));
    } else {
        info!("No admin.api_key configured, admin API disabled");
    }

    router.with_state(state.clone()).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

/// The assembled service: store, router, and the pool to close on shutdown.
///
/// 1. **Create**: [`Application::new`] opens the store, seeds it, and builds the router
/// 2. **Serve**: [`Application::serve`] binds to a TCP port and starts handling requests
/// 3. **Shutdown**: when the shutdown future resolves, in-flight requests finish, then the
///    database pool and telemetry are shut down
pub struct Application {
    router: Router,
    config: Config,
    pool: Option<PgPool>,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting menuboard with configuration: {:#?}", config);

        let (store, pool) = connect_store(&config.database).await?;
        Self::new_with_store(config, store, pool).await
    }

    /// Create an application over an already-open store
    pub async fn new_with_store(config: Config, store: Arc<dyn MenuStore>, pool: Option<PgPool>) -> anyhow::Result<Self> {
        seed_menu(&config.seed_items, store.as_ref()).await?;

        let renderer = MenuRenderer::new(config.menu.title.clone())?;
        let app_state = AppState::builder()
            .store(store)
            .renderer(Arc::new(renderer))
            .config(config.clone())
            .build();

        let router = build_router(&app_state);

        Ok(Self { router, config, pool })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "Menuboard listening on http://{}, menu at http://localhost:{}/menu",
            bind_addr, self.config.port
        );

        axum::serve(listener, self.router).with_graceful_shutdown(shutdown).await?;

        if let Some(pool) = self.pool {
            info!("Closing database connections...");
            pool.close().await;
        }

        info!("Shutting down telemetry...");
        telemetry::shutdown_telemetry();

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::{admin_auth_header, create_test_config};

    fn seeds(items: &[(&str, i64)]) -> Vec<SeedItem> {
        items
            .iter()
            .map(|(label, value)| SeedItem {
                label: label.to_string(),
                value: *value,
            })
            .collect()
    }

    #[test_log::test(tokio::test)]
    async fn test_healthz() {
        let app = Application::new(create_test_config()).await.unwrap();
        let server = app.into_test_server();

        let response = server.get("/healthz").await;

        response.assert_status_ok();
        assert_eq!(response.text(), "OK");
    }

    #[test_log::test(tokio::test)]
    async fn test_seed_items_appear_on_menu() {
        let mut config = create_test_config();
        config.seed_items = seeds(&[("Falafel", 12), ("Shawarma", 15)]);
        let server = Application::new(config).await.unwrap().into_test_server();

        let html = server.get("/menu").await.text();

        assert!(html.contains("Falafel: 12<br>"));
        assert!(html.contains("Shawarma: 15<br>"));
        assert!(html.find("Falafel").unwrap() < html.find("Shawarma").unwrap());
    }

    #[test_log::test(tokio::test)]
    async fn test_seeding_skips_non_empty_store() {
        let store = InMemoryMenuStore::with_items([("Baklava", 10)]);

        let inserted = seed_menu(&seeds(&[("Falafel", 12)]), &store).await.unwrap();

        assert_eq!(inserted, 0);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[test_log::test(tokio::test)]
    async fn test_seeding_fills_empty_store_in_order() {
        let store = InMemoryMenuStore::new();

        let inserted = seed_menu(&seeds(&[("Falafel", 12), ("Shawarma", 15)]), &store).await.unwrap();

        assert_eq!(inserted, 2);
        let labels: Vec<String> = store.list_all().await.unwrap().into_iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Falafel", "Shawarma"]);
    }

    #[test_log::test(tokio::test)]
    async fn test_custom_title_is_rendered() {
        let mut config = create_test_config();
        config.menu.title = "Lunch Specials".to_string();
        let server = Application::new(config).await.unwrap().into_test_server();

        let html = server.get("/menu").await.text();

        assert!(html.contains("<h1>Lunch Specials</h1>"));
    }

    #[test_log::test(tokio::test)]
    async fn test_openapi_json_and_docs_served_with_admin_key() {
        let server = Application::new(create_test_config()).await.unwrap().into_test_server();

        let response = server.get("/admin/api/v1/openapi.json").await;
        response.assert_status_ok();
        let content = response.text();
        assert!(content.contains("\"openapi\""));
        assert!(content.contains("Menuboard Admin API"));
        assert!(content.contains("/menu-items"));

        server.get("/admin/docs").await.assert_status_ok();
    }

    #[test_log::test(tokio::test)]
    async fn test_admin_writes_visible_on_next_read() {
        let server = Application::new(create_test_config()).await.unwrap().into_test_server();
        let (name, value) = admin_auth_header();

        assert!(server.get("/menu").await.text().contains("No items to display"));

        server
            .post("/admin/api/v1/menu-items")
            .add_header(&name, &value)
            .json(&serde_json::json!({"label": "Baklava", "value": 10}))
            .await
            .assert_status(axum::http::StatusCode::CREATED);

        let html = server.get("/menu").await.text();
        assert!(html.contains("Baklava: 10<br>"));
        assert!(!html.contains("No items to display"));
    }
}
