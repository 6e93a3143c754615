/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use eisentask_api::{app::{build_router, AppState}, config::Config};
/// use eisentask_shared::clock::SystemClock;
/// use eisentask_shared::store::task_store::{StoreConfig, TaskStore};
/// use std::sync::Arc;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let store = TaskStore::open(
///     StoreConfig {
///         data_dir: config.storage.data_dir.clone(),
///         utc_offset: config.utc_offset(),
///     },
///     Arc::new(SystemClock),
/// )
/// .await?;
/// let state = AppState::new(store, config);
/// let app = build_router(state);
/// # Ok(())
/// # }
/// ```
use crate::{config::Config, middleware::identity::require_identity};
use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::{get, patch, post},
    Router,
};
use eisentask_shared::store::task_store::TaskStore;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Task store backing all task endpoints
    pub store: Arc<TaskStore>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(store: TaskStore, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// The router is organized as follows:
/// ```text
/// /
/// ├── /health                      # Health check (public)
/// └── /api/
///     ├── GET    /tasks            # List active tasks
///     ├── POST   /tasks            # Create task
///     ├── GET    /tasks/archived   # List archived tasks
///     ├── PATCH  /tasks/:id        # Update task
///     ├── DELETE /tasks/:id        # Soft-delete task
///     └── POST   /ai/suggest       # Suggestion heuristic (no identity)
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Identity (task routes only; the suggestion endpoint is stateless
///    and exempt)
pub fn build_router(state: AppState) -> Router {
    // Import route handlers
    use crate::routes;

    // Health check (public, no identity)
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    // Task routes (require the x-user-id identity header)
    let task_routes = Router::new()
        .route(
            "/tasks",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route("/tasks/archived", get(routes::tasks::archived_tasks))
        .route(
            "/tasks/:id",
            patch(routes::tasks::update_task).delete(routes::tasks::delete_task),
        )
        .layer(axum::middleware::from_fn(require_identity));

    // Suggestion route (stateless, no identity required)
    let suggest_routes = Router::new().route("/ai/suggest", post(routes::suggest::suggest_task));

    // Build complete /api surface
    let api_routes = Router::new().merge(task_routes).merge(suggest_routes);

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        // Production mode: configure allowed origins
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([
                header::CONTENT_TYPE,
                HeaderName::from_static(crate::middleware::identity::USER_ID_HEADER),
            ])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    };

    // Combine all routes with middleware stack
    Router::new()
        .merge(health_routes)
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
