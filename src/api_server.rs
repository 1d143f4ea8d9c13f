// Axum Server Module
//
// Purpose: server-rendered tree pages plus a JSON mirror of the same data
// Data source: hosted tree database via `TreeStore` (in-memory when unconfigured)

#[cfg(feature = "api")]
use axum::{
    extract::{Path, State},
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

#[cfg(feature = "api")]
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::TraceLayer,
};

#[cfg(feature = "api")]
use std::path::PathBuf;

#[cfg(feature = "api")]
use std::sync::Arc;

#[cfg(feature = "api")]
use crate::config::{Config, DEFAULT_STATIC_DIR};

#[cfg(feature = "api")]
use crate::content::{resolve_catalog, resolve_detail, ResolveError};

#[cfg(feature = "api")]
use crate::store::{MemoryStore, SupabaseStore, TreeStore};

#[cfg(feature = "api")]
use crate::web::handlers::pages;

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TreeStore>,
    pub static_dir: PathBuf,
}

#[cfg(feature = "api")]
impl AppState {
    pub fn new(store: Arc<dyn TreeStore>) -> Self {
        Self {
            store,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    /// Pick the store from configuration: PostgREST when a URL is set,
    /// otherwise an empty in-memory store (the catalog then falls back).
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let store: Arc<dyn TreeStore> = match &config.store {
            Some(store_config) => {
                tracing::info!("Using tree database at {}", store_config.url);
                Arc::new(SupabaseStore::new(
                    &store_config.url,
                    &store_config.anon_key,
                    store_config.timeout,
                )?)
            }
            None => {
                tracing::warn!("SUPABASE_URL not set; serving built-in catalog only");
                Arc::new(MemoryStore::new())
            }
        };

        Ok(Self::new(store).with_static_dir(config.static_dir.clone()))
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router(state: AppState) -> Router {
    // Static assets live at the site root (tree images, placeholders);
    // anything not found there gets the 404 page.
    let static_files = ServeDir::new(&state.static_dir)
        .not_found_service(pages::not_found_page.into_service());

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Pages (HTML)
        .route("/", get(pages::home_page))
        .route("/about", get(pages::about_page))
        .route("/tree/:id", get(pages::tree_page))

        // JSON mirror of page data
        .route("/api/trees", get(list_trees))
        .route("/api/trees/:id", get(get_tree))

        .fallback_service(static_files)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Resolved catalog (built-in list when the store has nothing)
#[cfg(feature = "api")]
async fn list_trees(State(state): State<AppState>) -> Json<serde_json::Value> {
    let trees = resolve_catalog(state.store.as_ref()).await;
    Json(serde_json::json!({
        "rows": trees.len(),
        "data": trees,
    }))
}

/// Resolved detail for one tree, with derived video links and location
#[cfg(feature = "api")]
async fn get_tree(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let detail = resolve_detail(state.store.as_ref(), &id).await?;
    let result = serde_json::to_value(&detail)
        .map_err(|e| AppError::Internal(format!("JSON serialization error: {}", e)))?;
    Ok(Json(result))
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Template(String),
    Internal(String),
}

#[cfg(feature = "api")]
impl From<ResolveError> for AppError {
    fn from(err: ResolveError) -> Self {
        AppError::NotFound(err.to_string())
    }
}

#[cfg(feature = "api")]
impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Template(err.to_string())
    }
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Template(msg) => {
                tracing::error!("Template rendering failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
