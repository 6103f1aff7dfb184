// Menu Compare - Web Server
// Read-only JSON API over a catalog loaded at startup.
// Filter state travels in the query string, so the server keeps no per-user data.

use anyhow::Context;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use indexmap::IndexSet;
use menu_compare::{
    load_state, table_caption, Action, AppState, CategoryAggregate, CategoryFilter, MenuConfig,
    MenuError, MenuItem, PriceStats,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{debug, info};

/// Shared application state: the catalog as loaded, never mutated
#[derive(Clone)]
struct ServerState {
    base: Arc<AppState>,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    fn err(error: impl ToString) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
        }
    }
}

fn bad_request(error: MenuError) -> Response {
    debug!(%error, "rejected filter params");
    (StatusCode::BAD_REQUEST, Json(ApiResponse::err(error))).into_response()
}

/// Filter state as query parameters.
///
/// `venues` and `compare` are comma-separated ids; repeats count once.
/// Omitting `venues` keeps the startup active set; `venues=` (empty) means
/// all venues. Unknown ids are rejected.
#[derive(Debug, Default, Deserialize)]
struct FilterParams {
    q: Option<String>,
    category: Option<String>,
    min: Option<f64>,
    max: Option<f64>,
    venues: Option<String>,
    compare: Option<String>,
}

fn split_ids(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from)
}

/// Copy the startup state and replay the request's filters onto it
fn state_for(base: &AppState, params: FilterParams) -> Result<AppState, MenuError> {
    let mut state = base.clone();

    if let Some(q) = params.q {
        state.dispatch(Action::SetQuery(q));
    }
    if let Some(category) = params.category {
        let filter = if category.is_empty() {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(category)
        };
        state.dispatch(Action::SetCategory(filter));
    }
    if params.min.is_some() || params.max.is_some() {
        let low = params.min.unwrap_or(state.bounds.min);
        let high = params.max.unwrap_or(state.bounds.max);
        state.dispatch(Action::SetPriceRange(low, high));
    }
    if let Some(venues) = params.venues {
        state.venues.set_active(split_ids(&venues))?;
    }
    if let Some(compare) = params.compare {
        let pinned: IndexSet<String> = split_ids(&compare).collect();
        if let Some(id) = pinned.iter().find(|id| state.catalog.get(id).is_none()) {
            return Err(MenuError::UnknownItem { id: id.clone() });
        }
        for id in &pinned {
            state.compare.pin(id);
        }
    }

    Ok(state)
}

#[derive(Serialize)]
struct VenueResponse {
    id: String,
    name: String,
    address: String,
    active: bool,
}

#[derive(Serialize)]
struct ItemsResponse {
    caption: String,
    items: Vec<MenuItem>,
}

#[derive(Serialize)]
struct SummaryResponse {
    categories: Vec<CategoryFilter>,
    stats: PriceStats,
    by_category: Vec<CategoryAggregate>,
    items: ItemsResponse,
    compared: Vec<MenuItem>,
    /// Every pinned id, including pins hidden by the filters
    pinned: Vec<String>,
}

fn items_response(items: &[&MenuItem]) -> ItemsResponse {
    ItemsResponse {
        caption: table_caption(items.len()),
        items: items.iter().map(|i| (*i).clone()).collect(),
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/venues - All venues with their startup active flag
async fn get_venues(State(state): State<ServerState>) -> impl IntoResponse {
    let venues: Vec<VenueResponse> = state
        .base
        .venues
        .venues()
        .iter()
        .map(|v| VenueResponse {
            id: v.id.clone(),
            name: v.name.clone(),
            address: v.address.clone(),
            active: state.base.venues.is_active(&v.id),
        })
        .collect();

    Json(ApiResponse::ok(venues))
}

/// GET /api/categories - Category selector choices, `All` first
async fn get_categories(State(state): State<ServerState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.base.catalog.categories()))
}

/// GET /api/items - Filtered items
async fn get_items(State(state): State<ServerState>, Query(params): Query<FilterParams>) -> Response {
    debug!(?params, "items");
    let state = match state_for(&state.base, params) {
        Ok(state) => state,
        Err(e) => return bad_request(e),
    };
    let view = state.view();
    Json(ApiResponse::ok(items_response(&view.filtered))).into_response()
}

/// GET /api/stats - min/max/avg/median of the filtered items
async fn get_stats(State(state): State<ServerState>, Query(params): Query<FilterParams>) -> Response {
    match state_for(&state.base, params) {
        Ok(state) => Json(ApiResponse::ok(state.view().stats)).into_response(),
        Err(e) => bad_request(e),
    }
}

/// GET /api/categories/summary - Per-category avg/count/median (chart data)
async fn get_category_summary(
    State(state): State<ServerState>,
    Query(params): Query<FilterParams>,
) -> Response {
    match state_for(&state.base, params) {
        Ok(state) => Json(ApiResponse::ok(state.view().by_category)).into_response(),
        Err(e) => bad_request(e),
    }
}

/// GET /api/compare - Pinned items still visible under the filters
async fn get_compare(State(state): State<ServerState>, Query(params): Query<FilterParams>) -> Response {
    let state = match state_for(&state.base, params) {
        Ok(state) => state,
        Err(e) => return bad_request(e),
    };
    let view = state.view();
    Json(ApiResponse::ok(items_response(&view.compared))).into_response()
}

/// GET /api/summary - Everything the UI shows, in one response
async fn get_summary(State(state): State<ServerState>, Query(params): Query<FilterParams>) -> Response {
    let state = match state_for(&state.base, params) {
        Ok(state) => state,
        Err(e) => return bad_request(e),
    };
    let view = state.view();

    Json(ApiResponse::ok(SummaryResponse {
        categories: view.categories.clone(),
        stats: view.stats,
        by_category: view.by_category.clone(),
        items: items_response(&view.filtered),
        compared: view.compared.iter().map(|i| (*i).clone()).collect(),
        pinned: state.compare.ids().iter().cloned().collect(),
    }))
    .into_response()
}

fn router(base: AppState) -> Router {
    let state = ServerState { base: Arc::new(base) };

    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/venues", get(get_venues))
        .route("/categories", get(get_categories))
        .route("/categories/summary", get(get_category_summary))
        .route("/items", get(get_items))
        .route("/stats", get(get_stats))
        .route("/compare", get(get_compare))
        .route("/summary", get(get_summary))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("MENU_COMPARE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = MenuConfig::load(None).context("failed to load configuration")?;
    let state = load_state(&config).context("failed to load menu data")?;
    info!(
        venues = state.venues.len(),
        items = state.catalog.len(),
        "catalog loaded"
    );

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.server.addr))?;

    println!("\n🚀 Server running on http://{}", config.server.addr);
    println!("   API: http://{}/api/summary", config.server.addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
