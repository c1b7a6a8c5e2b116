// 🌐 REST API with Axum
// Exposes the normalizer to the entry forms over HTTP.

use crate::amount::{self, AmountInput};
use crate::config::Catalog;
use crate::entities::{Category, CategoryType};
use crate::prefill::{prefill, EntryGuess, EntrySuggestion};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Default bind address; override with `TXN_SERVER_ADDR`
pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";
pub const ADDR_ENV: &str = "TXN_SERVER_ADDR";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
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

    fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

// ============================================================================
// Request / Response types
// ============================================================================

#[derive(Serialize)]
struct CategoriesResponse {
    expense: Vec<Category>,
    income: Vec<Category>,
}

#[derive(Deserialize)]
struct ParseQuery {
    input: String,
}

#[derive(Serialize)]
struct ParseResponse {
    input: String,
    amount: Option<f64>,
    valid: bool,
    error: Option<String>,
    display: Option<String>,
}

#[derive(Deserialize)]
struct FormatQuery {
    value: f64,
    #[serde(default = "default_cents")]
    cents: bool,
    #[serde(default)]
    currency: bool,
}

fn default_cents() -> bool {
    true
}

#[derive(Deserialize)]
struct ClassifyQuery {
    text: String,
    kind: Option<CategoryType>,
}

#[derive(Serialize)]
struct ClassifyResponse {
    category_id: Option<String>,
    category: Option<Category>,
    keyword: Option<String>,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/categories - Expense and income categories
async fn get_categories(State(state): State<AppState>) -> impl IntoResponse {
    let categories = state.catalog.categories();
    Json(ApiResponse::ok(CategoriesResponse {
        expense: categories.expense().to_vec(),
        income: categories.income().to_vec(),
    }))
}

/// GET /api/categories/:id/keywords - Lexicon keywords for one category
async fn get_keywords(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    if !state.catalog.categories().contains(&id) {
        warn!(category = %id, "Keywords requested for unknown category");
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Vec<String>>::err(format!("Unknown category: {}", id))),
        )
            .into_response();
    }

    let keywords = state.catalog.classifier().keywords_for_category(&id).to_vec();
    (StatusCode::OK, Json(ApiResponse::ok(keywords))).into_response()
}

/// GET /api/amount/parse?input= - Parse and validate an amount field
async fn parse_amount(Query(query): Query<ParseQuery>) -> impl IntoResponse {
    let response = match amount::validate(AmountInput::Text(query.input.clone())) {
        Ok(value) => ParseResponse {
            input: query.input,
            amount: Some(value),
            valid: true,
            error: None,
            display: Some(amount::format_for_display(value, true)),
        },
        Err(e) => ParseResponse {
            input: query.input,
            amount: None,
            valid: false,
            error: Some(e.to_string()),
            display: None,
        },
    };

    Json(ApiResponse::ok(response))
}

/// GET /api/amount/format?value=&cents=&currency= - Render an amount
async fn format_amount(Query(query): Query<FormatQuery>) -> impl IntoResponse {
    let formatted = if query.currency {
        amount::format_currency(query.value, query.cents)
    } else {
        amount::format_for_display(query.value, query.cents)
    };
    Json(ApiResponse::ok(formatted))
}

/// GET /api/classify?text=&kind= - Suggest a category
async fn classify(State(state): State<AppState>, Query(query): Query<ClassifyQuery>) -> impl IntoResponse {
    let catalog = &state.catalog;
    let response = match catalog.best_match(&query.text, query.kind) {
        Some(m) => ClassifyResponse {
            category_id: Some(m.category_id.to_string()),
            category: catalog.categories().find_by_id(m.category_id).cloned(),
            keyword: Some(m.keyword.to_string()),
        },
        None => ClassifyResponse {
            category_id: None,
            category: None,
            keyword: None,
        },
    };

    Json(ApiResponse::ok(response))
}

/// POST /api/prefill - Structured guess → form suggestion
async fn prefill_entry(State(state): State<AppState>, Json(guess): Json<EntryGuess>) -> impl IntoResponse {
    let suggestion: EntrySuggestion = prefill(&state.catalog, &guess);
    Json(ApiResponse::ok(suggestion))
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(catalog: Arc<Catalog>) -> Router {
    let state = AppState { catalog };

    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/categories", get(get_categories))
        .route("/categories/:id/keywords", get(get_keywords))
        .route("/amount/parse", get(parse_amount))
        .route("/amount/format", get(format_amount))
        .route("/classify", get(classify))
        .route("/prefill", post(prefill_entry))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ============================================================================
// TESTS
// ============================================================================
