//! Route handlers for the quoting API.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::debug;

use crate::error::{AppError, Result};
use crate::AppState;

use super::calculators::compute_quote;
use super::plans::generate_payment_plans;
use super::requests::{PaymentPlansRequest, QuoteRequest};
use super::responses::{CatalogResponse, GeneratedPlanResponse, QuoteResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/catalog", get(catalog))
        .route("/api/quote", post(quote))
        .route("/api/payment-plans", post(payment_plans))
}

/// Catalog read endpoint: everything the site needs to render its selector UI.
async fn catalog(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    let body = serde_json::to_value(CatalogResponse::from(&*state.catalog))
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(Json(body))
}

/// Compute a quote from a selection set.
async fn quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Json<QuoteResponse> {
    let selection = request.into_selection();
    let quote = compute_quote(&state.catalog, &selection);
    debug!(total = %quote.total, currency = %quote.currency, "Quote computed");
    Json(quote.into())
}

/// Generate the payment-plan menu for a quote total.
async fn payment_plans(
    State(state): State<AppState>,
    Json(request): Json<PaymentPlansRequest>,
) -> Json<Vec<GeneratedPlanResponse>> {
    let plans = generate_payment_plans(&state.catalog, request.total, &request.currency);
    debug!(count = plans.len(), currency = %request.currency, "Payment plans generated");
    Json(plans.into_iter().map(Into::into).collect())
}
