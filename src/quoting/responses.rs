//! Response DTOs for the quoting API endpoints.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::{
    Catalog, Currency, Feature, MultiplierOption, PaymentPlanSpec, ProjectType,
};

use super::calculators::Quote;
use super::plans::GeneratedPlan;

/// Quote estimate for JSON responses
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub min: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub max: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    pub currency: String,
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        Self {
            min: quote.min,
            max: quote.max,
            total: quote.total,
            currency: quote.currency,
        }
    }
}

/// One generated payment plan for JSON responses
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlanResponse {
    pub id: String,
    pub label: String,
    pub description: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub primary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_cost: Decimal,
}

impl From<GeneratedPlan> for GeneratedPlanResponse {
    fn from(plan: GeneratedPlan) -> Self {
        Self {
            id: plan.id,
            label: plan.label,
            description: plan.description,
            icon: plan.icon,
            badge: plan.badge,
            primary: plan.primary,
            secondary: plan.secondary,
            total_cost: plan.total_cost,
        }
    }
}

/// Catalog payload for the site's selector UI, borrowed straight from the
/// in-memory catalog.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse<'a> {
    pub project_types: &'a [ProjectType],
    pub features: &'a BTreeMap<String, Feature>,
    pub business_sizes: &'a [MultiplierOption],
    pub current_states: &'a [MultiplierOption],
    pub timelines: &'a [MultiplierOption],
    pub currencies: &'a [Currency],
    pub payment_plans: &'a [PaymentPlanSpec],
    pub reference_currency: &'a str,
    #[serde(with = "rust_decimal::serde::str")]
    pub exchange_rate: Decimal,
}

impl<'a> From<&'a Catalog> for CatalogResponse<'a> {
    fn from(catalog: &'a Catalog) -> Self {
        Self {
            project_types: &catalog.project_types,
            features: &catalog.features,
            business_sizes: &catalog.business_sizes,
            current_states: &catalog.current_states,
            timelines: &catalog.timelines,
            currencies: &catalog.currencies,
            payment_plans: &catalog.payment_plans,
            reference_currency: &catalog.reference_currency,
            exchange_rate: catalog.exchange_rate,
        }
    }
}
