//! Request DTOs for the quoting API endpoints.
//!
//! Field names follow the site's camelCase wire format. Every field
//! defaults, matching the engine's lenient-input policy: a partial payload
//! still produces a (typically near-zero) quote.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::calculators::Selection;

/// Body of `POST /api/quote`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default)]
    pub project_types: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub business_size: String,
    #[serde(default)]
    pub current_state: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub include_source_code: bool,
}

impl QuoteRequest {
    pub fn into_selection(self) -> Selection {
        Selection {
            project_types: self.project_types,
            features: self.features,
            business_size: self.business_size,
            current_state: self.current_state,
            timeline: self.timeline,
            currency: self.currency,
            include_source_code: self.include_source_code,
        }
    }
}

/// Body of `POST /api/payment-plans`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPlansRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "MXN".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_request_defaults() {
        let req: QuoteRequest = serde_json::from_str("{}").unwrap();
        assert!(req.project_types.is_empty());
        assert!(req.features.is_empty());
        assert_eq!(req.currency, "MXN");
        assert!(!req.include_source_code);
    }

    #[test]
    fn test_quote_request_camel_case() {
        let req: QuoteRequest = serde_json::from_str(
            r#"{
                "projectTypes": ["website"],
                "features": ["blog", "seo"],
                "businessSize": "1-5",
                "currentState": "fromScratch",
                "timeline": "1-3months",
                "currency": "USD",
                "includeSourceCode": true
            }"#,
        )
        .unwrap();
        assert_eq!(req.project_types, ["website"]);
        assert_eq!(req.business_size, "1-5");
        assert!(req.include_source_code);
    }

    #[test]
    fn test_payment_plans_request_decimal_string() {
        let req: PaymentPlansRequest =
            serde_json::from_str(r#"{"total": "12500", "currency": "MXN"}"#).unwrap();
        assert_eq!(req.total, dec!(12500));
        assert_eq!(req.currency, "MXN");
    }
}
