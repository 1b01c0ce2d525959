//! Core quote calculation functions.
//!
//! Pure functions over the catalog - no I/O. Input handling is deliberately
//! lenient: identifiers that do not resolve in the catalog contribute nothing
//! (multiplier ids fall back to factor 1.0) instead of raising an error, so a
//! stale or hand-edited site payload can never break quoting. Do not tighten
//! this without a product decision; a mistyped id silently lowering the price
//! is the accepted trade-off.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::catalog::Catalog;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is
/// exactly halfway between two possibilities. This reduces cumulative
/// rounding bias, and every rounded amount in the engine goes through here so
/// plan totals stay reproducible.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use quoter_web::quoting::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// A customer's selection set, as collected by the site's quoter UI.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub project_types: Vec<String>,
    pub features: Vec<String>,
    pub business_size: String,
    pub current_state: String,
    pub timeline: String,
    pub currency: String,
    pub include_source_code: bool,
}

/// Computed price estimate, denominated in the requested currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub min: Decimal,
    pub max: Decimal,
    pub total: Decimal,
    pub currency: String,
}

/// The unrounded pipeline value: subtotal, multipliers, surcharge and
/// currency conversion applied, before the estimate bands and rounding.
///
/// Exposed separately so the bands can be verified against the exact value.
pub fn raw_subtotal(catalog: &Catalog, selection: &Selection) -> Decimal {
    let mut base = Decimal::ZERO;
    for id in &selection.project_types {
        if let Some(pt) = catalog.project_type(id) {
            base += pt.base;
        }
    }

    let mut feature_cost = Decimal::ZERO;
    for id in &selection.features {
        if let Some(feature) = catalog.feature(id) {
            feature_cost += feature.cost;
        }
    }

    let mut subtotal = base + feature_cost;

    // Multipliers apply in fixed order: business size, current state,
    // timeline. An unresolved id skips its factor.
    if let Some(size) = catalog.business_size(&selection.business_size) {
        subtotal *= size.factor;
    }
    if let Some(state) = catalog.current_state(&selection.current_state) {
        subtotal *= state.factor;
    }
    if let Some(timeline) = catalog.timeline(&selection.timeline) {
        subtotal *= timeline.factor;
    }

    if selection.include_source_code {
        subtotal *= Decimal::ONE + catalog.source_code_surcharge;
    }

    // Convert only known non-reference currencies; an unknown code stays in
    // reference amounts and is echoed back in the quote.
    if let Some(currency) = catalog.currency(&selection.currency) {
        if currency.code != catalog.reference_currency {
            subtotal /= catalog.exchange_rate;
        }
    }

    subtotal
}

/// Compute a quote for a selection: point estimate plus a -15%/+15% band,
/// both derived from the unrounded subtotal.
pub fn compute_quote(catalog: &Catalog, selection: &Selection) -> Quote {
    let subtotal = raw_subtotal(catalog, selection);

    Quote {
        min: round_money(subtotal * dec!(0.85), 0),
        max: round_money(subtotal * dec!(1.15), 0),
        total: round_money(subtotal, 0),
        currency: selection.currency.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin(dec!(17.5))
    }

    fn selection(project_types: &[&str], features: &[&str], currency: &str) -> Selection {
        Selection {
            project_types: project_types.iter().map(|s| s.to_string()).collect(),
            features: features.iter().map(|s| s.to_string()).collect(),
            business_size: "1-5".to_string(),
            current_state: "fromScratch".to_string(),
            timeline: "1-3months".to_string(),
            currency: currency.to_string(),
            include_source_code: false,
        }
    }

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_bankers_rounding_to_even() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(2));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
        assert_eq!(round_money(dec!(4.5), 0), dec!(4));
        assert_eq!(round_money(dec!(5.5), 0), dec!(6));
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(714.2857), 0), dec!(714));
        assert_eq!(round_money(dec!(607.1428), 0), dec!(607));
        assert_eq!(round_money(dec!(821.4285), 0), dec!(821));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
    }

    // ==================== compute_quote tests ====================

    #[test]
    fn test_quote_website_with_features_mxn() {
        // base 7500 + blog 2500 + seo 2500 = 12500, all multipliers 1.0
        let quote = compute_quote(&catalog(), &selection(&["website"], &["blog", "seo"], "MXN"));
        assert_eq!(quote.total, dec!(12500));
        assert_eq!(quote.min, dec!(10625));
        assert_eq!(quote.max, dec!(14375));
        assert_eq!(quote.currency, "MXN");
    }

    #[test]
    fn test_quote_converts_to_usd() {
        // 12500 / 17.5 = 714.2857...
        let quote = compute_quote(&catalog(), &selection(&["website"], &["blog", "seo"], "USD"));
        assert_eq!(quote.total, dec!(714));
        assert_eq!(quote.min, dec!(607));
        assert_eq!(quote.max, dec!(821));
        assert_eq!(quote.currency, "USD");
    }

    #[test]
    fn test_quote_applies_multipliers_in_order() {
        let mut sel = selection(&["website"], &[], "MXN");
        sel.business_size = "6-20".to_string(); // x1.15
        sel.current_state = "migrate".to_string(); // x1.2
        sel.timeline = "asap".to_string(); // x1.3
        let quote = compute_quote(&catalog(), &sel);
        // 7500 * 1.15 * 1.2 * 1.3 = 13455
        assert_eq!(quote.total, dec!(13455));
    }

    #[test]
    fn test_quote_discount_state_multiplier() {
        let mut sel = selection(&["website"], &[], "MXN");
        sel.current_state = "improve".to_string(); // x0.7
        assert_eq!(compute_quote(&catalog(), &sel).total, dec!(5250));
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let catalog = catalog();
        let known = selection(&["website"], &["blog"], "MXN");
        let mut with_junk = known.clone();
        with_junk.project_types.push("zeppelin".to_string());
        with_junk.features.push("teleportation".to_string());
        assert_eq!(compute_quote(&catalog, &known), compute_quote(&catalog, &with_junk));
    }

    #[test]
    fn test_unknown_multiplier_ids_skip_factor() {
        let catalog = catalog();
        let mut sel = selection(&["website"], &[], "MXN");
        sel.business_size = "enormous".to_string();
        sel.current_state = String::new();
        sel.timeline = "yesterday".to_string();
        assert_eq!(compute_quote(&catalog, &sel).total, dec!(7500));
    }

    #[test]
    fn test_unknown_currency_echoed_without_conversion() {
        let quote = compute_quote(&catalog(), &selection(&["website"], &[], "EUR"));
        assert_eq!(quote.total, dec!(7500));
        assert_eq!(quote.currency, "EUR");
    }

    #[test]
    fn test_empty_selection_quotes_zero() {
        let quote = compute_quote(&catalog(), &selection(&[], &[], "MXN"));
        assert_eq!(quote.total, Decimal::ZERO);
        assert_eq!(quote.min, Decimal::ZERO);
        assert_eq!(quote.max, Decimal::ZERO);
    }

    #[test]
    fn test_features_only_selection_is_valid() {
        let quote = compute_quote(&catalog(), &selection(&[], &["blog", "seo"], "MXN"));
        assert_eq!(quote.total, dec!(5000));
    }

    #[test]
    fn test_source_code_surcharge() {
        let mut sel = selection(&["website"], &["blog", "seo"], "MXN");
        sel.include_source_code = true;
        // 12500 * 1.25 = 15625
        assert_eq!(compute_quote(&catalog(), &sel).total, dec!(15625));
    }

    #[test]
    fn test_surcharge_applies_before_conversion() {
        let catalog = catalog();
        let mut sel = selection(&["website"], &["blog", "seo"], "USD");
        sel.include_source_code = true;
        // 15625 / 17.5 = 892.857... -> 893
        assert_eq!(compute_quote(&catalog, &sel).total, dec!(893));
    }

    #[test]
    fn test_multiple_project_types_sum() {
        // website 7500 + ecommerce 17500 = 25000
        let quote = compute_quote(&catalog(), &selection(&["website", "ecommerce"], &[], "MXN"));
        assert_eq!(quote.total, dec!(25000));
    }

    #[test]
    fn test_quote_is_deterministic() {
        let catalog = catalog();
        let sel = selection(&["saas", "mobileApp"], &["subscriptions", "offlineMode"], "USD");
        assert_eq!(compute_quote(&catalog, &sel), compute_quote(&catalog, &sel));
    }

    #[test]
    fn test_band_from_unrounded_total() {
        let catalog = catalog();
        let sel = selection(&["website"], &["blog", "seo"], "USD");
        let raw = raw_subtotal(&catalog, &sel);
        let quote = compute_quote(&catalog, &sel);
        assert_eq!(quote.min, round_money(raw * dec!(0.85), 0));
        assert_eq!(quote.max, round_money(raw * dec!(1.15), 0));
        assert!(quote.min <= quote.total && quote.total <= quote.max);
    }
}
