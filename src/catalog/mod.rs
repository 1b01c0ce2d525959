//! Quoting catalog: immutable reference data for the quote engine.
//!
//! The catalog is built once at startup and shared behind an `Arc`; nothing
//! mutates it afterwards, so concurrent handlers read it without locks.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

mod data;

/// A sellable project category with a base price in the reference currency.
///
/// `features` lists the ids of the add-on features the site offers alongside
/// this project type, in display order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectType {
    pub id: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub base: Decimal,
    pub label: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
}

/// An add-on feature with an incremental cost in the reference currency.
///
/// A zero cost marks baseline behavior that ships with a project type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub cost: Decimal,
    pub label: String,
    pub description: String,
    pub icon: String,
}

/// One option on a multiplicative selection axis (business size, current
/// state, or timeline). The chosen option's factor scales the subtotal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiplierOption {
    pub id: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub factor: Decimal,
    pub label: String,
    pub icon: String,
}

/// A supported display currency. Catalog amounts are authored in the
/// reference currency; other currencies derive via the fixed exchange rate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub code: String,
    pub symbol: String,
    pub flag: String,
    pub name: String,
}

/// Payment-plan strategy kinds. Each maps a quote total to a concrete
/// payment breakdown; the arithmetic lives in `quoting::plans`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanKind {
    FullPayment,
    SplitPayment,
    ThreeInstallments,
    SixInstallments,
    TwelveMonthFinancing,
    MonthlySubscription,
    AnnualLicense,
    HourlyRetainer,
    PayrollStyle,
}

/// Declared metadata for one payment plan, in catalog (display) order.
///
/// `note` is the static secondary annotation for plans whose annotation
/// carries no computed value; plans that embed amounts (hosting fee, hourly
/// rate) render their annotation at generation time instead. `per_month`
/// marks plans whose primary amount displays with a per-month suffix.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPlanSpec {
    pub id: String,
    #[serde(skip)]
    pub kind: PlanKind,
    pub label: String,
    pub description: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip)]
    pub note: Option<String>,
    #[serde(skip)]
    pub per_month: bool,
}

/// Per-currency constants used by the retainer and license plans.
#[derive(Debug, Clone, Copy)]
pub struct PlanRates {
    pub hourly_rate: Decimal,
    pub hosting_fee: Decimal,
}

/// The full immutable catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub project_types: Vec<ProjectType>,
    pub features: BTreeMap<String, Feature>,
    pub business_sizes: Vec<MultiplierOption>,
    pub current_states: Vec<MultiplierOption>,
    pub timelines: Vec<MultiplierOption>,
    pub currencies: Vec<Currency>,
    pub payment_plans: Vec<PaymentPlanSpec>,
    /// Currency all catalog amounts are authored in.
    pub reference_currency: String,
    /// Fixed rate: reference-currency amount / rate = converted amount.
    pub exchange_rate: Decimal,
    /// Surcharge factor fraction applied when source-code ownership is
    /// included in the selection (0.25 = +25%).
    pub source_code_surcharge: Decimal,
    hourly_rates: BTreeMap<String, Decimal>,
    hosting_fees: BTreeMap<String, Decimal>,
}

impl Catalog {
    pub fn project_type(&self, id: &str) -> Option<&ProjectType> {
        self.project_types.iter().find(|p| p.id == id)
    }

    pub fn feature(&self, id: &str) -> Option<&Feature> {
        self.features.get(id)
    }

    pub fn business_size(&self, id: &str) -> Option<&MultiplierOption> {
        self.business_sizes.iter().find(|o| o.id == id)
    }

    pub fn current_state(&self, id: &str) -> Option<&MultiplierOption> {
        self.current_states.iter().find(|o| o.id == id)
    }

    pub fn timeline(&self, id: &str) -> Option<&MultiplierOption> {
        self.timelines.iter().find(|o| o.id == id)
    }

    pub fn currency(&self, code: &str) -> Option<&Currency> {
        self.currencies.iter().find(|c| c.code == code)
    }

    /// Hourly development rate for a currency. Unknown codes fall back to
    /// the reference currency's rate rather than failing.
    pub fn hourly_rate(&self, code: &str) -> Decimal {
        self.rate_or_reference(&self.hourly_rates, code)
    }

    /// Monthly hosting fee for a currency, with the same fallback.
    pub fn hosting_fee(&self, code: &str) -> Decimal {
        self.rate_or_reference(&self.hosting_fees, code)
    }

    /// Both plan constants for a currency, resolved together.
    pub fn plan_rates(&self, code: &str) -> PlanRates {
        PlanRates {
            hourly_rate: self.hourly_rate(code),
            hosting_fee: self.hosting_fee(code),
        }
    }

    fn rate_or_reference(&self, table: &BTreeMap<String, Decimal>, code: &str) -> Decimal {
        table
            .get(code)
            .or_else(|| table.get(&self.reference_currency))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn catalog() -> Catalog {
        Catalog::builtin(dec!(17.5))
    }

    #[test]
    fn test_project_type_ids_unique() {
        let catalog = catalog();
        let mut ids: Vec<&str> = catalog.project_types.iter().map(|p| p.id.as_str()).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_multiplier_ids_unique_per_axis() {
        let catalog = catalog();
        for axis in [
            &catalog.business_sizes,
            &catalog.current_states,
            &catalog.timelines,
        ] {
            let mut ids: Vec<&str> = axis.iter().map(|o| o.id.as_str()).collect();
            let before = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), before);
        }
    }

    #[test]
    fn test_every_project_type_feature_resolves() {
        let catalog = catalog();
        for pt in &catalog.project_types {
            for fid in &pt.features {
                assert!(
                    catalog.feature(fid).is_some(),
                    "project type '{}' references unknown feature '{}'",
                    pt.id,
                    fid
                );
            }
        }
    }

    #[test]
    fn test_lookups_hit_and_miss() {
        let catalog = catalog();
        assert!(catalog.project_type("website").is_some());
        assert!(catalog.project_type("spaceship").is_none());
        assert!(catalog.feature("blog").is_some());
        assert!(catalog.feature("antigravity").is_none());
        assert!(catalog.business_size("1-5").is_some());
        assert!(catalog.current_state("fromScratch").is_some());
        assert!(catalog.timeline("1-3months").is_some());
        assert!(catalog.currency("MXN").is_some());
        assert!(catalog.currency("EUR").is_none());
    }

    #[test]
    fn test_plan_rate_fallback_to_reference_currency() {
        let catalog = catalog();
        assert_eq!(catalog.hourly_rate("MXN"), dec!(500));
        assert_eq!(catalog.hourly_rate("USD"), dec!(30));
        assert_eq!(catalog.hourly_rate("EUR"), dec!(500));
        assert_eq!(catalog.hosting_fee("USD"), dec!(170));
        assert_eq!(catalog.hosting_fee("JPY"), dec!(3000));
    }

    #[test]
    fn test_costs_non_negative() {
        let catalog = catalog();
        assert!(catalog.project_types.iter().all(|p| p.base >= Decimal::ZERO));
        assert!(catalog.features.values().all(|f| f.cost >= Decimal::ZERO));
    }

    #[test]
    fn test_payment_plan_order() {
        let catalog = catalog();
        let ids: Vec<&str> = catalog
            .payment_plans
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(
            ids,
            [
                "fullPayment",
                "splitPayment",
                "msi3",
                "msi6",
                "financing12",
                "saasMonthly",
                "annualLicense",
                "timeRetainer",
                "payroll",
            ]
        );
    }
}
