//! Property tests for the quote pipeline and payment plans.

use proptest::prelude::*;
use quoter_web::catalog::{Catalog, PlanKind};
use quoter_web::quoting::{
    compute_quote, generate_payment_plans, raw_subtotal, round_money, PlanBreakdown, Selection,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const PROJECT_TYPE_IDS: &[&str] = &[
    "website",
    "ecommerce",
    "mobileApp",
    "saas",
    "consulting",
    "migration",
];
const FEATURE_IDS: &[&str] = &[
    "blog",
    "seo",
    "adminPanel",
    "stripePayments",
    "offlineMode",
    "whiteLabeling",
    "responsiveDesign",
];
const SIZE_IDS: &[&str] = &["1-5", "6-20", "21-50", "50+"];
const STATE_IDS: &[&str] = &["fromScratch", "improve", "migrate"];
const TIMELINE_IDS: &[&str] = &["asap", "1-3months", "3-6months", "exploring"];

fn catalog() -> Catalog {
    Catalog::builtin(dec!(17.5))
}

/// Mix of real catalog ids and junk, since the engine must tolerate both.
fn known_or_junk(known: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(known).prop_map(str::to_string),
        "[a-z]{1,10}",
    ]
}

fn selections() -> impl Strategy<Value = Selection> {
    (
        prop::collection::vec(known_or_junk(PROJECT_TYPE_IDS), 0..4),
        prop::collection::vec(known_or_junk(FEATURE_IDS), 0..6),
        known_or_junk(SIZE_IDS),
        known_or_junk(STATE_IDS),
        known_or_junk(TIMELINE_IDS),
        prop_oneof![
            Just("MXN".to_string()),
            Just("USD".to_string()),
            "[A-Z]{3}",
        ],
        any::<bool>(),
    )
        .prop_map(
            |(
                project_types,
                features,
                business_size,
                current_state,
                timeline,
                currency,
                include_source_code,
            )| Selection {
                project_types,
                features,
                business_size,
                current_state,
                timeline,
                currency,
                include_source_code,
            },
        )
}

proptest! {
    #[test]
    fn quote_band_always_ordered(selection in selections()) {
        let quote = compute_quote(&catalog(), &selection);
        prop_assert!(quote.min <= quote.total);
        prop_assert!(quote.total <= quote.max);
    }

    #[test]
    fn band_ratio_fixed_up_to_rounding(selection in selections()) {
        // min = round(raw * 0.85) and max = round(raw * 1.15), each within
        // 0.5 of the exact value, so 17*max and 23*min agree within 20.
        let quote = compute_quote(&catalog(), &selection);
        let diff = dec!(17) * quote.max - dec!(23) * quote.min;
        prop_assert!(diff.abs() <= dec!(20));
    }

    #[test]
    fn quote_is_deterministic(selection in selections()) {
        let catalog = catalog();
        prop_assert_eq!(
            compute_quote(&catalog, &selection),
            compute_quote(&catalog, &selection)
        );
    }

    #[test]
    fn conversion_commutes_with_pipeline(selection in selections()) {
        let catalog = catalog();
        let mut reference = selection.clone();
        reference.currency = "MXN".to_string();
        let mut converted = selection;
        converted.currency = "USD".to_string();

        let raw = raw_subtotal(&catalog, &reference);
        let direct = compute_quote(&catalog, &converted);
        prop_assert_eq!(round_money(raw / dec!(17.5), 0), direct.total);
    }

    #[test]
    fn junk_ids_never_change_the_quote(selection in selections(), junk in "[0-9]{4,8}") {
        // No catalog id is all digits, so these never resolve.
        let catalog = catalog();
        let baseline = compute_quote(&catalog, &selection);
        let mut noisy = selection;
        noisy.project_types.push(junk.clone());
        noisy.features.push(junk);
        prop_assert_eq!(baseline, compute_quote(&catalog, &noisy));
    }

    #[test]
    fn retainer_hours_never_undercount(total in 0i64..5_000_000) {
        let catalog = catalog();
        let total = Decimal::from(total);
        for currency in ["MXN", "USD", "XXX"] {
            let rates = catalog.plan_rates(currency);
            match PlanKind::HourlyRetainer.breakdown(total, rates) {
                PlanBreakdown::HourBlock { hours, rate } => {
                    prop_assert!(Decimal::from(hours) * rate >= total);
                    if hours > 0 {
                        prop_assert!(Decimal::from(hours - 1) * rate < total);
                    }
                }
                other => prop_assert!(false, "unexpected breakdown: {:?}", other),
            }
        }
    }

    #[test]
    fn full_payment_cost_is_exactly_ninety_percent(total in 0i64..5_000_000) {
        let catalog = catalog();
        let total = Decimal::from(total);
        let plans = generate_payment_plans(&catalog, total, "MXN");
        let full = plans.iter().find(|p| p.id == "fullPayment").unwrap();
        prop_assert_eq!(full.total_cost, total * dec!(0.90));
    }

    #[test]
    fn plan_menu_is_stable_and_ordered(total in 0i64..5_000_000) {
        let catalog = catalog();
        let plans = generate_payment_plans(&catalog, Decimal::from(total), "USD");
        prop_assert_eq!(plans.len(), catalog.payment_plans.len());
        for (plan, spec) in plans.iter().zip(catalog.payment_plans.iter()) {
            prop_assert_eq!(&plan.id, &spec.id);
        }
    }
}
