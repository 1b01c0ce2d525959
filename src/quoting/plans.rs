//! Payment plan generation.
//!
//! Every plan kind is a pure transform `(total, rates) -> PlanBreakdown`;
//! rendering the breakdown to display strings happens in a second step so
//! the amortization arithmetic stays testable without locale concerns.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::catalog::{Catalog, PaymentPlanSpec, PlanKind, PlanRates};

use super::format::format_amount;

/// The pure monetary shape of one payment plan, before display formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanBreakdown {
    /// A single payment.
    OneTime { amount: Decimal },
    /// `count` equal payments; `contract_total` is the effective cost and is
    /// carried explicitly so division round-off never drifts it.
    Installments {
        each: Decimal,
        count: u32,
        contract_total: Decimal,
    },
    /// Upfront license fraction plus a recurring monthly hosting fee.
    LicenseHosting {
        upfront: Decimal,
        hosting_monthly: Decimal,
    },
    /// A block of estimated labor hours at a fixed hourly rate.
    HourBlock { hours: u64, rate: Decimal },
}

impl PlanBreakdown {
    /// Effective total cost of the plan (what the customer ends up paying).
    pub fn effective_total(&self) -> Decimal {
        match self {
            PlanBreakdown::OneTime { amount } => *amount,
            PlanBreakdown::Installments { contract_total, .. } => *contract_total,
            PlanBreakdown::LicenseHosting {
                upfront,
                hosting_monthly,
            } => upfront + hosting_monthly * dec!(12),
            PlanBreakdown::HourBlock { hours, rate } => Decimal::from(*hours) * rate,
        }
    }
}

impl PlanKind {
    /// Amortize a quote total under this plan. Total over its whole input
    /// domain: a non-positive hourly rate yields a zero-hour block instead
    /// of dividing by zero.
    pub fn breakdown(self, total: Decimal, rates: PlanRates) -> PlanBreakdown {
        match self {
            // Single upfront payment earns a 10% discount.
            PlanKind::FullPayment => PlanBreakdown::OneTime {
                amount: total * dec!(0.90),
            },
            PlanKind::SplitPayment => PlanBreakdown::Installments {
                each: total / dec!(2),
                count: 2,
                contract_total: total,
            },
            PlanKind::ThreeInstallments => PlanBreakdown::Installments {
                each: total / dec!(3),
                count: 3,
                contract_total: total,
            },
            PlanKind::SixInstallments => PlanBreakdown::Installments {
                each: total / dec!(6),
                count: 6,
                contract_total: total,
            },
            // 15% financing surcharge spread over a year.
            PlanKind::TwelveMonthFinancing => {
                let financed = total * dec!(1.15);
                PlanBreakdown::Installments {
                    each: financed / dec!(12),
                    count: 12,
                    contract_total: financed,
                }
            }
            // Same surcharge, framed as bundled maintenance.
            PlanKind::MonthlySubscription => {
                let contract = total + total * dec!(0.15);
                PlanBreakdown::Installments {
                    each: contract / dec!(12),
                    count: 12,
                    contract_total: contract,
                }
            }
            PlanKind::AnnualLicense => PlanBreakdown::LicenseHosting {
                upfront: total * dec!(0.60),
                hosting_monthly: rates.hosting_fee,
            },
            // Hours round up: the estimate never undercharges labor.
            PlanKind::HourlyRetainer => {
                let hours = if rates.hourly_rate > Decimal::ZERO {
                    (total / rates.hourly_rate).ceil().to_u64().unwrap_or(0)
                } else {
                    0
                };
                PlanBreakdown::HourBlock {
                    hours,
                    rate: rates.hourly_rate,
                }
            }
            PlanKind::PayrollStyle => PlanBreakdown::Installments {
                each: total / dec!(6),
                count: 6,
                contract_total: total,
            },
        }
    }
}

/// A payment plan rendered for display, with its effective total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPlan {
    pub id: String,
    pub label: String,
    pub description: String,
    pub icon: String,
    pub badge: Option<String>,
    pub primary: String,
    pub secondary: Option<String>,
    pub total_cost: Decimal,
}

/// Generate one plan per catalog strategy, in catalog order (the list is a
/// ranked recommendation, not a set). Currency-keyed rate constants fall
/// back to the reference currency for unknown codes.
pub fn generate_payment_plans(catalog: &Catalog, total: Decimal, currency: &str) -> Vec<GeneratedPlan> {
    let rates = catalog.plan_rates(currency);
    let symbol = catalog.currency(currency).map(|c| c.symbol.as_str());

    catalog
        .payment_plans
        .iter()
        .map(|spec| {
            let breakdown = spec.kind.breakdown(total, rates);
            let (primary, secondary) = render(spec, &breakdown, symbol);
            GeneratedPlan {
                id: spec.id.clone(),
                label: spec.label.clone(),
                description: spec.description.clone(),
                icon: spec.icon.clone(),
                badge: spec.badge.clone(),
                primary,
                secondary,
                total_cost: breakdown.effective_total(),
            }
        })
        .collect()
}

fn render(
    spec: &PaymentPlanSpec,
    breakdown: &PlanBreakdown,
    symbol: Option<&str>,
) -> (String, Option<String>) {
    match breakdown {
        PlanBreakdown::OneTime { amount } => (format_amount(*amount, symbol), spec.note.clone()),
        PlanBreakdown::Installments { each, .. } => {
            let mut primary = format_amount(*each, symbol);
            if spec.per_month {
                primary.push_str("/mo");
            }
            (primary, spec.note.clone())
        }
        PlanBreakdown::LicenseHosting {
            upfront,
            hosting_monthly,
        } => (
            format_amount(*upfront, symbol),
            Some(format!("+ {}/mo server", format_amount(*hosting_monthly, symbol))),
        ),
        PlanBreakdown::HourBlock { hours, rate } => (
            format!("~{hours} hrs"),
            Some(format!("@ {}/hr", format_amount(*rate, symbol))),
        ),
    }
}
