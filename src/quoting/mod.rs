//! Quote engine module.
//!
//! Pure quote calculation and payment-plan generation over the immutable
//! catalog, plus the JSON API handlers the site talks to.

pub mod calculators;
pub mod format;
pub mod plans;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{compute_quote, raw_subtotal, round_money, Quote, Selection};
pub use plans::{generate_payment_plans, GeneratedPlan, PlanBreakdown};
pub use routes::router;
