//! Quoting engine for the studio marketing site.
//!
//! Three parts: an immutable [`catalog`], pure quote calculation and payment
//! plan generation in [`quoting`], and the small JSON API the site consumes
//! (`quoting::router`). Everything downstream of the catalog is a pure
//! function, so handlers share state without synchronization.

pub mod catalog;
pub mod config;
pub mod error;
pub mod quoting;

use std::sync::Arc;

use catalog::Catalog;

/// Shared application state: the catalog, built once at startup and
/// read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}
