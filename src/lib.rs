//! # cvrp-concat
//!
//! Concatenation-based route evaluation for the capacitated vehicle routing
//! problem. Partial routes are summarized by forward and backward labels;
//! joining a prefix and a suffix costs O(1) instead of a rescan of the route.
//! Capacity is a soft constraint, penalized per unit of overload.
//!
//! ## Modules
//!
//! - [`models`] — Vertex and arc types with their CVRP attribute payloads
//! - [`evaluation`] — Labels, propagation, concatenation, cost and feasibility
//! - [`instance`] — Vertex list and dense arc matrix
//! - [`route`] — Per-route label caches and O(1) move evaluation

pub mod evaluation;
pub mod instance;
pub mod models;
pub mod route;

/// Build version, taken from `CVRP_CONCAT_BUILD_VERSION` at compile time if
/// set, otherwise the package version.
pub const VERSION: &str = match option_env!("CVRP_CONCAT_BUILD_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};
