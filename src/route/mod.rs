//! Route-level label caches and move evaluation.
//!
//! - [`RouteLabels`] — Forward/backward labels at every position of a route,
//!   with O(1) evaluation of removal, insertion and 2-opt* moves
//! - [`distribute_randomly`] — Random assignment of customers to routes

mod labels;
mod random;

pub use labels::RouteLabels;
pub use random::{distribute_randomly, random_routes};
