//! Routing instances.
//!
//! Holds the vertices and the dense arc matrix a route is evaluated against.

mod error;
#[allow(clippy::module_inception)]
mod instance;

pub use error::InstanceError;
pub use instance::{cvrp_instance, Instance};
