//! Label-based route evaluation.
//!
//! - [`ConcatenationEvaluation`] — Capability interface: create, propagate and
//!   concatenate labels, and compute cost and feasibility
//! - [`CvrpEvaluation`] — Capacitated VRP implementation with a soft,
//!   penalized capacity constraint
//! - [`EvaluationConfig`] — Capacity and overload penalty factor

mod config;
mod cvrp;
mod label;
mod traits;

pub use config::EvaluationConfig;
pub use cvrp::{CostComponent, CvrpEvaluation};
pub use label::{CvrpBackwardLabel, CvrpForwardLabel};
pub use traits::ConcatenationEvaluation;
