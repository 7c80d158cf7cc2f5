//! Concatenation-based evaluation for the capacitated VRP.
//!
//! # Cost model
//!
//! ```text
//! cost = distance + max(0, load - capacity) * overload_penalty_factor
//! ```
//!
//! Capacity is a soft constraint: an overloaded route has a finite cost that
//! grows with the overload, so a search can pass through infeasible states.
//! [`CvrpEvaluation::is_feasible`] reports hard feasibility separately.
//!
//! # Label accounting
//!
//! A forward label starts with the start vertex's demand and each forward
//! step adds the demand of the vertex reached. A backward label starts at zero
//! and each backward step adds the demand of the vertex it leaves (the
//! successor). At a join vertex `v`, `fwd.load` includes `v` and `bwd.load`
//! covers everything after `v`, so the sum is the route's total demand. The
//! two creation rules and the two propagation rules only work as a pair.

use tracing::debug;

use crate::models::{Arc, Cost, CvrpArcData, CvrpVertexData, Resource, Vertex};

use super::config::EvaluationConfig;
use super::label::{CvrpBackwardLabel, CvrpForwardLabel};
use super::traits::ConcatenationEvaluation;

/// Index of each entry in [`CvrpEvaluation::get_cost_components`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum CostComponent {
    /// Total travel distance.
    Distance = 0,
    /// Load above capacity, before weighting.
    Overload = 1,
}

impl CostComponent {
    /// Position in the cost component vector.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// CVRP evaluation with a soft capacity constraint.
///
/// Owns its capacity (fixed) and overload penalty factor (adjustable between
/// evaluations). Each solver run should own its own instance.
///
/// # Examples
///
/// ```
/// use cvrp_concat::evaluation::{ConcatenationEvaluation, CvrpEvaluation};
/// use cvrp_concat::models::{create_cvrp_arc, create_cvrp_vertex, CvrpArcData, CvrpVertexData};
///
/// let eval = CvrpEvaluation::new(10.0);
/// let depot = create_cvrp_vertex(0, "0", false, true, CvrpVertexData::new(0.0));
/// let c1 = create_cvrp_vertex(1, "1", false, false, CvrpVertexData::new(12.0));
/// let arc = create_cvrp_arc(CvrpArcData::new(4.0));
///
/// let start = eval.create_forward_label(&depot);
/// let label = eval.propagate_forward(&start, &depot, &c1, &arc);
/// assert_eq!(label.distance, 4.0);
/// assert_eq!(label.load, 12.0);
/// assert!(!eval.is_feasible(&label));
/// // 4 distance + 2 overload
/// assert_eq!(eval.compute_cost(&label), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CvrpEvaluation {
    storage_capacity: Resource,
    overload_penalty_factor: f64,
}

impl CvrpEvaluation {
    /// Creates an evaluation for vehicles of the given capacity, with an
    /// overload penalty factor of `1.0`.
    pub fn new(storage_capacity: Resource) -> Self {
        Self::from_config(EvaluationConfig::new(storage_capacity))
    }

    /// Creates an evaluation from a configuration.
    pub fn from_config(config: EvaluationConfig) -> Self {
        Self {
            storage_capacity: config.storage_capacity,
            overload_penalty_factor: config.overload_penalty_factor,
        }
    }

    /// Current parameters.
    pub fn config(&self) -> EvaluationConfig {
        EvaluationConfig {
            storage_capacity: self.storage_capacity,
            overload_penalty_factor: self.overload_penalty_factor,
        }
    }

    /// Vehicle capacity.
    pub fn storage_capacity(&self) -> Resource {
        self.storage_capacity
    }

    /// Cost per unit of overload.
    pub fn overload_penalty_factor(&self) -> f64 {
        self.overload_penalty_factor
    }

    /// Sets the cost per unit of overload. Applies to every subsequent evaluation.
    pub fn set_overload_penalty_factor(&mut self, factor: f64) {
        debug!(
            old = self.overload_penalty_factor,
            new = factor,
            "overload penalty factor changed"
        );
        self.overload_penalty_factor = factor;
    }

    #[inline]
    fn overload(&self, load: Resource) -> Resource {
        (load - self.storage_capacity).max(0.0)
    }

    #[inline]
    fn weighted_cost(&self, distance: Resource, overload: Resource) -> Cost {
        distance + overload * self.overload_penalty_factor
    }
}

impl ConcatenationEvaluation for CvrpEvaluation {
    type ForwardLabel = CvrpForwardLabel;
    type BackwardLabel = CvrpBackwardLabel;
    type VertexData = CvrpVertexData;
    type ArcData = CvrpArcData;

    #[inline]
    fn create_forward_label(&self, vertex: &Vertex<CvrpVertexData>) -> CvrpForwardLabel {
        CvrpForwardLabel::new(0.0, vertex.data().demand)
    }

    #[inline]
    fn create_backward_label(&self, _vertex: &Vertex<CvrpVertexData>) -> CvrpBackwardLabel {
        CvrpBackwardLabel::new(0.0, 0.0)
    }

    #[inline]
    fn propagate_forward(
        &self,
        pred_label: &CvrpForwardLabel,
        _pred_vertex: &Vertex<CvrpVertexData>,
        vertex: &Vertex<CvrpVertexData>,
        arc: &Arc<CvrpArcData>,
    ) -> CvrpForwardLabel {
        CvrpForwardLabel::new(
            pred_label.distance + arc.data().distance,
            pred_label.load + vertex.data().demand,
        )
    }

    #[inline]
    fn propagate_backward(
        &self,
        succ_label: &CvrpBackwardLabel,
        succ_vertex: &Vertex<CvrpVertexData>,
        _vertex: &Vertex<CvrpVertexData>,
        arc: &Arc<CvrpArcData>,
    ) -> CvrpBackwardLabel {
        CvrpBackwardLabel::new(
            succ_label.distance + arc.data().distance,
            succ_label.load + succ_vertex.data().demand,
        )
    }

    #[inline]
    fn concatenate(
        &self,
        fwd: &CvrpForwardLabel,
        bwd: &CvrpBackwardLabel,
        _vertex: &Vertex<CvrpVertexData>,
    ) -> Cost {
        self.weighted_cost(
            fwd.distance + bwd.distance,
            self.overload(fwd.load + bwd.load),
        )
    }

    #[inline]
    fn compute_cost(&self, label: &CvrpForwardLabel) -> Cost {
        self.weighted_cost(label.distance, self.overload(label.load))
    }

    #[inline]
    fn is_feasible(&self, label: &CvrpForwardLabel) -> bool {
        label.load <= self.storage_capacity
    }

    fn get_cost_components(&self, label: &CvrpForwardLabel) -> Vec<Resource> {
        vec![label.distance, self.overload(label.load)]
    }
}
