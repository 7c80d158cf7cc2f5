//! Capability interface for concatenation-based evaluations.

use crate::models::{Arc, Cost, Resource, Vertex};

/// Label-based route evaluation with O(1) concatenation.
///
/// A forward label summarizes a path from a route's start up to a vertex, a
/// backward label summarizes the path from a vertex to the route's end. Host
/// code (route caches, search operators) is generic over this trait, so
/// other resource models (time windows, multiple resources) plug in as further
/// implementations next to [`CvrpEvaluation`](super::CvrpEvaluation).
///
/// Labels are values: propagation returns a new label and never mutates its
/// input. Implementations do not validate topology, e.g. that `arc` actually
/// connects the two vertices it is passed with.
pub trait ConcatenationEvaluation: Send + Sync {
    /// Label accumulated from the route start.
    type ForwardLabel: Clone;
    /// Label accumulated from the route end.
    type BackwardLabel: Clone;
    /// Vertex attribute payload.
    type VertexData;
    /// Arc attribute payload.
    type ArcData;

    /// Label of a route that starts at `vertex` and has visited nothing else.
    fn create_forward_label(&self, vertex: &Vertex<Self::VertexData>) -> Self::ForwardLabel;

    /// Label of a route that ends at `vertex` and visits nothing after it.
    fn create_backward_label(&self, vertex: &Vertex<Self::VertexData>) -> Self::BackwardLabel;

    /// Extends a label valid at `pred_vertex` across `arc` to `vertex`.
    fn propagate_forward(
        &self,
        pred_label: &Self::ForwardLabel,
        pred_vertex: &Vertex<Self::VertexData>,
        vertex: &Vertex<Self::VertexData>,
        arc: &Arc<Self::ArcData>,
    ) -> Self::ForwardLabel;

    /// Extends a label valid at `succ_vertex` backwards across `arc` to `vertex`.
    fn propagate_backward(
        &self,
        succ_label: &Self::BackwardLabel,
        succ_vertex: &Vertex<Self::VertexData>,
        vertex: &Vertex<Self::VertexData>,
        arc: &Arc<Self::ArcData>,
    ) -> Self::BackwardLabel;

    /// Cost of the route formed by a forward and a backward label that both
    /// end at the join vertex `vertex`.
    fn concatenate(
        &self,
        fwd: &Self::ForwardLabel,
        bwd: &Self::BackwardLabel,
        vertex: &Vertex<Self::VertexData>,
    ) -> Cost;

    /// Cost of a complete route summarized by a forward label.
    fn compute_cost(&self, label: &Self::ForwardLabel) -> Cost;

    /// Returns `true` if the route summarized by `label` satisfies all hard constraints.
    fn is_feasible(&self, label: &Self::ForwardLabel) -> bool;

    /// Unweighted cost breakdown of a complete route.
    fn get_cost_components(&self, label: &Self::ForwardLabel) -> Vec<Resource>;
}
