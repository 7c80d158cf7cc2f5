//! Cached forward/backward labels of a single route.
//!
//! # Algorithm
//!
//! For a route `v[0] = depot, v[1], ..., v[n-1] = depot`:
//!
//! ```text
//! fwd[0] = create_forward_label(v[0])
//! fwd[k] = propagate_forward(fwd[k-1], v[k-1], v[k], arc(v[k-1], v[k]))
//! bwd[n-1] = create_backward_label(v[n-1])
//! bwd[k] = propagate_backward(bwd[k+1], v[k+1], v[k], arc(v[k], v[k+1]))
//! ```
//!
//! Building costs O(n). Afterwards any move that keeps a prefix of one route
//! and a suffix of another (or the same) route is evaluated in O(1) by
//! propagating the prefix label across the few new arcs and concatenating it
//! with the suffix's backward label.

use std::fmt;

use tracing::trace;

use crate::evaluation::ConcatenationEvaluation;
use crate::instance::Instance;
use crate::models::{Cost, Resource};

/// Forward and backward labels at every position of a depot-to-depot route.
///
/// Labels do not depend on the evaluation's penalty factor, so they stay
/// valid when the factor changes; only costs must be recomputed.
///
/// # Examples
///
/// ```
/// use cvrp_concat::evaluation::CvrpEvaluation;
/// use cvrp_concat::instance::cvrp_instance;
/// use cvrp_concat::route::RouteLabels;
///
/// let instance = cvrp_instance(
///     &[0.0, 4.0, 3.0],
///     &[
///         vec![0.0, 2.0, 5.0],
///         vec![2.0, 0.0, 3.0],
///         vec![5.0, 3.0, 0.0],
///     ],
///     0,
///     1,
/// )
/// .unwrap();
/// let eval = CvrpEvaluation::new(10.0);
///
/// let route = RouteLabels::new(&eval, &instance, &[1, 2]);
/// assert_eq!(route.vertex_ids(), &[0, 1, 2, 0]);
/// // 0 -> 1 -> 2 -> 0 = 2 + 3 + 5
/// assert_eq!(route.cost(&eval), 10.0);
/// // dropping customer 1 gives 0 -> 2 -> 0 = 10 as well
/// assert_eq!(route.evaluate_removal(&eval, &instance, 1), 10.0);
/// ```
pub struct RouteLabels<E: ConcatenationEvaluation> {
    vertex_ids: Vec<usize>,
    forward: Vec<E::ForwardLabel>,
    backward: Vec<E::BackwardLabel>,
}

impl<E: ConcatenationEvaluation> RouteLabels<E> {
    /// Computes the labels of the route `depot, customers..., depot`.
    ///
    /// # Panics
    ///
    /// Panics if a customer ID is not a vertex of `instance`.
    pub fn new(
        evaluation: &E,
        instance: &Instance<E::VertexData, E::ArcData>,
        customers: &[usize],
    ) -> Self {
        let depot = instance.depot().id();
        let mut vertex_ids = Vec::with_capacity(customers.len() + 2);
        vertex_ids.push(depot);
        vertex_ids.extend_from_slice(customers);
        vertex_ids.push(depot);

        let n = vertex_ids.len();
        let mut forward = Vec::with_capacity(n);
        forward.push(evaluation.create_forward_label(instance.vertex(depot)));
        for k in 1..n {
            let (pred, cur) = (vertex_ids[k - 1], vertex_ids[k]);
            let label = evaluation.propagate_forward(
                &forward[k - 1],
                instance.vertex(pred),
                instance.vertex(cur),
                instance.arc(pred, cur),
            );
            forward.push(label);
        }

        // Built end-to-start, reversed below.
        let mut backward = Vec::with_capacity(n);
        backward.push(evaluation.create_backward_label(instance.vertex(depot)));
        for k in (0..n - 1).rev() {
            let (cur, succ) = (vertex_ids[k], vertex_ids[k + 1]);
            let label = evaluation.propagate_backward(
                &backward[backward.len() - 1],
                instance.vertex(succ),
                instance.vertex(cur),
                instance.arc(cur, succ),
            );
            backward.push(label);
        }
        backward.reverse();

        trace!(positions = n, "route labels built");

        Self {
            vertex_ids,
            forward,
            backward,
        }
    }

    /// Vertex IDs by position, depot at both ends.
    pub fn vertex_ids(&self) -> &[usize] {
        &self.vertex_ids
    }

    /// Customer IDs in visit order (depots excluded).
    pub fn customer_ids(&self) -> &[usize] {
        &self.vertex_ids[1..self.vertex_ids.len() - 1]
    }

    /// Number of positions, both depot visits included.
    pub fn num_positions(&self) -> usize {
        self.vertex_ids.len()
    }

    /// Returns `true` if the route visits no customers.
    pub fn is_empty(&self) -> bool {
        self.vertex_ids.len() == 2
    }

    /// Forward label at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn forward_label(&self, pos: usize) -> &E::ForwardLabel {
        &self.forward[pos]
    }

    /// Backward label at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn backward_label(&self, pos: usize) -> &E::BackwardLabel {
        &self.backward[pos]
    }

    /// Forward label of the complete route.
    pub fn end_label(&self) -> &E::ForwardLabel {
        &self.forward[self.forward.len() - 1]
    }

    /// Cost of the complete route.
    pub fn cost(&self, evaluation: &E) -> Cost {
        evaluation.compute_cost(self.end_label())
    }

    /// Returns `true` if the complete route satisfies all hard constraints.
    pub fn is_feasible(&self, evaluation: &E) -> bool {
        evaluation.is_feasible(self.end_label())
    }

    /// Unweighted cost breakdown of the complete route.
    pub fn cost_components(&self, evaluation: &E) -> Vec<Resource> {
        evaluation.get_cost_components(self.end_label())
    }

    /// Cost of the route obtained by joining its own forward and backward
    /// labels at `pos`. Equal to [`cost`](Self::cost) for every position.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn concatenate_at(
        &self,
        evaluation: &E,
        instance: &Instance<E::VertexData, E::ArcData>,
        pos: usize,
    ) -> Cost {
        evaluation.concatenate(
            &self.forward[pos],
            &self.backward[pos],
            instance.vertex(self.vertex_ids[pos]),
        )
    }

    /// Cost of the route without the vertex at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is a depot position or out of bounds.
    pub fn evaluate_removal(
        &self,
        evaluation: &E,
        instance: &Instance<E::VertexData, E::ArcData>,
        pos: usize,
    ) -> Cost {
        assert!(
            pos > 0 && pos + 1 < self.vertex_ids.len(),
            "cannot remove depot position {pos}"
        );
        let (prev, next) = (self.vertex_ids[pos - 1], self.vertex_ids[pos + 1]);
        let joined = evaluation.propagate_forward(
            &self.forward[pos - 1],
            instance.vertex(prev),
            instance.vertex(next),
            instance.arc(prev, next),
        );
        evaluation.concatenate(&joined, &self.backward[pos + 1], instance.vertex(next))
    }

    /// Cost of the route with `vertex_id` inserted between positions
    /// `after_pos` and `after_pos + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `after_pos` is the last position or out of bounds.
    pub fn evaluate_insertion(
        &self,
        evaluation: &E,
        instance: &Instance<E::VertexData, E::ArcData>,
        after_pos: usize,
        vertex_id: usize,
    ) -> Cost {
        let (prev, next) = (self.vertex_ids[after_pos], self.vertex_ids[after_pos + 1]);
        let inserted = evaluation.propagate_forward(
            &self.forward[after_pos],
            instance.vertex(prev),
            instance.vertex(vertex_id),
            instance.arc(prev, vertex_id),
        );
        let joined = evaluation.propagate_forward(
            &inserted,
            instance.vertex(vertex_id),
            instance.vertex(next),
            instance.arc(vertex_id, next),
        );
        evaluation.concatenate(&joined, &self.backward[after_pos + 1], instance.vertex(next))
    }

    /// Cost of the route made of this route's prefix up to and including
    /// position `i`, followed by `other`'s suffix from position `j` on.
    ///
    /// With two distinct routes this is one half of an inter-route 2-opt
    /// (2-opt*) move; the other half is `other.evaluate_two_opt_star(self, j - 1, i + 1)`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    pub fn evaluate_two_opt_star(
        &self,
        evaluation: &E,
        instance: &Instance<E::VertexData, E::ArcData>,
        other: &RouteLabels<E>,
        i: usize,
        j: usize,
    ) -> Cost {
        let (from, to) = (self.vertex_ids[i], other.vertex_ids[j]);
        let joined = evaluation.propagate_forward(
            &self.forward[i],
            instance.vertex(from),
            instance.vertex(to),
            instance.arc(from, to),
        );
        evaluation.concatenate(&joined, &other.backward[j], instance.vertex(to))
    }
}

impl<E: ConcatenationEvaluation> Clone for RouteLabels<E> {
    fn clone(&self) -> Self {
        Self {
            vertex_ids: self.vertex_ids.clone(),
            forward: self.forward.clone(),
            backward: self.backward.clone(),
        }
    }
}

impl<E> fmt::Debug for RouteLabels<E>
where
    E: ConcatenationEvaluation,
    E::ForwardLabel: fmt::Debug,
    E::BackwardLabel: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteLabels")
            .field("vertex_ids", &self.vertex_ids)
            .field("forward", &self.forward)
            .field("backward", &self.backward)
            .finish()
    }
}
