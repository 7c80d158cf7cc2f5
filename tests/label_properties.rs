//! Property tests for CVRP label propagation and concatenation.
//!
//! Demands and distances are drawn as small integers so every sum is exact
//! in `f64` and costs can be compared with `==`.

use cvrp_concat::evaluation::{
    ConcatenationEvaluation, CostComponent, CvrpBackwardLabel, CvrpEvaluation, CvrpForwardLabel,
};
use cvrp_concat::instance::cvrp_instance;
use cvrp_concat::models::{create_cvrp_arc, create_cvrp_vertex, CvrpArcData, CvrpVertexData};
use cvrp_concat::route::RouteLabels;
use proptest::prelude::*;

fn path_strategy() -> impl Strategy<Value = (Vec<u16>, Vec<u16>)> {
    (1usize..12).prop_flat_map(|n| {
        (
            prop::collection::vec(0u16..100, n),
            prop::collection::vec(0u16..100, n - 1),
        )
    })
}

/// Forward labels after each vertex of the path.
fn forward_labels(
    eval: &CvrpEvaluation,
    demands: &[u16],
    distances: &[u16],
) -> Vec<CvrpForwardLabel> {
    let vertices: Vec<_> = demands
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            create_cvrp_vertex(i, i.to_string(), false, i == 0, CvrpVertexData::new(d as f64))
        })
        .collect();
    let mut labels = vec![eval.create_forward_label(&vertices[0])];
    for (k, &dist) in distances.iter().enumerate() {
        let arc = create_cvrp_arc(CvrpArcData::new(dist as f64));
        let next = eval.propagate_forward(&labels[k], &vertices[k], &vertices[k + 1], &arc);
        labels.push(next);
    }
    labels
}

proptest! {
    #[test]
    fn forward_label_sums_demands_and_distances(
        (demands, distances) in path_strategy(),
        capacity in 0u16..600,
    ) {
        let eval = CvrpEvaluation::new(capacity as f64);
        let labels = forward_labels(&eval, &demands, &distances);
        let last = labels[labels.len() - 1];
        let total_demand: u32 = demands.iter().map(|&d| d as u32).sum();
        let total_distance: u32 = distances.iter().map(|&d| d as u32).sum();
        prop_assert_eq!(last.load, total_demand as f64);
        prop_assert_eq!(last.distance, total_distance as f64);
    }

    #[test]
    fn propagation_is_monotone((demands, distances) in path_strategy()) {
        let eval = CvrpEvaluation::new(50.0);
        let labels = forward_labels(&eval, &demands, &distances);
        for w in labels.windows(2) {
            prop_assert!(w[1].distance >= w[0].distance);
            prop_assert!(w[1].load >= w[0].load);
        }
    }

    #[test]
    fn feasibility_is_load_within_capacity(
        distance in 0u16..1000,
        load in 0u16..1000,
        capacity in 0u16..1000,
    ) {
        let eval = CvrpEvaluation::new(capacity as f64);
        let label = CvrpForwardLabel::new(distance as f64, load as f64);
        prop_assert_eq!(eval.is_feasible(&label), load <= capacity);
    }

    #[test]
    fn cost_equals_concatenation_with_empty_suffix(
        distance in 0u16..1000,
        load in 0u16..1000,
        capacity in 0u16..1000,
        factor in 0u16..20,
    ) {
        let mut eval = CvrpEvaluation::new(capacity as f64);
        eval.set_overload_penalty_factor(factor as f64);
        let label = CvrpForwardLabel::new(distance as f64, load as f64);
        let end = create_cvrp_vertex(0, "0", false, true, CvrpVertexData::new(0.0));
        let empty = CvrpBackwardLabel::default();
        prop_assert_eq!(eval.concatenate(&label, &empty, &end), eval.compute_cost(&label));
    }

    #[test]
    fn cost_is_never_below_distance(
        distance in 0u16..1000,
        load in 0u16..1000,
        capacity in 0u16..1000,
        factor in 0u16..20,
    ) {
        let mut eval = CvrpEvaluation::new(capacity as f64);
        eval.set_overload_penalty_factor(factor as f64);
        let label = CvrpForwardLabel::new(distance as f64, load as f64);
        let cost = eval.compute_cost(&label);
        prop_assert!(cost >= label.distance);
        prop_assert!(cost >= 0.0);
    }

    #[test]
    fn doubling_penalty_doubles_overload_term(
        distance in 0u16..1000,
        overload in 1u16..500,
        capacity in 0u16..500,
        factor in 1u16..20,
    ) {
        let mut eval = CvrpEvaluation::new(capacity as f64);
        let label = CvrpForwardLabel::new(distance as f64, (capacity + overload) as f64);
        eval.set_overload_penalty_factor(factor as f64);
        let single = eval.compute_cost(&label) - label.distance;
        eval.set_overload_penalty_factor(2.0 * factor as f64);
        let double = eval.compute_cost(&label) - label.distance;
        prop_assert_eq!(double, 2.0 * single);
        let components = eval.get_cost_components(&label);
        prop_assert_eq!(components[CostComponent::Distance.index()], distance as f64);
        prop_assert_eq!(components[CostComponent::Overload.index()], overload as f64);
    }

    #[test]
    fn route_concatenation_matches_full_cost(
        demands in prop::collection::vec(0u16..20, 2..9),
        seed_distances in prop::collection::vec(1u16..50, 81),
        capacity in 0u16..100,
        factor in 0u16..5,
    ) {
        let n = demands.len();
        let demands: Vec<f64> = demands.iter().enumerate()
            .map(|(i, &d)| if i == 0 { 0.0 } else { d as f64 })
            .collect();
        let distances: Vec<Vec<f64>> = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| if i == j { 0.0 } else { seed_distances[i * 9 + j] as f64 })
                    .collect()
            })
            .collect();
        let instance = cvrp_instance(&demands, &distances, 0, 1).expect("valid instance");
        let mut eval = CvrpEvaluation::new(capacity as f64);
        eval.set_overload_penalty_factor(factor as f64);

        let customers: Vec<usize> = (1..n).collect();
        let route = RouteLabels::new(&eval, &instance, &customers);
        let cost = route.cost(&eval);
        for pos in 0..route.num_positions() {
            prop_assert_eq!(route.concatenate_at(&eval, &instance, pos), cost);
        }
    }
}
