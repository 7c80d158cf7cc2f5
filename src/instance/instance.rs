//! Routing instance: vertices plus a dense arc matrix.

use tracing::debug;

use crate::models::{
    create_cvrp_arc, create_cvrp_vertex, Arc, CvrpArcData, CvrpVertexData, Resource, Vertex,
};

use super::InstanceError;

/// A routing instance: `n` vertices and an `n×n` arc matrix stored in
/// row-major order, plus the number of available vehicles.
///
/// Vertex IDs equal their position, and exactly one vertex is the depot.
///
/// # Examples
///
/// ```
/// use cvrp_concat::instance::cvrp_instance;
///
/// let instance = cvrp_instance(
///     &[0.0, 4.0, 3.0],
///     &[
///         vec![0.0, 2.0, 5.0],
///         vec![2.0, 0.0, 3.0],
///         vec![5.0, 3.0, 0.0],
///     ],
///     0,
///     2,
/// )
/// .unwrap();
/// assert_eq!(instance.len(), 3);
/// assert_eq!(instance.depot().id(), 0);
/// assert_eq!(instance.arc(1, 2).data().distance, 3.0);
/// assert_eq!(instance.customers().count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Instance<VD, AD> {
    vertices: Vec<Vertex<VD>>,
    arcs: Vec<Arc<AD>>,
    depot: usize,
    fleet_size: usize,
}

impl<VD, AD> Instance<VD, AD> {
    /// Creates an instance from its vertices, a square arc matrix
    /// (`arcs[i][j]` is the arc from `i` to `j`) and the fleet size.
    pub fn new(
        vertices: Vec<Vertex<VD>>,
        arcs: Vec<Vec<Arc<AD>>>,
        fleet_size: usize,
    ) -> Result<Self, InstanceError> {
        let n = vertices.len();
        if n == 0 {
            return Err(InstanceError::Empty);
        }
        if fleet_size == 0 {
            return Err(InstanceError::EmptyFleet);
        }
        if arcs.len() != n {
            return Err(InstanceError::ArcRowCount {
                expected: n,
                found: arcs.len(),
            });
        }
        if let Some((row, r)) = arcs.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(InstanceError::ArcRowLength {
                row,
                expected: n,
                found: r.len(),
            });
        }
        if let Some((position, v)) = vertices.iter().enumerate().find(|(i, v)| v.id() != *i) {
            return Err(InstanceError::VertexIdMismatch {
                position,
                id: v.id(),
            });
        }

        let depots: Vec<usize> = vertices
            .iter()
            .filter(|v| v.is_depot())
            .map(|v| v.id())
            .collect();
        let depot = match depots.as_slice() {
            [d] => *d,
            _ => {
                return Err(InstanceError::DepotCount {
                    found: depots.len(),
                })
            }
        };

        debug!(vertices = n, depot, fleet_size, "instance created");

        Ok(Self {
            vertices,
            arcs: arcs.into_iter().flatten().collect(),
            depot,
            fleet_size,
        })
    }

    /// Number of vertices (depot included).
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the instance has no vertices. Never true for a
    /// successfully constructed instance.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds.
    pub fn vertex(&self, id: usize) -> &Vertex<VD> {
        &self.vertices[id]
    }

    /// Returns the arc from vertex `from` to vertex `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn arc(&self, from: usize, to: usize) -> &Arc<AD> {
        &self.arcs[from * self.vertices.len() + to]
    }

    /// All vertices, ordered by ID.
    pub fn vertices(&self) -> &[Vertex<VD>] {
        &self.vertices
    }

    /// The depot.
    pub fn depot(&self) -> &Vertex<VD> {
        &self.vertices[self.depot]
    }

    /// Customer vertices, ordered by ID.
    pub fn customers(&self) -> impl Iterator<Item = &Vertex<VD>> {
        self.vertices.iter().filter(|v| v.is_customer())
    }

    /// Station vertices, ordered by ID.
    pub fn stations(&self) -> impl Iterator<Item = &Vertex<VD>> {
        self.vertices.iter().filter(|v| v.is_station())
    }

    /// Number of available vehicles.
    pub fn fleet_size(&self) -> usize {
        self.fleet_size
    }
}

impl Instance<CvrpVertexData, CvrpArcData> {
    /// Penalty factor that makes one unit of overload cost as much as the
    /// longest arc per unit of the largest demand: `max distance / max demand`.
    ///
    /// Returns `1.0` if no vertex has positive demand.
    pub fn suggested_overload_penalty_factor(&self) -> f64 {
        let max_demand = self
            .vertices
            .iter()
            .map(|v| v.data().demand)
            .fold(0.0, Resource::max);
        if max_demand <= 0.0 {
            return 1.0;
        }
        let max_distance = self
            .arcs
            .iter()
            .map(|a| a.data().distance)
            .fold(0.0, Resource::max);
        max_distance / max_demand
    }
}

/// Builds a CVRP instance from per-vertex demands and a distance matrix.
///
/// Vertex `i` gets name `i`; vertex `depot` is the depot and all others are
/// customers.
pub fn cvrp_instance(
    demands: &[Resource],
    distances: &[Vec<Resource>],
    depot: usize,
    fleet_size: usize,
) -> Result<Instance<CvrpVertexData, CvrpArcData>, InstanceError> {
    let vertices = demands
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            create_cvrp_vertex(i, i.to_string(), false, i == depot, CvrpVertexData::new(d))
        })
        .collect();
    let arcs = distances
        .iter()
        .map(|row| {
            row.iter()
                .map(|&d| create_cvrp_arc(CvrpArcData::new(d)))
                .collect()
        })
        .collect();
    Instance::new(vertices, arcs, fleet_size)
}
