//! Vertex type and the CVRP vertex payload.

use serde::{Deserialize, Serialize};

use super::Resource;

/// A vertex of the routing graph together with its attribute payload.
///
/// The identity part (`id`, `name`, station/depot flags) is the topology the
/// host graph works with; `data` carries the problem-specific attributes an
/// evaluation reads. Vertices are immutable once constructed.
///
/// # Examples
///
/// ```
/// use cvrp_concat::models::{create_cvrp_vertex, CvrpVertexData};
///
/// let v = create_cvrp_vertex(3, "3", false, false, CvrpVertexData::new(12.0));
/// assert_eq!(v.id(), 3);
/// assert_eq!(v.name(), "3");
/// assert!(!v.is_depot());
/// assert_eq!(v.data().demand, 12.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex<D> {
    id: usize,
    name: String,
    is_station: bool,
    is_depot: bool,
    data: D,
}

impl<D> Vertex<D> {
    /// Creates a vertex.
    pub fn new(
        id: usize,
        name: impl Into<String>,
        is_station: bool,
        is_depot: bool,
        data: D,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            is_station,
            is_depot,
            data,
        }
    }

    /// Vertex ID (its index in the instance).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Human-readable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` for station vertices (neither depot nor customer).
    pub fn is_station(&self) -> bool {
        self.is_station
    }

    /// Returns `true` for the depot.
    pub fn is_depot(&self) -> bool {
        self.is_depot
    }

    /// Returns `true` for customers, i.e. vertices that are neither depot nor station.
    pub fn is_customer(&self) -> bool {
        !self.is_depot && !self.is_station
    }

    /// Attribute payload.
    pub fn data(&self) -> &D {
        &self.data
    }
}

/// Per-vertex attributes for the CVRP: the demand collected at the vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CvrpVertexData {
    /// Demand picked up at this vertex. Non-negative.
    pub demand: Resource,
}

impl CvrpVertexData {
    /// Creates vertex data with the given demand.
    pub fn new(demand: Resource) -> Self {
        Self { demand }
    }
}

/// Creates a CVRP vertex.
pub fn create_cvrp_vertex(
    id: usize,
    name: impl Into<String>,
    is_station: bool,
    is_depot: bool,
    data: CvrpVertexData,
) -> Vertex<CvrpVertexData> {
    Vertex::new(id, name, is_station, is_depot, data)
}
