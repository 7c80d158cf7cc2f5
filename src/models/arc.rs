//! Arc type and the CVRP arc payload.

use serde::{Deserialize, Serialize};

use super::Resource;

/// A directed arc's attribute payload.
///
/// Endpoints are implied by the arc's position in the instance's arc matrix.
///
/// # Examples
///
/// ```
/// use cvrp_concat::models::{create_cvrp_arc, CvrpArcData};
///
/// let arc = create_cvrp_arc(CvrpArcData::new(7.5));
/// assert_eq!(arc.data().distance, 7.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arc<D> {
    data: D,
}

impl<D> Arc<D> {
    /// Creates an arc carrying the given payload.
    pub fn new(data: D) -> Self {
        Self { data }
    }

    /// Attribute payload.
    pub fn data(&self) -> &D {
        &self.data
    }
}

/// Per-arc attributes for the CVRP: the travel distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CvrpArcData {
    /// Travel distance along the arc. Non-negative.
    pub distance: Resource,
}

impl CvrpArcData {
    /// Creates arc data with the given distance.
    pub fn new(distance: Resource) -> Self {
        Self { distance }
    }
}

/// Creates a CVRP arc.
pub fn create_cvrp_arc(data: CvrpArcData) -> Arc<CvrpArcData> {
    Arc::new(data)
}
