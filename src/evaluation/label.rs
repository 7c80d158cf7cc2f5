//! CVRP forward and backward labels.

use serde::{Deserialize, Serialize};

use crate::models::Resource;

/// Distance and load accumulated from the route start up to and including a vertex.
///
/// `load` is the sum of the demands of every visited vertex, the label's own
/// vertex included.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CvrpForwardLabel {
    /// Travel distance from the route start.
    pub distance: Resource,
    /// Demand collected so far.
    pub load: Resource,
}

impl CvrpForwardLabel {
    /// Creates a forward label.
    pub fn new(distance: Resource, load: Resource) -> Self {
        Self { distance, load }
    }
}

/// Distance and load accumulated from the route end back to a vertex.
///
/// `load` counts the demands of the vertices *after* the label's vertex: a
/// backward label starts at zero load and each backward step adds the
/// successor's demand. Joined with a forward label at the same vertex, that
/// vertex's demand is counted exactly once, by the forward side.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CvrpBackwardLabel {
    /// Travel distance to the route end.
    pub distance: Resource,
    /// Demand collected after this vertex.
    pub load: Resource,
}

impl CvrpBackwardLabel {
    /// Creates a backward label.
    pub fn new(distance: Resource, load: Resource) -> Self {
        Self { distance, load }
    }
}
