//! Graph element types for routing instances.
//!
//! Vertices and arcs carry a topology part supplied by the host graph and a
//! problem-specific attribute payload. The CVRP payloads are a vertex demand
//! and an arc distance.

mod arc;
mod vertex;

pub use arc::{create_cvrp_arc, Arc, CvrpArcData};
pub use vertex::{create_cvrp_vertex, CvrpVertexData, Vertex};

/// Numeric type for accumulated resources (distance, load).
///
/// `f64` represents integral cumulative values exactly up to 2^53.
pub type Resource = f64;

/// Numeric type for evaluated costs.
pub type Cost = f64;
