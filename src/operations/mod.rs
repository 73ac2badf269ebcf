mod adjacency;
mod expand;
mod generate;
mod nav_graph;
mod punch_holes;
mod triangulate;

pub use adjacency::BuildAdjacency;
pub use expand::{expand_all, ExpandPolygon};
pub use generate::{GenerateNavMesh, NavMesh, NavMeshParams};
pub use nav_graph::BuildNavGraph;
pub use punch_holes::PunchHoles;
pub use triangulate::Triangulate;
