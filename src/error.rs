use thiserror::Error;

/// Top-level error type for the navmesh2d kernel.
#[derive(Debug, Error)]
pub enum NavMeshError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors caused by malformed input polygons or parameters.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("polygon has {0} vertices in its winding order, at least 3 are required")]
    TooFewVertices(usize),

    #[error("winding order entry {index} refers to vertex {vertex}, but only {count} vertices exist")]
    OrderOutOfRange {
        index: usize,
        vertex: usize,
        count: usize,
    },

    #[error("degenerate zero-length edge between vertices {from} and {to}")]
    DegenerateEdge { from: usize, to: usize },

    #[error("expansion distance must be positive, got {0}")]
    NonPositiveDistance(f64),

    #[error("no hole polygons supplied")]
    NoHoles,
}

/// Errors caused by geometry the pipeline cannot process.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length offset normal at vertex {0} (collinear or reversing neighbors)")]
    ZeroOffsetNormal(usize),

    #[error("edge ({a}, {b}) has more than two adjacent triangles")]
    NonManifoldEdge { a: usize, b: usize },

    #[error("triangulation has no interior edge to seed the navigation graph")]
    NoInteriorEdge,
}

/// Convenience type alias for results using [`NavMeshError`].
pub type Result<T> = std::result::Result<T, NavMeshError>;
