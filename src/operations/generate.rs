use crate::error::Result;
use crate::geometry::Polygon;
use crate::graph::NavGraph;
use crate::mesh::MeshTopology;
use crate::operations::{expand_all, BuildAdjacency, BuildNavGraph, PunchHoles, Triangulate};

/// Parameters controlling navigation mesh generation.
#[derive(Debug, Clone, Copy)]
pub struct NavMeshParams {
    /// Distance by which obstacle polygons are inflated before hole punching,
    /// keeping paths clear of obstacle corners.
    pub expansion: f64,
}

impl Default for NavMeshParams {
    fn default() -> Self {
        Self { expansion: 0.5 }
    }
}

/// The result of one generation run: the triangulated walkable mesh and the
/// navigation graph derived from it.
#[derive(Debug)]
pub struct NavMesh {
    /// Triangulated walkable area with full edge adjacency.
    pub topology: MeshTopology,
    /// Navigation graph over the mesh's interior edges.
    pub graph: NavGraph,
    /// True when triangulation had to force-emit its final triangle; the mesh
    /// is best-effort in that case.
    pub used_fallback: bool,
}

/// The full generation pipeline: obstacle expansion, hole punching,
/// triangulation, adjacency, and the dual navigation graph.
///
/// One run is an atomic, run-to-completion unit of work that owns all of its
/// intermediate state; a changed scene requires a full rerun.
#[derive(Debug)]
pub struct GenerateNavMesh {
    boundary: Polygon,
    obstacles: Vec<Polygon>,
    params: NavMeshParams,
}

impl GenerateNavMesh {
    /// Creates a new generation operation from a walkable boundary and
    /// obstacle polygons.
    #[must_use]
    pub fn new(boundary: Polygon, obstacles: Vec<Polygon>, params: NavMeshParams) -> Self {
        Self {
            boundary,
            obstacles,
            params,
        }
    }

    /// Executes the pipeline.
    ///
    /// # Errors
    ///
    /// Fails with an `InputError` on malformed polygons or parameters and
    /// with a `GeometryError` when expansion, adjacency, or the graph build
    /// cannot process the geometry. The forced-triangle fallback is not an
    /// error; it is reported through [`NavMesh::used_fallback`].
    pub fn execute(&self) -> Result<NavMesh> {
        self.boundary.validate()?;

        let walkable = if self.obstacles.is_empty() {
            self.boundary.clone()
        } else {
            let holes = expand_all(self.obstacles.clone(), self.params.expansion)?;
            PunchHoles::new(self.boundary.clone(), holes).execute()?
        };

        let triangulation = Triangulate::new(walkable).execute()?;
        let used_fallback = triangulation.used_fallback;

        let topology = BuildAdjacency::new(triangulation).execute()?;
        let graph = BuildNavGraph::new(&topology).execute()?;

        Ok(NavMesh {
            topology,
            graph,
            used_fallback,
        })
    }
}
