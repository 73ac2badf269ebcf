use std::collections::HashMap;

use crate::error::Result;
use crate::mesh::{EdgeKey, MeshEdge, MeshTopology, MeshTriangle, Triangulation};

/// Derives the undirected edge set of a triangulation and each edge's
/// incident triangles.
///
/// Edges are looked up by canonical key (vertex pair sorted ascending), so
/// `(a, b)` and `(b, a)` resolve to the same edge. The result stores triangles
/// and edges in flat arenas that reference each other by index.
#[derive(Debug)]
pub struct BuildAdjacency {
    triangulation: Triangulation,
}

impl BuildAdjacency {
    /// Creates a new adjacency building operation.
    #[must_use]
    pub fn new(triangulation: Triangulation) -> Self {
        Self { triangulation }
    }

    /// Executes the operation, returning the mesh with full adjacency.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonManifoldEdge` if any edge ends up with more
    /// than two incident triangles, which indicates a self-overlapping
    /// triangulation.
    pub fn execute(self) -> Result<MeshTopology> {
        let mut edges: Vec<MeshEdge> = Vec::new();
        let mut lookup: HashMap<EdgeKey, usize> = HashMap::new();
        let mut triangles = Vec::with_capacity(self.triangulation.triangles.len());

        for (triangle_index, triangle) in self.triangulation.triangles.iter().enumerate() {
            let [v1, v2, v3] = triangle.vertices;
            let mut edge_refs = [0usize; 3];

            for (slot, (a, b)) in [(v1, v2), (v2, v3), (v3, v1)].into_iter().enumerate() {
                let key = EdgeKey::new(a, b);
                let edge_index = *lookup.entry(key).or_insert_with(|| {
                    edges.push(MeshEdge::new(key));
                    edges.len() - 1
                });
                edges[edge_index].attach_triangle(triangle_index)?;
                edge_refs[slot] = edge_index;
            }

            triangles.push(MeshTriangle {
                vertices: triangle.vertices,
                edges: edge_refs,
            });
        }

        Ok(MeshTopology {
            vertices: self.triangulation.vertices,
            triangles,
            edges,
        })
    }
}
