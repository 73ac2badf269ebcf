use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// A triangle as three vertex indices into a shared vertex array.
///
/// The triangle's position in its owning list is its identity; triangles are
/// never mutated or compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    /// Vertex indices, in emission order.
    pub vertices: [usize; 3],
}

impl Triangle {
    /// Creates a triangle from three vertex indices.
    #[must_use]
    pub fn new(v1: usize, v2: usize, v3: usize) -> Self {
        Self {
            vertices: [v1, v2, v3],
        }
    }
}

/// The result of ear-clip triangulation: a vertex array plus a triangle list.
#[derive(Debug, Clone)]
pub struct Triangulation {
    /// Vertex positions shared by all triangles.
    pub vertices: Vec<Point2>,
    /// Emitted triangles; the index in this list is the triangle's identity.
    pub triangles: Vec<Triangle>,
    /// True when no valid ear could be found mid-scan and the final triangle
    /// was force-emitted from whatever remained in the ring. The output is
    /// best-effort in that case.
    pub used_fallback: bool,
}

/// Canonical key for an unordered pair of vertex indices.
///
/// The pair is stored sorted ascending so that `(a, b)` and `(b, a)` compare
/// and hash identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    /// Smaller vertex index.
    pub a: usize,
    /// Larger vertex index.
    pub b: usize,
}

impl EdgeKey {
    /// Creates a canonical edge key from two vertex indices in any order.
    #[must_use]
    pub fn new(i: usize, j: usize) -> Self {
        if i <= j {
            Self { a: i, b: j }
        } else {
            Self { a: j, b: i }
        }
    }
}

/// An undirected mesh edge with its incident triangles.
#[derive(Debug, Clone)]
pub struct MeshEdge {
    /// Canonical vertex pair.
    pub key: EdgeKey,
    /// Indices of incident triangles, at most two.
    pub triangles: Vec<usize>,
}

impl MeshEdge {
    /// Creates an edge with no incident triangles yet.
    #[must_use]
    pub fn new(key: EdgeKey) -> Self {
        Self {
            key,
            triangles: Vec::with_capacity(2),
        }
    }

    /// Attaches an incident triangle.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonManifoldEdge` on a third attachment; a valid
    /// manifold triangulation never shares an edge between more than two
    /// triangles.
    pub fn attach_triangle(&mut self, triangle: usize) -> Result<()> {
        if self.triangles.len() == 2 {
            return Err(GeometryError::NonManifoldEdge {
                a: self.key.a,
                b: self.key.b,
            }
            .into());
        }
        self.triangles.push(triangle);
        Ok(())
    }

    /// True when exactly two triangles share this edge.
    #[must_use]
    pub fn is_interior(&self) -> bool {
        self.triangles.len() == 2
    }
}

/// A triangle with resolved references to its three edges.
#[derive(Debug, Clone, Copy)]
pub struct MeshTriangle {
    /// Vertex indices, as emitted by the triangulator.
    pub vertices: [usize; 3],
    /// Indices into the topology's edge arena.
    pub edges: [usize; 3],
}

/// A triangulation with full edge/triangle adjacency.
///
/// Triangles and edges live in flat index-addressed arenas; cross-references
/// are plain indices, so there are no ownership cycles and identity comparison
/// is index equality.
#[derive(Debug, Clone)]
pub struct MeshTopology {
    /// Vertex positions shared by all triangles.
    pub vertices: Vec<Point2>,
    /// Triangles with their edge references.
    pub triangles: Vec<MeshTriangle>,
    /// Undirected edge arena.
    pub edges: Vec<MeshEdge>,
}

impl MeshTopology {
    /// Midpoint of an edge, by edge index.
    #[must_use]
    pub fn edge_midpoint(&self, edge: usize) -> Point2 {
        let key = self.edges[edge].key;
        nalgebra::center(&self.vertices[key.a], &self.vertices[key.b])
    }

    /// Index of the first interior (two-triangle) edge, if any.
    #[must_use]
    pub fn first_interior_edge(&self) -> Option<usize> {
        self.edges.iter().position(MeshEdge::is_interior)
    }
}
