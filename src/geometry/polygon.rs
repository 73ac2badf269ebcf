use crate::error::{InputError, Result};
use crate::math::{polygon_2d, Point2, TOLERANCE};

/// An ordered-vertex polygon with an explicit winding order.
///
/// `vertices` owns the positions; `vertex_order` is a sequence of indices into
/// `vertices` describing the traversal used for geometric operations.
/// Consecutive (cyclic) order entries define the polygon's edges. Boundary
/// polygons are expected counter-clockwise (positive signed area); holes
/// spliced by the hole puncher end up traversed in reverse.
///
/// The order is kept separate from the vertex list because hole punching
/// produces rings that revisit vertices (the zero-width bridge corridor),
/// which a plain vertex list cannot express.
#[derive(Debug, Clone)]
pub struct Polygon {
    /// Vertex positions.
    pub vertices: Vec<Point2>,
    /// Indices into `vertices`, in traversal order.
    pub vertex_order: Vec<usize>,
}

impl Polygon {
    /// Creates a polygon from vertices and an explicit winding order.
    #[must_use]
    pub fn new(vertices: Vec<Point2>, vertex_order: Vec<usize>) -> Self {
        Self {
            vertices,
            vertex_order,
        }
    }

    /// Creates a polygon whose winding order is the vertex sequence itself.
    #[must_use]
    pub fn with_default_order(vertices: Vec<Point2>) -> Self {
        let vertex_order = (0..vertices.len()).collect();
        Self {
            vertices,
            vertex_order,
        }
    }

    /// Checks the polygon invariants.
    ///
    /// # Errors
    ///
    /// - `InputError::TooFewVertices` if the winding order has fewer than 3 entries
    /// - `InputError::OrderOutOfRange` if an order entry is not a valid vertex index
    /// - `InputError::DegenerateEdge` if consecutive order entries coincide in position
    pub fn validate(&self) -> Result<()> {
        if self.vertex_order.len() < 3 {
            return Err(InputError::TooFewVertices(self.vertex_order.len()).into());
        }

        for (index, &vertex) in self.vertex_order.iter().enumerate() {
            if vertex >= self.vertices.len() {
                return Err(InputError::OrderOutOfRange {
                    index,
                    vertex,
                    count: self.vertices.len(),
                }
                .into());
            }
        }

        // Revisited indices (bridge corridors) are fine; consecutive entries
        // at the same position are not.
        for i in 0..self.vertex_order.len() {
            let from = self.vertex_order[i];
            let to = self.vertex_order[(i + 1) % self.vertex_order.len()];
            if (self.vertices[to] - self.vertices[from]).norm() < TOLERANCE {
                return Err(InputError::DegenerateEdge { from, to }.into());
            }
        }

        Ok(())
    }

    /// Returns the vertex preceding index `i` in the vertex list, cyclically.
    ///
    /// Operates on the vertex list rather than the winding order; the
    /// offsetter relies on the list being in traversal order (default order).
    #[must_use]
    pub fn previous_vertex(&self, i: usize) -> Point2 {
        if i > 0 {
            self.vertices[i - 1]
        } else {
            self.vertices[self.vertices.len() - 1]
        }
    }

    /// Returns the vertex following index `i` in the vertex list, cyclically.
    #[must_use]
    pub fn next_vertex(&self, i: usize) -> Point2 {
        if i < self.vertices.len() - 1 {
            self.vertices[i + 1]
        } else {
            self.vertices[0]
        }
    }

    /// Signed area of the traversal described by the winding order.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let ring: Vec<Point2> = self
            .vertex_order
            .iter()
            .map(|&i| self.vertices[i])
            .collect();
        polygon_2d::signed_area_2d(&ring)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)]
    }

    #[test]
    fn default_order_is_sequential() {
        let poly = Polygon::with_default_order(square());
        assert_eq!(poly.vertex_order, vec![0, 1, 2, 3]);
        poly.validate().unwrap();
    }

    #[test]
    fn too_few_vertices_rejected() {
        let poly = Polygon::with_default_order(vec![p(0.0, 0.0), p(1.0, 0.0)]);
        assert!(poly.validate().is_err());
    }

    #[test]
    fn out_of_range_order_rejected() {
        let poly = Polygon::new(square(), vec![0, 1, 7, 3]);
        assert!(poly.validate().is_err());
    }

    #[test]
    fn zero_length_edge_rejected() {
        let poly = Polygon::with_default_order(vec![
            p(0.0, 0.0),
            p(4.0, 0.0),
            p(4.0, 0.0),
            p(0.0, 4.0),
        ]);
        assert!(poly.validate().is_err());
    }

    #[test]
    fn cyclic_neighbors() {
        let poly = Polygon::with_default_order(square());
        assert_eq!(poly.previous_vertex(0), p(0.0, 4.0));
        assert_eq!(poly.next_vertex(3), p(0.0, 0.0));
        assert_eq!(poly.next_vertex(1), p(4.0, 4.0));
    }

    #[test]
    fn signed_area_follows_order() {
        let ccw = Polygon::with_default_order(square());
        assert!(ccw.signed_area() > 0.0);
        let cw = Polygon::new(square(), vec![3, 2, 1, 0]);
        assert!(cw.signed_area() < 0.0);
    }
}
