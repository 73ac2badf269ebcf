use crate::error::Result;
use crate::geometry::Polygon;
use crate::math::polygon_2d::{cross_2d, point_in_triangle, points_coincide};
use crate::math::Point2;
use crate::mesh::{Triangle, Triangulation};

/// Ear-clip triangulation of a simple (possibly bridged) polygon.
///
/// Repeatedly removes the first convex vertex whose candidate triangle
/// contains no other polygon vertex, until only three ring entries remain.
/// Rings produced by the hole puncher revisit their bridge vertices; the
/// coincident corridor edges are tolerated, not rejected.
///
/// Worst case O(n³); the pipeline runs once at build time, not per frame.
#[derive(Debug)]
pub struct Triangulate {
    polygon: Polygon,
}

impl Triangulate {
    /// Creates a new triangulation operation.
    #[must_use]
    pub fn new(polygon: Polygon) -> Self {
        Self { polygon }
    }

    /// Executes the triangulation.
    ///
    /// If a full scan finds no valid ear while more than three ring entries
    /// remain, no further progress is possible: the first three remaining
    /// entries are force-emitted as the final triangle, `used_fallback` is set
    /// on the result, and a warning event is emitted. The output is
    /// best-effort in that case and callers decide whether to trust it.
    ///
    /// # Errors
    ///
    /// Returns an `InputError` if the polygon fails validation.
    pub fn execute(&self) -> Result<Triangulation> {
        self.polygon.validate()?;

        let vertices = self.polygon.vertices.clone();
        let mut ring = self.polygon.vertex_order.clone();
        let mut triangles = Vec::with_capacity(ring.len().saturating_sub(2));

        let mut previous_len = 0;
        while ring.len() > 3 && previous_len != ring.len() {
            previous_len = ring.len();
            for i in 0..ring.len() {
                let current = ring[i];
                let previous = ring[if i == 0 { ring.len() - 1 } else { i - 1 }];
                let next = ring[if i + 1 == ring.len() { 0 } else { i + 1 }];

                let v0 = vertices[current];
                let v1 = vertices[next];
                let v2 = vertices[previous];

                if is_reflex(v0, v1, v2) {
                    continue;
                }
                if contains_other_vertex(&vertices, v0, v1, v2) {
                    continue;
                }

                triangles.push(Triangle::new(current, next, previous));
                ring.remove(i);
                break;
            }
        }

        let used_fallback = ring.len() > 3;
        if used_fallback {
            tracing::warn!(
                remaining = ring.len(),
                "no valid ear found; force-emitting a final triangle from a malformed ring"
            );
        }
        triangles.push(Triangle::new(ring[0], ring[1], ring[2]));

        Ok(Triangulation {
            vertices,
            triangles,
            used_fallback,
        })
    }
}

/// True when the corner at `v0` (successor `v1`, predecessor `v2`) is reflex
/// for a counter-clockwise ring.
fn is_reflex(v0: Point2, v1: Point2, v2: Point2) -> bool {
    cross_2d(v1 - v0, v2 - v0) < 0.0
}

/// True when any polygon vertex other than the triangle's own corners lies
/// inside the candidate triangle `(v0, v1, v2)`.
fn contains_other_vertex(vertices: &[Point2], v0: Point2, v1: Point2, v2: Point2) -> bool {
    vertices.iter().any(|&vertex| {
        if points_coincide(vertex, v0) || points_coincide(vertex, v1) || points_coincide(vertex, v2)
        {
            return false;
        }
        point_in_triangle(vertex, v0, v1, v2)
    })
}
