use crate::error::{GeometryError, InputError, Result};
use crate::geometry::Polygon;
use crate::math::polygon_2d::cross_2d;
use crate::math::{Vector2, TOLERANCE};

/// Inflates a polygon outward by a fixed distance (obstacle expansion).
///
/// For each vertex, two perpendicular offsets (one per incident edge) and a
/// bisector offset are emitted, each scaled to `distance`, so the result has
/// three times the input vertex count. Scaling the perpendiculars by the sign
/// of the cross product of the incident edge vectors is what resolves
/// handedness: convex corners of either winding are pushed away from the
/// interior.
///
/// The vertex list is assumed to be in traversal order (default winding
/// order), which holds for polygons coming from scene extraction.
#[derive(Debug)]
pub struct ExpandPolygon {
    polygon: Polygon,
    distance: f64,
}

impl ExpandPolygon {
    /// Creates a new expansion operation.
    #[must_use]
    pub fn new(polygon: Polygon, distance: f64) -> Self {
        Self { polygon, distance }
    }

    /// Executes the expansion, returning the inflated polygon.
    ///
    /// # Errors
    ///
    /// - `InputError::NonPositiveDistance` if `distance <= 0`
    /// - `InputError` if the input polygon fails validation
    /// - `GeometryError::ZeroOffsetNormal` if a vertex has collinear or
    ///   reversing neighbors, leaving no direction to offset along
    pub fn execute(&self) -> Result<Polygon> {
        if self.distance <= 0.0 {
            return Err(InputError::NonPositiveDistance(self.distance).into());
        }
        self.polygon.validate()?;

        let vertex_count = self.polygon.vertices.len();
        let mut expanded = Vec::with_capacity(3 * vertex_count);

        for i in 0..vertex_count {
            let vertex = self.polygon.vertices[i];
            let incoming = vertex - self.polygon.previous_vertex(i);
            let outgoing = self.polygon.next_vertex(i) - vertex;
            let turn = cross_2d(incoming, outgoing);

            let perpendicular_in = scale_to(
                Vector2::new(incoming.y * turn, -incoming.x * turn),
                self.distance,
            )
            .ok_or(GeometryError::ZeroOffsetNormal(i))?;
            let perpendicular_out = scale_to(
                Vector2::new(outgoing.y * turn, -outgoing.x * turn),
                self.distance,
            )
            .ok_or(GeometryError::ZeroOffsetNormal(i))?;
            let bisector = scale_to(perpendicular_in + perpendicular_out, self.distance)
                .ok_or(GeometryError::ZeroOffsetNormal(i))?;

            expanded.push(vertex + perpendicular_in);
            expanded.push(vertex + bisector);
            expanded.push(vertex + perpendicular_out);
        }

        Ok(Polygon::with_default_order(expanded))
    }
}

/// Expands every polygon in a list by the same distance.
///
/// # Errors
///
/// Fails on the first polygon that cannot be expanded.
pub fn expand_all(polygons: Vec<Polygon>, distance: f64) -> Result<Vec<Polygon>> {
    polygons
        .into_iter()
        .map(|polygon| ExpandPolygon::new(polygon, distance).execute())
        .collect()
}

/// Rescales a vector to the given length, or `None` for a near-zero vector.
fn scale_to(v: Vector2, length: f64) -> Option<Vector2> {
    let norm = v.norm();
    if norm < TOLERANCE {
        return None;
    }
    Some(v * (length / norm))
}
