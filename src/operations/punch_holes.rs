use crate::error::{InputError, Result};
use crate::geometry::Polygon;

/// Stitches hole polygons into a boundary polygon as bridged holes.
///
/// Each hole is joined to the accumulated shape through the globally nearest
/// (boundary vertex, hole vertex) pair: the hole's winding order is spliced
/// into the boundary order at that vertex, walked in reverse so the hole's
/// interior stays outside the resulting ring, and the two bridge vertices are
/// revisited to close the loop. The bridge is a degenerate zero-width
/// corridor, not a geometric union; the triangulator tolerates it.
///
/// Holes are merged one at a time against the current accumulated shape, so
/// the merge order is driven by nearest distance, not input order. Holes are
/// assumed disjoint from each other and from the boundary; bridging concave
/// or interleaving holes through a single nearest pair is an unverified
/// assumption of the algorithm, not a guarantee.
#[derive(Debug)]
pub struct PunchHoles {
    boundary: Polygon,
    holes: Vec<Polygon>,
}

impl PunchHoles {
    /// Creates a new hole punching operation.
    #[must_use]
    pub fn new(boundary: Polygon, holes: Vec<Polygon>) -> Self {
        Self { boundary, holes }
    }

    /// Executes the operation, returning one continuous bridged polygon.
    ///
    /// # Errors
    ///
    /// - `InputError::NoHoles` if the hole set is empty
    /// - `InputError` if the boundary or any hole fails validation
    pub fn execute(&self) -> Result<Polygon> {
        if self.holes.is_empty() {
            return Err(InputError::NoHoles.into());
        }
        self.boundary.validate()?;
        for hole in &self.holes {
            hole.validate()?;
        }

        let mut shape = self.boundary.clone();
        let mut holes = self.holes.clone();

        while !holes.is_empty() {
            let bridge = nearest_bridge(&shape, &holes);
            let hole = holes.remove(bridge.hole);
            shape = splice_hole(&shape, &hole, bridge.shape_position, bridge.hole_position);
        }

        Ok(shape)
    }
}

/// The globally nearest (shape vertex, hole, hole vertex) triple, addressed by
/// positions in the respective winding orders.
struct Bridge {
    shape_position: usize,
    hole: usize,
    hole_position: usize,
}

fn nearest_bridge(shape: &Polygon, holes: &[Polygon]) -> Bridge {
    let mut shortest = f64::MAX;
    let mut bridge = Bridge {
        shape_position: 0,
        hole: 0,
        hole_position: 0,
    };

    for (shape_position, &sv) in shape.vertex_order.iter().enumerate() {
        let shape_vertex = shape.vertices[sv];
        for (hole_index, hole) in holes.iter().enumerate() {
            for (hole_position, &hv) in hole.vertex_order.iter().enumerate() {
                let distance = (hole.vertices[hv] - shape_vertex).norm();
                if distance < shortest {
                    shortest = distance;
                    bridge = Bridge {
                        shape_position,
                        hole: hole_index,
                        hole_position,
                    };
                }
            }
        }
    }

    bridge
}

/// Splices `hole` into `shape` at the given order positions, producing a
/// single ring with a zero-width bridge corridor.
fn splice_hole(
    shape: &Polygon,
    hole: &Polygon,
    shape_position: usize,
    hole_position: usize,
) -> Polygon {
    // Hole vertex indices stay unique once the vertex arrays are concatenated.
    let offset = shape.vertices.len();
    let hole_len = hole.vertex_order.len();

    let mut order = Vec::with_capacity(shape.vertex_order.len() + hole_len + 2);
    for (position, &vertex) in shape.vertex_order.iter().enumerate() {
        order.push(vertex);
        if position == shape_position {
            // Walk the hole's order in reverse starting at the bridge vertex,
            // all the way around and back onto it, then return across the
            // bridge to the boundary vertex.
            for j in 0..=hole_len {
                let hole_at = (hole_position + hole_len - (j % hole_len)) % hole_len;
                order.push(hole.vertex_order[hole_at] + offset);
            }
            order.push(vertex);
        }
    }

    let mut vertices = shape.vertices.clone();
    vertices.extend_from_slice(&hole.vertices);

    Polygon::new(vertices, order)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn boundary() -> Polygon {
        Polygon::with_default_order(vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)])
    }

    fn inner_hole() -> Polygon {
        Polygon::with_default_order(vec![p(1.0, 1.0), p(2.0, 1.0), p(2.0, 2.0), p(1.0, 2.0)])
    }

    #[test]
    fn empty_hole_set_rejected() {
        assert!(PunchHoles::new(boundary(), vec![]).execute().is_err());
    }

    #[test]
    fn single_hole_bridged_at_nearest_pair() {
        let punched = PunchHoles::new(boundary(), vec![inner_hole()])
            .execute()
            .unwrap();

        assert_eq!(punched.vertices.len(), 8);
        // Nearest pair is boundary (0,0) to hole (1,1); the hole is walked in
        // reverse from its bridge vertex and the ring closes back across the
        // bridge.
        assert_eq!(punched.vertex_order, vec![0, 4, 7, 6, 5, 4, 0, 1, 2, 3]);
    }

    #[test]
    fn bridge_edges_are_coincident() {
        let punched = PunchHoles::new(boundary(), vec![inner_hole()])
            .execute()
            .unwrap();
        let order = &punched.vertex_order;
        // The ring traverses the bridge twice: 0 -> 4 at the start and
        // 4 -> 0 after the hole walk.
        assert_eq!((order[0], order[1]), (0, 4));
        assert_eq!((order[5], order[6]), (4, 0));
    }

    #[test]
    fn spliced_hole_reverses_winding() {
        let punched = PunchHoles::new(boundary(), vec![inner_hole()])
            .execute()
            .unwrap();
        // Bridged ring area equals boundary minus hole: the reversed hole walk
        // subtracts its area, and the zero-width corridor contributes nothing.
        assert!((punched.signed_area() - 15.0).abs() < 1e-9);
    }

    #[test]
    fn multiple_holes_merge_nearest_first() {
        let near = Polygon::with_default_order(vec![
            p(0.5, 0.5),
            p(1.0, 0.5),
            p(1.0, 1.0),
            p(0.5, 1.0),
        ]);
        let far = Polygon::with_default_order(vec![
            p(2.5, 2.5),
            p(3.0, 2.5),
            p(3.0, 3.0),
            p(2.5, 3.0),
        ]);
        let punched = PunchHoles::new(boundary(), vec![far.clone(), near.clone()])
            .execute()
            .unwrap();

        assert_eq!(punched.vertices.len(), 12);
        // The near hole is concatenated first despite being listed second.
        assert_eq!(punched.vertices[4], near.vertices[0]);
        assert_eq!(punched.vertices[8], far.vertices[0]);
        assert!((punched.signed_area() - (16.0 - 0.25 - 0.25)).abs() < 1e-9);
    }

    #[test]
    fn invalid_hole_rejected() {
        let degenerate = Polygon::with_default_order(vec![p(1.0, 1.0), p(2.0, 1.0)]);
        assert!(PunchHoles::new(boundary(), vec![degenerate])
            .execute()
            .is_err());
    }
}
