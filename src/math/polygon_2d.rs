use super::{Point2, Vector2, TOLERANCE};

/// Returns the z component of the 3D cross product of two in-plane vectors.
///
/// Positive when `v` lies counter-clockwise of `u`.
#[must_use]
pub fn cross_2d(u: Vector2, v: Vector2) -> f64 {
    u.x * v.y - u.y * v.x
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise winding, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Tests whether a point lies inside a counter-clockwise triangle `(a, b, c)`.
///
/// Points exactly on an edge count as inside; callers that need to ignore the
/// triangle's own corners must exclude them beforehand.
#[must_use]
pub fn point_in_triangle(p: Point2, a: Point2, b: Point2, c: Point2) -> bool {
    if cross_2d(b - a, p - a) < 0.0 {
        return false;
    }
    if cross_2d(c - b, p - b) < 0.0 {
        return false;
    }
    if cross_2d(a - c, p - c) < 0.0 {
        return false;
    }
    true
}

/// Tests whether two points coincide within the global tolerance.
#[must_use]
pub fn points_coincide(a: Point2, b: Point2) -> bool {
    (b - a).norm() < TOLERANCE
}
