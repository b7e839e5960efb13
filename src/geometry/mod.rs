use thiserror::Error;

pub mod polygon2;
pub mod rect2;
pub mod vec2;
pub mod vec3;

pub use polygon2::Polygon2;
pub use rect2::Rect2;
pub use vec2::Vec2;
pub use vec3::Vec3;

/// Construction failures for geometric shapes.
///
/// Shapes validate at their factories; an invalid instance is never
/// observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A polygon needs at least three vertices to enclose anything.
    #[error("polygon needs at least 3 vertices, found {found}")]
    TooFewVertices { found: usize },
    /// A rectangle's max corner must not lie below or left of its min
    /// corner.
    #[error("rectangle max corner must be >= min corner")]
    InvertedBounds,
    /// Width and height must be non-negative.
    #[error("rectangle width and height must be non-negative")]
    NegativeSize,
}

/// Twice the signed area of the triangle `a`, `b`, `c`.
///
/// Positive when `c` lies counter-clockwise of the segment `a -> b`,
/// negative when clockwise, zero when the three points are collinear.
/// Every other predicate in this module reduces to this test.
#[inline]
pub fn orient2(a: Vec2, b: Vec2, c: Vec2) -> i64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// True when `p` lies on the segment from `a1` to `a2`, endpoints
/// included.
///
/// Collinearity is established with a cross product, then the point is
/// confined to the segment's bounding box.
pub fn point_on_segment2(a1: Vec2, a2: Vec2, p: Vec2) -> bool {
    if orient2(a1, a2, p) != 0 {
        return false;
    }
    p.x >= a1.x.min(a2.x)
        && p.x <= a1.x.max(a2.x)
        && p.y >= a1.y.min(a2.y)
        && p.y <= a1.y.max(a2.y)
}

/// True when the segments `a1-a2` and `b1-b2` properly cross.
///
/// Strict semantics: each segment's endpoints must lie on opposite
/// sides of the other segment, so touching at an endpoint or collinear
/// overlap does NOT count. Polygon containment depends on this
/// strictness; boundary touching is classified separately with
/// [`point_on_segment2`].
pub fn segments_intersect2(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> bool {
    let o1 = orient2(a1, a2, b1);
    let o2 = orient2(a1, a2, b2);
    let o3 = orient2(b1, b2, a1);
    let o4 = orient2(b1, b2, a2);

    ((o1 > 0 && o2 < 0) || (o1 < 0 && o2 > 0)) && ((o3 > 0 && o4 < 0) || (o3 < 0 && o4 > 0))
}
