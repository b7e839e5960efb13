use crate::geometry::rect2::Rect2;
use crate::geometry::vec2::Vec2;
use crate::geometry::{point_on_segment2, segments_intersect2, GeometryError};

/// Simple polygon given as a closed ring of 3 or more vertices.
///
/// Consecutive vertices define the edges, with the ring wrapping from
/// the last vertex back to the first. The factory rejects rings that
/// are too short; beyond that, vertex order and winding are the
/// caller's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon2 {
    vertices: Vec<Vec2>,
}

impl Polygon2 {
    /// Creates a polygon from its vertex ring.
    pub fn make(vertices: Vec<Vec2>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                found: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// The vertex ring.
    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Edges as vertex pairs, wrapping last-to-first.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// True when `p` lies on one of the polygon's edges.
    pub fn on_boundary(&self, p: Vec2) -> bool {
        self.edges().any(|(a, b)| point_on_segment2(a, b, p))
    }

    /// True when `p` is inside the polygon or on its boundary.
    pub fn contains_vec(&self, p: Vec2) -> bool {
        // Boundary points first: the ray cast below is strict and would
        // classify them arbitrarily.
        self.on_boundary(p) || self.ray_cast_inside(p)
    }

    /// True when `rect` lies entirely inside the polygon (boundary
    /// contact allowed).
    ///
    /// Corner containment alone is not enough: around a concave
    /// polygon, a rectangle edge can dip outside between two contained
    /// corners. So every polygon edge is additionally tested for a
    /// proper crossing with every rectangle edge.
    pub fn contains_rectangle(&self, rect: &Rect2) -> bool {
        if rect.corners().iter().any(|&corner| !self.contains_vec(corner)) {
            return false;
        }
        for (a, b) in self.edges() {
            for (c, d) in rect.edges() {
                if segments_intersect2(a, b, c, d) {
                    return false;
                }
            }
        }
        true
    }

    /// Even-odd ray cast towards +x.
    ///
    /// The half-open comparison on y keeps a ray that passes through a
    /// vertex from being counted once per incident edge. The crossing
    /// test is the cross-multiplied integer form of `p.x < x-intercept`
    /// to stay exact.
    fn ray_cast_inside(&self, p: Vec2) -> bool {
        let mut inside = false;
        let n = self.vertices.len();
        let mut j = n - 1;
        for i in 0..n {
            let (vi, vj) = (self.vertices[i], self.vertices[j]);
            if (vi.y > p.y) != (vj.y > p.y) {
                let dy = vj.y - vi.y;
                let lhs = (p.x - vi.x) * dy;
                let rhs = (vj.x - vi.x) * (p.y - vi.y);
                if (dy > 0 && lhs < rhs) || (dy < 0 && lhs > rhs) {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: i64, y: i64) -> Vec2 {
        Vec2::new(x, y)
    }

    fn square4() -> Polygon2 {
        Polygon2::make(vec![v(0, 0), v(4, 0), v(4, 4), v(0, 4)]).unwrap()
    }

    /// U-shaped (concave) polygon: a 6x4 block with a notch cut from
    /// the top between x=2 and x=4 down to y=3.
    fn u_shape() -> Polygon2 {
        Polygon2::make(vec![
            v(0, 0),
            v(2, 0),
            v(2, 3),
            v(4, 3),
            v(4, 0),
            v(6, 0),
            v(6, 4),
            v(0, 4),
        ])
        .unwrap()
    }

    #[test]
    fn make_rejects_short_rings() {
        assert_eq!(
            Polygon2::make(vec![v(0, 0), v(1, 0)]),
            Err(GeometryError::TooFewVertices { found: 2 })
        );
        assert!(Polygon2::make(vec![v(0, 0), v(1, 0), v(0, 1)]).is_ok());
    }

    #[test]
    fn contains_vec_inside_outside_boundary() {
        let square = square4();

        assert!(square.contains_vec(v(2, 2)));
        assert!(!square.contains_vec(v(5, 2)));
        assert!(!square.contains_vec(v(-1, -1)));

        // boundary: edges and corners count as contained
        assert!(square.contains_vec(v(0, 2)));
        assert!(square.contains_vec(v(4, 4)));
        assert!(square.on_boundary(v(2, 0)));
        assert!(!square.on_boundary(v(2, 2)));
    }

    #[test]
    fn notch_of_concave_polygon_is_outside() {
        let shape = u_shape();

        assert!(shape.contains_vec(v(1, 1)), "left arm");
        assert!(shape.contains_vec(v(5, 1)), "right arm");
        assert!(!shape.contains_vec(v(3, 1)), "inside the notch");
        assert!(shape.contains_vec(v(3, 3)), "notch floor is boundary");
    }

    #[test]
    fn contains_rectangle_fully_inside() {
        let square = square4();
        let rect = Rect2::make(1, 1, 3, 3).unwrap();
        assert!(square.contains_rectangle(&rect));
    }

    #[test]
    fn contains_rectangle_rejects_partial_overlap() {
        let square = square4();
        let rect = Rect2::make(1, 1, 5, 5).unwrap();
        assert!(!square.contains_rectangle(&rect));
    }

    #[test]
    fn rectangle_matching_the_square_is_contained() {
        let square = square4();
        let rect = Rect2::make(0, 0, 4, 4).unwrap();
        assert!(
            square.contains_rectangle(&rect),
            "boundary contact without crossing is containment"
        );
    }

    #[test]
    fn corners_inside_but_edge_crossing_is_rejected() {
        // Both corners columns of the rectangle sit in the arms of the
        // U; its top edge crosses the notch walls.
        let shape = u_shape();
        let rect = Rect2::make(1, 1, 5, 4).unwrap();

        for corner in rect.corners() {
            assert!(
                shape.contains_vec(corner),
                "corner {corner} should be contained"
            );
        }
        assert!(!shape.contains_rectangle(&rect));
    }

    #[test]
    fn ray_cast_handles_vertex_aligned_rays() {
        // Point level with two vertices of the square: the half-open
        // comparison must not double count.
        let diamond = Polygon2::make(vec![v(2, 0), v(4, 2), v(2, 4), v(0, 2)]).unwrap();
        assert!(diamond.contains_vec(v(2, 2)));
        assert!(!diamond.contains_vec(v(5, 2)));
        assert!(!diamond.contains_vec(v(-1, 2)));
    }
}
