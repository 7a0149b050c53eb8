use crate::math::Point2;

use super::BoundingBox;

/// A polygon with one or more rings.
///
/// Each ring is an ordered closed vertex sequence; the closing vertex may be
/// repeated or left implicit. Multi-part features are stored as additional
/// rings and treated uniformly: vertex iteration pools all rings without
/// distinguishing parts from holes.
#[derive(Debug, Clone)]
pub struct Polygon {
    rings: Vec<Vec<Point2>>,
}

impl Polygon {
    /// Creates a polygon from its rings.
    ///
    /// Empty rings are dropped.
    #[must_use]
    pub fn new(rings: Vec<Vec<Point2>>) -> Self {
        Self {
            rings: rings.into_iter().filter(|r| !r.is_empty()).collect(),
        }
    }

    /// Creates a single-ring polygon.
    #[must_use]
    pub fn from_ring(ring: Vec<Point2>) -> Self {
        Self::new(vec![ring])
    }

    /// Returns the rings of the polygon.
    #[must_use]
    pub fn rings(&self) -> &[Vec<Point2>] {
        &self.rings
    }

    /// Iterates over all vertices of all rings, pooled.
    pub fn vertices(&self) -> impl Iterator<Item = &Point2> {
        self.rings.iter().flatten()
    }

    /// Iterates over the directed edges of every ring, closing each ring
    /// back to its first vertex when the input left the closure implicit.
    pub fn edges(&self) -> impl Iterator<Item = (&Point2, &Point2)> {
        self.rings.iter().flat_map(|ring| {
            let n = ring.len();
            (0..n).filter_map(move |i| {
                let a = &ring[i];
                let b = &ring[(i + 1) % n];
                // Skip the zero-length closing edge of explicitly closed rings.
                if i + 1 == n && a == b {
                    None
                } else {
                    Some((a, b))
                }
            })
        })
    }

    /// Computes the axis-aligned bounding box over all rings.
    ///
    /// Returns `None` if the polygon has no vertices.
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::of(self.vertices())
    }

    /// Even-odd containment test over all rings.
    ///
    /// Counting crossings across every ring at once handles both multi-part
    /// polygons and holes: a point inside a hole ring crosses an even number
    /// of edges and is reported outside.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        let mut inside = false;
        for (a, b) in self.edges() {
            // Half-open rule on y avoids double-counting vertex crossings.
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn unit_square() -> Polygon {
        Polygon::from_ring(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ])
    }

    #[test]
    fn vertices_pooled_across_rings() {
        let poly = Polygon::new(vec![
            vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)],
            vec![Point2::new(5.0, 5.0)],
        ]);
        assert_eq!(poly.vertices().count(), 3);
    }

    #[test]
    fn edges_close_implicit_ring() {
        let poly = unit_square();
        assert_eq!(poly.edges().count(), 4);
    }

    #[test]
    fn edges_skip_explicit_closing_duplicate() {
        let poly = Polygon::from_ring(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 0.0),
        ]);
        assert_eq!(poly.edges().count(), 3);
    }

    #[test]
    fn bounding_box_of_square() {
        let bbox = unit_square().bounding_box().unwrap();
        assert!(bbox.min.x.abs() < TOLERANCE);
        assert!((bbox.max.y - 1.0).abs() < TOLERANCE);
        assert!((bbox.diagonal() - std::f64::consts::SQRT_2).abs() < TOLERANCE);
    }

    #[test]
    fn contains_point_inside_and_outside() {
        let poly = unit_square();
        assert!(poly.contains_point(&Point2::new(0.5, 0.5)));
        assert!(!poly.contains_point(&Point2::new(1.5, 0.5)));
        assert!(!poly.contains_point(&Point2::new(-0.1, 0.5)));
    }

    #[test]
    fn contains_point_respects_hole() {
        let outer = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ];
        let hole = vec![
            Point2::new(3.0, 3.0),
            Point2::new(7.0, 3.0),
            Point2::new(7.0, 7.0),
            Point2::new(3.0, 7.0),
        ];
        let poly = Polygon::new(vec![outer, hole]);
        assert!(poly.contains_point(&Point2::new(1.0, 1.0)));
        assert!(!poly.contains_point(&Point2::new(5.0, 5.0)));
    }
}
