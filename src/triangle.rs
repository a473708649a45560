use crate::point::Point;
use crate::shape::{Polygon, Shape, DEFAULT_COLOR};
use std::fmt;

/// Triangle categories by edge length equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriangleKind {
    /// All three edges equal.
    Equilateral,

    /// Exactly two edges equal.
    Isosceles,

    /// All edges distinct.
    Scalene,
}

impl fmt::Display for TriangleKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TriangleKind::Equilateral => write!(f, "equilateral triangle"),
            TriangleKind::Isosceles => write!(f, "isosceles triangle"),
            TriangleKind::Scalene => write!(f, "scalene triangle"),
        }
    }
}

/// A shape with exactly three vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    outline: Polygon,
}

impl Triangle {
    /// Creates a triangle with the default color and fill flag.
    pub fn new(a: Point, b: Point, c: Point) -> Triangle {
        Triangle::with_style(a, b, c, DEFAULT_COLOR, true)
    }

    /// Creates a triangle with explicit display attributes.
    pub fn with_style<S: Into<String>>(
        a: Point,
        b: Point,
        c: Point,
        color: S,
        filled: bool,
    ) -> Triangle {
        // the fixed three-point signature upholds the vertex count invariant
        Triangle {
            outline: Polygon::from_verts(vec![a, b, c], color.into(), filled),
        }
    }

    /// Classifies this triangle by its edge lengths.
    ///
    /// Lengths are rounded to two decimal places before comparison, so edges
    /// differing only beyond the second decimal count as equal.
    pub fn kind(&self) -> TriangleKind {
        let points = self.outline.points();
        let ab = round_hundredths(points[0].distance(points[1]));
        let bc = round_hundredths(points[1].distance(points[2]));
        let ca = round_hundredths(points[2].distance(points[0]));

        if ab == bc && ab == ca {
            TriangleKind::Equilateral
        } else if ab == bc || ab == ca || bc == ca {
            TriangleKind::Isosceles
        } else {
            TriangleKind::Scalene
        }
    }
}

fn round_hundredths(x: f64) -> f64 {
    (x * 100.).round() / 100.
}

impl Shape for Triangle {
    fn outline(&self) -> &Polygon {
        &self.outline
    }

    fn shape_type(&self) -> String {
        self.kind().to_string()
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let points = self.outline.points();
        write!(
            f,
            "Triangle[v1={},v2={},v3={}]",
            points[0], points[1], points[2]
        )
    }
}

#[test]
fn classification() {
    let eq = Triangle::new(
        Point::new(0., 0.),
        Point::new(1., 0.),
        Point::new(0.5, 0.8660),
    );
    assert_eq!(eq.kind(), TriangleKind::Equilateral);
    assert_eq!(eq.shape_type(), "equilateral triangle");

    let iso = Triangle::new(Point::new(0., 0.), Point::new(2., 0.), Point::new(1., 5.));
    assert_eq!(iso.kind(), TriangleKind::Isosceles);
    assert_eq!(iso.shape_type(), "isosceles triangle");

    let sca = Triangle::new(Point::new(0., 0.), Point::new(2., 0.), Point::new(5., 7.));
    assert_eq!(sca.kind(), TriangleKind::Scalene);
    assert_eq!(sca.shape_type(), "scalene triangle");
}

#[test]
fn classification_rounds_to_hundredths() {
    // 1 and 1.001 only differ beyond the second decimal
    let t = Triangle::new(Point::new(0., 0.), Point::new(1., 0.), Point::new(1., 1.001));
    assert_eq!(t.kind(), TriangleKind::Isosceles);
}

#[test]
fn display() {
    let t = Triangle::new(Point::new(0., 0.), Point::new(3., 0.), Point::new(0., 4.));
    assert_eq!(t.to_string(), "Triangle[v1=(0, 0),v2=(3, 0),v3=(0, 4)]");
}

#[test]
fn perimeter_via_outline() {
    let t = Triangle::new(Point::new(0., 0.), Point::new(3., 0.), Point::new(0., 4.));
    assert_eq!(t.perimeter(), 12.);
    assert_eq!(t.outline().perimeter(), 12.);
}

#[test]
fn styled_construction() {
    let t = Triangle::with_style(
        Point::new(0., 0.),
        Point::new(1., 0.),
        Point::new(0., 1.),
        "red",
        false,
    );
    assert_eq!(t.outline().color(), "red");
    assert!(!t.outline().filled());

    let default = Triangle::new(Point::new(0., 0.), Point::new(1., 0.), Point::new(0., 1.));
    assert_eq!(default.outline().color(), "green");
    assert!(default.outline().filled());
}
