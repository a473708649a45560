use crate::point::Point;
use std::fmt;

pub(crate) const DEFAULT_COLOR: &str = "green";

/// Shape validation errors.
#[derive(Fail, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The vertex list contains fewer than three points.
    #[fail(display = "shape requires at least 3 vertices, got {}", _0)]
    TooFewVertices(usize),
}

/// A closed polygon outline with display attributes.
///
/// Vertices are owned and kept in insertion order; the closing edge from the
/// last vertex back to the first is implicit.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
    color: String,
    filled: bool,
}

impl Polygon {
    /// Creates a polygon with the default color (green) and fill flag (filled).
    ///
    /// Fails if fewer than three vertices are given.
    pub fn new(points: Vec<Point>) -> Result<Polygon, ValidationError> {
        Polygon::with_style(points, DEFAULT_COLOR, true)
    }

    /// Creates a polygon with explicit display attributes.
    ///
    /// Fails if fewer than three vertices are given.
    pub fn with_style<S: Into<String>>(
        points: Vec<Point>,
        color: S,
        filled: bool,
    ) -> Result<Polygon, ValidationError> {
        if points.len() < 3 {
            debug!(target: "planar", "rejecting outline with {} vertices", points.len());
            return Err(ValidationError::TooFewVertices(points.len()));
        }

        Ok(Polygon {
            points,
            color: color.into(),
            filled,
        })
    }

    /// Constructor for callers that uphold the vertex count invariant themselves.
    pub(crate) fn from_verts(points: Vec<Point>, color: String, filled: bool) -> Polygon {
        Polygon {
            points,
            color,
            filled,
        }
    }

    /// Returns the vertices in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the outline color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns true if the shape is filled.
    pub fn filled(&self) -> bool {
        self.filled
    }

    /// Perimeter of the closed outline.
    ///
    /// Sums the edge lengths between consecutive vertices in insertion order,
    /// including the closing edge from the last vertex back to the first.
    pub fn perimeter(&self) -> f64 {
        self.points
            .iter()
            .zip(self.points.iter().cycle().skip(1))
            .map(|(a, b)| a.distance(*b))
            .sum()
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "A Shape with color of {} and {}. Points: ",
            self.color,
            if self.filled { "filled" } else { "not filled" }
        )?;
        for (point, i) in self.points.iter().zip(0..) {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", point)?;
        }
        write!(f, ".")
    }
}

/// Trait for closed shapes built on a polygon outline.
pub trait Shape {
    /// Returns the shape's outline.
    fn outline(&self) -> &Polygon;

    /// Returns a human-readable category for this shape.
    fn shape_type(&self) -> String;

    /// Perimeter of the shape's outline.
    fn perimeter(&self) -> f64 {
        self.outline().perimeter()
    }
}

#[test]
fn rejects_short_vertex_lists() {
    for n in 0..3 {
        let points: Vec<_> = (0..n).map(|i| Point::new(i as f64, 0.)).collect();
        assert_eq!(Polygon::new(points), Err(ValidationError::TooFewVertices(n)));
    }
}

#[test]
fn accepts_three_or_more_vertices() {
    let tri = Polygon::new(vec![
        Point::new(0., 0.),
        Point::new(1., 0.),
        Point::new(0., 1.),
    ])
    .unwrap();
    assert_eq!(tri.points().len(), 3);
    assert_eq!(tri.color(), "green");
    assert!(tri.filled());

    let quad = Polygon::with_style(
        vec![
            Point::new(0., 0.),
            Point::new(2., 0.),
            Point::new(2., 2.),
            Point::new(0., 2.),
        ],
        "blue",
        false,
    )
    .unwrap();
    assert_eq!(quad.points().len(), 4);
    assert_eq!(quad.color(), "blue");
    assert!(!quad.filled());
}

#[test]
fn perimeter_closes_the_outline() {
    let tri = Polygon::new(vec![
        Point::new(0., 0.),
        Point::new(3., 0.),
        Point::new(0., 4.),
    ])
    .unwrap();
    assert_eq!(tri.perimeter(), 12.);

    let square = Polygon::new(vec![
        Point::new(0., 0.),
        Point::new(2., 0.),
        Point::new(2., 2.),
        Point::new(0., 2.),
    ])
    .unwrap();
    assert_eq!(square.perimeter(), 8.);
}

#[test]
fn display_format() {
    let tri = Polygon::new(vec![
        Point::new(0., 0.),
        Point::new(3., 0.),
        Point::new(0., 4.),
    ])
    .unwrap();
    assert_eq!(
        tri.to_string(),
        "A Shape with color of green and filled. Points: (0, 0), (3, 0), (0, 4)."
    );

    let open = Polygon::with_style(
        vec![
            Point::new(1., 1.),
            Point::new(2., 1.),
            Point::new(2., 2.),
        ],
        "red",
        false,
    )
    .unwrap();
    assert_eq!(
        open.to_string(),
        "A Shape with color of red and not filled. Points: (1, 1), (2, 1), (2, 2)."
    );
}

#[test]
fn validation_error_display() {
    let err = ValidationError::TooFewVertices(2);
    assert_eq!(err.to_string(), "shape requires at least 3 vertices, got 2");
}
