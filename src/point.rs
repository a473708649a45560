use cgmath::Vector2;
use std::fmt;

/// An immutable 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// The origin (0, 0).
    pub const ORIGIN: Point = Point { x: 0., y: 0. };

    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Returns the X coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the Y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    ///
    /// Accepts anything convertible to a point, e.g. an (x, y) tuple or a
    /// [Vector2].
    pub fn distance<P: Into<Point>>(&self, other: P) -> f64 {
        let other = other.into();
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Euclidean distance to the origin.
    pub fn distance_to_origin(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from(i: (f64, f64)) -> Point {
        Point { x: i.0, y: i.1 }
    }
}

impl From<[f64; 2]> for Point {
    fn from(i: [f64; 2]) -> Point {
        Point { x: i[0], y: i[1] }
    }
}

impl From<Vector2<f64>> for Point {
    fn from(i: Vector2<f64>) -> Point {
        Point { x: i.x, y: i.y }
    }
}

impl Into<(f64, f64)> for Point {
    fn into(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl Into<[f64; 2]> for Point {
    fn into(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl Into<Vector2<f64>> for Point {
    fn into(self) -> Vector2<f64> {
        Vector2 {
            x: self.x,
            y: self.y,
        }
    }
}

#[test]
fn accessors() {
    let p = Point::new(3., -7.5);
    assert_eq!(p.x(), 3.);
    assert_eq!(p.y(), -7.5);
    assert_eq!(Point::default(), Point::ORIGIN);
}

#[test]
fn display() {
    assert_eq!(Point::new(1., 2.).to_string(), "(1, 2)");
    assert_eq!(Point::new(0.5, -3.25).to_string(), "(0.5, -3.25)");
    assert_eq!(Point::ORIGIN.to_string(), "(0, 0)");
}

#[test]
fn origin_distance() {
    assert_eq!(Point::default().distance_to_origin(), 0.);

    let p = Point::new(3., 4.);
    assert_eq!(p.distance_to_origin(), 5.);
    assert_eq!(p.distance_to_origin(), Point::ORIGIN.distance(p));
}

#[test]
fn distance_symmetry() {
    let a = Point::new(1.5, -2.);
    let b = Point::new(-4., 0.25);
    assert_eq!(a.distance(b), b.distance(a));
    assert_eq!(a.distance(a), 0.);
}

#[test]
fn distance_conversions() {
    let p = Point::new(1., 1.);
    assert_eq!(p.distance((4., 5.)), 5.);
    assert_eq!(p.distance([4., 5.]), 5.);
    assert_eq!(p.distance(Vector2::new(4., 5.)), 5.);
}

#[test]
fn conversion_round_trips() {
    let p = Point::new(2.5, -1.);

    let tuple: (f64, f64) = p.into();
    assert_eq!(Point::from(tuple), p);

    let array: [f64; 2] = p.into();
    assert_eq!(Point::from(array), p);

    let vector: Vector2<f64> = p.into();
    assert_eq!(Point::from(vector), p);
}

#[test]
fn distance_avoids_overflow() {
    // sqrt(dx² + dy²) computed naively would overflow to infinity here
    let p = Point::new(1e300, 1e300);
    assert!(p.distance_to_origin().is_finite());
    assert!(p.distance(Point::new(-1e300, -1e300)).is_finite());
}
