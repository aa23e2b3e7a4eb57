//! Planar geometry checks
//!
//! Containment and overlap tests on simple records. Rectangles live in
//! canvas coordinate space: the y axis grows downward, so a rectangle's
//! bottom edge is `top + height`. All boundary comparisons are strict -
//! touching edges do not overlap, and a point on a circle's rim is outside
//! it.

/// A point in the plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate (grows downward in canvas space)
    pub y: f64,
}

/// A circle given by its center and radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Circle {
    /// Center of the circle
    pub center: Point,
    /// Radius of the circle
    pub radius: f64,
}

/// An axis-aligned rectangle in canvas coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    /// Top edge (smallest y)
    pub top: f64,
    /// Left edge (smallest x)
    pub left: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Rect {
    /// Right edge: `left + width`.
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge: `top + height` (y grows downward).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Returns true if sides `a`, `b`, `c` can form a triangle: the largest
/// side must be strictly shorter than the sum of the other two, so
/// degenerate (collinear) triples are rejected.
///
/// # Examples
///
/// ```
/// use puzzlr::geometry::triangle_exists;
///
/// assert!(triangle_exists(3.0, 4.0, 5.0));
/// assert!(!triangle_exists(1.0, 2.0, 3.0));
/// assert!(!triangle_exists(10.0, 1.0, 1.0));
/// ```
pub fn triangle_exists(a: f64, b: f64, c: f64) -> bool {
    let mut sides = [a, b, c];
    sides.sort_by(f64::total_cmp);
    sides[2] < sides[0] + sides[1]
}

/// Returns true if the two rectangles overlap in a region of positive
/// area. Rectangles that merely share an edge or a corner do not overlap.
///
/// # Examples
///
/// ```
/// use puzzlr::geometry::{Rect, rects_overlap};
///
/// let a = Rect { top: 0.0, left: 0.0, width: 10.0, height: 10.0 };
/// let b = Rect { top: 5.0, left: 5.0, width: 20.0, height: 20.0 };
/// let c = Rect { top: 20.0, left: 20.0, width: 20.0, height: 20.0 };
/// assert!(rects_overlap(&a, &b));
/// assert!(!rects_overlap(&a, &c));
/// ```
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.left < b.right() && b.left < a.right() && a.top < b.bottom() && b.top < a.bottom()
}

/// Returns true if `point` lies strictly inside `circle`; rim points are
/// outside. Compares squared distances, so no square root is taken.
///
/// # Examples
///
/// ```
/// use puzzlr::geometry::{Circle, Point, circle_contains};
///
/// let circle = Circle { center: Point { x: 0.0, y: 0.0 }, radius: 10.0 };
/// assert!(circle_contains(&circle, &Point { x: 0.0, y: 0.0 }));
/// assert!(!circle_contains(&circle, &Point { x: 10.0, y: 10.0 }));
/// ```
pub fn circle_contains(circle: &Circle, point: &Point) -> bool {
    let dx = point.x - circle.center.x;
    let dy = point.y - circle.center.y;
    dx * dx + dy * dy < circle.radius * circle.radius
}
