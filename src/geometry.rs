//! 2D geometry kernel: points, vectors, rotation matrices and bounding boxes.
//!
//! Positions and displacements are separate types: `Point - Point = Vector`,
//! `Point + Vector = Point`. The arithmetic itself goes through glam's
//! `DVec2`/`DMat2`. Angles taken by the public API are in degrees.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use glam::{DMat2, DVec2, dvec2};

use crate::errors::GeometryError;
use crate::log::warn;

/// Cosine of an angle in degrees.
pub fn cosd(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

/// Sine of an angle in degrees.
pub fn sind(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// Unit vector at `degrees` counter-clockwise from the +x axis.
pub fn polar(degrees: f64) -> Vector {
    Vector::new(cosd(degrees), sind(degrees))
}

// ============================================================================
// Point
// ============================================================================

/// An absolute position
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Displacement from the origin to this point.
    pub fn to_vector(self) -> Vector {
        Vector::new(self.x, self.y)
    }

    /// Point halfway between `self` and `other`
    pub fn midpoint(self, other: Point) -> Point {
        DVec2::from(self).lerp(other.into(), 0.5).into()
    }

    /// Distance to another point
    pub fn distance(self, other: Point) -> f64 {
        DVec2::from(self).distance(other.into())
    }

    /// Unit vector perpendicular to the direction from `reference` to `self`.
    pub fn normal(self, reference: Point) -> Result<Vector, GeometryError> {
        (self - reference).normal()
    }

    /// Rotate about the origin by `degrees`, counter-clockwise in a y-up frame.
    pub fn rotate(self, degrees: f64) -> Point {
        Matrix::rotation(degrees) * self
    }

    /// Rotate about `center` by `degrees`.
    pub fn rotate_about(self, degrees: f64, center: Point) -> Point {
        center + (self - center).rotate(degrees)
    }

    /// Mirror across the x axis.
    pub fn flip_y(self) -> Point {
        Point::new(self.x, -self.y)
    }

    /// Scale each coordinate independently about the origin.
    pub fn scale_xy(self, sx: f64, sy: f64) -> Point {
        Point::new(self.x * sx, self.y * sy)
    }

    pub fn is_finite(self) -> bool {
        DVec2::from(self).is_finite()
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        dvec2(p.x, p.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

impl Add<Vector> for Point {
    type Output = Point;
    fn add(self, rhs: Vector) -> Point {
        (DVec2::from(self) + DVec2::from(rhs)).into()
    }
}

impl AddAssign<Vector> for Point {
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}

impl Sub<Vector> for Point {
    type Output = Point;
    fn sub(self, rhs: Vector) -> Point {
        (DVec2::from(self) - DVec2::from(rhs)).into()
    }
}

impl Sub<Point> for Point {
    type Output = Vector;
    fn sub(self, rhs: Point) -> Vector {
        (DVec2::from(self) - DVec2::from(rhs)).into()
    }
}

/// Uniform scale about the origin.
impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        (DVec2::from(self) * rhs).into()
    }
}

impl Div<f64> for Point {
    type Output = Point;
    fn div(self, rhs: f64) -> Point {
        (DVec2::from(self) / rhs).into()
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

// ============================================================================
// Vector
// ============================================================================

/// A displacement or direction
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };
    pub const X: Vector = Vector { x: 1.0, y: 0.0 };
    pub const Y: Vector = Vector { x: 0.0, y: 1.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Vector { x, y }
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn length(self) -> f64 {
        DVec2::from(self).length()
    }

    pub fn dot(self, other: Vector) -> f64 {
        DVec2::from(self).dot(other.into())
    }

    /// Unit vector in the same direction.
    pub fn normalize(self) -> Result<Vector, GeometryError> {
        DVec2::from(self)
            .try_normalize()
            .map(Vector::from)
            .ok_or(GeometryError::ZeroLength)
    }

    /// Unit vector perpendicular to this one: `(y, -x) / |v|`.
    pub fn normal(self) -> Result<Vector, GeometryError> {
        Vector::new(self.y, -self.x).normalize()
    }

    /// Unsigned angle to `other` in degrees, in `[0, 180]`.
    pub fn angle_from(self, other: Vector) -> Result<f64, GeometryError> {
        let denom = self.length() * other.length();
        if denom == 0.0 || !denom.is_finite() {
            return Err(GeometryError::ZeroLength);
        }
        let cos = self.dot(other) / denom;
        if cos.abs() > 1.0 {
            warn!(cos, "clamping cosine into acos domain");
        }
        Ok(cos.clamp(-1.0, 1.0).acos().to_degrees())
    }

    /// Direction of this vector in degrees, measured from +x.
    pub fn heading(self) -> f64 {
        self.y.atan2(self.x).to_degrees()
    }

    pub fn rotate(self, degrees: f64) -> Vector {
        Matrix::rotation(degrees) * self
    }
}

impl From<Vector> for DVec2 {
    fn from(v: Vector) -> Self {
        dvec2(v.x, v.y)
    }
}

impl From<DVec2> for Vector {
    fn from(v: DVec2) -> Self {
        Vector::new(v.x, v.y)
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        (DVec2::from(self) + DVec2::from(rhs)).into()
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        (DVec2::from(self) - DVec2::from(rhs)).into()
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        (DVec2::from(self) * rhs).into()
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Vector {
        rhs * self
    }
}

/// Component-wise product.
impl Mul<Vector> for Vector {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Vector {
        (DVec2::from(self) * DVec2::from(rhs)).into()
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    fn div(self, rhs: f64) -> Vector {
        (DVec2::from(self) / rhs).into()
    }
}

// ============================================================================
// Matrix
// ============================================================================

/// A 2x2 matrix stored as two row vectors
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix {
    pub rows: [Vector; 2],
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        rows: [Vector::X, Vector::Y],
    };

    pub const fn from_rows(r0: Vector, r1: Vector) -> Self {
        Matrix { rows: [r0, r1] }
    }

    /// Rotation by `degrees`: rows `(cos, -sin)` and `(sin, cos)`.
    pub fn rotation(degrees: f64) -> Self {
        DMat2::from_angle(degrees.to_radians()).into()
    }

    pub fn transpose(self) -> Matrix {
        DMat2::from(self).transpose().into()
    }
}

impl From<DMat2> for Matrix {
    fn from(m: DMat2) -> Self {
        Matrix::from_rows(m.row(0).into(), m.row(1).into())
    }
}

impl From<Matrix> for DMat2 {
    fn from(m: Matrix) -> Self {
        DMat2::from_cols(m.rows[0].into(), m.rows[1].into()).transpose()
    }
}

impl Mul<Vector> for Matrix {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Vector {
        Vector::new(self.rows[0].dot(rhs), self.rows[1].dot(rhs))
    }
}

impl Mul<Point> for Matrix {
    type Output = Point;
    fn mul(self, rhs: Point) -> Point {
        (self * rhs.to_vector()).to_point()
    }
}

impl Mul for Matrix {
    type Output = Matrix;
    fn mul(self, rhs: Matrix) -> Matrix {
        (DMat2::from(self) * DMat2::from(rhs)).into()
    }
}

// ============================================================================
// Segment
// ============================================================================

/// A straight segment between two points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Segment { start, end }
    }

    pub fn vector(&self) -> Vector {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.vector().length()
    }

    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }
}

// ============================================================================
// Bounding box
// ============================================================================

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl Default for BBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BBox {
    /// Create an empty bounding box (will expand on first point)
    pub fn new() -> Self {
        BBox {
            min: Point::new(f64::MAX, f64::MAX),
            max: Point::new(f64::MIN, f64::MIN),
        }
    }

    pub fn from_corners(min: Point, max: Point) -> Self {
        let mut bbox = BBox::new();
        bbox.expand_point(min);
        bbox.expand_point(max);
        bbox
    }

    /// Tightest box around `points`; empty when there are none.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut bbox = BBox::new();
        for p in points {
            bbox.expand_point(p);
        }
        bbox
    }

    /// Check if the bbox is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Expand to include another box
    pub fn expand_bbox(&mut self, other: &BBox) {
        if !other.is_empty() {
            self.expand_point(other.min);
            self.expand_point(other.max);
        }
    }

    pub fn union(mut self, other: &BBox) -> BBox {
        self.expand_bbox(other);
        self
    }

    /// Grow by `margin` on every side.
    pub fn inflate(&self, margin: f64) -> BBox {
        let m = Vector::new(margin, margin);
        BBox {
            min: self.min - m,
            max: self.max + m,
        }
    }

    pub fn translate(&self, offset: Vector) -> BBox {
        BBox {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Scale each axis about the origin, reordering corners when mirrored.
    pub fn scale_xy(&self, sx: f64, sy: f64) -> BBox {
        BBox::from_corners(self.min.scale_xy(sx, sy), self.max.scale_xy(sx, sy))
    }

    pub fn corners(&self) -> [Point; 4] {
        [
            self.min,
            Point::new(self.max.x, self.min.y),
            self.max,
            Point::new(self.min.x, self.max.y),
        ]
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        self.min.midpoint(self.max)
    }

    /// Width over height, rejecting empty and zero-area boxes.
    pub fn aspect(&self) -> Result<f64, GeometryError> {
        if self.is_empty() {
            return Err(GeometryError::EmptyBounds);
        }
        if self.height() == 0.0 {
            return Err(GeometryError::DegenerateBounds { axis: "height" });
        }
        if self.width() == 0.0 {
            return Err(GeometryError::DegenerateBounds { axis: "width" });
        }
        Ok(self.width() / self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_point_eq(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn point_minus_point_is_vector() {
        let v = Point::new(3.0, 5.0) - Point::new(1.0, 1.0);
        assert_eq!(v, Vector::new(2.0, 4.0));
        assert_eq!(Point::new(1.0, 1.0) + v, Point::new(3.0, 5.0));
    }

    #[test]
    fn normal_is_unit_and_perpendicular() {
        let v = Vector::new(3.0, 4.0);
        let n = v.normal().unwrap();
        assert!((n.length() - 1.0).abs() < EPSILON);
        assert!(n.dot(v).abs() < EPSILON);
        assert_point_eq(n.to_point(), Point::new(0.8, -0.6));
    }

    #[test]
    fn point_normal_uses_reference() {
        let n = Point::new(2.0, 0.0).normal(Point::ORIGIN).unwrap();
        assert_point_eq(n.to_point(), Point::new(0.0, -1.0));
    }

    #[test]
    fn zero_vector_has_no_direction() {
        assert_eq!(Vector::ZERO.normalize(), Err(GeometryError::ZeroLength));
        assert_eq!(Vector::ZERO.normal(), Err(GeometryError::ZeroLength));
        assert_eq!(
            Vector::X.angle_from(Vector::ZERO),
            Err(GeometryError::ZeroLength)
        );
    }

    #[test]
    fn rotation_is_counter_clockwise() {
        assert_point_eq(Point::new(1.0, 0.0).rotate(90.0), Point::new(0.0, 1.0));
        assert_point_eq(Point::new(0.0, 1.0).rotate(90.0), Point::new(-1.0, 0.0));
        let m = Matrix::rotation(30.0);
        assert!((m.rows[0].x - cosd(30.0)).abs() < EPSILON);
        assert!((m.rows[0].y + sind(30.0)).abs() < EPSILON);
        assert!((m.rows[1].x - sind(30.0)).abs() < EPSILON);
    }

    #[test]
    fn rotation_transpose_inverts() {
        let m = Matrix::rotation(47.0);
        let v = Vector::new(2.0, -3.0);
        let back = m.transpose() * (m * v);
        assert_point_eq(back.to_point(), v.to_point());
    }

    #[test]
    fn rotate_about_center() {
        let p = Point::new(2.0, 1.0).rotate_about(180.0, Point::new(1.0, 1.0));
        assert_point_eq(p, Point::new(0.0, 1.0));
    }

    #[test]
    fn angle_from_is_clamped_for_parallel_vectors() {
        let a = Vector::new(1e-3, 1e-3);
        let b = Vector::new(1e3, 1e3);
        assert!(a.angle_from(b).unwrap().abs() < 1e-6);
        assert!((Vector::X.angle_from(-Vector::X).unwrap() - 180.0).abs() < EPSILON);
        assert!((Vector::X.angle_from(Vector::Y).unwrap() - 90.0).abs() < EPSILON);
    }

    #[test]
    fn bbox_empty_until_expanded() {
        let mut b = BBox::new();
        assert!(b.is_empty());
        b.expand_point(Point::new(1.0, 2.0));
        b.expand_point(Point::new(-1.0, 4.0));
        assert_eq!(b.width(), 2.0);
        assert_eq!(b.height(), 2.0);
        assert_eq!(b.center(), Point::new(0.0, 3.0));
    }

    #[test]
    fn bbox_mirror_keeps_min_below_max() {
        let b = BBox::from_corners(Point::new(0.0, -10.0), Point::new(5.0, 0.0));
        let m = b.scale_xy(-1.0, -1.0);
        assert_eq!(m.min, Point::new(-5.0, 0.0));
        assert_eq!(m.max, Point::new(0.0, 10.0));
    }

    #[test]
    fn bbox_aspect_rejects_degenerate() {
        let flat = BBox::from_points([Point::new(0.0, 0.0), Point::new(4.0, 0.0)]);
        assert_eq!(
            flat.aspect(),
            Err(GeometryError::DegenerateBounds { axis: "height" })
        );
        assert_eq!(BBox::new().aspect(), Err(GeometryError::EmptyBounds));
        let ok = BBox::from_points([Point::new(0.0, 0.0), Point::new(4.0, 2.0)]);
        assert_eq!(ok.aspect(), Ok(2.0));
    }
}
