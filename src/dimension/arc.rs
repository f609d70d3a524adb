//! Circular arcs between two points, with SVG arc-flag semantics.
//!
//! The vocabulary of the scene has no arc command, so arcs are emitted as
//! cubic Béziers of at most a quarter turn each.

use std::f64::consts::FRAC_PI_2;

use crate::defaults;
use crate::errors::GeometryError;
use crate::geometry::{Point, Vector};
use crate::log::warn;
use crate::outline::PathData;

/// Relative slack allowed when the radius is only just long enough.
const RADIUS_TOLERANCE: f64 = 1e-9;

/// A circular arc in y-down drawing coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    /// Radians, measured with `atan2` in drawing coordinates
    pub start_angle: f64,
    /// Signed radians; positive with the sweep flag set
    pub sweep_angle: f64,
}

/// Distance from the chord midpoint to the center, and the chord's unit normal.
fn chord_geometry(p1: Point, p2: Point, radius: f64) -> Result<(f64, Vector), GeometryError> {
    let normal = (p2 - p1).normal()?;
    let half_chord = p1.distance(p2) / 2.0;
    if radius < half_chord * (1.0 - RADIUS_TOLERANCE) {
        return Err(GeometryError::ArcTooSmall { radius, half_chord });
    }
    if radius < half_chord {
        warn!(radius, half_chord, "arc radius clamped to half the chord");
    }
    let apothem = (radius * radius - half_chord * half_chord).max(0.0).sqrt();
    Ok((apothem, normal))
}

fn side_sign(large: bool, sweep: bool) -> f64 {
    if large == sweep { 1.0 } else { -1.0 }
}

impl Arc {
    /// Arc from `p1` to `p2` with the given radius.
    ///
    /// `large` picks the arc longer than a half turn, `sweep` picks the
    /// direction of increasing angle.
    pub fn from_endpoints(
        p1: Point,
        p2: Point,
        radius: f64,
        large: bool,
        sweep: bool,
    ) -> Result<Self, GeometryError> {
        let (apothem, normal) = chord_geometry(p1, p2, radius)?;
        let center = p1.midpoint(p2) + normal * (side_sign(large, sweep) * apothem);
        let radius = radius.max(p1.distance(p2) / 2.0);

        let angle_of = |p: Point| {
            let v = p - center;
            v.y.atan2(v.x)
        };
        let start_angle = angle_of(p1);
        let mut sweep_angle = angle_of(p2) - start_angle;
        if sweep && sweep_angle < 0.0 {
            sweep_angle += std::f64::consts::TAU;
        } else if !sweep && sweep_angle > 0.0 {
            sweep_angle -= std::f64::consts::TAU;
        }
        Ok(Arc {
            center,
            radius,
            start_angle,
            sweep_angle,
        })
    }

    pub fn point_at(&self, angle: f64) -> Point {
        self.center + Vector::new(angle.cos(), angle.sin()) * self.radius
    }

    pub fn start(&self) -> Point {
        self.point_at(self.start_angle)
    }

    pub fn end(&self) -> Point {
        self.point_at(self.start_angle + self.sweep_angle)
    }

    pub fn midpoint(&self) -> Point {
        self.point_at(self.start_angle + self.sweep_angle / 2.0)
    }

    /// Cubic Bézier approximation, starting with a move to the start point.
    pub fn to_path(&self) -> PathData {
        let max_segment = defaults::ARC_SEGMENT_MAX_DEGREES.to_radians().min(FRAC_PI_2);
        let count = (self.sweep_angle.abs() / max_segment).ceil().max(1.0) as usize;
        let step = self.sweep_angle / count as f64;
        let k = 4.0 / 3.0 * (step / 4.0).tan() * self.radius;
        let tangent = |a: f64| Vector::new(-a.sin(), a.cos());

        (0..count).fold(PathData::new().move_to(self.start()), |path, i| {
            let a0 = self.start_angle + step * i as f64;
            let a1 = a0 + step;
            let (p0, p3) = (self.point_at(a0), self.point_at(a1));
            path.cubic_to(p0 + tangent(a0) * k, p3 - tangent(a1) * k, p3)
        })
    }
}

/// Midpoint of the arc from `p1` to `p2` and the outward unit vector there.
pub fn arc_sagitta(
    p1: Point,
    p2: Point,
    radius: f64,
    large: bool,
    sweep: bool,
) -> Result<(Point, Vector), GeometryError> {
    let (apothem, normal) = chord_geometry(p1, p2, radius)?;
    let center = p1.midpoint(p2) + normal * (side_sign(large, sweep) * apothem);
    let bulge = if sweep { 1.0 } else { -1.0 };
    let midpoint = center + normal * (bulge * radius.max(p1.distance(p2) / 2.0));
    Ok((midpoint, (midpoint - center).normalize()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::PathCommand;

    const EPSILON: f64 = 1e-9;

    fn assert_point_eq(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn quarter_arc_center() {
        let arc = Arc::from_endpoints(Point::new(1.0, 0.0), Point::new(0.0, 1.0), 1.0, false, true)
            .unwrap();
        assert_point_eq(arc.center, Point::ORIGIN);
        assert!((arc.sweep_angle - FRAC_PI_2).abs() < EPSILON);
        let h = 0.5f64.sqrt();
        assert_point_eq(arc.midpoint(), Point::new(h, h));
    }

    #[test]
    fn large_arc_goes_the_long_way() {
        let arc = Arc::from_endpoints(Point::new(1.0, 0.0), Point::new(0.0, 1.0), 1.0, true, true)
            .unwrap();
        assert_point_eq(arc.center, Point::new(1.0, 1.0));
        assert!((arc.sweep_angle - 3.0 * FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn sagitta_matches_arc_midpoint() {
        let (p1, p2) = (Point::new(10.0, 0.0), Point::new(0.0, 10.0));
        for large in [false, true] {
            for sweep in [false, true] {
                let arc = Arc::from_endpoints(p1, p2, 10.0, large, sweep).unwrap();
                let (mid, outward) = arc_sagitta(p1, p2, 10.0, large, sweep).unwrap();
                assert!((mid - arc.midpoint()).length() < 1e-6, "large={large} sweep={sweep}");
                assert!((outward.length() - 1.0).abs() < EPSILON);
                assert!((arc.midpoint() - arc.center).normalize().unwrap().dot(outward) > 0.999);
            }
        }
    }

    #[test]
    fn path_is_split_into_quarter_turns() {
        let arc = Arc::from_endpoints(Point::new(1.0, 0.0), Point::new(0.0, 1.0), 1.0, true, true)
            .unwrap();
        let path = arc.to_path();
        let curves = path
            .commands()
            .iter()
            .filter(|c| matches!(c, PathCommand::CubicBezier(..)))
            .count();
        assert_eq!(curves, 3);
        assert_point_eq(path.commands()[0].end_point(), Point::new(1.0, 0.0));
        assert_point_eq(path.commands()[3].end_point(), Point::new(0.0, 1.0));
    }

    #[test]
    fn bezier_midpoint_stays_on_circle() {
        let arc = Arc::from_endpoints(Point::new(1.0, 0.0), Point::new(0.0, 1.0), 1.0, false, true)
            .unwrap();
        let PathCommand::CubicBezier(c1, c2, p3) = arc.to_path().commands()[1] else {
            panic!("expected a cubic");
        };
        let p0 = Point::new(1.0, 0.0);
        let mid = (p0.to_vector() + (c1.to_vector() + c2.to_vector()) * 3.0 + p3.to_vector()) / 8.0;
        assert!((mid.length() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn coincident_endpoints_are_rejected() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(
            Arc::from_endpoints(p, p, 1.0, false, true),
            Err(GeometryError::ZeroLength)
        );
    }

    #[test]
    fn radius_shorter_than_half_chord_is_rejected() {
        let err = arc_sagitta(Point::ORIGIN, Point::new(10.0, 0.0), 2.0, false, true).unwrap_err();
        assert_eq!(
            err,
            GeometryError::ArcTooSmall {
                radius: 2.0,
                half_chord: 5.0
            }
        );
    }
}
