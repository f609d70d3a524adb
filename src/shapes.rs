//! Parametric lambda and the six-armed snowflake logomark built from it.
//!
//! Everything is derived from a hexagon of circumradius `radius` centered on
//! the origin. Points come out in y-down drawing coordinates.

use std::ops::Index;

use crate::canvas::ClearSpace;
use crate::defaults;
use crate::errors::{ConfigError, NumericError};
use crate::geometry::{BBox, Point, Vector, polar};
use crate::scene::{Element, Group, Polygon, Transform};
use crate::style::{Color, GradientStop, LinearGradient, Paint, Presentation};

/// Vertices of a regular hexagon at 0°, 60°, … 300°.
pub fn hexagon_points(radius: f64) -> [Point; 6] {
    defaults::SIXTHS.map(|angle| (polar(angle) * radius).to_point())
}

/// Shape parameters of a lambda
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LambdaParams {
    radius: f64,
    thickness: f64,
    gap: f64,
}

impl Default for LambdaParams {
    fn default() -> Self {
        LambdaParams {
            radius: defaults::LAMBDA_RADIUS,
            thickness: defaults::LAMBDA_THICKNESS,
            gap: defaults::LAMBDA_GAP,
        }
    }
}

impl LambdaParams {
    /// `radius` is the hexagon circumradius, `thickness` and `gap` are
    /// fractions of it.
    pub fn try_new(radius: f64, thickness: f64, gap: f64) -> Result<Self, ConfigError> {
        let invalid = |field| move |reason| ConfigError::InvalidValue { field, reason };
        Ok(LambdaParams {
            radius: NumericError::check_positive(radius).map_err(invalid("lambda radius"))?,
            thickness: NumericError::check_positive(thickness)
                .map_err(invalid("lambda thickness"))?,
            gap: NumericError::check_non_negative(gap).map_err(invalid("lambda gap"))?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Same shape without the gap.
    pub fn ungapped(self) -> Self {
        LambdaParams { gap: 0.0, ..self }
    }

    /// Stroke thickness in user units.
    pub fn stroke(&self) -> f64 {
        self.radius * self.thickness
    }
}

/// Named vertices of the lambda polygon, in drawing order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LambdaVertex {
    UpperNotch,
    UpperApex,
    ForwardTip,
    ForwardHeel,
    JointCrotch,
    RearHeel,
    RearFoot,
    RearNotch,
    MidpointJoin,
}

impl LambdaVertex {
    pub const ALL: [LambdaVertex; 9] = [
        LambdaVertex::UpperNotch,
        LambdaVertex::UpperApex,
        LambdaVertex::ForwardTip,
        LambdaVertex::ForwardHeel,
        LambdaVertex::JointCrotch,
        LambdaVertex::RearHeel,
        LambdaVertex::RearFoot,
        LambdaVertex::RearNotch,
        LambdaVertex::MidpointJoin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LambdaVertex::UpperNotch => "upper_notch",
            LambdaVertex::UpperApex => "upper_apex",
            LambdaVertex::ForwardTip => "forward_tip",
            LambdaVertex::ForwardHeel => "forward_heel",
            LambdaVertex::JointCrotch => "joint_crotch",
            LambdaVertex::RearHeel => "rear_heel",
            LambdaVertex::RearFoot => "rear_foot",
            LambdaVertex::RearNotch => "rear_notch",
            LambdaVertex::MidpointJoin => "midpoint_join",
        }
    }
}

/// The nine vertices of a lambda polygon
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LambdaPoints([Point; 9]);

impl LambdaPoints {
    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.0.iter().copied()
    }

    pub fn map(&self, f: impl Fn(Point) -> Point) -> LambdaPoints {
        LambdaPoints(self.0.map(f))
    }

    /// Pairs of consecutive vertices, closing back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        (0..9).map(|i| (self.0[i], self.0[(i + 1) % 9]))
    }

    pub fn bounds(&self) -> BBox {
        BBox::from_points(self.iter())
    }
}

impl Index<LambdaVertex> for LambdaPoints {
    type Output = Point;

    fn index(&self, vertex: LambdaVertex) -> &Point {
        &self.0[vertex as usize]
    }
}

impl Index<usize> for LambdaPoints {
    type Output = Point;

    fn index(&self, i: usize) -> &Point {
        &self.0[i]
    }
}

/// Lambda vertices for `params`.
pub fn lambda_points(params: &LambdaParams) -> LambdaPoints {
    let r = params.radius;
    let hex = hexagon_points(r);
    let (top_left, bottom_left, bottom_right) = (hex[2], hex[4], hex[5]);
    let along = |angle| polar(angle) * params.stroke();
    let (v0, v60, v270, v300) = (along(0.0), along(60.0), along(270.0), along(300.0));
    let gap = polar(300.0) * (2.0 * r * params.gap);

    let points = [
        top_left - v60 + gap,
        top_left + v60 + gap,
        bottom_right + v0,
        bottom_right - v0,
        (v270 * 3f64.sqrt()).to_point(),
        bottom_left + v0,
        bottom_left,
        bottom_left - v300,
        (-v0).to_point(),
    ];
    LambdaPoints(points.map(Point::flip_y))
}

// ============================================================================
// Lambda
// ============================================================================

/// One lambda glyph of the logomark
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Lambda {
    params: LambdaParams,
}

impl Lambda {
    pub fn new(params: LambdaParams) -> Self {
        Lambda { params }
    }

    pub fn params(&self) -> &LambdaParams {
        &self.params
    }

    pub fn points(&self) -> LambdaPoints {
        lambda_points(&self.params)
    }

    /// Vertices with the gap closed.
    pub fn ungapped_points(&self) -> LambdaPoints {
        lambda_points(&self.params.ungapped())
    }

    pub fn hexagon(&self) -> [Point; 6] {
        hexagon_points(self.params.radius)
    }

    pub fn bounds(&self) -> BBox {
        self.points().bounds()
    }

    /// Margin around the lambda, relative to its lowest point.
    pub fn clear_space(&self, clear_space: ClearSpace) -> f64 {
        clear_space.margin(self.bounds().max.y)
    }

    pub fn polygon(&self, style: Presentation) -> Polygon {
        Polygon {
            points: self.points().as_slice().to_vec(),
            style,
        }
    }
}

// ============================================================================
// Snowflake
// ============================================================================

/// Gradient axis across a lambda arm, in the arm's own frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientAxis {
    pub start: Point,
    pub end: Point,
}

impl GradientAxis {
    /// Gradient along this axis with one color per default stop.
    pub fn gradient(&self, colors: [Color; 3]) -> LinearGradient {
        LinearGradient {
            start: self.start,
            end: self.end,
            stops: defaults::GRADIENT_STOPS
                .into_iter()
                .zip(colors)
                .map(|(offset, color)| GradientStop { offset, color })
                .collect(),
        }
    }
}

/// Six lambdas rotated about a common center
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Snowflake {
    lambda: Lambda,
}

impl Snowflake {
    pub fn new(params: LambdaParams) -> Self {
        Snowflake {
            lambda: Lambda::new(params),
        }
    }

    pub fn lambda(&self) -> &Lambda {
        &self.lambda
    }

    /// Offset that moves a lambda into the arm position at 0°.
    pub fn arm_offset(&self) -> Vector {
        let apex = self.lambda.ungapped_points()[LambdaVertex::UpperApex];
        -apex.to_vector() - Vector::new(self.lambda.params.radius, 0.0)
    }

    /// Vertices of all six arms, at 0°, 60°, … 300°.
    pub fn arms(&self) -> [LambdaPoints; 6] {
        let offset = self.arm_offset();
        let points = self.lambda.points();
        defaults::SIXTHS.map(|angle| points.map(|p| (p + offset).rotate(angle)))
    }

    /// Largest distance of a vertex from the center, along x.
    pub fn circumradius(&self) -> f64 {
        self.arms()
            .iter()
            .flat_map(LambdaPoints::iter)
            .map(|p| p.x)
            .fold(f64::MIN, f64::max)
    }

    pub fn inradius(&self) -> f64 {
        self.circumradius() * 3f64.sqrt() / 2.0
    }

    /// Circumradius over lambda radius.
    pub fn lambda_ratio(&self) -> f64 {
        self.circumradius() / self.lambda.params.radius
    }

    pub fn bounds(&self) -> BBox {
        let (c, i) = (self.circumradius(), self.inradius());
        BBox::from_corners(Point::new(-c, -i), Point::new(c, i))
    }

    /// Margin around the logomark, relative to its inradius.
    pub fn clear_space(&self, clear_space: ClearSpace) -> f64 {
        clear_space.margin(self.inradius())
    }

    /// Gradient axis of a single arm, taken from the ungapped lambda.
    pub fn gradient_axis(&self) -> GradientAxis {
        let ungapped = self.lambda.ungapped_points();
        let start = Point::new(
            ungapped[LambdaVertex::UpperNotch].x,
            ungapped[LambdaVertex::UpperApex].y,
        );
        let end = ungapped[LambdaVertex::JointCrotch] + Vector::new(self.lambda.params.stroke(), 0.0);
        GradientAxis { start, end }
    }

    /// Transform lists placing an untranslated lambda at each arm.
    pub fn arm_transforms(&self) -> [Vec<Transform>; 6] {
        let pivot = self.arm_offset();
        defaults::SIXTHS.map(|degrees| {
            vec![
                Transform::Translate(pivot),
                Transform::Rotate {
                    degrees,
                    center: (-pivot).to_point(),
                },
            ]
        })
    }

    /// Flat-filled arms, colors cycling through `palette`.
    pub fn flat_elements(&self, palette: &[Color]) -> Result<Vec<Element>, ConfigError> {
        if palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(self
            .arms()
            .iter()
            .zip(palette.iter().cycle())
            .map(|(arm, color)| {
                Polygon {
                    points: arm.as_slice().to_vec(),
                    style: Presentation::filled(color.clone()),
                }
                .into()
            })
            .collect())
    }

    /// Gradient-filled arms, each a lambda placed by its transform list.
    pub fn gradient_elements(&self, palette: &[[Color; 3]]) -> Result<Vec<Element>, ConfigError> {
        if palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let axis = self.gradient_axis();
        Ok(self
            .arm_transforms()
            .into_iter()
            .zip(palette.iter().cycle())
            .map(|(transforms, colors)| {
                let fill = Paint::Gradient(axis.gradient(colors.clone()));
                Group::new(vec![self.lambda.polygon(Presentation::filled(fill)).into()])
                    .with_transforms(transforms)
                    .into()
            })
            .collect())
    }
}
