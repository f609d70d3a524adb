//! Glyph contours and their conversion to path commands.
//!
//! A contour is a closed ring of points, each flagged on-curve or off-curve.
//! Quadratic (TrueType) outlines carry one control point per curve and may
//! chain control points with an implied on-curve point halfway between them.
//! Cubic (PostScript/CFF) outlines carry exactly two control points per curve.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::defaults;
use crate::errors::{ConfigError, OutlineError};
use crate::geometry::{BBox, Point, Vector};
use crate::log::trace;

/// Which Bézier flavour a font's off-curve points describe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CurveFormat {
    #[default]
    Quadratic,
    Cubic,
}

impl FromStr for CurveFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quadratic" | "truetype" => Ok(CurveFormat::Quadratic),
            "cubic" | "postscript" | "cff" => Ok(CurveFormat::Cubic),
            _ => Err(ConfigError::UnknownVariant {
                kind: "curve format",
                value: s.to_string(),
            }),
        }
    }
}

/// One point of a contour
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlinePoint {
    pub x: f64,
    pub y: f64,
    pub on_curve: bool,
}

impl OutlinePoint {
    pub const fn on(x: f64, y: f64) -> Self {
        OutlinePoint { x, y, on_curve: true }
    }

    pub const fn off(x: f64, y: f64) -> Self {
        OutlinePoint { x, y, on_curve: false }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn map(self, f: impl Fn(Point) -> Point) -> Self {
        let p = f(self.position());
        OutlinePoint {
            x: p.x,
            y: p.y,
            on_curve: self.on_curve,
        }
    }
}

/// A closed ring of outline points
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Contour {
    points: Vec<OutlinePoint>,
}

impl Contour {
    pub fn new(points: Vec<OutlinePoint>) -> Self {
        Contour { points }
    }

    pub fn points(&self) -> &[OutlinePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points of the control polygon, which encloses the outline.
    pub fn bounds(&self) -> BBox {
        BBox::from_points(self.points.iter().map(OutlinePoint::position))
    }

    /// Scale each axis about the origin.
    pub fn scale_xy(&self, sx: f64, sy: f64) -> Contour {
        self.map(|p| p.scale_xy(sx, sy))
    }

    pub fn translate(&self, offset: Vector) -> Contour {
        self.map(|p| p + offset)
    }

    /// A new contour from the concatenation of index ranges of this one.
    pub(crate) fn splice(&self, ranges: &[std::ops::Range<usize>]) -> Contour {
        Contour::new(
            ranges
                .iter()
                .flat_map(|r| self.points[r.clone()].iter().copied())
                .collect(),
        )
    }

    fn map(&self, f: impl Fn(Point) -> Point) -> Contour {
        Contour::new(self.points.iter().map(|p| p.map(&f)).collect())
    }
}

impl FromIterator<OutlinePoint> for Contour {
    fn from_iter<I: IntoIterator<Item = OutlinePoint>>(iter: I) -> Self {
        Contour::new(iter.into_iter().collect())
    }
}

// ============================================================================
// Path commands
// ============================================================================

/// One drawing command, in absolute coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Control point, end point
    QuadraticBezier(Point, Point),
    /// First control, second control, end point
    CubicBezier(Point, Point, Point),
}

impl PathCommand {
    pub fn end_point(&self) -> Point {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
            PathCommand::QuadraticBezier(_, p) => p,
            PathCommand::CubicBezier(_, _, p) => p,
        }
    }

    /// Every point the command names, control points included.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (buf, n) = match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => ([p, p, p], 1),
            PathCommand::QuadraticBezier(c, p) => ([c, p, p], 2),
            PathCommand::CubicBezier(c1, c2, p) => ([c1, c2, p], 3),
        };
        buf.into_iter().take(n)
    }

    pub fn map(&self, f: impl Fn(Point) -> Point) -> PathCommand {
        match *self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(f(p)),
            PathCommand::LineTo(p) => PathCommand::LineTo(f(p)),
            PathCommand::QuadraticBezier(c, p) => PathCommand::QuadraticBezier(f(c), f(p)),
            PathCommand::CubicBezier(c1, c2, p) => PathCommand::CubicBezier(f(c1), f(c2), f(p)),
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M{p}"),
            PathCommand::LineTo(p) => write!(f, "L{p}"),
            PathCommand::QuadraticBezier(c, p) => write!(f, "Q{c} {p}"),
            PathCommand::CubicBezier(c1, c2, p) => write!(f, "C{c1} {c2} {p}"),
        }
    }
}

/// An ordered command sequence, rendered as SVG path data
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, p: Point) -> Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn line_to(mut self, p: Point) -> Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    pub fn quad_to(mut self, control: Point, p: Point) -> Self {
        self.commands.push(PathCommand::QuadraticBezier(control, p));
        self
    }

    pub fn cubic_to(mut self, c1: Point, c2: Point, p: Point) -> Self {
        self.commands.push(PathCommand::CubicBezier(c1, c2, p));
        self
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    pub fn extend(&mut self, other: PathData) {
        self.commands.extend(other.commands);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Bounds of every named point, control points included.
    pub fn bounds(&self) -> BBox {
        BBox::from_points(self.commands.iter().flat_map(PathCommand::points))
    }

    pub fn map(&self, f: impl Fn(Point) -> Point) -> PathData {
        PathData {
            commands: self.commands.iter().map(|c| c.map(&f)).collect(),
        }
    }

    pub fn translate(&self, offset: Vector) -> PathData {
        self.map(|p| p + offset)
    }

    /// Uniform scale about the origin
    pub fn scale(&self, factor: f64) -> PathData {
        self.map(|p| p * factor)
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{cmd}")?;
        }
        Ok(())
    }
}

impl FromIterator<PathCommand> for PathData {
    fn from_iter<I: IntoIterator<Item = PathCommand>>(iter: I) -> Self {
        PathData {
            commands: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// Conversion
// ============================================================================

/// Convert one closed contour into path commands.
///
/// The walk starts at the first on-curve point. When the ring ends on an
/// off-curve point, the starting point is revisited to close the last curve.
pub fn contour_to_path(contour: &Contour, format: CurveFormat) -> Result<PathData, OutlineError> {
    let mut path = PathData::new();
    append_contour(&mut path, contour, format)?;
    Ok(path)
}

/// Convert every contour of a glyph into a single path, one subpath each.
pub fn contours_to_path(contours: &[Contour], format: CurveFormat) -> Result<PathData, OutlineError> {
    let mut path = PathData::new();
    for contour in contours {
        append_contour(&mut path, contour, format)?;
    }
    Ok(path)
}

fn append_contour(
    path: &mut PathData,
    contour: &Contour,
    format: CurveFormat,
) -> Result<(), OutlineError> {
    let points = contour.points();
    if points.len() < defaults::MIN_CONTOUR_POINTS {
        return Err(OutlineError::MalformedContour {
            len: points.len(),
            min: defaults::MIN_CONTOUR_POINTS,
        });
    }
    let start = points
        .iter()
        .position(|p| p.on_curve)
        .ok_or(OutlineError::NoOnCurvePoint)?;

    // Rotate so the ring starts on-curve, keeping raw indices for errors.
    let mut queue: VecDeque<(usize, OutlinePoint)> = (start..points.len())
        .chain(0..start)
        .map(|i| (i, points[i]))
        .collect();
    let (first_index, first) = queue[0];
    if queue.back().is_some_and(|(_, p)| !p.on_curve) {
        queue.push_back((first_index, first));
    }
    trace!(points = points.len(), start, ?format, "converting contour");

    queue.pop_front();
    path.push(PathCommand::MoveTo(first.position()));

    while let Some((index, head)) = queue.pop_front() {
        if head.on_curve {
            path.push(PathCommand::LineTo(head.position()));
            continue;
        }
        match format {
            CurveFormat::Quadratic => {
                let next = queue.front().map_or(first, |&(_, p)| p);
                if next.on_curve {
                    queue.pop_front();
                    path.push(PathCommand::QuadraticBezier(head.position(), next.position()));
                } else {
                    let implied = head.position().midpoint(next.position());
                    path.push(PathCommand::QuadraticBezier(head.position(), implied));
                }
            }
            CurveFormat::Cubic => match (queue.pop_front(), queue.pop_front()) {
                (Some((_, c2)), Some((_, end))) if !c2.on_curve && end.on_curve => {
                    path.push(PathCommand::CubicBezier(
                        head.position(),
                        c2.position(),
                        end.position(),
                    ));
                }
                _ => return Err(OutlineError::BrokenCubicSegment { index }),
            },
        }
    }
    Ok(())
}
