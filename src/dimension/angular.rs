//! Angular dimensions: the angle between two legs meeting at a pivot.

use crate::defaults;
use crate::errors::{DimensionError, NumericError};
use crate::geometry::Point;
use crate::log::debug;
use crate::scene::{Baseline, Element, MarkerKind, Path};
use crate::style::{LabelFont, LineGroup};

use super::arc::{Arc, arc_sagitta};
use super::label::{TextExtent, format_degrees};
use super::Label;

/// Request for an angular dimension
#[derive(Clone, Debug, PartialEq)]
pub struct AngularDimension {
    pub point1: Point,
    pub point2: Point,
    pub pivot: Point,
    /// Take the arc longer than a half turn
    pub large: bool,
    /// Draw in the direction of increasing angle
    pub sweep: bool,
    /// Arc radius as a fraction of the shorter leg
    pub ratio: f64,
    /// Swap the two legs
    pub flip: bool,
    /// Literal label; an empty string suppresses the label
    pub text: Option<String>,
}

impl AngularDimension {
    pub fn new(point1: Point, point2: Point, pivot: Point) -> Self {
        AngularDimension {
            point1,
            point2,
            pivot,
            large: false,
            sweep: true,
            ratio: 0.5,
            flip: false,
            text: None,
        }
    }

    pub fn large(mut self, large: bool) -> Self {
        self.large = large;
        self
    }

    pub fn sweep(mut self, sweep: bool) -> Self {
        self.sweep = sweep;
        self
    }

    pub fn ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    pub fn flip(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn layout(&self, font: &LabelFont) -> Result<AngularLayout, DimensionError> {
        let ratio = NumericError::check_positive(self.ratio).map_err(|reason| {
            DimensionError::InvalidParameter {
                field: "ratio",
                reason,
            }
        })?;
        let (p1, p2) = if self.flip {
            (self.point2, self.point1)
        } else {
            (self.point1, self.point2)
        };

        let v1 = p1 - self.pivot;
        let v2 = p2 - self.pivot;
        let radius = ratio * v1.length().min(v2.length());
        let start = self.pivot + v1.normalize()? * radius;
        let end = self.pivot + v2.normalize()? * radius;
        let arc = Arc::from_endpoints(start, end, radius, self.large, self.sweep)?;

        let text = match self.text.as_deref() {
            Some("") => None,
            Some(text) => Some(text.to_string()),
            None => Some(format_degrees(v1.angle_from(v2)?)),
        };
        let label = match text {
            Some(text) => {
                let (midpoint, outward) =
                    arc_sagitta(start, end, radius, self.large, self.sweep)?;
                let clearance = TextExtent::measure(&text, font.font_size).half_diagonal()
                    * defaults::ANGLE_LABEL_CLEARANCE;
                Some(Label {
                    text,
                    anchor: midpoint + outward * clearance,
                    rotation: 0.0,
                    baseline: Baseline::Central,
                })
            }
            None => None,
        };

        debug!(radius, pivot = %self.pivot, "angular dimension laid out");
        Ok(AngularLayout { arc, label })
    }
}

/// Resolved geometry of an angular dimension
#[derive(Clone, Debug, PartialEq)]
pub struct AngularLayout {
    pub arc: Arc,
    pub label: Option<Label>,
}

impl AngularLayout {
    /// The arrowed arc followed by its label.
    pub fn to_elements(&self, group: &LineGroup, font: &LabelFont) -> Vec<Element> {
        let mut elements = vec![
            Path {
                data: self.arc.to_path(),
                style: group.outlined(),
                marker_start: Some(MarkerKind::DimensionArrow),
                marker_end: Some(MarkerKind::DimensionArrow),
            }
            .into(),
        ];
        elements.extend(self.label.as_ref().map(|label| label.to_element(font)));
        elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::LineStyleSet;

    const EPSILON: f64 = 1e-9;

    fn font() -> LabelFont {
        LineStyleSet::small().label
    }

    #[test]
    fn right_angle_label() {
        let layout = AngularDimension::new(Point::new(1.0, 0.0), Point::new(0.0, 1.0), Point::ORIGIN)
            .layout(&font())
            .unwrap();
        assert_eq!(layout.label.as_ref().unwrap().text, "90°");
    }

    #[test]
    fn arc_is_centered_on_pivot() {
        let pivot = Point::new(10.0, -4.0);
        let layout = AngularDimension::new(
            pivot + crate::geometry::Vector::new(200.0, 0.0),
            pivot + crate::geometry::Vector::new(0.0, 100.0),
            pivot,
        )
        .ratio(0.5)
        .layout(&font())
        .unwrap();
        assert!((layout.arc.radius - 50.0).abs() < EPSILON);
        assert!(layout.arc.center.distance(pivot) < 1e-6);
        assert!((layout.arc.start().distance(pivot) - 50.0).abs() < 1e-6);
    }

    #[test]
    fn label_sits_outside_the_arc() {
        let layout = AngularDimension::new(Point::new(100.0, 0.0), Point::new(0.0, 100.0), Point::ORIGIN)
            .text("A")
            .layout(&font())
            .unwrap();
        let label = layout.label.unwrap();
        assert_eq!(label.text, "A");
        assert!(label.anchor.distance(Point::ORIGIN) > layout.arc.radius);
        // On the bisector of the two legs.
        assert!((label.anchor.x - label.anchor.y).abs() < 1e-6);
    }

    #[test]
    fn flip_reverses_the_arc() {
        let (a, b) = (Point::new(100.0, 0.0), Point::new(0.0, 100.0));
        let forward = AngularDimension::new(a, b, Point::ORIGIN).layout(&font()).unwrap();
        let flipped = AngularDimension::new(a, b, Point::ORIGIN)
            .flip(true)
            .sweep(false)
            .layout(&font())
            .unwrap();
        assert!(forward.arc.start().distance(flipped.arc.end()) < 1e-6);
        assert!(forward.arc.end().distance(flipped.arc.start()) < 1e-6);
    }

    #[test]
    fn degenerate_leg_fails() {
        let err = AngularDimension::new(Point::ORIGIN, Point::new(0.0, 1.0), Point::ORIGIN)
            .layout(&font())
            .unwrap_err();
        assert!(matches!(err, DimensionError::Geometry(_)));
    }

    #[test]
    fn elements_carry_arrows() {
        let styles = LineStyleSet::small();
        let layout = AngularDimension::new(Point::new(1.0, 0.0), Point::new(0.0, 1.0), Point::ORIGIN)
            .text("")
            .layout(&styles.label)
            .unwrap();
        let elements = layout.to_elements(&styles.dimension, &styles.label);
        assert_eq!(elements.len(), 1);
        let Element::Path(path) = &elements[0] else {
            panic!("arc path expected");
        };
        assert_eq!(path.marker_start, Some(MarkerKind::DimensionArrow));
        assert_eq!(path.marker_end, Some(MarkerKind::DimensionArrow));
    }
}
