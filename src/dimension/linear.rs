//! Linear dimensions: the distance between two points.

use crate::defaults;
use crate::errors::{DimensionError, NumericError};
use crate::geometry::{Point, Segment, Vector};
use crate::log::debug;
use crate::outline::PathData;
use crate::scene::{Baseline, Element, Line, MarkerKind, Text, TextAnchor, TextContent, TextPath};
use crate::style::{LabelFont, LineGroup};

use super::label::{TextExtent, ValueFormat, format_measurement};
use super::{ArrowStyle, Label, LabelMode, Side, normalize_degrees};

/// Request for a linear dimension between two points
#[derive(Clone, Debug, PartialEq)]
pub struct LinearDimension {
    pub point1: Point,
    pub point2: Point,
    pub side: Side,
    /// Distance of the dimension line from the measured line, as a fraction
    /// of the measured length
    pub offset: f64,
    /// Length the measurement is expressed in units of
    pub reference: f64,
    /// Swap the two points, moving the dimension to the other side
    pub flip: bool,
    /// Literal label; an empty string suppresses the label
    pub text: Option<String>,
    pub format: ValueFormat,
    pub label_mode: LabelMode,
    pub arrows: ArrowStyle,
}

impl LinearDimension {
    pub fn new(point1: Point, point2: Point) -> Self {
        LinearDimension {
            point1,
            point2,
            side: Side::Left,
            offset: 1.0,
            reference: 1.0,
            flip: false,
            text: None,
            format: ValueFormat::Fraction,
            label_mode: LabelMode::Along,
            arrows: ArrowStyle::Inner,
        }
    }

    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn reference(mut self, reference: f64) -> Self {
        self.reference = reference;
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

    pub fn format(mut self, format: ValueFormat) -> Self {
        self.format = format;
        self
    }

    pub fn label_mode(mut self, label_mode: LabelMode) -> Self {
        self.label_mode = label_mode;
        self
    }

    pub fn arrows(mut self, arrows: ArrowStyle) -> Self {
        self.arrows = arrows;
        self
    }

    /// Label text, `None` when suppressed.
    fn label_text(&self, length: f64) -> Result<Option<String>, DimensionError> {
        match self.text.as_deref() {
            Some("") => Ok(None),
            Some(text) => Ok(Some(text.to_string())),
            None => format_measurement(length, self.reference, self.format).map(Some),
        }
    }

    /// Compute every point of the dimension.
    pub fn layout(&self, font: &LabelFont) -> Result<LinearLayout, DimensionError> {
        let offset = NumericError::check_finite(self.offset).map_err(|reason| {
            DimensionError::InvalidParameter {
                field: "offset",
                reason,
            }
        })?;
        let (p1, p2) = if self.flip {
            (self.point2, self.point1)
        } else {
            (self.point1, self.point2)
        };

        let measured = p1 - p2;
        let normal = measured.normal()?;
        let length = measured.length();
        let distance = offset * length;
        let at = |p: Point, scale: f64| p + normal * (scale * distance);

        let extension_lines = [
            Segment::new(p1, at(p1, defaults::EXTENSION_SCALE)),
            Segment::new(p2, at(p2, defaults::EXTENSION_SCALE)),
        ];
        let dimension_line = Segment::new(
            at(p1, defaults::DIMENSION_SCALE),
            at(p2, defaults::DIMENSION_SCALE),
        );
        let label_scale = match self.side {
            Side::Left => defaults::LABEL_SCALE_LEFT,
            Side::Right => defaults::LABEL_SCALE_RIGHT,
        };
        let text_path = Segment::new(at(p1, label_scale), at(p2, label_scale));

        let unit = measured.normalize()?;
        let tails = match self.arrows {
            ArrowStyle::Inner => None,
            ArrowStyle::Outer => {
                let tail =
                    unit * defaults::OUTER_TAIL_MIN.max(length * defaults::OUTER_TAIL_FRACTION);
                Some([
                    Segment::new(dimension_line.start, dimension_line.start + tail),
                    Segment::new(dimension_line.end, dimension_line.end - tail),
                ])
            }
        };

        let label = self.label_text(length)?.map(|text| {
            let extent = TextExtent::measure(&text, font.font_size);
            self.place_label(
                text,
                extent,
                measured,
                &extension_lines,
                &dimension_line,
                &text_path,
                tails.as_ref(),
                unit,
            )
        });

        debug!(length, distance, side = ?self.side, "linear dimension laid out");
        Ok(LinearLayout {
            measured,
            normal,
            distance,
            extension_lines,
            dimension_line,
            tails,
            text_path,
            label,
            side: self.side,
            label_mode: self.label_mode,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn place_label(
        &self,
        text: String,
        extent: TextExtent,
        measured: Vector,
        extension_lines: &[Segment; 2],
        dimension_line: &Segment,
        text_path: &Segment,
        tails: Option<&[Segment; 2]>,
        unit: Vector,
    ) -> Label {
        let along = normalize_degrees(
            measured.heading()
                + match self.side {
                    Side::Left => 180.0,
                    Side::Right => 0.0,
                },
        );
        match (self.label_mode, tails) {
            (LabelMode::Along, None) => Label {
                text,
                anchor: text_path.midpoint(),
                rotation: along,
                baseline: Baseline::Central,
            },
            (LabelMode::Along, Some(_)) => Label {
                text,
                anchor: dimension_line.midpoint(),
                rotation: along,
                baseline: Baseline::Central,
            },
            (LabelMode::Outside, None) => Label {
                text,
                anchor: extension_lines[0].end.midpoint(extension_lines[1].end),
                rotation: 0.0,
                baseline: if self.flip {
                    Baseline::Alphabetic
                } else {
                    Baseline::Hanging
                },
            },
            (LabelMode::Outside, Some(tails)) => Label {
                text,
                anchor: tails[0].end + unit * ((extent.width + extent.height) / 2.0),
                rotation: along,
                baseline: Baseline::Central,
            },
        }
    }
}

/// Resolved geometry of a linear dimension
#[derive(Clone, Debug, PartialEq)]
pub struct LinearLayout {
    /// `point1 - point2` after any flip
    pub measured: Vector,
    /// Unit normal the dimension is offset along
    pub normal: Vector,
    /// Offset times measured length
    pub distance: f64,
    /// From each measured point out to the tick end
    pub extension_lines: [Segment; 2],
    /// Between the two arrow tips
    pub dimension_line: Segment,
    /// Outer arrow tails, pointing away from the tips
    pub tails: Option<[Segment; 2]>,
    /// Routing line for labels that follow the dimension
    pub text_path: Segment,
    pub label: Option<Label>,
    pub side: Side,
    pub label_mode: LabelMode,
}

impl LinearLayout {
    /// Scene elements: two extension lines, the arrowed line(s), the label.
    pub fn to_elements(&self, group: &LineGroup, font: &LabelFont) -> Vec<Element> {
        let style = group.solid();
        let mut elements: Vec<Element> = self
            .extension_lines
            .iter()
            .map(|s| Line::new(s.start, s.end, style.clone()).into())
            .collect();

        match &self.tails {
            None => {
                let mut line = Line::new(self.dimension_line.start, self.dimension_line.end, style);
                line.marker_start = Some(MarkerKind::DimensionArrow);
                line.marker_end = Some(MarkerKind::DimensionArrow);
                elements.push(line.into());
            }
            Some(tails) => {
                for tail in tails {
                    let mut line = Line::new(tail.start, tail.end, style.clone());
                    line.marker_start = Some(MarkerKind::DimensionArrow);
                    elements.push(line.into());
                }
            }
        }

        if let Some(label) = &self.label {
            if self.label_mode == LabelMode::Along && self.tails.is_none() {
                let path = PathData::new()
                    .move_to(self.text_path.start)
                    .line_to(self.text_path.end);
                elements.push(
                    Text {
                        position: self.text_path.start,
                        content: TextContent::Path(TextPath {
                            path,
                            text: label.text.clone(),
                            start_offset: 50.0,
                            side: self.side,
                        }),
                        font_size: font.font_size,
                        fill: font.color.clone(),
                        anchor: TextAnchor::Middle,
                        baseline: Some(label.baseline),
                    }
                    .into(),
                );
            } else {
                elements.push(label.to_element(font));
            }
        }
        elements
    }
}
