//! Colors, paints and line-group styling for diagrams

use std::fmt;
use std::str::FromStr;

use crate::defaults;
use crate::errors::{ConfigError, NumericError};
use crate::geometry::Point;

/// Simple color model; anything not RGB is kept as the string it was given.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Raw(String),
}

impl Color {
    pub fn named(name: impl Into<String>) -> Self {
        Color::Named(name.into())
    }

    pub fn black() -> Self {
        Color::named("black")
    }

    pub fn transparent() -> Self {
        Color::named(defaults::LINE_FILL)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(s) | Color::Raw(s) => write!(f, "{}", s),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
        }
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        if s.starts_with('#') || s.contains('(') {
            Color::Raw(s.to_string())
        } else {
            Color::Named(s.to_string())
        }
    }
}

/// One color stop of a gradient
#[derive(Clone, Debug, PartialEq)]
pub struct GradientStop {
    /// Percent along the gradient axis
    pub offset: f64,
    pub color: Color,
}

/// Linear gradient between two points in user space
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<GradientStop>,
}

/// What fills a shape. Gradients are owned by the paint that uses them.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Paint {
    #[default]
    None,
    Color(Color),
    Gradient(LinearGradient),
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Color(c)
    }
}

/// Stroke and fill attributes shared by every scene shape
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Presentation {
    pub fill: Paint,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
    pub stroke_dasharray: Option<f64>,
}

impl Presentation {
    pub fn filled(paint: impl Into<Paint>) -> Self {
        Presentation {
            fill: paint.into(),
            ..Default::default()
        }
    }
}

// ============================================================================
// Line groups
// ============================================================================

/// Named styling for one class of lines (object, construction, dimension)
#[derive(Clone, Debug, PartialEq)]
pub struct LineGroup {
    pub name: String,
    pub stroke: Color,
    pub stroke_width: f64,
    pub stroke_dasharray: f64,
    pub fill: Color,
}

impl LineGroup {
    /// Validated line group with the default dash pattern and transparent fill.
    pub fn try_new(
        name: impl Into<String>,
        stroke: Color,
        stroke_width: f64,
    ) -> Result<Self, ConfigError> {
        let stroke_width = NumericError::check_positive(stroke_width).map_err(|reason| {
            ConfigError::InvalidValue {
                field: "stroke width",
                reason,
            }
        })?;
        Ok(LineGroup {
            name: name.into(),
            stroke,
            stroke_width,
            stroke_dasharray: defaults::STROKE_DASHARRAY,
            fill: Color::transparent(),
        })
    }

    pub fn with_dasharray(mut self, dasharray: f64) -> Result<Self, ConfigError> {
        self.stroke_dasharray = NumericError::check_non_negative(dasharray).map_err(|reason| {
            ConfigError::InvalidValue {
                field: "stroke dasharray",
                reason,
            }
        })?;
        Ok(self)
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Solid stroke, no fill.
    pub fn solid(&self) -> Presentation {
        Presentation {
            fill: Paint::None,
            stroke: Some(self.stroke.clone()),
            stroke_width: Some(self.stroke_width),
            stroke_dasharray: None,
        }
    }

    /// Solid stroke over the group's fill.
    pub fn outlined(&self) -> Presentation {
        Presentation {
            fill: Paint::Color(self.fill.clone()),
            ..self.solid()
        }
    }

    /// Dashed stroke over the group's fill.
    pub fn dashed(&self) -> Presentation {
        Presentation {
            stroke_dasharray: Some(self.stroke_dasharray),
            ..self.outlined()
        }
    }
}

/// Font settings for dimension labels
#[derive(Clone, Debug, PartialEq)]
pub struct LabelFont {
    pub font_size: f64,
    pub color: Color,
}

/// The three line groups of a dimensioned diagram plus its label font
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyleSet {
    pub object: LineGroup,
    pub construction: LineGroup,
    pub dimension: LineGroup,
    pub label: LabelFont,
}

impl LineStyleSet {
    fn preset(object_width: f64, dasharray: f64, font_size: f64) -> Self {
        let group = |name: &str, stroke: &str, width: f64| LineGroup {
            name: name.to_string(),
            stroke: Color::named(stroke),
            stroke_width: width,
            stroke_dasharray: dasharray,
            fill: Color::transparent(),
        };
        LineStyleSet {
            object: group("object", "green", object_width),
            construction: group("construction", "blue", object_width / 2.0),
            dimension: group("dimension", "red", object_width / 4.0),
            label: LabelFont {
                font_size,
                color: Color::black(),
            },
        }
    }

    pub fn small() -> Self {
        Self::preset(4.0, 4.0, 24.0)
    }

    pub fn medium() -> Self {
        Self::preset(8.0, 8.0, 48.0)
    }

    pub fn large() -> Self {
        Self::preset(16.0, 16.0, 96.0)
    }
}

impl Default for LineStyleSet {
    fn default() -> Self {
        Self::small()
    }
}

impl FromStr for LineStyleSet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::small()),
            "medium" => Ok(Self::medium()),
            "large" => Ok(Self::large()),
            _ => Err(ConfigError::UnknownVariant {
                kind: "line style preset",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_scale_together() {
        let small = LineStyleSet::small();
        let large = LineStyleSet::large();
        assert_eq!(small.object.stroke_width, 4.0);
        assert_eq!(small.construction.stroke_width, 2.0);
        assert_eq!(small.dimension.stroke_width, 1.0);
        assert_eq!(large.dimension.stroke_width, 4.0);
        assert_eq!(large.dimension.stroke_dasharray, 16.0);
        assert_eq!(LineStyleSet::medium().label.font_size, 48.0);
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let err = "huge".parse::<LineStyleSet>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownVariant {
                kind: "line style preset",
                value: "huge".into()
            }
        );
    }

    #[test]
    fn line_group_validates_width() {
        assert!(LineGroup::try_new("object", Color::black(), 0.0).is_err());
        assert!(LineGroup::try_new("object", Color::black(), f64::NAN).is_err());
        let group = LineGroup::try_new("object", Color::black(), 2.0).unwrap();
        assert_eq!(group.stroke_dasharray, 4.0);
        assert!(group.with_dasharray(-1.0).is_err());
    }

    #[test]
    fn dashed_keeps_fill_and_stroke() {
        let p = LineStyleSet::small().construction.dashed();
        assert_eq!(p.stroke, Some(Color::named("blue")));
        assert_eq!(p.stroke_dasharray, Some(4.0));
        assert_eq!(p.fill, Paint::Color(Color::transparent()));
    }

    #[test]
    fn color_from_str() {
        assert_eq!(Color::from("#8888ee"), Color::Raw("#8888ee".into()));
        assert_eq!(Color::from("red"), Color::named("red"));
        assert_eq!(Color::Rgb(1, 2, 3).to_string(), "rgb(1,2,3)");
    }
}
