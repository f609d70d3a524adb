//! Canvas extents: clear space around artwork, view boxes and helper lines

use std::str::FromStr;

use crate::defaults;
use crate::errors::{ConfigError, GeometryError};
use crate::geometry::{BBox, Point, Vector};
use crate::scene::{Element, Line, Rect, ViewBox};
use crate::style::{Color, Presentation};

/// Margin kept free around a piece of artwork
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClearSpace {
    None,
    Minimal,
    #[default]
    Recommended,
}

impl ClearSpace {
    /// Margin for artwork whose reference size is `reference`.
    pub fn margin(self, reference: f64) -> f64 {
        match self {
            ClearSpace::None => 0.0,
            ClearSpace::Minimal => reference / 2.0,
            ClearSpace::Recommended => reference,
        }
    }
}

impl FromStr for ClearSpace {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(ClearSpace::None),
            "minimal" => Ok(ClearSpace::Minimal),
            "recommended" => Ok(ClearSpace::Recommended),
            _ => Err(ConfigError::UnknownVariant {
                kind: "clear space",
                value: s.to_string(),
            }),
        }
    }
}

/// Rectangular drawing area in user units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    bounds: BBox,
}

impl Canvas {
    /// `bounds` grown by `margin` on every side. The result must have area.
    pub fn around(bounds: &BBox, margin: f64) -> Result<Self, GeometryError> {
        if bounds.is_empty() {
            return Err(GeometryError::EmptyBounds);
        }
        let grown = bounds.inflate(margin);
        grown.aspect()?;
        Ok(Canvas { bounds: grown })
    }

    /// Square centered on the origin with the given half side.
    pub fn centered_square(half_side: f64) -> Result<Self, GeometryError> {
        Self::around(&BBox::from_points([Point::ORIGIN]), half_side)
    }

    pub fn bounds(&self) -> BBox {
        self.bounds
    }

    pub fn min_x(&self) -> f64 {
        self.bounds.min.x
    }

    pub fn min_y(&self) -> f64 {
        self.bounds.min.y
    }

    pub fn max_x(&self) -> f64 {
        self.bounds.max.x
    }

    pub fn max_y(&self) -> f64 {
        self.bounds.max.y
    }

    pub fn width(&self) -> f64 {
        self.bounds.width()
    }

    pub fn height(&self) -> f64 {
        self.bounds.height()
    }

    pub fn view_box(&self) -> ViewBox {
        ViewBox {
            min_x: self.min_x(),
            min_y: self.min_y(),
            width: self.width(),
            height: self.height(),
        }
    }

    /// The same canvas moved by `offset`.
    pub fn translate(&self, offset: Vector) -> Canvas {
        Canvas {
            bounds: self.bounds.translate(offset),
        }
    }

    /// Rectangle covering the whole canvas.
    pub fn background(&self, fill: Option<Color>) -> Element {
        let fill = fill.unwrap_or_else(|| Color::from(defaults::BACKGROUND_FILL));
        Rect::from_bbox(&self.bounds, Presentation::filled(fill)).into()
    }

    /// Horizontal and vertical lines through the origin, edge to edge.
    pub fn axis_lines(&self, style: Presentation) -> [Element; 2] {
        [
            Line::new(
                Point::new(self.min_x(), 0.0),
                Point::new(self.max_x(), 0.0),
                style.clone(),
            )
            .into(),
            Line::new(
                Point::new(0.0, self.min_y()),
                Point::new(0.0, self.max_y()),
                style,
            )
            .into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Bounded;
    use crate::style::Paint;

    #[test]
    fn clear_space_margins() {
        assert_eq!(ClearSpace::None.margin(100.0), 0.0);
        assert_eq!(ClearSpace::Minimal.margin(100.0), 50.0);
        assert_eq!(ClearSpace::Recommended.margin(100.0), 100.0);
        assert_eq!("Minimal".parse::<ClearSpace>(), Ok(ClearSpace::Minimal));
        assert!("generous".parse::<ClearSpace>().is_err());
    }

    #[test]
    fn canvas_grows_bounds() {
        let b = BBox::from_corners(Point::new(0.0, -10.0), Point::new(40.0, 0.0));
        let canvas = Canvas::around(&b, 5.0).unwrap();
        let vb = canvas.view_box();
        assert_eq!((vb.min_x, vb.min_y, vb.width, vb.height), (-5.0, -15.0, 50.0, 20.0));
    }

    #[test]
    fn canvas_rejects_zero_area() {
        let flat = BBox::from_points([Point::ORIGIN, Point::new(10.0, 0.0)]);
        assert_eq!(
            Canvas::around(&flat, 0.0),
            Err(GeometryError::DegenerateBounds { axis: "height" })
        );
        assert!(Canvas::around(&flat, 1.0).is_ok());
        assert_eq!(Canvas::around(&BBox::new(), 1.0), Err(GeometryError::EmptyBounds));
    }

    #[test]
    fn background_and_axes_span_canvas() {
        let canvas = Canvas::centered_square(1024.0).unwrap();
        let background = canvas.background(None);
        assert_eq!(background.bounds(), Some(canvas.bounds()));
        let Element::Rect(rect) = background else {
            panic!("background is a rect");
        };
        assert_eq!(rect.style.fill, Paint::Color(Color::Raw("#8888ee".into())));
        let [h, v] = canvas.axis_lines(Presentation::default());
        assert_eq!(h.bounds().unwrap().width(), 2048.0);
        assert_eq!(v.bounds().unwrap().height(), 2048.0);
    }
}
