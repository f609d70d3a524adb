//! Dimension annotations for technical drawings
//!
//! This module is organized into submodules:
//! - `linear`: distance between two points, with extension ticks and arrows
//! - `angular`: angle at a pivot, drawn as an arc between the two legs
//! - `arc`: circular arc math and its cubic Bézier approximation
//! - `label`: value formatting and label extents
//!
//! Each dimension first computes a plain-data layout, then turns the layout
//! into scene elements styled by a [`LineGroup`].

pub mod angular;
pub mod arc;
pub mod label;
pub mod linear;

use std::str::FromStr;

pub use angular::{AngularDimension, AngularLayout};
pub use arc::{Arc, arc_sagitta};
pub use label::{TextExtent, ValueFormat, format_measurement};
pub use linear::{LinearDimension, LinearLayout};

use crate::errors::ConfigError;
use crate::geometry::Point;
use crate::scene::{
    Baseline, Defs, Element, Group, Marker, Text, TextAnchor, TextContent, Transform,
};
use crate::style::{LabelFont, LineGroup};

/// Which side of the measured line a label reads from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl FromStr for Side {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            _ => Err(ConfigError::UnknownVariant {
                kind: "side",
                value: s.to_string(),
            }),
        }
    }
}

/// Where the arrow heads of a linear dimension sit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ArrowStyle {
    /// One dimension line between the extension ticks, arrows at both ends.
    #[default]
    Inner,
    /// Two short tails outside the ticks pointing inward.
    Outer,
}

/// How a linear dimension's label is placed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LabelMode {
    /// Routed along the dimension line, turned with it.
    #[default]
    Along,
    /// Beyond the extension ticks, or past the outer tails when there are any.
    Outside,
}

/// A placed label: text, where its center goes, and how it is turned
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub anchor: Point,
    /// Degrees
    pub rotation: f64,
    pub baseline: Baseline,
}

impl Label {
    /// Upright text element, rotated about its anchor when needed.
    pub fn to_element(&self, font: &LabelFont) -> Element {
        let text = Text {
            position: self.anchor,
            content: TextContent::Plain(self.text.clone()),
            font_size: font.font_size,
            fill: font.color.clone(),
            anchor: TextAnchor::Middle,
            baseline: Some(self.baseline),
        };
        if self.rotation == 0.0 {
            text.into()
        } else {
            Group::new(vec![text.into()])
                .with_transforms(vec![Transform::Rotate {
                    degrees: self.rotation,
                    center: self.anchor,
                }])
                .into()
        }
    }
}

/// Marker definitions every dimension relies on.
pub fn arrow_defs(group: &LineGroup) -> Defs {
    Defs {
        markers: vec![Marker::dimension_arrow(group.stroke.clone())],
        ..Default::default()
    }
}

/// Normalize degrees into `(-180, 180]`.
pub(crate) fn normalize_degrees(degrees: f64) -> f64 {
    let d = degrees.rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::MarkerKind;
    use crate::style::LineStyleSet;

    #[test]
    fn side_names() {
        assert_eq!("left".parse::<Side>(), Ok(Side::Left));
        assert_eq!("right".parse::<Side>(), Ok(Side::Right));
        assert!("up".parse::<Side>().is_err());
    }

    #[test]
    fn arrow_defs_match_stroke() {
        let styles = LineStyleSet::small();
        let defs = arrow_defs(&styles.dimension);
        assert_eq!(defs.markers.len(), 1);
        assert_eq!(defs.markers[0].kind, MarkerKind::DimensionArrow);
        assert_eq!(defs.markers[0].fill, styles.dimension.stroke);
    }

    #[test]
    fn degrees_wrap() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(270.0), -90.0);
        assert_eq!(normalize_degrees(-180.0), 180.0);
        assert_eq!(normalize_degrees(180.0), 180.0);
    }

    #[test]
    fn rotated_label_is_wrapped_in_a_group() {
        let font = LineStyleSet::small().label;
        let anchor = Point::new(10.0, 20.0);
        let label = Label {
            text: "1/2".to_string(),
            anchor,
            rotation: 90.0,
            baseline: Baseline::Central,
        };
        let Element::Group(group) = label.to_element(&font) else {
            panic!("rotated label should be a group");
        };
        assert_eq!(
            group.transforms,
            [Transform::Rotate {
                degrees: 90.0,
                center: anchor
            }]
        );
        assert!(matches!(group.children[0], Element::Text(_)));

        let upright = Label {
            rotation: 0.0,
            ..label
        };
        assert!(matches!(upright.to_element(&font), Element::Text(_)));
    }
}
