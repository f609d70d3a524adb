//! Renderer-agnostic scene tree.
//!
//! The geometry modules emit these elements; turning them into SVG markup
//! is left to whoever consumes the tree. Cross references are explicit:
//! lines name the marker kind they use, a text path owns the path it follows
//! and a gradient paint owns its gradient. No element carries a generated id.

use enum_dispatch::enum_dispatch;

use crate::defaults;
use crate::dimension::Side;
use crate::geometry::{BBox, Point, Vector};
use crate::outline::PathData;
use crate::style::{Color, LinearGradient, Presentation};

/// Anything that occupies space in the scene
#[enum_dispatch]
pub trait Bounded {
    /// Axis-aligned extent in user space, `None` for invisible elements.
    fn bounds(&self) -> Option<BBox>;
}

/// One node of the scene tree
#[enum_dispatch(Bounded)]
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Path(Path),
    Line(Line),
    Polygon(Polygon),
    Polyline(Polyline),
    Circle(Circle),
    Rect(Rect),
    Text(Text),
    Group(Group),
    Defs(Defs),
}

/// Arrow heads and other end decorations a line can reference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    DimensionArrow,
}

impl MarkerKind {
    /// Stable name for serializers that need an id.
    pub fn name(self) -> &'static str {
        match self {
            MarkerKind::DimensionArrow => "dimension-arrow-head",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerOrient {
    Auto,
    AutoStartReverse,
}

/// A marker definition
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub width: f64,
    pub height: f64,
    pub ref_point: Point,
    pub orient: MarkerOrient,
    pub path: PathData,
    pub fill: Color,
}

impl Marker {
    /// Filled triangular arrow head pointing along +x, tip at the reference point.
    pub fn dimension_arrow(fill: Color) -> Self {
        let path = PathData::new()
            .move_to(Point::ORIGIN)
            .line_to(Point::new(0.0, defaults::ARROW_WIDTH))
            .line_to(Point::new(defaults::ARROW_LENGTH, defaults::ARROW_WIDTH / 2.0));
        Marker {
            kind: MarkerKind::DimensionArrow,
            width: defaults::ARROW_MARKER_WIDTH,
            height: defaults::ARROW_MARKER_HEIGHT,
            ref_point: Point::new(defaults::ARROW_REF_X, defaults::ARROW_REF_Y),
            orient: MarkerOrient::AutoStartReverse,
            path,
            fill,
        }
    }
}

// ============================================================================
// Transforms
// ============================================================================

/// One entry of a group's transform list
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    Translate(Vector),
    /// Degrees, about a center point
    Rotate { degrees: f64, center: Point },
    Scale(f64, f64),
}

impl Transform {
    pub fn rotate(degrees: f64) -> Self {
        Transform::Rotate {
            degrees,
            center: Point::ORIGIN,
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        match *self {
            Transform::Translate(v) => p + v,
            Transform::Rotate { degrees, center } => p.rotate_about(degrees, center),
            Transform::Scale(sx, sy) => p.scale_xy(sx, sy),
        }
    }
}

/// Apply a transform list the way SVG does: the last entry acts first.
pub fn apply_transforms(transforms: &[Transform], p: Point) -> Point {
    transforms.iter().rev().fold(p, |acc, t| t.apply(acc))
}

// ============================================================================
// Shapes
// ============================================================================

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Path {
    pub data: PathData,
    pub style: Presentation,
    pub marker_start: Option<MarkerKind>,
    pub marker_end: Option<MarkerKind>,
}

impl Bounded for Path {
    fn bounds(&self) -> Option<BBox> {
        non_empty(self.data.bounds())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub style: Presentation,
    pub marker_start: Option<MarkerKind>,
    pub marker_end: Option<MarkerKind>,
}

impl Line {
    pub fn new(start: Point, end: Point, style: Presentation) -> Self {
        Line {
            start,
            end,
            style,
            marker_start: None,
            marker_end: None,
        }
    }
}

impl Bounded for Line {
    fn bounds(&self) -> Option<BBox> {
        Some(BBox::from_points([self.start, self.end]))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
    pub style: Presentation,
}

impl Bounded for Polygon {
    fn bounds(&self) -> Option<BBox> {
        non_empty(BBox::from_points(self.points.iter().copied()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub style: Presentation,
}

impl Bounded for Polyline {
    fn bounds(&self) -> Option<BBox> {
        non_empty(BBox::from_points(self.points.iter().copied()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub style: Presentation,
}

impl Bounded for Circle {
    fn bounds(&self) -> Option<BBox> {
        Some(BBox::from_points([self.center]).inflate(self.radius))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub style: Presentation,
}

impl Rect {
    pub fn from_bbox(bbox: &BBox, style: Presentation) -> Self {
        Rect {
            origin: bbox.min,
            width: bbox.width(),
            height: bbox.height(),
            style,
        }
    }
}

impl Bounded for Rect {
    fn bounds(&self) -> Option<BBox> {
        Some(BBox::from_corners(
            self.origin,
            self.origin + Vector::new(self.width, self.height),
        ))
    }
}

// ============================================================================
// Text
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Baseline {
    Alphabetic,
    Hanging,
    Central,
}

/// Text laid out along a path it owns
#[derive(Clone, Debug, PartialEq)]
pub struct TextPath {
    pub path: PathData,
    pub text: String,
    /// Percent along the path
    pub start_offset: f64,
    pub side: Side,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TextContent {
    /// Plain text at the element's position
    Plain(String),
    /// Text routed along a path
    Path(TextPath),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub position: Point,
    pub content: TextContent,
    pub font_size: f64,
    pub fill: Color,
    pub anchor: TextAnchor,
    pub baseline: Option<Baseline>,
}

impl Bounded for Text {
    fn bounds(&self) -> Option<BBox> {
        match &self.content {
            TextContent::Plain(_) => Some(BBox::from_points([self.position])),
            TextContent::Path(tp) => non_empty(tp.path.bounds()),
        }
    }
}

// ============================================================================
// Containers
// ============================================================================

/// Children sharing a transform list
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Group {
    pub transforms: Vec<Transform>,
    pub children: Vec<Element>,
}

impl Group {
    pub fn new(children: Vec<Element>) -> Self {
        Group {
            transforms: Vec::new(),
            children,
        }
    }

    pub fn with_transforms(mut self, transforms: Vec<Transform>) -> Self {
        self.transforms = transforms;
        self
    }
}

impl Bounded for Group {
    fn bounds(&self) -> Option<BBox> {
        let mut bbox = BBox::new();
        for child in self.children.iter().filter_map(Bounded::bounds) {
            for corner in child.corners() {
                bbox.expand_point(apply_transforms(&self.transforms, corner));
            }
        }
        non_empty(bbox)
    }
}

/// Shared definitions. Markers are referenced by kind; a gradient listed
/// here is a copy of the one owned by the paint that uses it.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Defs {
    pub markers: Vec<Marker>,
    pub gradients: Vec<LinearGradient>,
}

impl Bounded for Defs {
    fn bounds(&self) -> Option<BBox> {
        None
    }
}

fn non_empty(bbox: BBox) -> Option<BBox> {
    (!bbox.is_empty()).then_some(bbox)
}

// ============================================================================
// Document
// ============================================================================

/// The visible region of a scene
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

/// A complete drawing: view box plus top-level elements
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub view_box: ViewBox,
    pub elements: Vec<Element>,
}

impl Scene {
    pub fn new(view_box: ViewBox) -> Self {
        Scene {
            view_box,
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    pub fn extend(&mut self, elements: impl IntoIterator<Item = Element>) {
        self.elements.extend(elements);
    }

    /// Extent of every visible element.
    pub fn content_bounds(&self) -> Option<BBox> {
        self.elements
            .iter()
            .filter_map(Bounded::bounds)
            .reduce(|a, b| a.union(&b))
    }

    /// Marker kinds referenced anywhere in the tree.
    pub fn referenced_markers(&self) -> Vec<MarkerKind> {
        let mut kinds = Vec::new();
        collect_markers(&self.elements, &mut kinds);
        kinds
    }

    /// Marker kinds defined by `Defs` anywhere in the tree.
    pub fn defined_markers(&self) -> Vec<MarkerKind> {
        let mut kinds = Vec::new();
        collect_defined(&self.elements, &mut kinds);
        kinds
    }
}

fn collect_markers(elements: &[Element], out: &mut Vec<MarkerKind>) {
    for element in elements {
        let ends = match element {
            Element::Line(l) => [l.marker_start, l.marker_end],
            Element::Path(p) => [p.marker_start, p.marker_end],
            Element::Group(g) => {
                collect_markers(&g.children, out);
                continue;
            }
            _ => continue,
        };
        for kind in ends.into_iter().flatten() {
            if !out.contains(&kind) {
                out.push(kind);
            }
        }
    }
}

fn collect_defined(elements: &[Element], out: &mut Vec<MarkerKind>) {
    for element in elements {
        match element {
            Element::Defs(d) => out.extend(d.markers.iter().map(|m| m.kind)),
            Element::Group(g) => collect_defined(&g.children, out),
            _ => {}
        }
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
    fn transforms_apply_last_first() {
        let list = [
            Transform::Translate(Vector::new(10.0, 0.0)),
            Transform::rotate(90.0),
        ];
        assert_point_eq(apply_transforms(&list, Point::new(1.0, 0.0)), Point::new(10.0, 1.0));
    }

    #[test]
    fn group_bounds_follow_transforms() {
        let line = Line::new(Point::ORIGIN, Point::new(2.0, 0.0), Presentation::default());
        let group = Group::new(vec![line.into()])
            .with_transforms(vec![Transform::Translate(Vector::new(0.0, 5.0))]);
        let bounds = group.bounds().unwrap();
        assert_eq!(bounds.min, Point::new(0.0, 5.0));
        assert_eq!(bounds.max, Point::new(2.0, 5.0));
    }

    #[test]
    fn defs_are_invisible() {
        let defs = Defs {
            markers: vec![Marker::dimension_arrow(Color::named("red"))],
            ..Default::default()
        };
        assert_eq!(Element::from(defs).bounds(), None);
    }

    #[test]
    fn arrow_marker_shape() {
        let marker = Marker::dimension_arrow(Color::named("red"));
        assert_eq!(marker.path.to_string(), "M0 0 L0 10 L20 5");
        assert_eq!(marker.ref_point, Point::new(20.0, 5.0));
        assert_eq!(marker.orient, MarkerOrient::AutoStartReverse);
        assert_eq!(marker.kind.name(), "dimension-arrow-head");
    }

    #[test]
    fn scene_tracks_marker_references() {
        let mut scene = Scene::new(ViewBox {
            min_x: 0.0,
            min_y: 0.0,
            width: 10.0,
            height: 10.0,
        });
        let mut line = Line::new(Point::ORIGIN, Point::new(5.0, 5.0), Presentation::default());
        line.marker_end = Some(MarkerKind::DimensionArrow);
        scene.push(Group::new(vec![line.into()]));
        assert_eq!(scene.referenced_markers(), vec![MarkerKind::DimensionArrow]);
        assert!(scene.defined_markers().is_empty());
        let bounds = scene.content_bounds().unwrap();
        assert_eq!(bounds.max, Point::new(5.0, 5.0));
    }
}
