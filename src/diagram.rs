//! Dimensioned technical drawings of the logomark and logotype.
//!
//! Each builder holds the figure it annotates, a [`LineStyleSet`] and the
//! [`Canvas`] it draws on. The dimension requests are plain data, so they can
//! be inspected without building a scene.

use crate::canvas::{Canvas, ClearSpace};
use crate::compose::{GlyphFills, Logotype};
use crate::defaults;
use crate::dimension::{
    AngularDimension, LabelMode, LinearDimension, Side, ValueFormat, arrow_defs,
};
use crate::errors::{DimensionError, Error};
use crate::geometry::Point;
use crate::log::debug;
use crate::scene::{Circle, Element, Polygon, Polyline, Rect, Scene};
use crate::shapes::{Lambda, LambdaPoints, Snowflake, hexagon_points};
use crate::style::{Color, LineGroup, LineStyleSet, Presentation};

/// Circle, hexagon and optionally the long diagonal, all of radius `radius`.
fn construction_lines(radius: f64, group: &LineGroup, diagonal: bool) -> Vec<Element> {
    let style = group.dashed();
    let hexagon = hexagon_points(radius);
    let mut elements = vec![
        Circle {
            center: Point::ORIGIN,
            radius,
            style: style.clone(),
        }
        .into(),
        Polygon {
            points: hexagon.to_vec(),
            style: style.clone(),
        }
        .into(),
    ];
    if diagonal {
        elements.push(
            Polyline {
                points: vec![hexagon[1], hexagon[4]],
                style,
            }
            .into(),
        );
    }
    elements
}

fn axis_style() -> Presentation {
    Presentation {
        stroke: Some(Color::black()),
        ..Default::default()
    }
}

/// Scene shell shared by every diagram: view box, axes and the arrow marker.
fn diagram_scene(canvas: &Canvas, styles: &LineStyleSet, axes: bool) -> Scene {
    let mut scene = Scene::new(canvas.view_box());
    if axes {
        scene.extend(canvas.axis_lines(axis_style()));
    }
    scene.push(arrow_defs(&styles.dimension));
    scene
}

fn push_linear(
    scene: &mut Scene,
    dimensions: &[LinearDimension],
    styles: &LineStyleSet,
) -> Result<(), DimensionError> {
    for dimension in dimensions {
        let layout = dimension.layout(&styles.label)?;
        scene.extend(layout.to_elements(&styles.dimension, &styles.label));
    }
    Ok(())
}

/// Options for one edge dimension: side, flip and offset.
const LAMBDA_EDGE_OPTIONS: [(Side, bool, f64); 9] = [
    (Side::Right, true, 1.0 / 4.0),
    (Side::Right, true, 15.0 / 32.0),
    (Side::Left, true, 1.0 / 4.0),
    (Side::Right, false, 1.0 / 4.0),
    (Side::Right, false, 1.0 / 4.0),
    (Side::Left, true, 1.0 / 2.0),
    (Side::Left, true, 1.0 / 2.0),
    (Side::Left, false, 1.0 / 8.0),
    (Side::Left, true, 1.0 / 4.0),
];

/// Options for one corner angle: flip, ratio and label.
const LAMBDA_ANGLE_OPTIONS: [(bool, f64, &str); 9] = [
    (true, 1.0 / 2.0, "A"),
    (true, 1.0 / 2.0, "A"),
    (true, 3.0 / 8.0, "B"),
    (false, 1.0 / 2.0, "A"),
    (true, 1.0 / 2.0, "B"),
    (true, 1.0 / 2.0, "B"),
    (true, 1.0 / 2.0, "B"),
    (false, 1.0 / 2.0, "B"),
    (true, 3.0 / 8.0, "B"),
];

// ============================================================================
// Lambda
// ============================================================================

/// A lambda with its construction geometry and dimensions
#[derive(Clone, Debug, PartialEq)]
pub struct DimensionedLambda {
    lambda: Lambda,
    styles: LineStyleSet,
    canvas: Canvas,
}

impl DimensionedLambda {
    pub fn new(lambda: Lambda, styles: LineStyleSet, canvas: Canvas) -> Self {
        DimensionedLambda {
            lambda,
            styles,
            canvas,
        }
    }

    /// Canvas around the lambda with the given clear space.
    pub fn with_clear_space(
        lambda: Lambda,
        styles: LineStyleSet,
        clear_space: ClearSpace,
    ) -> Result<Self, Error> {
        let canvas = Canvas::around(&lambda.bounds(), lambda.clear_space(clear_space))?;
        Ok(Self::new(lambda, styles, canvas))
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn construction_elements(&self) -> Vec<Element> {
        construction_lines(self.lambda.params().radius(), &self.styles.construction, true)
    }

    /// The ungapped outline dashed under the gapped one.
    pub fn object_elements(&self) -> Vec<Element> {
        let object = &self.styles.object;
        let ungapped = Presentation {
            stroke_dasharray: Some(defaults::STROKE_DASHARRAY),
            ..object.outlined()
        };
        vec![
            Polygon {
                points: self.lambda.ungapped_points().as_slice().to_vec(),
                style: ungapped,
            }
            .into(),
            self.lambda.polygon(object.outlined()).into(),
        ]
    }

    /// Main diagonal, the gap, and every edge of the ungapped lambda.
    pub fn linear_dimensions(&self) -> Vec<LinearDimension> {
        let reference = 2.0 * self.lambda.params().radius();
        let hexagon = self.lambda.hexagon();
        let gapped = self.lambda.points();
        let ungapped = self.lambda.ungapped_points();
        let dim = |p1: Point, p2: Point, side: Side, flip: bool, offset: f64| {
            LinearDimension::new(p1, p2)
                .side(side)
                .flip(flip)
                .offset(offset)
                .reference(reference)
        };

        let mut dimensions = vec![
            dim(hexagon[1], hexagon[4], Side::Right, false, 1.0 / 2.0),
            dim(
                gapped[2].midpoint(gapped[3]),
                gapped[0].midpoint(gapped[1]),
                Side::Right,
                false,
                15.0 / 32.0,
            ),
            dim(gapped[1], gapped[2], Side::Right, true, 7.0 / 16.0),
            dim(gapped[8], gapped[0], Side::Right, false, 1.0 / 8.0),
        ];
        dimensions.extend(
            LAMBDA_EDGE_OPTIONS
                .iter()
                .enumerate()
                .map(|(i, &(side, flip, offset))| {
                    dim(ungapped[i], ungapped[(i + 1) % 9], side, flip, offset)
                }),
        );
        dimensions
    }

    /// The angle at every vertex, labelled by kind.
    pub fn angular_dimensions(&self) -> Vec<AngularDimension> {
        let points = self.lambda.points();
        LAMBDA_ANGLE_OPTIONS
            .iter()
            .enumerate()
            .map(|(i, &(flip, ratio, text))| {
                AngularDimension::new(points[i], points[(i + 2) % 9], points[(i + 1) % 9])
                    .flip(flip)
                    .ratio(ratio)
                    .text(text)
            })
            .collect()
    }

    fn base_scene(&self) -> Scene {
        let mut scene = diagram_scene(&self.canvas, &self.styles, true);
        scene.extend(self.construction_elements());
        scene.extend(self.object_elements());
        scene
    }

    pub fn linear_scene(&self) -> Result<Scene, Error> {
        let mut scene = self.base_scene();
        push_linear(&mut scene, &self.linear_dimensions(), &self.styles)?;
        debug!(elements = scene.elements.len(), "lambda linear diagram built");
        Ok(scene)
    }

    pub fn angular_scene(&self) -> Result<Scene, Error> {
        let mut scene = self.base_scene();
        for dimension in self.angular_dimensions() {
            let layout = dimension.layout(&self.styles.label)?;
            scene.extend(layout.to_elements(&self.styles.dimension, &self.styles.label));
        }
        debug!(elements = scene.elements.len(), "lambda angular diagram built");
        Ok(scene)
    }
}

// ============================================================================
// Snowflake
// ============================================================================

/// A snowflake with the lambda it is built from and its overall size
#[derive(Clone, Debug, PartialEq)]
pub struct DimensionedSnowflake {
    snowflake: Snowflake,
    styles: LineStyleSet,
    canvas: Canvas,
}

impl DimensionedSnowflake {
    pub fn new(snowflake: Snowflake, styles: LineStyleSet, canvas: Canvas) -> Self {
        DimensionedSnowflake {
            snowflake,
            styles,
            canvas,
        }
    }

    pub fn with_clear_space(
        snowflake: Snowflake,
        styles: LineStyleSet,
        clear_space: ClearSpace,
    ) -> Result<Self, Error> {
        let canvas = Canvas::around(&snowflake.bounds(), snowflake.clear_space(clear_space))?;
        Ok(Self::new(snowflake, styles, canvas))
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Lambda hexagon plus the enclosing flake hexagon with its diagonal.
    pub fn construction_elements(&self) -> Vec<Element> {
        let radius = self.snowflake.lambda().params().radius();
        let mut elements = construction_lines(radius, &self.styles.construction, false);
        elements.extend(construction_lines(
            radius * defaults::FLAKE_CONSTRUCTION_SCALE,
            &self.styles.construction,
            true,
        ));
        elements
    }

    pub fn object_elements(&self) -> Vec<Element> {
        let style = self.styles.object.outlined();
        self.snowflake
            .arms()
            .iter()
            .map(|arm: &LambdaPoints| {
                Polygon {
                    points: arm.as_slice().to_vec(),
                    style: style.clone(),
                }
                .into()
            })
            .collect()
    }

    /// Long diagonal of the lambda hexagon and the span of the flake.
    pub fn linear_dimensions(&self) -> Vec<LinearDimension> {
        let radius = self.snowflake.lambda().params().radius();
        let hexagon = self.snowflake.lambda().hexagon();
        let arms = self.snowflake.arms();
        vec![
            LinearDimension::new(hexagon[1], hexagon[4])
                .side(Side::Right)
                .offset(1.0 / 8.0)
                .reference(2.0 * radius),
            LinearDimension::new(arms[2][6], arms[5][6])
                .side(Side::Right)
                .flip(true)
                .offset(1.0 / 2.0)
                .reference(2.0 * radius),
        ]
    }

    pub fn linear_scene(&self) -> Result<Scene, Error> {
        let mut scene = Scene::new(self.canvas.view_box());
        scene.extend(self.object_elements());
        scene.extend(diagram_scene(&self.canvas, &self.styles, true).elements);
        scene.extend(self.construction_elements());
        push_linear(&mut scene, &self.linear_dimensions(), &self.styles)?;
        debug!(elements = scene.elements.len(), "snowflake linear diagram built");
        Ok(scene)
    }
}

// ============================================================================
// Logotype
// ============================================================================

/// A composed logotype with its box, cap-height and glyph spacing dimensions
#[derive(Clone, Debug, PartialEq)]
pub struct DimensionedLogotype {
    logotype: Logotype,
    styles: LineStyleSet,
    canvas: Canvas,
}

impl DimensionedLogotype {
    pub fn new(logotype: Logotype, styles: LineStyleSet, canvas: Canvas) -> Self {
        DimensionedLogotype {
            logotype,
            styles,
            canvas,
        }
    }

    /// Canvas with half a cap-height of room on every side.
    pub fn with_default_canvas(logotype: Logotype, styles: LineStyleSet) -> Result<Self, Error> {
        let canvas = Canvas::around(&logotype.bounds(), logotype.cap_height() / 2.0)?;
        Ok(Self::new(logotype, styles, canvas))
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn bounding_box(&self) -> Element {
        Rect::from_bbox(&self.logotype.bounds(), self.styles.construction.dashed()).into()
    }

    /// Overall width and height, in cap-heights.
    pub fn extent_dimensions(&self) -> Vec<LinearDimension> {
        let b = self.logotype.bounds();
        let cap = self.logotype.cap_height();
        vec![
            LinearDimension::new(Point::new(b.max.x, b.min.y), b.min)
                .side(Side::Right)
                .offset(1.0 / 16.0)
                .reference(cap)
                .format(ValueFormat::decimal()),
            LinearDimension::new(b.max, Point::new(b.max.x, b.min.y))
                .side(Side::Right)
                .offset(1.0 / 4.0)
                .reference(cap)
                .format(ValueFormat::decimal()),
        ]
    }

    /// Height of the first glyph against the cap-height.
    pub fn cap_height_dimension(&self) -> Option<LinearDimension> {
        let glyph = self.logotype.glyphs().first()?.bounds();
        let cap = self.logotype.cap_height();
        let format = if cap.fract() == 0.0 {
            ValueFormat::Fraction
        } else {
            ValueFormat::decimal()
        };
        Some(
            LinearDimension::new(glyph.min, Point::new(glyph.min.x, glyph.max.y))
                .side(Side::Right)
                .offset(1.0 / 4.0)
                .reference(cap)
                .format(format),
        )
    }

    /// The gap between each pair of neighboring glyphs, labelled outside.
    pub fn spacing_dimensions(&self) -> Vec<LinearDimension> {
        let top = self.logotype.bounds().min.y;
        let cap = self.logotype.cap_height();
        self.logotype
            .glyphs()
            .windows(2)
            .enumerate()
            .filter_map(|(i, pair)| {
                let p1 = Point::new(pair[0].bounds().max.x, top);
                let p2 = Point::new(pair[1].bounds().min.x, top);
                let gap = p1.distance(p2);
                (gap > 0.0).then(|| {
                    LinearDimension::new(p1, p2)
                        .side(if i == 0 { Side::Left } else { Side::Right })
                        .offset(cap / gap)
                        .reference(cap)
                        .format(ValueFormat::decimal())
                        .label_mode(LabelMode::Outside)
                })
            })
            .collect()
    }

    pub fn scene(&self, fills: &GlyphFills) -> Result<Scene, Error> {
        let mut scene = diagram_scene(&self.canvas, &self.styles, false);
        scene.push(self.bounding_box());
        let dimensions: Vec<_> = self
            .extent_dimensions()
            .into_iter()
            .chain(self.cap_height_dimension())
            .chain(self.spacing_dimensions())
            .collect();
        push_linear(&mut scene, &dimensions, &self.styles)?;
        scene.extend(self.logotype.to_elements(fills));
        debug!(elements = scene.elements.len(), "logotype diagram built");
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{GlyphStyle, compose};
    use crate::font::{GlyphOutline, LoadedFont, LoadedGlyph};
    use crate::outline::{Contour, CurveFormat, OutlinePoint};
    use crate::scene::{Bounded, MarkerKind};
    use crate::shapes::LambdaParams;

    fn block(width: f64) -> GlyphOutline {
        GlyphOutline::from_contours(vec![Contour::new(vec![
            OutlinePoint::on(0.0, 0.0),
            OutlinePoint::on(0.0, -700.0),
            OutlinePoint::on(width, -700.0),
            OutlinePoint::on(width, 0.0),
        ])])
    }

    fn logotype() -> Logotype {
        let font = LoadedFont {
            cap_height: 700.0,
            curve_format: CurveFormat::Quadratic,
            glyphs: "nixos"
                .chars()
                .map(|character| LoadedGlyph {
                    character,
                    outline: block(300.0),
                })
                .collect(),
        };
        compose(&font, &defaults::LOGOTYPE_SPACINGS, 700.0, GlyphStyle::Regular).unwrap()
    }

    #[test]
    fn lambda_has_thirteen_linear_and_nine_angular_dimensions() {
        let diagram = DimensionedLambda::with_clear_space(
            Lambda::default(),
            LineStyleSet::small(),
            ClearSpace::Recommended,
        )
        .unwrap();
        assert_eq!(diagram.linear_dimensions().len(), 13);
        assert_eq!(diagram.angular_dimensions().len(), 9);
        let labels: Vec<_> = diagram
            .angular_dimensions()
            .into_iter()
            .filter_map(|d| d.text)
            .collect();
        assert_eq!(labels.iter().filter(|t| *t == "A").count(), 3);
    }

    #[test]
    fn lambda_main_diagonal_is_one() {
        let diagram = DimensionedLambda::with_clear_space(
            Lambda::default(),
            LineStyleSet::small(),
            ClearSpace::Recommended,
        )
        .unwrap();
        let layout = diagram.linear_dimensions()[0]
            .layout(&LineStyleSet::small().label)
            .unwrap();
        assert_eq!(layout.label.unwrap().text, "1");
    }

    #[test]
    fn lambda_scenes_define_the_markers_they_use() {
        let diagram = DimensionedLambda::with_clear_space(
            Lambda::new(LambdaParams::default()),
            LineStyleSet::medium(),
            ClearSpace::Minimal,
        )
        .unwrap();
        for scene in [diagram.linear_scene().unwrap(), diagram.angular_scene().unwrap()] {
            assert_eq!(scene.referenced_markers(), vec![MarkerKind::DimensionArrow]);
            assert_eq!(scene.defined_markers(), vec![MarkerKind::DimensionArrow]);
        }
    }

    #[test]
    fn snowflake_scene_builds() {
        let diagram = DimensionedSnowflake::with_clear_space(
            Snowflake::default(),
            LineStyleSet::small(),
            ClearSpace::Recommended,
        )
        .unwrap();
        let scene = diagram.linear_scene().unwrap();
        // Six arms before the axes.
        assert!(scene.elements[..6].iter().all(|e| matches!(e, Element::Polygon(_))));
        assert_eq!(diagram.construction_elements().len(), 5);
        assert!(scene.content_bounds().is_some());
    }

    #[test]
    fn logotype_dimensions() {
        let diagram =
            DimensionedLogotype::with_default_canvas(logotype(), LineStyleSet::small()).unwrap();
        assert_eq!(diagram.spacing_dimensions().len(), 4);
        let cap = diagram
            .cap_height_dimension()
            .unwrap()
            .layout(&LineStyleSet::small().label)
            .unwrap();
        assert_eq!(cap.label.unwrap().text, "1");

        let width = diagram.extent_dimensions()[0]
            .layout(&LineStyleSet::small().label)
            .unwrap();
        // 5 * 300 + 220 spacing = 1720 over 700.
        assert_eq!(width.label.unwrap().text, "2.457");

        let scene = diagram.scene(&GlyphFills::default()).unwrap();
        let rect = scene
            .elements
            .iter()
            .find(|e| matches!(e, Element::Rect(_)))
            .and_then(Bounded::bounds)
            .unwrap();
        assert_eq!(rect, diagram.logotype.bounds());
    }

    #[test]
    fn touching_glyphs_have_no_spacing_dimension() {
        let font = LoadedFont {
            cap_height: 700.0,
            curve_format: CurveFormat::Quadratic,
            glyphs: vec![
                LoadedGlyph {
                    character: 'n',
                    outline: block(300.0),
                };
                2
            ],
        };
        let touching = compose(&font, &[0.0, 0.0], 700.0, GlyphStyle::Regular).unwrap();
        let diagram =
            DimensionedLogotype::with_default_canvas(touching, LineStyleSet::small()).unwrap();
        assert!(diagram.spacing_dimensions().is_empty());
    }
}
