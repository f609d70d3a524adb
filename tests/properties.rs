//! Behavioral properties of the geometry kernel, converter, composer,
//! dimension engine and shape generators, checked through the public API.

use glyphmark::compose::GlyphStyle;
use glyphmark::dimension::{AngularDimension, LinearDimension, Side};
use glyphmark::font::{GlyphOutline, LoadedFont, LoadedGlyph};
use glyphmark::outline::{Contour, CurveFormat, OutlinePoint, contour_to_path};
use glyphmark::shapes::{LambdaParams, lambda_points};
use glyphmark::style::LineStyleSet;
use glyphmark::{Point, Vector, compose};

const TOLERANCE: f64 = 1e-9;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < TOLERANCE && (a.y - b.y).abs() < TOLERANCE
}

const SAMPLE_VECTORS: [Vector; 5] = [
    Vector::new(3.0, 4.0),
    Vector::new(-1.0, 0.0),
    Vector::new(0.001, -250.0),
    Vector::new(1e6, 1e-3),
    Vector::new(-7.5, -7.5),
];

#[test]
fn point_vector_round_trip() {
    let points = [Point::new(0.0, 0.0), Point::new(-12.5, 3.25), Point::new(1e5, -1e-5)];
    for p in points {
        for q in points {
            assert!(close((p - q) + q, p), "({p:?} - {q:?}) + {q:?}");
        }
    }
}

#[test]
fn normalize_and_normal() {
    for v in SAMPLE_VECTORS {
        assert!((v.normalize().unwrap().length() - 1.0).abs() < TOLERANCE);
        assert!(v.normal().unwrap().dot(v).abs() < 1e-6 * v.length());
    }
    assert!(Vector::ZERO.normalize().is_err());
    assert!(Vector::ZERO.normal().is_err());
}

#[test]
fn square_contour_converts_to_lines() {
    let square = Contour::new(vec![
        OutlinePoint::on(0.0, 0.0),
        OutlinePoint::on(0.0, 10.0),
        OutlinePoint::on(10.0, 10.0),
        OutlinePoint::on(10.0, 0.0),
    ]);
    let path = contour_to_path(&square, CurveFormat::Quadratic).unwrap();
    assert_eq!(path.to_string(), "M0 0 L0 10 L10 10 L10 0");
}

#[test]
fn quadratic_contour_converts_to_curve() {
    let arch = Contour::new(vec![
        OutlinePoint::on(0.0, 0.0),
        OutlinePoint::off(5.0, 10.0),
        OutlinePoint::on(10.0, 0.0),
    ]);
    let path = contour_to_path(&arch, CurveFormat::Quadratic).unwrap();
    assert_eq!(path.to_string(), "M0 0 Q5 10 10 0");
}

#[test]
fn single_glyph_keeps_its_box() {
    let outline = GlyphOutline::from_contours(vec![Contour::new(vec![
        OutlinePoint::on(0.0, -700.0),
        OutlinePoint::off(150.0, -760.0),
        OutlinePoint::on(300.0, -700.0),
        OutlinePoint::on(300.0, 0.0),
        OutlinePoint::on(0.0, 0.0),
    ])]);
    let font = LoadedFont {
        cap_height: 700.0,
        curve_format: CurveFormat::Quadratic,
        glyphs: vec![LoadedGlyph {
            character: 'n',
            outline: outline.clone(),
        }],
    };
    let logotype = compose(&font, &[0.0], 700.0, GlyphStyle::Regular).unwrap();
    assert_eq!(logotype.bounds(), outline.bounds);
}

#[test]
fn flipped_linear_dimension_is_identical() {
    let font = LineStyleSet::small().label;
    let (a, b) = (Point::new(-30.0, 12.0), Point::new(90.0, 140.0));
    for offset in [0.125, 0.25, 0.5, 1.0] {
        let direct = LinearDimension::new(a, b)
            .side(Side::Right)
            .offset(offset)
            .layout(&font)
            .unwrap();
        let flipped = LinearDimension::new(b, a)
            .side(Side::Right)
            .offset(offset)
            .flip(true)
            .layout(&font)
            .unwrap();
        assert_eq!(direct.extension_lines, flipped.extension_lines);
        assert_eq!(direct.dimension_line, flipped.dimension_line);
        assert_eq!(direct.label, flipped.label);
    }
}

#[test]
fn right_angle_is_labelled_ninety_degrees() {
    let layout = AngularDimension::new(Point::new(1.0, 0.0), Point::new(0.0, 1.0), Point::ORIGIN)
        .layout(&LineStyleSet::small().label)
        .unwrap();
    assert_eq!(layout.label.unwrap().text, "90°");
}

#[test]
fn lambda_points_scale_with_radius() {
    for (thickness, gap) in [(0.25, 1.0 / 32.0), (0.2, 0.0), (0.3, 0.05)] {
        let small = lambda_points(&LambdaParams::try_new(100.0, thickness, gap).unwrap());
        let large = lambda_points(&LambdaParams::try_new(200.0, thickness, gap).unwrap());
        for (p, q) in small.iter().zip(large.iter()) {
            assert!(close(p * 2.0, q), "{p:?} * 2 != {q:?}");
        }
    }
}
