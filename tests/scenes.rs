//! Whole-scene checks: every diagram and logo scene defines the markers it
//! references, and dimension labels come out as expected end to end.

use glyphmark::font::MemoryFont;
use glyphmark::scene::{Element, TextContent};
use glyphmark::{
    ClearSpace, Contour, CurveFormat, DimensionedLambda, DimensionedLogotype,
    DimensionedSnowflake, FontTransforms, GlyphFills, GlyphStyle, Lambda, LambdaParams,
    LineStyleSet, Logo, LogoLayout, LogomarkPaint, OutlinePoint, Scene, Snowflake,
    default_cap_height, logotype,
};

fn assert_markers_defined(scene: &Scene) {
    let defined = scene.defined_markers();
    for kind in scene.referenced_markers() {
        assert!(defined.contains(&kind), "{kind:?} referenced but not defined");
    }
}

fn block(width: f64) -> Contour {
    Contour::new(vec![
        OutlinePoint::on(0.0, 0.0),
        OutlinePoint::on(0.0, 700.0),
        OutlinePoint::on(width, 700.0),
        OutlinePoint::on(width, 0.0),
    ])
}

/// Twelve-point cross, long enough to be split.
fn saltire() -> Contour {
    Contour::new(
        [
            (0.0, 0.0),
            (100.0, 0.0),
            (200.0, 250.0),
            (300.0, 0.0),
            (400.0, 0.0),
            (260.0, 350.0),
            (400.0, 700.0),
            (300.0, 700.0),
            (200.0, 450.0),
            (100.0, 700.0),
            (0.0, 700.0),
            (140.0, 350.0),
        ]
        .into_iter()
        .map(|(x, y)| OutlinePoint::on(x, y))
        .collect(),
    )
}

/// Stand-in font with block glyphs for the letters of "nixos".
fn stand_in_font() -> MemoryFont {
    let mut font = MemoryFont::new(700.0, CurveFormat::Quadratic).with_glyph("x", vec![saltire()]);
    for name in ["n", "i", "o", "s"] {
        font = font.with_glyph(name, vec![block(400.0), block(40.0)]);
    }
    font
}

fn texts(elements: &[Element]) -> Vec<String> {
    let mut out = Vec::new();
    for element in elements {
        match element {
            Element::Text(t) => match &t.content {
                TextContent::Plain(text) => out.push(text.clone()),
                TextContent::Path(path) => out.push(path.text.clone()),
            },
            Element::Group(g) => out.extend(texts(&g.children)),
            _ => {}
        }
    }
    out
}

#[test]
fn lambda_scenes_define_their_markers() {
    let diagram = DimensionedLambda::with_clear_space(
        Lambda::new(LambdaParams::default()),
        LineStyleSet::small(),
        ClearSpace::Recommended,
    )
    .unwrap();
    let linear = diagram.linear_scene().unwrap();
    let angular = diagram.angular_scene().unwrap();
    assert!(!linear.referenced_markers().is_empty());
    assert_markers_defined(&linear);
    assert_markers_defined(&angular);
    assert_eq!(texts(&angular.elements).iter().filter(|t| *t == "A").count(), 3);
}

#[test]
fn snowflake_scene_defines_its_markers() {
    let diagram = DimensionedSnowflake::with_clear_space(
        Snowflake::default(),
        LineStyleSet::medium(),
        ClearSpace::Minimal,
    )
    .unwrap();
    assert_markers_defined(&diagram.linear_scene().unwrap());
}

#[test]
fn logotype_scene_is_dimensioned() {
    let cap = default_cap_height(&LambdaParams::default());
    let logotype = logotype(
        stand_in_font(),
        &FontTransforms::route159(),
        "nixos",
        &[0.0, 60.0, 60.0, 60.0, 60.0],
        cap,
        GlyphStyle::SplitFill,
    )
    .unwrap();
    let diagram = DimensionedLogotype::with_default_canvas(logotype, LineStyleSet::small()).unwrap();
    let scene = diagram.scene(&GlyphFills::default()).unwrap();
    assert_markers_defined(&scene);
    assert_eq!(diagram.spacing_dimensions().len(), 4);
}

#[test]
fn logo_scene_fits_its_canvas() {
    let params = LambdaParams::default();
    let logotype = logotype(
        stand_in_font(),
        &FontTransforms::route159(),
        "nixos",
        &[0.0, 30.0, 30.0, 30.0, 30.0],
        default_cap_height(&params),
        GlyphStyle::Regular,
    )
    .unwrap();
    for layout in [LogoLayout::Horizontal, LogoLayout::Vertical] {
        let logo = Logo::new(Snowflake::new(params), logotype.clone(), layout);
        let scene = logo
            .scene(
                &LogomarkPaint::default(),
                &GlyphFills::default(),
                ClearSpace::Minimal,
                None,
            )
            .unwrap();
        let content = scene.content_bounds().unwrap();
        let vb = scene.view_box;
        assert!(content.min.x >= vb.min_x - 1e-6, "{layout:?}");
        assert!(content.min.y >= vb.min_y - 1e-6, "{layout:?}");
        assert!(content.max.x <= vb.min_x + vb.width + 1e-6, "{layout:?}");
        assert!(content.max.y <= vb.min_y + vb.height + 1e-6, "{layout:?}");
    }
}
