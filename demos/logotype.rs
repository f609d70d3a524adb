use glyphmark::defaults::{LOGOTYPE_SPACINGS_WITH_BEARING, LOGOTYPE_TEXT};
use glyphmark::font::MemoryFont;
use glyphmark::{
    ClearSpace, Contour, CurveFormat, DimensionedLogotype, FontTransforms, GlyphFills, GlyphStyle,
    LambdaParams, LineStyleSet, Logo, LogoLayout, LogomarkPaint, OutlinePoint, Snowflake,
    default_cap_height, logotype,
};
use tracing_subscriber::EnvFilter;

fn contour(points: &[(f64, f64, bool)]) -> Contour {
    Contour::new(
        points
            .iter()
            .map(|&(x, y, on)| {
                if on {
                    OutlinePoint::on(x, y)
                } else {
                    OutlinePoint::off(x, y)
                }
            })
            .collect(),
    )
}

/// A toy font in font units, y-up, with just enough letters for the logotype.
fn toy_font() -> MemoryFont {
    let stem = |x: f64| {
        contour(&[
            (x, 0.0, true),
            (x, 500.0, true),
            (x + 90.0, 500.0, true),
            (x + 90.0, 0.0, true),
        ])
    };
    let bowl = contour(&[
        (0.0, 250.0, true),
        (0.0, 500.0, false),
        (200.0, 500.0, true),
        (400.0, 500.0, false),
        (400.0, 250.0, true),
        (400.0, 0.0, false),
        (200.0, 0.0, true),
        (0.0, 0.0, false),
    ]);
    let arch = contour(&[
        (0.0, 0.0, true),
        (0.0, 500.0, true),
        (90.0, 500.0, true),
        (90.0, 450.0, true),
        (180.0, 520.0, false),
        (310.0, 520.0, false),
        (400.0, 420.0, true),
        (400.0, 0.0, true),
        (310.0, 0.0, true),
        (310.0, 400.0, true),
        (240.0, 440.0, false),
        (90.0, 400.0, true),
    ]);
    let cross = contour(&[
        (0.0, 0.0, true),
        (100.0, 0.0, true),
        (200.0, 180.0, true),
        (300.0, 0.0, true),
        (400.0, 0.0, true),
        (260.0, 250.0, true),
        (400.0, 500.0, true),
        (300.0, 500.0, true),
        (200.0, 320.0, true),
        (100.0, 500.0, true),
        (0.0, 500.0, true),
        (140.0, 250.0, true),
    ]);
    let ess = contour(&[
        (0.0, 40.0, true),
        (150.0, -20.0, false),
        (330.0, 40.0, true),
        (400.0, 140.0, false),
        (200.0, 250.0, true),
        (0.0, 360.0, false),
        (70.0, 460.0, true),
        (250.0, 520.0, false),
        (400.0, 460.0, true),
    ]);
    MemoryFont::new(500.0, CurveFormat::Quadratic)
        .with_glyph("n", vec![arch])
        .with_glyph("i", vec![stem(0.0)])
        .with_glyph("x", vec![cross])
        .with_glyph("o", vec![bowl])
        .with_glyph("s", vec![ess])
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let params = LambdaParams::default();
    let cap_height = default_cap_height(&params);

    let composed = match logotype(
        toy_font(),
        &FontTransforms::route159(),
        LOGOTYPE_TEXT,
        &LOGOTYPE_SPACINGS_WITH_BEARING,
        cap_height,
        GlyphStyle::SplitFill,
    ) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error: {:?}", miette::Report::new(e));
            return;
        }
    };

    println!("=== Glyphs ===");
    for glyph in composed.glyphs() {
        for part in &glyph.parts {
            println!("{} {:?}: {}", glyph.character, part.role, part.path);
        }
    }
    println!(
        "\nlogotype: {:.3} x {:.3} at cap-height {:.3}",
        composed.width(),
        composed.height(),
        composed.cap_height()
    );

    println!("\n=== Dimensions ===");
    let result = DimensionedLogotype::with_default_canvas(composed.clone(), LineStyleSet::small())
        .and_then(|d| {
            let scene = d.scene(&GlyphFills::default())?;
            Ok((d, scene))
        });
    match result {
        Ok((diagram, scene)) => {
            let font = LineStyleSet::small().label;
            for dimension in diagram.spacing_dimensions() {
                if let Ok(layout) = dimension.layout(&font) {
                    let text = layout.label.map(|l| l.text).unwrap_or_default();
                    println!("spacing: {text}");
                }
            }
            println!("{} top-level elements", scene.elements.len());
        }
        Err(e) => eprintln!("Error: {:?}", miette::Report::new(e)),
    }

    println!("\n=== Logo ===");
    for layout in [LogoLayout::Horizontal, LogoLayout::Vertical] {
        let logo = Logo::new(Snowflake::new(params), composed.clone(), layout);
        match logo.scene(
            &LogomarkPaint::default(),
            &GlyphFills::default(),
            ClearSpace::Recommended,
            None,
        ) {
            Ok(scene) => {
                let vb = scene.view_box;
                println!(
                    "{layout:?}: viewBox {} {} {} {}",
                    vb.min_x, vb.min_y, vb.width, vb.height
                );
            }
            Err(e) => eprintln!("Error: {:?}", miette::Report::new(e)),
        }
    }
}
