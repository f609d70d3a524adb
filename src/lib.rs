//! Logo artwork and dimensioned technical diagrams from glyph outlines and
//! parametric shapes.
//!
//! The crate is organized into modules:
//! - `geometry`: points, vectors, matrices and bounding boxes
//! - `outline`: glyph contours to `M L Q C` path data
//! - `font`: the font provider boundary and glyph loading
//! - `compose`: glyphs laid out along a baseline
//! - `shapes`: the lambda polygon and the six-armed snowflake
//! - `dimension`: linear and angular dimension callouts
//! - `diagram`: dimensioned drawings of the lambda, snowflake and logotype
//! - `logo`: logomark and logotype placed together
//! - `scene`: the renderer-agnostic output tree
//!
//! Nothing here writes SVG text or reads font files; a [`font::FontProvider`]
//! supplies outlines and the caller serializes the [`scene::Scene`].

pub mod canvas;
pub mod compose;
pub mod defaults;
pub mod diagram;
pub mod dimension;
pub mod errors;
pub mod font;
pub mod geometry;
pub mod log;
pub mod logo;
pub mod outline;
pub mod scene;
pub mod shapes;
pub mod style;

pub use canvas::{Canvas, ClearSpace};
pub use compose::{GlyphFills, GlyphStyle, Logotype, compose};
pub use diagram::{DimensionedLambda, DimensionedLogotype, DimensionedSnowflake};
pub use dimension::{AngularDimension, LinearDimension, Side};
pub use errors::{Error, Result};
pub use font::{FontProvider, FontTransforms, load_glyphs};
pub use geometry::{BBox, Matrix, Point, Vector};
pub use logo::{Logo, LogoLayout, LogomarkPaint, default_cap_height};
pub use outline::{Contour, CurveFormat, OutlinePoint, PathCommand, PathData};
pub use scene::{Element, Scene};
pub use shapes::{Lambda, LambdaParams, Snowflake};
pub use style::{Color, LineGroup, LineStyleSet};

/// Load `text` from `provider` and lay it out at `cap_height`.
///
/// The provider is released before composition starts.
pub fn logotype<P: FontProvider>(
    provider: P,
    transforms: &FontTransforms,
    text: &str,
    spacings: &[f64],
    cap_height: f64,
    style: GlyphStyle,
) -> Result<Logotype> {
    let font = load_glyphs(provider, transforms, text)?;
    Ok(compose(&font, spacings, cap_height, style)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FontError;
    use crate::font::MemoryFont;

    fn square() -> Contour {
        Contour::new(vec![
            OutlinePoint::on(0.0, 0.0),
            OutlinePoint::on(0.0, 10.0),
            OutlinePoint::on(10.0, 10.0),
            OutlinePoint::on(10.0, 0.0),
        ])
    }

    #[test]
    fn logotype_from_provider() {
        let provider = MemoryFont::new(10.0, CurveFormat::Quadratic)
            .with_glyph("a", vec![square()])
            .with_glyph("b", vec![square()]);
        let logotype = logotype(
            provider,
            &FontTransforms::route159(),
            "ab",
            &[0.0, 5.0],
            20.0,
            GlyphStyle::Regular,
        )
        .unwrap();
        assert_eq!(logotype.width(), 50.0);
    }

    #[test]
    fn unmapped_character_is_reported() {
        let provider = MemoryFont::new(10.0, CurveFormat::Quadratic);
        let err = logotype(
            provider,
            &FontTransforms::route159(),
            "A",
            &[0.0],
            20.0,
            GlyphStyle::Regular,
        )
        .unwrap_err();
        assert_eq!(err, Error::Font(FontError::UnmappedCharacter { character: 'A' }));
    }
}
