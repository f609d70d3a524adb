//! Font provider boundary and glyph loading.
//!
//! Reading font files is somebody else's job: a [`FontProvider`] hands out
//! raw contours by glyph name. Loading acquires the provider, materializes
//! owned [`GlyphOutline`]s for every requested character, and releases the
//! provider before returning, so nothing downstream holds on to it.

use std::collections::HashMap;

use crate::errors::{FontError, NumericError};
use crate::geometry::{BBox, Vector};
use crate::log::debug;
use crate::outline::{Contour, CurveFormat};

/// A loaded font file, or anything else that can produce glyph outlines
pub trait FontProvider {
    /// Cap-height of the font, in its own units.
    fn cap_height(&self) -> f64;

    /// Bézier flavour of the outlines this provider returns.
    fn curve_format(&self) -> CurveFormat;

    /// Contours and bounds of the glyph called `glyph_name`.
    fn outline(&self, glyph_name: &str) -> Result<GlyphOutline, FontError>;

    /// Give the underlying resource back. Called exactly once.
    fn release(self)
    where
        Self: Sized;
}

/// Owned contours of one glyph plus their bounding box
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphOutline {
    pub contours: Vec<Contour>,
    pub bounds: BBox,
}

impl GlyphOutline {
    /// Outline whose bounds are the union of its contours' control polygons.
    pub fn from_contours(contours: Vec<Contour>) -> Self {
        let bounds = contours
            .iter()
            .fold(BBox::new(), |acc, c| acc.union(&c.bounds()));
        GlyphOutline { contours, bounds }
    }

    /// Scale each axis about the origin.
    pub fn scale_xy(&self, sx: f64, sy: f64) -> GlyphOutline {
        GlyphOutline {
            contours: self.contours.iter().map(|c| c.scale_xy(sx, sy)).collect(),
            bounds: self.bounds.scale_xy(sx, sy),
        }
    }

    pub fn translate(&self, offset: Vector) -> GlyphOutline {
        GlyphOutline {
            contours: self.contours.iter().map(|c| c.translate(offset)).collect(),
            bounds: self.bounds.translate(offset),
        }
    }

    /// Left side bearing: how far the ink starts from the glyph origin.
    pub fn left_bearing(&self) -> f64 {
        self.bounds.min.x
    }
}

// ============================================================================
// Per-character transforms
// ============================================================================

/// How to fetch and orient the glyph for one character
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterTransform {
    pub glyph_name: String,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Shift the glyph so its ink starts at x = 0.
    pub remove_bearing: bool,
}

impl CharacterTransform {
    pub fn new(glyph_name: impl Into<String>) -> Self {
        CharacterTransform {
            glyph_name: glyph_name.into(),
            scale_x: 1.0,
            scale_y: -1.0,
            remove_bearing: true,
        }
    }

    pub fn mirrored_x(mut self) -> Self {
        self.scale_x = -self.scale_x;
        self
    }

    pub fn keep_bearing(mut self) -> Self {
        self.remove_bearing = false;
        self
    }

    /// Apply the scale and bearing adjustment to a raw outline.
    pub fn apply(&self, outline: &GlyphOutline) -> GlyphOutline {
        let scaled = outline.scale_xy(self.scale_x, self.scale_y);
        if self.remove_bearing && !scaled.bounds.is_empty() {
            scaled.translate(Vector::new(-scaled.left_bearing(), 0.0))
        } else {
            scaled
        }
    }
}

/// Glyph name for characters whose glyph is not named after the character itself.
pub fn glyph_name_for(character: char) -> String {
    let name = match character {
        ' ' => "space",
        '%' => "percent",
        '.' => "period",
        '/' => "slash",
        '0' => "zero",
        '1' => "one",
        '2' => "two",
        '3' => "three",
        '4' => "four",
        '5' => "five",
        '6' => "six",
        '7' => "seven",
        '8' => "eight",
        '9' => "nine",
        c => return c.to_string(),
    };
    name.to_string()
}

/// Character to transform table. Characters absent from it cannot be loaded.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FontTransforms {
    entries: HashMap<char, CharacterTransform>,
}

impl FontTransforms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, character: char, transform: CharacterTransform) {
        self.entries.insert(character, transform);
    }

    pub fn with(mut self, character: char, transform: CharacterTransform) -> Self {
        self.insert(character, transform);
        self
    }

    pub fn get(&self, character: char) -> Result<&CharacterTransform, FontError> {
        self.entries
            .get(&character)
            .ok_or(FontError::UnmappedCharacter { character })
    }

    /// Route 159 logotype font: lowercase letters flipped to y-down with
    /// bearings removed, and the "i" mirrored.
    pub fn route159() -> Self {
        ('a'..='z').fold(FontTransforms::new(), |t, c| {
            let transform = CharacterTransform::new(c.to_string());
            let transform = if c == 'i' { transform.mirrored_x() } else { transform };
            t.with(c, transform)
        })
    }

    /// Jura annotation font: letters, digits and a little punctuation,
    /// flipped to y-down with bearings kept.
    pub fn jura() -> Self {
        ('a'..='z')
            .chain('A'..='Z')
            .chain('0'..='9')
            .chain([' ', '%', '.', '/'])
            .fold(FontTransforms::new(), |t, c| {
                t.with(c, CharacterTransform::new(glyph_name_for(c)).keep_bearing())
            })
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Glyph outlines materialized from a released provider
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedFont {
    pub cap_height: f64,
    pub curve_format: CurveFormat,
    pub glyphs: Vec<LoadedGlyph>,
}

/// One loaded character
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedGlyph {
    pub character: char,
    pub outline: GlyphOutline,
}

/// Load the glyph for every character of `text`, then release `provider`.
///
/// The provider is released whether or not loading succeeds.
pub fn load_glyphs<P: FontProvider>(
    provider: P,
    transforms: &FontTransforms,
    text: &str,
) -> Result<LoadedFont, FontError> {
    let result = materialize(&provider, transforms, text);
    provider.release();
    debug!(text, ok = result.is_ok(), "font provider released");
    result
}

fn materialize<P: FontProvider>(
    provider: &P,
    transforms: &FontTransforms,
    text: &str,
) -> Result<LoadedFont, FontError> {
    let cap_height = NumericError::check_positive(provider.cap_height())
        .map_err(|reason| FontError::InvalidCapHeight { reason })?;
    let glyphs = text
        .chars()
        .map(|character| {
            let transform = transforms.get(character)?;
            let raw = provider.outline(&transform.glyph_name)?;
            Ok(LoadedGlyph {
                character,
                outline: transform.apply(&raw),
            })
        })
        .collect::<Result<Vec<_>, FontError>>()?;
    Ok(LoadedFont {
        cap_height,
        curve_format: provider.curve_format(),
        glyphs,
    })
}

// ============================================================================
// In-memory provider
// ============================================================================

/// A provider backed by contours held in memory
#[derive(Clone, Debug, Default)]
pub struct MemoryFont {
    cap_height: f64,
    curve_format: CurveFormat,
    glyphs: HashMap<String, GlyphOutline>,
}

impl MemoryFont {
    pub fn new(cap_height: f64, curve_format: CurveFormat) -> Self {
        MemoryFont {
            cap_height,
            curve_format,
            glyphs: HashMap::new(),
        }
    }

    pub fn with_glyph(mut self, name: impl Into<String>, contours: Vec<Contour>) -> Self {
        self.glyphs
            .insert(name.into(), GlyphOutline::from_contours(contours));
        self
    }
}

impl FontProvider for MemoryFont {
    fn cap_height(&self) -> f64 {
        self.cap_height
    }

    fn curve_format(&self) -> CurveFormat {
        self.curve_format
    }

    fn outline(&self, glyph_name: &str) -> Result<GlyphOutline, FontError> {
        self.glyphs
            .get(glyph_name)
            .cloned()
            .ok_or_else(|| FontError::MissingGlyph {
                name: glyph_name.to_string(),
            })
    }

    fn release(self) {
        debug!(glyphs = self.glyphs.len(), "releasing in-memory font");
    }
}
