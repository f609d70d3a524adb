//! Glyph composition: loaded outlines laid out along a common baseline.

use std::str::FromStr;

use crate::canvas::ClearSpace;
use crate::defaults;
use crate::errors::{ComposeError, ConfigError, NumericError, OutlineError};
use crate::font::{GlyphOutline, LoadedFont};
use crate::geometry::{BBox, Vector};
use crate::log::{debug, trace};
use crate::outline::{Contour, CurveFormat, PathData, contours_to_path};
use crate::scene::{Element, Path};
use crate::style::{Color, Presentation};

/// How glyphs are filled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GlyphStyle {
    /// Every glyph in one color.
    #[default]
    Regular,
    /// The split glyph in two colors, every other glyph in one.
    SplitFill,
}

impl FromStr for GlyphStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(GlyphStyle::Regular),
            "split-fill" | "split_fill" => Ok(GlyphStyle::SplitFill),
            _ => Err(ConfigError::UnknownVariant {
                kind: "glyph style",
                value: s.to_string(),
            }),
        }
    }
}

/// Which color a piece of a glyph takes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillRole {
    Regular,
    Upper,
    Lower,
}

/// Colors for each [`FillRole`]
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphFills {
    pub regular: Color,
    pub upper: Color,
    pub lower: Color,
}

impl Default for GlyphFills {
    fn default() -> Self {
        GlyphFills {
            regular: Color::black(),
            upper: Color::from(defaults::LIGHT_BLUE),
            lower: Color::from(defaults::DARK_BLUE),
        }
    }
}

impl GlyphFills {
    pub fn color(&self, role: FillRole) -> &Color {
        match role {
            FillRole::Regular => &self.regular,
            FillRole::Upper => &self.upper,
            FillRole::Lower => &self.lower,
        }
    }
}

/// Partition of one glyph's first contour into two fills.
///
/// The upper part is `[0, from)` followed by `[to, len)`, the lower part is
/// `[from, to)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitTable {
    pub character: char,
    pub from: usize,
    pub to: usize,
}

impl Default for SplitTable {
    fn default() -> Self {
        let (from, to) = defaults::SPLIT_CUT;
        SplitTable {
            character: defaults::SPLIT_CHARACTER,
            from,
            to,
        }
    }
}

impl SplitTable {
    /// Upper and lower contours cut from `outline`'s first contour.
    pub fn split(&self, outline: &GlyphOutline) -> Result<(Contour, Contour), OutlineError> {
        if self.from > self.to {
            return Err(OutlineError::ReversedSplitRange {
                character: self.character,
                from: self.from,
                to: self.to,
            });
        }
        let contour = outline
            .contours
            .first()
            .filter(|c| c.len() >= self.to)
            .ok_or(OutlineError::SplitOutOfRange {
                character: self.character,
                contour: 0,
                needed: self.to,
            })?;
        let upper = contour.splice(&[0..self.from, self.to..contour.len()]);
        let lower = contour.splice(&[self.from..self.to]);
        Ok((upper, lower))
    }
}

/// A converted path and the fill it takes
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphPart {
    pub role: FillRole,
    pub path: PathData,
}

/// One glyph at its final position
#[derive(Clone, Debug, PartialEq)]
pub struct ComposedGlyph {
    pub character: char,
    pub outline: GlyphOutline,
    pub parts: Vec<GlyphPart>,
}

impl ComposedGlyph {
    fn new(
        character: char,
        outline: GlyphOutline,
        format: CurveFormat,
        style: GlyphStyle,
        split: &SplitTable,
    ) -> Result<Self, OutlineError> {
        let parts = if style == GlyphStyle::SplitFill && character == split.character {
            let (upper, lower) = split.split(&outline)?;
            let mut parts = vec![
                GlyphPart {
                    role: FillRole::Upper,
                    path: contours_to_path(&[upper], format)?,
                },
                GlyphPart {
                    role: FillRole::Lower,
                    path: contours_to_path(&[lower], format)?,
                },
            ];
            if outline.contours.len() > 1 {
                parts.push(GlyphPart {
                    role: FillRole::Regular,
                    path: contours_to_path(&outline.contours[1..], format)?,
                });
            }
            parts
        } else {
            vec![GlyphPart {
                role: FillRole::Regular,
                path: contours_to_path(&outline.contours, format)?,
            }]
        };
        Ok(ComposedGlyph {
            character,
            outline,
            parts,
        })
    }

    pub fn bounds(&self) -> BBox {
        self.outline.bounds
    }

    pub fn to_elements(&self, fills: &GlyphFills) -> Vec<Element> {
        self.parts
            .iter()
            .map(|part| {
                Path {
                    data: part.path.clone(),
                    style: Presentation::filled(fills.color(part.role).clone()),
                    marker_start: None,
                    marker_end: None,
                }
                .into()
            })
            .collect()
    }
}

/// A run of glyphs on one baseline, scaled to a common cap-height
#[derive(Clone, Debug, PartialEq)]
pub struct Logotype {
    glyphs: Vec<ComposedGlyph>,
    bounds: BBox,
    cap_height: f64,
    scale: f64,
}

impl Logotype {
    pub fn glyphs(&self) -> &[ComposedGlyph] {
        &self.glyphs
    }

    /// Union of the glyph boxes, widened to the left by the leading spacing.
    pub fn bounds(&self) -> BBox {
        self.bounds
    }

    pub fn cap_height(&self) -> f64 {
        self.cap_height
    }

    /// Ratio of the composed cap-height to the font's own.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn width(&self) -> f64 {
        self.bounds.width()
    }

    pub fn height(&self) -> f64 {
        self.bounds.height()
    }

    pub fn clear_space(&self, clear_space: ClearSpace) -> f64 {
        clear_space.margin(self.cap_height)
    }

    pub fn to_elements(&self, fills: &GlyphFills) -> Vec<Element> {
        self.glyphs
            .iter()
            .flat_map(|g| g.to_elements(fills))
            .collect()
    }
}

/// Lay out every glyph of `font` left to right.
///
/// `spacings[i]` is the gap, in font units, before glyph `i`. The cursor
/// advances by the scaled gap, but the composite box keeps the first gap
/// unscaled: its min x is the first glyph's left edge minus `spacings[0]`.
pub fn compose(
    font: &LoadedFont,
    spacings: &[f64],
    target_cap_height: f64,
    style: GlyphStyle,
) -> Result<Logotype, ComposeError> {
    compose_with_split(font, spacings, target_cap_height, style, &SplitTable::default())
}

/// [`compose`] with a custom split table for [`GlyphStyle::SplitFill`].
pub fn compose_with_split(
    font: &LoadedFont,
    spacings: &[f64],
    target_cap_height: f64,
    style: GlyphStyle,
    split: &SplitTable,
) -> Result<Logotype, ComposeError> {
    if font.glyphs.is_empty() {
        return Err(ComposeError::Empty);
    }
    if font.glyphs.len() != spacings.len() {
        return Err(ComposeError::SpacingMismatch {
            glyphs: font.glyphs.len(),
            spacings: spacings.len(),
        });
    }
    let cap_height = NumericError::check_positive(target_cap_height)
        .map_err(|reason| ComposeError::InvalidCapHeight { reason })?;
    let scale = cap_height / font.cap_height;

    let mut cursor = 0.0;
    let mut bounds = BBox::new();
    let mut glyphs = Vec::with_capacity(font.glyphs.len());
    for (glyph, spacing) in font.glyphs.iter().zip(spacings) {
        cursor += spacing * scale;
        let placed = glyph
            .outline
            .scale_xy(scale, scale)
            .translate(Vector::new(cursor, 0.0));
        cursor += placed.bounds.width();
        trace!(character = %glyph.character, cursor, "glyph placed");
        bounds.expand_bbox(&placed.bounds);
        glyphs.push(ComposedGlyph::new(
            glyph.character,
            placed,
            font.curve_format,
            style,
            split,
        )?);
    }
    bounds.min.x -= spacings[0];

    debug!(glyphs = glyphs.len(), scale, width = bounds.width(), "logotype composed");
    Ok(Logotype {
        glyphs,
        bounds,
        cap_height,
        scale,
    })
}
