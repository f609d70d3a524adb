//! Error types with diagnostic codes using miette
//!
//! Every failure in the core is local and synchronous: the operation that
//! hits a degenerate input returns one of these to its caller.

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Result alias used across the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Why a numeric value was rejected
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

impl NumericError {
    /// Check that `value` is finite.
    pub fn check_finite(value: f64) -> Result<f64, NumericError> {
        if value.is_nan() {
            Err(NumericError::NaN)
        } else if value.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(value)
        }
    }

    /// Check that `value` is finite and not negative.
    pub fn check_non_negative(value: f64) -> Result<f64, NumericError> {
        if Self::check_finite(value)? < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(value)
        }
    }

    /// Check that `value` is finite and strictly positive.
    pub fn check_positive(value: f64) -> Result<f64, NumericError> {
        let value = Self::check_non_negative(value)?;
        if value == 0.0 {
            Err(NumericError::Zero)
        } else {
            Ok(value)
        }
    }
}

// ============================================================================
// Geometry Errors
// ============================================================================

/// Degenerate inputs to the geometry kernel
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("cannot take the direction of a zero-length vector")]
    #[diagnostic(
        code(glyphmark::geometry::zero_length),
        help("the two points defining this direction coincide")
    )]
    ZeroLength,

    #[error("bounding box has zero {axis}")]
    #[diagnostic(code(glyphmark::geometry::degenerate_bounds))]
    DegenerateBounds { axis: &'static str },

    #[error("bounding box is empty")]
    #[diagnostic(
        code(glyphmark::geometry::empty_bounds),
        help("a bounding box needs at least one point")
    )]
    EmptyBounds,

    #[error("arc radius {radius} is shorter than half its chord ({half_chord})")]
    #[diagnostic(code(glyphmark::geometry::arc_too_small))]
    ArcTooSmall { radius: f64, half_chord: f64 },
}

// ============================================================================
// Outline Errors
// ============================================================================

/// Contours that cannot be turned into path commands
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum OutlineError {
    #[error("malformed contour: {len} points, at least {min} required")]
    #[diagnostic(code(glyphmark::outline::malformed_contour))]
    MalformedContour { len: usize, min: usize },

    #[error("contour has no on-curve point")]
    #[diagnostic(
        code(glyphmark::outline::no_on_curve_point),
        help("every contour needs an on-curve point to start from")
    )]
    NoOnCurvePoint,

    #[error("cubic segment at point {index} is not two control points followed by an on-curve point")]
    #[diagnostic(
        code(glyphmark::outline::broken_cubic_segment),
        help("cubic outlines carry exactly two off-curve points per curve; is this a quadratic font?")
    )]
    BrokenCubicSegment { index: usize },

    #[error("split range {from}..{to} for glyph {character:?} runs backwards")]
    #[diagnostic(
        code(glyphmark::outline::reversed_split_range),
        help("the split table needs `from <= to`")
    )]
    ReversedSplitRange { character: char, from: usize, to: usize },

    #[error("glyph {character:?} has no contour {contour} with at least {needed} points")]
    #[diagnostic(code(glyphmark::outline::split_out_of_range))]
    SplitOutOfRange {
        character: char,
        contour: usize,
        needed: usize,
    },
}

// ============================================================================
// Font Provider Errors
// ============================================================================

/// Failures at the font provider boundary
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum FontError {
    #[error("character {character:?} has no entry in the font transforms")]
    #[diagnostic(
        code(glyphmark::font::unmapped_character),
        help("add the character to the FontTransforms passed to the loader")
    )]
    UnmappedCharacter { character: char },

    #[error("font has no glyph named {name:?}")]
    #[diagnostic(code(glyphmark::font::missing_glyph))]
    MissingGlyph { name: String },

    #[error("invalid cap-height: {reason}")]
    #[diagnostic(code(glyphmark::font::invalid_cap_height))]
    InvalidCapHeight { reason: NumericError },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Outline(#[from] OutlineError),
}

// ============================================================================
// Composition Errors
// ============================================================================

/// Failures laying glyphs out along a baseline
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ComposeError {
    #[error("{glyphs} glyphs but {spacings} spacing values")]
    #[diagnostic(
        code(glyphmark::compose::spacing_mismatch),
        help("pass exactly one leading spacing per glyph")
    )]
    SpacingMismatch { glyphs: usize, spacings: usize },

    #[error("nothing to compose")]
    #[diagnostic(code(glyphmark::compose::empty))]
    Empty,

    #[error("invalid target cap-height: {reason}")]
    #[diagnostic(code(glyphmark::compose::invalid_cap_height))]
    InvalidCapHeight { reason: NumericError },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Outline(#[from] OutlineError),
}

// ============================================================================
// Dimension Errors
// ============================================================================

/// Failures building dimension annotations
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum DimensionError {
    #[error("reference length is zero and no label text was given")]
    #[diagnostic(
        code(glyphmark::dimension::zero_reference),
        help("pass a non-zero reference length or literal label text")
    )]
    ZeroReference,

    #[error("fractional labels need a whole-number reference length, got {reference}")]
    #[diagnostic(
        code(glyphmark::dimension::non_integral_reference),
        help("use a decimal label format for fractional reference lengths")
    )]
    NonIntegralReference { reference: f64 },

    #[error("invalid {field}: {reason}")]
    #[diagnostic(code(glyphmark::dimension::invalid_parameter))]
    InvalidParameter {
        field: &'static str,
        reason: NumericError,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Geometry(#[from] GeometryError),
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Rejected style and layout configuration
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown {kind}: {value:?}")]
    #[diagnostic(code(glyphmark::config::unknown_variant))]
    UnknownVariant { kind: &'static str, value: String },

    #[error("invalid {field}: {reason}")]
    #[diagnostic(code(glyphmark::config::invalid_value))]
    InvalidValue {
        field: &'static str,
        reason: NumericError,
    },

    #[error("palette has no colors")]
    #[diagnostic(code(glyphmark::config::empty_palette))]
    EmptyPalette,
}

// ============================================================================
// Top-level Error
// ============================================================================

/// Any error the core can produce
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Outline(#[from] OutlineError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Font(#[from] FontError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Compose(#[from] ComposeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Dimension(#[from] DimensionError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}
