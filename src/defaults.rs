//! Default proportions and settings for logo artwork and dimension diagrams

// Lambda construction, in font units

pub const LAMBDA_RADIUS: f64 = 512.0;
pub const LAMBDA_THICKNESS: f64 = 0.25;
pub const LAMBDA_GAP: f64 = 1.0 / 32.0;

/// Angles (degrees) of the six hexagon vertices and the six snowflake arms.
pub const SIXTHS: [f64; 6] = [0.0, 60.0, 120.0, 180.0, 240.0, 300.0];

/// Gradient stop offsets along a snowflake arm, in percent.
pub const GRADIENT_STOPS: [f64; 3] = [0.0, 25.0, 100.0];

// Logotype

/// Leading spacing per glyph of "nixos", first glyph flush with the origin.
pub const LOGOTYPE_SPACINGS: [f64; 5] = [0.0, 90.0, 70.0, 50.0, 10.0];

/// Leading spacing per glyph of "nixos", keeping a side bearing before the first glyph.
pub const LOGOTYPE_SPACINGS_WITH_BEARING: [f64; 5] = [200.0, 90.0, 70.0, 50.0, 10.0];

pub const LOGOTYPE_TEXT: &str = "nixos";

/// Vertical layout drops the logotype this many cap-heights below the logomark.
pub const VERTICAL_LOGOTYPE_DROP: f64 = 1.25;

// Dimension lines

/// Extension lines run out to this multiple of the offset distance.
pub const EXTENSION_SCALE: f64 = 1.25;
/// The dimension line sits at this multiple of the offset distance.
pub const DIMENSION_SCALE: f64 = 1.20;
/// Label routing path for labels on the left side.
pub const LABEL_SCALE_LEFT: f64 = 1.19;
/// Label routing path for labels on the right side.
pub const LABEL_SCALE_RIGHT: f64 = 1.21;

pub const DECIMAL_PRECISION: u32 = 3;

/// Outer-arrow tails are at least this long...
pub const OUTER_TAIL_MIN: f64 = 40.0;
/// ...or this fraction of the measured length, whichever is larger.
pub const OUTER_TAIL_FRACTION: f64 = 0.1;

/// Angle labels sit this many label half-diagonals outside the arc.
pub const ANGLE_LABEL_CLEARANCE: f64 = 1.5;

pub const ARC_SEGMENT_MAX_DEGREES: f64 = 90.0;

// Arrow head marker

pub const ARROW_MARKER_WIDTH: f64 = 20.0;
pub const ARROW_MARKER_HEIGHT: f64 = 20.0;
pub const ARROW_REF_X: f64 = 20.0;
pub const ARROW_REF_Y: f64 = 5.0;
pub const ARROW_LENGTH: f64 = 20.0;
pub const ARROW_WIDTH: f64 = 10.0;

// Styling

pub const STROKE_DASHARRAY: f64 = 4.0;
pub const BACKGROUND_FILL: &str = "#8888ee";
pub const LINE_FILL: &str = "transparent";

// Outlines

pub const MIN_CONTOUR_POINTS: usize = 3;

// Label metrics

/// Average glyph advance relative to the font size for label extents.
pub const CHAR_WIDTH_RATIO: f64 = 0.08 / 0.14;

// Logo colors

pub const DARK_BLUE: &str = "#5277C3";
pub const LIGHT_BLUE: &str = "#7EBAE4";

// Split-fill glyph

/// The glyph whose first contour is filled in two colors.
pub const SPLIT_CHARACTER: char = 'x';
/// Point indices where the split glyph's first contour is cut.
pub const SPLIT_CUT: (usize, usize) = (2, 10);

/// Radius of the snowflake construction circle, in lambda radii.
pub const FLAKE_CONSTRUCTION_SCALE: f64 = 2.25;
