//! Label text: measurement formatting and approximate extents

use crate::defaults;
use crate::errors::DimensionError;

/// Proportional character widths in hundredths of an average advance.
#[rustfmt::skip]
const AW_CHAR: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Sum of proportional widths, non-ASCII characters counting as one advance.
fn text_length(text: &str) -> u32 {
    text.chars()
        .map(|c| match c {
            ' '..='~' => AW_CHAR[c as usize - 0x20] as u32,
            _ => 100,
        })
        .sum()
}

/// Approximate width and height of `text` at `font_size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

impl TextExtent {
    pub fn measure(text: &str, font_size: f64) -> Self {
        TextExtent {
            width: text_length(text) as f64 * 0.01 * font_size * defaults::CHAR_WIDTH_RATIO,
            height: font_size,
        }
    }

    /// Half the diagonal of the text's box.
    pub fn half_diagonal(&self) -> f64 {
        self.width.hypot(self.height) / 2.0
    }
}

/// How a measured length is written
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ValueFormat {
    /// Reduced fraction of a whole-number reference, e.g. `1/4`.
    #[default]
    Fraction,
    /// Decimal ratio rounded to `precision` places, e.g. `0.333`.
    Decimal { precision: u32 },
}

impl ValueFormat {
    pub fn decimal() -> Self {
        ValueFormat::Decimal {
            precision: defaults::DECIMAL_PRECISION,
        }
    }
}

/// Write `length` relative to `reference`.
pub fn format_measurement(
    length: f64,
    reference: f64,
    format: ValueFormat,
) -> Result<String, DimensionError> {
    if reference == 0.0 {
        return Err(DimensionError::ZeroReference);
    }
    match format {
        ValueFormat::Fraction => {
            if reference.fract() != 0.0 || !reference.is_finite() {
                return Err(DimensionError::NonIntegralReference { reference });
            }
            Ok(format_fraction(
                length.round_ties_even() as i64,
                reference as i64,
            ))
        }
        ValueFormat::Decimal { precision } => {
            Ok(format_decimal(round_to(length / reference, precision)))
        }
    }
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.abs()
}

fn format_fraction(numerator: i64, denominator: i64) -> String {
    let divisor = gcd(numerator, denominator).max(1);
    let sign = if denominator < 0 { -1 } else { 1 };
    let (n, d) = (sign * numerator / divisor, sign * denominator / divisor);
    if d == 1 { format!("{n}") } else { format!("{n}/{d}") }
}

fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    (value * scale).round_ties_even() / scale
}

/// Shortest decimal that round-trips, always with a fractional part.
pub fn format_decimal(value: f64) -> String {
    let mut s = format!("{value}");
    if value.is_finite() && !s.contains('.') {
        s.push_str(".0");
    }
    s
}

/// Angle label in whole degrees.
pub fn format_degrees(degrees: f64) -> String {
    format!("{}°", degrees.round_ties_even() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_reduce() {
        assert_eq!(format_measurement(256.0, 1024.0, ValueFormat::Fraction).unwrap(), "1/4");
        assert_eq!(format_measurement(480.0, 1024.0, ValueFormat::Fraction).unwrap(), "15/32");
        assert_eq!(format_measurement(1024.0, 1024.0, ValueFormat::Fraction).unwrap(), "1");
        assert_eq!(format_measurement(0.0, 1024.0, ValueFormat::Fraction).unwrap(), "0");
    }

    #[test]
    fn fraction_rounds_length_first() {
        assert_eq!(format_measurement(255.6, 1024.0, ValueFormat::Fraction).unwrap(), "1/4");
        // Ties round to even.
        assert_eq!(format_measurement(2.5, 4.0, ValueFormat::Fraction).unwrap(), "1/2");
    }

    #[test]
    fn decimals_keep_a_fraction_digit() {
        assert_eq!(format_measurement(1.0, 3.0, ValueFormat::decimal()).unwrap(), "0.333");
        assert_eq!(format_measurement(2048.0, 1024.0, ValueFormat::decimal()).unwrap(), "2.0");
        assert_eq!(
            format_measurement(10.0, 4.0, ValueFormat::Decimal { precision: 0 }).unwrap(),
            "2.0"
        );
    }

    #[test]
    fn zero_reference_is_an_error() {
        assert_eq!(
            format_measurement(10.0, 0.0, ValueFormat::decimal()),
            Err(DimensionError::ZeroReference)
        );
    }

    #[test]
    fn fractional_reference_needs_whole_number() {
        assert_eq!(
            format_measurement(10.0, 2.5, ValueFormat::Fraction),
            Err(DimensionError::NonIntegralReference { reference: 2.5 })
        );
    }

    #[test]
    fn degrees() {
        assert_eq!(format_degrees(59.999999), "60°");
        assert_eq!(format_degrees(120.0), "120°");
    }

    #[test]
    fn extents_grow_with_text() {
        let short = TextExtent::measure("1", 24.0);
        let long = TextExtent::measure("15/32", 24.0);
        assert!(long.width > short.width);
        assert_eq!(short.height, 24.0);
        assert!(long.half_diagonal() > long.width / 2.0);
    }
}
