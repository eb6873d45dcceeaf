//! Conversion between display text and numbers.
//!
//! The display is text, so every operand crosses this boundary twice: once
//! when it is parsed out of the display and once when a result is written
//! back. Both directions are pure.

/// Render a number the way it appears on the display.
///
/// Integral values carry no fraction, non-finite values render as
/// `Infinity`, `-Infinity` and `NaN`, and very large or very small
/// magnitudes switch to exponent form with an explicit sign.
///
/// # Example
///
/// ```rust
/// use chaincalc::core::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // covers -0.0
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let rendered = format!("{value:e}");
        return match rendered.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => rendered,
        };
    }

    format!("{value}")
}

/// Parse the leading numeric part of a display string.
///
/// Trailing garbage after a valid prefix is ignored (`"3."` parses as 3),
/// `Infinity` is recognised with an optional sign, and text with no numeric
/// prefix yields `NaN`.
///
/// # Example
///
/// ```rust
/// use chaincalc::core::parse_number;
///
/// assert_eq!(parse_number("3."), 3.0);
/// assert_eq!(parse_number("0.25"), 0.25);
/// assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
/// assert!(parse_number("NaN").is_nan());
/// ```
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let (sign, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1.0, &trimmed[1..]),
        Some(b'+') => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };

    if unsigned.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    let end = numeric_prefix_len(unsigned);
    if end == 0 {
        return f64::NAN;
    }

    unsigned[..end]
        .parse::<f64>()
        .map(|value| sign * value)
        .unwrap_or(f64::NAN)
}

/// Length of the longest `digits [. digits] [e [+-] digits]` prefix.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let count_digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_digits = count_digits(0);
    let mut end = int_digits;
    let mut frac_digits = 0;

    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+') | Some(b'-')) {
            exp_start += 1;
        }
        let exp_digits = count_digits(exp_start);
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }

    end
}

/// Serde adapter storing numbers in their display form.
///
/// JSON has no representation for `NaN` or the infinities, and those are
/// ordinary calculator results, so records and checkpoints write the text.
pub(crate) mod as_text {
    use super::{format_number, parse_number};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_number(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(parse_number(&text))
    }

    pub mod option {
        use super::{format_number, parse_number};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Option<f64>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(v) => serializer.serialize_some(&format_number(*v)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<f64>, D::Error> {
            let text = Option::<String>::deserialize(deserializer)?;
            Ok(text.as_deref().map(parse_number))
        }
    }
}
