//! Shared range-validation helpers used by all domain validators.

use folio_common::Color;

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float). NaN is always out of range.
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if value.is_nan() || value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is not a `#rrggbb` or `#rrggbbaa` color.
pub(crate) fn validate_hex_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if Color::from_hex(value).is_none() {
        errors.push(format!("{name} = {value:?} is not a hex color"));
    }
}
