//! Glow orb and cursor validation.

use crate::schema::FolioConfig;

use super::helpers::{validate_hex_color, validate_range_f64};

pub(crate) fn validate_orbs(errors: &mut Vec<String>, config: &FolioConfig) {
    validate_range_f64(errors, "orbs.size", config.orbs.size, 0.0, 2000.0);

    if config.orbs.enabled && config.orbs.orbs.is_empty() {
        errors.push("orbs.orbs must contain at least one orb when orbs are enabled".into());
    }

    for (i, orb) in config.orbs.orbs.iter().enumerate() {
        validate_range_f64(errors, &format!("orbs.orbs[{i}].rate"), orb.rate, 0.001, 1.0);
        validate_hex_color(errors, &format!("orbs.orbs[{i}].color"), &orb.color);
    }
}

pub(crate) fn validate_cursor(errors: &mut Vec<String>, config: &FolioConfig) {
    validate_range_f64(
        errors,
        "cursor.ring_duration",
        config.cursor.ring_duration,
        0.0,
        5.0,
    );
    validate_range_f64(
        errors,
        "cursor.dot_duration",
        config.cursor.dot_duration,
        0.0,
        5.0,
    );
    validate_range_f64(
        errors,
        "cursor.magnetic_strength",
        config.cursor.magnetic_strength,
        0.0,
        1.0,
    );
}
