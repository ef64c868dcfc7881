//! Particle field validation.

use crate::schema::FolioConfig;

use super::helpers::{validate_hex_color, validate_range, validate_range_f64};

pub(crate) fn validate_particles(errors: &mut Vec<String>, config: &FolioConfig) {
    let p = &config.particles;

    validate_range(errors, "particles.count", p.count, 1, 2000);
    validate_range_f64(errors, "particles.speed", p.speed, 0.0, 10.0);
    validate_range_f64(errors, "particles.size_base", p.size_base, 0.0, 20.0);
    validate_range_f64(errors, "particles.size_variance", p.size_variance, 0.0, 20.0);
    if p.size_base + p.size_variance <= 0.0 {
        errors.push("particles.size_base + particles.size_variance must be positive".into());
    }

    validate_range_f64(errors, "particles.alpha_base", p.alpha_base, 0.0, 1.0);
    validate_range_f64(errors, "particles.alpha_variance", p.alpha_variance, 0.0, 1.0);
    let max_alpha = p.alpha_base + p.alpha_variance;
    if max_alpha <= 0.0 || max_alpha > 1.0 {
        errors.push(format!(
            "particles.alpha_base + particles.alpha_variance = {max_alpha} must be in (0, 1]"
        ));
    }

    validate_range_f64(errors, "particles.hue_base", p.hue_base, 0.0, 360.0);
    validate_range_f64(errors, "particles.hue_span", p.hue_span, 0.0, 360.0);
    validate_range_f64(errors, "particles.saturation", p.saturation, 0.0, 1.0);
    validate_range_f64(errors, "particles.lightness", p.lightness, 0.0, 1.0);

    // Repulsion
    validate_range_f64(
        errors,
        "particles.repulsion.radius",
        p.repulsion.radius,
        0.0,
        1000.0,
    );
    validate_range_f64(
        errors,
        "particles.repulsion.strength",
        p.repulsion.strength,
        0.0,
        1.0,
    );

    // Links
    validate_hex_color(errors, "particles.links.color", &p.links.color);
    validate_range_f64(errors, "particles.links.radius", p.links.radius, 0.0, 1000.0);
    validate_range_f64(errors, "particles.links.opacity", p.links.opacity, 0.0, 1.0);
    validate_range_f64(errors, "particles.links.falloff", p.links.falloff, 0.0, 1.0);
    validate_range_f64(errors, "particles.links.width", p.links.width, 0.0, 10.0);
    validate_range_f64(
        errors,
        "particles.links.pointer_radius",
        p.links.pointer_radius,
        0.0,
        1000.0,
    );
    validate_range_f64(
        errors,
        "particles.links.pointer_opacity",
        p.links.pointer_opacity,
        0.0,
        1.0,
    );
    validate_range_f64(
        errors,
        "particles.links.pointer_width",
        p.links.pointer_width,
        0.0,
        10.0,
    );
}
