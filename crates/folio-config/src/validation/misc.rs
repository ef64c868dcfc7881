//! Scroll, performance and project catalog validation.

use crate::schema::FolioConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_scroll(errors: &mut Vec<String>, config: &FolioConfig) {
    validate_range_f64(
        errors,
        "scroll.reveal_start",
        config.scroll.reveal_start,
        0.0,
        1.0,
    );
    validate_range_f64(
        errors,
        "scroll.active_section_offset",
        config.scroll.active_section_offset,
        0.0,
        2000.0,
    );
    validate_range_f64(
        errors,
        "scroll.skill_duration",
        config.scroll.skill_duration,
        0.0,
        10.0,
    );
}

pub(crate) fn validate_performance(errors: &mut Vec<String>, config: &FolioConfig) {
    validate_range(
        errors,
        "performance.frame_rate",
        config.performance.frame_rate,
        1,
        240,
    );
    validate_range(
        errors,
        "performance.timing_samples",
        config.performance.timing_samples,
        1,
        10_000,
    );
}

pub(crate) fn validate_projects(errors: &mut Vec<String>, config: &FolioConfig) {
    for (i, project) in config.projects.iter().enumerate() {
        if project.title.trim().is_empty() {
            errors.push(format!("projects[{i}].title must not be empty"));
        }
    }
}
