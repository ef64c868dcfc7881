//! Full configuration validation.
//!
//! Validates numeric ranges and color formats. Each domain has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod helpers;
mod misc;
mod orbs;
mod particles;


use crate::schema::FolioConfig;
use folio_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FolioConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    particles::validate_particles(&mut errors, config);
    orbs::validate_orbs(&mut errors, config);
    orbs::validate_cursor(&mut errors, config);
    misc::validate_scroll(&mut errors, config);
    misc::validate_performance(&mut errors, config);
    misc::validate_projects(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
