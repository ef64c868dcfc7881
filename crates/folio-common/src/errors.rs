use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FxError {
    #[error("unknown project: {0}")]
    UnknownProject(usize),

    #[error("project catalog is empty")]
    EmptyCatalog,

    #[error("no project is open")]
    NoProjectOpen,
}

#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fx(#[from] FxError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("particles.count = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: particles.count = 0"
        );
    }

    #[test]
    fn fx_error_display() {
        assert_eq!(FxError::UnknownProject(9).to_string(), "unknown project: 9");
        assert_eq!(FxError::EmptyCatalog.to_string(), "project catalog is empty");
        assert_eq!(FxError::NoProjectOpen.to_string(), "no project is open");
    }

    #[test]
    fn folio_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: FolioError = config_err.into();
        assert!(matches!(err, FolioError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn folio_error_from_fx() {
        let err: FolioError = FxError::UnknownProject(3).into();
        assert!(matches!(err, FolioError::Fx(FxError::UnknownProject(3))));
    }

    #[test]
    fn folio_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: FolioError = io_err.into();
        assert!(matches!(err, FolioError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn folio_error_other_variants() {
        let err = FolioError::Serialization("trailing comma".into());
        assert_eq!(err.to_string(), "serialization error: trailing comma");

        let err = FolioError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
