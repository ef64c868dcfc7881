pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, FolioError, FxError};
pub use events::HostEvent;
pub use types::{Color, Point, Rect, Viewport};

pub type Result<T> = std::result::Result<T, FolioError>;
