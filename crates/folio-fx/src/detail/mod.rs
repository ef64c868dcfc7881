//! Project detail view: catalog navigation and the image preview overlay.

mod navigator;
mod preview;

pub use navigator::{short_title, Project, ProjectNavigator};
pub use preview::ImagePreview;
