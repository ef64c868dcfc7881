/// Full-screen overlay showing one enlarged image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePreview {
    source: Option<String>,
    visible: bool,
}

impl ImagePreview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `src`, replacing whatever was shown before.
    pub fn show(&mut self, src: impl Into<String>) {
        self.source = Some(src.into());
        self.visible = true;
    }

    /// Hide the overlay. The last source is kept for the fade-out.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}
