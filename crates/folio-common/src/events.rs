use serde::{Deserialize, Serialize};

use crate::types::Rect;

/// Input delivered by the host page between animation frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum HostEvent {
    PointerMove { x: f32, y: f32 },
    Resize { width: f32, height: f32 },
    Scroll { scroll_y: f32, document_height: f32 },
    HoverEnter,
    HoverLeave,
    MagneticMove { button: usize, bounds: Rect, x: f32, y: f32 },
    MagneticLeave { button: usize },
    #[serde(other)]
    Unknown,
}
