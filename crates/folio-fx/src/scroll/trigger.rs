/// How a trigger behaves once it has fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerMode {
    /// Fire on the first crossing and never again.
    Once,
    /// Play when crossing down past the start line, reverse when scrolled back.
    Reversible,
}

/// What the owner of a trigger should do with its animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerAction {
    Play,
    Reverse,
}

/// Fires when an element's top edge crosses a line at a fixed fraction of
/// the viewport height.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTrigger {
    start: f32,
    mode: TriggerMode,
    active: bool,
    spent: bool,
}

impl ScrollTrigger {
    /// `start` is the viewport fraction of the start line (0.9 = 90% down).
    pub fn new(start: f32, mode: TriggerMode) -> Self {
        Self {
            start,
            mode,
            active: false,
            spent: false,
        }
    }

    /// Feed the element's top edge in viewport coordinates.
    pub fn update(&mut self, top: f32, viewport_height: f32) -> Option<TriggerAction> {
        if self.spent {
            return None;
        }
        let crossed = top <= self.start * viewport_height;
        match (self.active, crossed) {
            (false, true) => {
                self.active = true;
                if self.mode == TriggerMode::Once {
                    self.spent = true;
                }
                Some(TriggerAction::Play)
            }
            (true, false) => {
                self.active = false;
                Some(TriggerAction::Reverse)
            }
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn mode(&self) -> TriggerMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_fires_a_single_time() {
        let mut trigger = ScrollTrigger::new(0.9, TriggerMode::Once);
        assert_eq!(trigger.update(1000.0, 800.0), None);
        assert_eq!(trigger.update(720.0, 800.0), Some(TriggerAction::Play));
        assert_eq!(trigger.update(1000.0, 800.0), None);
        assert_eq!(trigger.update(100.0, 800.0), None);
    }

    #[test]
    fn reversible_plays_and_reverses() {
        let mut trigger = ScrollTrigger::new(0.9, TriggerMode::Reversible);
        assert_eq!(trigger.update(700.0, 800.0), Some(TriggerAction::Play));
        assert_eq!(trigger.update(600.0, 800.0), None);
        assert_eq!(trigger.update(721.0, 800.0), Some(TriggerAction::Reverse));
        assert_eq!(trigger.update(900.0, 800.0), None);
        assert_eq!(trigger.update(10.0, 800.0), Some(TriggerAction::Play));
        assert!(trigger.is_active());
    }
}
