use folio_config::schema::ScrollConfig;

use super::trigger::{ScrollTrigger, TriggerAction, TriggerMode};
use crate::tween::{Ease, Tween};

const REVEAL_DURATION: f32 = 0.8;
const REVEAL_RISE: f32 = 40.0;

/// Skill progress bar whose horizontal scale grows in when scrolled into view.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillBar {
    doc_top: f32,
    target: f32,
    trigger: ScrollTrigger,
    scale: Tween,
}

impl SkillBar {
    /// `width_percent` is the bar's fill level, 0-100.
    pub fn new(doc_top: f32, width_percent: f32, config: &ScrollConfig) -> Self {
        let target = (width_percent / 100.0).clamp(0.0, 1.0);
        Self {
            doc_top,
            target,
            trigger: ScrollTrigger::new(config.reveal_start as f32, TriggerMode::Reversible),
            scale: Tween::new(0.0, target, config.skill_duration as f32, config.skill_ease.into()),
        }
    }

    pub(crate) fn on_scroll(&mut self, scroll_y: f32, viewport_height: f32) {
        match self.trigger.update(self.doc_top - scroll_y, viewport_height) {
            Some(TriggerAction::Play) => self.scale.play(),
            Some(TriggerAction::Reverse) => self.scale.reverse(),
            None => {}
        }
    }

    pub(crate) fn advance(&mut self, dt: f32) {
        self.scale.advance(dt);
    }

    /// Current horizontal scale, `0` collapsed to `width_percent / 100` full.
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}

/// One-shot fade-and-rise entrance for a block of content.
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    doc_top: f32,
    trigger: ScrollTrigger,
    opacity: Tween,
    rise: Tween,
}

impl Reveal {
    pub fn new(doc_top: f32, config: &ScrollConfig) -> Self {
        Self {
            doc_top,
            trigger: ScrollTrigger::new(config.reveal_start as f32, TriggerMode::Once),
            opacity: Tween::at(0.0, Ease::Power3Out),
            rise: Tween::at(REVEAL_RISE, Ease::Power3Out),
        }
    }

    pub(crate) fn on_scroll(&mut self, scroll_y: f32, viewport_height: f32) {
        if let Some(TriggerAction::Play) = self.trigger.update(self.doc_top - scroll_y, viewport_height) {
            self.opacity.retarget(1.0, REVEAL_DURATION);
            self.rise.retarget(0.0, REVEAL_DURATION);
        }
    }

    pub(crate) fn advance(&mut self, dt: f32) {
        self.opacity.advance(dt);
        self.rise.advance(dt);
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    /// Remaining downward offset in pixels.
    pub fn offset_y(&self) -> f32 {
        self.rise.value()
    }

    pub fn is_revealed(&self) -> bool {
        self.trigger.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_bar_grows_to_data_width() {
        let config = ScrollConfig::default();
        let mut bar = SkillBar::new(1500.0, 85.0, &config);

        bar.on_scroll(0.0, 800.0);
        bar.advance(1.0);
        assert_eq!(bar.scale(), 0.0);

        // top = 1500 - 900 = 600 <= 720
        bar.on_scroll(900.0, 800.0);
        bar.advance(2.0);
        assert!((bar.scale() - 0.85).abs() < 1e-5);
    }

    #[test]
    fn skill_bar_reverses_when_scrolled_back() {
        let config = ScrollConfig::default();
        let mut bar = SkillBar::new(1500.0, 60.0, &config);
        bar.on_scroll(900.0, 800.0);
        bar.advance(2.0);

        bar.on_scroll(0.0, 800.0);
        bar.advance(0.1);
        // Rewinds the playhead: 1.4s into the 1.5s grow-in curve
        let expected = 0.6 * Ease::Power3Out.apply(1.4 / 1.5);
        assert!((bar.scale() - expected).abs() < 1e-5);
        bar.advance(2.0);
        assert_eq!(bar.scale(), 0.0);
    }

    #[test]
    fn skill_bar_reversed_mid_growth_retraces_elapsed_time() {
        let config = ScrollConfig::default();
        let mut bar = SkillBar::new(1500.0, 80.0, &config);
        bar.on_scroll(900.0, 800.0);
        bar.advance(0.4);
        assert!(bar.scale() > 0.0);

        bar.on_scroll(0.0, 800.0);
        bar.advance(0.4);
        assert_eq!(bar.scale(), 0.0);

        bar.on_scroll(900.0, 800.0);
        bar.advance(2.0);
        assert!((bar.scale() - 0.8).abs() < 1e-5);
    }

    #[test]
    fn reveal_runs_once() {
        let config = ScrollConfig::default();
        let mut reveal = Reveal::new(1000.0, &config);
        assert!((reveal.offset_y() - 40.0).abs() < 1e-6);

        reveal.on_scroll(400.0, 800.0);
        reveal.advance(0.8);
        assert!((reveal.opacity() - 1.0).abs() < 1e-6);
        assert!(reveal.offset_y().abs() < 1e-6);

        reveal.on_scroll(0.0, 800.0);
        reveal.advance(0.8);
        assert!((reveal.opacity() - 1.0).abs() < 1e-6);
        assert!(reveal.is_revealed());
    }
}
