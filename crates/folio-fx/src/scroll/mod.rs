//! Scroll-driven effects: progress bar, active section, reveals and skill bars.

mod animated;
mod trigger;

pub use animated::{Reveal, SkillBar};
pub use trigger::{ScrollTrigger, TriggerAction, TriggerMode};

use folio_config::schema::ScrollConfig;
use tracing::debug;

/// Fraction of the scrollable range already scrolled, in `[0,1]`.
///
/// A document no taller than the viewport reports 0.
pub fn scroll_progress(scroll_top: f32, document_height: f32, viewport_height: f32) -> f32 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

/// A page section the navigation highlights.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    /// Offset of the section's top from the document top.
    pub top: f32,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f32) -> Self {
        Self { id: id.into(), top }
    }
}

/// Index of the last section, in document order, whose `top - offset` has
/// been reached.
pub fn active_section_index(sections: &[Section], scroll_y: f32, offset: f32) -> Option<usize> {
    sections.iter().rposition(|s| scroll_y >= s.top - offset)
}

pub fn active_section<'a>(sections: &'a [Section], scroll_y: f32, offset: f32) -> Option<&'a Section> {
    active_section_index(sections, scroll_y, offset).and_then(|i| sections.get(i))
}

/// All scroll-linked state for one page.
#[derive(Debug, Clone)]
pub struct ScrollEffects {
    config: ScrollConfig,
    sections: Vec<Section>,
    skill_bars: Vec<SkillBar>,
    reveals: Vec<Reveal>,
    progress: f32,
    active: Option<usize>,
}

impl ScrollEffects {
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            config: config.clone(),
            sections: Vec::new(),
            skill_bars: Vec::new(),
            reveals: Vec::new(),
            progress: 0.0,
            active: None,
        }
    }

    /// Register a section. Sections must be added in document order.
    pub fn add_section(&mut self, id: impl Into<String>, top: f32) {
        self.sections.push(Section::new(id, top));
    }

    pub fn add_skill_bar(&mut self, doc_top: f32, width_percent: f32) {
        self.skill_bars
            .push(SkillBar::new(doc_top, width_percent, &self.config));
    }

    pub fn add_reveal(&mut self, doc_top: f32) {
        self.reveals.push(Reveal::new(doc_top, &self.config));
    }

    /// Apply a scroll position: updates progress, active section and triggers.
    pub fn on_scroll(&mut self, scroll_y: f32, document_height: f32, viewport_height: f32) {
        self.progress = scroll_progress(scroll_y, document_height, viewport_height);

        let offset = self.config.active_section_offset as f32;
        let active = active_section_index(&self.sections, scroll_y, offset);
        if active != self.active {
            debug!(
                section = active.map(|i| self.sections[i].id.as_str()),
                "active section changed"
            );
            self.active = active;
        }

        for bar in &mut self.skill_bars {
            bar.on_scroll(scroll_y, viewport_height);
        }
        for reveal in &mut self.reveals {
            reveal.on_scroll(scroll_y, viewport_height);
        }
    }

    pub fn advance(&mut self, dt: f32) {
        for bar in &mut self.skill_bars {
            bar.advance(dt);
        }
        for reveal in &mut self.reveals {
            reveal.advance(dt);
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn active_section(&self) -> Option<&Section> {
        self.active.and_then(|i| self.sections.get(i))
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn skill_bars(&self) -> &[SkillBar] {
        &self.skill_bars
    }

    pub fn reveals(&self) -> &[Reveal] {
        &self.reveals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<Section> {
        vec![
            Section::new("home", 0.0),
            Section::new("about", 900.0),
            Section::new("projects", 1800.0),
        ]
    }

    #[test]
    fn progress_is_clamped() {
        assert!((scroll_progress(500.0, 1800.0, 800.0) - 0.5).abs() < 1e-6);
        assert_eq!(scroll_progress(-20.0, 1800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(5000.0, 1800.0, 800.0), 1.0);
    }

    #[test]
    fn unscrollable_page_has_zero_progress() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn active_section_uses_offset() {
        let sections = page();
        assert_eq!(active_section(&sections, 0.0, 200.0).map(|s| s.id.as_str()), Some("home"));
        assert_eq!(active_section(&sections, 699.0, 200.0).map(|s| s.id.as_str()), Some("home"));
        assert_eq!(active_section(&sections, 700.0, 200.0).map(|s| s.id.as_str()), Some("about"));
        assert_eq!(
            active_section(&sections, 5000.0, 200.0).map(|s| s.id.as_str()),
            Some("projects")
        );
    }

    #[test]
    fn effects_and_free_function_agree_on_active_section() {
        let offset = ScrollConfig::default().active_section_offset as f32;
        let mut effects = ScrollEffects::new(&ScrollConfig::default());
        for s in page() {
            effects.add_section(s.id, s.top);
        }
        for scroll_y in [0.0, 650.0, 899.0 - offset, 900.0 - offset, 1700.0, 4000.0] {
            effects.on_scroll(scroll_y, 2800.0, 800.0);
            assert_eq!(
                effects.active_section(),
                active_section(effects.sections(), scroll_y, offset),
                "scroll_y = {scroll_y}"
            );
        }
        assert_eq!(active_section_index(&page(), 1700.0, 200.0), Some(2));
        assert_eq!(active_section_index(&page(), 100.0, 0.0), Some(0));
    }

    #[test]
    fn no_active_section_before_first() {
        let sections = vec![Section::new("about", 900.0)];
        assert!(active_section(&sections, 100.0, 200.0).is_none());
    }

    #[test]
    fn effects_track_scroll() {
        let mut effects = ScrollEffects::new(&ScrollConfig::default());
        for s in page() {
            effects.add_section(s.id, s.top);
        }
        effects.add_skill_bar(1500.0, 90.0);
        effects.add_reveal(1000.0);

        effects.on_scroll(1000.0, 2800.0, 800.0);
        effects.advance(2.0);

        assert!((effects.progress() - 0.5).abs() < 1e-6);
        assert_eq!(effects.active_section().map(|s| s.id.as_str()), Some("about"));
        assert!((effects.skill_bars()[0].scale() - 0.9).abs() < 1e-5);
        assert!(effects.reveals()[0].is_revealed());
    }
}
