//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Folio Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[particles]
# enabled = true
# count = 150            # 1-2000
# speed = 0.4            # velocity = (rand - 0.5) * speed
# size_base = 0.1
# size_variance = 2.3
# alpha_base = 0.4       # base + variance must stay within (0, 1]
# alpha_variance = 0.6
# hue_base = 260.0       # degrees
# hue_span = 60.0
# saturation = 0.8
# lightness = 0.7
# seed = 42              # fixed layout; omit for a fresh one each session

[particles.repulsion]
# enabled = true
# radius = 150.0
# strength = 0.02

[particles.links]
# color = "#a78bfa"
# radius = 100.0         # particle-particle, exclusive
# opacity = 0.35
# falloff = 0.1
# width = 0.5
# pointer_radius = 120.0
# pointer_opacity = 0.3
# pointer_width = 1.0

[orbs]
# enabled = true
# size = 400.0           # orbs are centered on their point

# [[orbs.orbs]]
# color = "#a855f7"
# rate = 0.03            # 0.001-1.0, smaller = lazier follow
# offset_x = 0.0
# offset_y = 0.0

[cursor]
# enabled = true
# ring_duration = 0.15   # seconds
# ring_ease = "power2.out"   # linear, power2.out, power3.out, power2.inOut
# dot_duration = 0.0
# magnetic_strength = 0.3    # 0.0-1.0

[scroll]
# reveal_start = 0.9     # fraction of viewport height
# active_section_offset = 200.0
# skill_duration = 1.5
# skill_ease = "power3.out"

[performance]
# frame_rate = 60        # 1-240
# timing_samples = 120

[logging]
# level = "info"         # trace, debug, info, warn, error

# [[projects]]
# title = "Star Map (Star Map)"
# summary = "Interactive sky atlas"
# images = ["images/star-map-1.png"]
"##
    .to_string()
}
