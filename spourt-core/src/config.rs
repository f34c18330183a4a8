use std::time::Duration;

/// How the crown above the tip is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopStyle {
    /// No crown.
    Hidden,
    /// Smooth inverted-parabola profile.
    Layered,
    /// Same profile with random width and offset jitter per layer.
    Jittered,
}

#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Stem width at the tip, as a percentage of the base width.
    pub min_percent: f64,
    /// Stem width at the root, as a percentage of the base width.
    pub max_percent: f64,
    /// Left margin, in columns, of a stem as wide as the base.
    pub screen_offset: u32,
    /// Keep every stem at least one glyph wide.
    pub clamp_min_width: bool,

    /// Glyph filling a stem line.
    pub stem_glyph: char,
    /// Glyph marking a shoot layer left of the stem.
    pub left_shoot_glyph: char,
    /// Glyph marking a shoot layer right of the stem.
    pub right_shoot_glyph: char,
    /// Glyph filling a crown line.
    pub top_glyph: char,
    /// How the crown above the tip is drawn.
    pub top_style: TopStyle,

    /// Chance per stem per growth step of sprouting or growing a shoot.
    pub shoot_chance: f64,
    /// Chance that a growing shoot extends its last layer outward.
    pub shoot_extend_chance: f64,

    /// Height of the tree before the first growth step.
    pub initial_height: u32,
    /// Base width of the tree before the first growth step.
    pub initial_base_width: u32,
    /// Number of growth steps the animation runs.
    pub growth_steps: usize,
    /// Pause between two frames.
    pub frame_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_percent: 65.0,
            max_percent: 100.0,
            screen_offset: 40,
            clamp_min_width: true,
            stem_glyph: '*',
            left_shoot_glyph: '/',
            right_shoot_glyph: '\\',
            top_glyph: '#',
            top_style: TopStyle::Layered,
            shoot_chance: 0.3,
            shoot_extend_chance: 0.6,
            initial_height: 20,
            initial_base_width: 5,
            growth_steps: 20,
            frame_interval: Duration::from_millis(300),
        }
    }
}
