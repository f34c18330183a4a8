use crate::{
    config::Config,
    shoot::{Shoot, Side},
};

/// Line emitted in place of a stem whose state was never computed.
pub const NOT_READY_MESSAGE: &str = "The tree isn't initialized yet.";

/// Tree-wide values every stem's geometry is derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeShape {
    pub total_height: u32,
    pub base_width: u32,
}

impl TreeShape {
    pub fn new(total_height: u32, base_width: u32) -> Self {
        Self {
            total_height,
            base_width,
        }
    }
}

/// Width of the stem at `position` for the given shape.
///
/// The width is interpolated linearly from `max_percent` of the base
/// width at the root to `min_percent` at `total_height`, then floored.
/// A zero-height tree is as wide as its base everywhere.
pub fn stem_width(position: u32, shape: TreeShape, cfg: &Config) -> u32 {
    if shape.total_height == 0 {
        return shape.base_width;
    }

    let ratio = position as f64 / shape.total_height as f64;
    let percent = cfg.min_percent + (cfg.max_percent - cfg.min_percent) * (1.0 - ratio);
    let width = (percent / 100.0 * shape.base_width as f64).floor().max(0.0) as u32;

    if cfg.clamp_min_width { width.max(1) } else { width }
}

/// One height level of the trunk.
///
/// `width` and `is_top` are meaningless until `is_ready` is set by
/// [`Stem::update_state`] (or by [`Stem::root`]).
#[derive(Clone, Debug, Default)]
pub struct Stem {
    pub position: u32,
    pub width: u32,
    pub is_top: bool,
    pub is_ready: bool,
    shoots: Vec<Shoot>,
}

impl Stem {
    /// A stem whose state has not been computed yet.
    pub fn unprepared() -> Self {
        Self::default()
    }

    /// The base of the chain, ready on construction.
    pub fn root(shape: TreeShape, cfg: &Config) -> Self {
        let mut stem = Self::unprepared();
        stem.update_state(0, shape, cfg);
        stem
    }

    pub fn update_state(&mut self, position: u32, shape: TreeShape, cfg: &Config) {
        self.position = position;
        self.width = stem_width(position, shape, cfg);
        self.is_top = position == shape.total_height;
        self.is_ready = true;
    }

    pub fn shoots(&self) -> &[Shoot] {
        &self.shoots
    }

    pub fn shoots_mut(&mut self) -> &mut [Shoot] {
        &mut self.shoots
    }

    /// Attaches a shoot, replacing and returning any shoot with the same id.
    pub fn add_shoot(&mut self, shoot: Shoot) -> Option<Shoot> {
        match self.shoots.iter_mut().find(|s| s.id == shoot.id) {
            Some(existing) => Some(std::mem::replace(existing, shoot)),
            None => {
                self.shoots.push(shoot);
                None
            }
        }
    }

    /// Left margin of the stem line, centering it over a base-wide stem.
    pub fn offset(&self, shape: TreeShape, cfg: &Config) -> u32 {
        cfg.screen_offset + shape.base_width.saturating_sub(self.width) / 2
    }

    /// Text lines for this stem: the trunk segment, then one line per
    /// shoot layer.
    pub fn render(&self, shape: TreeShape, cfg: &Config) -> Vec<String> {
        if !self.is_ready {
            return vec![NOT_READY_MESSAGE.to_owned()];
        }

        let offset = self.offset(shape, cfg);
        let mut lines = Vec::with_capacity(1 + self.shoots.len());
        lines.push(glyph_run(offset, cfg.stem_glyph, self.width));

        for shoot in &self.shoots {
            for layer in shoot.layers() {
                let (column, glyph) = match shoot.side {
                    Side::Left => (
                        offset.saturating_sub(1 + layer.out),
                        cfg.left_shoot_glyph,
                    ),
                    Side::Right => (offset + self.width + layer.out, cfg.right_shoot_glyph),
                };
                lines.push(glyph_run(column, glyph, 1));
            }
        }
        lines
    }
}

/// `pad` spaces followed by `count` copies of `glyph`.
pub(crate) fn glyph_run(pad: u32, glyph: char, count: u32) -> String {
    let mut line = String::with_capacity((pad + count) as usize);
    line.extend(std::iter::repeat_n(' ', pad as usize));
    line.extend(std::iter::repeat_n(glyph, count as usize));
    line
}
