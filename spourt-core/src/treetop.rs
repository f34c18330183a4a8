//! The cloud-like crown drawn above the tip.
//!
//! A [`TreeTop`] is never stored in the tree; it is recomputed from the
//! current [`TreeShape`] every time the tree is rendered.

use crate::{
    config::{Config, TopStyle},
    stem::{TreeShape, glyph_run},
};
use rand::Rng;

/// Crown width at its widest layer, in multiples of the base width.
const MAX_WIDTH_FACTOR: i64 = 5;
/// Largest sideways shift of a jittered layer.
const MAX_OFFSET_JITTER: i64 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TopLayer {
    pub offset: u32,
    pub size: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeTop {
    pub layers: Vec<TopLayer>,
}

/// Number of crown layers for a tree of `total_height`.
pub fn layer_count(total_height: u32) -> usize {
    let log = (f64::from(total_height) + 1.0).log2().floor() as usize;
    log.max(2)
}

impl TreeTop {
    /// Computes the crown for `shape`.
    ///
    /// Each layer widens the base by an inverted parabola over the
    /// layer's progress through the crown, so the crown is widest in the
    /// middle and as wide as the base at the first layer. With
    /// [`TopStyle::Jittered`] each layer also gets a random width
    /// variation and a random sideways shift. [`TopStyle::Hidden`] yields
    /// an empty crown.
    pub fn compute(shape: TreeShape, cfg: &Config, rng: &mut impl Rng) -> Self {
        if cfg.top_style == TopStyle::Hidden {
            return Self::default();
        }

        let base = i64::from(shape.base_width);
        let max_top_width = base * MAX_WIDTH_FACTOR;
        let count = layer_count(shape.total_height);

        let layers = (0..count)
            .map(|layer| {
                let progress = layer as f64 / count as f64;
                let curve = 1.0 - (progress - 0.5).powi(2) * 4.0;
                let mut expansion = ((max_top_width - base) as f64 * curve).floor() as i64;
                let mut shift = 0;

                if cfg.top_style == TopStyle::Jittered {
                    let spread = base / 3;
                    expansion += rng.random_range(-spread..=spread);
                    shift = rng.random_range(-MAX_OFFSET_JITTER..=MAX_OFFSET_JITTER);
                }

                let size = (base + expansion).max(1);
                // Floor division keeps wide layers centered over the base.
                let offset = (i64::from(cfg.screen_offset) + (base - size).div_euclid(2) + shift)
                    .max(0);

                TopLayer {
                    offset: offset as u32,
                    size: size as u32,
                }
            })
            .collect();

        Self { layers }
    }

    pub fn lines(&self, cfg: &Config) -> Vec<String> {
        self.layers
            .iter()
            .map(|l| glyph_run(l.offset, cfg.top_glyph, l.size))
            .collect()
    }
}
