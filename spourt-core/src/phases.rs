//! Growth phases run once per animation frame.
//!
//! A full step ([`grow_step`]) is:
//! 1. [`extension_phase`]: a new stem is appended above the tip and the
//!    tree's height and base width are bumped, recomputing every stem.
//! 2. [`shoot_phase`]: every stem gets a chance to sprout its first
//!    shoot and to grow one of its shoots.

use crate::{config::Config, tree::Tree, types::StemId};
use rand::{Rng, seq::IndexedMutRandom};
use tracing::trace;

/// Appends one stem above the tip and grows the tree around it.
///
/// ### Returns
/// The id of the new tip.
pub fn extension_phase(tree: &mut Tree, cfg: &Config) -> StemId {
    let id = tree.add_stem(cfg);
    tree.increment_tree_height(cfg);
    id
}

/// Rolls `cfg.shoot_chance` for every stem, root to tip.
///
/// On a hit, a stem without shoots sprouts one, then one of the stem's
/// shoots, picked at random, grows a step.
///
/// ### Returns
/// The ids of the stems whose roll hit, in order.
pub fn shoot_phase(tree: &mut Tree, cfg: &Config, rng: &mut impl Rng) -> Vec<StemId> {
    let chance = cfg.shoot_chance.clamp(0.0, 1.0);
    let mut touched = Vec::new();

    for id in 0..tree.len() {
        if !rng.random_bool(chance) {
            continue;
        }

        let has_shoots = tree.stem(id).is_some_and(|s| !s.shoots().is_empty());
        if !has_shoots && tree.add_shoot(id, None, rng).is_err() {
            continue;
        }

        if let Some(stem) = tree.stem_mut(id)
            && let Some(shoot) = stem.shoots_mut().choose_mut(rng)
        {
            shoot.grow(cfg.shoot_extend_chance, rng);
            trace!(stem = id, shoot = shoot.id, layers = shoot.layers().len(), "shoot grew");
        }
        touched.push(id);
    }
    touched
}

/// Runs one full growth step.
///
/// ### Returns
/// The id of the new tip.
pub fn grow_step(tree: &mut Tree, cfg: &Config, rng: &mut impl Rng) -> StemId {
    let tip = extension_phase(tree, cfg);
    shoot_phase(tree, cfg, rng);
    tip
}
