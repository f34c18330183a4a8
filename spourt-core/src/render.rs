use crate::{config::Config, tree::Tree, treetop::TreeTop};
use rand::Rng;

/// Paints the whole tree as text lines, top line first.
///
/// The crown (if any) comes first, followed by every stem from the tip
/// down to the root, each stem trailed by its shoot layers.
pub fn render_tree(tree: &Tree, cfg: &Config, rng: &mut impl Rng) -> Vec<String> {
    let shape = tree.shape();
    let mut lines = TreeTop::compute(shape, cfg, rng).lines(cfg);

    for stem in tree.stems().iter().rev() {
        lines.extend(stem.render(shape, cfg));
    }
    lines
}
