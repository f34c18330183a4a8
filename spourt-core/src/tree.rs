use crate::{
    config::Config,
    error::{TreeError, TreeResult},
    shoot::{Shoot, Side},
    stem::{Stem, TreeShape},
    types::{ShootId, StemId},
};
use rand::Rng;
use tracing::{debug, trace, warn};

/// The trunk: stems ordered from the root (id `0`) to the tip.
///
/// The tree-wide [`TreeShape`] is stored here once. Stems only hold what
/// is derived from it, so every change to the shape is followed by a
/// root-to-tip [`Tree::prepare`].
#[derive(Debug)]
pub struct Tree {
    shape: TreeShape,
    stems: Vec<Stem>,
    next_shoot_id: ShootId,
}

impl Tree {
    /// Creates a tree holding only its root.
    pub fn new(shape: TreeShape, cfg: &Config) -> Self {
        Self {
            shape,
            stems: vec![Stem::root(shape, cfg)],
            next_shoot_id: 0,
        }
    }

    pub fn shape(&self) -> TreeShape {
        self.shape
    }

    pub fn stems(&self) -> &[Stem] {
        &self.stems
    }

    pub fn stem(&self, id: StemId) -> Option<&Stem> {
        self.stems.get(id)
    }

    pub fn stem_mut(&mut self, id: StemId) -> Option<&mut Stem> {
        self.stems.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.stems.len()
    }

    /// Never true for a tree built with [`Tree::new`]; only reachable by
    /// taking the tree apart.
    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }

    /// Id of the topmost stem.
    pub fn tip(&self) -> StemId {
        self.stems.len().saturating_sub(1)
    }

    /// Appends a stem above the tip and computes its state.
    ///
    /// The shape is left alone, so the new stem is usually above
    /// `total_height` until [`Tree::increment_tree_height`] catches up.
    pub fn add_stem(&mut self, cfg: &Config) -> StemId {
        let id = self.stems.len();
        let mut stem = Stem::unprepared();
        stem.update_state(id as u32, self.shape, cfg);
        self.stems.push(stem);

        debug!(id, width = self.stems[id].width, "stem added");
        id
    }

    /// Appends `count` stems without computing their state.
    ///
    /// They render as the not-ready diagnostic until [`Tree::prepare`] runs.
    pub fn extend_unprepared(&mut self, count: usize) {
        self.stems
            .extend(std::iter::repeat_with(Stem::unprepared).take(count));
    }

    /// Recomputes every stem from the root up.
    pub fn prepare(&mut self, cfg: &Config) {
        let shape = self.shape;
        for (position, stem) in self.stems.iter_mut().enumerate() {
            stem.update_state(position as u32, shape, cfg);
        }
    }

    /// Grows the tree by one level and one column of base width, then
    /// recomputes every stem.
    pub fn increment_tree_height(&mut self, cfg: &Config) {
        self.shape.total_height += 1;
        self.shape.base_width += 1;
        self.prepare(cfg);

        debug!(
            total_height = self.shape.total_height,
            base_width = self.shape.base_width,
            "tree height incremented"
        );
    }

    /// Detaches the stem at `id` together with every stem above it.
    ///
    /// The shape is not touched and the remaining stems keep their state,
    /// so the new tip is not flagged as the top until the tree is
    /// prepared against a matching shape.
    pub fn remove_stem(&mut self, id: StemId) -> TreeResult<Vec<Stem>> {
        if id == 0 {
            warn!("refusing to remove the root stem");
            return Err(TreeError::RootRemoval);
        }
        if id >= self.stems.len() {
            return Err(TreeError::UnknownStem(id));
        }
        Ok(self.stems.split_off(id))
    }

    /// Attaches a new shoot to the stem `id` on a random side.
    ///
    /// Without an explicit `shoot_id` the shoot gets the next id from the
    /// tree's counter. An explicit id already present on that stem is
    /// replaced.
    pub fn add_shoot(
        &mut self,
        id: StemId,
        shoot_id: Option<ShootId>,
        rng: &mut impl Rng,
    ) -> TreeResult<ShootId> {
        let stem = self.stems.get_mut(id).ok_or(TreeError::UnknownStem(id))?;

        let shoot_id = match shoot_id {
            Some(explicit) => {
                self.next_shoot_id = self.next_shoot_id.max(explicit.wrapping_add(1));
                explicit
            }
            None => {
                let fresh = self.next_shoot_id;
                self.next_shoot_id = self.next_shoot_id.wrapping_add(1);
                fresh
            }
        };

        let side = Side::random(rng);
        stem.add_shoot(Shoot::new(shoot_id, side));

        trace!(stem = id, shoot = shoot_id, ?side, "shoot sprouted");
        Ok(shoot_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::stem_width;
    use rand::{SeedableRng, rngs::StdRng};

    fn tree_with_stems(total_height: u32, base_width: u32, extra: usize) -> Tree {
        let cfg = Config::default();
        let mut tree = Tree::new(TreeShape::new(total_height, base_width), &cfg);
        for _ in 0..extra {
            tree.add_stem(&cfg);
        }
        tree
    }

    #[test]
    fn new_tree_holds_only_a_ready_root() {
        let tree = tree_with_stems(10, 5, 0);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.tip(), 0);
        let root = &tree.stems()[0];
        assert_eq!(root.position, 0);
        assert!(root.is_ready);
        assert_eq!(root.width, 5);
    }

    #[test]
    fn add_stem_links_above_the_tip() {
        let cfg = Config::default();
        let mut tree = tree_with_stems(10, 5, 0);

        let id = tree.add_stem(&cfg);

        assert_eq!(id, 1);
        assert_eq!(tree.tip(), 1);
        let stem = &tree.stems()[1];
        assert_eq!(stem.position, 1);
        assert!(stem.is_ready);
        assert_eq!(stem.width, stem_width(1, tree.shape(), &cfg));
    }

    #[test]
    fn increment_recomputes_every_stem_with_new_shape() {
        let cfg = Config::default();
        let mut tree = tree_with_stems(10, 5, 1);

        tree.increment_tree_height(&cfg);

        assert_eq!(tree.shape(), TreeShape::new(11, 6));
        let second = &tree.stems()[1];
        // 65 + 35 * (1 - 1/11) = 96.8..%, of 6 is 5.8.
        assert_eq!(second.width, 5);
        assert_eq!(second.width, stem_width(1, TreeShape::new(11, 6), &cfg));
        assert_eq!(tree.stems()[0].width, 6);
    }

    #[test]
    fn increment_keeps_widths_consistent_root_to_tip() {
        let cfg = Config::default();
        let mut tree = tree_with_stems(20, 5, 20);

        for _ in 0..10 {
            let tip = tree.tip();
            tree.add_stem(&cfg);
            tree.increment_tree_height(&cfg);

            let shape = tree.shape();
            for (position, stem) in tree.stems().iter().enumerate() {
                assert_eq!(stem.position, position as u32);
                assert_eq!(stem.width, stem_width(position as u32, shape, &cfg));
            }
            assert!(
                tree.stems().windows(2).all(|w| w[1].width <= w[0].width),
                "width grew with height after step from tip {tip}"
            );
        }
    }

    #[test]
    fn exactly_one_top_after_a_growth_cycle() {
        let cfg = Config::default();
        let mut tree = tree_with_stems(20, 5, 20);

        for _ in 0..5 {
            tree.add_stem(&cfg);
            tree.increment_tree_height(&cfg);

            let tops: Vec<StemId> = tree
                .stems()
                .iter()
                .enumerate()
                .filter(|(_, s)| s.is_top)
                .map(|(id, _)| id)
                .collect();
            assert_eq!(tops, vec![tree.tip()]);
        }
    }

    #[test]
    fn unprepared_stems_become_ready_after_prepare() {
        let cfg = Config::default();
        let mut tree = tree_with_stems(20, 5, 0);

        tree.extend_unprepared(20);
        assert_eq!(tree.len(), 21);
        assert!(tree.stems()[1..].iter().all(|s| !s.is_ready));

        tree.prepare(&cfg);

        assert!(tree.stems().iter().all(|s| s.is_ready));
        assert!(tree.stems()[20].is_top);
    }

    #[test]
    fn remove_stem_detaches_it_and_everything_above() {
        let mut tree = tree_with_stems(10, 5, 4);

        let detached = tree.remove_stem(3).expect("stem 3 exists");

        assert_eq!(detached.len(), 2);
        assert_eq!(detached[0].position, 3);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.tip(), 2);
    }

    #[test]
    fn remove_stem_rejects_root_and_unknown_ids() {
        let mut tree = tree_with_stems(10, 5, 2);

        assert_eq!(tree.remove_stem(0).unwrap_err(), TreeError::RootRemoval);
        assert_eq!(tree.remove_stem(3).unwrap_err(), TreeError::UnknownStem(3));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn add_shoot_hands_out_unique_ids() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut tree = tree_with_stems(10, 5, 2);

        let a = tree.add_shoot(1, None, &mut rng).unwrap();
        let b = tree.add_shoot(1, None, &mut rng).unwrap();
        let c = tree.add_shoot(2, None, &mut rng).unwrap();

        assert_eq!((a, b, c), (0, 1, 2));
        assert_eq!(tree.stems()[1].shoots().len(), 2);
        assert_eq!(tree.stems()[2].shoots().len(), 1);
    }

    #[test]
    fn add_shoot_with_explicit_id_overwrites() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut tree = tree_with_stems(10, 5, 1);

        tree.add_shoot(1, Some(7), &mut rng).unwrap();
        tree.add_shoot(1, Some(7), &mut rng).unwrap();
        let next = tree.add_shoot(1, None, &mut rng).unwrap();

        assert_eq!(tree.stems()[1].shoots().len(), 2);
        assert_eq!(next, 8, "counter skips past explicit ids");
    }

    #[test]
    fn add_shoot_on_unknown_stem_fails() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut tree = tree_with_stems(10, 5, 0);

        assert_eq!(
            tree.add_shoot(4, None, &mut rng).unwrap_err(),
            TreeError::UnknownStem(4)
        );
    }
}
