use crate::types::ShootId;
use rand::Rng;

/// Which side of the stem a shoot grows from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.random_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// One growth layer of a shoot.
///
/// `out` is how far the layer reaches away from the stem, `up` how many
/// levels it has climbed. A layer with both at zero has not started yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Layer {
    pub out: u32,
    pub up: u32,
}

impl Layer {
    #[inline]
    pub fn is_pristine(&self) -> bool {
        self.out == 0 && self.up == 0
    }
}

/// A side branch attached to a stem.
///
/// The side is chosen once and never changes; the layer list is never
/// empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shoot {
    pub id: ShootId,
    pub side: Side,
    layers: Vec<Layer>,
}

impl Shoot {
    pub fn new(id: ShootId, side: Side) -> Self {
        Self {
            id,
            side,
            layers: vec![Layer::default()],
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Grows the shoot by one step.
    ///
    /// With probability `extend_chance` the last layer reaches one column
    /// further out. Otherwise a new layer is started one level up; a
    /// pristine last layer is started in place instead of pushing another.
    pub fn grow(&mut self, extend_chance: f64, rng: &mut impl Rng) {
        let extend = rng.random_bool(extend_chance.clamp(0.0, 1.0));
        // `layers` is never empty, see `Shoot::new`.
        let last = self.layers.len() - 1;

        if extend {
            self.layers[last].out += 1;
        } else if self.layers[last].is_pristine() {
            self.layers[last].up = 1;
        } else {
            self.layers.push(Layer { out: 0, up: 1 });
        }
    }
}
