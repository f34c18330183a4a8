/// Identifier for a stem in a [`crate::tree::Tree`].
///
/// This is an index into `Tree::stems` and doubles as the stem's height
/// level: the root is `0`, the stem above it `1`, and so on.
pub type StemId = usize;

/// Identifier for a shoot, unique within one [`crate::tree::Tree`].
pub type ShootId = u32;
