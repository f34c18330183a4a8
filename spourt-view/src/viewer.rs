//! Terminal animation driver for the tree.
//!
//! [`Viewer`] owns the tree, the configuration and the random source,
//! and paints one frame per growth step by clearing the screen and
//! printing the rendered lines.

use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    execute, queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use rand::{SeedableRng, rngs::StdRng};
use spourt_core::{
    config::Config,
    phases,
    render::render_tree,
    stem::TreeShape,
    tree::Tree,
};
use tracing::info;

/// Main state of the animation.
///
/// ### Fields
/// - `tree` - The tree being grown.
/// - `cfg` - Constants for taper, glyphs, chances and pacing.
/// - `rng` - Random source for shoots and crown jitter.
/// - `frame` - Number of growth steps taken so far.
pub struct Viewer {
    tree: Tree,
    cfg: Config,
    rng: StdRng,
    frame: usize,
}

impl Viewer {
    /// Creates a viewer with the default configuration and an OS-seeded
    /// random source.
    pub fn new() -> Self {
        Self::with_parts(Config::default(), StdRng::from_os_rng())
    }

    /// Creates a viewer from an explicit configuration and random source.
    ///
    /// The tree starts as a root plus `cfg.initial_height` stems, all
    /// prepared against the initial shape.
    pub fn with_parts(cfg: Config, rng: StdRng) -> Self {
        Self {
            tree: Self::initial_tree(&cfg),
            cfg,
            rng,
            frame: 0,
        }
    }

    fn initial_tree(cfg: &Config) -> Tree {
        let shape = TreeShape::new(cfg.initial_height, cfg.initial_base_width);
        let mut tree = Tree::new(shape, cfg);
        tree.extend_unprepared(cfg.initial_height as usize);
        tree.prepare(cfg);
        tree
    }

    /// Advances the tree by a single growth step.
    pub fn step_once(&mut self) {
        phases::grow_step(&mut self.tree, &self.cfg, &mut self.rng);
        self.frame += 1;
    }

    /// Text lines of the current frame, top first.
    pub fn frame_lines(&mut self) -> Vec<String> {
        render_tree(&self.tree, &self.cfg, &mut self.rng)
    }

    /// Clears the screen and prints the current frame.
    pub fn draw(&mut self, out: &mut impl Write) -> std::io::Result<()> {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        for line in self.frame_lines() {
            queue!(out, Print(line), Print("\n"))?;
        }
        out.flush()
    }

    /// Runs `cfg.growth_steps` growth steps, drawing after each and
    /// pausing `cfg.frame_interval` in between.
    pub fn run(&mut self, out: &mut impl Write) -> std::io::Result<()> {
        info!(
            steps = self.cfg.growth_steps,
            height = self.cfg.initial_height,
            base_width = self.cfg.initial_base_width,
            "growing tree"
        );

        self.draw(out)?;
        for _ in 0..self.cfg.growth_steps {
            std::thread::sleep(self.cfg.frame_interval);
            self.step_once();
            self.draw(out)?;
        }

        let shape = self.tree.shape();
        info!(
            frames = self.frame,
            total_height = shape.total_height,
            base_width = shape.base_width,
            "tree finished growing"
        );
        Ok(())
    }
}
