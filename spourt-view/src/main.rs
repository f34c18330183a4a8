//! Terminal entry point for the growing ASCII tree.
//!
//! This binary installs logging and hands the animation loop to
//! [`Viewer`] from the `viewer` module.

mod viewer;

use tracing_subscriber::{EnvFilter, fmt};
use viewer::Viewer;

/// Runs the fixed-length growth animation on stdout.
///
/// ### Returns
/// - `Ok(())` once every growth step has been drawn.
/// - `Err` if writing to the terminal fails.
fn main() -> std::io::Result<()> {
    // Logs go to stderr so they never land inside a frame.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();

    let mut viewer = Viewer::new();
    viewer.run(&mut std::io::stdout())
}
