//! `canvas-cursor` - replay an interaction script and print every cursor
//! style the resolver writes.
//!
//! ```sh
//! RUST_LOG=canvas_cursor=debug canvas-cursor script.json
//! ```

use anyhow::{Context, Result};
use canvas_cursor::replay::{ReplayScript, replay};
use std::path::PathBuf;

fn main() -> Result<()> {
    canvas_cursor::logging::init();

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: canvas-cursor <script.json>")?;

    let script = ReplayScript::from_path(&path)
        .with_context(|| format!("Failed to load replay script {}", path.display()))?;
    let report = replay(script).context("Replay failed")?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
