//! Build script for the Spotify playlist synchronization CLI.
//!
//! Copies the configuration templates (`.env.example` and
//! `pairs.json.example`) from the crate root into the user's local data
//! directory so that a freshly built binary finds ready-to-edit examples in
//! the location it reads configuration from.

use std::{env, fs, path::PathBuf};

/// Copies configuration templates into the local data directory.
///
/// The templates land in the platform-specific data directory:
/// - Linux: `~/.local/share/spotsyncli/`
/// - macOS: `~/Library/Application Support/spotsyncli/`
/// - Windows: `%LOCALAPPDATA%/spotsyncli/`
///
/// A missing template produces a cargo warning instead of failing the build;
/// directory creation or copy failures are fatal.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if a template changes
    println!("cargo:rerun-if-changed=.env.example");
    println!("cargo:rerun-if-changed=pairs.json.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);

    // Compute target dir (the local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotsyncli");
    fs::create_dir_all(&out_dir)?;

    for template in [".env.example", "pairs.json.example"] {
        let source = manifest_dir.join(template);

        // Only copy if the source exists; otherwise warn instead of failing
        if source.is_file() {
            let contents = fs::read_to_string(&source)?;
            fs::write(out_dir.join(template), contents)?;
        } else {
            println!("cargo:warning={} not found at {}", template, source.display());
        }
    }

    Ok(())
}
