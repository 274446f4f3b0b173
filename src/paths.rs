use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "minecraft-data-1.21/blocks.json";
pub const DEFAULT_OUTPUT: &str = "minecraft-to-hytopia-mappings.json";

pub const INPUT_ENV: &str = "BLOCKMAP_INPUT";
pub const OUTPUT_ENV: &str = "BLOCKMAP_OUTPUT";

pub fn resolve_input(cli: Option<PathBuf>) -> PathBuf {
    let p = resolve(cli, std::env::var_os(INPUT_ENV), DEFAULT_INPUT);
    log::info!("input: {}", p.display());
    p
}

pub fn resolve_output(cli: Option<PathBuf>) -> PathBuf {
    let p = resolve(cli, std::env::var_os(OUTPUT_ENV), DEFAULT_OUTPUT);
    log::info!("output: {}", p.display());
    p
}

// Precedence: CLI flag -> env var -> fixed path relative to the working dir.
fn resolve(cli: Option<PathBuf>, env: Option<OsString>, default: &str) -> PathBuf {
    if let Some(p) = cli {
        return p;
    }
    match env {
        Some(v) if !v.is_empty() => PathBuf::from(v),
        _ => PathBuf::from(default),
    }
}
