use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write this process's id to `path`.
pub fn write_pid<P: AsRef<Path>>(path: P) -> Result<()> {
    let pid = std::process::id();
    fs::write(&path, format!("{pid}\n"))
        .with_context(|| format!("failed to write pid file {}", path.as_ref().display()))?;
    Ok(())
}

/// Remove a pid file (best-effort).
pub fn remove_pid<P: AsRef<Path>>(path: P) {
    if let Err(e) = fs::remove_file(&path) {
        tracing::debug!(error = %e, pid_file = %path.as_ref().display(), "pid file not removed");
    }
}
