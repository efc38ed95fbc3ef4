//! Query timing and the append-only timing log.

use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

/// Appends one line with the elapsed seconds to the log at `path`.
pub fn append(path: &Path, elapsed: Duration) -> Result<f64> {
    let seconds = elapsed.as_secs_f64();
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", seconds)?;
    tracing::debug!(path = %path.display(), seconds, "query time appended");

    Ok(seconds)
}

/// Runs `f` and returns its result together with the wall-clock time it took.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}
