use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::filter::{EnvFilter, Targets};
use tracing_subscriber::fmt::{self, format::FmtSpan};
use tracing_subscriber::prelude::*;

use crate::error::ProfileError;

/// Opens the profile file. Run before the window exists so a bad path
/// fails fast.
pub fn create_profile(path: &Path) -> Result<File, ProfileError> {
    File::create(path).map_err(|source| ProfileError {
        path: path.to_path_buf(),
        source,
    })
}

/// Installs the global subscriber: human-readable logs on stderr, filtered
/// by `RUST_LOG` (default `info`), plus span timings for this crate in
/// `profile` when given.
pub fn init(profile: Option<File>) {
    let stderr = fmt::layer().with_target(false).with_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    );

    let profile = profile.map(|file| {
        fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(Targets::new().with_target(env!("CARGO_CRATE_NAME"), Level::TRACE))
    });

    let result = tracing_subscriber::registry()
        .with(stderr)
        .with(profile)
        .try_init();
    if result.is_err() {
        eprintln!("tracing subscriber already set");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_profile_reports_path() {
        let path = Path::new("/nonexistent-dir/for/mover/cpu.prof");
        let err = create_profile(path).unwrap_err();
        assert_eq!(err.path, path);
        assert!(err.to_string().contains("cpu.prof"));
    }
}
