//! Diagnostic logging setup.
//!
//! Diagnostics are `tracing` events written to stderr. `RUST_LOG` wins when
//! set; otherwise the `-v` count picks the level.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Maps a `-v` count to the most verbose level that is shown.
pub const fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn filter_for(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level_for(verbose).into()))
}

/// Installs the global subscriber.
///
/// Only the first call in a process takes effect, so repeated runs in one
/// process (as in tests) keep the subscriber they started with.
pub fn init(verbose: u8) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level = %level_for(verbose), "logging initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), LevelFilter::WARN);
        assert_eq!(level_for(1), LevelFilter::INFO);
        assert_eq!(level_for(2), LevelFilter::DEBUG);
        assert_eq!(level_for(3), LevelFilter::TRACE);
        assert_eq!(level_for(u8::MAX), LevelFilter::TRACE);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0);
        init(3);
    }
}
