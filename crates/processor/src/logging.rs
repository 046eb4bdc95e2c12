//! Logger setup

use env_logger::Env;

/// Install an `env_logger` logger for the process
///
/// `RUST_LOG` wins over `default_filter`. Returns false if a logger was
/// already installed, which is harmless.
pub fn setup_logger(default_filter: &str) -> bool {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_setup_is_harmless() {
        setup_logger("debug");
        assert!(!setup_logger("info"));
    }
}
