//! Logger setup for the plugin.
//!
//! The crate only logs through the `log` facade. A host that already routes
//! `log` records keeps doing so; standalone tools and tests call
//! [`init_logging`] once.

mod init;

pub use init::{init_logging, LoggingConfig, FILTER_ENV};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_calls_report_the_first_outcome() {
        let first = init_logging(LoggingConfig {
            filter: Some("hdbridge=trace".to_owned()),
            ..LoggingConfig::default()
        });
        let second = init_logging(LoggingConfig::default());
        assert_eq!(first, second);
        log::trace!("still alive");
    }

    #[test]
    fn defaults_stay_quiet_and_uncolored() {
        let config = LoggingConfig::default();
        assert_eq!(config.filter, None);
        assert_eq!(config.default_level, log::LevelFilter::Warn);
        assert!(matches!(config.write_style, env_logger::WriteStyle::Never));
    }
}
