use std::sync::OnceLock;

use log::LevelFilter;

/// Environment variable read for a filter when none is configured.
///
/// Separate from `RUST_LOG` so the plugin can be turned up without touching
/// other Rust components loaded into the same host process.
pub const FILTER_ENV: &str = "HDBRIDGE_LOG";

/// Logger configuration for the plugin.
///
/// `filter` uses the `env_logger` filter syntax, e.g. `"hdbridge=trace"`.
/// Without it, [`FILTER_ENV`] is consulted, then `default_level` applies to
/// this crate only.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub default_level: LevelFilter,
    /// The host's script editor and output window show raw escape codes.
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            default_level: LevelFilter::Warn,
            write_style: env_logger::WriteStyle::Never,
        }
    }
}

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Installs a stderr logger for the plugin, once per process.
///
/// Returns whether the logger in effect is ours. `false` means the host (or
/// another plugin) installed a `log` logger first; records from this crate
/// then go to that logger and `config` is ignored. Later calls return the
/// first call's answer.
pub fn init_logging(config: LoggingConfig) -> bool {
    *INSTALLED.get_or_init(|| {
        let mut builder = env_logger::Builder::new();

        match config.filter.or_else(|| std::env::var(FILTER_ENV).ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                // Per-frame no-op branches log at trace.
                builder.filter_module(env!("CARGO_CRATE_NAME"), config.default_level);
            }
        }
        builder.write_style(config.write_style);

        let installed = builder.try_init().is_ok();
        if installed {
            log::debug!("plugin logger installed");
        }
        installed
    })
}
