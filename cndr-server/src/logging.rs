use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::ServerError;

/// Installs the global subscriber. Development gets the pretty, coloured
/// formatter; other environments get compact single-line output.
pub fn init_tracing(config: &Config) -> Result<(), ServerError> {
    let filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| ServerError::Config(format!("LOG_LEVEL '{}': {}", config.log_level, e)))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if config.node_env.is_development() {
        builder.pretty().try_init()
    } else {
        builder.compact().with_ansi(false).try_init()
    };

    result.map_err(|e| ServerError::Config(format!("failed to install logger: {}", e)))
}
