//! Logger setup.
//!
//! `VLSM_LOG_CONFIG` may name a log4rs YAML file (see `log4rs.yml`);
//! otherwise logs go to stderr so they never mix with table output.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

/// Environment variable naming a log4rs config file.
pub const LOG_CONFIG_ENV: &str = "VLSM_LOG_CONFIG";

const PATTERN: &str = "{d(%H:%M:%S)} {h({l:5})} {t} - {m}{n}";

/// Level used when no config file is given.
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Build the fallback stderr configuration.
pub fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

/// Initialise the global logger once at startup.
pub fn init_logger(verbose: bool) -> Result<(), Box<dyn Error>> {
    match std::env::var(LOG_CONFIG_ENV) {
        Ok(path) => {
            log4rs::init_file(&path, Default::default())
                .map_err(|e| format!("Error initializing log4rs from {path}: {e}"))?;
            log::debug!("Logging configured from {path}");
        }
        Err(_) => {
            log4rs::init_config(stderr_config(default_level(verbose))?)?;
        }
    }
    Ok(())
}
