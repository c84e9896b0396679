use std::fs::File;

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};

use crate::config::Config;
use crate::Result;

/// Everything from this crate goes to the log file, which is truncated every
/// run; only errors reach the terminal.
pub fn init(config: &Config) -> Result<()> {
    std::fs::create_dir_all(&config.log_dir)?;

    let log_config = ConfigBuilder::new()
        .add_filter_allow_str(env!("CARGO_PKG_NAME"))
        .set_time_format_rfc3339()
        .build();

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Error,
            log_config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
        WriteLogger::new(
            LevelFilter::Debug,
            log_config,
            File::create(config.log_path())?,
        ),
    ])?;

    Ok(())
}
