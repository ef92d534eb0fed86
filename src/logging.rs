use std::path::Path;

use anyhow::Context;
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Installs a file logger. The terminal belongs to the UI, so nothing is
/// ever logged to stdout or stderr.
pub fn setup_logger(path: &Path, level: LevelFilter) -> anyhow::Result<()> {
    let config = logger_config(path, level)?;
    log4rs::init_config(config).context("installing logger failed")?;
    log::info!("logging to {} at {level}", path.display());
    Ok(())
}

fn logger_config(path: &Path, level: LevelFilter) -> anyhow::Result<Config> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(path)
        .with_context(|| format!("opening log file {} failed", path.display()))?;

    Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)))
        .build(Root::builder().appender("file").build(level))
        .context("building logger config failed")
}
