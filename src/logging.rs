use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::panic;
use std::path::Path;
use thiserror::Error;

static PATTERN: &str = "{l} {d(%H:%M:%S.%3f)} {f}:{L} {m}{n}";

/// Send log messages to the file at `path`, creating it if necessary and
/// appending otherwise.  Messages below `INFO` are dropped unless `verbose`
/// is true.
///
/// Panics are logged as well before being passed on to whatever panic hook
/// was already installed.
pub(crate) fn init(path: &Path, verbose: bool) -> Result<(), LoggingError> {
    let appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .append(true)
        .build(path)
        .map_err(LoggingError::Open)?;
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(appender)))
        .build(Root::builder().appender("logfile").build(level))
        .map_err(|e| LoggingError::Config(e.to_string()))?;
    let _handle = log4rs::init_config(config)?;
    install_panic_hook();
    log::info!("termsnake {} starting", env!("CARGO_PKG_VERSION"));
    Ok(())
}

fn install_panic_hook() {
    let prev = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let (filename, line) = info
            .location()
            .map_or(("<unknown>", 0), |loc| (loc.file(), loc.line()));
        let cause = info
            .payload()
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("<cause unknown>");
        log::error!("A panic occurred at {filename}:{line}: {cause}");
        prev(info);
    }));
}

#[derive(Debug, Error)]
pub(crate) enum LoggingError {
    #[error("failed to open log file")]
    Open(#[source] std::io::Error),
    #[error("invalid logging configuration: {0}")]
    Config(String),
    #[error("failed to install logger")]
    Install(#[from] log::SetLoggerError),
}
