use fern::Dispatch;
use log::LevelFilter;

/// # setup logging
/// log to stderr and to `log_file` with a single line format.
///
/// ## Arguments
/// * `level` - the most verbose level that is written
/// * `log_file` - the file to append the log to
pub fn setup_logging(level: LevelFilter, log_file: &str) -> Result<(), fern::InitError> {
    let base_config = Dispatch::new()
        .level(level)
        // rocket logs every request at info
        .level_for("rocket", LevelFilter::Warn)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        });

    let file_logger_config = Dispatch::new().chain(fern::log_file(log_file)?);
    let stderr_logger_config = Dispatch::new().chain(std::io::stderr());

    base_config
        .chain(file_logger_config)
        .chain(stderr_logger_config)
        .apply()?;

    Ok(())
}
