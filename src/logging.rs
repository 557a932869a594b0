use flexi_logger::{FileSpec, FlexiLoggerError, Logger, LoggerHandle, WriteMode};

/// Starts the file logger. The TUI owns the terminal, so log output goes to
/// `featchat.log` in the working directory. Keep the returned handle alive
/// for the lifetime of the program.
pub fn initialize_logging(level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_str(level)?
        .log_to_file(FileSpec::default().basename("featchat").suppress_timestamp())
        .write_mode(WriteMode::BufferAndFlush)
        .start()
}
