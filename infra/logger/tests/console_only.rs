use geohint_domain::config::LoggingConfig;
use geohint_logger::Logger;

#[test]
fn config_without_directory_logs_to_the_console_only() {
    let config = LoggingConfig { level: "debug".to_owned(), json: true, ..LoggingConfig::default() };
    let logger = Logger::from_config("geohint-cli", &config).expect("logger should initialize");

    assert!(logger.guard().is_none(), "no directory means no file writer");
    tracing::debug!(field = "tld", shown = 3, "Overlay evaluated");
    logger.flush();
}
