use geohint_domain::config::LoggingConfig;
use geohint_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn init_twice_returns_subscriber_error() {
    let _logger = Logger::builder()
        .name("geohint-init-twice")
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");

    let err = Logger::from_config("geohint-init-twice-second", &LoggingConfig::default())
        .expect_err("second init should fail");

    assert!(
        matches!(err, LoggerError::Subscriber { .. }),
        "expected subscriber error for second init"
    );
}

#[test]
fn unknown_level_fails_before_touching_the_subscriber() {
    let config = LoggingConfig { level: "chatty".to_owned(), ..LoggingConfig::default() };
    let err = Logger::from_config("geohint-bad-level", &config).expect_err("level must be rejected");
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}
