use ectl_domain::config::LoggingConfig;
use ectl_logger::Logger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn config_driven_file_logging_creates_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let config = LoggingConfig {
        name: "integration-file-logging".to_owned(),
        level: "info".to_owned(),
        console: false,
        directory: Some(log_dir.clone()),
        json: true,
        ..LoggingConfig::default()
    };
    let logger = Logger::from_config(&config)?;
    assert!(logger.guard().is_some(), "file logging should hold a worker guard");

    tracing::info!(surface = 1, "hello from integration test");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("hello from integration test"));
    assert!(contents.trim_start().starts_with('{'), "json output expected");

    Ok(())
}
