use folio::config::LoggingConfig;
use folio::logger::{self, LogBuffer};
use log::{Level, Record};

#[test]
fn test_log_buffer_newest_first() {
    let buffer = LogBuffer::new();
    assert!(buffer.is_empty());

    buffer.push("first".to_string());
    buffer.push("second".to_string());

    let entries = buffer.entries();
    assert_eq!(entries, vec!["second".to_string(), "first".to_string()]);
    assert_eq!(buffer.len(), 2);
}

#[test]
fn test_log_buffer_is_bounded() {
    let buffer = LogBuffer::with_capacity(3);
    for i in 0..5 {
        buffer.push(format!("entry {}", i));
    }

    let entries = buffer.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0], "entry 4");
    assert_eq!(entries[2], "entry 2");
}

#[test]
fn test_log_buffer_clones_share_entries() {
    let buffer = LogBuffer::new();
    let clone = buffer.clone();
    clone.push("shared".to_string());
    assert_eq!(buffer.entries(), vec!["shared".to_string()]);
    assert!(!clone.is_empty());
}

#[test]
fn test_dispatch_feeds_buffer() {
    let buffer = LogBuffer::new();
    let config = LoggingConfig::default();
    let (_level, log) = logger::dispatch(&config, buffer.clone()).unwrap().into_log();

    log.log(
        &Record::builder()
            .args(format_args!("Project: created 6 'Sky Deck'"))
            .level(Level::Info)
            .target("folio::state")
            .build(),
    );

    let entries = buffer.entries();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].contains("Project: created 6 'Sky Deck'"));
    assert!(entries[0].contains("INFO"));
}

#[test]
fn test_dispatch_respects_level() {
    let buffer = LogBuffer::new();
    let config = LoggingConfig {
        enabled: false,
        level: "warn".to_string(),
    };
    let (level, log) = logger::dispatch(&config, buffer.clone()).unwrap().into_log();
    assert_eq!(level, log::LevelFilter::Warn);

    let metadata = log::Metadata::builder().level(Level::Info).target("folio").build();
    assert!(!log.enabled(&metadata));
}

#[test]
fn test_dispatch_rejects_unknown_level() {
    let config = LoggingConfig {
        enabled: false,
        level: "chatty".to_string(),
    };
    assert!(logger::dispatch(&config, LogBuffer::new()).is_err());
}

#[test]
fn test_log_file_path() {
    let path = logger::get_log_file_path().unwrap();
    assert!(path.ends_with("folio/folio.log"));
}
