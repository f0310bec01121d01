use moodscan_core::{ConfigError, CoreError, ErrorExt, ErrorReporter, ExportError, FetchError};

#[test]
fn test_error_codes() {
    assert_eq!(CoreError::EmptyQuery.error_code(), "EMPTY_QUERY");

    let fetch_error = CoreError::Fetch(FetchError::Status { status_code: 502 });
    assert_eq!(fetch_error.error_code(), "FETCH");

    let export_error = CoreError::Export(ExportError::Io {
        path: "/readonly/output.csv".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    });
    assert_eq!(export_error.error_code(), "EXPORT");

    let config_error = CoreError::Config(ConfigError::MissingField {
        field: "fetch.dump_path".to_string(),
    });
    assert_eq!(config_error.error_code(), "CONFIG");
}

#[test]
fn test_nested_error_codes() {
    assert_eq!(
        FetchError::NoResults {
            query: "rust".to_string()
        }
        .error_code(),
        "FETCH_NO_RESULTS"
    );
    assert_eq!(
        FetchError::Timeout { seconds: 30 }.error_code(),
        "FETCH_TIMEOUT"
    );
}

#[test]
fn test_empty_query_and_fetch_failure_messages_differ() {
    let empty = CoreError::EmptyQuery.user_friendly_message();
    let failed = CoreError::Fetch(FetchError::NoResults {
        query: "rust".to_string(),
    })
    .user_friendly_message();

    assert_ne!(empty, failed);
    assert!(empty.contains("keyword"));
    assert!(failed.contains("'rust'"));
    assert!(failed.contains("fetching failed"));
}

#[test]
fn test_user_friendly_messages() {
    let config_error = CoreError::Config(ConfigError::MissingField {
        field: "fetch.dump_path".to_string(),
    });
    let message = config_error.user_friendly_message();
    assert!(message.contains("fetch.dump_path"));

    let export_error = CoreError::Export(ExportError::Io {
        path: "/readonly/output.csv".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    });
    assert!(export_error
        .user_friendly_message()
        .contains("/readonly/output.csv"));
}

#[test]
fn test_from_conversions() {
    fn fails() -> Result<(), CoreError> {
        Err(FetchError::InvalidResponse {
            details: "truncated body".to_string(),
        })?;
        Ok(())
    }

    assert!(matches!(
        fails(),
        Err(CoreError::Fetch(FetchError::InvalidResponse { .. }))
    ));
}

#[test]
fn test_error_reporter() {
    let reporter = ErrorReporter::new()
        .with_error_reporting(true)
        .with_warning_reporting(true);
    let error = CoreError::Fetch(FetchError::Timeout { seconds: 30 });

    // This test just ensures the methods don't panic
    reporter.report_error(&error);
    reporter.report_warning(&error);
}
