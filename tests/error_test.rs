use docforge::error::Error;
use std::io;

#[test]
fn test_io_error_display() {
    let err = Error::IoError(io::Error::new(io::ErrorKind::NotFound, "file not found"));
    assert_eq!(err.to_string(), "IO error: file not found.");
}

#[test]
fn test_config_error_display() {
    let err = Error::ConfigError("bad format".to_string());
    assert_eq!(err.to_string(), "Configuration error: bad format.");
}

#[test]
fn test_navigation_error_display() {
    let err = Error::NavigationError("unexpected token".to_string());
    assert_eq!(err.to_string(), "Navigation error: unexpected token.");
}

#[test]
fn test_io_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::IoError(_)));
}
