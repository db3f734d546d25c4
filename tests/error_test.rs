use std::io;

use tinpig::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_permission_denied_keeps_path() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
    match Error::from_io("/root/secret", io_err) {
        Error::PermissionDenied { path } => assert_eq!(path, "/root/secret"),
        other => panic!("Expected PermissionDenied, got {other:?}"),
    }
}

#[test]
fn test_pipeline_error_display() {
    let err = Error::Pipeline {
        project_path: "/tmp/app".to_string(),
        source: Box::new(Error::DestinationExists { project_path: "/tmp/app".to_string() }),
    };
    assert_eq!(
        err.to_string(),
        "Unable to create project at '/tmp/app': Cannot proceed: destination '/tmp/app' already exists."
    );
    assert!(matches!(err.root_cause(), Error::DestinationExists { .. }));
}
