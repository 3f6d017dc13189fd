use super::*;

#[test]
fn display_includes_severity_kind_code_message() {
    let err = EditorError::new(ErrorKind::Io, "LOAD_FAILED", "no such file");
    let rendered = err.to_string();
    assert!(rendered.contains("ERROR"));
    assert!(rendered.contains("IO"));
    assert!(rendered.contains("LOAD_FAILED"));
    assert!(rendered.contains("no such file"));
}

#[test]
fn critical_sets_severity() {
    let err = EditorError::critical(ErrorKind::Internal, "OOM", "allocation failed");
    assert_eq!(err.severity, ErrorSeverity::Critical);
}

#[test]
fn status_predicates() {
    assert!(Status::Ok.is_ok());
    assert!(!Status::Ok.is_noop());
    assert!(Status::NoOp.is_noop());
    assert!(!Status::NoOp.is_ok());
}
