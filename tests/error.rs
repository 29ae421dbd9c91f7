use std::path::PathBuf;

use serde_json::Value;
use flowboard::error::{exit_codes, Error};

#[test]
fn exit_code_user_error() {
    let err = Error::InvalidArgument("bad input".to_string());
    assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
}

#[test]
fn not_found_errors_are_user_errors() {
    assert_eq!(
        Error::TaskNotFound("task-404".to_string()).exit_code(),
        exit_codes::USER_ERROR
    );
    assert_eq!(
        Error::UnknownRoute("/nowhere".to_string()).exit_code(),
        exit_codes::USER_ERROR
    );
}

#[test]
fn exit_code_operation_failed() {
    let err = Error::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
    assert_eq!(err.exit_code(), exit_codes::OPERATION_FAILED);
    assert!(err.details().is_none());
}

#[test]
fn details_include_unreadable_path() {
    let err = Error::ReadFile {
        path: PathBuf::from("data/board.json"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    };
    assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    let details = err.details().expect("details");
    assert_eq!(details["path"], Value::String("data/board.json".to_string()));
}

#[test]
fn task_not_found_details_carry_the_id() {
    let err = Error::TaskNotFound("task-99".to_string());
    assert_eq!(err.to_string(), "Task not found: task-99");
    let details = err.details().expect("details");
    assert_eq!(details["task_id"], Value::String("task-99".to_string()));
}

#[test]
fn invalid_dataset_message_carries_reason() {
    let err = Error::InvalidDataset("current user 'ghost' is not a known user".to_string());
    assert_eq!(err.to_string(), "Invalid dataset: current user 'ghost' is not a known user");
}
