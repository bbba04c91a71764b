//! Tests for error types

use workload_allocator::core::AllocationError;

#[test]
fn test_duplicate_task_error() {
    let err = AllocationError::DuplicateTask("Feature A".to_string());
    assert_eq!(format!("{}", err), "duplicate task: Feature A");
}

#[test]
fn test_duplicate_developer_error() {
    let err = AllocationError::DuplicateDeveloper("Bob".to_string());
    assert_eq!(format!("{}", err), "duplicate developer: Bob");
}

#[test]
fn test_invalid_hours_error() {
    let err = AllocationError::InvalidHours {
        task: "Noop".to_string(),
        hours: 0,
    };
    assert_eq!(format!("{}", err), "task `Noop` requires non-positive hours: 0");
}

#[test]
fn test_negative_capacity_error() {
    let err = AllocationError::NegativeCapacity {
        developer: "Eve".to_string(),
        max_hours: -4,
    };
    assert_eq!(format!("{}", err), "developer `Eve` has negative capacity: -4");
}

#[test]
fn test_config_and_parse_errors() {
    assert_eq!(
        format!("{}", AllocationError::InvalidConfig("bad".to_string())),
        "invalid config: bad"
    );
    assert_eq!(
        format!("{}", AllocationError::Parse("eof".to_string())),
        "parse error: eof"
    );
}
