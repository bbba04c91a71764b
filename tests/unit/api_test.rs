//! Tests for the request/response surface

use workload_allocator::config::AllocatorConfig;
use workload_allocator::core::{AllocationError, Allocator, Developer, Task};
use workload_allocator::runtime::{allocate_json, allocate_request, AllocationRequest};

const REQUEST: &str = r#"{
    "developers": [
        { "name": "Alice", "skillLevel": 7, "maxHours": 40, "preferredTaskType": "feature" },
        { "name": "Bob", "skillLevel": 9, "maxHours": 30, "preferredTaskType": "bug" },
        { "name": "Charlie", "skillLevel": 5, "maxHours": 35, "preferredTaskType": "refactor" }
    ],
    "tasks": [
        { "taskName": "Feature A", "difficulty": 7, "hoursRequired": 15, "taskType": "feature", "priority": 4, "dependencies": [] },
        { "taskName": "Bug Fix B", "difficulty": 5, "hoursRequired": 10, "taskType": "bug", "priority": 5, "dependencies": [] },
        { "taskName": "Refactor C", "difficulty": 9, "hoursRequired": 25, "taskType": "refactor", "priority": 3, "dependencies": ["Bug Fix B"] },
        { "taskName": "Optimization D", "difficulty": 6, "hoursRequired": 20, "taskType": "feature", "priority": 2 },
        { "taskName": "Upgrade E", "difficulty": 8, "hoursRequired": 15, "taskType": "feature", "priority": 5, "dependencies": ["Feature A"] }
    ]
}"#;

#[test]
fn test_allocate_json_round_trip() {
    let out = allocate_json(&Allocator::new(), &AllocatorConfig::default(), REQUEST).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["developerAssignments"][0]["name"], "Alice");
    assert_eq!(value["developerAssignments"][0]["totalHours"], 35);
    assert_eq!(
        value["developerAssignments"][1]["assignedTasks"],
        serde_json::json!(["Bug Fix B"])
    );
    assert_eq!(
        value["unassignedTasks"],
        serde_json::json!(["Upgrade E", "Refactor C"])
    );
}

#[test]
fn test_allocate_json_rejects_malformed_request() {
    let err = allocate_json(&Allocator::new(), &AllocatorConfig::default(), "{\"tasks\": 3}")
        .unwrap_err();
    assert!(matches!(err, AllocationError::Parse(_)));
}

#[test]
fn test_lenient_request_absorbs_bad_hours() {
    let req = AllocationRequest {
        developers: vec![Developer::new("Alice", 7, 40, "feature")],
        tasks: vec![Task::new("Noop", 1, 0, "feature", 1)],
    };
    let plan = allocate_request(&Allocator::new(), &AllocatorConfig::default(), &req).unwrap();
    assert!(plan.is_assigned("Noop"));
}

#[test]
fn test_strict_request_rejects_bad_hours() {
    let req = AllocationRequest {
        developers: vec![Developer::new("Alice", 7, 40, "feature")],
        tasks: vec![Task::new("Noop", 1, 0, "feature", 1)],
    };
    let cfg = AllocatorConfig {
        strict_input: true,
        ..AllocatorConfig::default()
    };
    let err = allocate_request(&Allocator::new(), &cfg, &req).unwrap_err();
    assert!(matches!(err, AllocationError::InvalidHours { .. }));
}
