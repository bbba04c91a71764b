//! Tests for builder modules

use workload_allocator::builders::build_allocator;
use workload_allocator::config::AllocatorConfig;
use workload_allocator::core::{Developer, Task};

#[test]
fn test_builder_attaches_audit_sink() {
    let built = build_allocator(&AllocatorConfig::default()).unwrap();
    assert!(built.allocator.has_audit());

    let developers = vec![Developer::new("Alice", 7, 40, "feature")];
    let tasks = vec![
        Task::new("Feature A", 7, 15, "feature", 4),
        Task::new("Too Hard", 9, 5, "feature", 1),
    ];
    let plan = built.allocator.allocate(&developers, &tasks);
    assert_eq!(plan.unassigned_tasks, vec!["Too Hard"]);

    let sink = built.audit.expect("audit sink");
    assert_eq!(sink.lock().len(), 2);
}

#[test]
fn test_builder_without_audit() {
    let cfg = AllocatorConfig {
        audit_capacity: 0,
        strict_input: false,
    };
    let built = build_allocator(&cfg).unwrap();
    assert!(!built.allocator.has_audit());
    assert!(built.audit.is_none());
}

#[test]
fn test_builder_rejects_invalid_config() {
    let cfg = AllocatorConfig {
        audit_capacity: usize::MAX,
        strict_input: false,
    };
    assert!(build_allocator(&cfg).is_err());
}
