//! Tests for audit sink

use workload_allocator::core::{build_audit_event, AuditAction, AuditSink, InMemoryAuditSink};

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);

    let event = build_audit_event(
        0,
        "Bug Fix B",
        AuditAction::Assigned {
            developer: "Bob".to_string(),
            hours: 10,
        },
    );

    sink.record(event);
    assert_eq!(sink.len(), 1);

    let events = sink.events();
    assert_eq!(events[0].sequence, 0);
    assert_eq!(events[0].task_name, "Bug Fix B");
    assert_eq!(events[0].action.label(), "assigned");
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event(0, "A", AuditAction::NoEligibleDeveloper));
    sink.record(build_audit_event(1, "B", AuditAction::NoEligibleDeveloper));
    sink.record(build_audit_event(2, "C", AuditAction::NoEligibleDeveloper));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].task_name, "B"); // First one popped
    assert_eq!(events[1].task_name, "C");
}

#[test]
fn test_build_audit_event() {
    let event = build_audit_event(
        3,
        "Upgrade E",
        AuditAction::BlockedOnDependency {
            missing: vec!["Feature A".to_string()],
        },
    );

    assert_eq!(event.sequence, 3);
    assert_eq!(event.task_name, "Upgrade E");
    assert_eq!(event.action.label(), "blocked");
    assert!(!event.event_id.is_empty());
    assert!(event.created_at_ms > 0);

    let other = build_audit_event(3, "Upgrade E", AuditAction::NoEligibleDeveloper);
    assert_ne!(event.event_id, other.event_id);
}
