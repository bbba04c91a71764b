//! Tests for utility functions

use workload_allocator::util::{init_tracing, now_ms, Hours, Priority, SkillLevel, TaskName};

#[test]
fn test_now_ms_is_after_epoch() {
    assert!(now_ms() > 0);
}

#[test]
fn test_scalar_aliases_are_signed() {
    let hours: Hours = -3;
    let skill: SkillLevel = 7;
    let priority: Priority = -1;
    let name: TaskName = "Feature A".to_string();
    assert!(hours < 0);
    assert!(priority < 0);
    assert_eq!(skill, 7);
    assert_eq!(name, "Feature A");
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    tracing::info!("tracing initialised twice without panicking");
}
