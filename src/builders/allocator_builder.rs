//! Builder to construct an allocator from configuration.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::AllocatorConfig;
use crate::core::{AllocationError, Allocator, InMemoryAuditSink};

/// Allocator plus a handle to the audit sink it writes to.
pub struct BuiltAllocator {
    /// Configured allocator.
    pub allocator: Allocator,
    /// In-memory audit sink, absent when `audit_capacity` is 0.
    pub audit: Option<Arc<Mutex<InMemoryAuditSink>>>,
}

/// Build an allocator from configuration.
pub fn build_allocator(cfg: &AllocatorConfig) -> Result<BuiltAllocator, AllocationError> {
    cfg.validate()?;

    if cfg.audit_capacity == 0 {
        tracing::debug!("audit trail disabled");
        return Ok(BuiltAllocator {
            allocator: Allocator::new(),
            audit: None,
        });
    }

    let sink = Arc::new(Mutex::new(InMemoryAuditSink::new(cfg.audit_capacity)));
    let allocator = Allocator::new().with_audit(sink.clone());
    tracing::debug!(capacity = cfg.audit_capacity, "audit trail enabled");
    Ok(BuiltAllocator {
        allocator,
        audit: Some(sink),
    })
}
