//! Configuration models for the allocator.

pub mod allocator;

pub use allocator::AllocatorConfig;
