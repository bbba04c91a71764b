//! Request/response surface for hosts embedding the allocator.

pub mod api;

pub use api::{allocate_json, allocate_request, AllocationRequest, AllocationResponse};
