//! API-facing request/response models.

use serde::{Deserialize, Serialize};

use crate::config::AllocatorConfig;
use crate::core::{validate_input, AllocationError, AllocationPlan, Allocator, Developer, Task};

/// Allocation request: the two input sequences, in caller order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationRequest {
    /// Developers; output records follow this order.
    pub developers: Vec<Developer>,
    /// Tasks in input order; priority ties keep this order.
    pub tasks: Vec<Task>,
}

/// Allocation response: `developerAssignments` and `unassignedTasks`.
pub type AllocationResponse = AllocationPlan;

/// Allocate a request, validating it first when `cfg.strict_input` is set.
pub fn allocate_request(
    allocator: &Allocator,
    cfg: &AllocatorConfig,
    req: &AllocationRequest,
) -> Result<AllocationResponse, AllocationError> {
    if cfg.strict_input {
        validate_input(&req.developers, &req.tasks)?;
    }
    Ok(allocator.allocate(&req.developers, &req.tasks))
}

/// Parse a JSON request, allocate it, and serialise the plan to JSON.
pub fn allocate_json(
    allocator: &Allocator,
    cfg: &AllocatorConfig,
    input: &str,
) -> Result<String, AllocationError> {
    let req: AllocationRequest =
        serde_json::from_str(input).map_err(|e| AllocationError::Parse(e.to_string()))?;
    let plan = allocate_request(allocator, cfg, &req)?;
    serde_json::to_string(&plan).map_err(|e| AllocationError::Parse(e.to_string()))
}
