//! Allocator configuration.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::{AllocationError, AppResult};

/// Environment variable overriding [`AllocatorConfig::audit_capacity`].
pub const ENV_AUDIT_CAPACITY: &str = "ALLOCATOR_AUDIT_CAPACITY";
/// Environment variable overriding [`AllocatorConfig::strict_input`].
pub const ENV_STRICT_INPUT: &str = "ALLOCATOR_STRICT_INPUT";

/// Upper bound on buffered audit events.
pub const MAX_AUDIT_CAPACITY: usize = 1_000_000;

const fn default_audit_capacity() -> usize {
    1024
}

/// Allocator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatorConfig {
    /// Events kept by the in-memory audit sink; 0 disables the audit trail.
    #[serde(default = "default_audit_capacity")]
    pub audit_capacity: usize,
    /// Validate requests (duplicate names, non-positive hours) before allocating.
    #[serde(default)]
    pub strict_input: bool,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            audit_capacity: default_audit_capacity(),
            strict_input: false,
        }
    }
}

impl AllocatorConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), AllocationError> {
        if self.audit_capacity > MAX_AUDIT_CAPACITY {
            return Err(AllocationError::InvalidConfig(format!(
                "audit_capacity must be at most {MAX_AUDIT_CAPACITY}, got {}",
                self.audit_capacity
            )));
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, AllocationError> {
        let cfg: Self =
            serde_json::from_str(input).map_err(|e| AllocationError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build configuration from defaults overridden by the process environment.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> AppResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from defaults overridden by `lookup`.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(ENV_AUDIT_CAPACITY) {
            cfg.audit_capacity = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_AUDIT_CAPACITY}={raw} is not a count"))?;
        }
        if let Some(raw) = lookup(ENV_STRICT_INPUT) {
            cfg.strict_input = parse_flag(&raw)
                .with_context(|| format!("{ENV_STRICT_INPUT}={raw} is not a boolean"))?;
        }
        cfg.validate()?;
        tracing::debug!(?cfg, "allocator config loaded");
        Ok(cfg)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
