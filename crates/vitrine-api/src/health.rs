//! Health checks exposed by the service document's health endpoint.

use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of a single named check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Health report returned by the health endpoint
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub timestamp: String,
    pub version: String,
    pub checks: BTreeMap<String, HealthStatus>,
}

/// Runs the registered checks and produces a [`HealthReport`].
///
/// The overall status is unhealthy as soon as any single check is.
#[derive(Default)]
pub struct HealthChecker {
    checks: Vec<(String, fn() -> HealthStatus)>,
}

impl HealthChecker {
    /// Create a checker with no checks
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named check
    pub fn with_check(mut self, name: impl Into<String>, check: fn() -> HealthStatus) -> Self {
        self.checks.push((name.into(), check));
        self
    }

    /// Run every check
    pub fn run(&self) -> HealthReport {
        let mut checks = BTreeMap::new();
        let mut status = HealthStatus::Healthy;

        for (name, check) in &self.checks {
            let outcome = check();
            if outcome == HealthStatus::Unhealthy {
                status = HealthStatus::Unhealthy;
            }
            checks.insert(name.clone(), outcome);
        }

        HealthReport {
            status,
            timestamp: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            checks,
        }
    }
}
