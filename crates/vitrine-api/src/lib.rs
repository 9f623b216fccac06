/*!
# vitrine-api

Sample web API demonstrating declarative endpoint registration, health
checks, and OpenAPI documentation with three interactive UIs.

Endpoint modules under [`endpoints`] declare themselves with link-time
registration entries; [`bootstrap::build_application`] discovers them,
registers their documents and routes, and assembles the router the binary
serves.
*/

pub mod bootstrap;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod health;

pub use bootstrap::build_application;
pub use config::{AppConfig, ConfigError};
pub use error::{StartupError, StartupResult};
pub use health::{HealthChecker, HealthReport, HealthStatus};
