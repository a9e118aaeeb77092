//! Shared types for the Krishi advisory router.
//!
//! Query and decision model, the closed domain enumeration, and the
//! specialist agent registry. No routing logic lives here.

pub mod decision;
pub mod domain;
pub mod error;
pub mod language;
pub mod location;
pub mod query;
pub mod registry;

pub use decision::{DecisionParts, DomainScore, ExecutionPlan, RoutingDecision};
pub use domain::{Domain, DomainClass};
pub use error::KrishiError;
pub use language::Language;
pub use location::Location;
pub use query::{Query, QueryContext, QueryId};
pub use registry::AgentRegistry;

/// Config file path
pub const CONFIG_PATH: &str = "/etc/krishi/router.toml";

/// Fallback config file path
pub const DEFAULT_CONFIG_PATH: &str = "/var/lib/krishi/router.toml";
