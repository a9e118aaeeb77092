//! Deterministic query router for the Krishi advisory system.
//!
//! Classifies a farmer's query into advisory domains, detects its language,
//! picks specialist agents from the registry and decides how they should be
//! executed. Agents are never invoked here.

pub mod classifier;
pub mod config;
pub mod decision;
pub mod language;
pub mod location;
pub mod patterns;
pub mod planner;
pub mod refiner;
pub mod router;
pub mod selector;


pub use classifier::{Classification, DomainClassifier};
pub use config::{Config, RoutingSettings};
pub use language::detect_language;
pub use location::extract_location;
pub use planner::plan_execution;
pub use refiner::{DomainRefiner, Refinement};
pub use router::Router;
pub use selector::select_agents;

pub use krishi_shared::{
    AgentRegistry, Domain, ExecutionPlan, KrishiError, Language, Location, Query, RoutingDecision,
};
