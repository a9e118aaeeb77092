//! Routing decision, the router's sole output.
//!
//! Fields are read-only once assembled. `from_parts` derives
//! `requires_clarification` itself so the flag can never disagree with
//! the confidence and agent list it was built from.

use crate::domain::Domain;
use crate::language::Language;
use crate::location::Location;
use crate::query::QueryId;
use serde::{Deserialize, Serialize};

/// How the execution layer should run the selected agents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionPlan {
    /// Zero or one agent
    Single,
    /// Fan out, no ordering
    Parallel,
    /// One after another
    Sequential,
    /// Independent-class agents first, then dependent-class agents
    Hierarchical,
}

impl std::fmt::Display for ExecutionPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Parallel => write!(f, "parallel"),
            Self::Sequential => write!(f, "sequential"),
            Self::Hierarchical => write!(f, "hierarchical"),
        }
    }
}

/// Normalized pattern hit density of one domain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainScore {
    pub domain: Domain,
    pub score: f64,
}

impl DomainScore {
    pub fn new(domain: Domain, score: f64) -> Self {
        Self { domain, score }
    }
}

/// Everything needed to assemble a decision
#[derive(Debug, Clone)]
pub struct DecisionParts {
    pub query_id: QueryId,
    pub detected_domains: Vec<Domain>,
    pub detected_language: Language,
    pub confidence: f64,
    pub selected_agents: Vec<String>,
    pub execution_plan: ExecutionPlan,
    pub reasoning: String,
    /// Kept only when clarification turns out to be required
    pub clarification_questions: Vec<String>,
    pub detected_location: Option<Location>,
    pub domain_scores: Vec<DomainScore>,
    pub refined: bool,
    /// Confidence below this requires clarification
    pub clarification_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingDecision {
    query_id: QueryId,
    detected_domains: Vec<Domain>,
    detected_language: Language,
    confidence: f64,
    selected_agents: Vec<String>,
    execution_plan: ExecutionPlan,
    reasoning: String,
    requires_clarification: bool,
    clarification_questions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    detected_location: Option<Location>,
    #[serde(default)]
    domain_scores: Vec<DomainScore>,
    #[serde(default)]
    refined: bool,
}

impl RoutingDecision {
    pub fn from_parts(parts: DecisionParts) -> Self {
        let confidence = clamp_unit(parts.confidence);
        let detected_domains = if parts.detected_domains.is_empty() {
            vec![Domain::General]
        } else {
            parts.detected_domains
        };
        let requires_clarification =
            confidence < parts.clarification_threshold || parts.selected_agents.is_empty();
        let clarification_questions = if requires_clarification {
            parts.clarification_questions
        } else {
            Vec::new()
        };

        Self {
            query_id: parts.query_id,
            detected_domains,
            detected_language: parts.detected_language,
            confidence,
            selected_agents: parts.selected_agents,
            execution_plan: parts.execution_plan,
            reasoning: parts.reasoning,
            requires_clarification,
            clarification_questions,
            detected_location: parts.detected_location,
            domain_scores: parts.domain_scores,
            refined: parts.refined,
        }
    }

    pub fn query_id(&self) -> &QueryId {
        &self.query_id
    }

    pub fn detected_domains(&self) -> &[Domain] {
        &self.detected_domains
    }

    /// Highest-ranked domain
    pub fn primary_domain(&self) -> Domain {
        self.detected_domains.first().copied().unwrap_or_default()
    }

    pub fn detected_language(&self) -> Language {
        self.detected_language
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn selected_agents(&self) -> &[String] {
        &self.selected_agents
    }

    pub fn execution_plan(&self) -> ExecutionPlan {
        self.execution_plan
    }

    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    pub fn requires_clarification(&self) -> bool {
        self.requires_clarification
    }

    pub fn clarification_questions(&self) -> &[String] {
        &self.clarification_questions
    }

    pub fn detected_location(&self) -> Option<&Location> {
        self.detected_location.as_ref()
    }

    pub fn domain_scores(&self) -> &[DomainScore] {
        &self.domain_scores
    }

    /// Whether an injected refiner changed the pattern classification
    pub fn refined(&self) -> bool {
        self.refined
    }
}

/// Clamp to `[0, 1]`, mapping NaN to 0
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
