//! Routing decision assembly and clarification questions.

use crate::classifier::Classification;
use krishi_shared::{DecisionParts, ExecutionPlan, Language, Location, Query, RoutingDecision};

pub const ASK_LOCATION: &str = "Could you please specify your location (state/district)?";
pub const ASK_DOMAIN: &str =
    "What type of farming question do you have (crop selection, pest control, irrigation, etc.)?";
pub const ASK_CROP: &str = "Are you asking about a specific crop or farming in general?";

/// Questions for a farmer whose query could not be routed confidently.
/// The location question is skipped once a location is known.
pub fn clarification_questions(location: Option<&Location>) -> Vec<String> {
    let mut questions = Vec::with_capacity(3);
    if location.is_none() {
        questions.push(ASK_LOCATION.to_string());
    }
    questions.push(ASK_DOMAIN.to_string());
    questions.push(ASK_CROP.to_string());
    questions
}

/// Diagnostic summary, not meant for farmers
pub fn reasoning(
    classification: &Classification,
    agents: &[String],
    plan: ExecutionPlan,
    refined: bool,
) -> String {
    let source = if refined { "Refined" } else { "Pattern-based" };
    format!(
        "{} classification detected {} domain(s). Selected {} agent(s) for {} execution.",
        source,
        classification.domains.len(),
        agents.len(),
        plan
    )
}

/// Assemble the final decision. Pure; inputs are already validated.
#[allow(clippy::too_many_arguments)]
pub fn build_decision(
    query: &Query,
    classification: Classification,
    language: Language,
    location: Option<Location>,
    agents: Vec<String>,
    plan: ExecutionPlan,
    refined: bool,
    clarification_threshold: f64,
) -> RoutingDecision {
    let reasoning = reasoning(&classification, &agents, plan, refined);
    let questions = clarification_questions(location.as_ref());

    RoutingDecision::from_parts(DecisionParts {
        query_id: query.id.clone(),
        detected_domains: classification.domains,
        detected_language: language,
        confidence: classification.confidence,
        selected_agents: agents,
        execution_plan: plan,
        reasoning,
        clarification_questions: questions,
        detected_location: location,
        domain_scores: classification.scores,
        refined,
        clarification_threshold,
    })
}
