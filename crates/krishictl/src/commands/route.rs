//! `krishictl route TEXT` - route one query

use super::print_kv;
use anyhow::Result;
use krishi_router::location::LOCATION_KEY;
use krishi_router::{Config, Router};
use krishi_shared::{Language, Query, RoutingDecision};

pub fn run(
    config: &Config,
    text: &str,
    lang: Option<Language>,
    location: Option<&str>,
    json: bool,
) -> Result<()> {
    let router = Router::from_config(config)?;

    let mut query = Query::new(text);
    if let Some(lang) = lang {
        query = query.with_language(lang);
    }
    if let Some(state) = location {
        query = query.with_context(LOCATION_KEY, state);
    }

    let decision = router.route(&query)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    } else {
        print_decision(&decision);
    }
    Ok(())
}

fn print_decision(decision: &RoutingDecision) {
    let kw = 12;

    let domains: Vec<&str> = decision.detected_domains().iter().map(|d| d.as_str()).collect();
    let scores: Vec<String> = decision
        .domain_scores()
        .iter()
        .map(|s| format!("{}={:.2}", s.domain, s.score))
        .collect();
    let agents = if decision.selected_agents().is_empty() {
        "(none)".to_string()
    } else {
        decision.selected_agents().join(", ")
    };

    print_kv("query", decision.query_id().as_str(), kw);
    print_kv("domains", &domains.join(", "), kw);
    if !scores.is_empty() {
        print_kv("scores", &scores.join(", "), kw);
    }
    print_kv("language", &decision.detected_language().to_string(), kw);
    print_kv("confidence", &format!("{:.2}", decision.confidence()), kw);
    print_kv("agents", &agents, kw);
    print_kv("plan", &decision.execution_plan().to_string(), kw);
    if let Some(location) = decision.detected_location() {
        print_kv("location", &location.to_string(), kw);
    }
    print_kv("reasoning", decision.reasoning(), kw);

    if decision.requires_clarification() {
        println!();
        println!("Clarification needed:");
        for (i, question) in decision.clarification_questions().iter().enumerate() {
            println!("  {}. {}", i + 1, question);
        }
    }
}
