//! Tests for the agent registry.

use krishi_shared::registry::DEFAULT_AGENTS;
use krishi_shared::{AgentRegistry, Domain, KrishiError};
use std::sync::Arc;
use std::thread;

#[test]
fn test_registry_with_defaults() {
    let registry = AgentRegistry::with_defaults();

    // 7 specialized domains, one agent each, nothing for General
    assert_eq!(registry.len(), 7);
    assert!(!registry.has_agents(Domain::General));
    assert_eq!(registry.lookup(Domain::PestManagement), vec!["pest_forecaster_agent"]);
    assert_eq!(registry.domains(), Domain::SPECIALIZED.to_vec());
}

#[test]
fn test_default_agents_cover_specialized_domains() {
    let domains: Vec<Domain> = DEFAULT_AGENTS.iter().map(|(d, _)| *d).collect();
    assert_eq!(domains, Domain::SPECIALIZED.to_vec());
}

#[test]
fn test_lookup_unregistered_domain_is_empty() {
    let registry = AgentRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.lookup(Domain::Irrigation).is_empty());
}

#[test]
fn test_register_appends_in_order() {
    let registry = AgentRegistry::new();
    registry.register(Domain::MarketTiming, "market_timing_agent");
    registry.register(Domain::MarketTiming, "mandi_price_agent");

    assert_eq!(
        registry.lookup(Domain::MarketTiming),
        vec!["market_timing_agent", "mandi_price_agent"]
    );
}

#[test]
fn test_register_same_agent_twice_is_noop() {
    let registry = AgentRegistry::new();
    registry.register(Domain::Irrigation, "irrigation_scheduler_agent");
    registry.register(Domain::Irrigation, "irrigation_scheduler_agent");

    assert_eq!(registry.len(), 1);
}

#[test]
fn test_register_named() {
    let registry = AgentRegistry::new();
    registry.register_named("harvest_planning", "harvest_planning_agent").unwrap();
    assert!(registry.has_agents(Domain::HarvestPlanning));
}

#[test]
fn test_register_named_unknown_domain() {
    let registry = AgentRegistry::new();
    let err = registry.register_named("weather", "weather_agent").unwrap_err();

    assert!(matches!(err, KrishiError::UnknownDomain(ref name) if name == "weather"));
    assert!(registry.is_empty());
}

#[test]
fn test_register_mapping_is_all_or_nothing() {
    let registry = AgentRegistry::new();
    let result = registry.register_mapping([
        ("crop_selection", "crop_selection_agent"),
        ("soil_health", "soil_agent"),
    ]);

    assert!(matches!(result, Err(KrishiError::UnknownDomain(_))));
    assert!(registry.is_empty());

    let count = registry
        .register_mapping([
            ("crop_selection", "crop_selection_agent"),
            ("input_materials", "input_materials_agent"),
        ])
        .unwrap();
    assert_eq!(count, 2);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_concurrent_registration_and_lookup() {
    let registry = Arc::new(AgentRegistry::new());

    let writers: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for j in 0..25 {
                    registry.register(Domain::FinancePolicy, format!("agent_{}_{}", i, j));
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for _ in 0..25 {
                    let agents = registry.lookup(Domain::FinancePolicy);
                    assert!(agents.len() <= 100);
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().unwrap();
    }

    assert_eq!(registry.lookup(Domain::FinancePolicy).len(), 100);
}
