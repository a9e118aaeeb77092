//! Agent selection from classified domains.

use krishi_shared::{AgentRegistry, Domain};
use std::collections::HashSet;

/// Registered agents for `domains`, in domain order, first occurrence kept.
/// Domains without agents contribute nothing.
pub fn select_agents(domains: &[Domain], registry: &AgentRegistry) -> Vec<String> {
    let mut seen = HashSet::new();
    domains
        .iter()
        .flat_map(|&domain| registry.lookup(domain))
        .filter(|agent| seen.insert(agent.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_in_domain_order() {
        let registry = AgentRegistry::with_defaults();
        let agents = select_agents(&[Domain::Irrigation, Domain::CropSelection], &registry);
        assert_eq!(agents, vec!["irrigation_scheduler_agent", "crop_selection_agent"]);
    }

    #[test]
    fn test_shared_agent_appears_once_at_earliest_position() {
        let registry = AgentRegistry::new();
        registry.register(Domain::PestManagement, "pest_forecaster_agent");
        registry.register(Domain::PestManagement, "field_scout_agent");
        registry.register(Domain::HarvestPlanning, "field_scout_agent");
        registry.register(Domain::HarvestPlanning, "harvest_planning_agent");

        let agents = select_agents(&[Domain::PestManagement, Domain::HarvestPlanning], &registry);
        assert_eq!(
            agents,
            vec!["pest_forecaster_agent", "field_scout_agent", "harvest_planning_agent"]
        );
    }

    #[test]
    fn test_unregistered_domain_contributes_nothing() {
        let registry = AgentRegistry::with_defaults();
        assert!(select_agents(&[Domain::General], &registry).is_empty());
        assert!(select_agents(&[], &registry).is_empty());
    }
}
