//! Registry of specialist agents per advisory domain.
//!
//! Populated at startup, read on every routed query, appended to when a new
//! specialist comes online. Entries are never removed, so a reader never
//! observes a partially torn map even after a writer panicked.
//!
//! Share it through `Arc<AgentRegistry>`; all methods take `&self`.

use crate::domain::Domain;
use crate::error::KrishiError;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Default specialist for each specialized domain
pub const DEFAULT_AGENTS: [(Domain, &str); 7] = [
    (Domain::CropSelection, "crop_selection_agent"),
    (Domain::PestManagement, "pest_forecaster_agent"),
    (Domain::Irrigation, "irrigation_scheduler_agent"),
    (Domain::FinancePolicy, "finance_policy_agent"),
    (Domain::MarketTiming, "market_timing_agent"),
    (Domain::HarvestPlanning, "harvest_planning_agent"),
    (Domain::InputMaterials, "input_materials_agent"),
];

#[derive(Debug, Default)]
pub struct AgentRegistry {
    agents: RwLock<HashMap<Domain, Vec<String>>>,
}

impl AgentRegistry {
    /// Create empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create registry with one default specialist per specialized domain
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        for (domain, agent_id) in DEFAULT_AGENTS {
            registry.register(domain, agent_id);
        }
        registry
    }

    /// Register an agent under a domain. Re-registering the same agent under
    /// the same domain is a no-op.
    pub fn register(&self, domain: Domain, agent_id: impl Into<String>) {
        let agent_id = agent_id.into();
        let mut agents = self.write();
        let entry = agents.entry(domain).or_default();
        if entry.contains(&agent_id) {
            debug!("Agent {} already registered for {}", agent_id, domain);
            return;
        }
        debug!("Registered agent {} for {}", agent_id, domain);
        entry.push(agent_id);
    }

    /// Register an agent under a domain given by name
    pub fn register_named(
        &self,
        domain: &str,
        agent_id: impl Into<String>,
    ) -> Result<(), KrishiError> {
        let domain: Domain = domain.parse()?;
        self.register(domain, agent_id);
        Ok(())
    }

    /// Register a batch of `(domain name, agent id)` pairs.
    ///
    /// Every name is validated before anything is registered, so an unknown
    /// domain leaves the registry untouched.
    pub fn register_mapping<I, D, A>(&self, mapping: I) -> Result<usize, KrishiError>
    where
        I: IntoIterator<Item = (D, A)>,
        D: AsRef<str>,
        A: Into<String>,
    {
        let parsed = mapping
            .into_iter()
            .map(|(name, agent)| Ok((name.as_ref().parse::<Domain>()?, agent.into())))
            .collect::<Result<Vec<(Domain, String)>, KrishiError>>()?;

        let count = parsed.len();
        for (domain, agent_id) in parsed {
            self.register(domain, agent_id);
        }
        Ok(count)
    }

    /// Agents registered for a domain, in registration order
    pub fn lookup(&self, domain: Domain) -> Vec<String> {
        self.read().get(&domain).cloned().unwrap_or_default()
    }

    /// Whether any agent serves the domain
    pub fn has_agents(&self, domain: Domain) -> bool {
        self.read().get(&domain).is_some_and(|a| !a.is_empty())
    }

    /// Domains with at least one agent, in pinned domain order
    pub fn domains(&self) -> Vec<Domain> {
        let agents = self.read();
        Domain::ALL
            .iter()
            .copied()
            .filter(|d| agents.get(d).is_some_and(|a| !a.is_empty()))
            .collect()
    }

    /// Total number of (domain, agent) registrations
    pub fn len(&self) -> usize {
        self.read().values().map(Vec::len).sum()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<Domain, Vec<String>>> {
        self.agents.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Domain, Vec<String>>> {
        self.agents.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// Tests: tests/registry_tests.rs
