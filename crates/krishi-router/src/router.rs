//! Query router: the single entry point of this crate.
//!
//! Single pass, no retries:
//! language + domains -> (refinement) -> location -> agents -> plan -> decision.
//! A query nothing matched is a valid low-confidence `General` decision,
//! not an error.

use crate::classifier::{Classification, DomainClassifier};
use crate::config::{Config, RoutingSettings};
use crate::decision::build_decision;
use crate::language::detect_language;
use crate::location::extract_location;
use crate::planner::plan_execution;
use crate::refiner::DomainRefiner;
use crate::selector::select_agents;
use krishi_shared::{AgentRegistry, KrishiError, Query, RoutingDecision};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Routes farmer queries to specialist agents. Cheap to share across
/// threads; holds no per-query state.
#[derive(Clone)]
pub struct Router {
    registry: Arc<AgentRegistry>,
    settings: RoutingSettings,
    classifier: DomainClassifier,
    refiner: Option<Arc<dyn DomainRefiner>>,
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("registry", &self.registry)
            .field("settings", &self.settings)
            .field("refiner", &self.refiner.as_ref().map(|r| r.name().to_string()))
            .finish()
    }
}

impl Router {
    pub fn new(registry: Arc<AgentRegistry>) -> Self {
        let settings = RoutingSettings::default();
        Self {
            registry,
            classifier: DomainClassifier::new(&settings),
            settings,
            refiner: None,
        }
    }

    /// Router with the registry and thresholds a config describes
    pub fn from_config(config: &Config) -> Result<Self, KrishiError> {
        config.validate()?;
        let registry = Arc::new(config.build_registry()?);
        Self::new(registry).with_settings(config.routing.clone())
    }

    /// Override thresholds. Out-of-range or NaN values are rejected.
    pub fn with_settings(mut self, settings: RoutingSettings) -> Result<Self, KrishiError> {
        settings.validate()?;
        self.classifier = DomainClassifier::new(&settings);
        self.settings = settings;
        Ok(self)
    }

    pub fn with_refiner(mut self, refiner: Arc<dyn DomainRefiner>) -> Self {
        self.refiner = Some(refiner);
        self
    }

    /// Route a query. Fails only on blank text.
    pub fn route(&self, query: &Query) -> Result<RoutingDecision, KrishiError> {
        if query.is_blank() {
            return Err(KrishiError::InvalidQuery);
        }

        let text = query.text.as_str();
        debug!("Routing {}: {:.100}", query.id, text);

        let language = detect_language(text);
        if let Some(declared) = query.declared_language {
            if declared != language {
                debug!("Declared language {} overridden by detected {}", declared, language);
            }
        }

        let classification = self.classifier.classify(text);
        let (classification, refined) = self.refine(query, classification);

        let location = extract_location(text, &query.context);
        let agents = select_agents(&classification.domains, &self.registry);
        let plan = plan_execution(
            &classification.domains,
            &agents,
            self.settings.max_parallel_agents,
        );

        let decision = build_decision(
            query,
            classification,
            language,
            location,
            agents,
            plan,
            refined,
            self.settings.clarification_threshold,
        );

        info!(
            "Routing decision for {}: domains={:?}, {} agent(s), {} execution, confidence={:.2}, clarify={}",
            decision.query_id(),
            decision.detected_domains(),
            decision.selected_agents().len(),
            decision.execution_plan(),
            decision.confidence(),
            decision.requires_clarification()
        );

        Ok(decision)
    }

    /// Route bare text with no declared language or context
    pub fn route_text(&self, text: &str) -> Result<RoutingDecision, KrishiError> {
        self.route(&Query::new(text))
    }

    /// Consult the refiner, if any. Refiner failures never fail the route.
    fn refine(&self, query: &Query, pattern: Classification) -> (Classification, bool) {
        let Some(refiner) = &self.refiner else {
            return (pattern, false);
        };

        match refiner.refine(&query.text, &query.context) {
            Ok(Some(refinement)) => match refinement.merge(&pattern) {
                Some(merged) => {
                    debug!(
                        "{} refined domains {:?} -> {:?}",
                        refiner.name(),
                        pattern.domains,
                        merged.domains
                    );
                    (merged, true)
                }
                None => (pattern, false),
            },
            Ok(None) => (pattern, false),
            Err(e) => {
                warn!("{} failed, keeping pattern classification: {}", refiner.name(), e);
                (pattern, false)
            }
        }
    }
}
