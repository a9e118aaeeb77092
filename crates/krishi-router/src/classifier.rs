//! Multi-label domain classifier.
//!
//! Scores every specialized domain by pattern hit density
//! (`hits / patterns in table`) and keeps every domain that reaches
//! `multi_label_ratio` of the top score, so a query about pests *and*
//! irrigation is routed to both.

use crate::config::RoutingSettings;
use crate::patterns::pattern_table;
use krishi_shared::decision::clamp_unit;
use krishi_shared::{Domain, DomainScore};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::debug;

/// Compiled pattern tables, in pinned domain order
static COMPILED: LazyLock<Vec<(Domain, Vec<Regex>)>> = LazyLock::new(|| {
    Domain::SPECIALIZED
        .iter()
        .map(|&domain| {
            let patterns = pattern_table(domain)
                .iter()
                .map(|p| Regex::new(p).expect("domain pattern must compile"))
                .collect();
            (domain, patterns)
        })
        .collect()
});

/// Result of classifying one query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    /// Selected domains, best first; `[General]` when nothing scored
    pub domains: Vec<Domain>,
    /// Mean score of the selected domains, in `[0, 1]`
    pub confidence: f64,
    /// Every domain that scored above zero, best first
    pub scores: Vec<DomainScore>,
}

impl Classification {
    /// Fallback result when no pattern matched
    pub fn general(confidence: f64) -> Self {
        Self {
            domains: vec![Domain::General],
            confidence: clamp_unit(confidence),
            scores: Vec::new(),
        }
    }

    pub fn is_general(&self) -> bool {
        self.domains == [Domain::General]
    }
}

#[derive(Debug, Clone)]
pub struct DomainClassifier {
    multi_label_ratio: f64,
    general_confidence: f64,
}

impl Default for DomainClassifier {
    fn default() -> Self {
        Self::new(&RoutingSettings::default())
    }
}

impl DomainClassifier {
    pub fn new(settings: &RoutingSettings) -> Self {
        Self {
            multi_label_ratio: settings.multi_label_ratio,
            general_confidence: settings.general_confidence,
        }
    }

    /// Score every specialized domain that matched at least once
    pub fn score(&self, text: &str) -> Vec<DomainScore> {
        COMPILED
            .iter()
            .filter_map(|(domain, patterns)| {
                let hits: usize = patterns.iter().map(|p| p.find_iter(text).count()).sum();
                (hits > 0).then(|| DomainScore::new(*domain, hits as f64 / patterns.len() as f64))
            })
            .collect()
    }

    pub fn classify(&self, text: &str) -> Classification {
        let mut scores = self.score(text);
        if scores.is_empty() {
            debug!("No domain pattern matched, falling back to general");
            return Classification::general(self.general_confidence);
        }

        // Stable sort: ties keep pinned domain order
        scores.sort_by(|a, b| b.score.total_cmp(&a.score));

        let cutoff = scores[0].score * self.multi_label_ratio;
        let selected: Vec<&DomainScore> = scores.iter().filter(|s| s.score >= cutoff).collect();
        let confidence =
            clamp_unit(selected.iter().map(|s| s.score).sum::<f64>() / selected.len() as f64);
        let domains = selected.iter().map(|s| s.domain).collect();

        debug!("Domain scores: {:?}, cutoff {:.3}", scores, cutoff);

        Classification {
            domains,
            confidence,
            scores,
        }
    }
}
