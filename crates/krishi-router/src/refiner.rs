//! Optional classification refinement.
//!
//! A refiner (typically backed by an LLM) gets a second look at the query
//! after pattern classification. The router works without one. When a
//! refiner answers with domains they replace the pattern domains and the
//! two confidences are averaged; an empty answer or an error leaves the
//! pattern result in place.

use crate::classifier::Classification;
use krishi_shared::decision::clamp_unit;
use krishi_shared::{Domain, KrishiError, QueryContext};
use serde::Deserialize;
use tracing::warn;

pub trait DomainRefiner: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str {
        "refiner"
    }

    /// `Ok(None)` means the refiner has no opinion
    fn refine(&self, text: &str, context: &QueryContext) -> Result<Option<Refinement>, KrishiError>;
}

/// A refiner's answer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Refinement {
    pub domains: Vec<Domain>,
    pub confidence: Option<f64>,
}

/// JSON shape returned by the classification model
#[derive(Debug, Deserialize)]
struct RefinerResponse {
    #[serde(default)]
    primary_domains: Vec<String>,
    #[serde(default)]
    confidence: Option<f64>,
}

impl Refinement {
    pub fn new(domains: Vec<Domain>) -> Self {
        Self {
            domains,
            confidence: None,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Build from domain names, skipping names outside the closed set
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains = labels
            .into_iter()
            .filter_map(|label| match label.as_ref().parse::<Domain>() {
                Ok(domain) => Some(domain),
                Err(e) => {
                    warn!("Refiner returned {}, skipping", e);
                    None
                }
            })
            .collect();
        Self::new(domains)
    }

    /// Parse a model response such as
    /// `{"primary_domains": ["irrigation"], "confidence": 0.85}`.
    /// Markdown code fences around the JSON are tolerated.
    pub fn from_json(response: &str) -> Result<Self, KrishiError> {
        let body = strip_code_fence(response);
        let parsed: RefinerResponse = serde_json::from_str(body)?;
        let mut refinement = Self::from_labels(parsed.primary_domains);
        refinement.confidence = parsed.confidence;
        Ok(refinement)
    }

    /// Domains deduplicated, `General` dropped when anything else is present
    fn normalized_domains(&self) -> Vec<Domain> {
        let mut domains: Vec<Domain> = Vec::with_capacity(self.domains.len());
        for &domain in &self.domains {
            if !domains.contains(&domain) {
                domains.push(domain);
            }
        }
        if domains.iter().any(|d| *d != Domain::General) {
            domains.retain(|d| *d != Domain::General);
        }
        domains
    }

    /// Merge into a pattern classification. `None` when the refinement
    /// names no domain.
    pub fn merge(&self, pattern: &Classification) -> Option<Classification> {
        let domains = self.normalized_domains();
        if domains.is_empty() {
            return None;
        }

        let refined_confidence = self.confidence.map(clamp_unit).unwrap_or(pattern.confidence);
        Some(Classification {
            domains,
            confidence: clamp_unit((pattern.confidence + refined_confidence) / 2.0),
            scores: pattern.scores.clone(),
        })
    }
}

fn strip_code_fence(response: &str) -> &str {
    let trimmed = response.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
