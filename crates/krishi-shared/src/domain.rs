//! Advisory domains a farmer's query can be routed to.
//!
//! Pinned ordering for deterministic behavior:
//! CropSelection, PestManagement, Irrigation, FinancePolicy, MarketTiming,
//! HarvestPlanning, InputMaterials, General

use crate::error::KrishiError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Closed set of advisory topics.
/// Order is pinned; classifier ties keep this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Which crop or variety to sow, seasonal suitability
    CropSelection,
    /// Pests, diseases, spraying
    PestManagement,
    /// Water scheduling, irrigation methods
    Irrigation,
    /// Loans, subsidies, insurance, government schemes
    FinancePolicy,
    /// Mandi prices, when to sell
    MarketTiming,
    /// Harvest timing, maturity, post-harvest
    HarvestPlanning,
    /// Fertilizer, manure, seed inputs
    InputMaterials,
    /// Fallback when nothing else matched
    General,
}

/// Dependency class used by the execution planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainClass {
    /// Advice that stands on its own
    Independent,
    /// Advice that builds on independent advice (e.g. irrigation needs the crop)
    Dependent,
}

impl Domain {
    /// Every domain in pinned order, `General` last.
    pub const ALL: [Domain; 8] = [
        Domain::CropSelection,
        Domain::PestManagement,
        Domain::Irrigation,
        Domain::FinancePolicy,
        Domain::MarketTiming,
        Domain::HarvestPlanning,
        Domain::InputMaterials,
        Domain::General,
    ];

    /// Domains that carry classification patterns.
    pub const SPECIALIZED: [Domain; 7] = [
        Domain::CropSelection,
        Domain::PestManagement,
        Domain::Irrigation,
        Domain::FinancePolicy,
        Domain::MarketTiming,
        Domain::HarvestPlanning,
        Domain::InputMaterials,
    ];

    /// Snake-case name used in config files and on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CropSelection => "crop_selection",
            Self::PestManagement => "pest_management",
            Self::Irrigation => "irrigation",
            Self::FinancePolicy => "finance_policy",
            Self::MarketTiming => "market_timing",
            Self::HarvestPlanning => "harvest_planning",
            Self::InputMaterials => "input_materials",
            Self::General => "general",
        }
    }

    /// Dependency class, `None` for `General`
    pub fn class(&self) -> Option<DomainClass> {
        match self {
            Self::CropSelection
            | Self::PestManagement
            | Self::FinancePolicy
            | Self::MarketTiming => Some(DomainClass::Independent),
            Self::Irrigation | Self::HarvestPlanning | Self::InputMaterials => {
                Some(DomainClass::Dependent)
            }
            Self::General => None,
        }
    }

    /// Short human label, shown by `krishictl domains`
    pub fn label(&self) -> &'static str {
        match self {
            Self::CropSelection => "crop selection",
            Self::PestManagement => "pest control",
            Self::Irrigation => "irrigation",
            Self::FinancePolicy => "loans and schemes",
            Self::MarketTiming => "market prices",
            Self::HarvestPlanning => "harvest planning",
            Self::InputMaterials => "fertilizers and inputs",
            Self::General => "general farming",
        }
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::General
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for DomainClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Independent => write!(f, "independent"),
            Self::Dependent => write!(f, "dependent"),
        }
    }
}

impl FromStr for Domain {
    type Err = KrishiError;

    /// Accepts the snake-case name, case-insensitive, with `-` or space
    /// in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Domain::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == normalized)
            .ok_or_else(|| KrishiError::UnknownDomain(s.to_string()))
    }
}
