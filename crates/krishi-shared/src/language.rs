//! Query language.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Language of a query. Hindi is the target language; `Mixed` is
/// code-switched Hindi-English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "mixed")]
    Mixed,
}

impl Default for Language {
    fn default() -> Self {
        Self::English
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::English => write!(f, "en"),
            Self::Hindi => write!(f, "hi"),
            Self::Mixed => write!(f, "mixed"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "hi" | "hindi" => Ok(Self::Hindi),
            "mixed" | "hinglish" => Ok(Self::Mixed),
            other => Err(format!("unknown language: {}", other)),
        }
    }
}
