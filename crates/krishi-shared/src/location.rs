//! Farm location.

use serde::{Deserialize, Serialize};

/// Placeholder district when only the state is known
pub const UNKNOWN_DISTRICT: &str = "Unknown";

/// Geographic location of the farmer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub state: String,
    #[serde(default = "default_district")]
    pub district: String,
}

fn default_district() -> String {
    UNKNOWN_DISTRICT.to_string()
}

impl Location {
    pub fn new(state: impl Into<String>, district: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            district: district.into(),
        }
    }

    /// Location with only the state known
    pub fn state_only(state: impl Into<String>) -> Self {
        Self::new(state, UNKNOWN_DISTRICT)
    }

    pub fn has_district(&self) -> bool {
        self.district != UNKNOWN_DISTRICT
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.has_district() {
            write!(f, "{}, {}", self.district, self.state)
        } else {
            write!(f, "{}", self.state)
        }
    }
}
