//! Farmer query, the router's input.

use crate::language::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-form hints supplied by the chat front-end (e.g. `location`)
pub type QueryContext = serde_json::Map<String, Value>;

/// Opaque query identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryId(String);

impl QueryId {
    pub fn generate() -> Self {
        Self(format!("query_{}", uuid::Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for QueryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for QueryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A farmer's query. Text is validated by the router, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    pub id: QueryId,
    pub text: String,
    /// Language claimed by the caller; `None` when unspecified
    #[serde(default)]
    pub declared_language: Option<Language>,
    #[serde(default)]
    pub context: QueryContext,
    pub received_at: DateTime<Utc>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: QueryId::generate(),
            text: text.into(),
            declared_language: None,
            context: QueryContext::new(),
            received_at: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = QueryId::from(id.into());
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.declared_language = Some(language);
        self
    }

    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// True when the text has no visible characters
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
