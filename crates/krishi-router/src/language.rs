//! Language detection for farmer queries.
//!
//! Hindi signal comes from Devanagari script or romanized Hindi words,
//! English signal from English agricultural vocabulary. Both present means
//! the farmer is code-switching.

use krishi_shared::Language;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Romanized Hindi function words and question words
static ROMANIZED_FUNCTION_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(hai|hain|ka|ki|ke|ko|se|kya|kaun|kab|kaise|kahan|mujhe|chahiye|milega|milegi|karna|karein|mein|aur|nahi)\b",
    )
    .expect("romanized function word pattern")
});

/// Romanized Hindi farming vocabulary
static ROMANIZED_AGRI_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(fasal|pani|kheti|khet|kisan|bimari|dawai|khad|beej|bhav|sinchai)\b")
        .expect("romanized agri term pattern")
});

/// English farming vocabulary
static ENGLISH_AGRI_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(crops?|water|pests?|farms?|farming|seeds?|harvest|plants?|grow|loans?|market|prices?|sell|fertili[sz]ers?|irrigation|yield|soil)\b",
    )
    .expect("english agri term pattern")
});

/// Raw evidence collected from the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageSignals {
    /// Any character in the Devanagari block (U+0900..=U+097F)
    pub devanagari: bool,
    /// Romanized Hindi word hits
    pub romanized_hits: usize,
    /// English agricultural term hits
    pub english_hits: usize,
}

impl LanguageSignals {
    pub fn collect(text: &str) -> Self {
        Self {
            devanagari: text.chars().any(is_devanagari),
            romanized_hits: ROMANIZED_FUNCTION_WORDS.find_iter(text).count()
                + ROMANIZED_AGRI_TERMS.find_iter(text).count(),
            english_hits: ENGLISH_AGRI_TERMS.find_iter(text).count(),
        }
    }

    fn has_hindi(&self) -> bool {
        self.devanagari || self.romanized_hits > 0
    }

    pub fn language(&self) -> Language {
        if self.has_hindi() && self.english_hits > 0 {
            Language::Mixed
        } else if self.devanagari || self.romanized_hits > self.english_hits {
            Language::Hindi
        } else {
            Language::English
        }
    }
}

fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Detect query language. Blank text is English.
pub fn detect_language(text: &str) -> Language {
    if text.trim().is_empty() {
        return Language::English;
    }

    let signals = LanguageSignals::collect(text);
    let language = signals.language();
    debug!(
        "Language signals: devanagari={}, romanized={}, english={} => {}",
        signals.devanagari, signals.romanized_hits, signals.english_hits, language
    );
    language
}
