//! Corpus-driven router tests.
//!
//! Validates the pattern router against golden expectations in query_corpus.tsv.
//! Ensures >= 80% of the corpus routes to a specialized domain (not General).

use krishi_router::{AgentRegistry, Domain, Language, Router};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Parsed corpus entry
#[derive(Debug)]
struct CorpusEntry {
    query: String,
    expected_domains: Vec<Domain>,
    expected_language: Language,
    line_num: usize,
}

/// Parse the query corpus TSV file
fn parse_corpus() -> Vec<CorpusEntry> {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = PathBuf::from(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join("query_corpus.tsv");

    let content = fs::read_to_string(&path).expect("Failed to read query_corpus.tsv");

    let mut entries = Vec::new();

    for (line_idx, line) in content.lines().enumerate() {
        let line_num = line_idx + 1;
        let line = line.trim();

        // Skip empty lines, comments and the header
        if line.is_empty() || line.starts_with('#') || line.starts_with("query\t") {
            continue;
        }

        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() != 3 {
            panic!("Line {}: expected 3 columns, got {}", line_num, parts.len());
        }

        let expected_domains = parts[1]
            .split(',')
            .map(|s| {
                s.trim()
                    .parse::<Domain>()
                    .unwrap_or_else(|e| panic!("Line {}: {}", line_num, e))
            })
            .collect();
        let expected_language = parts[2]
            .parse::<Language>()
            .unwrap_or_else(|e| panic!("Line {}: {}", line_num, e));

        entries.push(CorpusEntry {
            query: parts[0].to_string(),
            expected_domains,
            expected_language,
            line_num,
        });
    }

    entries
}

fn router() -> Router {
    Router::new(Arc::new(AgentRegistry::with_defaults()))
}

#[test]
fn test_corpus_minimum_size() {
    let entries = parse_corpus();
    assert!(
        entries.len() >= 30,
        "Corpus must have >= 30 entries, got {}",
        entries.len()
    );
}

#[test]
fn test_corpus_specialized_coverage() {
    let entries = parse_corpus();
    let total = entries.len();
    let specialized = entries
        .iter()
        .filter(|e| e.expected_domains != [Domain::General])
        .count();

    let coverage = (specialized as f64 / total as f64) * 100.0;
    assert!(
        coverage >= 80.0,
        "Specialized coverage must be >= 80%, got {:.1}% ({}/{})",
        coverage,
        specialized,
        total
    );
}

#[test]
fn test_corpus_covers_every_domain() {
    let entries = parse_corpus();
    for domain in Domain::ALL {
        assert!(
            entries.iter().any(|e| e.expected_domains.contains(&domain)),
            "Corpus has no query for {}",
            domain
        );
    }
}

#[test]
fn test_corpus_parses_correctly() {
    let entries = parse_corpus();

    let crop = entries
        .iter()
        .find(|e| e.query == "What crop should I grow in Punjab during Rabi season?")
        .expect("Missing crop selection query in corpus");
    assert_eq!(crop.expected_domains, vec![Domain::CropSelection]);
    assert_eq!(crop.expected_language, Language::English);

    let multi = entries
        .iter()
        .find(|e| e.query == "pest attack and irrigation problem")
        .expect("Missing multi-domain query in corpus");
    assert_eq!(
        multi.expected_domains,
        vec![Domain::PestManagement, Domain::Irrigation]
    );
}

#[test]
fn test_corpus_domains_match_router() {
    let router = router();
    let mut failures = Vec::new();

    for entry in parse_corpus() {
        let decision = router.route_text(&entry.query).unwrap();
        if decision.detected_domains() != entry.expected_domains.as_slice() {
            failures.push(format!(
                "line {}: {:?} => {:?}, expected {:?}",
                entry.line_num,
                entry.query,
                decision.detected_domains(),
                entry.expected_domains
            ));
        }
    }

    assert!(failures.is_empty(), "Domain mismatches:\n{}", failures.join("\n"));
}

#[test]
fn test_corpus_language_matches_router() {
    let router = router();
    let mut failures = Vec::new();

    for entry in parse_corpus() {
        let decision = router.route_text(&entry.query).unwrap();
        if decision.detected_language() != entry.expected_language {
            failures.push(format!(
                "line {}: {:?} => {}, expected {}",
                entry.line_num,
                entry.query,
                decision.detected_language(),
                entry.expected_language
            ));
        }
    }

    assert!(failures.is_empty(), "Language mismatches:\n{}", failures.join("\n"));
}

#[test]
fn test_corpus_routing_is_deterministic() {
    let router = router();
    for entry in parse_corpus() {
        let first = router.route_text(&entry.query).unwrap();
        let second = router.route_text(&entry.query).unwrap();
        assert_eq!(first.detected_domains(), second.detected_domains());
        assert_eq!(first.confidence(), second.confidence());
        assert_eq!(first.selected_agents(), second.selected_agents());
        assert_eq!(first.execution_plan(), second.execution_plan());
    }
}
