//! `krishictl eval CORPUS` - corpus accuracy check
//!
//! Corpus format is the router's golden TSV: `query<TAB>domains[<TAB>...]`
//! with comma-separated domain names. Blank lines, `#` comments and a
//! `query` header row are skipped. A line is a hit when the decision
//! contains every expected domain.

use anyhow::{bail, Context, Result};
use krishi_router::{Config, Router};
use krishi_shared::Domain;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct CorpusEntry {
    pub line: usize,
    pub query: String,
    pub expected: Vec<Domain>,
}

#[derive(Debug, Default)]
pub struct EvalReport {
    pub total: usize,
    pub hits: usize,
    pub misses: Vec<String>,
}

impl EvalReport {
    /// Percentage of hits; an empty corpus scores zero
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.hits as f64 / self.total as f64 * 100.0
    }
}

pub fn parse_corpus(content: &str) -> Result<Vec<CorpusEntry>> {
    let mut entries = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("query\t") {
            continue;
        }

        let mut columns = line.split('\t');
        let query = columns.next().unwrap_or_default().trim();
        let Some(domains) = columns.next() else {
            bail!("Line {}: expected query<TAB>domains", line_num);
        };

        let expected = domains
            .split(',')
            .map(|name| {
                name.trim()
                    .parse::<Domain>()
                    .with_context(|| format!("Line {}", line_num))
            })
            .collect::<Result<Vec<_>>>()?;

        entries.push(CorpusEntry {
            line: line_num,
            query: query.to_string(),
            expected,
        });
    }

    Ok(entries)
}

pub fn evaluate(router: &Router, entries: &[CorpusEntry]) -> Result<EvalReport> {
    let mut report = EvalReport::default();

    for entry in entries {
        let decision = router
            .route_text(&entry.query)
            .with_context(|| format!("Line {}", entry.line))?;
        let detected = decision.detected_domains();

        report.total += 1;
        if entry.expected.iter().all(|d| detected.contains(d)) {
            report.hits += 1;
        } else {
            debug!("Miss on line {}: {:?}", entry.line, detected);
            report.misses.push(format!(
                "line {}: {:?} => {:?}, expected {:?}",
                entry.line, entry.query, detected, entry.expected
            ));
        }
    }

    Ok(report)
}

pub fn run(config: &Config, corpus: &Path, min_accuracy: f64) -> Result<()> {
    let content = fs::read_to_string(corpus)
        .with_context(|| format!("Failed to read corpus {}", corpus.display()))?;
    let entries = parse_corpus(&content)?;
    if entries.is_empty() {
        bail!("Corpus {} has no entries", corpus.display());
    }

    let router = Router::from_config(config)?;
    let report = evaluate(&router, &entries)?;

    for miss in &report.misses {
        println!("MISS {}", miss);
    }
    println!(
        "Accuracy: {}/{} ({:.1}%)",
        report.hits,
        report.total,
        report.accuracy()
    );

    if report.accuracy() < min_accuracy {
        bail!(
            "Accuracy {:.1}% is below the required {:.1}%",
            report.accuracy(),
            min_accuracy
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use krishi_shared::AgentRegistry;
    use std::sync::Arc;

    const CORPUS: &str = "\
# sample
query\tdomains\tlanguage

What crop should I grow in Punjab during Rabi season?\tcrop_selection\ten
pest attack and irrigation problem\tirrigation,pest_management\ten
asdkjasd random gibberish\tmarket_timing
";

    #[test]
    fn test_parse_skips_comments_and_header() {
        let entries = parse_corpus(CORPUS).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].line, 4);
        assert_eq!(entries[0].expected, vec![Domain::CropSelection]);
        assert_eq!(
            entries[1].expected,
            vec![Domain::Irrigation, Domain::PestManagement]
        );
    }

    #[test]
    fn test_parse_rejects_unknown_domain() {
        let err = parse_corpus("hello\tweather\n").unwrap_err();
        assert!(format!("{:#}", err).contains("Line 1"));
    }

    #[test]
    fn test_parse_rejects_missing_column() {
        assert!(parse_corpus("just a query\n").is_err());
    }

    #[test]
    fn test_evaluate_counts_hits_regardless_of_order() {
        let router = Router::new(Arc::new(AgentRegistry::with_defaults()));
        let entries = parse_corpus(CORPUS).unwrap();
        let report = evaluate(&router, &entries).unwrap();

        assert_eq!(report.total, 3);
        assert_eq!(report.hits, 2);
        assert_eq!(report.misses.len(), 1);
        assert!(report.misses[0].starts_with("line 6"));
    }

    #[test]
    fn test_empty_report_accuracy() {
        assert_eq!(EvalReport::default().accuracy(), 0.0);
    }
}
