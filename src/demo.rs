//! The demonstration script.
//!
//! Runs the configured words, suffixes, prefixes and batches through the
//! trie components and collects the answers in a [`DemoReport`], whose
//! `Display` output is what the binary prints.

use std::fmt::{self, Display, Formatter};

use crate::config::DemoConfig;
use crate::data_structures::{find_longest_common_word, SuffixCounter, SuffixStrategy};

/// Result of one longest-common-prefix case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Input strings
    pub strings: Vec<String>,
    /// Prefix found
    pub prefix: String,
    /// Prefix the case expected, if configured
    pub expected: Option<String>,
}

impl BatchOutcome {
    /// Whether the found prefix agrees with the expectation (vacuously true without one).
    pub fn matches_expected(&self) -> bool {
        self.expected.as_ref().map_or(true, |e| *e == self.prefix)
    }
}

/// Everything the demonstration computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// Words inserted, in insertion order
    pub inserted: Vec<String>,
    /// `(pattern, count)` per suffix query
    pub suffix_counts: Vec<(String, usize)>,
    /// `(prefix, found)` per prefix query
    pub prefix_checks: Vec<(String, bool)>,
    /// One outcome per batch
    pub common_prefixes: Vec<BatchOutcome>,
}

impl DemoReport {
    /// Whether every batch with an expectation produced it.
    pub fn all_expectations_met(&self) -> bool {
        self.common_prefixes.iter().all(BatchOutcome::matches_expected)
    }
}

/// Runs the demonstration.
///
/// Suffix and prefix queries share one counter loaded with `config.words`;
/// every batch gets its own trie.
pub fn run_demo(config: &DemoConfig, strategy: SuffixStrategy) -> DemoReport {
    let _span = tracing::info_span!("demo", ?strategy).entered();

    let mut counter = SuffixCounter::with_strategy(strategy);
    for (index, word) in config.words.iter().enumerate() {
        counter.put(word, index);
    }

    let suffix_counts = config
        .suffixes
        .iter()
        .map(|pattern| (pattern.clone(), counter.count_words_with_suffix(pattern)))
        .collect();

    let prefix_checks = config
        .prefixes
        .iter()
        .map(|prefix| (prefix.clone(), counter.has_prefix(prefix)))
        .collect();

    let common_prefixes = config
        .batches
        .iter()
        .map(|batch| BatchOutcome {
            strings: batch.strings.clone(),
            prefix: find_longest_common_word(&batch.strings),
            expected: batch.expected.clone(),
        })
        .collect();

    let report = DemoReport {
        inserted: config.words.clone(),
        suffix_counts,
        prefix_checks,
        common_prefixes,
    };
    tracing::info!(
        words = report.inserted.len(),
        expectations_met = report.all_expectations_met(),
        "Demo finished"
    );
    report
}

impl Display for DemoReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Adding words to the trie")?;
        for word in &self.inserted {
            writeln!(f, "  + added word: {word}")?;
        }

        writeln!(f, "\n== Suffix counts")?;
        for (pattern, count) in &self.suffix_counts {
            writeln!(f, "  ? words ending with '{pattern}': {count}")?;
        }

        writeln!(f, "\n== Prefix checks")?;
        for (prefix, found) in &self.prefix_checks {
            writeln!(f, "  ? prefix '{prefix}' found: {found}")?;
        }

        writeln!(f, "\n== Longest common prefix")?;
        for outcome in &self.common_prefixes {
            write!(f, "  * {:?} => '{}'", outcome.strings, outcome.prefix)?;
            match &outcome.expected {
                Some(expected) => writeln!(f, " (expected: '{expected}')")?,
                None => writeln!(f)?,
            }
        }

        if self.all_expectations_met() {
            writeln!(f, "\nAll checks complete.")
        } else {
            writeln!(f, "\nSome checks did not match their expected result.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BatchCase;

    #[test]
    fn test_default_script() {
        for strategy in [SuffixStrategy::Enumerate, SuffixStrategy::ReversedIndex] {
            let report = run_demo(&DemoConfig::default(), strategy);

            assert_eq!(report.inserted, vec!["apple", "application", "banana", "cat"]);
            assert_eq!(
                report.suffix_counts,
                vec![
                    ("e".to_string(), 1),
                    ("ion".to_string(), 1),
                    ("a".to_string(), 1),
                    ("at".to_string(), 1),
                ]
            );
            assert_eq!(
                report.prefix_checks,
                vec![
                    ("app".to_string(), true),
                    ("bat".to_string(), false),
                    ("ban".to_string(), true),
                    ("ca".to_string(), true),
                ]
            );
            let prefixes: Vec<&str> = report
                .common_prefixes
                .iter()
                .map(|o| o.prefix.as_str())
                .collect();
            assert_eq!(prefixes, vec!["fl", "inters", ""]);
            assert!(report.all_expectations_met());
        }
    }

    #[test]
    fn test_report_output() {
        let output = run_demo(&DemoConfig::default(), SuffixStrategy::Enumerate).to_string();

        assert!(output.contains("+ added word: application"));
        assert!(output.contains("words ending with 'ion': 1"));
        assert!(output.contains("prefix 'bat' found: false"));
        assert!(output.contains("=> 'inters' (expected: 'inters')"));
        assert!(output.ends_with("All checks complete.\n"));
    }

    #[test]
    fn test_unmet_expectation_is_reported() {
        let config = DemoConfig {
            batches: vec![BatchCase {
                strings: vec!["abc".to_string(), "abd".to_string()],
                expected: Some("abc".to_string()),
            }],
            ..DemoConfig::default()
        };

        let report = run_demo(&config, SuffixStrategy::Enumerate);
        assert!(!report.all_expectations_met());
        assert!(report
            .to_string()
            .contains("Some checks did not match their expected result."));
    }
}
