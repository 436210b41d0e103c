//! Structural heading detection for Local Plan text.
//!
//! Rules are evaluated in table order and the first hit wins. The order is
//! part of the contract: reordering the table changes classification.

use localplan_core::config::{DEFAULT_MAX_HEADING_CHARS, DEFAULT_MIN_HEADING_CHARS};
use localplan_core::SectionType;
use once_cell::sync::Lazy;
use regex::Regex;

/// Classification result for one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingMatch {
    pub section_type: SectionType,
    /// The heading line as it will appear in chunk metadata.
    pub text: String,
}

/// One entry of the ordered rule table.
#[derive(Debug, Clone)]
pub struct HeadingRule {
    pub section_type: SectionType,
    pub pattern: Regex,
}

impl HeadingRule {
    fn new(section_type: SectionType, pattern: &str) -> Self {
        Self {
            section_type,
            pattern: Regex::new(pattern).expect("Invalid heading regex"),
        }
    }
}

static DEFAULT_RULES: Lazy<Vec<HeadingRule>> = Lazy::new(|| {
    vec![
        // "Policy H1:", "Policy SA(BE) 1:", "Policy EC2a: Employment"
        HeadingRule::new(
            SectionType::Policy,
            r"^(?i:policy)\s+[A-Z0-9()]+(?:\s*\d+[a-z]?)?:",
        ),
        // "Appendix B", "APPENDIX 3 Glossary"
        HeadingRule::new(SectionType::Appendix, r"^(?i:appendix)\s+[A-Z0-9]"),
        // "1 INTRODUCTION", "12 DELIVERING NEW HOMES"; whole line only
        HeadingRule::new(SectionType::Chapter, r"^\d{1,2} [A-Z][A-Z ]{3,59}$"),
        // "Chapter 4", "PART B", "Section 2"
        HeadingRule::new(SectionType::Chapter, r"^(?i:chapter|part|section)\s+[A-Z0-9]"),
        // "1.1 Background", "3.2.4 Design"; sub-sections stay under their chapter
        HeadingRule::new(SectionType::SupportingText, r"^\d+\.\d+(?:\.\d+)? [A-Z][a-z]+"),
    ]
});

/// Decides whether a normalised line opens a new section.
#[derive(Debug, Clone)]
pub struct HeadingClassifier {
    rules: Vec<HeadingRule>,
    min_chars: usize,
    max_chars: usize,
}

impl Default for HeadingClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_HEADING_CHARS, DEFAULT_MAX_HEADING_CHARS)
    }
}

impl HeadingClassifier {
    /// Classifier with the Local Plan rule table and the given length guard.
    pub fn new(min_chars: usize, max_chars: usize) -> Self {
        Self::with_rules(DEFAULT_RULES.clone(), min_chars, max_chars)
    }

    /// Classifier over a caller-supplied ordered rule table.
    pub fn with_rules(rules: Vec<HeadingRule>, min_chars: usize, max_chars: usize) -> Self {
        Self {
            rules,
            min_chars,
            max_chars,
        }
    }

    #[cfg(test)]
    pub(crate) fn rules(&self) -> &[HeadingRule] {
        &self.rules
    }

    /// Returns the first matching rule's section type, or `None`.
    ///
    /// Lines outside `min_chars..=max_chars` are rejected before any rule runs.
    pub fn classify(&self, line: &str) -> Option<HeadingMatch> {
        let len = line.chars().count();
        if len < self.min_chars || len > self.max_chars {
            return None;
        }
        self.rules
            .iter()
            .find(|rule| rule.pattern.is_match(line))
            .map(|rule| HeadingMatch {
                section_type: rule.section_type,
                text: line.to_string(),
            })
    }
}
