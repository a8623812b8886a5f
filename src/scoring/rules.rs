//! @acp:module "Priority Rules"
//! @acp:summary "Ordered (predicate, outcome) table for priority classification"
//! @acp:domain roadmap
//! @acp:layer logic
//!
//! Rules are evaluated top to bottom and the first match decides the
//! priority. Recommendations matching no rule fall back to the score
//! threshold in [`super::score`].

use regex::Regex;
use std::sync::LazyLock;

use crate::model::{Priority, Recommendation};

/// Which part of a recommendation a rule inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextScope {
    Description,
    DescriptionAndBenefits,
}

impl TextScope {
    /// Lowercased text the rule runs against
    fn extract(&self, rec: &Recommendation) -> String {
        match self {
            TextScope::Description => rec.description.to_lowercase(),
            TextScope::DescriptionAndBenefits => {
                let mut text = rec.description.to_lowercase();
                for benefit in &rec.benefits {
                    text.push('\n');
                    text.push_str(&benefit.to_lowercase());
                }
                text
            }
        }
    }
}

/// Text predicate over already-lowercased text
#[derive(Debug)]
pub enum Matcher {
    /// Any keyword occurs as a substring
    AnyKeyword(&'static [&'static str]),
    /// Every nested matcher holds
    AllOf(Vec<Matcher>),
    /// Regex match
    Pattern(Regex),
}

impl Matcher {
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Matcher::AnyKeyword(keywords) => keywords.iter().any(|k| text.contains(k)),
            Matcher::AllOf(matchers) => matchers.iter().all(|m| m.is_match(text)),
            Matcher::Pattern(regex) => regex.is_match(text),
        }
    }
}

/// @acp:summary "One classification rule"
#[derive(Debug)]
pub struct PriorityRule {
    pub name: &'static str,
    pub scope: TextScope,
    pub matcher: Matcher,
    pub outcome: Priority,
}

impl PriorityRule {
    pub fn matches(&self, rec: &Recommendation) -> bool {
        self.matcher.is_match(&self.scope.extract(rec))
    }
}

const SEVERITY_KEYWORDS: &[&str] = &[
    "critical",
    "high severity",
    "high-severity",
    "severity: high",
    "severity high",
];

const SECURITY_KEYWORDS: &[&str] = &["security", "vulnerab", "cve-"];

/// Built-in classification table, in evaluation order
pub static PRIORITY_RULES: LazyLock<Vec<PriorityRule>> = LazyLock::new(|| {
    vec![
        PriorityRule {
            name: "security-severity",
            scope: TextScope::DescriptionAndBenefits,
            matcher: Matcher::AllOf(vec![
                Matcher::AnyKeyword(SEVERITY_KEYWORDS),
                Matcher::AnyKeyword(SECURITY_KEYWORDS),
            ]),
            outcome: Priority::Critical,
        },
        PriorityRule {
            name: "deprecated",
            scope: TextScope::Description,
            matcher: Matcher::Pattern(
                Regex::new(
                    r"\b(deprecated|unmaintained|no longer (maintained|supported)|end[- ]of[- ]life)\b",
                )
                .unwrap(),
            ),
            outcome: Priority::High,
        },
        PriorityRule {
            name: "breaking-changes",
            scope: TextScope::Description,
            matcher: Matcher::Pattern(Regex::new(r"\bbreaking[\s-]+changes?\b").unwrap()),
            outcome: Priority::High,
        },
    ]
});

/// First rule matching the recommendation, if any
pub fn first_match(rec: &Recommendation) -> Option<&'static PriorityRule> {
    PRIORITY_RULES.iter().find(|rule| rule.matches(rec))
}
