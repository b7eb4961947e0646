//! First-match keyword routing over a fixed, ordered rule table.

/// A trigger set and the template returned when any trigger occurs in the
/// input.
///
/// Triggers must be lowercase; input is lowercased before matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub triggers: &'static [&'static str],
    pub template: &'static str,
}

impl Rule {
    /// `normalized` must already be lowercase.
    pub fn matches(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|t| normalized.contains(t))
    }
}

/// Rules in priority order, plus the reply used when none match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTable {
    pub rules: &'static [Rule],
    pub fallback: &'static str,
}

impl RuleTable {
    /// Index of the first rule whose triggers occur in `input`.
    pub fn matching_rule(&self, input: &str) -> Option<usize> {
        let normalized = input.to_lowercase();
        self.rules.iter().position(|rule| rule.matches(&normalized))
    }

    /// First-match-wins, not best-match. Never fails.
    pub fn respond(&self, input: &str) -> &'static str {
        match self.matching_rule(input) {
            Some(index) => self.rules[index].template,
            None => self.fallback,
        }
    }
}
