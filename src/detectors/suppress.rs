//! Known false-positive suppression
//!
//! GNU autoconf `configure` scripts carry C test programs in here-documents,
//! and lines such as `main ()` from those programs look exactly like shell
//! function definitions to a line scanner. Rules here veto such names before
//! they reach the tag sink.

use serde::Deserialize;

/// Veto tags named `name` found in files whose base name is `file`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuppressionRule {
    pub file: String,
    pub name: String,
}

impl SuppressionRule {
    pub fn new(file: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            name: name.into(),
        }
    }

    pub fn matches(&self, base_name: &str, name: &str) -> bool {
        self.file == base_name && self.name == name
    }
}

/// Ordered list of suppression rules, evaluated before every emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuppressionRules {
    rules: Vec<SuppressionRule>,
}

impl SuppressionRules {
    /// No rules at all
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with_rule(mut self, rule: SuppressionRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn push(&mut self, rule: SuppressionRule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SuppressionRule> {
        self.rules.iter()
    }

    /// First rule that vetoes `name` in a file with this base name
    pub fn veto(&self, base_name: &str, name: &str) -> Option<&SuppressionRule> {
        self.rules.iter().find(|r| r.matches(base_name, name))
    }

    pub fn vetoes(&self, base_name: &str, name: &str) -> bool {
        self.veto(base_name, name).is_some()
    }
}

impl Default for SuppressionRules {
    /// The shipped rule set: `main` in `configure`
    fn default() -> Self {
        Self::empty().with_rule(SuppressionRule::new("configure", "main"))
    }
}
