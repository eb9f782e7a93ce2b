use std::collections::HashMap;
use tracing::warn;

use crate::RebrandError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementRule {
    old: String,
    new: String,
    excluded_extensions: Vec<String>,
}

impl ReplacementRule {
    pub fn new(old: &str, new: &str) -> Self {
        Self {
            old: old.to_string(),
            new: new.to_string(),
            excluded_extensions: Vec::new(),
        }
    }

    /// Skips this rule for files whose name ends with any of `extensions`.
    pub fn excluding<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn old(&self) -> &str {
        &self.old
    }

    pub fn new_text(&self) -> &str {
        &self.new
    }

    pub fn excluded_extensions(&self) -> &[String] {
        &self.excluded_extensions
    }

    pub fn applies_to(&self, file_name: &str) -> bool {
        !self
            .excluded_extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()))
    }
}

/// Ordered rule list. Order is application order and must be preserved as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementTable {
    rules: Vec<ReplacementRule>,
    merged_duplicates: usize,
}

impl ReplacementTable {
    /// Builds a table, rejecting empty tokens.
    ///
    /// A repeated `old` token overwrites the earlier rule in place: the last
    /// occurrence's replacement wins, and the rule keeps the position where the
    /// token first appeared.
    pub fn new<I>(rules: I) -> Result<Self, RebrandError>
    where
        I: IntoIterator<Item = ReplacementRule>,
    {
        let mut ordered: Vec<ReplacementRule> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut merged_duplicates = 0;

        for (index, rule) in rules.into_iter().enumerate() {
            if rule.old.is_empty() {
                return Err(RebrandError::EmptyToken { index });
            }

            if let Some(&position) = positions.get(&rule.old) {
                warn!(
                    "Duplicate replacement token '{}': '{}' overrides '{}'",
                    rule.old, rule.new, ordered[position].new
                );
                ordered[position] = rule;
                merged_duplicates += 1;
            } else {
                positions.insert(rule.old.clone(), ordered.len());
                ordered.push(rule);
            }
        }

        Ok(Self {
            rules: ordered,
            merged_duplicates,
        })
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, RebrandError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self::new(pairs.into_iter().map(|(old, new)| ReplacementRule::new(old, new)))
    }

    pub fn rules(&self) -> &[ReplacementRule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReplacementRule> {
        self.rules.iter()
    }

    /// Number of rules that overwrote an earlier rule with the same token.
    pub fn merged_duplicates(&self) -> usize {
        self.merged_duplicates
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a ReplacementTable {
    type Item = &'a ReplacementRule;
    type IntoIter = std::slice::Iter<'a, ReplacementRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
