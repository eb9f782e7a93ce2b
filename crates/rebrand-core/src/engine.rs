use tracing::debug;

use crate::table::{ReplacementRule, ReplacementTable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub content: String,
    pub changed: bool,
    pub replacements: usize,
}

/// Applies every rule in table order, each pass working on the previous pass's output.
///
/// Each pass replaces all non-overlapping occurrences, scanning left to right.
/// Rules run in exactly the order the table holds them: specific tokens are
/// expected to precede the generic tokens they contain.
pub fn apply(content: &str, table: &ReplacementTable) -> Substitution {
    apply_rules(content, table.iter())
}

/// Like [`apply`], skipping rules that exclude `file_name`'s extension.
pub fn apply_for_file(content: &str, table: &ReplacementTable, file_name: &str) -> Substitution {
    apply_rules(content, table.iter().filter(|rule| rule.applies_to(file_name)))
}

fn apply_rules<'a, I>(content: &str, rules: I) -> Substitution
where
    I: Iterator<Item = &'a ReplacementRule>,
{
    let mut current = content.to_string();
    let mut replacements = 0;

    for rule in rules {
        let occurrences = current.matches(rule.old()).count();
        if occurrences == 0 {
            continue;
        }
        current = current.replace(rule.old(), rule.new_text());
        replacements += occurrences;
        debug!(
            "Replaced {} occurrences: '{}' -> '{}'",
            occurrences,
            rule.old(),
            rule.new_text()
        );
    }

    let changed = current != content;
    Substitution {
        content: current,
        changed,
        replacements,
    }
}
