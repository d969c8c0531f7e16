use crate::editor::{ListEditor, SingleNodePolicy};
use crate::list::{List, write_values};
use serde::Serialize;
use std::fmt;

/// Result of one delete-second-to-last run over a set of input values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditReport {
    pub policy: SingleNodePolicy,
    pub original: Vec<i32>,
    pub modified: Vec<i32>,
    /// Value of the node that was unlinked, if any.
    pub removed: Option<i32>,
}

/// Builds a list from `values`, deletes its second-to-last node under
/// `policy`, and records both states.
pub fn run_edit(values: &[i32], policy: SingleNodePolicy) -> EditReport {
    let mut list = List::from_values(values.iter().copied());
    let original = list.to_vec();
    let removed = ListEditor::new(policy).edit(&mut list);

    EditReport {
        policy,
        original,
        modified: list.to_vec(),
        removed,
    }
}

struct Bracketed<'a>(&'a [i32]);

impl fmt::Display for Bracketed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_values(f, self.0.iter().copied())
    }
}

impl EditReport {
    /// The two lines the demo prints on stdout.
    pub fn to_text(&self) -> String {
        format!(
            "Original list: {}\nModified list: {}\n",
            Bracketed(&self.original),
            Bracketed(&self.modified),
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
