//! The list editor: deletion of the second-to-last node under a configurable
//! policy for single-node lists, plus the build/length/render helpers.

use crate::error::EditorError;
use crate::list::List;
use log::debug;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// What deleting the second-to-last node does to a list with exactly one node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SingleNodePolicy {
    /// The sole node is removed, leaving an empty list.
    #[default]
    #[serde(rename = "remove")]
    RemoveSole,
    /// The list is left unchanged.
    Keep,
}

impl FromStr for SingleNodePolicy {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remove" | "remove-sole" => Ok(SingleNodePolicy::RemoveSole),
            "keep" => Ok(SingleNodePolicy::Keep),
            _ => Err(EditorError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for SingleNodePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SingleNodePolicy::RemoveSole => f.write_str("remove"),
            SingleNodePolicy::Keep => f.write_str("keep"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListEditor {
    policy: SingleNodePolicy,
}

impl ListEditor {
    pub fn new(policy: SingleNodePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SingleNodePolicy {
        self.policy
    }

    /// Removes the second-to-last node in place and returns the removed value.
    ///
    /// * empty list: nothing happens.
    /// * one node: handled by the editor's [`SingleNodePolicy`].
    /// * two or more: the node before the tail is unlinked and dropped.
    pub fn edit(&self, list: &mut List) -> Option<i32> {
        // Only the first two nodes matter for picking the case.
        let removed = match (list.iter().take(2).count(), self.policy) {
            (0, _) => None,
            (1, SingleNodePolicy::RemoveSole) => list.pop_front(),
            (1, SingleNodePolicy::Keep) => None,
            _ => list.remove_second_last(),
        };
        debug!("delete second last (policy={}): removed {removed:?}", self.policy);
        removed
    }

    /// Consuming form of [`ListEditor::edit`]; returns the edited list.
    pub fn delete_second_last(&self, mut list: List) -> List {
        self.edit(&mut list);
        list
    }
}

/// One node per value, in order. An empty sequence gives the empty list.
pub fn build_from_sequence(values: &[i32]) -> List {
    List::from_values(values.iter().copied())
}

pub fn length(list: &List) -> usize {
    list.len()
}

/// Deletes the second-to-last node with the default policy, which also
/// removes the sole node of a one-node list.
pub fn delete_second_last(list: List) -> List {
    ListEditor::default().delete_second_last(list)
}

pub fn render(list: &List) -> String {
    list.to_string()
}
