//! The derived Group → Subgroup → records hierarchy.
//!
//! The index is a read-only view, rebuilt from the current record list
//! after every mutation (record counts are small, so a full O(n) rebuild is
//! the simplest correct thing). Keys are the raw stored labels — empty
//! strings included; the "(Ungrouped)" / "(no subgroup)" sentinels exist
//! only in the presentation layer.

use crate::model::Record;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
pub struct ClassificationIndex {
    groups: HashMap<String, HashMap<String, Vec<String>>>,
}

impl ClassificationIndex {
    /// Build the index from the current record list.
    pub fn build(records: &[Record]) -> Self {
        let mut groups: HashMap<String, HashMap<String, Vec<String>>> = HashMap::new();
        for r in records {
            groups
                .entry(r.group.clone())
                .or_default()
                .entry(r.subgroup.clone())
                .or_default()
                .push(r.id.clone());
        }
        Self { groups }
    }

    /// Distinct non-empty group labels, sorted case-insensitively. Empty
    /// labels are not selectable, so they never appear in option lists.
    pub fn group_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .groups
            .keys()
            .filter(|g| !g.is_empty())
            .cloned()
            .collect();
        sort_labels(&mut labels);
        labels
    }

    /// Distinct non-empty subgroup labels across all groups.
    pub fn subgroup_labels(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        for subs in self.groups.values() {
            for s in subs.keys() {
                if !s.is_empty() {
                    seen.insert(s.clone());
                }
            }
        }
        let mut labels: Vec<String> = seen.into_iter().collect();
        sort_labels(&mut labels);
        labels
    }

    /// Non-empty subgroup labels occurring within one group.
    pub fn subgroups_in(&self, group: &str) -> Vec<String> {
        let mut labels: Vec<String> = self
            .groups
            .get(group)
            .map(|subs| subs.keys().filter(|s| !s.is_empty()).cloned().collect())
            .unwrap_or_default();
        sort_labels(&mut labels);
        labels
    }

    /// Non-empty group labels that contain the given subgroup.
    pub fn groups_with(&self, subgroup: &str) -> Vec<String> {
        let mut labels: Vec<String> = self
            .groups
            .iter()
            .filter(|(g, subs)| !g.is_empty() && subs.contains_key(subgroup))
            .map(|(g, _)| g.clone())
            .collect();
        sort_labels(&mut labels);
        labels
    }

    /// Full (group, subgroup, record count) view for tree rendering, raw
    /// empty labels included. Groups and subgroups sort case-insensitively
    /// with the empty label last.
    pub fn tree(&self) -> Vec<(String, Vec<(String, usize)>)> {
        let mut groups: Vec<(String, Vec<(String, usize)>)> = self
            .groups
            .iter()
            .map(|(g, subs)| {
                let mut entries: Vec<(String, usize)> = subs
                    .iter()
                    .map(|(s, ids)| (s.clone(), ids.len()))
                    .collect();
                entries.sort_by_key(|(s, _)| (s.is_empty(), s.to_lowercase()));
                (g.clone(), entries)
            })
            .collect();
        groups.sort_by_key(|(g, _)| (g.is_empty(), g.to_lowercase()));
        groups
    }
}

fn sort_labels(labels: &mut [String]) {
    labels.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
}
