//! The bidirectional two-level filter engine.
//!
//! Keeps the Group and Subgroup selections mutually consistent as the
//! record set changes: selecting on one axis narrows the options offered on
//! the other, and a selection invalidated by a recompute is cleared — except
//! on the axis the user just changed, which is never yanked out from under
//! them.

use crate::index::ClassificationIndex;
use crate::model::Record;

/// The filter session. `None` (or an empty query) means no constraint on
/// that axis. Selections match stored labels exactly; the empty label is
/// not selectable, so records with an empty group or subgroup are visible
/// only when that axis is unconstrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub group: Option<String>,
    pub subgroup: Option<String>,
    pub query: String,
}

/// Which selector the user drove last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Group,
    Subgroup,
}

/// Constrained contents of the two selection lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionLists {
    pub groups: Vec<String>,
    pub subgroups: Vec<String>,
}

/// Compute the option lists for the current selections.
///
/// - No selection: all groups / all subgroups.
/// - Group selected: the full group list stays (so the user can switch
///   groups), subgroups narrow to those inside the selected group.
/// - Subgroup selected: the full subgroup list stays, groups narrow to
///   those containing the selected subgroup.
/// - Both selected: the intersection view — each list is narrowed by the
///   other axis's selection, and neither widens back while the user drives
///   the other axis.
pub fn option_lists(index: &ClassificationIndex, state: &FilterState) -> OptionLists {
    let groups = match &state.subgroup {
        Some(sub) => index.groups_with(sub),
        None => index.group_labels(),
    };
    let subgroups = match &state.group {
        Some(group) => index.subgroups_in(group),
        None => index.subgroup_labels(),
    };
    OptionLists { groups, subgroups }
}

/// Re-validate the selections against freshly recomputed option lists,
/// clearing any selection that no longer appears in its list.
///
/// The axis in `just_changed` is left as-is even if technically absent —
/// clearing it would fight the user's own input. Pass `None` after a
/// record-set mutation to make both axes eligible. The group axis is
/// checked first, so a cleared group widens the subgroup options before the
/// subgroup is judged.
pub fn reconcile(
    state: &mut FilterState,
    index: &ClassificationIndex,
    just_changed: Option<Axis>,
) {
    if just_changed != Some(Axis::Group) {
        let groups = match &state.subgroup {
            Some(sub) => index.groups_with(sub),
            None => index.group_labels(),
        };
        if let Some(group) = &state.group {
            if !groups.contains(group) {
                state.group = None;
            }
        }
    }
    if just_changed != Some(Axis::Subgroup) {
        let subgroups = match &state.group {
            Some(group) => index.subgroups_in(group),
            None => index.subgroup_labels(),
        };
        if let Some(sub) = &state.subgroup {
            if !subgroups.contains(sub) {
                state.subgroup = None;
            }
        }
    }
}

/// The records visible under the current filter, newest update first.
///
/// Exact label match on each selected axis, case-insensitive substring
/// match of the query against title or content. Pure: the underlying list
/// is never reordered or mutated.
pub fn visible(records: &[Record], state: &FilterState) -> Vec<Record> {
    let query = state.query.to_lowercase();
    let mut hits: Vec<Record> = records
        .iter()
        .filter(|r| {
            if let Some(group) = &state.group {
                if r.group != *group {
                    return false;
                }
            }
            if let Some(sub) = &state.subgroup {
                if r.subgroup != *sub {
                    return false;
                }
            }
            if !query.is_empty()
                && !r.title.to_lowercase().contains(&query)
                && !r.content.to_lowercase().contains(&query)
            {
                return false;
            }
            true
        })
        .cloned()
        .collect();
    hits.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    hits
}
