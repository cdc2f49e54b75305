//! Roster partitioning and summary statistics.
//!
//! This module provides the single-pass grouping of a roster by its
//! `manager` field plus a few helpers used for the CLI summary.

use crate::models::{GroupKey, ManagerGroups, Person};

/// Partition a roster by each person's manager.
///
/// One pass over the input: each person is appended to the bucket for its
/// own key, and buckets are created on first encounter. Bucket order is
/// the first-occurrence order of each manager value; order within a bucket
/// is roster order. Never fails, including for an empty roster.
pub fn group_by_manager(roster: &[Person]) -> ManagerGroups {
    let mut groups = ManagerGroups::new();

    for person in roster {
        groups.push(person.group_key(), person.clone());
    }

    groups
}

/// Total number of people across all buckets.
#[allow(dead_code)] // Utility for summaries
pub fn people_count(groups: &ManagerGroups) -> usize {
    groups.iter().map(|(_, people)| people.len()).sum()
}

/// The bucket with the most direct reports, if any.
pub fn largest_group(groups: &ManagerGroups) -> Option<(&GroupKey, usize)> {
    groups
        .iter()
        .map(|(key, people)| (key, people.len()))
        .max_by_key(|(_, count)| *count)
}

/// Number of people without a manager.
pub fn unassigned_count(groups: &ManagerGroups) -> usize {
    groups
        .iter()
        .filter(|(key, _)| key.is_unassigned())
        .map(|(_, people)| people.len())
        .sum()
}
