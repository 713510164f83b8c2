//! Size-bounded greedy grouping over an ordered manifest.
//!
//! A single forward pass partitions the records into contiguous groups whose
//! cumulative size stays within the limit. The bound governs the decision to
//! add *further* records, not admission itself: a record larger than the
//! limit on its own is placed alone in an over-limit singleton group rather
//! than split or rejected. Groups are never reordered or rebalanced.

use thiserror::Error;

use crate::manifest::Record;

/// A contiguous run of manifest records, in original order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Group {
    /// 1-based sequential group number, assigned in emission order.
    pub(crate) index: usize,
    pub(crate) members: Vec<Record>,
    pub(crate) total_size: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum GroupError {
    #[error("group size limit must be positive, got {limit_bytes} bytes")]
    InvalidLimit { limit_bytes: u64 },
}

/// Partition `records` into ordered groups of cumulative size at most
/// `limit_bytes`, except for oversized singletons. Pure and deterministic;
/// the caller owns persistence of both the groups and the untouched full
/// list.
pub(crate) fn group_records(
    records: &[Record],
    limit_bytes: u64,
) -> Result<Vec<Group>, GroupError> {
    if limit_bytes == 0 {
        return Err(GroupError::InvalidLimit { limit_bytes });
    }

    let mut groups: Vec<Group> = Vec::new();
    let mut members: Vec<Record> = Vec::new();
    let mut current_size: u64 = 0;

    for record in records {
        // Close the open group only when this record would push it past the
        // limit; an empty group always admits, which is what lets an
        // oversized record through as a singleton.
        if !members.is_empty() && current_size.saturating_add(record.size) > limit_bytes {
            groups.push(Group {
                index: groups.len() + 1,
                members: std::mem::take(&mut members),
                total_size: current_size,
            });
            current_size = 0;
        }
        current_size += record.size;
        members.push(record.clone());
    }

    if !members.is_empty() {
        groups.push(Group {
            index: groups.len() + 1,
            members,
            total_size: current_size,
        });
    }

    Ok(groups)
}
