//! Core data types for the taskrank list.

use serde::{Deserialize, Serialize};

/// A single to-do entry, the sole entity in the system.
///
/// The three fields below are exactly the wire shape exchanged with the
/// remote store; the store may name things differently internally, but the
/// boundary contract is this struct.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Unique identity, minted client-side at creation and never changed.
    pub id: i64,

    /// Free-text body, editable after creation.
    pub description: String,

    /// Dense 1-based rank among all tasks; defines display order.
    pub order_number: u32,
}

/// Check the settled-state rank invariant: order_numbers are exactly
/// {1..N} in positional order, no duplicates, no gaps.
pub fn ranks_are_dense(tasks: &[Task]) -> bool {
    tasks
        .iter()
        .enumerate()
        .all(|(i, task)| task.order_number as usize == i + 1)
}
