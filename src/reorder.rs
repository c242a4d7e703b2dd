//! Pure reconciliation algorithms over rank-ordered task lists.
//!
//! Every function here takes the current list by reference and returns a new
//! one; nothing is mutated in place. The engine only commits a result after
//! the matching remote call succeeded, so a failed attempt can be discarded
//! without observable effect.

use crate::types::Task;

/// Reassign `order_number` 1..N by position.
pub fn renumber(tasks: &mut [Task]) {
    for (i, task) in tasks.iter_mut().enumerate() {
        task.order_number = (i + 1) as u32;
    }
}

/// Move the task with `source_id` to the position currently held by
/// `target_id`, then renumber. Both indices are resolved before the removal,
/// so the insertion point is the target's pre-move index.
///
/// Returns `None` if either id is not in the list (stale drag reference).
pub fn move_task(tasks: &[Task], source_id: i64, target_id: i64) -> Option<Vec<Task>> {
    let from = tasks.iter().position(|t| t.id == source_id)?;
    let to = tasks.iter().position(|t| t.id == target_id)?;

    let mut next = tasks.to_vec();
    let moved = next.remove(from);
    next.insert(to, moved);
    renumber(&mut next);

    Some(next)
}

/// Remove the task with `id` and renumber the survivors.
///
/// Returns `None` if the id is not in the list.
pub fn without_task(tasks: &[Task], id: i64) -> Option<Vec<Task>> {
    let index = tasks.iter().position(|t| t.id == id)?;

    let mut next = tasks.to_vec();
    next.remove(index);
    renumber(&mut next);

    Some(next)
}

/// The minimal changed set: tasks from `next` whose `order_number` differs
/// from the task with the same id in `prev`. This is what gets sent to the
/// bulk endpoint -- not the full list.
pub fn changed_ranks(prev: &[Task], next: &[Task]) -> Vec<Task> {
    next.iter()
        .filter(|task| {
            prev.iter()
                .find(|p| p.id == task.id)
                .is_none_or(|p| p.order_number != task.order_number)
        })
        .cloned()
        .collect()
}

/// Case-insensitive substring filter on descriptions. Non-mutating: the
/// canonical list and its ranks are untouched.
pub fn filter_tasks<'a>(tasks: &'a [Task], query: &str) -> Vec<&'a Task> {
    let needle = query.trim().to_lowercase();

    tasks
        .iter()
        .filter(|task| task.description.to_lowercase().contains(&needle))
        .collect()
}
