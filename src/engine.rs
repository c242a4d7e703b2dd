//! Reorder/reconciliation engine.
//!
//! [`Engine`] is the explicit state container for the task list: the ordered
//! collection, the drag markers, the edit buffer, and the loading flag all
//! live here, and every mutation goes through its methods. Each mutating
//! protocol computes its result into a temporary and commits it to canonical
//! state only after every remote call it issued succeeded; a failed call
//! leaves the list exactly as it was.
//!
//! Methods take `&mut self`, so two mutating operations can never interleave
//! on the same list -- ownership is the single-writer queue.

use crate::client::{FetchError, StoreClient};
use crate::id::generate_id;
use crate::reorder::{changed_ranks, filter_tasks, move_task, without_task};
use crate::types::Task;
use log::{info, warn};

/// Working buffer for a two-phase description edit. Keystrokes land here,
/// not in the list; the list changes only on a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub index: usize,
    pub description: String,
}

/// The engine owning the in-memory ordered task list.
pub struct Engine {
    store: StoreClient,
    tasks: Vec<Task>,
    edit: Option<EditBuffer>,
    drag_source: Option<i64>,
    drag_target: Option<i64>,
    loading: bool,
}

impl Engine {
    pub fn new(store: StoreClient) -> Self {
        Self {
            store,
            tasks: Vec::new(),
            edit: None,
            drag_source: None,
            drag_target: None,
            loading: false,
        }
    }

    /// The canonical ordered list.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// True while the initial load is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The pending edit, if an editor is open.
    pub fn pending_edit(&self) -> Option<&EditBuffer> {
        self.edit.as_ref()
    }

    /// Replace local state with the server-confirmed list. The loading flag
    /// is cleared once data or an error is available, whichever comes first.
    pub async fn load(&mut self) -> Result<(), FetchError> {
        self.loading = true;
        let fetched = self.store.list_tasks().await;
        self.loading = false;

        self.tasks = fetched?;
        info!("loaded {} task(s)", self.tasks.len());
        Ok(())
    }

    /// Create a task from raw input. Whitespace-only input is a no-op with
    /// no remote call. Returns the created task on success.
    pub async fn add_task(&mut self, input: &str) -> Result<Option<Task>, FetchError> {
        let description = input.trim();
        if description.is_empty() {
            return Ok(None);
        }

        let task = Task {
            id: generate_id(),
            description: description.to_string(),
            order_number: (self.tasks.len() + 1) as u32,
        };

        self.store.create_task(&task).await?;
        info!("created task {} at rank {}", task.id, task.order_number);

        self.tasks.push(task.clone());
        Ok(Some(task))
    }

    /// Delete a task and renumber its successors. Returns false if the id is
    /// not in the list (no remote call is made). Local state is committed
    /// only after both the delete and the follow-up bulk update succeeded.
    pub async fn remove_task(&mut self, id: i64) -> Result<bool, FetchError> {
        let Some(next) = without_task(&self.tasks, id) else {
            return Ok(false);
        };

        self.store.delete_task(id).await?;
        self.store.replace_order(&next).await?;
        info!("deleted task {}, {} task(s) renumbered", id, next.len());

        self.tasks = next;
        Ok(true)
    }

    /// Record the task being dragged.
    pub fn drag_start(&mut self, id: i64) {
        self.drag_source = Some(id);
    }

    /// Record the task currently hovered; the last call before the drop
    /// wins.
    pub fn drag_enter(&mut self, id: i64) {
        self.drag_target = Some(id);
    }

    /// Complete the drag gesture: move the source to the target's position,
    /// renumber, persist only the tasks whose rank changed, and commit the
    /// full renumbered list on success.
    ///
    /// Returns true if a new order was committed. Stale drag ids and
    /// drops that change nothing resolve to `Ok(false)` with no remote call.
    /// The drag markers are cleared in every outcome; the task list is not
    /// touched unless the bulk update succeeded.
    pub async fn drop_dragged(&mut self) -> Result<bool, FetchError> {
        let source = self.drag_source.take();
        let target = self.drag_target.take();

        let (Some(source), Some(target)) = (source, target) else {
            return Ok(false);
        };

        let Some(next) = move_task(&self.tasks, source, target) else {
            warn!("drop ignored: stale drag ids {} -> {}", source, target);
            return Ok(false);
        };

        let changed = changed_ranks(&self.tasks, &next);
        if changed.is_empty() {
            return Ok(false);
        }

        self.store.replace_order(&changed).await?;
        info!(
            "moved task {} onto {}, {} rank(s) persisted",
            source,
            target,
            changed.len()
        );

        self.tasks = next;
        Ok(true)
    }

    /// Open an editor on the task at `index`, pre-populated with its current
    /// description. Returns false for an out-of-range index.
    pub fn begin_edit(&mut self, index: usize) -> bool {
        match self.tasks.get(index) {
            Some(task) => {
                self.edit = Some(EditBuffer {
                    index,
                    description: task.description.clone(),
                });
                true
            }
            None => false,
        }
    }

    /// Buffer an edited description. Only the working value changes; the
    /// list is untouched until [`Engine::commit_edit`].
    pub fn edit_description(&mut self, text: &str) {
        if let Some(edit) = &mut self.edit {
            edit.description = text.to_string();
        }
    }

    /// Drop the pending edit without saving.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Save the pending edit. On success the buffered description overwrites
    /// the task at the recorded index and the buffer is cleared; on failure
    /// the buffer survives so the save can be retried.
    pub async fn commit_edit(&mut self) -> Result<bool, FetchError> {
        let Some(edit) = self.edit.clone() else {
            return Ok(false);
        };
        let Some(task) = self.tasks.get(edit.index) else {
            self.edit = None;
            return Ok(false);
        };

        self.store.update_description(task.id, &edit.description).await?;
        info!("edited task {}", task.id);

        self.tasks[edit.index].description = edit.description;
        self.edit = None;
        Ok(true)
    }

    /// Case-insensitive substring filter over the current list. Pure: same
    /// query, same result; canonical state and ranks are never touched.
    pub fn filtered(&self, query: &str) -> Vec<&Task> {
        filter_tasks(&self.tasks, query)
    }
}
