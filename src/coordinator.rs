//! Move Coordinator
//!
//! Turns a drag gesture (start → over* → end | cancel) into live previews in
//! the `BoardCache` and, on drop, at most one `MovePlan` to persist.
//!
//! Previews only reorder inside the source column. Crossing into another
//! column is resolved once, at drop time.

use leptos_dragdrop::DropTarget;

use crate::board_cache::BoardCache;
use crate::models::Column;

/// A drop that has to be persisted: `task_id` goes to `index` of `to_column`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlan {
    pub task_id: u32,
    pub from_column: u32,
    pub to_column: u32,
    pub index: usize,
}

#[derive(Debug, Clone)]
struct Gesture {
    task_id: u32,
    source_column: u32,
    start_index: usize,
    last_over: Option<DropTarget>,
    /// Source column at drag start; previews never touch any other column
    snapshot: Column,
}

#[derive(Debug, Default)]
pub struct MoveCoordinator {
    gesture: Option<Gesture>,
}

impl MoveCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Task being dragged, for the overlay
    pub fn active_task(&self) -> Option<u32> {
        self.gesture.as_ref().map(|g| g.task_id)
    }

    /// Begin a gesture; unknown tasks start nothing
    pub fn on_drag_start(&mut self, cache: &BoardCache, task_id: u32) -> bool {
        self.gesture = Gesture::begin(cache, task_id);
        self.gesture.is_some()
    }

    /// Re-anchor the gesture after the cache was replaced by a reload
    ///
    /// The old snapshot predates the reload and must never be restored over
    /// it. The gesture continues from wherever the task now sits, or ends if
    /// the task is gone.
    pub fn rebase(&mut self, cache: &BoardCache) {
        if let Some(task_id) = self.active_task() {
            self.gesture = Gesture::begin(cache, task_id);
            if self.gesture.is_none() {
                log::debug!("Dragged task {} vanished on reload, ending gesture", task_id);
            }
        }
    }

    /// Live preview: splice within the same column, ignore everything else
    ///
    /// Returns true when the cache changed.
    pub fn on_drag_over(&mut self, cache: &mut BoardCache, active_id: u32, over: DropTarget) -> bool {
        let Some(gesture) = self.gesture.as_mut().filter(|g| g.task_id == active_id) else {
            return false;
        };
        if gesture.last_over == Some(over) {
            return false;
        }
        gesture.last_over = Some(over);

        let DropTarget::Task(target_id) = over else {
            return false;
        };
        if target_id == active_id {
            return false;
        }
        let (Some((active_col, from)), Some((target_col, to))) = (cache.locate(active_id), cache.locate(target_id)) else {
            return false;
        };
        if active_col != target_col {
            return false;
        }
        let column_id = cache.columns()[active_col].id;
        cache.optimistic_reorder(column_id, from, to)
    }

    /// Finish the gesture and decide what, if anything, to persist
    ///
    /// The returned plan is already applied to the cache. `None` means the
    /// drop was a no-op or a cancel (the drag-start order is restored).
    pub fn on_drag_end(
        &mut self,
        cache: &mut BoardCache,
        active_id: u32,
        over: Option<DropTarget>,
    ) -> Option<MovePlan> {
        let gesture = self.gesture.take()?;
        if gesture.task_id != active_id {
            cache.restore_column(gesture.snapshot);
            return None;
        }
        let Some(destination) = over.and_then(|over| resolve_drop(cache, &gesture, over)) else {
            cache.restore_column(gesture.snapshot);
            return None;
        };
        let (to_column, index) = destination;

        if to_column == gesture.source_column && index == gesture.start_index {
            cache.restore_column(gesture.snapshot);
            return None;
        }
        cache.optimistic_move(active_id, to_column, index);
        Some(MovePlan {
            task_id: active_id,
            from_column: gesture.source_column,
            to_column,
            index,
        })
    }

    /// Abort the gesture and put every card back where it started
    pub fn on_drag_cancel(&mut self, cache: &mut BoardCache) {
        if let Some(gesture) = self.gesture.take() {
            cache.restore_column(gesture.snapshot);
        }
    }
}

impl Gesture {
    fn begin(cache: &BoardCache, task_id: u32) -> Option<Self> {
        let column_id = cache.column_of(task_id)?;
        Some(Self {
            task_id,
            source_column: column_id,
            start_index: cache.index_in_column(task_id)?,
            last_over: None,
            snapshot: cache.snapshot_column(column_id)?,
        })
    }
}

/// Destination (column, index) for a drop, or `None` for unknown targets
fn resolve_drop(cache: &mut BoardCache, gesture: &Gesture, over: DropTarget) -> Option<(u32, usize)> {
    let active_id = gesture.task_id;
    let current_index = cache.index_in_column(active_id)?;

    match over {
        DropTarget::Column(column_id) => {
            let len = cache.column_len(column_id)?;
            if column_id == gesture.source_column {
                Some((column_id, current_index))
            } else {
                Some((column_id, len))
            }
        }
        DropTarget::Task(target_id) if target_id == active_id => Some((gesture.source_column, current_index)),
        DropTarget::Task(target_id) => {
            let target_column = cache.column_of(target_id)?;
            let target_index = cache.index_in_column(target_id)?;
            if target_column != gesture.source_column {
                return Some((target_column, target_index));
            }
            // Drop arrived without the matching over event: apply its preview now
            if gesture.last_over != Some(over) {
                cache.optimistic_reorder(target_column, current_index, target_index);
            }
            Some((target_column, cache.index_in_column(active_id)?))
        }
    }
}
