//! Board Cache
//!
//! Local, optimistic copy of one board's columns and tasks. Owned by the
//! board view for its lifetime; the backend stays authoritative and a reload
//! always replaces the whole cache.

use crate::models::{Board, BoardWithColumns, Column, Task};

/// Where a task currently sits: (column index, task index)
pub type Slot = (usize, usize);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardCache {
    board: Option<Board>,
    columns: Vec<Column>,
}

impl BoardCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything with freshly loaded backend data
    pub fn replace_all(&mut self, data: BoardWithColumns) {
        let BoardWithColumns { board, mut columns } = data;
        columns.sort_by_key(|c| c.sort_order);
        for column in &mut columns {
            column.tasks.sort_by_key(|t| t.sort_order);
        }
        self.board = Some(board);
        self.columns = columns;
    }

    pub fn is_loaded(&self) -> bool {
        self.board.is_some()
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn set_board(&mut self, board: Board) {
        self.board = Some(board);
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, column_id: u32) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    /// One column as it is now, for restoring after a cancelled gesture
    pub fn snapshot_column(&self, column_id: u32) -> Option<Column> {
        self.column(column_id).cloned()
    }

    /// Put a snapshotted column back; other columns are left alone
    pub fn restore_column(&mut self, snapshot: Column) -> bool {
        match self.columns.iter_mut().find(|c| c.id == snapshot.id) {
            Some(column) => {
                *column = snapshot;
                true
            }
            None => false,
        }
    }

    pub fn first_column_id(&self) -> Option<u32> {
        self.columns.first().map(|c| c.id)
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    pub fn locate(&self, task_id: u32) -> Option<Slot> {
        self.columns.iter().enumerate().find_map(|(ci, column)| {
            column
                .tasks
                .iter()
                .position(|t| t.id == task_id)
                .map(|ti| (ci, ti))
        })
    }

    pub fn task(&self, task_id: u32) -> Option<&Task> {
        self.locate(task_id).map(|(ci, ti)| &self.columns[ci].tasks[ti])
    }

    pub fn column_of(&self, task_id: u32) -> Option<u32> {
        self.locate(task_id).map(|(ci, _)| self.columns[ci].id)
    }

    pub fn index_in_column(&self, task_id: u32) -> Option<usize> {
        self.locate(task_id).map(|(_, ti)| ti)
    }

    pub fn column_len(&self, column_id: u32) -> Option<usize> {
        self.column(column_id).map(|c| c.tasks.len())
    }

    /// Move the task at `from` to `to` inside one column
    ///
    /// Returns false when nothing changed (same index or out of range).
    pub fn optimistic_reorder(&mut self, column_id: u32, from: usize, to: usize) -> bool {
        let Some(column) = self.columns.iter_mut().find(|c| c.id == column_id) else {
            return false;
        };
        if from == to || from >= column.tasks.len() || to >= column.tasks.len() {
            return false;
        }
        let task = column.tasks.remove(from);
        column.tasks.insert(to, task);
        renumber(column);
        true
    }

    /// Place `task_id` at `index` of `column_id` (clamped to the column's length)
    ///
    /// Works for same-column and cross-column moves; both columns end dense.
    pub fn optimistic_move(&mut self, task_id: u32, column_id: u32, index: usize) -> bool {
        let Some(target) = self.columns.iter().position(|c| c.id == column_id) else {
            return false;
        };
        let Some((ci, ti)) = self.locate(task_id) else {
            return false;
        };
        let task = self.columns[ci].tasks.remove(ti);
        renumber(&mut self.columns[ci]);

        let column = &mut self.columns[target];
        let index = index.min(column.tasks.len());
        column.tasks.insert(index, task);
        renumber(column);
        true
    }
}

fn renumber(column: &mut Column) {
    let column_id = column.id;
    for (position, task) in column.tasks.iter_mut().enumerate() {
        task.sort_order = position as i32;
        task.column_id = column_id;
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    fn ids(cache: &BoardCache, column_id: u32) -> Vec<u32> {
        cache.column(column_id).map(|c| c.tasks.iter().map(|t| t.id).collect()).unwrap_or_default()
    }

    fn loaded(columns: &[&[u32]]) -> BoardCache {
        let mut cache = BoardCache::new();
        cache.replace_all(board(columns));
        cache
    }

    #[test]
    fn test_replace_all_sorts_by_position() {
        let mut data = board(&[&[1, 2, 3]]);
        data.columns[0].tasks.reverse();
        let mut cache = BoardCache::new();

        cache.replace_all(data);

        assert_eq!(ids(&cache, 10), vec![1, 2, 3]);
        assert!(cache.is_loaded());
    }

    #[test]
    fn test_reorder_within_column() {
        let mut cache = loaded(&[&[1, 2, 3]]);

        assert!(cache.optimistic_reorder(10, 0, 2));

        assert_eq!(ids(&cache, 10), vec![2, 3, 1]);
        let orders: Vec<i32> = cache.columns()[0].tasks.iter().map(|t| t.sort_order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_reorder_same_index_is_noop() {
        let mut cache = loaded(&[&[1, 2]]);
        assert!(!cache.optimistic_reorder(10, 1, 1));
        assert!(!cache.optimistic_reorder(10, 0, 5));
        assert_eq!(ids(&cache, 10), vec![1, 2]);
    }

    #[test]
    fn test_move_across_columns_keeps_both_dense() {
        let mut cache = loaded(&[&[1, 2, 3], &[4, 5]]);

        assert!(cache.optimistic_move(2, 20, 1));

        assert_eq!(ids(&cache, 10), vec![1, 3]);
        assert_eq!(ids(&cache, 20), vec![4, 2, 5]);
        let moved = cache.task(2).unwrap();
        assert_eq!(moved.column_id, 20);
        assert_eq!(moved.sort_order, 1);
        assert_eq!(cache.task(3).unwrap().sort_order, 1);
    }

    #[test]
    fn test_move_clamps_index() {
        let mut cache = loaded(&[&[1], &[]]);

        assert!(cache.optimistic_move(1, 20, 99));

        assert_eq!(ids(&cache, 20), vec![1]);
        assert_eq!(cache.index_in_column(1), Some(0));
    }

    #[test]
    fn test_move_unknown_task_or_column() {
        let mut cache = loaded(&[&[1]]);
        assert!(!cache.optimistic_move(9, 10, 0));
        assert!(!cache.optimistic_move(1, 99, 0));
        assert_eq!(ids(&cache, 10), vec![1]);
    }

    #[test]
    fn test_restore_column_only_touches_that_column() {
        let mut cache = loaded(&[&[1, 2], &[3, 4]]);
        let snapshot = cache.snapshot_column(10).unwrap();

        cache.optimistic_reorder(10, 0, 1);
        cache.optimistic_reorder(20, 0, 1);
        assert!(cache.restore_column(snapshot));

        assert_eq!(ids(&cache, 10), vec![1, 2]);
        assert_eq!(ids(&cache, 20), vec![4, 3]);
    }

    #[test]
    fn test_restore_column_missing_after_reload() {
        let mut cache = loaded(&[&[1], &[2]]);
        let snapshot = cache.snapshot_column(20).unwrap();

        cache.replace_all(board(&[&[1]]));

        assert!(!cache.restore_column(snapshot));
        assert_eq!(cache.columns().len(), 1);
    }
}
