//! In-memory `BoardBackend` for tests

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::BoardBackend;
use crate::models::{
    Board, BoardFields, BoardPage, BoardWithColumns, Column, Priority, Task, TaskFields, User,
};

#[derive(Default)]
struct FakeState {
    next_id: u32,
    boards: Vec<Board>,
    columns: Vec<Column>,
}

impl FakeState {
    fn next_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn column_mut(&mut self, column_id: u32) -> Result<&mut Column, String> {
        self.columns
            .iter_mut()
            .find(|c| c.id == column_id)
            .ok_or_else(|| format!("Column {} not found", column_id))
    }

    fn find_task(&self, task_id: u32) -> Option<(usize, usize)> {
        self.columns.iter().enumerate().find_map(|(ci, col)| {
            col.tasks.iter().position(|t| t.id == task_id).map(|ti| (ci, ti))
        })
    }

    fn renumber(column: &mut Column) {
        for (index, task) in column.tasks.iter_mut().enumerate() {
            task.sort_order = index as i32;
            task.column_id = column.id;
        }
    }
}

/// Board store kept in memory, with switches to make calls fail
pub struct FakeBackend {
    state: RefCell<FakeState>,
    pub fail_loads: Cell<bool>,
    pub fail_moves: Cell<bool>,
    pub fail_mutations: Cell<bool>,
    moves: RefCell<Vec<(u32, u32, usize)>>,
    loads: Cell<usize>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(FakeState::default()),
            fail_loads: Cell::new(false),
            fail_moves: Cell::new(false),
            fail_mutations: Cell::new(false),
            moves: RefCell::new(Vec::new()),
            loads: Cell::new(0),
        }
    }

    /// Add a board with the given column titles; returns the board id and column ids
    pub fn seed_board(&self, title: &str, columns: &[&str]) -> (u32, Vec<u32>) {
        let mut state = self.state.borrow_mut();
        let board_id = state.next_id();
        state.boards.push(Board {
            id: board_id,
            title: title.to_string(),
            description: String::new(),
            author: "Ana".to_string(),
            color: "bg-blue-500".to_string(),
            owner_id: "user-1".to_string(),
            created_at: Some(board_id as i64),
        });
        let mut ids = Vec::new();
        for (order, column_title) in columns.iter().enumerate() {
            let id = state.next_id();
            state.columns.push(Column {
                id,
                board_id,
                title: column_title.to_string(),
                sort_order: order as i32,
                tasks: Vec::new(),
            });
            ids.push(id);
        }
        (board_id, ids)
    }

    pub fn seed_task(&self, column_id: u32, title: &str) -> u32 {
        let mut state = self.state.borrow_mut();
        let id = state.next_id();
        let column = state.column_mut(column_id).expect("seeded column");
        column.tasks.push(Task {
            id,
            column_id,
            title: title.to_string(),
            description: None,
            assignee: None,
            due_date: None,
            priority: Priority::Medium,
            sort_order: column.tasks.len() as i32,
            created_at: None,
        });
        id
    }

    pub fn column_task_ids(&self, column_id: u32) -> Vec<u32> {
        self.state
            .borrow()
            .columns
            .iter()
            .find(|c| c.id == column_id)
            .map(|c| c.tasks.iter().map(|t| t.id).collect())
            .unwrap_or_default()
    }

    /// Every `move_task` call received, successful or not
    pub fn move_calls(&self) -> Vec<(u32, u32, usize)> {
        self.moves.borrow().clone()
    }

    pub fn load_count(&self) -> usize {
        self.loads.get()
    }

    fn check_mutation(&self) -> Result<(), String> {
        if self.fail_mutations.get() {
            Err("backend unavailable".to_string())
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl BoardBackend for FakeBackend {
    async fn current_user(&self) -> Result<User, String> {
        Ok(User {
            id: "user-1".to_string(),
            display_name: "Ana".to_string(),
        })
    }

    async fn list_boards(&self, page: u32, page_size: Option<u32>) -> Result<BoardPage, String> {
        if self.fail_loads.get() {
            return Err("backend unavailable".to_string());
        }
        let state = self.state.borrow();
        let size = page_size.unwrap_or(6).max(1) as usize;
        let mut boards = state.boards.clone();
        boards.reverse();
        Ok(BoardPage {
            total: boards.len() as u32,
            page_size: size as u32,
            boards: boards.into_iter().skip(page as usize * size).take(size).collect(),
        })
    }

    async fn create_board(&self, fields: &BoardFields) -> Result<Board, String> {
        self.check_mutation()?;
        let (board_id, _) = self.seed_board(&fields.title, &["To Do", "In Progress", "Review", "Done"]);
        let mut state = self.state.borrow_mut();
        let board = state
            .boards
            .iter_mut()
            .find(|b| b.id == board_id)
            .ok_or_else(|| "board vanished".to_string())?;
        board.description = fields.description.clone();
        board.author = fields.author.clone();
        if let Some(color) = fields.color.clone() {
            board.color = color;
        }
        Ok(board.clone())
    }

    async fn get_board_with_columns(&self, board_id: u32) -> Result<BoardWithColumns, String> {
        self.loads.set(self.loads.get() + 1);
        if self.fail_loads.get() {
            return Err("backend unavailable".to_string());
        }
        let state = self.state.borrow();
        let board = state
            .boards
            .iter()
            .find(|b| b.id == board_id)
            .cloned()
            .ok_or_else(|| format!("Board {} not found", board_id))?;
        let columns = state
            .columns
            .iter()
            .filter(|c| c.board_id == board_id)
            .cloned()
            .collect();
        Ok(BoardWithColumns { board, columns })
    }

    async fn update_board(&self, board_id: u32, fields: &BoardFields) -> Result<Board, String> {
        self.check_mutation()?;
        let mut state = self.state.borrow_mut();
        let board = state
            .boards
            .iter_mut()
            .find(|b| b.id == board_id)
            .ok_or_else(|| format!("Board {} not found", board_id))?;
        board.title = fields.title.clone();
        board.description = fields.description.clone();
        board.author = fields.author.clone();
        if let Some(color) = fields.color.clone() {
            board.color = color;
        }
        Ok(board.clone())
    }

    async fn delete_board(&self, board_id: u32) -> Result<(), String> {
        self.check_mutation()?;
        let mut state = self.state.borrow_mut();
        let before = state.boards.len();
        state.boards.retain(|b| b.id != board_id);
        if state.boards.len() == before {
            return Err(format!("Board {} not found", board_id));
        }
        state.columns.retain(|c| c.board_id != board_id);
        Ok(())
    }

    async fn get_task(&self, task_id: u32) -> Result<Task, String> {
        let state = self.state.borrow();
        let (ci, ti) = state
            .find_task(task_id)
            .ok_or_else(|| format!("Task {} not found", task_id))?;
        Ok(state.columns[ci].tasks[ti].clone())
    }

    async fn create_task(&self, column_id: u32, fields: &TaskFields) -> Result<Task, String> {
        self.check_mutation()?;
        let mut state = self.state.borrow_mut();
        let id = state.next_id();
        let column = state.column_mut(column_id)?;
        let task = Task {
            id,
            column_id,
            title: fields.title.clone(),
            description: fields.description.clone().filter(|d| !d.trim().is_empty()),
            assignee: fields.assignee.clone(),
            due_date: fields.due_date.clone(),
            priority: fields.priority.unwrap_or_default(),
            sort_order: column.tasks.len() as i32,
            created_at: None,
        };
        column.tasks.push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, task_id: u32, fields: &TaskFields) -> Result<Task, String> {
        self.check_mutation()?;
        let mut state = self.state.borrow_mut();
        let (ci, ti) = state
            .find_task(task_id)
            .ok_or_else(|| format!("Task {} not found", task_id))?;
        let task = &mut state.columns[ci].tasks[ti];
        task.title = fields.title.clone();
        task.description = fields.description.clone();
        task.assignee = fields.assignee.clone();
        task.due_date = fields.due_date.clone();
        if let Some(priority) = fields.priority {
            task.priority = priority;
        }
        Ok(task.clone())
    }

    async fn delete_task(&self, task_id: u32) -> Result<(), String> {
        self.check_mutation()?;
        let mut state = self.state.borrow_mut();
        let (ci, ti) = state
            .find_task(task_id)
            .ok_or_else(|| format!("Task {} not found", task_id))?;
        state.columns[ci].tasks.remove(ti);
        FakeState::renumber(&mut state.columns[ci]);
        Ok(())
    }

    async fn move_task(&self, task_id: u32, column_id: u32, index: usize) -> Result<(), String> {
        self.moves.borrow_mut().push((task_id, column_id, index));
        if self.fail_moves.get() {
            return Err("move rejected".to_string());
        }
        let mut state = self.state.borrow_mut();
        state.column_mut(column_id)?;
        let (ci, ti) = state
            .find_task(task_id)
            .ok_or_else(|| format!("Task {} not found", task_id))?;
        let task = state.columns[ci].tasks.remove(ti);
        FakeState::renumber(&mut state.columns[ci]);
        let column = state.column_mut(column_id)?;
        let index = index.min(column.tasks.len());
        column.tasks.insert(index, task);
        FakeState::renumber(column);
        Ok(())
    }
}
