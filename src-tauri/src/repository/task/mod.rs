//! Task Repository Module
//!
//! This module provides task repository functionality split into specialized sub-modules:
//! - task_repo: Core CRUD operations
//! - task_positioning: Dense per-column positions and moves

mod task_repo;
mod task_positioning;

pub use task_repo::TaskRepository;
pub(crate) use task_repo::{row_to_task, TASK_COLUMNS_SQL};

// Re-export the operation trait so it can be used by importing TaskRepository
pub use task_positioning::TaskPositioningOperations;
