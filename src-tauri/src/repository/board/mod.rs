//! Board Repository Module
//!
//! This module provides board repository functionality split into specialized sub-modules:
//! - board_repo: Core CRUD operations
//! - board_columns: Default columns and the columns-with-tasks read model
//! - board_owner: Owner-scoped listing and board lookup from columns/tasks

mod board_repo;
mod board_columns;
mod board_owner;

pub use board_repo::BoardRepository;

// Re-export all operation traits so they can be used by importing BoardRepository
pub use board_columns::BoardColumnOperations;
pub use board_owner::BoardOwnerOperations;
