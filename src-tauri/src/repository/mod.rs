//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
pub mod board;
pub mod task;

#[cfg(test)]
mod tests;

pub use traits::Repository;
pub use db::{init_db, DbState, SharedConnection};
pub use board::BoardRepository;
pub use task::TaskRepository;
