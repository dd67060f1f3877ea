//! Repository Integration Tests
//!
//! Tests for BoardRepository and TaskRepository with in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::domain::{Board, BoardFields, DomainError, Priority, Task, TaskFields, DEFAULT_COLUMNS};
    use crate::repository::board::{BoardColumnOperations, BoardOwnerOperations};
    use crate::repository::task::TaskPositioningOperations;
    use crate::repository::{init_db, BoardRepository, Repository, TaskRepository};
    use std::path::PathBuf;

    async fn setup_test_db() -> (BoardRepository, TaskRepository) {
        // Use in-memory database for tests
        let db_path = PathBuf::from(":memory:");
        let db_state = init_db(&db_path).await.expect("Failed to init test DB");
        (
            BoardRepository::new(db_state.connection()),
            TaskRepository::new(db_state.connection()),
        )
    }

    async fn create_board(boards: &BoardRepository, title: &str, owner: &str) -> (Board, Vec<u32>) {
        let fields = BoardFields {
            title: title.to_string(),
            description: "desc".to_string(),
            author: "Ana".to_string(),
            color: None,
        };
        let board = Board::from_fields(&fields, owner).unwrap();
        let created = boards.create_with_default_columns(&board).await.expect("Failed to create board");
        let columns = boards.list_columns(created.id).await.unwrap();
        (created, columns.iter().map(|c| c.id).collect())
    }

    async fn add_task(tasks: &TaskRepository, column_id: u32, title: &str) -> Task {
        let fields = TaskFields {
            title: title.to_string(),
            ..Default::default()
        };
        tasks
            .create(&Task::from_fields(column_id, &fields).unwrap())
            .await
            .expect("Failed to create task")
    }

    async fn column_titles(tasks: &TaskRepository, column_id: u32) -> Vec<(String, i32)> {
        tasks
            .list_by_column(column_id)
            .await
            .unwrap()
            .into_iter()
            .map(|t| (t.title, t.sort_order))
            .collect()
    }

    fn titled(items: &[&str]) -> Vec<(String, i32)> {
        items
            .iter()
            .enumerate()
            .map(|(i, t)| (t.to_string(), i as i32))
            .collect()
    }

    #[tokio::test]
    async fn test_board_gets_default_columns() {
        let (boards, _) = setup_test_db().await;
        let (board, _) = create_board(&boards, "Roadmap", "user-1").await;

        assert!(board.id > 0);
        let columns = boards.list_columns(board.id).await.unwrap();
        let titles: Vec<&str> = columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, DEFAULT_COLUMNS.to_vec());
        assert_eq!(columns[3].sort_order, 3);
    }

    #[tokio::test]
    async fn test_create_task_appends_to_column() {
        let (boards, tasks) = setup_test_db().await;
        let (_, columns) = create_board(&boards, "B", "user-1").await;

        add_task(&tasks, columns[0], "a").await;
        add_task(&tasks, columns[0], "b").await;
        let written = add_task(&tasks, columns[0], "Write spec").await;

        assert_eq!(written.sort_order, 2);
        assert_eq!(written.priority, Priority::Medium);
        assert_eq!(column_titles(&tasks, columns[0]).await, titled(&["a", "b", "Write spec"]));
    }

    #[tokio::test]
    async fn test_create_task_missing_column() {
        let (_, tasks) = setup_test_db().await;
        let task = Task::new(0, 999, "Orphan".to_string());
        let result = tasks.create(&task).await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_move_within_column() {
        let (boards, tasks) = setup_test_db().await;
        let (_, columns) = create_board(&boards, "B", "user-1").await;
        let a = add_task(&tasks, columns[0], "a").await;
        add_task(&tasks, columns[0], "b").await;
        add_task(&tasks, columns[0], "c").await;

        let moved = tasks.move_to(a.id, columns[0], 2).await.unwrap();

        assert_eq!(moved.sort_order, 2);
        assert_eq!(column_titles(&tasks, columns[0]).await, titled(&["b", "c", "a"]));
    }

    #[tokio::test]
    async fn test_move_across_columns_renumbers_both() {
        let (boards, tasks) = setup_test_db().await;
        let (_, columns) = create_board(&boards, "B", "user-1").await;
        let a = add_task(&tasks, columns[0], "a").await;
        add_task(&tasks, columns[0], "b").await;
        add_task(&tasks, columns[0], "c").await;
        add_task(&tasks, columns[1], "x").await;

        let moved = tasks.move_to(a.id, columns[1], 0).await.unwrap();

        assert_eq!(moved.column_id, columns[1]);
        assert_eq!(column_titles(&tasks, columns[0]).await, titled(&["b", "c"]));
        assert_eq!(column_titles(&tasks, columns[1]).await, titled(&["a", "x"]));
    }

    #[tokio::test]
    async fn test_move_to_empty_column_lands_at_zero() {
        let (boards, tasks) = setup_test_db().await;
        let (_, columns) = create_board(&boards, "B", "user-1").await;
        let t = add_task(&tasks, columns[0], "T").await;

        tasks.move_to(t.id, columns[2], 5).await.unwrap();

        assert!(column_titles(&tasks, columns[0]).await.is_empty());
        assert_eq!(column_titles(&tasks, columns[2]).await, titled(&["T"]));
    }

    #[tokio::test]
    async fn test_move_to_other_board_is_conflict() {
        let (boards, tasks) = setup_test_db().await;
        let (_, first) = create_board(&boards, "One", "user-1").await;
        let (_, second) = create_board(&boards, "Two", "user-1").await;
        let t = add_task(&tasks, first[0], "T").await;

        let result = tasks.move_to(t.id, second[0], 0).await;

        assert!(matches!(result, Err(DomainError::Conflict(_))));
        assert_eq!(column_titles(&tasks, first[0]).await, titled(&["T"]));
    }

    #[tokio::test]
    async fn test_delete_task_closes_gap() {
        let (boards, tasks) = setup_test_db().await;
        let (_, columns) = create_board(&boards, "B", "user-1").await;
        add_task(&tasks, columns[0], "a").await;
        let b = add_task(&tasks, columns[0], "b").await;
        add_task(&tasks, columns[0], "c").await;

        tasks.delete(b.id).await.expect("Delete failed");

        assert!(tasks.find_by_id(b.id).await.unwrap().is_none());
        assert_eq!(column_titles(&tasks, columns[0]).await, titled(&["a", "c"]));
    }

    #[tokio::test]
    async fn test_update_task_keeps_position() {
        let (boards, tasks) = setup_test_db().await;
        let (_, columns) = create_board(&boards, "B", "user-1").await;
        add_task(&tasks, columns[0], "a").await;
        let mut b = add_task(&tasks, columns[0], "b").await;

        b.title = "b2".to_string();
        b.priority = Priority::Critical;
        b.due_date = Some("2026-11-01".to_string());
        let updated = tasks.update(&b).await.expect("Update failed");

        assert_eq!(updated.title, "b2");
        assert_eq!(updated.priority, Priority::Critical);
        assert_eq!(updated.sort_order, 1);
        assert_eq!(updated.due_date.as_deref(), Some("2026-11-01"));
    }

    #[tokio::test]
    async fn test_board_with_columns_sorted() {
        let (boards, tasks) = setup_test_db().await;
        let (board, columns) = create_board(&boards, "B", "user-1").await;
        let a = add_task(&tasks, columns[1], "a").await;
        add_task(&tasks, columns[1], "b").await;
        tasks.move_to(a.id, columns[1], 1).await.unwrap();

        let loaded = boards.get_with_columns(board.id).await.unwrap();

        assert_eq!(loaded.board.title, "B");
        assert_eq!(loaded.columns.len(), DEFAULT_COLUMNS.len());
        let doing: Vec<&str> = loaded.columns[1].tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(doing, vec!["b", "a"]);
        assert!(loaded.columns[0].tasks.is_empty());
    }

    #[tokio::test]
    async fn test_delete_board_cascades() {
        let (boards, tasks) = setup_test_db().await;
        let (board, columns) = create_board(&boards, "Doomed", "user-1").await;
        let t = add_task(&tasks, columns[0], "T").await;

        boards.delete(board.id).await.expect("Delete failed");

        assert!(matches!(boards.get_with_columns(board.id).await, Err(DomainError::NotFound(_))));
        assert!(tasks.find_by_id(t.id).await.unwrap().is_none());
        assert!(boards.find_column(columns[0]).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_by_owner_paginates() {
        let (boards, _) = setup_test_db().await;
        for i in 0..5 {
            create_board(&boards, &format!("Mine {}", i), "user-1").await;
        }
        create_board(&boards, "Theirs", "user-2").await;

        let first = boards.list_by_owner("user-1", 0, 2).await.unwrap();
        let last = boards.list_by_owner("user-1", 2, 2).await.unwrap();

        assert_eq!(first.total, 5);
        assert_eq!(first.boards.len(), 2);
        assert_eq!(first.boards[0].title, "Mine 4");
        assert_eq!(last.boards.len(), 1);
        assert!(first.boards.iter().all(|b| b.owner_id == "user-1"));
    }

    #[tokio::test]
    async fn test_find_board_by_task_and_column() {
        let (boards, tasks) = setup_test_db().await;
        let (board, columns) = create_board(&boards, "B", "user-1").await;
        let t = add_task(&tasks, columns[3], "T").await;

        assert_eq!(boards.find_by_task(t.id).await.unwrap().map(|b| b.id), Some(board.id));
        assert_eq!(boards.find_by_column(columns[3]).await.unwrap().map(|b| b.id), Some(board.id));
        assert!(boards.find_by_task(4242).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_board() {
        let (boards, _) = setup_test_db().await;
        let (mut board, _) = create_board(&boards, "Old", "user-1").await;

        board.title = "New".to_string();
        boards.update(&board).await.expect("Update failed");

        let found = boards.find_by_id(board.id).await.unwrap().unwrap();
        assert_eq!(found.title, "New");
        assert_eq!(found.owner_id, "user-1");
    }
}
