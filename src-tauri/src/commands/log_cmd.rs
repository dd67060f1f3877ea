use tauri::command;

/// Most recent backend log lines, oldest first
#[command]
pub fn recent_logs() -> Result<Vec<String>, String> {
    Ok(rolling_logger::recent_lines())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_logs_empty_without_logger() {
        assert_eq!(recent_logs(), Ok(Vec::new()));
    }
}
