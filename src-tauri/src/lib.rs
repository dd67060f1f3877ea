//! Kanban Board Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - service: Ownership checks and validation on top of the repositories
//! - commands: Tauri command handlers

use tauri::Manager;

mod commands;
mod config;
mod domain;
mod repository;
mod service;

use config::AppConfig;
use repository::init_db;
use service::BoardService;

/// Application state shared across commands
pub struct AppState {
    pub service: BoardService,
    pub config: AppConfig,
}

fn setup_state(app_handle: &tauri::AppHandle) -> Result<AppState, String> {
    let config_dir = app_handle
        .path()
        .app_config_dir()
        .map_err(|e| format!("Failed to get app config dir: {}", e))?;
    let data_dir = app_handle
        .path()
        .app_data_dir()
        .map_err(|e| format!("Failed to get app data dir: {}", e))?;
    std::fs::create_dir_all(&data_dir)
        .map_err(|e| format!("Failed to create app data dir: {}", e))?;

    let config = AppConfig::load_or_create(&config_dir)?;
    let db_path = config.db_path(&data_dir);

    // Commands need the connection, so the migrations finish before the window loads
    let db_state = tauri::async_runtime::block_on(init_db(&db_path))?;
    let _ = rolling_logger::info(&format!("Database ready at {}", db_path.display()));

    let service = BoardService::new(&db_state, config.current_user(), config.page_size);
    Ok(AppState { service, config })
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                if let Some(window) = app.get_webview_window("main") {
                    if let Err(e) = window.set_focus() {
                        let _ = rolling_logger::warn(&format!("Failed to focus existing window: {}", e));
                    }
                }
            }))?;

            let app_handle = app.handle().clone();

            let log_dir = app_handle.path().app_log_dir()?;
            rolling_logger::init_logger(log_dir, "Kanban")?;

            let state = setup_state(&app_handle).inspect_err(|e| {
                let _ = rolling_logger::error(&format!("Startup failed: {}", e));
            })?;
            log::info!(
                "Signed in as {} ({})",
                state.config.display_name,
                state.config.user_id
            );
            app.manage(state);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Identity + boards
            commands::current_user,
            commands::list_boards,
            commands::create_board,
            commands::get_board_with_columns,
            commands::update_board,
            commands::delete_board,
            // Tasks
            commands::get_task,
            commands::create_task,
            commands::update_task,
            commands::delete_task,
            commands::move_task,
            // Dialogs + diagnostics
            commands::show_alert,
            commands::recent_logs,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
