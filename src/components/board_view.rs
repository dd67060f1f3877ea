//! Board View Component
//!
//! One board: header, columns of draggable task cards, overlay and modals.
//! Owns the board's `BoardCache` and controller for as long as it is mounted.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::*;

use crate::backend::TauriBackend;
use crate::board_cache::BoardCache;
use crate::components::{BoardForm, BoardHeader, ColumnView, DragOverlay, TaskForm, TaskFormMode};
use crate::context::{report_error, AppContext};
use crate::controller::BoardController;
use crate::models::BoardFields;
use crate::store::{store_update_board, use_app_store};

pub type UiController = BoardController<TauriBackend, RwSignal<BoardCache>>;

/// Which modal is open over the board
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Editor {
    /// New task, in the given column or the first one
    NewTask(Option<u32>),
    EditTask(u32),
    EditBoard,
}

/// Handles shared by every component inside a board view
#[derive(Clone, Copy)]
pub struct BoardHandle {
    pub controller: StoredValue<UiController, LocalStorage>,
    pub cache: RwSignal<BoardCache>,
    pub dnd: DndSignals,
    pub load_error: RwSignal<Option<String>>,
    pub editor: RwSignal<Option<Editor>>,
}

impl BoardHandle {
    /// Run an async controller operation on the local executor
    pub fn run<F, Fut>(&self, op: F)
    where
        F: FnOnce(UiController) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        if let Some(controller) = self.controller.try_get_value() {
            spawn_local(op(controller));
        }
    }

    pub fn reload(&self) {
        let load_error = self.load_error;
        self.run(move |controller| async move {
            match controller.load().await {
                Ok(()) => {
                    load_error.try_set(None);
                }
                Err(e) => {
                    report_error(&e);
                    load_error.try_set(Some(e.user_message()));
                }
            }
        });
    }
}

pub fn use_board() -> BoardHandle {
    use_context::<BoardHandle>().expect("BoardHandle should be provided")
}

fn drag_callbacks(handle: BoardHandle) -> DragCallbacks {
    DragCallbacks {
        on_start: Rc::new(move |task_id: u32| {
            handle.controller.try_with_value(|c| c.drag_start(task_id));
        }),
        on_over: Rc::new(move |task_id: u32, over: DropTarget| {
            handle.controller.try_with_value(|c| c.drag_over(task_id, over));
        }),
        on_drop: Rc::new(move |task_id: u32, over: Option<DropTarget>| {
            let Some(controller) = handle.controller.try_get_value() else {
                return;
            };
            if let Some(plan) = controller.finish_drag(task_id, over) {
                spawn_local(async move {
                    if let Err(e) = controller.persist_move(plan).await {
                        report_error(&e);
                    }
                });
            }
        }),
        on_cancel: Rc::new(move |_task_id: u32| {
            handle.controller.try_with_value(|c| c.drag_cancel());
        }),
    }
}

#[component]
pub fn BoardView(board_id: u32) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let cache = RwSignal::new(BoardCache::new());
    let controller = BoardController::new(Rc::new(TauriBackend), board_id, cache);
    let handle = BoardHandle {
        controller: StoredValue::new_local(controller),
        cache,
        dnd: create_dnd_signals(),
        load_error: RwSignal::new(None),
        editor: RwSignal::new(None),
    };
    provide_context(handle);

    // Document listeners live as long as this view
    let _listeners = StoredValue::new_local(bind_global_handlers(handle.dnd, drag_callbacks(handle)));

    handle.reload();

    let editor = handle.editor;
    let close_editor = move |_: ()| editor.set(None);

    let save_board = move |fields: BoardFields| {
        handle.run(move |controller| async move {
            match controller.update_board(fields).await {
                Ok(board) => {
                    store_update_board(&store, board);
                    editor.try_set(None);
                }
                Err(e) => report_error(&e),
            }
        });
    };

    view! {
        <div class="board-view">
            <div class="board-nav">
                <button class="secondary-btn" on:click=move |_| ctx.close_board()>"← Boards"</button>
            </div>

            {move || handle.load_error.get().map(|msg| view! {
                <div class="inline-error">
                    <span>{msg}</span>
                    <button class="secondary-btn" on:click=move |_| handle.reload()>"Retry"</button>
                </div>
            })}

            <Show when=move || cache.with(|c| c.is_loaded())>
                <BoardHeader />
                <div class="columns">
                    <For
                        each=move || cache.with(|c| c.columns().iter().map(|col| col.id).collect::<Vec<_>>())
                        key=|column_id| *column_id
                        children=move |column_id| view! { <ColumnView column_id=column_id /> }
                    />
                </div>
            </Show>

            <DragOverlay />

            {move || editor.get().map(|mode| match mode {
                Editor::NewTask(column_id) => view! {
                    <TaskForm mode=TaskFormMode::Create(column_id) />
                }.into_any(),
                Editor::EditTask(task_id) => view! {
                    <TaskForm mode=TaskFormMode::Edit(task_id) />
                }.into_any(),
                Editor::EditBoard => {
                    let initial = cache
                        .with_untracked(|c| c.board().map(BoardFields::from_board))
                        .unwrap_or_default();
                    view! {
                        <BoardForm
                            heading="Edit Board"
                            initial=initial
                            submit_label="Save"
                            on_submit=save_board
                            on_cancel=close_editor
                        />
                    }.into_any()
                }
            })}
        </div>
    }
}
