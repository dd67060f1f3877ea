//! Leptos DragDrop Utilities
//!
//! Mouse-event drag and drop for kanban cards in Leptos.
//! Uses a movement threshold to distinguish click from drag and reports the
//! gesture as start → over* → drop | cancel through [`DragCallbacks`].

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// What the pointer is currently over while dragging
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Over a task card (possibly the dragged card itself)
    Task(u32),
    /// Over a column body but not over any card (empty column or padding)
    Column(u32),
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    /// True for a short moment after a drag, so the trailing click is ignored
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending task id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Pointer position during a drag, for the overlay
    pub pointer_read: ReadSignal<(i32, i32)>,
    pub pointer_write: WriteSignal<(i32, i32)>,
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// True once the pointer moved far enough from the mousedown point
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    (current.0 - start.0).abs() > DRAG_THRESHOLD_PX || (current.1 - start.1).abs() > DRAG_THRESHOLD_PX
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (pointer_read, pointer_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        pointer_read,
        pointer_write,
    }
}

/// Gesture callbacks, invoked from the global listeners
///
/// `on_drop` receives `None` when the drag ended outside every target.
#[derive(Clone)]
pub struct DragCallbacks {
    pub on_start: Rc<dyn Fn(u32)>,
    pub on_over: Rc<dyn Fn(u32, DropTarget)>,
    pub on_drop: Rc<dyn Fn(u32, Option<DropTarget>)>,
    pub on_cancel: Rc<dyn Fn(u32)>,
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = Closure::once_into_js(move || {
            clear.try_set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), 100);
    }
}

fn is_form_control(ev: &web_sys::MouseEvent) -> bool {
    ev.target().is_some_and(|target| {
        target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
            || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
            || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
            || target.dyn_ref::<web_sys::HtmlSelectElement>().is_some()
    })
}

/// Create mousedown handler for draggable task cards
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, task_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || is_form_control(&ev) {
            return;
        }
        dnd.pending_id_write.set(Some(task_id));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Create mouseenter handler for task cards
pub fn make_on_task_mouseenter(dnd: DndSignals, task_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Task(task_id)));
        }
    }
}

/// Create mouseleave handler for task cards: the pointer is back over its column
pub fn make_on_task_mouseleave(dnd: DndSignals, column_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Column(column_id)));
        }
    }
}

/// Create mouseenter handler for column bodies
pub fn make_on_column_mouseenter(dnd: DndSignals, column_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Column(column_id)));
        }
    }
}

/// Create mouseleave handler for column bodies
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

type EventClosure = Closure<dyn FnMut(web_sys::Event)>;

/// Document listeners installed by [`bind_global_handlers`]
///
/// Dropping the value removes the listeners.
pub struct GlobalListeners {
    document: Option<web_sys::Document>,
    listeners: Vec<(&'static str, EventClosure)>,
}

impl GlobalListeners {
    fn add(&mut self, event: &'static str, closure: EventClosure) {
        if let Some(doc) = self.document.as_ref() {
            let _ = doc.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
        self.listeners.push((event, closure));
    }
}

impl Drop for GlobalListeners {
    fn drop(&mut self) {
        if let Some(doc) = self.document.as_ref() {
            for (event, closure) in &self.listeners {
                let _ = doc.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            }
        }
    }
}

/// Bind document-level mousemove / mouseup / keydown handlers
///
/// - mousemove starts the drag once past the threshold and reports target changes
/// - mouseup ends the drag (or clears a pending click)
/// - Escape cancels an active drag
pub fn bind_global_handlers(dnd: DndSignals, callbacks: DragCallbacks) -> GlobalListeners {
    let document = web_sys::window().and_then(|win| win.document());
    let mut handle = GlobalListeners {
        document,
        listeners: Vec::new(),
    };
    let last_over: Rc<Cell<Option<DropTarget>>> = Rc::new(Cell::new(None));

    let on_mousemove = {
        let callbacks = callbacks.clone();
        let last_over = last_over.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() else {
                return;
            };
            let (Some(pending), Some(dragging)) =
                (dnd.pending_id_read.try_get_untracked(), dnd.dragging_id_read.try_get_untracked())
            else {
                return;
            };
            let current = (ev.client_x(), ev.client_y());

            match (pending, dragging) {
                (Some(task_id), None) => {
                    let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
                    if exceeds_threshold(start, current) {
                        last_over.set(None);
                        dnd.pointer_write.set(current);
                        dnd.dragging_id_write.set(Some(task_id));
                        (callbacks.on_start)(task_id);
                    }
                }
                (_, Some(task_id)) => {
                    dnd.pointer_write.set(current);
                    let target = dnd.drop_target_read.get_untracked();
                    if target != last_over.get() {
                        last_over.set(target);
                        if let Some(target) = target {
                            (callbacks.on_over)(task_id, target);
                        }
                    }
                }
                _ => {}
            }
        })
    };
    handle.add("mousemove", on_mousemove);

    let on_mouseup = {
        let callbacks = callbacks.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            let Some(dragging) = dnd.dragging_id_read.try_get_untracked() else {
                return;
            };
            let target = dnd.drop_target_read.get_untracked();
            if dragging.is_some() || dnd.pending_id_read.get_untracked().is_some() {
                end_drag(&dnd);
            }
            // Plain clicks never started a drag and fall through to the card's click handler
            if let Some(task_id) = dragging {
                (callbacks.on_drop)(task_id, target);
            }
        })
    };
    handle.add("mouseup", on_mouseup);

    let on_keydown = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        let Some(ev) = ev.dyn_ref::<web_sys::KeyboardEvent>() else {
            return;
        };
        if ev.key() != "Escape" {
            return;
        }
        if let Some(Some(task_id)) = dnd.dragging_id_read.try_get_untracked() {
            end_drag(&dnd);
            (callbacks.on_cancel)(task_id);
        }
    });
    handle.add("keydown", on_keydown);

    handle
}
