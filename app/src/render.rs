use std::fmt::Write as _;

use todo_core::{EditState, TodoController};

pub const TITLE: &str = "Todo App (Full CRUD)";

/// Plain-text view of the controller state.
pub fn render(controller: &TodoController) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "new todo> {}", controller.new_todo());

    if controller.is_loading() {
        let _ = writeln!(out, "Loading...");
    } else if controller.todos().is_empty() {
        let _ = writeln!(out, "(no todos)");
    } else {
        for (i, todo) in controller.todos().iter().enumerate() {
            let mark = if todo.completed { 'x' } else { ' ' };
            match controller.editing() {
                EditState::Editing { id, text } if *id == todo.id => {
                    let _ = writeln!(out, "{:>2}. [{mark}] {text}  (editing)", i + 1);
                }
                _ => {
                    let _ = writeln!(out, "{:>2}. [{mark}] {}", i + 1, todo.title);
                }
            }
        }
    }

    if let Some(err) = controller.last_error() {
        let _ = writeln!(out, "! {err}");
    }
    out
}
