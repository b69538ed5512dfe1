//! View/state controller for the todo list.
//!
//! # Design
//! The controller owns every piece of UI state and never touches the
//! network. Operations that need the remote service return a
//! `PendingRequest`; the host executes it and hands the outcome back through
//! `apply`. Outcomes are applied to whatever the state is when they arrive:
//! there is no sequencing between requests, so a slow response can land
//! after a newer one.
//!
//! Failures are logged and recorded in `last_error`; local records are never
//! touched on failure and nothing is retried.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};

/// Which logical operation a request belongs to. Handed back with the
/// outcome so the controller knows how to reconcile it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Delete(TodoId),
    Save(TodoId),
}

/// A request the host must execute, tagged with its operation.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub operation: Operation,
    pub request: HttpRequest,
}

/// Single-slot editing state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Editing { id: TodoId, text: String },
}

impl EditState {
    pub fn editing_id(&self) -> Option<TodoId> {
        match self {
            EditState::Idle => None,
            EditState::Editing { id, .. } => Some(*id),
        }
    }
}

#[derive(Debug)]
pub struct TodoController {
    client: TodoClient,
    todos: Vec<Todo>,
    new_todo: String,
    /// Loads issued and not yet answered.
    loads_in_flight: usize,
    editing: EditState,
    last_error: Option<String>,
}

impl TodoController {
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            todos: Vec::new(),
            new_todo: String::new(),
            loads_in_flight: 0,
            editing: EditState::Idle,
            last_error: None,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn new_todo(&self) -> &str {
        &self.new_todo
    }

    /// True while any Load is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loads_in_flight > 0
    }

    pub fn editing(&self) -> &EditState {
        &self.editing
    }

    /// Message of the most recent failure, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn begin_load(&mut self) -> PendingRequest {
        self.loads_in_flight += 1;
        PendingRequest {
            operation: Operation::Load,
            request: self.client.build_list_todos(),
        }
    }

    pub fn set_new_todo(&mut self, text: impl Into<String>) {
        self.new_todo = text.into();
    }

    /// Returns `None` without side effects when the input is blank.
    pub fn submit_create(&mut self) -> Option<PendingRequest> {
        if self.new_todo.trim().is_empty() {
            return None;
        }
        let input = CreateTodo {
            title: self.new_todo.clone(),
            completed: false,
        };
        match self.client.build_create_todo(&input) {
            Ok(request) => Some(PendingRequest {
                operation: Operation::Create,
                request,
            }),
            Err(err) => {
                self.record_failure(Operation::Create, &err);
                None
            }
        }
    }

    pub fn delete(&self, id: TodoId) -> PendingRequest {
        PendingRequest {
            operation: Operation::Delete(id),
            request: self.client.build_delete_todo(id),
        }
    }

    /// Starts editing `todo`, dropping any unsaved edit.
    pub fn begin_edit(&mut self, todo: &Todo) {
        if let Some(previous) = self.editing.editing_id().filter(|id| *id != todo.id) {
            debug!(%previous, next = %todo.id, "discarding unsaved edit");
        }
        self.editing = EditState::Editing {
            id: todo.id,
            text: todo.title.clone(),
        };
    }

    /// `begin_edit` for the record at `index`. Returns false when out of range.
    pub fn begin_edit_at(&mut self, index: usize) -> bool {
        match self.todos.get(index).cloned() {
            Some(todo) => {
                self.begin_edit(&todo);
                true
            }
            None => false,
        }
    }

    /// No-op while idle.
    pub fn set_edit_text(&mut self, new_text: impl Into<String>) {
        if let EditState::Editing { text, .. } = &mut self.editing {
            *text = new_text.into();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = EditState::Idle;
    }

    /// Builds the update for `id` if it is the record being edited.
    ///
    /// `completed` is always sent as `false`, whatever the record held.
    pub fn save_edit(&mut self, id: TodoId) -> Option<PendingRequest> {
        let EditState::Editing { id: editing, text } = &self.editing else {
            return None;
        };
        if *editing != id {
            return None;
        }
        let input = UpdateTodo {
            title: text.clone(),
            completed: false,
        };
        match self.client.build_update_todo(id, &input) {
            Ok(request) => Some(PendingRequest {
                operation: Operation::Save(id),
                request,
            }),
            Err(err) => {
                self.record_failure(Operation::Save(id), &err);
                None
            }
        }
    }

    /// Reconciles local state with the outcome of a request.
    pub fn apply(&mut self, operation: Operation, outcome: Result<HttpResponse, ApiError>) {
        if operation == Operation::Load {
            self.loads_in_flight = self.loads_in_flight.saturating_sub(1);
        }
        let result = outcome.and_then(|response| self.reconcile(operation, response));
        match result {
            Ok(()) => {
                debug!(?operation, count = self.todos.len(), "applied response");
                self.last_error = None;
            }
            Err(err) => self.record_failure(operation, &err),
        }
    }

    fn reconcile(&mut self, operation: Operation, response: HttpResponse) -> Result<(), ApiError> {
        match operation {
            Operation::Load => {
                self.todos = self.client.parse_list_todos(response)?;
            }
            Operation::Create => {
                let todo = self.client.parse_create_todo(response)?;
                self.todos.insert(0, todo);
                self.new_todo.clear();
            }
            Operation::Delete(id) => {
                self.client.parse_delete_todo(response)?;
                self.todos.retain(|todo| todo.id != id);
            }
            Operation::Save(id) => {
                let updated = self.client.parse_update_todo(response)?;
                for todo in self.todos.iter_mut().filter(|todo| todo.id == id) {
                    *todo = updated.clone();
                }
                if self.editing.editing_id() == Some(id) {
                    self.editing = EditState::Idle;
                }
            }
        }
        Ok(())
    }

    fn record_failure(&mut self, operation: Operation, err: &ApiError) {
        let action = match operation {
            Operation::Load => "fetching todos",
            Operation::Create => "adding todo",
            Operation::Delete(_) => "deleting todo",
            Operation::Save(_) => "updating todo",
        };
        warn!(?operation, error = %err, "error {action}");
        self.last_error = Some(format!("Error {action}: {err}"));
    }
}
