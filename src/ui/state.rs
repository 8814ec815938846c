use crate::model::Task;

pub struct AppState {
    pub tasks: Vec<Task>,
    /// Transient status or prompt text, cleared after each command.
    pub message: String,
    /// True while a delete/edit awaits an index choice; switches the
    /// renderer to 1-based index display.
    pub selecting: bool,
}

impl AppState {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            message: String::new(),
            selecting: false,
        }
    }
}
