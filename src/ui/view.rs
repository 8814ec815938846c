use crate::ui::state::AppState;

const CLEAR_SCREEN: &str = "\x1bc";
const HEADER: &str = "┏━━ Task List ━━━";
const PROMPT: &str = ">> ";

/// Renders a full interactive frame: screen reset, task list, message line,
/// prompt marker.
pub fn draw(state: &AppState) -> String {
    let mut out = String::new();
    out.push_str(CLEAR_SCREEN);
    draw_tasks(state, &mut out);
    out.push_str(&format!("{}\n", state.message));
    out.push_str(PROMPT);
    out
}

/// Renders the task list block alone. Shared between the interactive frame
/// and the one-shot print mode.
pub fn draw_tasks(state: &AppState, out: &mut String) {
    out.push_str(HEADER);
    out.push_str("\n\n");

    for (i, task) in state.tasks.iter().enumerate() {
        if state.selecting {
            out.push_str(&format!("  [{}] {}\n", i + 1, task.title));
            if !task.description.is_empty() {
                out.push_str(&format!("        {}\n", task.description));
            }
        } else {
            out.push_str(&format!("  {}\n", task.title));
            if !task.description.is_empty() {
                out.push_str(&format!("    {}\n", task.description));
            }
        }
        out.push('\n');
    }
}
