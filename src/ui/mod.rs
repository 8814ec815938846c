pub mod command;
pub mod state;
pub mod view;

use crate::model::Task;
use crate::storage::Storage;
use crate::ui::command::Command;
use crate::ui::state::AppState;
use anyhow::Result;
use log::info;
use std::io::{BufRead, Write};

const NO_TASKS: &str = "You have no tasks. Use `add` command to create one";

/// Interactive command loop: draw a frame, read a trimmed line, dispatch.
/// Generic over the input/output streams so sessions can be scripted.
pub fn run<R: BufRead, W: Write>(
    storage: &mut Storage,
    tasks: Vec<Task>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let mut state = AppState::new(tasks);
    info!("interactive session started");

    loop {
        redraw(out, &state)?;

        // End of input ends the session like `exit`.
        let Some(line) = read_line(input)? else {
            break;
        };

        match Command::parse(&line) {
            Command::Empty => state.message.clear(),
            Command::Add => add(&mut state, storage, input, out)?,
            Command::Delete => delete(&mut state, storage, input, out)?,
            Command::Edit => edit(&mut state, storage, input, out)?,
            Command::Exit => break,
            Command::Help => state.message = command::HELP.to_string(),
            Command::Unknown(cmd) => {
                state.message = format!("Unknown command `{cmd}`. Type `help` to see commands");
            }
        }
    }

    info!("interactive session ended");
    Ok(())
}

/// One-shot mode: print the task list block alone, nothing if it is empty.
pub fn print_tasks<W: Write>(tasks: &[Task], out: &mut W) -> Result<()> {
    if tasks.is_empty() {
        return Ok(());
    }
    let state = AppState::new(tasks.to_vec());
    let mut buf = String::new();
    view::draw_tasks(&state, &mut buf);
    out.write_all(buf.as_bytes())?;
    Ok(())
}

fn add<R: BufRead, W: Write>(
    state: &mut AppState,
    storage: &mut Storage,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    state.message = "Enter title (empty to cancel):".to_string();
    redraw(out, state)?;

    let title = read_line(input)?.unwrap_or_default();
    if !title.is_empty() {
        state.message = "Enter description (optional):".to_string();
        redraw(out, state)?;
        let description = read_line(input)?.unwrap_or_default();

        state.tasks.push(Task::new(title, description));
        storage.write(&state.tasks)?;
    }

    state.message.clear();
    Ok(())
}

fn delete<R: BufRead, W: Write>(
    state: &mut AppState,
    storage: &mut Storage,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    if state.tasks.is_empty() {
        state.message = NO_TASKS.to_string();
        return Ok(());
    }

    state.message = "Choose task to delete (empty to cancel):".to_string();
    state.selecting = true;
    redraw(out, state)?;

    if let Some(idx) = read_index(input, out, state)? {
        state.tasks.remove(idx);
        storage.write(&state.tasks)?;
    }

    state.selecting = false;
    state.message.clear();
    Ok(())
}

fn edit<R: BufRead, W: Write>(
    state: &mut AppState,
    storage: &mut Storage,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    if state.tasks.is_empty() {
        state.message = NO_TASKS.to_string();
        return Ok(());
    }

    state.message = "Choose task to edit (empty to cancel):".to_string();
    state.selecting = true;
    redraw(out, state)?;

    if let Some(idx) = read_index(input, out, state)? {
        state.message = "Enter new title (empty to skip):".to_string();
        redraw(out, state)?;
        let title = read_line(input)?.unwrap_or_default();

        state.message = "Enter new description (empty to skip):".to_string();
        redraw(out, state)?;
        let description = read_line(input)?.unwrap_or_default();

        let mut changed = false;
        if !title.is_empty() {
            state.tasks[idx].title = title;
            changed = true;
        }
        if !description.is_empty() {
            state.tasks[idx].description = description;
            changed = true;
        }
        if changed {
            storage.write(&state.tasks)?;
        }
    }

    state.selecting = false;
    state.message.clear();
    Ok(())
}

/// Reads one line, trimmed. `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    let n = input.read_line(&mut buf)?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Index selection sub-loop. Accepts a 1-based position within the current
/// list and returns it 0-based; empty input (or end of input) cancels.
/// Anything else redraws the frame and asks again.
fn read_index<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    state: &AppState,
) -> Result<Option<usize>> {
    loop {
        let Some(text) = read_line(input)? else {
            return Ok(None);
        };
        if text.is_empty() {
            return Ok(None);
        }

        if let Ok(v) = text.parse::<usize>()
            && (1..=state.tasks.len()).contains(&v)
        {
            return Ok(Some(v - 1));
        }

        redraw(out, state)?;
    }
}

fn redraw<W: Write>(out: &mut W, state: &AppState) -> Result<()> {
    out.write_all(view::draw(state).as_bytes())?;
    out.flush()?;
    Ok(())
}
