use task_list::model::Task;
use task_list::ui;
use task_list::ui::state::AppState;
use task_list::ui::view;

#[test]
fn one_shot_prints_nothing_for_an_empty_list() {
    let mut out = Vec::new();
    ui::print_tasks(&[], &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn one_shot_prints_the_task_block_alone() {
    let mut out = Vec::new();
    ui::print_tasks(&[Task::new("A", "")], &mut out).unwrap();

    // Header and title only: no screen reset, no message line, no prompt.
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "┏━━ Task List ━━━\n\n  A\n\n"
    );
}

#[test]
fn one_shot_indents_descriptions() {
    let mut out = Vec::new();
    ui::print_tasks(&[Task::new("A", "note")], &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "┏━━ Task List ━━━\n\n  A\n    note\n\n"
    );
}

#[test]
fn frame_resets_screen_and_ends_with_prompt() {
    let mut state = AppState::new(vec![Task::new("A", "")]);
    state.message = "hello".to_string();

    let frame = view::draw(&state);

    assert!(frame.starts_with("\x1bc"));
    assert!(frame.contains("┏━━ Task List ━━━\n\n"));
    assert!(frame.contains("hello\n"));
    assert!(frame.ends_with(">> "));
}

#[test]
fn empty_message_renders_as_blank_line() {
    let state = AppState::new(vec![]);
    let frame = view::draw(&state);
    assert!(frame.ends_with("\n\n>> "));
}

#[test]
fn selecting_frame_prefixes_indices_and_deepens_indent() {
    let mut state = AppState::new(vec![
        Task::new("First", "details"),
        Task::new("Second", ""),
    ]);
    state.selecting = true;

    let frame = view::draw(&state);

    assert!(frame.contains("  [1] First\n        details\n"));
    assert!(frame.contains("  [2] Second\n"));
}
