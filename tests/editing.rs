//! Inline edit session tests: begin, buffer editing, commit and cancel

mod common;

use common::{edit_selected, run, selection, single, tokens};
use labelfast::commands::Cmd;
use labelfast::messages::{CorrectionMsg, EditMsg, Msg, SelectionMsg, SessionMsg};
use labelfast::model::FocusTarget;
use labelfast::update::update;

fn edit(msg: EditMsg) -> Msg {
    Msg::Edit(msg)
}

// ========================================================================
// Begin
// ========================================================================

#[test]
fn test_begin_captures_selected_token() {
    let mut model = single("alpha beta");
    update(&mut model, Msg::Selection(SelectionMsg::Select(1)));

    let cmd = update(&mut model, edit(EditMsg::Begin));

    let session = model.session.edit_session().expect("editing");
    assert_eq!(session.target_index, 1);
    assert_eq!(session.text(), "beta");
    assert!(session.is_all_selected());
    assert_eq!(model.ui.focus, FocusTarget::InlineEditor);
    assert!(cmd.is_some_and(|c| c.flatten().contains(&Cmd::Focus(FocusTarget::InlineEditor))));
}

#[test]
fn test_begin_without_selection_is_noop() {
    let mut model = single("");
    assert_eq!(update(&mut model, edit(EditMsg::Begin)), None);
    assert!(!model.session.is_editing());
}

#[test]
fn test_begin_twice_keeps_first_session() {
    let mut model = single("a b");
    update(&mut model, edit(EditMsg::Begin));
    let first = model.session.edit_session().map(|e| e.id);

    assert_eq!(update(&mut model, edit(EditMsg::Begin)), None);
    assert_eq!(model.session.edit_session().map(|e| e.id), first);
}

#[test]
fn test_begin_at_selects_then_edits() {
    let mut model = single("a b c");
    update(&mut model, edit(EditMsg::BeginAt(2)));

    assert_eq!(selection(&model), 2);
    assert_eq!(model.session.edit_session().map(|e| e.target_index), Some(2));
}

#[test]
fn test_begin_at_ignored_while_editing() {
    let mut model = single("a b c");
    update(&mut model, edit(EditMsg::Begin));
    assert_eq!(update(&mut model, edit(EditMsg::BeginAt(2))), None);
    assert_eq!(model.session.edit_session().map(|e| e.target_index), Some(0));
}

// ========================================================================
// Buffer
// ========================================================================

#[test]
fn test_first_keystroke_replaces_word() {
    let mut model = single("hello");
    run(
        &mut model,
        [
            edit(EditMsg::Begin),
            edit(EditMsg::InsertChar('h')),
            edit(EditMsg::InsertChar('i')),
        ],
    );
    assert_eq!(model.session.edit_session().map(|e| e.text()), Some("hi"));
}

#[test]
fn test_caret_movement_keeps_word() {
    let mut model = single("cat");
    run(
        &mut model,
        [
            edit(EditMsg::Begin),
            edit(EditMsg::CaretHome),
            edit(EditMsg::InsertChar('s')),
            edit(EditMsg::CaretEnd),
            edit(EditMsg::InsertChar('s')),
            edit(EditMsg::CaretLeft),
            edit(EditMsg::DeleteBackward),
        ],
    );
    let session = model.session.edit_session().expect("editing");
    assert_eq!(session.text(), "scas");
    assert_eq!(session.caret(), 3);
}

#[test]
fn test_whitespace_is_not_inserted() {
    let mut model = single("word");
    run(
        &mut model,
        [
            edit(EditMsg::Begin),
            edit(EditMsg::CaretEnd),
            edit(EditMsg::InsertChar(' ')),
        ],
    );
    assert_eq!(model.session.edit_session().map(|e| e.text()), Some("word"));
}

#[test]
fn test_delete_forward_at_end_is_noop() {
    let mut model = single("ab");
    run(&mut model, [edit(EditMsg::Begin), edit(EditMsg::CaretEnd)]);
    assert_eq!(update(&mut model, edit(EditMsg::DeleteForward)), None);
}

// ========================================================================
// Commit
// ========================================================================

#[test]
fn test_commit_replaces_and_advances() {
    let mut model = single("a b c");
    edit_selected(&mut model, "x");
    update(&mut model, edit(EditMsg::Commit));

    assert_eq!(tokens(&model), vec!["x", "b", "c"]);
    assert_eq!(selection(&model), 1);
    assert!(!model.session.is_editing());
    assert_eq!(model.ui.focus, FocusTarget::CorrectionArea);
}

#[test]
fn test_commit_on_last_stays_on_last() {
    let mut model = single("a b c");
    update(&mut model, Msg::Selection(SelectionMsg::Select(2)));
    edit_selected(&mut model, "z");
    update(&mut model, edit(EditMsg::Commit));

    assert_eq!(tokens(&model), vec!["a", "b", "z"]);
    assert_eq!(selection(&model), 2);
}

#[test]
fn test_commit_unchanged_still_advances() {
    let mut model = single("a b");
    run(&mut model, [edit(EditMsg::Begin), edit(EditMsg::Commit)]);
    assert_eq!(tokens(&model), vec!["a", "b"]);
    assert_eq!(selection(&model), 1);
}

#[test]
fn test_commit_empty_on_single_token_empties_list() {
    let mut model = single("lonely");
    edit_selected(&mut model, "");
    update(&mut model, edit(EditMsg::Commit));

    assert!(tokens(&model).is_empty());
    assert_eq!(selection(&model), -1);
}

#[test]
fn test_commit_empty_in_middle_selects_successor() {
    let mut model = single("a b c");
    update(&mut model, Msg::Selection(SelectionMsg::Select(1)));
    edit_selected(&mut model, "");
    update(&mut model, edit(EditMsg::Commit));

    assert_eq!(tokens(&model), vec!["a", "c"]);
    assert_eq!(selection(&model), 1);
}

#[test]
fn test_commit_empty_on_last_selects_new_last() {
    let mut model = single("a b c");
    update(&mut model, Msg::Selection(SelectionMsg::Select(2)));
    edit_selected(&mut model, "");
    update(&mut model, edit(EditMsg::Commit));

    assert_eq!(tokens(&model), vec!["a", "b"]);
    assert_eq!(selection(&model), 1);
}

#[test]
fn test_commit_when_idle_is_noop() {
    let mut model = single("a b");
    assert_eq!(update(&mut model, edit(EditMsg::Commit)), None);
    assert_eq!(tokens(&model), vec!["a", "b"]);
}

// ========================================================================
// Cancel
// ========================================================================

#[test]
fn test_cancel_discards_text() {
    let mut model = single("a b c");
    update(&mut model, Msg::Selection(SelectionMsg::Select(1)));
    edit_selected(&mut model, "changed");
    update(&mut model, edit(EditMsg::Cancel));

    assert_eq!(tokens(&model), vec!["a", "b", "c"]);
    assert_eq!(selection(&model), 1);
    assert!(!model.session.is_editing());
    assert_eq!(model.ui.focus, FocusTarget::CorrectionArea);
}

// ========================================================================
// Nothing else mutates while editing
// ========================================================================

#[test]
fn test_no_mutation_while_editing() {
    let mut model = single("a b c");
    update(&mut model, Msg::Selection(SelectionMsg::Select(1)));
    edit_selected(&mut model, "x");

    let blocked = [
        Msg::Selection(SelectionMsg::Select(0)),
        Msg::Selection(SelectionMsg::Move(1)),
        Msg::Correction(CorrectionMsg::DeleteAt(0)),
        Msg::Correction(CorrectionMsg::DeleteSelected),
        Msg::Session(SessionMsg::Reset),
        Msg::Session(SessionMsg::Submit),
    ];
    for msg in blocked {
        let label = format!("{:?}", msg);
        assert_eq!(update(&mut model, msg), None, "{} should be a no-op", label);
    }

    assert_eq!(tokens(&model), vec!["a", "b", "c"]);
    assert_eq!(selection(&model), 1);
    assert_eq!(model.session.current_index(), Some(0));
    assert_eq!(model.session.edit_session().map(|e| e.text()), Some("x"));
}
