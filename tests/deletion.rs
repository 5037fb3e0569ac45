//! Correction list deletion tests

mod common;

use common::{selection, single, tokens};
use labelfast::commands::Cmd;
use labelfast::messages::{CorrectionMsg, Msg, SelectionMsg};
use labelfast::model::{CorrectionList, FocusTarget};
use labelfast::update::update;

fn delete_at(i: isize) -> Msg {
    Msg::Correction(CorrectionMsg::DeleteAt(i))
}

#[test]
fn test_delete_only_token_empties_list() {
    let mut model = single("solo");
    update(&mut model, delete_at(0));

    assert!(tokens(&model).is_empty());
    assert_eq!(selection(&model), -1);
}

#[test]
fn test_delete_last_selects_new_last() {
    let mut model = single("a b c");
    update(&mut model, delete_at(2));

    assert_eq!(tokens(&model), vec!["a", "b"]);
    assert_eq!(selection(&model), 1);
}

#[test]
fn test_delete_middle_keeps_index_on_successor() {
    let mut model = single("a b c d");
    update(&mut model, delete_at(1));

    assert_eq!(tokens(&model), vec!["a", "c", "d"]);
    assert_eq!(selection(&model), 1);
    assert_eq!(
        model.sentence().and_then(|s| s.corrections.get(1)),
        Some("c")
    );
}

#[test]
fn test_delete_out_of_range_is_noop() {
    let mut model = single("a b");
    assert_eq!(update(&mut model, delete_at(-1)), None);
    assert_eq!(update(&mut model, delete_at(2)), None);
    assert_eq!(tokens(&model), vec!["a", "b"]);
    assert_eq!(selection(&model), 0);
}

#[test]
fn test_delete_selected_uses_selection() {
    let mut model = single("a b c");
    update(&mut model, Msg::Selection(SelectionMsg::Select(1)));
    update(&mut model, Msg::Correction(CorrectionMsg::DeleteSelected));

    assert_eq!(tokens(&model), vec!["a", "c"]);
    assert_eq!(selection(&model), 1);
}

#[test]
fn test_delete_selected_on_empty_list_is_noop() {
    let mut model = single("");
    assert_eq!(
        update(&mut model, Msg::Correction(CorrectionMsg::DeleteSelected)),
        None
    );
}

#[test]
fn test_delete_returns_focus_and_reveals() {
    let mut model = single("a b c");
    let cmd = update(&mut model, delete_at(0)).expect("command");
    let cmds = cmd.flatten();

    assert!(cmds.contains(&Cmd::ScrollIntoView(0)));
    assert!(cmds.contains(&Cmd::Focus(FocusTarget::CorrectionArea)));
}

#[test]
fn test_delete_everything_one_by_one() {
    let mut model = single("a b c");
    for remaining in (0..3).rev() {
        update(&mut model, Msg::Correction(CorrectionMsg::DeleteSelected));
        assert_eq!(tokens(&model).len(), remaining);
        if remaining == 0 {
            assert_eq!(selection(&model), -1);
        } else {
            assert_eq!(selection(&model), 0);
        }
    }
}

#[test]
fn test_correction_list_join() {
    let list = CorrectionList::from_sentence("  x   y ");
    assert_eq!(list.joined(), "x y");
    assert_eq!(list.len(), 2);
}
