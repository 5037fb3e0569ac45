//! Behaviour of the shipped keymap across states

use super::*;

fn keymap() -> Keymap {
    Keymap::with_bindings(default_bindings())
}

fn idle() -> KeyContext {
    KeyContext {
        has_selection: true,
        ..Default::default()
    }
}

fn editing() -> KeyContext {
    KeyContext {
        editing: true,
        ..idle()
    }
}

fn help() -> KeyContext {
    KeyContext {
        help_open: true,
        ..idle()
    }
}

fn completed() -> KeyContext {
    KeyContext {
        completed: true,
        ..Default::default()
    }
}

fn press(key: KeyCode) -> Keystroke {
    Keystroke::key(key)
}

#[test]
fn test_navigation_keys() {
    let keymap = keymap();
    let ctx = idle();
    for key in [KeyCode::Space, KeyCode::Right] {
        assert_eq!(
            keymap.handle_keystroke(press(key), &ctx),
            KeyAction::Execute(Command::SelectNext)
        );
    }
    assert_eq!(
        keymap.handle_keystroke(Keystroke::new(KeyCode::Space, Modifiers::SHIFT), &ctx),
        KeyAction::Execute(Command::SelectPrevious)
    );
    assert_eq!(
        keymap.handle_keystroke(press(KeyCode::Left), &ctx),
        KeyAction::Execute(Command::SelectPrevious)
    );
}

#[test]
fn test_enter_depends_on_editing() {
    let keymap = keymap();
    assert_eq!(
        keymap.handle_keystroke(press(KeyCode::Enter), &idle()),
        KeyAction::Execute(Command::BeginEdit)
    );
    assert_eq!(
        keymap.handle_keystroke(press(KeyCode::Enter), &editing()),
        KeyAction::Execute(Command::CommitEdit)
    );
}

#[test]
fn test_escape_has_three_meanings() {
    let keymap = keymap();
    let esc = press(KeyCode::Escape);
    assert_eq!(
        keymap.handle_keystroke(esc, &idle()),
        KeyAction::Execute(Command::ResetSentence)
    );
    assert_eq!(
        keymap.handle_keystroke(esc, &editing()),
        KeyAction::Execute(Command::CancelEdit)
    );
    assert_eq!(
        keymap.handle_keystroke(esc, &help()),
        KeyAction::Execute(Command::CloseHelp)
    );
}

#[test]
fn test_backspace_deletes_word_or_character() {
    let keymap = keymap();
    assert_eq!(
        keymap.handle_keystroke(press(KeyCode::Backspace), &idle()),
        KeyAction::Execute(Command::DeleteSelected)
    );
    assert_eq!(
        keymap.handle_keystroke(press(KeyCode::Backspace), &editing()),
        KeyAction::Execute(Command::EditDeleteBackward)
    );
}

#[test]
fn test_space_and_question_mark_are_typed_while_editing() {
    let keymap = keymap();
    assert_eq!(
        keymap.handle_keystroke(press(KeyCode::Space), &editing()),
        KeyAction::NoMatch
    );
    assert_eq!(
        keymap.handle_keystroke(Keystroke::char('?'), &editing()),
        KeyAction::NoMatch
    );
}

#[test]
fn test_help_swallows_navigation() {
    let keymap = keymap();
    assert_eq!(
        keymap.handle_keystroke(press(KeyCode::Space), &help()),
        KeyAction::Swallowed
    );
    assert_eq!(
        keymap.handle_keystroke(press(KeyCode::F(1)), &help()),
        KeyAction::Execute(Command::ToggleHelp)
    );
}

#[test]
fn test_completed_only_quits() {
    let keymap = keymap();
    let ctx = completed();
    assert_eq!(
        keymap.handle_keystroke(Keystroke::new(KeyCode::Enter, Modifiers::CTRL), &ctx),
        KeyAction::Swallowed
    );
    assert_eq!(
        keymap.handle_keystroke(Keystroke::new(KeyCode::Char('q'), Modifiers::cmd()), &ctx),
        KeyAction::Execute(Command::Quit)
    );
}

#[test]
fn test_user_override_unbinds_default() {
    let user = parse_keymap_yaml("bindings:\n  - key: space\n    command: Unbound\n").unwrap();
    let keymap = Keymap::with_bindings(merge_bindings(default_bindings(), user));
    assert_eq!(keymap.lookup_with_context(&press(KeyCode::Space), Some(&idle())), None);
    assert_eq!(
        keymap.handle_keystroke(press(KeyCode::Right), &idle()),
        KeyAction::Execute(Command::SelectNext)
    );
}

#[test]
fn test_load_default_keymap_not_empty() {
    assert!(!load_default_keymap().is_empty());
}
