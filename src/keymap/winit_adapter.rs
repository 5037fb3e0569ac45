//! Adapter to convert winit key events to our Keystroke type

use winit::keyboard::{Key, KeyCode as WinitKeyCode, ModifiersState, NamedKey, PhysicalKey};

use super::types::{KeyCode, Keystroke, Modifiers};

/// Convert winit key event data to a Keystroke
///
/// Returns None for keys the keymap has no name for.
pub fn keystroke_from_winit(
    logical_key: &Key,
    physical_key: PhysicalKey,
    state: ModifiersState,
) -> Option<Keystroke> {
    let mods = Modifiers::new(
        state.control_key(),
        state.shift_key(),
        state.alt_key(),
        state.super_key(),
    );

    let key_code = match logical_key {
        Key::Named(named) => named_key(*named),
        Key::Character(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c.to_ascii_lowercase())),
                _ => None,
            }
        }
        _ => None,
    };

    // Keypad Enter reports a physical code some platforms leave unnamed
    let key_code = key_code.or(match physical_key {
        PhysicalKey::Code(WinitKeyCode::NumpadEnter) => Some(KeyCode::Enter),
        _ => None,
    });

    key_code.map(|key| Keystroke::new(key, mods))
}

fn named_key(named: NamedKey) -> Option<KeyCode> {
    Some(match named {
        NamedKey::Enter => KeyCode::Enter,
        NamedKey::Escape => KeyCode::Escape,
        NamedKey::Tab => KeyCode::Tab,
        NamedKey::Backspace => KeyCode::Backspace,
        NamedKey::Delete => KeyCode::Delete,
        NamedKey::Space => KeyCode::Space,
        NamedKey::ArrowUp => KeyCode::Up,
        NamedKey::ArrowDown => KeyCode::Down,
        NamedKey::ArrowLeft => KeyCode::Left,
        NamedKey::ArrowRight => KeyCode::Right,
        NamedKey::Home => KeyCode::Home,
        NamedKey::End => KeyCode::End,
        NamedKey::PageUp => KeyCode::PageUp,
        NamedKey::PageDown => KeyCode::PageDown,
        NamedKey::F1 => KeyCode::F(1),
        NamedKey::F2 => KeyCode::F(2),
        NamedKey::F3 => KeyCode::F(3),
        NamedKey::F4 => KeyCode::F(4),
        NamedKey::F5 => KeyCode::F(5),
        NamedKey::F6 => KeyCode::F(6),
        NamedKey::F7 => KeyCode::F(7),
        NamedKey::F8 => KeyCode::F(8),
        NamedKey::F9 => KeyCode::F(9),
        NamedKey::F10 => KeyCode::F(10),
        NamedKey::F11 => KeyCode::F(11),
        NamedKey::F12 => KeyCode::F(12),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_key_with_ctrl() {
        let stroke = keystroke_from_winit(
            &Key::Character("Q".into()),
            PhysicalKey::Code(WinitKeyCode::KeyQ),
            ModifiersState::CONTROL,
        )
        .expect("should map");
        assert_eq!(stroke.key, KeyCode::Char('q'));
        assert!(stroke.mods.ctrl());
        assert!(!stroke.mods.shift());
    }

    #[test]
    fn test_named_keys() {
        let stroke = keystroke_from_winit(
            &Key::Named(NamedKey::Space),
            PhysicalKey::Code(WinitKeyCode::Space),
            ModifiersState::SHIFT,
        )
        .expect("should map");
        assert_eq!(stroke, Keystroke::new(KeyCode::Space, Modifiers::SHIFT));

        let f2 = keystroke_from_winit(
            &Key::Named(NamedKey::F2),
            PhysicalKey::Code(WinitKeyCode::F2),
            ModifiersState::empty(),
        );
        assert_eq!(f2, Some(Keystroke::key(KeyCode::F(2))));
    }

    #[test]
    fn test_arabic_character_passes_through() {
        let stroke = keystroke_from_winit(
            &Key::Character("ب".into()),
            PhysicalKey::Code(WinitKeyCode::KeyF),
            ModifiersState::empty(),
        )
        .expect("should map");
        assert_eq!(stroke.key, KeyCode::Char('ب'));
    }

    #[test]
    fn test_unmapped_key() {
        let stroke = keystroke_from_winit(
            &Key::Named(NamedKey::CapsLock),
            PhysicalKey::Code(WinitKeyCode::CapsLock),
            ModifiersState::empty(),
        );
        assert_eq!(stroke, None);
    }
}
