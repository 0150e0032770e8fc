use winit::event::{ElementState, KeyEvent as WinitKeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::{Key, KeyEvent, KeyState};

/// Translates a winit keyboard event into an engine `KeyEvent`.
pub(crate) fn translate_key_event(event: &WinitKeyEvent) -> KeyEvent {
    KeyEvent::new(map_key(event.physical_key), map_state(event.state))
}

fn map_state(state: ElementState) -> KeyState {
    match state {
        ElementState::Pressed => KeyState::Pressed,
        ElementState::Released => KeyState::Released,
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        PhysicalKey::Code(KeyCode::Space) => Key::Space,
        PhysicalKey::Code(other) => Key::Unknown(other as u32),

        // NativeKeyCode is not a u32 in winit 0.30; preserve "unknown" without a stable numeric.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn escape_maps_to_escape() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
    }

    #[test]
    fn unmapped_codes_are_unknown() {
        assert_eq!(
            map_key(PhysicalKey::Code(KeyCode::KeyQ)),
            Key::Unknown(KeyCode::KeyQ as u32)
        );
    }

    #[test]
    fn unidentified_keys_have_no_code() {
        let key = map_key(PhysicalKey::Unidentified(NativeKeyCode::Unidentified));
        assert_eq!(key, Key::Unknown(0));
    }

    #[test]
    fn element_state_maps_one_to_one() {
        assert_eq!(map_state(ElementState::Pressed), KeyState::Pressed);
        assert_eq!(map_state(ElementState::Released), KeyState::Released);
    }
}
