use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

use emu8_core::constants::NUM_KEYS;

use crate::keymap::keymap;

/// Drains pending SDL events into the keypad.
///
/// Returns whether the user asked to quit (closing the window or pressing Escape).
pub fn process_input(events: &mut EventPump, keys: &mut [bool; NUM_KEYS]) -> bool {
    let mut quit = false;
    for event in events.poll_iter() {
        quit |= apply_event(&event, keys);
    }
    quit
}

fn apply_event(event: &Event, keys: &mut [bool; NUM_KEYS]) -> bool {
    match event {
        Event::Quit { .. }
        | Event::KeyDown {
            keycode: Some(Keycode::Escape),
            ..
        } => return true,
        Event::KeyDown {
            keycode: Some(key), ..
        } => {
            if let Some(kc) = keymap(*key) {
                keys[kc] = true;
            }
        }
        Event::KeyUp {
            keycode: Some(key), ..
        } => {
            if let Some(kc) = keymap(*key) {
                keys[kc] = false;
            }
        }
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    fn key_down(key: Keycode) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(key),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    fn key_up(key: Keycode) -> Event {
        Event::KeyUp {
            timestamp: 0,
            window_id: 0,
            keycode: Some(key),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    #[test]
    fn test_key_down_then_up() {
        let mut keys = [false; NUM_KEYS];
        assert!(!apply_event(&key_down(Keycode::X), &mut keys));
        assert!(keys[0x0]);
        assert!(keys[0x1..].iter().all(|&k| !k));

        assert!(!apply_event(&key_up(Keycode::X), &mut keys));
        assert!(keys.iter().all(|&k| !k));
    }

    #[test]
    fn test_unmapped_key_changes_nothing() {
        let mut keys = [false; NUM_KEYS];
        assert!(!apply_event(&key_down(Keycode::B), &mut keys));
        assert_eq!(keys, [false; NUM_KEYS]);
    }

    #[test]
    fn test_quit_events() {
        let mut keys = [false; NUM_KEYS];
        assert!(apply_event(&Event::Quit { timestamp: 0 }, &mut keys));
        assert!(apply_event(&key_down(Keycode::Escape), &mut keys));
    }
}
