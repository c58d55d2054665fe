//! Keyboard input
//!
//! Hosts forward key-down/key-up events here. Held keys are level-triggered;
//! shooting and restart are one-shots consumed by the next tick.

use crate::sim::TickInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Shoot,
    SmallLaser,
    LargeLaser,
    Restart,
}

impl Key {
    /// Map a browser-style key name (`KeyboardEvent.key`) to a game key
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "s" | "S" => Some(Key::Shoot),
            "a" | "A" => Some(Key::SmallLaser),
            "d" | "D" => Some(Key::LargeLaser),
            "r" | "R" => Some(Key::Restart),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

const KEY_COUNT: usize = 6;

#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: [bool; KEY_COUNT],
    /// Set on shoot press, cleared on shoot release
    fired: bool,
    fire_pending: bool,
    restart_pending: bool,
}

impl InputState {
    pub fn press(&mut self, key: Key) {
        self.held[key.index()] = true;
        match key {
            Key::Shoot if !self.fired => {
                self.fired = true;
                self.fire_pending = true;
            }
            Key::Restart => self.restart_pending = true,
            _ => {}
        }
    }

    pub fn release(&mut self, key: Key) {
        self.held[key.index()] = false;
        if key == Key::Shoot {
            self.fired = false;
        }
    }

    #[inline]
    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    /// Drop everything, e.g. when the host loses focus
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Snapshot for one tick. One-shot requests are consumed.
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
            shoot_held: self.is_held(Key::Shoot),
            small_laser: self.is_held(Key::SmallLaser),
            large_laser: self.is_held(Key::LargeLaser),
            fire: std::mem::take(&mut self.fire_pending),
            restart: std::mem::take(&mut self.restart_pending),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_name("S"), Some(Key::Shoot));
        assert_eq!(Key::from_name("d"), Some(Key::LargeLaser));
        assert_eq!(Key::from_name("Enter"), None);
    }

    #[test]
    fn test_repeated_press_fires_once() {
        let mut input = InputState::default();
        input.press(Key::Shoot);
        input.press(Key::Shoot);
        assert!(input.take_tick_input().fire);

        input.press(Key::Shoot);
        let tick = input.take_tick_input();
        assert!(!tick.fire);
        assert!(tick.shoot_held);
    }

    #[test]
    fn test_release_rearms_shoot() {
        let mut input = InputState::default();
        input.press(Key::Shoot);
        input.release(Key::Shoot);
        input.press(Key::Shoot);
        // Both presses land in the same tick and collapse to one shot
        assert!(input.take_tick_input().fire);
        assert!(!input.take_tick_input().fire);

        input.release(Key::Shoot);
        input.press(Key::Shoot);
        assert!(input.take_tick_input().fire);
    }

    #[test]
    fn test_other_keys_do_not_touch_latch() {
        let mut input = InputState::default();
        input.press(Key::Shoot);
        input.take_tick_input();
        input.release(Key::Left);
        input.press(Key::Shoot);
        assert!(!input.take_tick_input().fire);
    }

    #[test]
    fn test_held_keys_are_level_triggered() {
        let mut input = InputState::default();
        input.press(Key::Left);
        input.press(Key::SmallLaser);
        for _ in 0..3 {
            let tick = input.take_tick_input();
            assert!(tick.left && tick.small_laser);
            assert!(!tick.right);
        }
        input.release(Key::Left);
        assert!(!input.take_tick_input().left);
    }

    #[test]
    fn test_restart_is_one_shot() {
        let mut input = InputState::default();
        input.press(Key::Restart);
        assert!(input.take_tick_input().restart);
        assert!(!input.take_tick_input().restart);
    }

    #[test]
    fn test_clear_drops_pending() {
        let mut input = InputState::default();
        input.press(Key::Shoot);
        input.press(Key::Right);
        input.clear();
        let tick = input.take_tick_input();
        assert_eq!(tick, TickInput::default());
    }
}
