/// A directional control recognized by the game. Any other key code is
/// ignored entirely.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Debug)]
pub enum Key {
    Forward,
    Back,
    RotateLeft,
    RotateRight,
}

impl Key {
    pub fn from_code(code: &str) -> Option<Key> {
        match code {
            "KeyW" => Some(Key::Forward),
            "KeyS" => Some(Key::Back),
            "KeyA" => Some(Key::RotateLeft),
            "KeyD" => Some(Key::RotateRight),
            _ => None,
        }
    }
}

/// The four control flags as read at the top of the current frame. Key
/// repeat is harmless because it re-asserts an already-true flag.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct InputState {
    pub forward: bool,
    pub back: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
}

impl InputState {
    pub fn press(&mut self, key: Key) {
        *self.flag_mut(key) = true;
    }

    pub fn release(&mut self, key: Key) {
        *self.flag_mut(key) = false;
    }

    pub fn clear(&mut self) {
        *self = InputState::default();
    }

    fn flag_mut(&mut self, key: Key) -> &mut bool {
        match key {
            Key::Forward => &mut self.forward,
            Key::Back => &mut self.back,
            Key::RotateLeft => &mut self.rotate_left,
            Key::RotateRight => &mut self.rotate_right,
        }
    }
}
