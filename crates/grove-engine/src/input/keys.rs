/// Logical keys the player controller reads.
/// The platform layer maps physical keys (W/A/S/D, arrows, space, ctrl...) onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Attack,
    Cast,
}

impl Key {
    pub const ALL: [Key; 6] = [
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::Attack,
        Key::Cast,
    ];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Frame-sampled key state. Queried fresh every frame; nothing is queued.
pub trait KeyState {
    /// Whether `key` is held down right now.
    fn pressed(&self, key: Key) -> bool;
}

/// Plain snapshot of held keys, filled in by the platform once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySnapshot {
    held: u8,
}

impl KeySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with exactly the given keys held.
    pub fn with(keys: &[Key]) -> Self {
        let mut snap = Self::new();
        for &key in keys {
            snap.press(key);
        }
        snap
    }

    pub fn press(&mut self, key: Key) {
        self.held |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.held &= !key.bit();
    }

    /// Set a key from a polled boolean.
    pub fn set(&mut self, key: Key, down: bool) {
        if down {
            self.press(key);
        } else {
            self.release(key);
        }
    }

    pub fn clear(&mut self) {
        self.held = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.held == 0
    }
}

impl KeyState for KeySnapshot {
    fn pressed(&self, key: Key) -> bool {
        self.held & key.bit() != 0
    }
}
