//! Player status: which way the player faces and what it is doing.
//!
//! The status is a pair of enums rather than a string tag. The animation key
//! (`"down"`, `"left_idle"`, `"up_attack"`, ...) is derived from the pair.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Up, Facing::Down, Facing::Left, Facing::Right];

    pub fn name(self) -> &'static str {
        match self {
            Facing::Up => "up",
            Facing::Down => "down",
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

/// Action shown on top of the facing. Only one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Modifier {
    /// Walking (or just turned).
    #[default]
    None = 0,
    Idle = 1,
    Attack = 2,
    Magic = 3,
}

impl Modifier {
    pub const ALL: [Modifier; 4] = [
        Modifier::None,
        Modifier::Idle,
        Modifier::Attack,
        Modifier::Magic,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            Modifier::None => "",
            Modifier::Idle => "_idle",
            Modifier::Attack => "_attack",
            Modifier::Magic => "_magic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status {
    pub facing: Facing,
    pub modifier: Modifier,
}

impl Status {
    /// Total number of distinct statuses.
    pub const COUNT: usize = 16;

    pub fn new(facing: Facing, modifier: Modifier) -> Self {
        Self { facing, modifier }
    }

    /// Every status, in `index()` order.
    pub fn all() -> impl Iterator<Item = Status> {
        Facing::ALL
            .into_iter()
            .flat_map(|f| Modifier::ALL.into_iter().map(move |m| Status::new(f, m)))
    }

    /// Dense index in `0..COUNT`.
    pub fn index(self) -> usize {
        self.facing as usize * Modifier::ALL.len() + self.modifier as usize
    }

    /// Animation key, e.g. `"down_idle"`.
    pub fn key(self) -> String {
        self.to_string()
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::new(Facing::Down, Modifier::None)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.facing.name(), self.modifier.suffix())
    }
}
