pub mod animation;
pub mod entity;
pub mod player;
pub mod rect;
pub mod sprite;
pub mod status;
pub mod tile;
pub mod weapon;
