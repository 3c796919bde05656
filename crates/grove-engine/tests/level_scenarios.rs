mod support;

use glam::Vec2;
use grove_engine::{EntityKind, Key, KeySnapshot, Level, LevelError, ManualClock, Rect, TileKind};
use support::RecordingSurface;

const EMPTY_5X5: &str = "\
-1,-1,-1,-1,-1
-1,-1,-1,-1,-1
-1,-1,-1,-1,-1
-1,-1,-1,-1,-1
-1,-1,-1,-1,-1
";

#[test]
fn empty_cells_place_no_tiles() {
    let level = Level::new(
        support::config([64.0, 64.0]),
        &support::map(EMPTY_5X5, EMPTY_5X5, EMPTY_5X5),
        &support::library(),
    )
    .expect("level builds");

    assert!(level.obstacles().is_empty());
    assert_eq!(level.scene().len(), 1);
    assert_eq!(level.scene().count_kind(EntityKind::Player), 1);
}

#[test]
fn boundary_cell_becomes_invisible_obstacle() {
    let boundary = "-1,-1,-1\n-1,-1,-1\n-1,-1,-1\n-1,-1,395\n";
    let level = Level::new(
        support::config([640.0, 640.0]),
        &support::map(boundary, EMPTY_5X5, EMPTY_5X5),
        &support::library(),
    )
    .expect("level builds");

    assert_eq!(level.obstacles().len(), 1);
    let wall = level.obstacles().iter().next().unwrap();
    // Cell (col 2, row 3) is the 64px box at (128, 192); the hitbox is the
    // same cell shrunk 10px vertically around its center.
    assert_eq!(wall.hitbox, Rect::new(128.0, 197.0, 64.0, 54.0));
    assert_eq!(wall.hitbox.inflate(0.0, 10.0).top_left(), Vec2::new(128.0, 192.0));
    assert!(!level.scene().contains(wall.id));
    assert_eq!(level.scene().count_kind(EntityKind::Tile(TileKind::Boundary)), 0);
}

#[test]
fn idle_then_walk_then_attack() {
    let mut level = Level::new(
        support::config([64.0, 64.0]),
        &support::map(EMPTY_5X5, EMPTY_5X5, EMPTY_5X5),
        &support::library(),
    )
    .expect("level builds");
    let clock = ManualClock::new(10_000);
    let mut surface = RecordingSurface::default();

    level.run(&KeySnapshot::new(), &clock, &mut surface);
    assert_eq!(level.player().status().key(), "down_idle");

    clock.advance(16);
    level.run(&KeySnapshot::with(&[Key::Right]), &clock, &mut surface);
    assert_eq!(level.player().status().key(), "right");

    clock.advance(16);
    level.run(&KeySnapshot::new(), &clock, &mut surface);
    assert_eq!(level.player().status().key(), "right_idle");

    clock.advance(16);
    level.run(&KeySnapshot::with(&[Key::Attack, Key::Down]), &clock, &mut surface);
    assert!(level.player().is_attacking());
    assert_eq!(level.player().direction(), Vec2::ZERO);
    assert_eq!(level.player().status().key(), "down_attack");
    assert_eq!(level.scene().count_kind(EntityKind::Weapon), 1);
}

#[test]
fn object_code_past_the_collection_aborts_the_build() {
    let objects = "-1,-1\n-1,5\n";
    let result = Level::new(
        support::config([64.0, 64.0]),
        &support::map(EMPTY_5X5, EMPTY_5X5, objects),
        &support::library(),
    );
    match result {
        Err(LevelError::IndexOutOfRange { code, len, .. }) => {
            assert_eq!(code, 5);
            assert_eq!(len, 3);
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("level should not build"),
    }
}

#[test]
fn sprites_below_the_player_draw_over_it() {
    // Grass directly above and below the spawn cell.
    let grass = "-1,-1,-1\n-1,0,-1\n-1,-1,-1\n-1,0,-1\n";
    let mut level = Level::new(
        support::config([64.0, 128.0]),
        &support::map(EMPTY_5X5, grass, EMPTY_5X5),
        &support::library(),
    )
    .expect("level builds");
    let mut surface = RecordingSurface::default();
    level.run(&KeySnapshot::new(), &ManualClock::new(0), &mut surface);

    assert_eq!(surface.blits.len(), 4);
    assert_eq!(surface.blits[0].0.texture.0, 99, "floor first");
    let player_tex = level.scene().get(level.player_id()).unwrap().image.unwrap().texture;
    let order: Vec<u32> = surface.blits.iter().map(|(img, _)| img.texture.0).collect();
    let player_pos = order.iter().position(|t| *t == player_tex.0).unwrap();
    assert_eq!(player_pos, 2, "player between the two grass tiles: {:?}", order);
}
