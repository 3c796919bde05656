//! The player: input, cooldowns, status resolution, animation and movement.

use glam::Vec2;

use crate::api::config::PlayerTuning;
use crate::components::animation::{AnimationSet, Animator};
use crate::components::rect::Rect;
use crate::components::sprite::Image;
use crate::components::status::{Facing, Modifier, Status};
use crate::core::obstacles::ObstacleSet;
use crate::core::time::Cooldown;
use crate::input::keys::{Key, KeyState};
use crate::systems::collision::{resolve_axis, Axis};

/// Player-controlled entity.
///
/// `attacking` and `casting` are tracked independently; the status shows at
/// most one modifier at a time.
#[derive(Debug, Clone)]
pub struct Player {
    /// Render box, recentered on the hitbox every update.
    pub rect: Rect,
    /// Collision box.
    pub hitbox: Rect,
    /// Frame currently shown.
    pub image: Image,
    status: Status,
    direction: Vec2,
    speed: f32,
    attack: Cooldown,
    cast: Cooldown,
    animator: Animator,
    animations: AnimationSet,
}

impl Player {
    /// Player whose render box has its top-left at `pos`, showing the first
    /// frame of the default (`"down"`) sequence.
    pub fn new(pos: Vec2, tuning: &PlayerTuning, animations: AnimationSet) -> Self {
        let status = Status::default();
        let image = animations.frames(status)[0];
        let rect = image.rect_at(pos);
        Self {
            rect,
            hitbox: rect.inflate(0.0, -tuning.hitbox_inset),
            image,
            status,
            direction: Vec2::ZERO,
            speed: tuning.speed,
            attack: Cooldown::new(tuning.attack_cooldown_ms),
            cast: Cooldown::new(tuning.cast_cooldown_ms),
            animator: Animator::new(tuning.animation_speed),
            animations,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn facing(&self) -> Facing {
        self.status.facing
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_attacking(&self) -> bool {
        self.attack.is_active()
    }

    pub fn is_casting(&self) -> bool {
        self.cast.is_active()
    }

    pub fn attack_time(&self) -> u64 {
        self.attack.started_at()
    }

    pub fn cast_time(&self) -> u64 {
        self.cast.started_at()
    }

    pub fn frame_index(&self) -> f32 {
        self.animator.frame_index
    }

    /// Run one frame: input, cooldowns, status, animation, movement.
    ///
    /// `spawn_attack` is called once for every accepted attack press, before
    /// the attack flag is raised.
    pub fn update(
        &mut self,
        keys: &dyn KeyState,
        now: u64,
        obstacles: &ObstacleSet,
        spawn_attack: &mut dyn FnMut(&Player),
    ) {
        let before = self.status;
        self.input(keys, now, spawn_attack);
        self.cooldowns(now);
        self.resolve_status();
        self.animate();
        self.move_by(self.speed, obstacles);
        if self.status != before {
            log::debug!("player status {} -> {}", before, self.status);
        }
    }

    /// Read keys into direction, facing and action flags.
    /// Ignored entirely (not queued) while attacking or casting.
    fn input(&mut self, keys: &dyn KeyState, now: u64, spawn_attack: &mut dyn FnMut(&Player)) {
        if self.is_attacking() || self.is_casting() {
            return;
        }

        if keys.pressed(Key::Up) {
            self.direction.y = -1.0;
            self.status = Status::new(Facing::Up, Modifier::None);
        } else if keys.pressed(Key::Down) {
            self.direction.y = 1.0;
            self.status = Status::new(Facing::Down, Modifier::None);
        } else {
            self.direction.y = 0.0;
        }

        if keys.pressed(Key::Left) {
            self.direction.x = -1.0;
            self.status = Status::new(Facing::Left, Modifier::None);
        } else if keys.pressed(Key::Right) {
            self.direction.x = 1.0;
            self.status = Status::new(Facing::Right, Modifier::None);
        } else {
            self.direction.x = 0.0;
        }

        if keys.pressed(Key::Attack) {
            spawn_attack(self);
            self.attack.trigger(now);
        }

        if keys.pressed(Key::Cast) {
            self.cast.trigger(now);
        }
    }

    fn cooldowns(&mut self, now: u64) {
        self.attack.poll(now);
        self.cast.poll(now);
    }

    /// Status rules, in order:
    /// 1. standing still with no modifier and no action goes idle;
    /// 2. attacking freezes movement and shows `Attack`; an ended attack drops
    ///    back to the bare facing (idle returns on the next update);
    /// 3. same for casting and `Magic`. Running last, `Magic` wins when both
    ///    flags are up.
    fn resolve_status(&mut self) {
        let attacking = self.is_attacking();
        let casting = self.is_casting();

        if self.direction == Vec2::ZERO
            && self.status.modifier == Modifier::None
            && !attacking
            && !casting
        {
            self.status.modifier = Modifier::Idle;
        }

        if attacking {
            self.direction = Vec2::ZERO;
            self.status.modifier = Modifier::Attack;
        } else if self.status.modifier == Modifier::Attack {
            self.status.modifier = Modifier::None;
        }

        if casting {
            self.direction = Vec2::ZERO;
            self.status.modifier = Modifier::Magic;
        } else if self.status.modifier == Modifier::Magic {
            self.status.modifier = Modifier::None;
        }
    }

    fn animate(&mut self) {
        let frames = self.animations.frames(self.status);
        self.image = *self.animator.next_frame(frames);
        self.rect = self.image.rect_centered(self.hitbox.center());
    }

    /// Move `speed` units along the normalized direction, one axis at a time.
    fn move_by(&mut self, speed: f32, obstacles: &ObstacleSet) {
        self.direction = self.direction.normalize_or_zero();

        self.hitbox.x += self.direction.x * speed;
        resolve_axis(&mut self.hitbox, self.direction.x, Axis::Horizontal, obstacles);
        self.hitbox.y += self.direction.y * speed;
        resolve_axis(&mut self.hitbox, self.direction.y, Axis::Vertical, obstacles);

        self.rect.set_center(self.hitbox.center());
    }
}
