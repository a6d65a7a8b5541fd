use crate::{Aabb, Arena, Config, GameRng};
use glam::Vec2;
use rand::seq::SliceRandom;

/// Pick a random signed speed from `{-speed, +speed}`
fn random_sign(speed: f32, rng: &mut GameRng) -> f32 {
    *[-speed, speed].choose(&mut rng.0).unwrap_or(&speed)
}

/// The pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // Top-left corner
    pub vel: Vec2, // Pixels per tick
    pub size: Vec2,
    pub spawn: Vec2,
    speed_y: f32,
}

impl Ball {
    /// Create a ball at `spawn` serving in a random diagonal direction
    pub fn new(spawn: Vec2, config: &Config, rng: &mut GameRng) -> Self {
        let vel = Vec2::new(
            random_sign(config.ball_speed_x, rng),
            random_sign(config.ball_speed_y, rng),
        );
        Self {
            pos: spawn,
            vel,
            size: Vec2::splat(config.ball_size),
            spawn,
            speed_y: config.ball_speed_y,
        }
    }

    /// Advance one tick. Returns `true` if the ball bounced off the top or bottom wall.
    pub fn advance(&mut self, arena: &Arena) -> bool {
        self.pos += self.vel;

        if self.pos.y <= 0.0 {
            self.pos.y = 0.0;
            self.vel.y = self.vel.y.abs();
            true
        } else if self.pos.y + self.size.y >= arena.height {
            self.pos.y = arena.height - self.size.y;
            self.vel.y = -self.vel.y.abs();
            true
        } else {
            false
        }
    }

    /// Return to spawn, serving towards the other side
    pub fn reset(&mut self, rng: &mut GameRng) {
        self.pos = self.spawn;
        self.vel.x = -self.vel.x;
        self.vel.y = random_sign(self.speed_y, rng);
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// A player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub pos: Vec2, // Top-left corner, x never changes
    pub size: Vec2,
}

impl Paddle {
    pub fn new(x: f32, y: f32, config: &Config) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(config.paddle_width, config.paddle_height),
        }
    }

    /// Move vertically by `delta`, staying fully on-screen
    pub fn move_by(&mut self, delta: f32, arena: &Arena) {
        self.pos.y = arena.clamp_y(self.pos.y + delta, self.size.y);
    }

    /// Steer the paddle center towards the ball's vertical center
    pub fn auto_track(&mut self, ball: &Ball, speed: f32, arena: &Arena) {
        let diff = ball.rect().center().y - self.rect().center().y;
        self.move_by(diff.clamp(-speed, speed), arena);
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}
