use crate::{Ball, Events, Paddle};

/// Reflect the ball off either paddle
///
/// A paddle only reflects a ball travelling towards it, so a ball still
/// overlapping after a bounce is not reflected twice. The ball's edge is
/// snapped to the paddle's face to stop it tunnelling or sticking.
pub fn check_paddle_collisions(
    ball: &mut Ball,
    player: &Paddle,
    ai: &Paddle,
    events: &mut Events,
) {
    if ball.vel.x < 0.0 && player.rect().overlaps(&ball.rect()) {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = player.rect().right();
        events.paddle_hit = true;
    }

    if ball.vel.x > 0.0 && ai.rect().overlaps(&ball.rect()) {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = ai.rect().left() - ball.size.x;
        events.paddle_hit = true;
    }
}
