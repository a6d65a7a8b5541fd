use crate::{Arena, Ball, Events, GameRng, Score, Side};
use tracing::debug;

/// Check if ball left the arena (scoring)
///
/// Touching the left edge is a point for the AI, touching the right edge a
/// point for the player. The ball is served again from its spawn point in
/// the same call.
pub fn check_scoring(
    ball: &mut Ball,
    arena: &Arena,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    let scorer = if ball.pos.x <= 0.0 {
        score.increment_ai();
        Side::Ai
    } else if ball.pos.x + ball.size.x >= arena.width {
        score.increment_player();
        Side::Player
    } else {
        return None;
    };

    debug!(%scorer, player = score.player, ai = score.ai, "point scored");
    events.scored = true;
    ball.reset(rng);
    Some(scorer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use glam::Vec2;

    fn setup() -> (Ball, Arena, Score, Events, GameRng) {
        let config = Config::new();
        let arena = Arena::from(&config);
        let mut rng = GameRng::new(12345); // Fixed seed for deterministic tests
        let ball = Ball::new(arena.center(), &config, &mut rng);
        (ball, arena, Score::new(), Events::new(), rng)
    }

    #[test]
    fn test_ai_scores_when_ball_exits_left() {
        let (mut ball, arena, mut score, mut events, mut rng) = setup();
        ball.pos = Vec2::new(-1.0, 300.0);
        ball.vel = Vec2::new(-5.0, 3.0);

        let scorer = check_scoring(&mut ball, &arena, &mut score, &mut events, &mut rng);

        assert_eq!(scorer, Some(Side::Ai));
        assert_eq!(score, Score { player: 0, ai: 1 });
        assert!(events.scored, "Should trigger scored event");
    }

    #[test]
    fn test_player_scores_when_ball_exits_right() {
        let (mut ball, arena, mut score, mut events, mut rng) = setup();
        ball.pos = Vec2::new(795.0, 300.0);
        ball.vel = Vec2::new(5.0, 3.0);

        let scorer = check_scoring(&mut ball, &arena, &mut score, &mut events, &mut rng);

        assert_eq!(scorer, Some(Side::Player));
        assert_eq!(score, Score { player: 1, ai: 0 });
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut ball, arena, mut score, mut events, mut rng) = setup();
        ball.pos = Vec2::new(-1.0, 40.0);
        ball.vel = Vec2::new(-5.0, -3.0);

        check_scoring(&mut ball, &arena, &mut score, &mut events, &mut rng);

        assert_eq!(ball.pos, ball.spawn, "Ball should reset to center");
        assert_eq!(ball.vel.x, 5.0, "Serve goes the other way");
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut ball, arena, mut score, mut events, mut rng) = setup();
        ball.pos = Vec2::new(400.0, 300.0);

        let scorer = check_scoring(&mut ball, &arena, &mut score, &mut events, &mut rng);

        assert_eq!(scorer, None);
        assert_eq!(score, Score::new(), "No score when ball in bounds");
        assert!(!events.scored, "No scoring events");
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut ball, arena, mut score, mut events, mut rng) = setup();

        for _ in 0..2 {
            ball.pos = Vec2::new(800.0, 300.0);
            check_scoring(&mut ball, &arena, &mut score, &mut events, &mut rng);
            events.clear();
        }

        assert_eq!(score.player, 2, "Scores should accumulate");
        assert_eq!(score.ai, 0);
    }
}
