//! Pong game engine
//!
//! Owns the ball, both paddles and the match state machine:
//! `Playing` → `Replay` when a side reaches the winning score, and back to
//! `Playing` when a new match length is picked from the replay menu.

use crate::render::{Anchor, Canvas, Color, TextStyle};
use crate::systems::{check_paddle_collisions, check_scoring};
use crate::{
    Arena, Ball, Config, Events, GameRng, HeldKeys, Key, Paddle, Score, Side, WinningScore,
};
use glam::Vec2;
use tracing::info;

/// Replay menu lines, top to bottom
pub const MENU_OPTIONS: [&str; 5] = [
    "Play again:",
    "[3] - First to 3",
    "[5] - First to 5",
    "[7] - First to 7",
    "[ESC] - Exit",
];

const SCORE_Y: f32 = 20.0;
const BANNER_OFFSET_Y: f32 = -100.0;
const MENU_LINE_SPACING: f32 = 40.0;

/// Match state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Playing,
    Replay,
}

pub struct GameEngine {
    config: Config,
    arena: Arena,
    rng: GameRng,

    ball: Ball,
    player: Paddle,
    ai: Paddle,

    score: Score,
    mode: GameMode,
    winning_score: WinningScore,
    winner: Option<Side>,
    should_quit: bool,
    events: Events,
}

impl GameEngine {
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let arena = Arena::from(&config);
        let ball = Ball::new(arena.center(), &config, &mut rng);
        let player = Paddle::new(config.player_paddle_x(), config.paddle_start_y(), &config);
        let ai = Paddle::new(config.ai_paddle_x(), config.paddle_start_y(), &config);
        let winning_score = config.winning_score;

        Self {
            config,
            arena,
            rng,
            ball,
            player,
            ai,
            score: Score::new(),
            mode: GameMode::Playing,
            winning_score,
            winner: None,
            should_quit: false,
            events: Events::new(),
        }
    }

    /// Start a fresh match first to `new_winning_score`
    pub fn reset_game(&mut self, new_winning_score: WinningScore) {
        self.winning_score = new_winning_score;
        self.score = Score::new();
        self.winner = None;
        self.ball.reset(&mut self.rng);
        self.player.pos.y = self.config.paddle_start_y();
        self.ai.pos.y = self.config.paddle_start_y();
        self.mode = GameMode::Playing;
        info!(winning_score = %new_winning_score, "new match started");
    }

    /// Handle a key-down event. Only the replay menu reacts to discrete keys.
    pub fn process_input(&mut self, key: Key) {
        if self.mode != GameMode::Replay {
            return;
        }

        if key == Key::Escape {
            self.should_quit = true;
            return;
        }

        let selected = key.winning_score().map(WinningScore::new);
        if let Some(Ok(winning_score)) = selected {
            self.reset_game(winning_score);
        }
    }

    /// Advance the match by one tick
    pub fn update(&mut self, held: HeldKeys) {
        // Clear events at start of tick
        self.events.clear();

        if self.mode != GameMode::Playing {
            return;
        }

        // 1. Move ball, bouncing off top/bottom walls
        if self.ball.advance(&self.arena) {
            self.events.wall_bounce = true;
        }

        // 2. Paddle collisions
        check_paddle_collisions(&mut self.ball, &self.player, &self.ai, &mut self.events);

        // 3. Scoring (ball touched a side edge)
        check_scoring(
            &mut self.ball,
            &self.arena,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );

        // 4. AI paddle follows the ball
        self.ai.auto_track(&self.ball, self.config.ai_speed, &self.arena);

        // 5. Player paddle follows held keys
        let delta = held.dir() as f32 * self.config.paddle_speed;
        self.player.move_by(delta, &self.arena);

        // 6. Check for a winner
        if let Some(winner) = self.score.has_winner(self.winning_score.get()) {
            info!(%winner, player = self.score.player, ai = self.score.ai, "match won");
            self.winner = Some(winner);
            self.mode = GameMode::Replay;
        }
    }

    /// Draw the current frame
    pub fn render(&self, canvas: &mut impl Canvas) {
        let width = self.arena.width;
        let height = self.arena.height;

        // Common elements drawn in all states
        canvas.fill_rect(self.player.rect(), Color::WHITE);
        canvas.fill_rect(self.ai.rect(), Color::WHITE);
        canvas.fill_ellipse(self.ball.rect(), Color::WHITE);
        canvas.draw_line(
            Vec2::new(width / 2.0, 0.0),
            Vec2::new(width / 2.0, height),
            Color::WHITE,
        );

        match self.mode {
            GameMode::Playing => {
                canvas.draw_text(
                    &self.score.player.to_string(),
                    Vec2::new(width / 4.0, SCORE_Y),
                    TextStyle::Score,
                    Anchor::TopLeft,
                    Color::WHITE,
                );
                canvas.draw_text(
                    &self.score.ai.to_string(),
                    Vec2::new(width * 3.0 / 4.0, SCORE_Y),
                    TextStyle::Score,
                    Anchor::TopLeft,
                    Color::WHITE,
                );
            }
            GameMode::Replay => {
                if let Some(winner) = self.winner {
                    canvas.draw_text(
                        &format!("{winner} Wins!"),
                        Vec2::new(width / 2.0, height / 2.0 + BANNER_OFFSET_Y),
                        TextStyle::Banner,
                        Anchor::Center,
                        Color::WHITE,
                    );
                }

                for (i, option) in MENU_OPTIONS.iter().enumerate() {
                    canvas.draw_text(
                        option,
                        Vec2::new(width / 2.0, height / 2.0 + i as f32 * MENU_LINE_SPACING),
                        TextStyle::Menu,
                        Anchor::Center,
                        Color::WHITE,
                    );
                }
            }
        }
    }

    /// Ask the main loop to exit (window closed)
    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn winning_score(&self) -> WinningScore {
        self.winning_score
    }

    /// Events raised by the most recent [`update`](Self::update)
    pub fn events(&self) -> Events {
        self.events
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn player(&self) -> &Paddle {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Paddle {
        &mut self.player
    }

    pub fn ai(&self) -> &Paddle {
        &self.ai
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> GameEngine {
        GameEngine::new(Config::new(), GameRng::new(12345))
    }

    fn winning(n: u8) -> WinningScore {
        WinningScore::new(n).unwrap()
    }

    /// Put the ball just past the right edge so the next tick scores for the player
    fn serve_into_ai_goal(engine: &mut GameEngine) {
        let ball = engine.ball_mut();
        ball.pos = Vec2::new(796.0, 100.0);
        ball.vel = Vec2::new(5.0, 3.0);
    }

    #[test]
    fn test_new_engine_state() {
        let engine = engine();
        assert_eq!(engine.mode(), GameMode::Playing);
        assert_eq!(engine.score(), Score::new());
        assert_eq!(engine.winning_score().get(), 5);
        assert_eq!(engine.winner(), None);
        assert!(!engine.should_quit());
        assert_eq!(engine.player().pos, Vec2::new(10.0, 250.0));
        assert_eq!(engine.ai().pos, Vec2::new(780.0, 250.0));
        assert_eq!(engine.ball().pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_ball_at_corner_scores_for_ai() {
        let mut engine = engine();
        {
            let ball = engine.ball_mut();
            ball.pos = Vec2::new(0.0, 0.0);
            ball.vel = Vec2::new(-5.0, -3.0);
        }

        engine.update(HeldKeys::new());

        assert_eq!(engine.score(), Score { player: 0, ai: 1 });
        assert_eq!(engine.ball().pos, engine.ball().spawn);
        assert_eq!(engine.ball().vel.x, 5.0, "Serve flips horizontal direction");
        assert!(engine.events().scored);
        assert!(engine.events().wall_bounce);
    }

    #[test]
    fn test_player_paddle_reflects_ball() {
        let mut engine = engine();
        {
            let ball = engine.ball_mut();
            ball.pos = Vec2::new(22.0, 290.0);
            ball.vel = Vec2::new(-5.0, 3.0);
        }

        engine.update(HeldKeys::new());

        assert_eq!(engine.ball().vel.x, 5.0);
        assert_eq!(engine.ball().pos.x, engine.player().rect().right());
        assert_eq!(engine.score(), Score::new(), "No score change");
        assert!(engine.events().paddle_hit);
    }

    #[test]
    fn test_held_keys_move_player_paddle() {
        let mut engine = engine();
        engine.update(HeldKeys {
            up: true,
            down: false,
        });
        assert_eq!(engine.player().pos.y, 240.0);

        engine.update(HeldKeys {
            up: false,
            down: true,
        });
        assert_eq!(engine.player().pos.y, 250.0);
    }

    #[test]
    fn test_win_transitions_to_replay() {
        let mut engine = engine();
        engine.reset_game(winning(3));

        for _ in 0..3 {
            serve_into_ai_goal(&mut engine);
            engine.update(HeldKeys::new());
        }

        assert_eq!(engine.score().player, 3);
        assert_eq!(engine.mode(), GameMode::Replay);
        assert_eq!(engine.winner(), Some(Side::Player));
    }

    #[test]
    fn test_update_is_frozen_in_replay() {
        let mut engine = engine();
        engine.reset_game(winning(3));
        for _ in 0..3 {
            serve_into_ai_goal(&mut engine);
            engine.update(HeldKeys::new());
        }
        serve_into_ai_goal(&mut engine);
        engine.update(HeldKeys {
            up: true,
            down: false,
        });

        assert_eq!(engine.score().player, 3, "No scoring after the match ended");
        assert_eq!(engine.ball().pos, Vec2::new(796.0, 100.0), "Ball not advanced");
        assert_eq!(engine.player().pos.y, 250.0, "Paddle not moved");
    }

    #[test]
    fn test_replay_menu_restarts_match() {
        let mut engine = engine();
        engine.reset_game(winning(3));
        for _ in 0..3 {
            serve_into_ai_goal(&mut engine);
            engine.update(HeldKeys {
                up: true,
                down: false,
            });
        }
        assert_eq!(engine.mode(), GameMode::Replay);

        engine.process_input(Key::Digit7);

        assert_eq!(engine.mode(), GameMode::Playing);
        assert_eq!(engine.winning_score().get(), 7);
        assert_eq!(engine.score(), Score::new());
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.player().pos.y, 250.0);
        assert_eq!(engine.ai().pos.y, 250.0);
        assert_eq!(engine.ball().pos, engine.ball().spawn);
    }

    #[test]
    fn test_menu_keys_ignored_while_playing() {
        let mut engine = engine();
        engine.process_input(Key::Digit3);
        engine.process_input(Key::Escape);

        assert_eq!(engine.winning_score().get(), 5);
        assert!(!engine.should_quit());
    }

    #[test]
    fn test_escape_in_replay_requests_quit() {
        let mut engine = engine();
        engine.reset_game(winning(3));
        for _ in 0..3 {
            serve_into_ai_goal(&mut engine);
            engine.update(HeldKeys::new());
        }

        engine.process_input(Key::Up);
        assert!(!engine.should_quit(), "Movement keys do nothing in the menu");

        engine.process_input(Key::Escape);
        assert!(engine.should_quit());
        assert_eq!(engine.mode(), GameMode::Replay);
    }

    #[test]
    fn test_request_quit() {
        let mut engine = engine();
        engine.request_quit();
        assert!(engine.should_quit());
    }

    #[test]
    fn test_events_cleared_once_match_ends() {
        let mut engine = engine();
        engine.reset_game(winning(3));
        for _ in 0..3 {
            serve_into_ai_goal(&mut engine);
            engine.update(HeldKeys::new());
        }
        assert!(engine.events().scored, "Winning point raises an event");

        engine.update(HeldKeys::new());
        assert!(engine.events().is_empty(), "Menu frames stay silent");
    }
}
