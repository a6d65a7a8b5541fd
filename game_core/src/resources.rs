use crate::Params;
use std::fmt;

/// One side of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Ai,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("Player"),
            Side::Ai => f.write_str("AI"),
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8, // Left paddle
    pub ai: u8,     // Right paddle
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player += 1;
    }

    pub fn increment_ai(&mut self) {
        self.ai += 1;
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.player >= win_score {
            Some(Side::Player)
        } else if self.ai >= win_score {
            Some(Side::Ai)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl fmt::Debug for GameRng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GameRng")
    }
}

/// Events that occurred during the last update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub paddle_hit: bool,
    pub wall_bounce: bool,
    pub scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.paddle_hit = false;
        self.wall_bounce = false;
        self.scored = false;
    }

    pub fn is_empty(&self) -> bool {
        !(self.paddle_hit || self.wall_bounce || self.scored)
    }
}

/// Converts wall-clock frame time into a whole number of simulation ticks
#[derive(Debug, Clone, Copy)]
pub struct FixedTimestep {
    step: f32,
    max_dt: f32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(step: f32, max_dt: f32) -> Self {
        Self {
            step,
            max_dt,
            accumulator: 0.0,
        }
    }

    /// Add `dt` seconds and return how many ticks are due
    pub fn advance(&mut self, dt: f32) -> u32 {
        // Clamp dt to prevent large jumps after stalls
        self.accumulator += dt.clamp(0.0, self.max_dt);

        let mut ticks = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            ticks += 1;
        }
        ticks
    }

    pub fn step(&self) -> f32 {
        self.step
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(Params::FIXED_DT, Params::MAX_DT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_player() {
        let mut score = Score::new();
        assert_eq!(score.player, 0);
        score.increment_player();
        assert_eq!(score.player, 1);
        score.increment_player();
        assert_eq!(score.player, 2);
    }

    #[test]
    fn test_score_increment_ai() {
        let mut score = Score::new();
        assert_eq!(score.ai, 0);
        score.increment_ai();
        assert_eq!(score.ai, 1);
    }

    #[test]
    fn test_score_has_winner() {
        let mut score = Score::new();
        for _ in 0..5 {
            score.increment_ai();
        }
        assert_eq!(score.has_winner(5), Some(Side::Ai));
        assert_eq!(score.has_winner(7), None, "No winner below threshold");
    }

    #[test]
    fn test_score_player_checked_first() {
        let score = Score { player: 3, ai: 3 };
        assert_eq!(score.has_winner(3), Some(Side::Player));
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Player.to_string(), "Player");
        assert_eq!(Side::Ai.to_string(), "AI");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.paddle_hit = true;
        events.wall_bounce = true;
        events.scored = true;
        assert!(!events.is_empty());

        events.clear();

        assert!(events.is_empty());
    }

    #[test]
    fn test_fixed_timestep_accumulates_partial_frames() {
        let mut timestep = FixedTimestep::new(0.25, 1.0);
        assert_eq!(timestep.advance(0.125), 0);
        assert_eq!(timestep.advance(0.125), 1);
        assert_eq!(timestep.advance(0.5), 2);
    }

    #[test]
    fn test_fixed_timestep_clamps_large_jumps() {
        let mut timestep = FixedTimestep::new(0.25, 0.5);
        assert_eq!(timestep.advance(10.0), 2, "Stall should not flood ticks");
        assert_eq!(timestep.advance(-1.0), 0);
    }

    #[test]
    fn test_rng_is_deterministic() {
        use rand::Rng;
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        assert_eq!(a.0.gen::<u64>(), b.0.gen::<u64>());
    }
}
