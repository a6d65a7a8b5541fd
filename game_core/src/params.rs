/// Game tuning parameters for Pong
///
/// Distances are in screen pixels, speeds in pixels per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // Gap between a paddle and its side edge
    pub const PADDLE_SPEED: f32 = 10.0;
    pub const AI_SPEED: f32 = 5.0;

    // Ball
    pub const BALL_SIZE: f32 = 7.0;
    pub const BALL_SPEED_X: f32 = 5.0;
    pub const BALL_SPEED_Y: f32 = 3.0;

    // Score
    pub const WIN_SCORE_OPTIONS: [u8; 3] = [3, 5, 7];
    pub const WIN_SCORE: u8 = 5;

    // Loop
    pub const TICKS_PER_SECOND: u32 = 60;
    pub const FIXED_DT: f32 = 1.0 / Self::TICKS_PER_SECOND as f32;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
