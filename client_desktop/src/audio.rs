//! Sound effects
//!
//! Clips are read into memory once at startup. Any clip that fails to load,
//! or a missing output device, degrades to silence.

use game_core::Events;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Source};
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Sound cue raised by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    PaddleHit,
    WallBounce,
    Score,
}

impl Cue {
    pub const ALL: [Cue; 3] = [Cue::PaddleHit, Cue::WallBounce, Cue::Score];

    pub fn file_name(self) -> &'static str {
        match self {
            Cue::PaddleHit => "paddle_hit.wav",
            Cue::WallBounce => "wall_bounce.wav",
            Cue::Score => "score.wav",
        }
    }
}

/// Cues raised by one engine tick, in playback order
pub fn cues(events: Events) -> Vec<Cue> {
    let mut cues = Vec::new();
    if events.paddle_hit {
        cues.push(Cue::PaddleHit);
    }
    if events.wall_bounce {
        cues.push(Cue::WallBounce);
    }
    if events.scored {
        cues.push(Cue::Score);
    }
    cues
}

/// Encoded clip bytes, or nothing for a silent placeholder
#[derive(Debug, Clone, Default)]
struct Sound(Option<Arc<[u8]>>);

impl Sound {
    fn load(path: &Path) -> Self {
        let bytes: Arc<[u8]> = match std::fs::read(path) {
            Ok(bytes) => bytes.into(),
            Err(err) => {
                warn!(path = %path.display(), %err, "sound not loaded, using silence");
                return Self::default();
            }
        };

        // Decode once up front so playback never sees a broken clip
        if let Err(err) = Decoder::new(Cursor::new(bytes.clone())) {
            warn!(path = %path.display(), %err, "sound not decodable, using silence");
            return Self::default();
        }

        debug!(path = %path.display(), "sound loaded");
        Self(Some(bytes))
    }

    fn is_silent(&self) -> bool {
        self.0.is_none()
    }
}

pub struct SoundBank {
    // The stream must outlive every handle call
    output: Option<(OutputStream, OutputStreamHandle)>,
    paddle_hit: Sound,
    wall_bounce: Sound,
    score: Sound,
}

impl SoundBank {
    /// Load every cue from `dir` and open the default output device
    pub fn load(dir: &Path) -> Self {
        let output = match OutputStream::try_default() {
            Ok(output) => Some(output),
            Err(err) => {
                warn!(%err, "no audio output device, sound disabled");
                None
            }
        };

        let bank = Self {
            output,
            paddle_hit: Sound::load(&dir.join(Cue::PaddleHit.file_name())),
            wall_bounce: Sound::load(&dir.join(Cue::WallBounce.file_name())),
            score: Sound::load(&dir.join(Cue::Score.file_name())),
        };

        let loaded = Cue::ALL
            .iter()
            .filter(|cue| !bank.sound(**cue).is_silent())
            .count();
        info!(dir = %dir.display(), loaded, "sound bank ready");
        bank
    }

    /// A bank that never makes a sound
    pub fn silent() -> Self {
        Self {
            output: None,
            paddle_hit: Sound::default(),
            wall_bounce: Sound::default(),
            score: Sound::default(),
        }
    }

    fn sound(&self, cue: Cue) -> &Sound {
        match cue {
            Cue::PaddleHit => &self.paddle_hit,
            Cue::WallBounce => &self.wall_bounce,
            Cue::Score => &self.score,
        }
    }

    /// Fire and forget
    pub fn play(&self, cue: Cue) {
        let Some((_, handle)) = &self.output else {
            return;
        };
        let Some(bytes) = &self.sound(cue).0 else {
            return;
        };

        match Decoder::new(Cursor::new(bytes.clone())) {
            Ok(source) => {
                if let Err(err) = handle.play_raw(source.convert_samples()) {
                    debug!(?cue, %err, "sound playback failed");
                }
            }
            Err(err) => debug!(?cue, %err, "sound decode failed"),
        }
    }

    pub fn play_events(&self, events: Events) {
        for cue in cues(events) {
            self.play(cue);
        }
    }
}
