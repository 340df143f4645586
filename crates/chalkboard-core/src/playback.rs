//! Playback position and transport state as reported by the external player.

/// Read-only view of the player's timer.
pub trait PlaybackClock {
    fn position_ms(&self) -> Option<f64>;
    fn is_playing(&self) -> bool;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayerStatus {
    #[default]
    Stopped,
    Playing,
    Paused,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaybackState {
    pub position_ms: Option<f64>,
    pub status: PlayerStatus,
}

impl PlaybackState {
    pub fn play(&mut self) {
        self.status = PlayerStatus::Playing;
    }

    pub fn pause(&mut self) {
        self.status = PlayerStatus::Paused;
    }

    pub fn stop(&mut self) {
        self.status = PlayerStatus::Stopped;
        self.position_ms = None;
    }

    pub fn set_position(&mut self, position_ms: f64) {
        self.position_ms = Some(position_ms);
    }
}

impl PlaybackClock for PlaybackState {
    fn position_ms(&self) -> Option<f64> {
        self.position_ms
    }

    fn is_playing(&self) -> bool {
        self.status == PlayerStatus::Playing
    }
}

/// Rate limiter for high-frequency time updates (position read-outs).
#[derive(Clone, Debug)]
pub struct TimeUpdateThrottle {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl TimeUpdateThrottle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// True when at least one interval elapsed since the last emitted update.
    /// A backwards jump (seek) always emits.
    pub fn should_emit(&mut self, position_ms: f64) -> bool {
        let emit = match self.last_ms {
            None => true,
            Some(last) => position_ms < last || position_ms - last >= self.interval_ms,
        };
        if emit {
            self.last_ms = Some(position_ms);
        }
        emit
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
