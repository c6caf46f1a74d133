use crate::foundation::error::{DeckError, DeckResult};

pub use kurbo::Point;

/// Discrete engine time. All suspension (settle delays, effect durations,
/// wheel cooldowns) is expressed in frames at a configured [`Fps`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// The frame `frames` ticks after this one.
    pub fn offset(self, frames: u64) -> Self {
        Self(self.0.saturating_add(frames))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> DeckResult<Self> {
        if den == 0 {
            return Err(DeckError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(DeckError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) / self.as_f64()
    }

    /// Nearest whole frame count for a millisecond duration.
    pub fn ms_to_frames(self, ms: u64) -> u64 {
        ((ms as f64 / 1000.0) * self.as_f64()).round() as u64
    }
}
