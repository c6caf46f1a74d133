use kurbo::Point;

use crate::foundation::core::FrameIndex;
use crate::input::event::{Command, InputEvent};

/// Thresholds and debounce windows for the raw input channels.
#[derive(Clone, Copy, Debug)]
pub struct NormalizerConfig {
    /// Minimum horizontal touch displacement for a swipe, in pixels.
    pub swipe_threshold_px: f64,
    /// Minimum absolute wheel delta for a scroll step.
    pub wheel_threshold: f64,
    /// Frames after a delivered wheel event during which further wheel input
    /// is dropped, so one physical gesture fires at most one transition.
    pub wheel_cooldown_frames: u64,
}

/// Turns raw channel samples into [`InputEvent`]s and events into
/// [`Command`]s, owning the wheel cooldown latch.
#[derive(Debug)]
pub struct InputNormalizer {
    config: NormalizerConfig,
    wheel_cooldown_until: Option<FrameIndex>,
}

impl InputNormalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            config,
            wheel_cooldown_until: None,
        }
    }

    /// Recognize a swipe from touch start/end coordinates. Sub-threshold
    /// horizontal displacement is noise and yields `None`.
    pub fn swipe_between(&self, start: Point, end: Point) -> Option<InputEvent> {
        let dx = end.x - start.x;
        if dx.abs() <= self.config.swipe_threshold_px {
            return None;
        }
        Some(if dx < 0.0 {
            InputEvent::SwipeLeft
        } else {
            InputEvent::SwipeRight
        })
    }

    /// Recognize a scroll step from a wheel delta. Positive delta scrolls
    /// down; sub-threshold deltas yield `None`.
    pub fn wheel(&self, delta: f64) -> Option<InputEvent> {
        if delta.abs() <= self.config.wheel_threshold {
            return None;
        }
        Some(if delta > 0.0 {
            InputEvent::WheelDown
        } else {
            InputEvent::WheelUp
        })
    }

    /// Map an event to its command. Wheel events inside the cooldown window
    /// are dropped; a delivered one re-arms the window.
    pub fn normalize(&mut self, event: InputEvent, now: FrameIndex) -> Option<Command> {
        if event.is_wheel() {
            if let Some(until) = self.wheel_cooldown_until {
                if now < until {
                    tracing::debug!(?event, frame = now.0, "wheel input dropped inside cooldown");
                    return None;
                }
            }
            self.wheel_cooldown_until = Some(now.offset(self.config.wheel_cooldown_frames));
        }
        Some(Command::from_event(event))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/normalize.rs"]
mod tests;
