use kurbo::Point;

use crate::deck::controller::{DeckController, DeckEvent, DeckSnapshot};
use crate::deck::manifest::DeckManifest;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::DeckResult;
use crate::input::event::InputEvent;
use crate::input::normalize::{InputNormalizer, NormalizerConfig};

/// Session facade over one deck.
///
/// Front-loads manifest validation and millisecond-to-frame resolution, then
/// wires the input normalizer to the controller. All calls happen on the one
/// logical thread that owns the session; time is supplied by the caller as a
/// [`FrameIndex`].
pub struct DeckSession {
    controller: DeckController,
    normalizer: InputNormalizer,
}

impl DeckSession {
    /// Construct a session. Fails on an invalid manifest, never afterwards.
    pub fn new(manifest: &DeckManifest) -> DeckResult<Self> {
        let controller = DeckController::new(manifest)?;
        let s = &manifest.settings;
        let normalizer = InputNormalizer::new(NormalizerConfig {
            swipe_threshold_px: s.swipe_threshold_px,
            wheel_threshold: s.wheel_threshold,
            wheel_cooldown_frames: manifest.fps.ms_to_frames(s.wheel_cooldown_ms),
        });
        Ok(Self {
            controller,
            normalizer,
        })
    }

    /// Emit the initial UI sync for the starting slide. Call once.
    pub fn begin(&mut self, now: FrameIndex) -> Vec<DeckEvent> {
        self.controller.begin(now)
    }

    /// Feed one surface input event through normalization and the controller.
    #[tracing::instrument(skip(self))]
    pub fn input(&mut self, event: InputEvent, now: FrameIndex) -> DeckResult<Vec<DeckEvent>> {
        let Some(command) = self.normalizer.normalize(event, now) else {
            return Ok(Vec::new());
        };
        self.controller.apply(command, now)
    }

    /// Feed a raw touch gesture; sub-threshold motion does nothing.
    pub fn touch(
        &mut self,
        start: Point,
        end: Point,
        now: FrameIndex,
    ) -> DeckResult<Vec<DeckEvent>> {
        match self.normalizer.swipe_between(start, end) {
            Some(event) => self.input(event, now),
            None => Ok(Vec::new()),
        }
    }

    /// Feed a raw wheel delta; sub-threshold deltas do nothing.
    pub fn wheel(&mut self, delta: f64, now: FrameIndex) -> DeckResult<Vec<DeckEvent>> {
        match self.normalizer.wheel(delta) {
            Some(event) => self.input(event, now),
            None => Ok(Vec::new()),
        }
    }

    /// Advance one frame: settle transitions, relay effect events.
    pub fn tick(&mut self, now: FrameIndex) -> Vec<DeckEvent> {
        self.controller.tick(now)
    }

    pub fn snapshot(&self) -> DeckSnapshot {
        self.controller.snapshot()
    }
}
