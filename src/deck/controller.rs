use crate::animation::counter;
use crate::animation::ease::Ease;
use crate::animation::scheduler::{AnimEvent, EffectBinding, ScheduledAnim, Scheduler};
use crate::deck::manifest::{DeckManifest, EffectSpec, SlideSpec};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{DeckError, DeckResult};
use crate::input::event::{Command, JumpTarget};

/// Transition phase of the deck: the single serialization latch.
///
/// This enum is the source of truth; presentation state is a projection of
/// it, never the other way around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning { until: FrameIndex },
}

/// Read-only projection of deck state for the render surface.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DeckSnapshot {
    pub current: usize,
    pub count: usize,
    pub transitioning: bool,
    /// `(current + 1) / count`, in `(0, 1]`.
    pub progress: f64,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Everything the render surface needs to mirror a transition or effect.
///
/// Transition events are emitted in a fixed order (exit, enter, progress,
/// indicator, buttons) so two surfaces replaying the same deck agree.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum DeckEvent {
    SlideExited { index: usize },
    SlideEntered { index: usize },
    Progress { fraction: f64 },
    IndicatorActivated { index: usize },
    NavButtons { prev_enabled: bool, next_enabled: bool },
    /// The settle delay elapsed; the navigation latch is open again.
    TransitionSettled { index: usize },
    CounterTick { slide: usize, key: String, value: u64, text: String },
    CounterDone { slide: usize, key: String, value: u64, text: String },
    ChartBarRevealed { slide: usize, bar: usize },
}

/// Effect durations resolved from settings to frames.
#[derive(Clone, Copy, Debug)]
struct EffectTiming {
    counter_duration: u64,
    chart_stagger: u64,
    chart_reveal: u64,
}

/// Owns the slide list, the current index and the transition latch;
/// serializes navigation and drives entry effects on the shared scheduler.
pub struct DeckController {
    slides: Vec<SlideSpec>,
    fps: Fps,
    current: usize,
    phase: Phase,
    entered: Vec<bool>,
    scheduler: Scheduler,
    settle_delay: u64,
    replay_on_reenter: bool,
    timing: EffectTiming,
}

impl DeckController {
    /// Build a controller from a validated manifest. Initial state: slide 0,
    /// idle; call [`DeckController::begin`] to emit the initial UI sync.
    pub fn new(manifest: &DeckManifest) -> DeckResult<Self> {
        manifest.validate()?;
        let fps = manifest.fps;
        let s = &manifest.settings;
        Ok(Self {
            slides: manifest.slides.clone(),
            fps,
            current: 0,
            phase: Phase::Idle,
            entered: vec![false; manifest.slides.len()],
            scheduler: Scheduler::new(),
            // At least one frame, so the latch is observable at any rate.
            settle_delay: fps.ms_to_frames(s.settle_delay_ms).max(1),
            replay_on_reenter: s.replay_on_reenter,
            timing: EffectTiming {
                counter_duration: fps.ms_to_frames(s.counter_duration_ms).max(1),
                chart_stagger: fps.ms_to_frames(s.chart_stagger_ms),
                chart_reveal: fps.ms_to_frames(s.chart_reveal_ms).max(1),
            },
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    pub fn progress(&self) -> f64 {
        (self.current + 1) as f64 / self.slides.len() as f64
    }

    pub fn snapshot(&self) -> DeckSnapshot {
        DeckSnapshot {
            current: self.current,
            count: self.slides.len(),
            transitioning: self.is_transitioning(),
            progress: self.progress(),
            prev_enabled: self.current > 0,
            next_enabled: self.current + 1 < self.slides.len(),
        }
    }

    /// Initial UI sync for the starting slide: enter events plus its entry
    /// effects, without holding the transition latch. Call once.
    pub fn begin(&mut self, now: FrameIndex) -> Vec<DeckEvent> {
        let index = self.current;
        let events = vec![
            DeckEvent::SlideEntered { index },
            DeckEvent::Progress {
                fraction: self.progress(),
            },
            DeckEvent::IndicatorActivated { index },
            DeckEvent::NavButtons {
                prev_enabled: index > 0,
                next_enabled: index + 1 < self.slides.len(),
            },
        ];
        self.enter_effects(index, now);
        events
    }

    /// Dispatch a normalized command.
    pub fn apply(&mut self, command: Command, now: FrameIndex) -> DeckResult<Vec<DeckEvent>> {
        match command {
            Command::Advance => self.advance(now),
            Command::Retreat => self.retreat(now),
            Command::JumpTo(target) => self.jump(target, now),
        }
    }

    /// `go_to(current + 1)`; a deliberate no-op at the last slide.
    pub fn advance(&mut self, now: FrameIndex) -> DeckResult<Vec<DeckEvent>> {
        if self.current + 1 >= self.slides.len() {
            return Ok(Vec::new());
        }
        self.go_to(self.current + 1, now)
    }

    /// `go_to(current - 1)`; a deliberate no-op at the first slide.
    pub fn retreat(&mut self, now: FrameIndex) -> DeckResult<Vec<DeckEvent>> {
        if self.current == 0 {
            return Ok(Vec::new());
        }
        self.go_to(self.current - 1, now)
    }

    /// Resolve a jump destination and navigate to it.
    pub fn jump(&mut self, target: JumpTarget, now: FrameIndex) -> DeckResult<Vec<DeckEvent>> {
        let index = match target {
            JumpTarget::First => 0,
            JumpTarget::Last => self.slides.len() - 1,
            JumpTarget::Index(i) => i,
        };
        self.go_to(index, now)
    }

    /// Navigate to `index`.
    ///
    /// Same index is a no-op; an index outside `[0, count)` is
    /// [`DeckError::OutOfRange`]. A call arriving while a transition is in
    /// flight is dropped, not queued: at most one transition is ever live.
    pub fn go_to(&mut self, index: usize, now: FrameIndex) -> DeckResult<Vec<DeckEvent>> {
        if index >= self.slides.len() {
            return Err(DeckError::OutOfRange {
                index,
                count: self.slides.len(),
            });
        }
        if self.is_transitioning() {
            tracing::debug!(index, frame = now.0, "navigation dropped while transitioning");
            return Ok(Vec::new());
        }
        if index == self.current {
            return Ok(Vec::new());
        }

        let from = self.current;
        self.current = index;
        self.phase = Phase::Transitioning {
            until: now.offset(self.settle_delay),
        };

        let events = vec![
            DeckEvent::SlideExited { index: from },
            DeckEvent::SlideEntered { index },
            DeckEvent::Progress {
                fraction: self.progress(),
            },
            DeckEvent::IndicatorActivated { index },
            DeckEvent::NavButtons {
                prev_enabled: index > 0,
                next_enabled: index + 1 < self.slides.len(),
            },
        ];
        self.enter_effects(index, now);
        Ok(events)
    }

    /// Advance one frame: settle an elapsed transition and relay effect
    /// animation events. Settling only reopens the navigation latch; effects
    /// keep running on the scheduler until they complete.
    pub fn tick(&mut self, now: FrameIndex) -> Vec<DeckEvent> {
        let mut events = Vec::new();
        if let Phase::Transitioning { until } = self.phase {
            if now >= until {
                self.phase = Phase::Idle;
                events.push(DeckEvent::TransitionSettled {
                    index: self.current,
                });
            }
        }
        for anim in self.scheduler.tick(now) {
            if let Some(event) = effect_event(anim) {
                events.push(event);
            }
        }
        events
    }

    fn enter_effects(&mut self, index: usize, now: FrameIndex) {
        if self.entered[index] && !self.replay_on_reenter {
            return;
        }
        self.entered[index] = true;

        for effect in &self.slides[index].effects {
            match effect {
                EffectSpec::Counter {
                    key,
                    target,
                    suffix,
                    duration_ms,
                    ease,
                } => {
                    let duration = match duration_ms {
                        Some(ms) => self.fps.ms_to_frames(*ms).max(1),
                        None => self.timing.counter_duration,
                    };
                    self.scheduler.schedule(ScheduledAnim {
                        binding: EffectBinding::Counter {
                            slide: index,
                            key: key.clone(),
                            target: *target,
                            suffix: suffix.clone(),
                        },
                        start: now,
                        duration_frames: duration,
                        ease: ease.unwrap_or_default(),
                        from: 0.0,
                        to: *target as f64,
                    });
                }
                EffectSpec::ChartBars { bars, stagger_ms } => {
                    let stagger = match stagger_ms {
                        Some(ms) => self.fps.ms_to_frames(*ms),
                        None => self.timing.chart_stagger,
                    };
                    for bar in 0..*bars {
                        self.scheduler.schedule(ScheduledAnim {
                            binding: EffectBinding::ChartBar { slide: index, bar },
                            start: now.offset(bar as u64 * stagger),
                            duration_frames: self.timing.chart_reveal,
                            ease: Ease::OutCubic,
                            from: 0.0,
                            to: 1.0,
                        });
                    }
                }
            }
        }
    }
}

/// Project a scheduler event into the deck event stream.
///
/// Chart bars only surface once fully revealed; counters surface every
/// in-flight sample plus a completion carrying the exact target.
fn effect_event(event: AnimEvent) -> Option<DeckEvent> {
    match event {
        AnimEvent::Tick {
            binding: EffectBinding::Counter { slide, key, .. },
            value,
            ..
        } => {
            let value = counter::display_value(value);
            Some(DeckEvent::CounterTick {
                slide,
                key,
                value,
                text: counter::format_grouped(value),
            })
        }
        AnimEvent::Complete {
            binding:
                EffectBinding::Counter {
                    slide,
                    key,
                    target,
                    suffix,
                },
            ..
        } => Some(DeckEvent::CounterDone {
            slide,
            key,
            value: target,
            text: counter::format_display(target, suffix.as_deref(), true),
        }),
        AnimEvent::Tick {
            binding: EffectBinding::ChartBar { .. },
            ..
        } => None,
        AnimEvent::Complete {
            binding: EffectBinding::ChartBar { slide, bar },
            ..
        } => Some(DeckEvent::ChartBarRevealed { slide, bar }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/controller.rs"]
mod tests;
