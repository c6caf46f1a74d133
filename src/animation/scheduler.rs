use crate::animation::ease::Ease;
use crate::foundation::core::FrameIndex;

/// Identifies one scheduled animation for the lifetime of the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct AnimId(pub u64);

/// What a scheduled animation drives on the render surface.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum EffectBinding {
    /// A numeric display counting from zero up to `target`.
    Counter {
        slide: usize,
        key: String,
        target: u64,
        suffix: Option<String>,
    },
    /// One bar of a staggered chart reveal.
    ChartBar { slide: usize, bar: usize },
}

/// A single animation as a value object. The scheduler polls it once per
/// frame; it never owns a callback loop of its own.
#[derive(Clone, Debug)]
pub struct ScheduledAnim {
    pub binding: EffectBinding,
    /// First frame the animation is live. A future `start` keeps it silent,
    /// which is how staggered reveals are expressed.
    pub start: FrameIndex,
    pub duration_frames: u64,
    pub ease: Ease,
    pub from: f64,
    pub to: f64,
}

/// Emitted by [`Scheduler::tick`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum AnimEvent {
    /// An in-flight sample for one animation.
    Tick {
        id: AnimId,
        binding: EffectBinding,
        value: f64,
    },
    /// The animation finished this frame; `value` is exactly the target.
    Complete {
        id: AnimId,
        binding: EffectBinding,
        value: f64,
    },
}

/// Single shared scheduler advancing every active effect animation per tick.
///
/// Once started, an animation runs to completion; there is no cancel surface.
#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    active: Vec<(AnimId, ScheduledAnim)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    pub fn schedule(&mut self, anim: ScheduledAnim) -> AnimId {
        let id = AnimId(self.next_id);
        self.next_id += 1;
        self.active.push((id, anim));
        id
    }

    /// Advance all live animations to `now`, in schedule order.
    ///
    /// Completion snaps the emitted value to the exact animation target; a
    /// zero-duration animation completes on its first live frame.
    pub fn tick(&mut self, now: FrameIndex) -> Vec<AnimEvent> {
        let mut events = Vec::new();
        let mut still = Vec::with_capacity(self.active.len());

        for (id, anim) in self.active.drain(..) {
            if now < anim.start {
                still.push((id, anim));
                continue;
            }

            let elapsed = now.0 - anim.start.0;
            if anim.duration_frames == 0 || elapsed >= anim.duration_frames {
                events.push(AnimEvent::Complete {
                    id,
                    binding: anim.binding,
                    value: anim.to,
                });
            } else {
                let t = elapsed as f64 / anim.duration_frames as f64;
                let value = anim.from + (anim.to - anim.from) * anim.ease.apply(t);
                events.push(AnimEvent::Tick {
                    id,
                    binding: anim.binding.clone(),
                    value,
                });
                still.push((id, anim));
            }
        }

        self.active = still;
        events
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scheduler.rs"]
mod tests;
