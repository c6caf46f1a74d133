//! Deckflow is a deterministic slide-deck navigation engine.
//!
//! The engine owns the ordered slide list, the current index and all derived
//! UI state, and turns five raw input channels into serialized transitions:
//!
//! 1. **Recognize**: touch displacement and wheel deltas become
//!    [`InputEvent`]s (sub-threshold motion is noise and dropped)
//! 2. **Normalize**: `InputEvent -> Command` via a pure mapping table, with a
//!    wheel cooldown latch so one physical gesture fires one transition
//! 3. **Navigate**: [`DeckController`] serializes transitions behind an
//!    explicit `Idle | Transitioning` phase and emits a deterministic
//!    [`DeckEvent`] sequence per transition
//! 4. **Animate**: slide entry effects (counters, chart reveals) run as value
//!    objects on one shared [`Scheduler`], polled once per frame
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: the engine never reads a wall clock; the
//!   caller supplies time as a [`FrameIndex`] at a configured [`Fps`].
//! - **Presentation is a projection**: surfaces consume the event stream and
//!   [`DeckSnapshot`]; engine state is never stored in presentation
//!   attributes.
//!
//! A deck is described by a JSON [`DeckManifest`]; [`DeckSession`] is the
//! usual entry point, wiring normalizer and controller together.
#![forbid(unsafe_code)]

mod animation;
mod deck;
mod foundation;
mod input;

pub use animation::counter::{display_value, format_display, format_grouped};
pub use animation::ease::Ease;
pub use animation::scheduler::{AnimEvent, AnimId, EffectBinding, ScheduledAnim, Scheduler};
pub use deck::controller::{DeckController, DeckEvent, DeckSnapshot, Phase};
pub use deck::manifest::{DeckManifest, DeckSettings, EffectSpec, SlideSpec};
pub use deck::session::DeckSession;
pub use foundation::core::{Fps, FrameIndex, Point};
pub use foundation::error::{DeckError, DeckResult};
pub use input::event::{ClickTarget, Command, InputEvent, JumpTarget, Key};
pub use input::normalize::{InputNormalizer, NormalizerConfig};
