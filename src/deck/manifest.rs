use std::collections::HashSet;
use std::path::Path;

use crate::animation::ease::Ease;
use crate::foundation::core::Fps;
use crate::foundation::error::{DeckError, DeckResult};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A complete deck document.
///
/// A manifest is a pure data model that can be built programmatically or
/// loaded from JSON via [`DeckManifest::from_path`]; it is validated before a
/// session is built around it.
pub struct DeckManifest {
    /// Deck title for authoring/debugging.
    pub title: String,
    /// Engine frame rate; all millisecond settings resolve against it.
    #[serde(default = "default_fps")]
    pub fps: Fps,
    /// Transition, input and effect tunables.
    #[serde(default)]
    pub settings: DeckSettings,
    /// Ordered slides. Zero-indexed, never reordered after construction.
    pub slides: Vec<SlideSpec>,
}

fn default_fps() -> Fps {
    Fps { num: 60, den: 1 }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One slide: stable id, opaque display content, entry effects.
pub struct SlideSpec {
    /// Slide identifier (stable within a deck).
    pub id: String,
    /// Opaque content owned by the rendering surface.
    #[serde(default)]
    pub label: String,
    /// Effects run when the slide becomes active.
    #[serde(default)]
    pub effects: Vec<EffectSpec>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "params")]
/// Entry-effect descriptors, evaluated lazily when the slide is entered.
pub enum EffectSpec {
    /// Animate a numeric display from zero to `target`.
    Counter {
        /// Display key the surface resolves to an element.
        key: String,
        target: u64,
        /// Appended to the display text on completion (e.g. `"+"`).
        #[serde(default)]
        suffix: Option<String>,
        /// Overrides [`DeckSettings::counter_duration_ms`] when set.
        #[serde(default)]
        duration_ms: Option<u64>,
        /// Overrides the default quartic ease-out when set.
        #[serde(default)]
        ease: Option<Ease>,
    },
    /// Reveal `bars` chart bars with a fixed per-bar stagger.
    ChartBars {
        bars: usize,
        /// Overrides [`DeckSettings::chart_stagger_ms`] when set.
        #[serde(default)]
        stagger_ms: Option<u64>,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Tunables for transitions, input thresholds and entry effects.
///
/// Defaults record the observed behavior of the decks this engine replaces.
pub struct DeckSettings {
    /// How long a transition holds the navigation latch.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// Minimum absolute wheel delta for one scroll step.
    #[serde(default = "default_wheel_threshold")]
    pub wheel_threshold: f64,
    /// Minimum horizontal touch displacement for a swipe, in pixels.
    #[serde(default = "default_swipe_threshold_px")]
    pub swipe_threshold_px: f64,
    /// Wheel input is ignored for this long after a delivered wheel event.
    #[serde(default = "default_wheel_cooldown_ms")]
    pub wheel_cooldown_ms: u64,
    /// Counter animation duration unless a counter overrides it.
    #[serde(default = "default_counter_duration_ms")]
    pub counter_duration_ms: u64,
    /// Per-bar delay of a chart reveal.
    #[serde(default = "default_chart_stagger_ms")]
    pub chart_stagger_ms: u64,
    /// Duration of one chart bar's reveal.
    #[serde(default = "default_chart_reveal_ms")]
    pub chart_reveal_ms: u64,
    /// Whether a slide's entry effects re-run every time it becomes active
    /// again, or only on its first entry.
    #[serde(default = "default_replay_on_reenter")]
    pub replay_on_reenter: bool,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
            wheel_threshold: default_wheel_threshold(),
            swipe_threshold_px: default_swipe_threshold_px(),
            wheel_cooldown_ms: default_wheel_cooldown_ms(),
            counter_duration_ms: default_counter_duration_ms(),
            chart_stagger_ms: default_chart_stagger_ms(),
            chart_reveal_ms: default_chart_reveal_ms(),
            replay_on_reenter: default_replay_on_reenter(),
        }
    }
}

fn default_settle_delay_ms() -> u64 {
    700
}

fn default_wheel_threshold() -> f64 {
    50.0
}

fn default_swipe_threshold_px() -> f64 {
    50.0
}

fn default_wheel_cooldown_ms() -> u64 {
    1500
}

fn default_counter_duration_ms() -> u64 {
    2000
}

fn default_chart_stagger_ms() -> u64 {
    100
}

fn default_chart_reveal_ms() -> u64 {
    500
}

fn default_replay_on_reenter() -> bool {
    true
}

impl DeckManifest {
    /// Decode and validate a manifest from a JSON string.
    pub fn from_json(json: &str) -> DeckResult<Self> {
        let manifest: Self =
            serde_json::from_str(json).map_err(|e| DeckError::manifest(e.to_string()))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read, decode and validate a manifest from a file.
    pub fn from_path(path: &Path) -> DeckResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| DeckError::manifest(format!("read '{}': {e}", path.display())))?;
        Self::from_json(&json)
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Validate structural invariants before the manifest is used.
    pub fn validate(&self) -> DeckResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;

        if self.slides.is_empty() {
            return Err(DeckError::validation("deck must contain at least one slide"));
        }

        let mut seen = HashSet::new();
        for slide in &self.slides {
            if slide.id.is_empty() {
                return Err(DeckError::validation("slide id must be non-empty"));
            }
            if !seen.insert(slide.id.as_str()) {
                return Err(DeckError::validation(format!(
                    "duplicate slide id '{}'",
                    slide.id
                )));
            }
            for effect in &slide.effects {
                validate_effect(&slide.id, effect)?;
            }
        }

        let s = &self.settings;
        if !s.wheel_threshold.is_finite() || s.wheel_threshold <= 0.0 {
            return Err(DeckError::validation("wheel_threshold must be finite and > 0"));
        }
        if !s.swipe_threshold_px.is_finite() || s.swipe_threshold_px <= 0.0 {
            return Err(DeckError::validation(
                "swipe_threshold_px must be finite and > 0",
            ));
        }
        if s.settle_delay_ms == 0 {
            return Err(DeckError::validation("settle_delay_ms must be > 0"));
        }
        if s.counter_duration_ms == 0 {
            return Err(DeckError::validation("counter_duration_ms must be > 0"));
        }
        if s.chart_reveal_ms == 0 {
            return Err(DeckError::validation("chart_reveal_ms must be > 0"));
        }

        Ok(())
    }
}

fn validate_effect(slide_id: &str, effect: &EffectSpec) -> DeckResult<()> {
    match effect {
        EffectSpec::Counter {
            key, duration_ms, ..
        } => {
            if key.is_empty() {
                return Err(DeckError::validation(format!(
                    "slide '{slide_id}': counter key must be non-empty"
                )));
            }
            if matches!(duration_ms, Some(0)) {
                return Err(DeckError::validation(format!(
                    "slide '{slide_id}': counter duration_ms must be > 0 when set"
                )));
            }
        }
        EffectSpec::ChartBars { bars, .. } => {
            if *bars == 0 {
                return Err(DeckError::validation(format!(
                    "slide '{slide_id}': chart must have at least one bar"
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/deck/manifest.rs"]
mod tests;
