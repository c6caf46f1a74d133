/// Surface-level input as delivered by the five channels, after gesture
/// recognition but before command mapping.
///
/// Transient: produced by the normalization layer, consumed immediately by
/// the controller, never persisted (playback scripts serialize them, which is
/// the only reason these carry serde derives).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "params")]
pub enum InputEvent {
    Click(ClickTarget),
    KeyPress(Key),
    SwipeLeft,
    SwipeRight,
    WheelDown,
    WheelUp,
    IndicatorClick(usize),
}

impl InputEvent {
    /// Wheel-sourced events are subject to the cooldown latch.
    pub fn is_wheel(self) -> bool {
        matches!(self, Self::WheelDown | Self::WheelUp)
    }
}

/// Which navigation button a pointer click landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ClickTarget {
    NextButton,
    PrevButton,
}

/// Keys the deck reacts to; anything else never reaches the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Key {
    ArrowRight,
    ArrowLeft,
    Space,
    Enter,
    Home,
    End,
}

/// Logical navigation command produced by normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Advance,
    Retreat,
    JumpTo(JumpTarget),
}

/// Jump destination. `First`/`Last` resolve against the slide count inside
/// the controller, so the mapping table stays pure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpTarget {
    First,
    Last,
    Index(usize),
}

impl Command {
    /// The event-to-command mapping table. Total: every event maps.
    pub fn from_event(event: InputEvent) -> Self {
        match event {
            InputEvent::Click(ClickTarget::NextButton) => Self::Advance,
            InputEvent::Click(ClickTarget::PrevButton) => Self::Retreat,
            InputEvent::KeyPress(Key::ArrowRight | Key::Space | Key::Enter) => Self::Advance,
            InputEvent::KeyPress(Key::ArrowLeft) => Self::Retreat,
            InputEvent::KeyPress(Key::Home) => Self::JumpTo(JumpTarget::First),
            InputEvent::KeyPress(Key::End) => Self::JumpTo(JumpTarget::Last),
            InputEvent::SwipeLeft => Self::Advance,
            InputEvent::SwipeRight => Self::Retreat,
            InputEvent::WheelDown => Self::Advance,
            InputEvent::WheelUp => Self::Retreat,
            InputEvent::IndicatorClick(i) => Self::JumpTo(JumpTarget::Index(i)),
        }
    }
}
