use super::*;
use crate::input::event::{ClickTarget, JumpTarget, Key};

fn normalizer() -> InputNormalizer {
    InputNormalizer::new(NormalizerConfig {
        swipe_threshold_px: 50.0,
        wheel_threshold: 50.0,
        wheel_cooldown_frames: 90,
    })
}

#[test]
fn mapping_table_is_total() {
    let cases = [
        (InputEvent::Click(ClickTarget::NextButton), Command::Advance),
        (InputEvent::Click(ClickTarget::PrevButton), Command::Retreat),
        (InputEvent::KeyPress(Key::ArrowRight), Command::Advance),
        (InputEvent::KeyPress(Key::Space), Command::Advance),
        (InputEvent::KeyPress(Key::Enter), Command::Advance),
        (InputEvent::KeyPress(Key::ArrowLeft), Command::Retreat),
        (
            InputEvent::KeyPress(Key::Home),
            Command::JumpTo(JumpTarget::First),
        ),
        (
            InputEvent::KeyPress(Key::End),
            Command::JumpTo(JumpTarget::Last),
        ),
        (InputEvent::SwipeLeft, Command::Advance),
        (InputEvent::SwipeRight, Command::Retreat),
        (InputEvent::WheelDown, Command::Advance),
        (InputEvent::WheelUp, Command::Retreat),
        (
            InputEvent::IndicatorClick(3),
            Command::JumpTo(JumpTarget::Index(3)),
        ),
    ];
    for (event, expected) in cases {
        assert_eq!(Command::from_event(event), expected, "{event:?}");
    }
}

#[test]
fn sub_threshold_swipe_is_noise() {
    let n = normalizer();
    assert_eq!(
        n.swipe_between(Point::new(100.0, 0.0), Point::new(60.0, 0.0)),
        None
    );
    assert_eq!(
        n.swipe_between(Point::new(100.0, 0.0), Point::new(30.0, 10.0)),
        Some(InputEvent::SwipeLeft)
    );
    assert_eq!(
        n.swipe_between(Point::new(100.0, 0.0), Point::new(180.0, 0.0)),
        Some(InputEvent::SwipeRight)
    );
}

#[test]
fn wheel_threshold_rejects_small_deltas() {
    let n = normalizer();
    assert_eq!(n.wheel(40.0), None);
    assert_eq!(n.wheel(50.0), None);
    assert_eq!(n.wheel(60.0), Some(InputEvent::WheelDown));
    assert_eq!(n.wheel(-60.0), Some(InputEvent::WheelUp));
}

#[test]
fn wheel_cooldown_drops_the_second_gesture() {
    let mut n = normalizer();
    assert_eq!(
        n.normalize(InputEvent::WheelDown, FrameIndex(0)),
        Some(Command::Advance)
    );
    assert_eq!(n.normalize(InputEvent::WheelDown, FrameIndex(10)), None);
    assert_eq!(n.normalize(InputEvent::WheelUp, FrameIndex(89)), None);
    assert_eq!(
        n.normalize(InputEvent::WheelDown, FrameIndex(90)),
        Some(Command::Advance)
    );
}

#[test]
fn cooldown_only_gates_wheel_input() {
    let mut n = normalizer();
    n.normalize(InputEvent::WheelDown, FrameIndex(0));
    assert_eq!(
        n.normalize(InputEvent::KeyPress(Key::ArrowRight), FrameIndex(10)),
        Some(Command::Advance)
    );
    assert_eq!(
        n.normalize(InputEvent::SwipeLeft, FrameIndex(10)),
        Some(Command::Advance)
    );
}
