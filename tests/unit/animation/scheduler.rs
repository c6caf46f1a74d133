use super::*;
use crate::animation::counter::display_value;

fn counter(start: u64, duration: u64, target: u64, ease: Ease) -> ScheduledAnim {
    ScheduledAnim {
        binding: EffectBinding::Counter {
            slide: 0,
            key: "n".to_string(),
            target,
            suffix: None,
        },
        start: FrameIndex(start),
        duration_frames: duration,
        ease,
        from: 0.0,
        to: target as f64,
    }
}

fn bar(start: u64, duration: u64, index: usize) -> ScheduledAnim {
    ScheduledAnim {
        binding: EffectBinding::ChartBar {
            slide: 0,
            bar: index,
        },
        start: FrameIndex(start),
        duration_frames: duration,
        ease: Ease::OutCubic,
        from: 0.0,
        to: 1.0,
    }
}

#[test]
fn future_start_stays_silent() {
    let mut sched = Scheduler::new();
    sched.schedule(counter(5, 10, 100, Ease::Linear));

    for frame in 0..5 {
        assert!(sched.tick(FrameIndex(frame)).is_empty(), "frame {frame}");
    }
    let events = sched.tick(FrameIndex(5));
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], AnimEvent::Tick { value, .. } if value == 0.0));
}

#[test]
fn completion_snaps_to_exact_target_and_retires() {
    let mut sched = Scheduler::new();
    sched.schedule(counter(0, 10, 1500, Ease::OutQuart));

    let mut last = None;
    for frame in 0..=10 {
        for event in sched.tick(FrameIndex(frame)) {
            last = Some(event);
        }
    }
    match last {
        Some(AnimEvent::Complete { value, .. }) => assert_eq!(value, 1500.0),
        other => panic!("expected completion, got {other:?}"),
    }
    assert_eq!(sched.active_len(), 0);
    assert!(sched.tick(FrameIndex(11)).is_empty());
}

#[test]
fn counter_display_is_monotonic_from_zero_to_target() {
    let mut sched = Scheduler::new();
    sched.schedule(counter(0, 120, 1500, Ease::OutQuart));

    let mut values = Vec::new();
    for frame in 0..=120 {
        for event in sched.tick(FrameIndex(frame)) {
            match event {
                AnimEvent::Tick { value, .. } | AnimEvent::Complete { value, .. } => {
                    values.push(display_value(value));
                }
            }
        }
    }
    assert_eq!(values.first(), Some(&0));
    assert_eq!(values.last(), Some(&1500));
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn zero_duration_completes_on_first_live_frame() {
    let mut sched = Scheduler::new();
    sched.schedule(counter(3, 0, 42, Ease::Linear));

    assert!(sched.tick(FrameIndex(2)).is_empty());
    let events = sched.tick(FrameIndex(3));
    assert!(matches!(events[0], AnimEvent::Complete { value, .. } if value == 42.0));
}

#[test]
fn staggered_bars_go_live_in_order() {
    let mut sched = Scheduler::new();
    sched.schedule(bar(0, 30, 0));
    sched.schedule(bar(10, 30, 1));

    let at_zero = sched.tick(FrameIndex(0));
    assert_eq!(at_zero.len(), 1);
    assert!(matches!(
        &at_zero[0],
        AnimEvent::Tick {
            binding: EffectBinding::ChartBar { bar: 0, .. },
            ..
        }
    ));

    let at_ten = sched.tick(FrameIndex(10));
    assert_eq!(at_ten.len(), 2);
    assert!(matches!(
        &at_ten[1],
        AnimEvent::Tick {
            binding: EffectBinding::ChartBar { bar: 1, .. },
            ..
        }
    ));
}
