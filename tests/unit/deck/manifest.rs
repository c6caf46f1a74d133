use super::*;

fn minimal_json() -> &'static str {
    r##"
{
  "title": "pitch",
  "slides": [
    { "id": "hero" },
    { "id": "vision", "label": "The Vision" }
  ]
}
"##
}

#[test]
fn minimal_manifest_gets_the_observed_defaults() {
    let manifest = DeckManifest::from_json(minimal_json()).unwrap();
    assert_eq!(manifest.slide_count(), 2);
    assert_eq!(manifest.fps, Fps { num: 60, den: 1 });

    let s = &manifest.settings;
    assert_eq!(s.settle_delay_ms, 700);
    assert_eq!(s.wheel_threshold, 50.0);
    assert_eq!(s.swipe_threshold_px, 50.0);
    assert_eq!(s.wheel_cooldown_ms, 1500);
    assert_eq!(s.counter_duration_ms, 2000);
    assert!(s.replay_on_reenter);
}

#[test]
fn effects_decode_from_tagged_json() {
    let manifest = DeckManifest::from_json(
        r##"
{
  "title": "pitch",
  "slides": [
    {
      "id": "stats",
      "effects": [
        { "kind": "Counter", "params": { "key": "students", "target": 1500 } },
        { "kind": "Counter", "params": { "key": "partners", "target": 200, "suffix": "+" } },
        { "kind": "ChartBars", "params": { "bars": 6 } }
      ]
    }
  ]
}
"##,
    )
    .unwrap();

    let effects = &manifest.slides[0].effects;
    assert_eq!(effects.len(), 3);
    assert!(matches!(
        &effects[1],
        EffectSpec::Counter {
            target: 200,
            suffix: Some(s),
            ..
        } if s == "+"
    ));
    assert!(matches!(&effects[2], EffectSpec::ChartBars { bars: 6, .. }));
}

#[test]
fn empty_deck_is_rejected() {
    let err = DeckManifest::from_json(r#"{ "title": "t", "slides": [] }"#).unwrap_err();
    assert!(matches!(err, DeckError::Validation(_)));
}

#[test]
fn duplicate_slide_ids_are_rejected() {
    let err = DeckManifest::from_json(
        r#"{ "title": "t", "slides": [ { "id": "a" }, { "id": "a" } ] }"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("duplicate slide id 'a'"));
}

#[test]
fn bad_settings_are_rejected() {
    let err = DeckManifest::from_json(
        r#"{ "title": "t", "settings": { "wheel_threshold": 0.0 }, "slides": [ { "id": "a" } ] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, DeckError::Validation(_)));
}

#[test]
fn bad_effects_are_rejected() {
    let empty_key = r##"
{ "title": "t", "slides": [ { "id": "a", "effects": [
  { "kind": "Counter", "params": { "key": "", "target": 10 } }
] } ] }
"##;
    assert!(DeckManifest::from_json(empty_key).is_err());

    let zero_bars = r##"
{ "title": "t", "slides": [ { "id": "a", "effects": [
  { "kind": "ChartBars", "params": { "bars": 0 } }
] } ] }
"##;
    assert!(DeckManifest::from_json(zero_bars).is_err());
}

#[test]
fn malformed_json_is_a_manifest_error() {
    let err = DeckManifest::from_json("{ not json").unwrap_err();
    assert!(matches!(err, DeckError::Manifest(_)));
}
