//! Integration tests for the media controller
//!
//! This test suite verifies:
//! - Lookup-miss handling for every operation
//! - The readiness guard on state queries and seeks
//! - Seek/query round-trips against an element that clamps like a browser
//! - Instruction application

use bridge_traits::error::Result as BridgeResult;
use bridge_traits::{BridgeError, MediaDocument, MediaElement, SourceNode};
use core_playback::{
    Behaviour, Instruction, InstructionOutcome, MediaController, PlaybackError, PlaybackSnapshot,
    PlayerState, SeekOutcome,
};
use core_runtime::ShimConfig;
use mockall::mock;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

// ============================================================================
// Fake DOM
// ============================================================================

#[derive(Clone, Default)]
struct FakeSource {
    src: Option<String>,
    attributes: HashMap<String, String>,
}

impl FakeSource {
    fn with_src(src: &str) -> Self {
        Self {
            src: Some(src.to_string()),
            attributes: HashMap::new(),
        }
    }

    fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }
}

impl SourceNode for FakeSource {
    fn src(&self) -> Option<String> {
        self.src.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}

#[derive(Default)]
struct ElementState {
    duration: f64,
    current_time: f64,
    source: Option<FakeSource>,
    plays: usize,
    pauses: usize,
    seeks: Vec<f64>,
    loads: Vec<String>,
}

/// Shared handle; clones observe the same element, like DOM references.
#[derive(Clone, Default)]
struct FakeElement(Rc<RefCell<ElementState>>);

impl FakeElement {
    fn unloaded() -> Self {
        Self::default()
    }

    fn loaded(source: FakeSource, duration: f64, current_time: f64) -> Self {
        let element = Self::default();
        {
            let mut state = element.0.borrow_mut();
            state.source = Some(source);
            state.duration = duration;
            state.current_time = current_time;
        }
        element
    }

    fn plays(&self) -> usize {
        self.0.borrow().plays
    }

    fn pauses(&self) -> usize {
        self.0.borrow().pauses
    }

    fn seeks(&self) -> Vec<f64> {
        self.0.borrow().seeks.clone()
    }

    fn loads(&self) -> Vec<String> {
        self.0.borrow().loads.clone()
    }

    /// Simulate metadata arriving and playback advancing to `time`.
    fn finish_loading(&self, duration: f64, time: f64) {
        let mut state = self.0.borrow_mut();
        state.duration = duration;
        state.current_time = time;
    }
}

impl MediaElement for FakeElement {
    type Source = FakeSource;

    fn play(&self) {
        self.0.borrow_mut().plays += 1;
    }

    fn pause(&self) {
        self.0.borrow_mut().pauses += 1;
    }

    fn duration(&self) -> f64 {
        self.0.borrow().duration
    }

    fn current_time(&self) -> f64 {
        self.0.borrow().current_time
    }

    fn set_current_time(&self, time: f64) {
        let mut state = self.0.borrow_mut();
        state.seeks.push(time);
        let upper = if state.duration.is_nan() { 0.0 } else { state.duration };
        state.current_time = time.clamp(0.0, upper);
    }

    fn first_source(&self) -> Option<FakeSource> {
        self.0.borrow().source.clone()
    }

    fn load_source(&self, url: &str, attribute: &str, path: &str) {
        let mut state = self.0.borrow_mut();
        state.loads.push(url.to_string());
        state.source = Some(FakeSource::with_src(url).with_attribute(attribute, path));
        state.duration = f64::NAN;
        state.current_time = 0.0;
    }

    fn clear_source(&self) {
        let mut state = self.0.borrow_mut();
        state.source = None;
        state.duration = f64::NAN;
        state.current_time = 0.0;
    }
}

#[derive(Default)]
struct FakeDocument {
    media: HashMap<String, FakeElement>,
    other: Vec<String>,
    lookups: Cell<usize>,
}

impl FakeDocument {
    fn with_media(mut self, id: &str, element: FakeElement) -> Self {
        self.media.insert(id.to_string(), element);
        self
    }

    fn with_other(mut self, id: &str) -> Self {
        self.other.push(id.to_string());
        self
    }
}

impl MediaDocument for FakeDocument {
    type Element = FakeElement;

    fn media_element(&self, id: &str) -> BridgeResult<FakeElement> {
        self.lookups.set(self.lookups.get() + 1);
        if let Some(element) = self.media.get(id) {
            return Ok(element.clone());
        }
        if self.other.iter().any(|other| other == id) {
            return Err(BridgeError::NotAMediaElement(id.to_string()));
        }
        Err(BridgeError::ElementNotFound(id.to_string()))
    }
}

fn movie_source() -> FakeSource {
    FakeSource::with_src("https://host/play/movie123").with_attribute("meta-path", "movie123")
}

fn controller_with(id: &str, element: FakeElement) -> MediaController<FakeDocument> {
    MediaController::with_defaults(FakeDocument::default().with_media(id, element))
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_play_missing_element_is_error() {
    let controller = MediaController::with_defaults(FakeDocument::default());

    let err = controller.play("missing").unwrap_err();

    assert!(err.is_lookup_miss());
    assert_eq!(
        err,
        PlaybackError::Bridge(BridgeError::ElementNotFound("missing".to_string()))
    );
}

#[test]
fn test_every_operation_reports_lookup_miss() {
    let controller = MediaController::with_defaults(FakeDocument::default());

    assert!(controller.pause("missing").unwrap_err().is_lookup_miss());
    assert!(controller.player_state("missing").unwrap_err().is_lookup_miss());
    assert!(controller
        .set_current_time("missing", 10.0)
        .unwrap_err()
        .is_lookup_miss());
    assert!(controller
        .apply("missing", &Instruction::Idle)
        .unwrap_err()
        .is_lookup_miss());
}

#[test]
fn test_missing_element_is_never_mutated_through_other_ids() {
    let element = FakeElement::loaded(movie_source(), 100.0, 5.0);
    let controller = controller_with("v1", element.clone());

    assert!(controller.set_current_time("v2", 50.0).is_err());

    assert!(element.seeks().is_empty());
    assert_eq!(element.current_time(), 5.0);
}

#[test]
fn test_non_media_element_is_rejected() {
    let document = FakeDocument::default().with_other("title");
    let controller = MediaController::with_defaults(document);

    let err = controller.play("title").unwrap_err();

    assert_eq!(
        err,
        PlaybackError::Bridge(BridgeError::NotAMediaElement("title".to_string()))
    );
    assert!(!err.is_lookup_miss());
}

#[test]
fn test_empty_id_is_rejected_before_lookup() {
    let controller = MediaController::with_defaults(FakeDocument::default());

    assert_eq!(controller.play(""), Err(PlaybackError::InvalidElementId));
    assert_eq!(controller.document().lookups.get(), 0);
}

#[test]
fn test_each_call_looks_up_again() {
    let controller = controller_with("v1", FakeElement::loaded(movie_source(), 100.0, 5.0));

    controller.play("v1").unwrap();
    controller.player_state("v1").unwrap();
    controller.set_current_time("v1", 10.0).unwrap();
    controller.pause("v1").unwrap();

    assert_eq!(controller.document().lookups.get(), 4);
}

// ============================================================================
// Play / Pause
// ============================================================================

#[test]
fn test_play_and_pause_forward_to_element() {
    let element = FakeElement::unloaded();
    let controller = controller_with("v1", element.clone());

    controller.play("v1").unwrap();
    controller.pause("v1").unwrap();
    controller.play("v1").unwrap();

    assert_eq!(element.plays(), 2);
    assert_eq!(element.pauses(), 1);
}

// ============================================================================
// State queries
// ============================================================================

#[test]
fn test_player_state_of_ready_element() {
    let controller = controller_with("v1", FakeElement::loaded(movie_source(), 5400.0, 61.25));

    let state = controller.player_state("v1").unwrap();

    assert_eq!(
        state,
        PlayerState::Media(PlaybackSnapshot {
            path: "movie123".to_string(),
            duration: 5400.0,
            time: 61.25,
        })
    );
}

#[test]
fn test_player_state_without_source_child_is_idle() {
    let element = FakeElement::unloaded();
    {
        let mut state = element.0.borrow_mut();
        state.duration = 100.0;
        state.current_time = 10.0;
    }
    let controller = controller_with("v1", element);

    assert_eq!(controller.player_state("v1").unwrap(), PlayerState::Idle);
}

#[test]
fn test_player_state_with_zero_or_nan_times_is_idle() {
    for (duration, time) in [(0.0, 1.0), (f64::NAN, 1.0), (100.0, 0.0), (100.0, f64::NAN)] {
        let controller = controller_with("v1", FakeElement::loaded(movie_source(), duration, time));
        assert!(
            controller.player_state("v1").unwrap().is_idle(),
            "duration={duration} time={time}"
        );
    }
}

#[test]
fn test_path_comes_from_attribute_regardless_of_url() {
    let source = FakeSource::with_src("https://cdn.example/v/abc.mp4?token=1")
        .with_attribute("meta-path", "movie123");
    let controller = controller_with("v1", FakeElement::loaded(source, 100.0, 1.0));

    let snapshot = controller.player_state("v1").unwrap().into_snapshot().unwrap();

    assert_eq!(snapshot.path, "movie123");
}

#[test]
fn test_play_marker_in_url_without_attribute_is_idle() {
    let source = FakeSource::with_src("https://host/play/movie123");
    let controller = controller_with("v1", FakeElement::loaded(source, 100.0, 1.0));

    assert!(controller.player_state("v1").unwrap().is_idle());
}

#[test]
fn test_custom_path_attribute() {
    let source = FakeSource::with_src("https://host/a.mp4").with_attribute("data-path", "a.mp4");
    let document = FakeDocument::default().with_media("v1", FakeElement::loaded(source, 10.0, 2.0));
    let config = ShimConfig::default().with_path_attribute("data-path");
    let controller = MediaController::new(document, config).unwrap();

    let snapshot = controller.player_state("v1").unwrap().into_snapshot().unwrap();

    assert_eq!(snapshot.path, "a.mp4");
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = ShimConfig::default().with_path_attribute("");
    let result = MediaController::new(FakeDocument::default(), config);

    assert!(matches!(result, Err(PlaybackError::Runtime(_))));
}

// ============================================================================
// Seeking
// ============================================================================

#[test]
fn test_seek_then_query_round_trip() {
    let controller = controller_with("v1", FakeElement::loaded(movie_source(), 100.0, 5.0));

    assert_eq!(controller.set_current_time("v1", 42.5).unwrap(), SeekOutcome::Applied);

    let snapshot = controller.player_state("v1").unwrap().into_snapshot().unwrap();
    assert_eq!(snapshot.time, 42.5);
}

#[test]
fn test_out_of_range_seek_is_clamped_by_element() {
    let element = FakeElement::loaded(movie_source(), 100.0, 5.0);
    let controller = controller_with("v1", element.clone());

    assert_eq!(controller.set_current_time("v1", 250.0).unwrap(), SeekOutcome::Applied);

    assert_eq!(element.seeks(), vec![250.0]);
    let snapshot = controller.player_state("v1").unwrap().into_snapshot().unwrap();
    assert_eq!(snapshot.time, 100.0);
}

#[test]
fn test_seek_on_element_not_reporting_position_is_noop() {
    let element = FakeElement::loaded(movie_source(), 100.0, 0.0);
    let controller = controller_with("v1", element.clone());

    assert_eq!(controller.set_current_time("v1", 30.0).unwrap(), SeekOutcome::NotReady);

    assert!(element.seeks().is_empty());
}

#[test]
fn test_non_finite_seek_is_rejected_without_lookup() {
    let element = FakeElement::loaded(movie_source(), 100.0, 5.0);
    let controller = controller_with("v1", element.clone());

    let err = controller.set_current_time("v1", f64::INFINITY).unwrap_err();

    assert!(matches!(err, PlaybackError::InvalidTime(t) if t.is_infinite()));
    assert!(matches!(
        controller.set_current_time("v1", f64::NAN),
        Err(PlaybackError::InvalidTime(_))
    ));
    assert_eq!(controller.document().lookups.get(), 0);
    assert!(element.seeks().is_empty());
}

// ============================================================================
// Instructions
// ============================================================================

#[test]
fn test_idle_instruction_stops_presenting() {
    let element = FakeElement::loaded(movie_source(), 100.0, 5.0);
    let controller = controller_with("v1", element.clone());

    let outcome = controller.apply("v1", &Instruction::Idle).unwrap();

    assert_eq!(outcome, InstructionOutcome::Stopped);
    assert_eq!(element.pauses(), 1);
    assert_eq!(controller.player_state("v1").unwrap(), PlayerState::Idle);
}

#[test]
fn test_play_instruction_for_loaded_path_seeks_and_plays() {
    let element = FakeElement::loaded(movie_source(), 100.0, 5.0);
    let controller = controller_with("v1", element.clone());
    let instruction = Instruction::Play {
        path: "movie123".to_string(),
        from: Some(20.0),
        behaviour: Behaviour::Playing,
    };

    let outcome = controller.apply("v1", &instruction).unwrap();

    assert_eq!(outcome, InstructionOutcome::Applied);
    assert!(element.loads().is_empty());
    assert_eq!(element.seeks(), vec![20.0]);
    assert_eq!(element.plays(), 1);
    assert_eq!(element.pauses(), 0);
}

#[test]
fn test_paused_instruction_without_position_only_pauses() {
    let element = FakeElement::loaded(movie_source(), 100.0, 5.0);
    let controller = controller_with("v1", element.clone());
    let instruction = Instruction::Play {
        path: "movie123".to_string(),
        from: None,
        behaviour: Behaviour::Paused,
    };

    controller.apply("v1", &instruction).unwrap();

    assert!(element.seeks().is_empty());
    assert_eq!(element.pauses(), 1);
    assert_eq!(element.plays(), 0);
}

#[test]
fn test_play_instruction_for_other_path_swaps_source() {
    let element = FakeElement::loaded(movie_source(), 100.0, 5.0);
    let controller = controller_with("v1", element.clone());
    let instruction = Instruction::Play {
        path: "shows/ep1.mkv".to_string(),
        from: Some(30.0),
        behaviour: Behaviour::Playing,
    };

    let outcome = controller.apply("v1", &instruction).unwrap();

    assert_eq!(
        outcome,
        InstructionOutcome::Loaded {
            path: "shows/ep1.mkv".to_string()
        }
    );
    assert_eq!(element.loads(), vec!["/play/shows/ep1.mkv".to_string()]);
    assert_eq!(element.seeks(), vec![30.0]);
    assert_eq!(element.plays(), 1);

    element.finish_loading(1200.0, 30.0);
    let snapshot = controller.player_state("v1").unwrap().into_snapshot().unwrap();
    assert_eq!(snapshot.path, "shows/ep1.mkv");
    assert_eq!(snapshot.time, 30.0);
}

#[test]
fn test_play_instruction_on_unloaded_element_loads_from_media_root() {
    let element = FakeElement::unloaded();
    let document = FakeDocument::default().with_media("v1", element.clone());
    let config = ShimConfig::default()
        .with_path_attribute("data-path")
        .with_media_root("https://media.local/");
    let controller = MediaController::new(document, config).unwrap();
    let instruction = Instruction::Play {
        path: "a.mp4".to_string(),
        from: None,
        behaviour: Behaviour::Paused,
    };

    let outcome = controller.apply("v1", &instruction).unwrap();

    assert!(matches!(outcome, InstructionOutcome::Loaded { .. }));
    assert_eq!(element.loads(), vec!["https://media.local/a.mp4".to_string()]);
    assert!(element.seeks().is_empty());
    assert_eq!(element.pauses(), 1);
    assert_eq!(element.plays(), 0);
    let source = element.first_source().unwrap();
    assert_eq!(source.attribute("data-path"), Some("a.mp4".to_string()));
}

#[test]
fn test_repeated_play_instruction_does_not_reload_pending_source() {
    let element = FakeElement::unloaded();
    let controller = controller_with("v1", element.clone());
    let instruction = Instruction::Play {
        path: "movie123".to_string(),
        from: None,
        behaviour: Behaviour::Playing,
    };

    controller.apply("v1", &instruction).unwrap();
    let outcome = controller.apply("v1", &instruction).unwrap();

    assert_eq!(outcome, InstructionOutcome::Applied);
    assert_eq!(element.loads().len(), 1);
    assert_eq!(element.plays(), 2);
}

#[test]
fn test_non_finite_instruction_position_leaves_element_alone() {
    let element = FakeElement::loaded(movie_source(), 100.0, 5.0);
    let controller = controller_with("v1", element.clone());
    let instruction = Instruction::Play {
        path: "other.mkv".to_string(),
        from: Some(f64::NAN),
        behaviour: Behaviour::Playing,
    };

    let err = controller.apply("v1", &instruction).unwrap_err();

    assert!(matches!(err, PlaybackError::InvalidTime(_)));
    assert!(element.loads().is_empty());
    assert_eq!(element.plays(), 0);
}

// ============================================================================
// Mocked document
// ============================================================================

mock! {
    Document {}

    impl MediaDocument for Document {
        type Element = FakeElement;

        fn media_element(&self, id: &str) -> BridgeResult<FakeElement>;
    }
}

#[test]
fn test_state_query_resolves_requested_id_once() {
    let element = FakeElement::loaded(movie_source(), 100.0, 5.0);
    let mut document = MockDocument::new();
    document
        .expect_media_element()
        .withf(|id| id.to_string() == "player")
        .times(1)
        .returning_st(move |_| Ok(element.clone()));

    let controller = MediaController::with_defaults(document);
    let state = controller.player_state("player").unwrap();

    assert_eq!(state.snapshot().map(|s| s.time), Some(5.0));
}
