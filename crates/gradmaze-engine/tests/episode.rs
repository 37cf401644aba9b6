//! End-to-end episode tests against the mock engine.

use std::cell::Cell;

use gradmaze_core::{
    Action, AgentSpawn, EngineError, InfoValue, MazeConfig, ObsShape, Point2, Rect, RoomHandle,
    RoomId, RoomSpec, TextureId,
};
use gradmaze_engine::{gradient_maze, EnvError, GradientMazeEnv, MazeEnv};
use gradmaze_gen::{MazeLayout, WorldGenerator};
use gradmaze_reward::GradientMazeShaper;
use gradmaze_space::{verify_cross, Space};
use gradmaze_test_utils::{observation_with_mean, uniform_observation, MockEngine};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const BASE: f64 = 0.75;

fn env() -> GradientMazeEnv<MockEngine> {
    let mut engine = MockEngine::new();
    engine.set_base_reward(BASE);
    gradient_maze(12, engine).unwrap()
}

fn frame_shape(env: &GradientMazeEnv<MockEngine>) -> ObsShape {
    env.observation_space().shape()
}

#[test]
fn resets_rebuild_identical_world_with_agent_at_center() {
    let mut env = env();

    env.reset(Some(1)).unwrap();
    let first_rooms = env.engine().rooms().to_vec();
    let first_spawn = env.engine().placements().to_vec();
    let first_pos = env.engine().agent().unwrap().pos;

    env.reset(Some(2)).unwrap();
    assert_eq!(env.engine().rooms(), first_rooms.as_slice());
    assert_eq!(env.engine().placements(), first_spawn.as_slice());
    assert_eq!(env.engine().agent().unwrap().pos, first_pos);
    assert_eq!(first_pos, Point2::new(7.0, 7.0));
    assert_eq!(
        first_spawn,
        vec![(
            RoomHandle::new(RoomId(0)),
            AgentSpawn::at(Point2::new(7.0, 7.0))
        )]
    );
    assert_eq!(env.episodes(), 2);
}

#[test]
fn generated_rooms_form_a_cross() {
    let mut env = env();
    env.reset(None).unwrap();
    let rooms = env.engine().rooms();
    let arms: Vec<_> = rooms[1..].iter().map(|r| r.rect).collect();
    assert_eq!(verify_cross(&rooms[0].rect, &arms), Ok(Point2::new(7.0, 7.0)));
}

#[test]
fn first_step_on_black_frame_returns_base_reward() {
    let mut env = env();
    env.reset(None).unwrap();
    env.engine_mut().pin_step_count(Some(0));
    let step = env.step(Action::MoveForward).unwrap();
    assert_eq!(step.reward, BASE);
    assert!(!step.truncated);
}

#[test]
fn final_step_combines_decay_and_brightness() {
    let mut env = env();
    env.reset(None).unwrap();
    for _ in 0..99 {
        let step = env.step(Action::TurnRight).unwrap();
        assert!(!step.is_done());
    }
    let shape = frame_shape(&env);
    env.engine_mut().push_frame(observation_with_mean(shape, 50));

    let step = env.step(Action::TurnLeft).unwrap();
    assert_eq!(env.step_count(), 100);
    assert!(step.truncated);
    assert!((step.reward - (BASE - 0.2 + 50.0)).abs() < 1e-9);
}

#[test]
fn stepping_after_truncation_requires_reset() {
    let mut env = env();
    env.reset(None).unwrap();
    for _ in 0..100 {
        env.step(Action::MoveForward).unwrap();
    }
    assert!(!env.in_episode());
    assert_eq!(env.step(Action::MoveForward), Err(EnvError::ResetRequired));

    env.reset(None).unwrap();
    assert_eq!(env.step_count(), 0);
    assert!(env.step(Action::MoveForward).is_ok());
}

#[test]
fn engine_termination_ends_episode() {
    let mut engine = MockEngine::new();
    engine.terminate_after(3);
    let mut env = gradient_maze(2, engine).unwrap();
    env.reset(None).unwrap();
    env.step(Action::TurnLeft).unwrap();
    env.step(Action::TurnLeft).unwrap();
    let last = env.step(Action::TurnLeft).unwrap();
    assert!(last.terminated);
    assert!(!last.truncated);
    assert_eq!(env.step(Action::TurnLeft), Err(EnvError::ResetRequired));
}

#[test]
fn engine_errors_propagate_unmodified() {
    let mut engine = MockEngine::new();
    engine.fail_on_room(2);
    let mut env = gradient_maze(12, engine).unwrap();
    assert_eq!(
        env.reset(None),
        Err(EnvError::Engine(MockEngine::injected_room_error(2)))
    );
    assert!(!env.in_episode());
    assert_eq!(env.step(Action::MoveForward), Err(EnvError::ResetRequired));
}

#[test]
fn invalid_action_index_rejected() {
    let mut env = env();
    env.reset(None).unwrap();
    for index in [3usize, 4, usize::MAX] {
        assert_eq!(
            env.step_index(index),
            Err(EnvError::Engine(EngineError::InvalidAction { index, size: 3 }))
        );
    }
    assert_eq!(env.action_space().n(), 3);
}

#[test]
fn brightness_reward_tracks_frame() {
    let mut env = env();
    env.reset(None).unwrap();
    let shape = frame_shape(&env);
    env.engine_mut().push_frame(uniform_observation(shape, 200));
    let step = env.step(Action::TurnLeft).unwrap();
    let expected = BASE - 0.2 * 1.0 / 100.0 + 200.0;
    assert!((step.reward - expected).abs() < 1e-9);
}

#[test]
fn random_policy_runs_to_truncation() {
    let mut env = env();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    env.reset(Some(11)).unwrap();
    let space = env.action_space();
    let mut steps = 0;
    loop {
        let action = space.sample(&mut rng);
        let step = env.step(action).unwrap();
        assert!(env.observation_space().contains(&step.observation));
        steps += 1;
        if step.is_done() {
            break;
        }
    }
    assert_eq!(steps, 100);
    assert_eq!(env.last_metrics().step_count, 100);
}

/// Generator whose chamber grows by one unit on every layout request.
struct Growing {
    extra: Cell<f32>,
}

impl WorldGenerator for Growing {
    fn name(&self) -> &str {
        "Growing"
    }

    fn layout(&self, _config: &MazeConfig) -> MazeLayout {
        let extra = self.extra.get();
        self.extra.set(extra + 1.0);
        MazeLayout {
            bounding: RoomSpec::new(Rect::new(0.0, 4.0 + extra, 0.0, 4.0), TextureId::BRICK_WALL),
            arms: Default::default(),
            spawn: AgentSpawn::at(Point2::new(1.0, 1.0)),
        }
    }
}

fn fingerprint_info(info: &gradmaze_core::Info) -> String {
    match info.get("fingerprint") {
        Some(InfoValue::Text(text)) => text.clone(),
        other => panic!("missing fingerprint: {other:?}"),
    }
}

#[test]
fn reset_fingerprint_describes_built_layout() {
    let generator = Growing {
        extra: Cell::new(0.0),
    };
    let mut env = MazeEnv::new(
        MazeConfig::default(),
        MockEngine::new(),
        generator,
        GradientMazeShaper::new(),
    )
    .unwrap();

    let (_, first) = env.reset(None).unwrap();
    let first_rooms = env.engine().rooms().to_vec();
    let first_fp = env.layout_fingerprint();
    let (_, second) = env.reset(None).unwrap();

    assert_ne!(env.engine().rooms(), first_rooms.as_slice());
    assert_ne!(fingerprint_info(&first), fingerprint_info(&second));
    assert_ne!(env.layout_fingerprint(), first_fp);
    assert_eq!(
        fingerprint_info(&second),
        format!("{:#018x}", env.layout_fingerprint())
    );
}

#[test]
fn reset_fingerprint_stable_for_fixed_maze() {
    let mut env = env();
    let (_, first) = env.reset(Some(1)).unwrap();
    let (_, second) = env.reset(Some(2)).unwrap();
    assert_eq!(fingerprint_info(&first), fingerprint_info(&second));
}

#[test]
fn mismatched_frame_shape_still_shaped() {
    let mut env = env();
    env.reset(None).unwrap();
    env.engine_mut().push_frame(uniform_observation(ObsShape::new(2, 2), 10));
    let step = env.step(Action::TurnLeft).unwrap();
    assert!(!env.observation_space().contains(&step.observation));
    assert!((step.reward - (BASE - 0.002 + 10.0)).abs() < 1e-9);
}

proptest! {
    #[test]
    fn every_valid_length_builds_the_same_maze(length in 2u32..500) {
        let mut reference = env();
        reference.reset(None).unwrap();
        let mut env = gradient_maze(length, MockEngine::new()).unwrap();
        env.reset(None).unwrap();
        prop_assert_eq!(env.engine().rooms(), reference.engine().rooms());
        prop_assert_eq!(env.layout_fingerprint(), reference.layout_fingerprint());
    }

    #[test]
    fn lengths_below_minimum_fail(length in 0u32..2) {
        prop_assert!(matches!(
            gradient_maze(length, MockEngine::new()),
            Err(EnvError::Config(_))
        ));
    }
}
