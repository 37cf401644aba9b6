//! Lockstep (synchronous) environment driver.
//!
//! [`MazeEnv`] is the user-facing API for running GradMaze episodes. Each
//! call to [`reset()`](MazeEnv::reset) rebuilds the world and returns the
//! first observation; each call to [`step()`](MazeEnv::step) advances the
//! engine by one action and returns the shaped step result.
//!
//! # Ownership model
//!
//! The engine is owned by the environment and lent to the world generator
//! as `&mut dyn WorldBuilder` for the duration of a reset. `MazeEnv` is
//! [`Send`] whenever its engine, generator, and shaper are. All mutating
//! methods take `&mut self`.

use std::time::Instant;

use gradmaze_core::{
    Action, EpisodeProgress, Info, MazeConfig, Observation, SimEngine, StepResult,
};
use gradmaze_gen::{GradientMaze, WorldGenerator};
use gradmaze_reward::{GradientMazeShaper, RewardShaper};
use gradmaze_space::{ActionSpace, ObservationSpace};

use crate::error::EnvError;
use crate::metrics::{as_micros, StepMetrics};

// Compile-time assertion: MazeEnv is Send whenever its parts are.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check<E, G, S>()
    where
        E: SimEngine + Send,
        G: WorldGenerator + Send,
        S: RewardShaper + Send,
    {
        assert_send::<MazeEnv<E, G, S>>();
    }
};

// ── MazeEnv ─────────────────────────────────────────────────────

/// Single-agent maze environment over an injected simulation engine.
///
/// Created via [`new()`](MazeEnv::new), or [`gradient_maze()`] for the
/// reference maze. Call [`reset()`](MazeEnv::reset) before stepping, and
/// again once a step result reports `terminated` or `truncated`.
///
/// # Example
///
/// ```ignore
/// let mut env = gradient_maze(12, engine)?;
/// let (obs, _info) = env.reset(Some(7))?;
/// loop {
///     let step = env.step(Action::MoveForward)?;
///     if step.is_done() {
///         break;
///     }
/// }
/// ```
pub struct MazeEnv<E, G, S> {
    config: MazeConfig,
    engine: E,
    generator: G,
    shaper: S,
    action_space: ActionSpace,
    observation_space: ObservationSpace,
    fingerprint: u64,
    in_episode: bool,
    episodes: u32,
    episode_return: f64,
    last_metrics: StepMetrics,
}

impl<E, G, S> MazeEnv<E, G, S>
where
    E: SimEngine,
    G: WorldGenerator,
    S: RewardShaper,
{
    /// Create an environment from a configuration and its collaborators.
    ///
    /// Validates `config` and applies its engine options. Nothing is built
    /// until the first [`reset()`](Self::reset).
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Config`] for an invalid configuration and
    /// [`EnvError::Engine`] if the engine rejects its options.
    pub fn new(
        config: MazeConfig,
        mut engine: E,
        generator: G,
        shaper: S,
    ) -> Result<Self, EnvError> {
        config.validate()?;
        let options = config.engine_options();
        engine.configure(options)?;
        let observation_space = ObservationSpace::new(options.obs_shape())?;
        if engine.obs_shape() != options.obs_shape() {
            tracing::warn!(
                engine = %engine.obs_shape(),
                configured = %options.obs_shape(),
                "engine observation shape differs from configuration"
            );
        }
        let fingerprint = generator.layout(&config).fingerprint();
        tracing::info!(
            generator = generator.name(),
            shaper = shaper.name(),
            length = config.length(),
            max_episode_steps = config.max_episode_steps(),
            obs_shape = %options.obs_shape(),
            "environment created"
        );
        Ok(Self {
            config,
            engine,
            generator,
            shaper,
            action_space: ActionSpace::new(),
            observation_space,
            fingerprint,
            in_episode: false,
            episodes: 0,
            episode_return: 0.0,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Start a new episode.
    ///
    /// Clears the engine's world, rebuilds the maze through the world
    /// generator, spawns the agent, and returns the initial observation
    /// with an info map carrying the episode index and layout fingerprint.
    /// `seed` reseeds the engine; `None` continues its current stream.
    ///
    /// # Errors
    ///
    /// Engine failures are returned unmodified as [`EnvError::Engine`].
    /// After a failed reset the environment requires another reset.
    pub fn reset(&mut self, seed: Option<u64>) -> Result<(Observation, Info), EnvError> {
        self.in_episode = false;
        self.episode_return = 0.0;
        self.last_metrics = StepMetrics::default();

        self.engine.begin_episode(seed)?;
        let layout = self.generator.generate(&self.config, &mut self.engine)?;
        self.fingerprint = layout.fingerprint();
        let observation = self.engine.finish_episode()?;
        self.check_shape(&observation, "reset");

        self.episodes += 1;
        self.in_episode = true;
        let fingerprint = format!("{:#018x}", self.fingerprint);
        tracing::debug!(
            episode = self.episodes,
            seed = ?seed,
            generator = self.generator.name(),
            fingerprint = %fingerprint,
            "episode reset"
        );

        let mut info = Info::new();
        info.insert("episode", self.episodes);
        info.insert("fingerprint", fingerprint);
        Ok((observation, info))
    }

    /// Advance the episode by one action and return the shaped result.
    ///
    /// The engine steps first, then the reward shaper rewrites the reward
    /// using the engine's updated step count. Once the result reports
    /// `terminated` or `truncated` the episode is over.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::ResetRequired`] before the first reset and after
    /// the episode ended. Engine failures are returned unmodified.
    pub fn step(&mut self, action: Action) -> Result<StepResult, EnvError> {
        if !self.in_episode {
            return Err(EnvError::ResetRequired);
        }
        let start = Instant::now();

        let raw = self.engine.step(action)?;
        let engine_us = as_micros(start.elapsed());
        self.check_shape(&raw.observation, "step");

        let progress =
            EpisodeProgress::new(self.engine.step_count(), self.config.max_episode_steps());
        let shaping_start = Instant::now();
        let shaped = self.shaper.shape(raw, progress);
        let shaping_us = as_micros(shaping_start.elapsed());

        self.episode_return += shaped.reward;
        if shaped.is_done() {
            self.in_episode = false;
            tracing::debug!(
                episode = self.episodes,
                steps = progress.step_count,
                terminated = shaped.terminated,
                truncated = shaped.truncated,
                episode_return = self.episode_return,
                "episode finished"
            );
        }
        self.last_metrics = StepMetrics {
            total_us: as_micros(start.elapsed()),
            engine_us,
            shaping_us,
            step_count: progress.step_count,
            episode_return: self.episode_return,
        };
        Ok(shaped)
    }

    /// Step with a raw action index, as delivered by a discrete policy.
    ///
    /// # Errors
    ///
    /// Indices outside the action space yield
    /// [`EngineError::InvalidAction`](gradmaze_core::EngineError::InvalidAction)
    /// without touching the engine. Otherwise as [`step()`](Self::step).
    pub fn step_index(&mut self, index: usize) -> Result<StepResult, EnvError> {
        let action = Action::try_from(index)?;
        self.step(action)
    }

    /// The discrete three-action space.
    pub fn action_space(&self) -> ActionSpace {
        self.action_space
    }

    /// The RGB observation space.
    pub fn observation_space(&self) -> &ObservationSpace {
        &self.observation_space
    }

    /// The configuration this environment was built with.
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// The underlying engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable access to the engine, for scripting and inspection.
    ///
    /// Mutating the world mid-episode bypasses the generator.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// The world generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// The reward shaper.
    pub fn shaper(&self) -> &S {
        &self.shaper
    }

    /// Engine-reported step count of the current episode.
    pub fn step_count(&self) -> u32 {
        self.engine.step_count()
    }

    /// Whether an episode is running and accepts steps.
    pub fn in_episode(&self) -> bool {
        self.in_episode
    }

    /// Number of successful resets.
    pub fn episodes(&self) -> u32 {
        self.episodes
    }

    /// Sum of shaped rewards since the last reset.
    pub fn episode_return(&self) -> f64 {
        self.episode_return
    }

    /// Metrics from the most recent successful step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// FNV-1a fingerprint of the layout built by the most recent reset.
    ///
    /// Before the first reset, the fingerprint of the layout the generator
    /// describes for this configuration.
    pub fn layout_fingerprint(&self) -> u64 {
        self.fingerprint
    }

    fn check_shape(&self, observation: &Observation, phase: &'static str) {
        if observation.shape() != self.observation_space.shape() {
            tracing::warn!(
                phase,
                rendered = %observation.shape(),
                configured = %self.observation_space.shape(),
                "engine rendered an unexpected observation shape"
            );
        }
    }

    /// Consume the environment and return its engine.
    pub fn into_engine(self) -> E {
        self.engine
    }
}

impl<E, G, S> std::fmt::Debug for MazeEnv<E, G, S>
where
    E: SimEngine,
    G: WorldGenerator,
    S: RewardShaper,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MazeEnv")
            .field("generator", &self.generator.name())
            .field("shaper", &self.shaper.name())
            .field("length", &self.config.length())
            .field("episodes", &self.episodes)
            .field("in_episode", &self.in_episode)
            .field("step_count", &self.engine.step_count())
            .finish()
    }
}

// ── Gradient maze ───────────────────────────────────────────────

/// The reference environment: [`GradientMaze`] with [`GradientMazeShaper`].
pub type GradientMazeEnv<E> = MazeEnv<E, GradientMaze, GradientMazeShaper>;

/// Build the gradient maze environment with default engine options.
///
/// # Errors
///
/// Returns [`EnvError::Config`] if `length < 2`, or any error from
/// [`MazeEnv::new`].
pub fn gradient_maze<E: SimEngine>(
    length: u32,
    engine: E,
) -> Result<GradientMazeEnv<E>, EnvError> {
    gradient_maze_with(MazeConfig::new(length)?, engine)
}

/// Build the gradient maze environment from a full configuration.
///
/// # Errors
///
/// Any error from [`MazeEnv::new`].
pub fn gradient_maze_with<E: SimEngine>(
    config: MazeConfig,
    engine: E,
) -> Result<GradientMazeEnv<E>, EnvError> {
    MazeEnv::new(config, engine, GradientMaze::new(), GradientMazeShaper::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradmaze_core::{ConfigError, EngineError, EngineOptions, InfoValue, ObsShape};
    use gradmaze_test_utils::MockEngine;

    fn env() -> GradientMazeEnv<MockEngine> {
        gradient_maze(12, MockEngine::new()).unwrap()
    }

    #[test]
    fn new_configures_engine() {
        let options = EngineOptions {
            obs_width: 32,
            obs_height: 24,
            ..EngineOptions::default()
        };
        let config = MazeConfig::with_engine_options(4, options).unwrap();
        let env = gradient_maze_with(config, MockEngine::new()).unwrap();
        assert_eq!(env.engine().options().obs_width, 32);
        assert_eq!(env.engine().options().max_episode_steps, 100);
        assert_eq!(env.observation_space().shape(), ObsShape::new(24, 32));
    }

    #[test]
    fn short_length_is_fatal() {
        let err = gradient_maze(1, MockEngine::new()).unwrap_err();
        assert_eq!(
            err,
            EnvError::Config(ConfigError::LengthTooShort { length: 1, min: 2 })
        );
    }

    #[test]
    fn step_before_reset_requires_reset() {
        let mut env = env();
        assert_eq!(env.step(Action::MoveForward), Err(EnvError::ResetRequired));
        assert!(env.engine().actions().is_empty());
    }

    #[test]
    fn reset_builds_five_rooms() {
        let mut env = env();
        let (obs, info) = env.reset(Some(1)).unwrap();
        assert_eq!(obs.shape(), env.observation_space().shape());
        assert_eq!(env.engine().rooms().len(), 5);
        assert_eq!(info.get("episode"), Some(&InfoValue::Int(1)));
        assert!(env.in_episode());
    }

    #[test]
    fn invalid_index_never_reaches_engine() {
        let mut env = env();
        env.reset(None).unwrap();
        assert_eq!(
            env.step_index(3),
            Err(EnvError::Engine(EngineError::InvalidAction { index: 3, size: 3 }))
        );
        assert!(env.engine().actions().is_empty());
        assert!(env.step_index(2).is_ok());
        assert_eq!(env.engine().actions(), &[Action::MoveForward]);
    }

    #[test]
    fn metrics_track_return() {
        let mut env = env();
        env.reset(None).unwrap();
        let mut total = 0.0;
        for _ in 0..5 {
            total += env.step(Action::TurnLeft).unwrap().reward;
        }
        assert_eq!(env.last_metrics().step_count, 5);
        assert!((env.last_metrics().episode_return - total).abs() < 1e-12);
        assert!((env.episode_return() - total).abs() < 1e-12);

        env.reset(None).unwrap();
        assert_eq!(env.episode_return(), 0.0);
        assert_eq!(env.last_metrics(), &StepMetrics::default());
    }

    #[test]
    fn debug_names_collaborators() {
        let text = format!("{:?}", env());
        assert!(text.contains("GradientMaze"));
        assert!(text.contains("GradientMazeShaper"));
    }
}
