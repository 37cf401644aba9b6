//! Scriptable stand-in for the 3D simulation engine.
//!
//! Implements the full [`SimEngine`] lifecycle with simple planar
//! kinematics and no renderer: frames come from a script queue, falling
//! back to a uniform fill. Every world-mutation call is recorded.

use std::collections::VecDeque;

use gradmaze_core::{
    Action, AgentSpawn, EngineError, EngineOptions, Info, ObsShape, Observation, Point2,
    RoomHandle, RoomId, RoomSpec, SimEngine, StepResult, WorldBuilder,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Agent position and facing on the floor plan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentPose {
    pub pos: Point2,
    /// Facing angle in degrees, counter-clockwise from +X.
    pub heading_deg: f32,
}

impl AgentPose {
    /// Unit vector the agent faces. Rotating counter-clockwise from +X
    /// turns towards -Z.
    fn forward(&self) -> (f32, f32) {
        let rad = self.heading_deg.to_radians();
        (rad.cos(), -rad.sin())
    }
}

/// Mock implementation of [`SimEngine`].
pub struct MockEngine {
    options: EngineOptions,
    rng: ChaCha8Rng,
    in_episode: bool,
    episodes: u32,
    rooms: Vec<RoomSpec>,
    placements: Vec<(RoomHandle, AgentSpawn)>,
    agent: Option<AgentPose>,
    step_count: u32,
    actions: Vec<Action>,
    fill: u8,
    frames: VecDeque<Observation>,
    base_reward: f64,
    pinned_step_count: Option<u32>,
    fail_on_room: Option<usize>,
    terminate_after: Option<u32>,
}

impl MockEngine {
    /// Engine with default options, black frames, and zero base reward.
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(0),
            in_episode: false,
            episodes: 0,
            rooms: Vec::new(),
            placements: Vec::new(),
            agent: None,
            step_count: 0,
            actions: Vec::new(),
            fill: 0,
            frames: VecDeque::new(),
            base_reward: 0.0,
            pinned_step_count: None,
            fail_on_room: None,
            terminate_after: None,
        }
    }

    /// The error returned when the `index`-th room is set to fail.
    pub fn injected_room_error(index: usize) -> EngineError {
        EngineError::Backend {
            reason: format!("injected failure at room {index}"),
        }
    }

    // ── Scripting ─────────────────────────────────────────────────

    /// Value every channel of unscripted frames is filled with.
    pub fn set_fill(&mut self, value: u8) {
        self.fill = value;
    }

    /// Queue a frame to be returned by the next render.
    pub fn push_frame(&mut self, frame: Observation) {
        self.frames.push_back(frame);
    }

    /// Base reward returned by every step.
    pub fn set_base_reward(&mut self, reward: f64) {
        self.base_reward = reward;
    }

    /// Override the reported step count (and the truncation check).
    pub fn pin_step_count(&mut self, count: Option<u32>) {
        self.pinned_step_count = count;
    }

    /// Fail the `index`-th `add_rect_room` call of every episode.
    pub fn fail_on_room(&mut self, index: usize) {
        self.fail_on_room = Some(index);
    }

    /// Report `terminated` once this many steps have been taken.
    pub fn terminate_after(&mut self, steps: u32) {
        self.terminate_after = Some(steps);
    }

    // ── Inspection ────────────────────────────────────────────────

    /// Rooms created in the current episode, in order.
    pub fn rooms(&self) -> &[RoomSpec] {
        &self.rooms
    }

    /// Agent placements made in the current episode.
    pub fn placements(&self) -> &[(RoomHandle, AgentSpawn)] {
        &self.placements
    }

    /// Current agent pose, once placed.
    pub fn agent(&self) -> Option<AgentPose> {
        self.agent
    }

    /// Number of `begin_episode` calls.
    pub fn episodes(&self) -> u32 {
        self.episodes
    }

    /// Actions applied in the current episode.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Options applied by the last `configure` call.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    // ── Internals ─────────────────────────────────────────────────

    fn require_episode(&self) -> Result<(), EngineError> {
        if self.in_episode {
            Ok(())
        } else {
            Err(EngineError::NoEpisode)
        }
    }

    fn render(&mut self) -> Result<Observation, EngineError> {
        match self.frames.pop_front() {
            Some(frame) => Ok(frame),
            None => Observation::filled(self.options.obs_shape(), self.fill),
        }
    }

    fn walkable(&self, p: Point2) -> bool {
        self.rooms.iter().any(|r| r.rect.contains_point(p))
    }

    fn apply(&mut self, action: Action) {
        let turn = self.options.turn_step_deg;
        let forward = self.options.forward_step;
        let Some(mut pose) = self.agent else {
            return;
        };
        match action {
            Action::TurnLeft => pose.heading_deg = (pose.heading_deg + turn).rem_euclid(360.0),
            Action::TurnRight => pose.heading_deg = (pose.heading_deg - turn).rem_euclid(360.0),
            Action::MoveForward => {
                let (dx, dz) = pose.forward();
                let next = Point2::new(pose.pos.x + dx * forward, pose.pos.z + dz * forward);
                if self.walkable(next) {
                    pose.pos = next;
                }
            }
        }
        self.agent = Some(pose);
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldBuilder for MockEngine {
    fn add_rect_room(&mut self, room: &RoomSpec) -> Result<RoomHandle, EngineError> {
        self.require_episode()?;
        if self.fail_on_room == Some(self.rooms.len()) {
            return Err(Self::injected_room_error(self.rooms.len()));
        }
        room.rect
            .validate()
            .map_err(|reason| EngineError::InvalidGeometry { reason })?;
        self.rooms.push(room.clone());
        Ok(RoomHandle::new(RoomId(self.rooms.len() as u32 - 1)))
    }

    fn place_agent(&mut self, room: RoomHandle, spawn: &AgentSpawn) -> Result<(), EngineError> {
        self.require_episode()?;
        let target = self
            .rooms
            .get(room.id.0 as usize)
            .ok_or(EngineError::UnknownRoom { room: room.id })?;
        spawn
            .rect
            .validate()
            .map_err(|reason| EngineError::InvalidGeometry { reason })?;
        if !target.rect.contains_rect(&spawn.rect) {
            return Err(EngineError::SpawnOutsideRoom { room: room.id });
        }
        let r = spawn.rect;
        let x = if r.width() > 0.0 {
            self.rng.random_range(r.min_x..=r.max_x)
        } else {
            r.min_x
        };
        let z = if r.depth() > 0.0 {
            self.rng.random_range(r.min_z..=r.max_z)
        } else {
            r.min_z
        };
        let heading_deg = self.rng.random_range(0.0f32..360.0);
        self.placements.push((room, *spawn));
        self.agent = Some(AgentPose {
            pos: Point2::new(x, z),
            heading_deg,
        });
        Ok(())
    }
}

impl SimEngine for MockEngine {
    fn configure(&mut self, options: &EngineOptions) -> Result<(), EngineError> {
        options.validate().map_err(|e| EngineError::Backend {
            reason: e.to_string(),
        })?;
        self.options = options.clone();
        Ok(())
    }

    fn begin_episode(&mut self, seed: Option<u64>) -> Result<(), EngineError> {
        if let Some(seed) = seed {
            self.rng = ChaCha8Rng::seed_from_u64(seed);
        }
        self.in_episode = true;
        self.episodes += 1;
        self.rooms.clear();
        self.placements.clear();
        self.agent = None;
        self.step_count = 0;
        self.actions.clear();
        Ok(())
    }

    fn finish_episode(&mut self) -> Result<Observation, EngineError> {
        self.require_episode()?;
        if self.agent.is_none() {
            return Err(EngineError::AgentNotPlaced);
        }
        self.render()
    }

    fn step(&mut self, action: Action) -> Result<StepResult, EngineError> {
        self.require_episode()?;
        if self.agent.is_none() {
            return Err(EngineError::AgentNotPlaced);
        }
        self.apply(action);
        self.actions.push(action);
        self.step_count += 1;

        let count = self.step_count();
        let observation = self.render()?;
        let mut info = Info::new();
        info.insert("step_count", count);
        if let Some(pose) = self.agent {
            info.insert("agent_x", pose.pos.x);
            info.insert("agent_z", pose.pos.z);
        }
        Ok(StepResult {
            observation,
            reward: self.base_reward,
            terminated: self.terminate_after.is_some_and(|n| self.step_count >= n),
            truncated: count >= self.options.max_episode_steps,
            info,
        })
    }

    fn step_count(&self) -> u32 {
        self.pinned_step_count.unwrap_or(self.step_count)
    }

    fn obs_shape(&self) -> ObsShape {
        self.options.obs_shape()
    }
}
