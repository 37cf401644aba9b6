//! Action and observation spaces.

use gradmaze_core::{Action, ObsShape, Observation};
use rand::Rng;

use crate::error::SpaceError;

/// A set of valid values with seeded sampling.
pub trait Space {
    /// Type of the members of the space.
    type Element;

    /// Whether `x` is a member of the space.
    fn contains(&self, x: &Self::Element) -> bool;

    /// Draw a member uniformly at random.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Element;
}

// ── ActionSpace ────────────────────────────────────────────────────

/// Discrete space over the three movement actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionSpace {
    n: usize,
}

impl ActionSpace {
    /// The `{turn_left, turn_right, move_forward}` action space.
    pub fn new() -> Self {
        Self { n: Action::COUNT }
    }

    /// Number of members.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Whether `index` names a member.
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.n
    }

    /// Members in index order.
    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        Action::ALL.iter().copied().take(self.n)
    }
}

impl Default for ActionSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl Space for ActionSpace {
    type Element = Action;

    fn contains(&self, x: &Action) -> bool {
        self.contains_index(x.index())
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Action {
        Action::ALL[rng.random_range(0..self.n)]
    }
}

// ── ObservationSpace ───────────────────────────────────────────────

/// Box space of RGB frames with byte values in `0..=255`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObservationSpace {
    /// Black frame of the space's shape; samples are filled in place.
    template: Observation,
}

impl ObservationSpace {
    /// Lowest value of any element.
    pub const LOW: u8 = 0;
    /// Highest value of any element.
    pub const HIGH: u8 = u8::MAX;

    /// Create an observation space.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::EmptyObservationSpace`] if either dimension is zero.
    pub fn new(shape: ObsShape) -> Result<Self, SpaceError> {
        let template = Observation::filled(shape, Self::LOW)
            .map_err(|_| SpaceError::EmptyObservationSpace { shape })?;
        Ok(Self { template })
    }

    /// Frame dimensions.
    pub fn shape(&self) -> ObsShape {
        self.template.shape()
    }
}

impl Space for ObservationSpace {
    type Element = Observation;

    fn contains(&self, x: &Observation) -> bool {
        x.shape() == self.shape()
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Observation {
        let mut obs = self.template.clone();
        rng.fill_bytes(obs.data_mut());
        obs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn action_space_has_three_members() {
        let space = ActionSpace::new();
        assert_eq!(space.n(), 3);
        let actions: Vec<Action> = space.actions().collect();
        assert_eq!(
            actions,
            vec![Action::TurnLeft, Action::TurnRight, Action::MoveForward]
        );
        assert!(space.contains_index(2));
        assert!(!space.contains_index(3));
    }

    #[test]
    fn action_sampling_is_seeded() {
        let space = ActionSpace::new();
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        let xs: Vec<Action> = (0..32).map(|_| space.sample(&mut a)).collect();
        let ys: Vec<Action> = (0..32).map(|_| space.sample(&mut b)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|x| space.contains(x)));
    }

    #[test]
    fn observation_space_rejects_empty_shape() {
        assert_eq!(
            ObservationSpace::new(ObsShape::new(0, 80)),
            Err(SpaceError::EmptyObservationSpace {
                shape: ObsShape::new(0, 80)
            })
        );
    }

    #[test]
    fn observation_membership_is_by_shape() {
        let space = ObservationSpace::new(ObsShape::new(60, 80)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let obs = space.sample(&mut rng);
        assert!(space.contains(&obs));
        let other = Observation::filled(ObsShape::new(80, 60), 0).unwrap();
        assert!(!space.contains(&other));
    }

    #[test]
    fn observation_sampling_is_seeded() {
        let space = ObservationSpace::new(ObsShape::new(4, 4)).unwrap();
        let a = space.sample(&mut ChaCha8Rng::seed_from_u64(3));
        let b = space.sample(&mut ChaCha8Rng::seed_from_u64(3));
        assert_eq!(a, b);
        assert_eq!(a.data().len(), 4 * 4 * 3);
        assert!(a.data().iter().any(|&v| v != ObservationSpace::LOW));
        // The template stays black between samples.
        assert_eq!(space.sample(&mut ChaCha8Rng::seed_from_u64(3)), a);
    }
}
