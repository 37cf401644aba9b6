//! The discrete movement actions available to the agent.

use std::fmt;

use crate::error::EngineError;

/// Agent action: turn in place or move forward.
///
/// There is no strafing, no vertical movement, and no pickup/drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    /// Rotate counter-clockwise by the engine's turn step.
    TurnLeft = 0,
    /// Rotate clockwise by the engine's turn step.
    TurnRight = 1,
    /// Move along the facing direction by the engine's forward step.
    MoveForward = 2,
}

impl Action {
    /// Number of actions in the discrete action space.
    pub const COUNT: usize = 3;

    /// Every action, in index order.
    pub const ALL: [Action; Action::COUNT] =
        [Action::TurnLeft, Action::TurnRight, Action::MoveForward];

    /// The action's index in the discrete action space.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Snake-case action name.
    pub fn name(self) -> &'static str {
        match self {
            Action::TurnLeft => "turn_left",
            Action::TurnRight => "turn_right",
            Action::MoveForward => "move_forward",
        }
    }
}

impl TryFrom<usize> for Action {
    type Error = EngineError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Action::ALL
            .get(index)
            .copied()
            .ok_or(EngineError::InvalidAction {
                index,
                size: Action::COUNT,
            })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
