use serde::{Deserialize, Serialize};

/// Scroll direction of a single ring step.
///
/// `Down` advances toward the next value (incrementing), `Up` toward the
/// previous one (decrementing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    #[default]
    None,
}

impl Direction {
    /// Maps a vertical pointer/wheel delta to a direction.
    ///
    /// Positive deltas (pointer moving down, wheel scrolling down) map to `Down`.
    #[must_use]
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Down
        } else if delta < 0.0 {
            Self::Up
        } else {
            Self::None
        }
    }

    /// Value offset applied to the active slot by one step in this direction.
    #[must_use]
    pub const fn offset(self) -> i32 {
        match self {
            Self::Up => -1,
            Self::Down => 1,
            Self::None => 0,
        }
    }

    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::None => Self::None,
        }
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}
