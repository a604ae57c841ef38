use serde::{Deserialize, Serialize};

use crate::error::{ScrollerError, ScrollerResult};

/// Number of slots rendered by a ring, including the two hidden buffers.
pub const RING_SIZE: usize = 5;

/// Unit edited by a scroll field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    Hours,
    Minutes,
}

impl UnitKind {
    #[must_use]
    pub const fn range(self) -> IntervalRange {
        match self {
            Self::Hours => IntervalRange::HOURS,
            Self::Minutes => IntervalRange::MINUTES,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hours => "hours",
            Self::Minutes => "minutes",
        }
    }
}

/// Closed integer range `[min, max]` with modular wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntervalRange {
    min: i32,
    max: i32,
}

impl IntervalRange {
    pub const HOURS: Self = Self { min: 0, max: 23 };
    pub const MINUTES: Self = Self { min: 0, max: 59 };

    pub fn new(min: i32, max: i32) -> ScrollerResult<Self> {
        if min > max {
            return Err(ScrollerError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(self) -> i32 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> i32 {
        self.max
    }

    /// Number of distinct values in the range.
    #[must_use]
    pub const fn span(self) -> i64 {
        self.max as i64 - self.min as i64 + 1
    }

    #[must_use]
    pub const fn contains(self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Wraps `value` into `[min, max]`.
    ///
    /// Values below `min` continue downward from `max`; values above `max`
    /// continue upward from `min`. `bounded_value(min - 1) == max`.
    #[must_use]
    pub fn bounded_value(self, value: i32) -> i32 {
        self.wrap(i64::from(value))
    }

    /// Returns `[v-2, v-1, v, v+1, v+2]`, each wrapped into the range.
    ///
    /// Index order matches `SlotTag::ORDER`.
    #[must_use]
    pub fn compute_neighbors(self, active: i32) -> [i32; RING_SIZE] {
        let active = i64::from(active);
        [-2_i64, -1, 0, 1, 2].map(|offset| self.wrap(active + offset))
    }

    fn wrap(self, value: i64) -> i32 {
        let min = i64::from(self.min);
        let offset = (value - min).rem_euclid(self.span());
        // min + offset lies in [min, max], both of which are i32.
        i32::try_from(min + offset).unwrap_or(self.min)
    }
}

impl Default for IntervalRange {
    fn default() -> Self {
        Self::HOURS
    }
}
