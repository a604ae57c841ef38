use serde::{Deserialize, Serialize};

use crate::core::range::{IntervalRange, RING_SIZE};
use crate::core::types::Direction;

/// Semantic position of a slot inside the ring.
///
/// Hosts key their transitions by tag, so rotating tags (rather than
/// rewriting values) keeps in-flight animations continuous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotTag {
    PrevHidden,
    Prev,
    Active,
    Next,
    NextHidden,
}

impl SlotTag {
    /// Tags in construction order, matching `IntervalRange::compute_neighbors`.
    pub const ORDER: [Self; RING_SIZE] = [
        Self::PrevHidden,
        Self::Prev,
        Self::Active,
        Self::Next,
        Self::NextHidden,
    ];

    /// Offset of this tag's value relative to the active value.
    #[must_use]
    pub const fn offset(self) -> i32 {
        match self {
            Self::PrevHidden => -2,
            Self::Prev => -1,
            Self::Active => 0,
            Self::Next => 1,
            Self::NextHidden => 2,
        }
    }

    /// Class name conventionally used by markup hosts for this tag.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::PrevHidden => "is_prev_hidden",
            Self::Prev => "is_prev",
            Self::Active => "is_active",
            Self::Next => "is_next",
            Self::NextHidden => "is_next_hidden",
        }
    }

    /// Tag this slot carries after one step in `direction`.
    ///
    /// `Down` pulls `Next` into the active position and recycles the
    /// top hidden slot to the bottom; `Up` is its exact inverse.
    #[must_use]
    pub const fn rotated(self, direction: Direction) -> Self {
        match direction {
            Direction::Down => match self {
                Self::PrevHidden => Self::NextHidden,
                Self::Prev => Self::PrevHidden,
                Self::Active => Self::Prev,
                Self::Next => Self::Active,
                Self::NextHidden => Self::Next,
            },
            Direction::Up => match self {
                Self::PrevHidden => Self::Prev,
                Self::Prev => Self::Active,
                Self::Active => Self::Next,
                Self::Next => Self::NextHidden,
                Self::NextHidden => Self::PrevHidden,
            },
            Direction::None => self,
        }
    }
}

/// One rendered slot: a value and the tag it currently carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub value: i32,
    pub tag: SlotTag,
}

impl Slot {
    /// Zero-padded two-digit display text.
    #[must_use]
    pub fn text(self) -> String {
        format_value(self.value)
    }
}

#[must_use]
pub fn format_value(value: i32) -> String {
    format!("{value:02}")
}

/// Parses the leading integer of a slot's text, ignoring surrounding noise.
///
/// Returns `None` when no digits are found, e.g. for empty or non-numeric text.
#[must_use]
pub fn parse_slot_text(text: &str) -> Option<i32> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end]
        .bytes()
        .fold(0_i64, |acc, b| {
            (acc * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1)
        });
    let signed = if negative { -magnitude } else { magnitude };
    i32::try_from(signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX))).ok()
}

/// Five-slot circular carousel over an `IntervalRange`.
///
/// Slots keep their physical position; only their tags rotate. Hidden slots
/// are re-staged after a transition settles via `refresh_hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring {
    range: IntervalRange,
    slots: [Slot; RING_SIZE],
}

impl Ring {
    #[must_use]
    pub fn new(range: IntervalRange, active: i32) -> Self {
        let values = range.compute_neighbors(range.bounded_value(active));
        let mut slots = [Slot {
            value: range.min(),
            tag: SlotTag::Active,
        }; RING_SIZE];
        for (slot, (value, tag)) in slots.iter_mut().zip(values.into_iter().zip(SlotTag::ORDER)) {
            *slot = Slot { value, tag };
        }
        Self { range, slots }
    }

    #[must_use]
    pub fn range(&self) -> IntervalRange {
        self.range
    }

    /// Slots in physical (container child) order.
    #[must_use]
    pub fn slots(&self) -> &[Slot; RING_SIZE] {
        &self.slots
    }

    #[must_use]
    pub fn slot(&self, tag: SlotTag) -> Slot {
        self.slots[self.position(tag)]
    }

    #[must_use]
    pub fn active(&self) -> i32 {
        self.slot(SlotTag::Active).value
    }

    /// Values ordered by tag (`PrevHidden` first), independent of slot position.
    #[must_use]
    pub fn values_by_tag(&self) -> [i32; RING_SIZE] {
        SlotTag::ORDER.map(|tag| self.slot(tag).value)
    }

    /// Rotates every slot's tag one position. Values are left untouched.
    ///
    /// Returns `false` for `Direction::None`.
    pub fn rotate(&mut self, direction: Direction) -> bool {
        if direction.is_none() {
            return false;
        }
        for slot in &mut self.slots {
            slot.tag = slot.tag.rotated(direction);
        }
        true
    }

    /// Re-stages both hidden slots two steps away from the active value.
    pub fn refresh_hidden(&mut self) {
        let neighbors = self.range.compute_neighbors(self.active());
        for slot in &mut self.slots {
            match slot.tag {
                SlotTag::PrevHidden => slot.value = neighbors[0],
                SlotTag::NextHidden => slot.value = neighbors[4],
                _ => {}
            }
        }
    }

    /// Whether every tag holds `compute_neighbors(active)` at its offset.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.values_by_tag() == self.range.compute_neighbors(self.active())
    }

    fn position(&self, tag: SlotTag) -> usize {
        // Rotation is a permutation, so every tag is always present exactly once.
        self.slots
            .iter()
            .position(|slot| slot.tag == tag)
            .unwrap_or(2)
    }
}
