pub mod range;
pub mod ring;
pub mod types;

pub use range::{IntervalRange, RING_SIZE, UnitKind};
pub use ring::{Ring, Slot, SlotTag, format_value, parse_slot_text};
pub use types::Direction;
