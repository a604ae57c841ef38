//! Optional hooks layered on top of a field.
//!
//! Keep extensions observational and avoid coupling them into the step path.

pub mod observers;

pub use observers::{ScrollerContext, ScrollerEvent, ScrollerObserver};
