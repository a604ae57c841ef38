//! interval-scroller: headless circular value picker engine.
//!
//! A field renders five slots around an active hour or minute value and
//! steps through them with drag, wheel, press-and-hold auto-repeat and
//! release inertia. Hosts forward input and advance a virtual clock; the
//! engine owns every timer and listener so a field can be torn down cleanly.

pub mod api;
pub mod container;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{IntervalPicker, IntervalScroller, ScrollerConfig, StepOutcome};
pub use error::{ScrollerError, ScrollerResult};
