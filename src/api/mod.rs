mod auto_repeat;
mod config;
mod inertia;
mod input_controller;
mod observer_registry;
mod picker;
mod scroller;
mod step_engine;
mod timer_dispatch;

pub use config::ScrollerConfig;
pub use picker::{IntervalPicker, parse_hh_mm};
pub use scroller::{AnimationLock, IntervalScroller};
pub use step_engine::{StepOutcome, StepRejection};
