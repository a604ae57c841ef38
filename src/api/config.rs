use serde::{Deserialize, Serialize};

use crate::error::{ScrollerError, ScrollerResult};

/// Tuning for a scroll field.
///
/// One coherent parameter set drives drag, wheel, auto-repeat and inertia.
/// The type is serializable so hosts can keep tuning in a config file; every
/// field falls back to its default when missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollerConfig {
    /// Transition duration at speed factor 1.
    #[serde(default = "default_base_duration_ms")]
    pub base_duration_ms: f64,
    /// Floor for transition durations at high speed factors.
    #[serde(default = "default_min_duration_ms")]
    pub min_duration_ms: f64,
    /// Extra delay after the transition before hidden slots are restaged.
    #[serde(default = "default_settle_buffer_ms")]
    pub settle_buffer_ms: f64,
    /// Minimum gap between two committed steps.
    #[serde(default = "default_min_step_interval_ms")]
    pub min_step_interval_ms: f64,
    /// Move delta (px) a drag event must exceed to step.
    #[serde(default = "default_drag_threshold_px")]
    pub drag_threshold_px: f64,
    /// Touch moves below this delta (px) are treated as jitter.
    #[serde(default = "default_touch_dead_zone_px")]
    pub touch_dead_zone_px: f64,
    /// EMA weight of the newest velocity sample, in `(0, 1]`.
    #[serde(default = "default_velocity_smoothing")]
    pub velocity_smoothing: f64,
    /// Release velocity is discarded when the last move is older than this.
    #[serde(default = "default_velocity_stale_ms")]
    pub velocity_stale_ms: f64,
    /// Velocity (px/s) per unit of drag speed factor.
    #[serde(default = "default_drag_speed_divisor")]
    pub drag_speed_divisor: f64,
    #[serde(default = "default_drag_speed_time_constant_ms")]
    pub drag_speed_time_constant_ms: f64,
    /// Release velocity (px/s) required to start inertia.
    #[serde(default = "default_inertia_velocity_threshold")]
    pub inertia_velocity_threshold: f64,
    /// Velocity (px/s) per unit of initial inertia speed.
    #[serde(default = "default_inertia_speed_divisor")]
    pub inertia_speed_divisor: f64,
    /// Multiplicative damping applied per reference frame, in `(0, 1)`.
    #[serde(default = "default_inertia_deceleration")]
    pub inertia_deceleration: f64,
    #[serde(default = "default_inertia_frame_ms")]
    pub inertia_frame_ms: f64,
    /// Inertia stops once its speed drops below this.
    #[serde(default = "default_inertia_min_speed")]
    pub inertia_min_speed: f64,
    #[serde(default = "default_max_speed_factor")]
    pub max_speed_factor: f64,
    /// Wheel delta per unit of wheel speed factor.
    #[serde(default = "default_wheel_delta_divisor")]
    pub wheel_delta_divisor: f64,
    #[serde(default = "default_auto_repeat_initial_interval_ms")]
    pub auto_repeat_initial_interval_ms: f64,
    #[serde(default = "default_auto_repeat_min_interval_ms")]
    pub auto_repeat_min_interval_ms: f64,
    /// Exponent of the held-seconds acceleration curve.
    #[serde(default = "default_auto_repeat_acceleration_exponent")]
    pub auto_repeat_acceleration_exponent: f64,
    /// Height ratio of the top and bottom press-and-hold zones, in `[0, 0.5]`.
    #[serde(default = "default_edge_zone_ratio")]
    pub edge_zone_ratio: f64,
    /// Still touch hold after a drag step that promotes into auto-repeat.
    #[serde(default = "default_continuous_hold_delay_ms")]
    pub continuous_hold_delay_ms: f64,
    /// Touch-starts are ignored for this long after a committed step.
    #[serde(default = "default_touch_cooldown_ms")]
    pub touch_cooldown_ms: f64,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            base_duration_ms: default_base_duration_ms(),
            min_duration_ms: default_min_duration_ms(),
            settle_buffer_ms: default_settle_buffer_ms(),
            min_step_interval_ms: default_min_step_interval_ms(),
            drag_threshold_px: default_drag_threshold_px(),
            touch_dead_zone_px: default_touch_dead_zone_px(),
            velocity_smoothing: default_velocity_smoothing(),
            velocity_stale_ms: default_velocity_stale_ms(),
            drag_speed_divisor: default_drag_speed_divisor(),
            drag_speed_time_constant_ms: default_drag_speed_time_constant_ms(),
            inertia_velocity_threshold: default_inertia_velocity_threshold(),
            inertia_speed_divisor: default_inertia_speed_divisor(),
            inertia_deceleration: default_inertia_deceleration(),
            inertia_frame_ms: default_inertia_frame_ms(),
            inertia_min_speed: default_inertia_min_speed(),
            max_speed_factor: default_max_speed_factor(),
            wheel_delta_divisor: default_wheel_delta_divisor(),
            auto_repeat_initial_interval_ms: default_auto_repeat_initial_interval_ms(),
            auto_repeat_min_interval_ms: default_auto_repeat_min_interval_ms(),
            auto_repeat_acceleration_exponent: default_auto_repeat_acceleration_exponent(),
            edge_zone_ratio: default_edge_zone_ratio(),
            continuous_hold_delay_ms: default_continuous_hold_delay_ms(),
            touch_cooldown_ms: default_touch_cooldown_ms(),
        }
    }
}

impl ScrollerConfig {
    /// Sets base and minimum transition durations.
    #[must_use]
    pub fn with_durations(mut self, base_duration_ms: f64, min_duration_ms: f64) -> Self {
        self.base_duration_ms = base_duration_ms;
        self.min_duration_ms = min_duration_ms;
        self
    }

    #[must_use]
    pub fn with_settle_buffer_ms(mut self, settle_buffer_ms: f64) -> Self {
        self.settle_buffer_ms = settle_buffer_ms;
        self
    }

    #[must_use]
    pub fn with_min_step_interval_ms(mut self, min_step_interval_ms: f64) -> Self {
        self.min_step_interval_ms = min_step_interval_ms;
        self
    }

    /// Sets drag step threshold and touch jitter dead-zone.
    #[must_use]
    pub fn with_drag_thresholds(mut self, drag_threshold_px: f64, touch_dead_zone_px: f64) -> Self {
        self.drag_threshold_px = drag_threshold_px;
        self.touch_dead_zone_px = touch_dead_zone_px;
        self
    }

    /// Sets inertia start threshold and per-frame damping.
    #[must_use]
    pub fn with_inertia(
        mut self,
        velocity_threshold: f64,
        deceleration: f64,
        min_speed: f64,
    ) -> Self {
        self.inertia_velocity_threshold = velocity_threshold;
        self.inertia_deceleration = deceleration;
        self.inertia_min_speed = min_speed;
        self
    }

    #[must_use]
    pub fn with_max_speed_factor(mut self, max_speed_factor: f64) -> Self {
        self.max_speed_factor = max_speed_factor;
        self
    }

    #[must_use]
    pub fn with_edge_zone_ratio(mut self, edge_zone_ratio: f64) -> Self {
        self.edge_zone_ratio = edge_zone_ratio;
        self
    }

    #[must_use]
    pub fn with_touch_cooldown_ms(mut self, touch_cooldown_ms: f64) -> Self {
        self.touch_cooldown_ms = touch_cooldown_ms;
        self
    }

    /// Total time the animation lock is held for a step at `speed_factor`.
    #[must_use]
    pub fn lock_duration_ms(self, speed_factor: f64) -> f64 {
        crate::interaction::motion::transition_duration_ms(
            self.base_duration_ms,
            self.min_duration_ms,
            speed_factor,
        ) + self.settle_buffer_ms
    }

    pub fn validate(self) -> ScrollerResult<()> {
        require_positive("base_duration_ms", self.base_duration_ms)?;
        require_positive("min_duration_ms", self.min_duration_ms)?;
        require_non_negative("settle_buffer_ms", self.settle_buffer_ms)?;
        require_non_negative("min_step_interval_ms", self.min_step_interval_ms)?;
        require_non_negative("drag_threshold_px", self.drag_threshold_px)?;
        require_non_negative("touch_dead_zone_px", self.touch_dead_zone_px)?;
        require_positive("velocity_stale_ms", self.velocity_stale_ms)?;
        require_positive("drag_speed_divisor", self.drag_speed_divisor)?;
        require_positive(
            "drag_speed_time_constant_ms",
            self.drag_speed_time_constant_ms,
        )?;
        require_non_negative(
            "inertia_velocity_threshold",
            self.inertia_velocity_threshold,
        )?;
        require_positive("inertia_speed_divisor", self.inertia_speed_divisor)?;
        require_positive("inertia_frame_ms", self.inertia_frame_ms)?;
        require_positive("inertia_min_speed", self.inertia_min_speed)?;
        require_positive("wheel_delta_divisor", self.wheel_delta_divisor)?;
        require_positive(
            "auto_repeat_initial_interval_ms",
            self.auto_repeat_initial_interval_ms,
        )?;
        require_positive(
            "auto_repeat_min_interval_ms",
            self.auto_repeat_min_interval_ms,
        )?;
        require_positive(
            "auto_repeat_acceleration_exponent",
            self.auto_repeat_acceleration_exponent,
        )?;
        require_positive("continuous_hold_delay_ms", self.continuous_hold_delay_ms)?;
        require_non_negative("touch_cooldown_ms", self.touch_cooldown_ms)?;

        if !(self.velocity_smoothing > 0.0 && self.velocity_smoothing <= 1.0) {
            return Err(ScrollerError::InvalidConfig(
                "velocity_smoothing must be in (0, 1]".to_owned(),
            ));
        }
        if !(self.inertia_deceleration > 0.0 && self.inertia_deceleration < 1.0) {
            return Err(ScrollerError::InvalidConfig(
                "inertia_deceleration must be in (0, 1)".to_owned(),
            ));
        }
        if !self.max_speed_factor.is_finite() || self.max_speed_factor < 1.0 {
            return Err(ScrollerError::InvalidConfig(
                "max_speed_factor must be finite and >= 1".to_owned(),
            ));
        }
        if !(0.0..=0.5).contains(&self.edge_zone_ratio) {
            return Err(ScrollerError::InvalidConfig(
                "edge_zone_ratio must be in [0, 0.5]".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ScrollerResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ScrollerError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Parses and validates config from JSON.
    pub fn from_json_str(input: &str) -> ScrollerResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ScrollerError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn require_positive(name: &str, value: f64) -> ScrollerResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ScrollerError::InvalidConfig(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}

fn require_non_negative(name: &str, value: f64) -> ScrollerResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ScrollerError::InvalidConfig(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}

fn default_base_duration_ms() -> f64 {
    350.0
}

fn default_min_duration_ms() -> f64 {
    50.0
}

fn default_settle_buffer_ms() -> f64 {
    50.0
}

fn default_min_step_interval_ms() -> f64 {
    10.0
}

fn default_drag_threshold_px() -> f64 {
    2.0
}

fn default_touch_dead_zone_px() -> f64 {
    5.0
}

fn default_velocity_smoothing() -> f64 {
    0.2
}

fn default_velocity_stale_ms() -> f64 {
    100.0
}

fn default_drag_speed_divisor() -> f64 {
    80.0
}

fn default_drag_speed_time_constant_ms() -> f64 {
    100.0
}

fn default_inertia_velocity_threshold() -> f64 {
    50.0
}

fn default_inertia_speed_divisor() -> f64 {
    100.0
}

fn default_inertia_deceleration() -> f64 {
    0.95
}

fn default_inertia_frame_ms() -> f64 {
    16.0
}

fn default_inertia_min_speed() -> f64 {
    0.5
}

fn default_max_speed_factor() -> f64 {
    4.0
}

fn default_wheel_delta_divisor() -> f64 {
    5.0
}

fn default_auto_repeat_initial_interval_ms() -> f64 {
    200.0
}

fn default_auto_repeat_min_interval_ms() -> f64 {
    50.0
}

fn default_auto_repeat_acceleration_exponent() -> f64 {
    1.5
}

fn default_edge_zone_ratio() -> f64 {
    1.0 / 3.0
}

fn default_continuous_hold_delay_ms() -> f64 {
    300.0
}

fn default_touch_cooldown_ms() -> f64 {
    150.0
}
