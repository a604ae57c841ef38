//! Pure speed/duration math shared by drag, wheel, auto-repeat and inertia.
//!
//! Every speed factor produced here is `>= 1` except inertia speeds, which
//! decay below `1` on their way to the stop threshold.

/// Exponential moving average of the instantaneous drag velocity, in px/s.
///
/// A zero or negative `elapsed_ms` is treated as one millisecond.
#[must_use]
pub fn smoothed_velocity(previous: f64, delta_px: f64, elapsed_ms: f64, alpha: f64) -> f64 {
    let elapsed_ms = if elapsed_ms > 0.0 { elapsed_ms } else { 1.0 };
    let instantaneous = delta_px / elapsed_ms * 1000.0;
    alpha * instantaneous + (1.0 - alpha) * previous
}

/// Speed factor for a drag step.
///
/// The velocity-derived base saturates with the time since the previous move,
/// so bursts of closely spaced events do not jump straight to the cap.
#[must_use]
pub fn drag_speed_factor(
    velocity_px_per_sec: f64,
    elapsed_ms: f64,
    divisor: f64,
    time_constant_ms: f64,
    max_speed_factor: f64,
) -> f64 {
    let cap = max_speed_factor.max(1.0);
    let base = (velocity_px_per_sec.abs() / divisor).min(cap);
    let saturation = 1.0 - (-elapsed_ms.max(0.0) / time_constant_ms).exp();
    (base * saturation).clamp(1.0, cap)
}

#[must_use]
pub fn wheel_speed_factor(delta_y: f64, divisor: f64, max_speed_factor: f64) -> f64 {
    (delta_y.abs() / divisor).clamp(1.0, max_speed_factor.max(1.0))
}

/// `max(min, base / max(1, speed))`.
#[must_use]
pub fn transition_duration_ms(base_ms: f64, min_ms: f64, speed_factor: f64) -> f64 {
    (base_ms / speed_factor.max(1.0)).max(min_ms)
}

/// Power-curve acceleration on the number of seconds a hold has lasted.
#[must_use]
pub fn hold_speed_factor(held_ms: f64, exponent: f64, max_speed_factor: f64) -> f64 {
    let held_secs = held_ms.max(0.0) / 1000.0;
    (1.0 + held_secs.powf(exponent)).clamp(1.0, max_speed_factor.max(1.0))
}

#[must_use]
pub fn auto_repeat_interval_ms(initial_ms: f64, min_ms: f64, speed_factor: f64) -> f64 {
    (initial_ms / speed_factor.max(1.0)).max(min_ms)
}

#[must_use]
pub fn inertia_initial_speed(velocity_px_per_sec: f64, divisor: f64, max_speed_factor: f64) -> f64 {
    (velocity_px_per_sec.abs() / divisor).min(max_speed_factor.max(1.0))
}

/// Applies `deceleration` once per `frame_ms` of elapsed time.
#[must_use]
pub fn damped_speed(speed: f64, deceleration: f64, elapsed_ms: f64, frame_ms: f64) -> f64 {
    speed * deceleration.powf(elapsed_ms.max(0.0) / frame_ms)
}

/// Upper bound on inertia frames before the speed drops below `min_speed`,
/// assuming frames at least one reference frame apart.
#[must_use]
pub fn inertia_frame_bound(initial_speed: f64, min_speed: f64, deceleration: f64) -> u32 {
    if initial_speed < min_speed {
        return 1;
    }
    let frames = (min_speed / initial_speed).ln() / deceleration.ln();
    // `frames` is finite and small for validated tuning values.
    frames.ceil() as u32 + 1
}
