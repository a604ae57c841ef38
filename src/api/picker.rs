use chrono::NaiveTime;
use tracing::debug;

use crate::container::SlotContainer;
use crate::core::{UnitKind, format_value, parse_slot_text};
use crate::error::{ScrollerError, ScrollerResult};

use super::{IntervalScroller, ScrollerConfig};

/// Splits `"HH:MM"` into hour and minute components.
///
/// Text without a colon is rejected. A component without leading digits
/// degrades to `0`; numbers are returned as written and wrap later when
/// seeded into a field.
pub fn parse_hh_mm(text: &str) -> ScrollerResult<(i32, i32)> {
    let Some((hours, minutes)) = text.trim().split_once(':') else {
        return Err(ScrollerError::InvalidTimeText(format!(
            "expected `HH:MM`, got `{text}`"
        )));
    };
    Ok((
        parse_slot_text(hours).unwrap_or(0),
        parse_slot_text(minutes).unwrap_or(0),
    ))
}

/// Hours + minutes pair edited together, as on a time-interval dialog.
///
/// `open` seeds both containers from an `"HH:MM"` string; `close` destroys
/// both fields. The picker knows nothing about save/cancel semantics: the
/// host reads `time()` or `formatted()` when it decides to commit.
pub struct IntervalPicker<C: SlotContainer> {
    hours: IntervalScroller<C>,
    minutes: IntervalScroller<C>,
    closed: bool,
}

impl<C: SlotContainer> IntervalPicker<C> {
    /// Opens a picker at `initial` (`"HH:MM"`).
    ///
    /// `make_container` receives each unit with the two-digit text its active
    /// marker must show, and returns the container for that field.
    pub fn open<F>(initial: &str, config: ScrollerConfig, mut make_container: F) -> ScrollerResult<Self>
    where
        F: FnMut(UnitKind, String) -> C,
    {
        let (hours, minutes) = parse_hh_mm(initial)?;
        let hours = IntervalScroller::new(
            make_container(UnitKind::Hours, format_value(hours)),
            UnitKind::Hours,
            config,
        )?;
        let minutes = IntervalScroller::new(
            make_container(UnitKind::Minutes, format_value(minutes)),
            UnitKind::Minutes,
            config,
        )?;
        debug!(initial, "opened interval picker");
        Ok(Self {
            hours,
            minutes,
            closed: false,
        })
    }

    #[must_use]
    pub fn hours(&self) -> &IntervalScroller<C> {
        &self.hours
    }

    pub fn hours_mut(&mut self) -> &mut IntervalScroller<C> {
        &mut self.hours
    }

    #[must_use]
    pub fn minutes(&self) -> &IntervalScroller<C> {
        &self.minutes
    }

    pub fn minutes_mut(&mut self) -> &mut IntervalScroller<C> {
        &mut self.minutes
    }

    /// Fires due timers on both fields.
    pub fn advance(&mut self, now_ms: f64) -> usize {
        self.hours.advance(now_ms) + self.minutes.advance(now_ms)
    }

    /// Committed value as a time of day.
    pub fn time(&self) -> ScrollerResult<NaiveTime> {
        let hours = self.hours.value();
        let minutes = self.minutes.value();
        u32::try_from(hours)
            .ok()
            .zip(u32::try_from(minutes).ok())
            .and_then(|(h, m)| NaiveTime::from_hms_opt(h, m, 0))
            .ok_or_else(|| {
                ScrollerError::InvalidTimeText(format!("{hours}:{minutes} is not a time of day"))
            })
    }

    /// Committed value as `"HH:MM"`.
    #[must_use]
    pub fn formatted(&self) -> String {
        format!(
            "{}:{}",
            format_value(self.hours.value()),
            format_value(self.minutes.value())
        )
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Destroys both fields. Returns `false` when already closed.
    pub fn close(&mut self) -> bool {
        if self.closed {
            return false;
        }
        self.hours.destroy();
        self.minutes.destroy();
        self.closed = true;
        debug!(value = %self.formatted(), "closed interval picker");
        true
    }
}
