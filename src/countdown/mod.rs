//! Countdown arithmetic against a fixed target moment.
//!
//! Everything here is a pure function of two local timestamps. The caller owns
//! any "reached" state; [`compute_countdown`] only reports what the clock says.
mod clock;
mod target;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use target::TargetMoment;

use chrono::NaiveDateTime;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

pub const DEFAULT_EVENT_NAME: &str = "birthday";
pub const DEFAULT_CELEBRATION_TEXT: &str = "🎉 HAPPY BIRTHDAY! 🎉";

/// Wording used when formatting countdown text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownLabels {
    pub event_name: String,
    pub celebration_text: String,
}

impl Default for CountdownLabels {
    fn default() -> Self {
        Self {
            event_name: DEFAULT_EVENT_NAME.to_owned(),
            celebration_text: DEFAULT_CELEBRATION_TEXT.to_owned(),
        }
    }
}

/// Whole-second decomposition of a positive remaining duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Remaining {
    #[must_use]
    pub const fn from_seconds(total: u64) -> Self {
        let days = total / SECONDS_PER_DAY;
        let rest = total % SECONDS_PER_DAY;
        Self {
            days,
            hours: rest / SECONDS_PER_HOUR,
            minutes: (rest % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: rest % SECONDS_PER_MINUTE,
        }
    }

    #[must_use]
    pub const fn total_seconds(&self) -> u64 {
        self.days
            .saturating_mul(SECONDS_PER_DAY)
            .saturating_add(self.hours.saturating_mul(SECONDS_PER_HOUR))
            .saturating_add(self.minutes.saturating_mul(SECONDS_PER_MINUTE))
            .saturating_add(self.seconds)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownResult {
    pub text: String,
    pub reached: bool,
    /// Present only while the target lies in the future.
    pub remaining: Option<Remaining>,
}

/// Computes the countdown text for `now` against `target`.
///
/// A zero or negative delta counts as reached. Sub-second remainders are
/// dropped, so the last half second before the target still reads as
/// `0 days, 0 hours, 0 minutes, 0 seconds`.
#[must_use]
pub fn compute_countdown(
    now: NaiveDateTime,
    target: TargetMoment,
    labels: &CountdownLabels,
) -> CountdownResult {
    let delta = target.remaining_from(now);
    if delta <= chrono::TimeDelta::zero() {
        return CountdownResult {
            text: labels.celebration_text.clone(),
            reached: true,
            remaining: None,
        };
    }

    let total = u64::try_from(delta.num_seconds()).unwrap_or(0);
    let remaining = Remaining::from_seconds(total);
    let text = format!(
        "⏰ Time until {}: {} days, {} hours, {} minutes, {} seconds",
        labels.event_name, remaining.days, remaining.hours, remaining.minutes, remaining.seconds
    );

    CountdownResult {
        text,
        reached: false,
        remaining: Some(remaining),
    }
}

/// Countdown against a fixed target and a clock, with no display state.
///
/// Cheap to clone when the clock is; the HTTP host keeps its own copy so the
/// page can be served while the controller is busy.
#[derive(Debug, Clone)]
pub struct CountdownView<C> {
    clock: C,
    target: TargetMoment,
    labels: CountdownLabels,
}

impl<C> CountdownView<C>
where
    C: Clock,
{
    #[must_use]
    pub const fn new(clock: C, target: TargetMoment, labels: CountdownLabels) -> Self {
        Self {
            clock,
            target,
            labels,
        }
    }

    #[must_use]
    pub const fn target(&self) -> TargetMoment {
        self.target
    }

    #[must_use]
    pub const fn labels(&self) -> &CountdownLabels {
        &self.labels
    }

    /// Countdown as of the clock's current reading.
    #[must_use]
    pub fn current(&self) -> CountdownResult {
        compute_countdown(self.clock.now(), self.target, &self.labels)
    }
}
