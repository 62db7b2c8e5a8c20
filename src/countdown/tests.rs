use chrono::{NaiveDateTime, TimeDelta};

use super::{
    Clock, CountdownLabels, ManualClock, Remaining, TargetMoment, compute_countdown,
    DEFAULT_CELEBRATION_TEXT,
};
use crate::error::{AppError, AppResult, ValidationError};

fn target() -> AppResult<TargetMoment> {
    "2025-10-10T00:00:00"
        .parse::<TargetMoment>()
        .map_err(AppError::from)
}

fn before(target: TargetMoment, seconds: i64) -> AppResult<NaiveDateTime> {
    target
        .at()
        .checked_sub_signed(TimeDelta::seconds(seconds))
        .ok_or_else(|| AppError::validation("Timestamp underflow"))
}

#[test]
fn countdown_decomposes_remaining_time() -> AppResult<()> {
    let target = target()?;
    let total = 3 * 86_400 + 4 * 3_600 + 5 * 60 + 6;
    let now = before(target, total)?;

    let result = compute_countdown(now, target, &CountdownLabels::default());

    if result.reached {
        return Err(AppError::validation("Expected countdown to be running"));
    }
    let expected = Remaining {
        days: 3,
        hours: 4,
        minutes: 5,
        seconds: 6,
    };
    if result.remaining != Some(expected) {
        return Err(AppError::validation(format!(
            "Unexpected remaining: {:?}",
            result.remaining
        )));
    }
    if !result
        .text
        .ends_with("3 days, 4 hours, 5 minutes, 6 seconds")
    {
        return Err(AppError::validation(format!(
            "Unexpected text: {}",
            result.text
        )));
    }
    Ok(())
}

#[test]
fn countdown_components_sum_to_delta() -> AppResult<()> {
    let target = target()?;
    for total in [1_i64, 59, 60, 3_599, 3_600, 86_399, 86_400, 86_401, 31_536_000] {
        let now = before(target, total)?;
        let result = compute_countdown(now, target, &CountdownLabels::default());
        let remaining = result
            .remaining
            .ok_or_else(|| AppError::validation(format!("Missing remaining for {}", total)))?;
        let summed = i64::try_from(remaining.total_seconds())
            .map_err(|err| AppError::validation(err.to_string()))?;
        if summed != total {
            return Err(AppError::validation(format!(
                "Expected {} seconds, got {}",
                total, summed
            )));
        }
        if remaining.hours >= 24 || remaining.minutes >= 60 || remaining.seconds >= 60 {
            return Err(AppError::validation(format!(
                "Components out of range: {:?}",
                remaining
            )));
        }
    }
    Ok(())
}

#[test]
fn countdown_drops_sub_second_remainder() -> AppResult<()> {
    let target = target()?;
    let now = target
        .at()
        .checked_sub_signed(TimeDelta::milliseconds(500))
        .ok_or_else(|| AppError::validation("Timestamp underflow"))?;

    let result = compute_countdown(now, target, &CountdownLabels::default());

    if result.reached {
        return Err(AppError::validation("Half a second early is not reached"));
    }
    if result.remaining != Some(Remaining::from_seconds(0)) {
        return Err(AppError::validation("Expected all-zero components"));
    }
    Ok(())
}

#[test]
fn countdown_reached_at_and_after_target() -> AppResult<()> {
    let target = target()?;
    let labels = CountdownLabels::default();
    let long_after = target
        .at()
        .checked_add_signed(TimeDelta::days(400))
        .ok_or_else(|| AppError::validation("Timestamp overflow"))?;

    for now in [target.at(), long_after] {
        let result = compute_countdown(now, target, &labels);
        if !result.reached {
            return Err(AppError::validation(format!("Expected reached at {}", now)));
        }
        if result.text != DEFAULT_CELEBRATION_TEXT {
            return Err(AppError::validation(format!(
                "Unexpected celebration text: {}",
                result.text
            )));
        }
        if result.remaining.is_some() {
            return Err(AppError::validation("Reached countdown has no remainder"));
        }
    }
    Ok(())
}

#[test]
fn countdown_uses_custom_labels() -> AppResult<()> {
    let target = target()?;
    let labels = CountdownLabels {
        event_name: "launch".to_owned(),
        celebration_text: "Liftoff".to_owned(),
    };
    let running = compute_countdown(before(target, 61)?, target, &labels);
    if !running.text.contains("Time until launch: 0 days, 0 hours, 1 minutes, 1 seconds") {
        return Err(AppError::validation(running.text));
    }
    let done = compute_countdown(target.at(), target, &labels);
    if done.text != "Liftoff" {
        return Err(AppError::validation(done.text));
    }
    Ok(())
}

#[test]
fn target_parses_supported_formats() -> AppResult<()> {
    let expected = target()?;
    for raw in ["2025-10-10T00:00:00", "2025-10-10 00:00:00", "2025-10-10T00:00", "2025-10-10"] {
        let parsed = raw.parse::<TargetMoment>()?;
        if parsed != expected {
            return Err(AppError::validation(format!("Mismatch for {}", raw)));
        }
    }
    if expected.day() != 10 || expected.month_name() != "October" {
        return Err(AppError::validation("Unexpected calendar labels"));
    }
    Ok(())
}

#[test]
fn target_rejects_garbage() -> AppResult<()> {
    match "next tuesday".parse::<TargetMoment>() {
        Err(ValidationError::InvalidTarget { value }) if value == "next tuesday" => Ok(()),
        Err(err) => Err(AppError::validation(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::validation("Expected parse failure")),
    }
}

#[test]
fn manual_clock_clones_share_time() -> AppResult<()> {
    let target = target()?;
    let clock = ManualClock::new(before(target, 10)?);
    let observer = clock.clone();

    clock.advance(TimeDelta::seconds(10));
    if observer.now() != target.at() {
        return Err(AppError::validation("Clone did not observe advance"));
    }
    Ok(())
}
