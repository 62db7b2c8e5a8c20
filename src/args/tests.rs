use std::time::Duration;

use clap::Parser;

use super::parsers::{parse_bool_env, parse_duration};
use super::{DEFAULT_PORT, DEFAULT_PORT_ATTEMPTS, PositiveU16, RevealerArgs};
use crate::countdown::{DEFAULT_CELEBRATION_TEXT, TargetMoment};
use crate::error::{AppError, AppResult, ValidationError};

fn parse_test_args<I, T>(args: I) -> AppResult<RevealerArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    RevealerArgs::try_parse_from(args).map_err(AppError::from)
}

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = parse_test_args(["revealer"])?;
    let expected_target = "2025-10-10T00:00:00".parse::<TargetMoment>()?;

    let checks = [
        (args.target == expected_target, "Unexpected target"),
        (args.host == "0.0.0.0", "Unexpected host"),
        (args.port == DEFAULT_PORT, "Unexpected port"),
        (
            args.port_attempts.get() == DEFAULT_PORT_ATTEMPTS,
            "Unexpected port_attempts",
        ),
        (
            args.poll_interval == Duration::from_secs(2),
            "Unexpected poll_interval",
        ),
        (args.event_name == "birthday", "Unexpected event_name"),
        (
            args.celebration_text == DEFAULT_CELEBRATION_TEXT,
            "Unexpected celebration_text",
        ),
        (args.font_family == "sans-serif", "Unexpected font_family"),
        (args.config.is_none(), "Expected config to be None"),
        (!args.verbose, "Expected verbose to be false"),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(AppError::validation(message));
        }
    }
    Ok(())
}

#[test]
fn parse_args_overrides() -> AppResult<()> {
    let args = parse_test_args([
        "revealer",
        "--target",
        "2030-01-02T03:04:05",
        "--port",
        "9000",
        "--port-attempts",
        "3",
        "--poll-interval",
        "500ms",
        "--event-name",
        "launch",
        "-v",
    ])?;
    let expected_target = "2030-01-02T03:04:05".parse::<TargetMoment>()?;
    if args.target != expected_target
        || args.port != 9000
        || args.port_attempts.get() != 3
        || args.poll_interval != Duration::from_millis(500)
        || args.event_name != "launch"
        || !args.verbose
    {
        return Err(AppError::validation(format!("Unexpected args: {:?}", args)));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_zero_port_attempts() -> AppResult<()> {
    match parse_test_args(["revealer", "--port-attempts", "0"]) {
        Err(AppError::Clap { .. }) => Ok(()),
        Err(err) => Err(AppError::validation(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::validation("Expected port-attempts 0 to fail")),
    }
}

#[test]
fn parse_args_rejects_bad_target() -> AppResult<()> {
    if parse_test_args(["revealer", "--target", "soon"]).is_ok() {
        return Err(AppError::validation("Expected bad target to fail"));
    }
    Ok(())
}

#[test]
fn parse_duration_units() -> AppResult<()> {
    let cases = [
        ("250ms", Duration::from_millis(250)),
        ("3", Duration::from_secs(3)),
        ("3s", Duration::from_secs(3)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3600)),
    ];
    for (raw, expected) in cases {
        let parsed = parse_duration(raw)?;
        if parsed != expected {
            return Err(AppError::validation(format!("Mismatch for {}", raw)));
        }
    }
    Ok(())
}

#[test]
fn parse_duration_errors() -> AppResult<()> {
    let checks = [
        matches!(parse_duration(""), Err(ValidationError::DurationEmpty)),
        matches!(
            parse_duration("fast"),
            Err(ValidationError::InvalidDurationFormat { .. })
        ),
        matches!(
            parse_duration("5d"),
            Err(ValidationError::InvalidDurationUnit { .. })
        ),
        matches!(parse_duration("0ms"), Err(ValidationError::DurationZero)),
    ];
    if checks.iter().all(|ok| *ok) {
        Ok(())
    } else {
        Err(AppError::validation(format!("Unexpected results: {:?}", checks)))
    }
}

#[test]
fn parse_bool_env_values() -> AppResult<()> {
    for raw in ["1", "true", "YES", "on"] {
        if !parse_bool_env(raw)? {
            return Err(AppError::validation(format!("Expected true for {}", raw)));
        }
    }
    for raw in ["0", "false", "No", "off"] {
        if parse_bool_env(raw)? {
            return Err(AppError::validation(format!("Expected false for {}", raw)));
        }
    }
    if parse_bool_env("maybe").is_ok() {
        return Err(AppError::validation("Expected invalid boolean"));
    }
    Ok(())
}

#[test]
fn port_attempts_default_follows_constant() -> AppResult<()> {
    use clap::CommandFactory;

    let command = RevealerArgs::command();
    let arg = command
        .get_arguments()
        .find(|arg| arg.get_id() == "port_attempts")
        .ok_or_else(|| AppError::validation("Missing port_attempts argument"))?;
    let defaults: Vec<String> = arg
        .get_default_values()
        .iter()
        .map(|value| value.to_string_lossy().into_owned())
        .collect();
    if defaults != [DEFAULT_PORT_ATTEMPTS.to_string()] {
        return Err(AppError::validation(format!(
            "Unexpected port_attempts default {:?}",
            defaults
        )));
    }
    if PositiveU16::saturating(0).get() != 1 || PositiveU16::saturating(7).get() != 7 {
        return Err(AppError::validation("Unexpected saturating construction"));
    }
    Ok(())
}
