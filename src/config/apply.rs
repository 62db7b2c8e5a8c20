use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{PositiveU16, RevealerArgs};
use crate::countdown::TargetMoment;
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

use super::types::ConfigFile;

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn invalid(field: &'static str, source: ValidationError) -> AppError {
    AppError::config(ConfigError::InvalidField { field, source })
}

/// Applies config values to `args` for every option not given on the command line.
///
/// # Errors
///
/// Returns an error when a config value fails validation.
pub fn apply_config(
    args: &mut RevealerArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "target")
        && let Some(target) = config.target.as_deref()
    {
        args.target = target
            .parse::<TargetMoment>()
            .map_err(|err| invalid("target", err))?;
    }

    if !is_cli(matches, "host")
        && let Some(host) = config.host.clone()
    {
        args.host = host;
    }

    if !is_cli(matches, "port")
        && let Some(port) = config.port
    {
        args.port = port;
    }

    if !is_cli(matches, "port_attempts")
        && let Some(attempts) = config.port_attempts
    {
        args.port_attempts =
            PositiveU16::try_from(attempts).map_err(|err| invalid("port_attempts", err))?;
    }

    if !is_cli(matches, "poll_interval")
        && let Some(interval) = config.poll_interval.as_ref()
    {
        args.poll_interval = interval
            .to_duration()
            .map_err(|err| invalid("poll_interval", err))?;
    }

    if !is_cli(matches, "event_name")
        && let Some(name) = config.event_name.clone()
    {
        args.event_name = name;
    }

    if !is_cli(matches, "celebration_text")
        && let Some(text) = config.celebration_text.clone()
    {
        args.celebration_text = text;
    }

    if !is_cli(matches, "overlay_text")
        && let Some(text) = config.overlay_text.clone()
    {
        args.overlay_text = text;
    }

    if !is_cli(matches, "font_family")
        && let Some(family) = config.font_family.clone()
    {
        args.font_family = family;
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    Ok(())
}
