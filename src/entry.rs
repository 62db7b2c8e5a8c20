//! Process entry: args, config, logging, runtime, then the server.
use clap::{ArgMatches, CommandFactory, FromArgMatches};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::args::RevealerArgs;
use crate::config::{apply_config, load_config};
use crate::controller::DisplayController;
use crate::countdown::SystemClock;
use crate::error::AppResult;
use crate::server::{self, AppState, find_free_port};
use crate::settings::Settings;
use crate::shutdown::{setup_signal_shutdown_handler, shutdown_channel};
use crate::system::banner::{BannerInfo, HOSTED_ENV_VAR, print_startup_banner};
use crate::system::logger::init_logging;

/// Runs the countdown server until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an error when arguments or config are invalid, the runtime cannot
/// be built, or the listening socket cannot be bound.
pub fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config)?;
    }

    init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let no_color = args.no_color;
    runtime.block_on(run_async(Settings::from(&args), no_color))
}

fn parse_args() -> AppResult<(RevealerArgs, ArgMatches)> {
    let matches = RevealerArgs::command().get_matches_from(std::env::args_os());
    let args = RevealerArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

async fn run_async(settings: Settings, no_color: bool) -> AppResult<()> {
    let port = find_free_port(&settings.host, settings.port, settings.port_attempts);
    let listener = server::bind(&settings.host, port).await?;

    let url = format!("http://localhost:{}", port);
    print_startup_banner(
        &BannerInfo {
            requested_port: settings.port,
            port,
            target: settings.target,
            url: &url,
            hosted: std::env::var_os(HOSTED_ENV_VAR).is_some(),
        },
        no_color,
    );

    let controller = DisplayController::new(
        settings.target,
        settings.labels.clone(),
        settings.render.clone(),
        SystemClock,
        StdRng::from_entropy(),
    );
    let state = AppState::new(controller, &settings);

    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    let result = server::serve(listener, state, shutdown_rx).await;
    drop(shutdown_tx.send(()));
    signal_handle.await?;
    result
}
