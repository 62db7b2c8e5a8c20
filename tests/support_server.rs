use std::net::TcpListener;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use chrono::NaiveDateTime;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use revealer::args::RevealerArgs;
use revealer::controller::DisplayController;
use revealer::countdown::SystemClock;
use revealer::server::{AppState, bind, serve};
use revealer::settings::Settings;
use revealer::shutdown::{ShutdownSender, shutdown_channel};
use tokio::task::JoinHandle;

/// In-process server; stopped on drop.
pub struct InProcessServer {
    pub base_url: String,
    shutdown_tx: ShutdownSender,
    task: Option<JoinHandle<revealer::error::AppResult<()>>>,
}

impl InProcessServer {
    /// Stops the accept loop and waits for it to finish.
    ///
    /// # Errors
    ///
    /// Returns an error if the server task failed.
    pub async fn stop(mut self) -> Result<(), String> {
        drop(self.shutdown_tx.send(()));
        if let Some(task) = self.task.take() {
            task.await
                .map_err(|err| format!("server task panicked: {}", err))?
                .map_err(|err| format!("server failed: {}", err))?;
        }
        Ok(())
    }
}

impl Drop for InProcessServer {
    fn drop(&mut self) {
        drop(self.shutdown_tx.send(()));
    }
}

/// Starts a server on an ephemeral port with the given target moment.
///
/// # Errors
///
/// Returns an error if args are rejected or the listener cannot be bound.
pub async fn spawn_in_process(target: &str) -> Result<InProcessServer, String> {
    let args = RevealerArgs::try_parse_from(["revealer", "--target", target])
        .map_err(|err| format!("args rejected: {}", err))?;
    let settings = Settings::from(&args);
    let controller = DisplayController::new(
        settings.target,
        settings.labels.clone(),
        settings.render.clone(),
        SystemClock,
        StdRng::seed_from_u64(11),
    );
    let state = AppState::new(controller, &settings);
    let listener = bind("127.0.0.1", 0)
        .await
        .map_err(|err| format!("bind failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    let task = tokio::spawn(serve(listener, state, shutdown_rx));
    Ok(InProcessServer {
        base_url: format!("http://{}", addr),
        shutdown_tx,
        task: Some(task),
    })
}

/// Target formatted the way `--target` expects.
#[must_use]
pub fn format_target(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// `revealer` binary running as a child process; killed on drop.
pub struct ChildServer {
    pub base_url: String,
    child: Child,
}

impl Drop for ChildServer {
    fn drop(&mut self) {
        drop(self.child.kill());
        drop(self.child.wait());
    }
}

/// Reserves a port by binding and immediately releasing it.
///
/// # Errors
///
/// Returns an error if no ephemeral port can be bound.
pub fn free_port() -> Result<u16, String> {
    let listener =
        TcpListener::bind("127.0.0.1:0").map_err(|err| format!("bind probe failed: {}", err))?;
    listener
        .local_addr()
        .map(|addr| addr.port())
        .map_err(|err| format!("probe addr failed: {}", err))
}

/// Launches the binary from `dir` so no stray config file is picked up.
///
/// # Errors
///
/// Returns an error if the process cannot be spawned.
pub fn spawn_binary(dir: &Path, port: u16, extra: &[&str]) -> Result<ChildServer, String> {
    let child = Command::new(env!("CARGO_BIN_EXE_revealer"))
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("SPACE_ID")
        .args(["--host", "127.0.0.1", "--port"])
        .arg(port.to_string())
        .args(["--port-attempts", "1"])
        .args(extra)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|err| format!("spawn revealer failed: {}", err))?;
    Ok(ChildServer {
        base_url: format!("http://127.0.0.1:{}", port),
        child,
    })
}

/// Polls `url` until it answers or `timeout` elapses.
///
/// # Errors
///
/// Returns an error if the server never answers.
pub async fn wait_until_ready(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<(), String> {
    let started = Instant::now();
    loop {
        if client.get(url).send().await.is_ok() {
            return Ok(());
        }
        if started.elapsed() > timeout {
            return Err(format!("server at {} never became ready", url));
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}
