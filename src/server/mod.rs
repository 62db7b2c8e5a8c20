//! HTTP host surface: index page, poll endpoint and placeholder image.
//!
//! One controller is shared by every connection. Polls, placeholder renders
//! and PNG encoding run on the blocking pool; the controller lock is held only
//! for the poll itself. The index page reads its own copy of the countdown and
//! never waits on the controller.
mod page;
mod port;
mod routes;
mod wire;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use rand::Rng;
use tokio::net::{TcpListener, TcpStream};

use crate::controller::DisplayController;
use crate::countdown::{Clock, CountdownView};
use crate::error::{AppError, AppResult, ServerError};
use crate::settings::Settings;
use crate::shutdown::ShutdownReceiver;

use self::wire::{HttpResponse, read_http_request, write_response};
use self::page::PageTemplate;

pub use port::find_free_port;

/// Time a client gets to send its request line and headers.
const REQUEST_READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared server state.
pub struct AppState<C, R> {
    controller: Mutex<DisplayController<C, R>>,
    countdown: CountdownView<C>,
    page: PageTemplate,
}

impl<C, R> AppState<C, R>
where
    C: Clock + Clone,
    R: Rng,
{
    #[must_use]
    pub fn new(controller: DisplayController<C, R>, settings: &Settings) -> Arc<Self> {
        Arc::new(Self {
            countdown: controller.view().clone(),
            controller: Mutex::new(controller),
            page: PageTemplate::from_settings(settings),
        })
    }
}

impl<C, R> AppState<C, R>
where
    C: Clock,
    R: Rng,
{
    /// Blocks until the controller is free. Call from the blocking pool only.
    fn lock_controller(&self) -> MutexGuard<'_, DisplayController<C, R>> {
        self.controller
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Binds the listening socket.
///
/// # Errors
///
/// Returns `ServerError::Bind` when the address cannot be bound.
pub async fn bind(host: &str, port: u16) -> AppResult<TcpListener> {
    let addr = format!("{}:{}", host, port);
    let bound = TcpListener::bind(addr.as_str()).await;
    bound.map_err(|err| AppError::server(ServerError::Bind { addr, source: err }))
}

/// Accepts connections until a shutdown message arrives.
///
/// # Errors
///
/// Currently infallible once bound; per-connection failures are logged and
/// do not stop the loop.
pub async fn serve<C, R>(
    listener: TcpListener,
    state: Arc<AppState<C, R>>,
    mut shutdown_rx: ShutdownReceiver,
) -> AppResult<()>
where
    C: Clock + Send + Sync + 'static,
    R: Rng + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Countdown server listening on {}", addr);
    }

    loop {
        tokio::select! {
            _ = shutdown_rx.recv() => {
                tracing::info!("Countdown server shutting down");
                break;
            }
            accepted = listener.accept() => {
                match accepted {
                    Ok((socket, peer)) => {
                        let state = Arc::clone(&state);
                        tokio::spawn(async move {
                            if let Err(err) = handle_connection(socket, &state).await {
                                tracing::debug!("Connection from {} failed: {}", peer, err);
                            }
                        });
                    }
                    Err(err) => {
                        tracing::warn!("Failed to accept connection: {}", err);
                    }
                }
            }
        }
    }

    Ok(())
}

async fn handle_connection<C, R>(mut socket: TcpStream, state: &Arc<AppState<C, R>>) -> AppResult<()>
where
    C: Clock + Send + Sync + 'static,
    R: Rng + Send + 'static,
{
    let response = match read_http_request(&mut socket, REQUEST_READ_TIMEOUT).await {
        Ok(request) => {
            let response = routes::route(&request, state).await;
            tracing::debug!(
                "{} {} -> {}",
                request.method,
                request.path,
                response.status.as_u16()
            );
            response
        }
        Err(err) => {
            tracing::debug!("Rejected request: {}", err.message);
            HttpResponse::error(err.status, &err.message)
        }
    };
    write_response(&mut socket, &response).await
}
