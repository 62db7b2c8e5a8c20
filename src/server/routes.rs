use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use http::{Method, StatusCode};
use rand::Rng;
use serde::Serialize;

use super::AppState;
use super::wire::{HttpRequest, HttpResponse};
use crate::controller::PollOutput;
use crate::countdown::Clock;
use crate::error::{AppError, AppResult, ServerError};
use crate::render::{Frame, encode_png};

const INDEX_PATHS: [&str; 2] = ["/", "/index.html"];
const POLL_PATH: &str = "/api/poll";
const PLACEHOLDER_PATH: &str = "/api/placeholder.png";

#[derive(Debug, Serialize)]
struct PollResponse<'resp> {
    text: &'resp str,
    reached: bool,
    /// Animation progress of the returned image, omitted for the placeholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    frame: Option<f64>,
    image: String,
}

pub(super) async fn route<C, R>(request: &HttpRequest, state: &Arc<AppState<C, R>>) -> HttpResponse
where
    C: Clock + Send + Sync + 'static,
    R: Rng + Send + 'static,
{
    let path = request.path.as_str();
    let known = INDEX_PATHS.contains(&path) || path == POLL_PATH || path == PLACEHOLDER_PATH;
    if !known {
        return HttpResponse::error(StatusCode::NOT_FOUND, "Not found");
    }
    if request.method != Method::GET {
        return HttpResponse::error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
    }

    let served = if path == POLL_PATH {
        poll(state).await
    } else if path == PLACEHOLDER_PATH {
        placeholder(state).await
    } else {
        Ok(index(state))
    };
    served.unwrap_or_else(|err| {
        tracing::error!("Failed to serve {}: {}", path, err);
        HttpResponse::error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    })
}

fn index<C, R>(state: &Arc<AppState<C, R>>) -> HttpResponse
where
    C: Clock,
{
    let countdown = state.countdown.current();
    HttpResponse::html(state.page.render(&countdown.text))
}

/// Polls the controller and encodes the frame, both off the async workers.
/// The first reached poll also builds the whole animation here.
async fn poll<C, R>(state: &Arc<AppState<C, R>>) -> AppResult<HttpResponse>
where
    C: Clock + Send + Sync + 'static,
    R: Rng + Send + 'static,
{
    let state = Arc::clone(state);
    tokio::task::spawn_blocking(move || -> AppResult<HttpResponse> {
        let output = state.lock_controller().poll();
        Ok(HttpResponse::json(poll_body(&output)?))
    })
    .await?
}

async fn placeholder<C, R>(state: &Arc<AppState<C, R>>) -> AppResult<HttpResponse>
where
    C: Clock + Send + Sync + 'static,
    R: Rng + Send + 'static,
{
    let state = Arc::clone(state);
    tokio::task::spawn_blocking(move || -> AppResult<HttpResponse> {
        let frame = state.lock_controller().initial_placeholder();
        Ok(HttpResponse::png(encode_png(frame.canvas())?))
    })
    .await?
}

fn poll_body(output: &PollOutput) -> AppResult<Vec<u8>> {
    let body = PollResponse {
        text: &output.text,
        reached: output.reached,
        frame: output.frame.progress(),
        image: data_url(&output.frame)?,
    };
    serde_json::to_vec(&body).map_err(|source| {
        AppError::server(ServerError::Serialize {
            context: "poll response",
            source,
        })
    })
}

fn data_url(frame: &Frame) -> AppResult<String> {
    let png = encode_png(frame.canvas())?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}
