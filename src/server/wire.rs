use std::time::Duration;

use http::{Method, StatusCode};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::error::{AppError, AppResult, ServerError};

const MAX_REQUEST_BYTES: usize = 16_384;

pub(super) struct HttpRequest {
    pub(super) method: Method,
    /// Request target with any query string removed.
    pub(super) path: String,
}

#[derive(Debug)]
pub(super) struct RequestError {
    pub(super) status: StatusCode,
    pub(super) message: String,
}

impl RequestError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

pub(super) struct HttpResponse {
    pub(super) status: StatusCode,
    pub(super) content_type: &'static str,
    pub(super) body: Vec<u8>,
}

impl HttpResponse {
    pub(super) fn html(body: String) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: "text/html; charset=utf-8",
            body: body.into_bytes(),
        }
    }

    pub(super) const fn png(body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: "image/png",
            body,
        }
    }

    pub(super) const fn json(body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: "application/json",
            body,
        }
    }

    pub(super) fn error(status: StatusCode, message: &str) -> Self {
        let body = serde_json::json!({ "error": message }).to_string();
        Self {
            status,
            content_type: "application/json",
            body: body.into_bytes(),
        }
    }
}

/// Reads the request line and headers. Bodies are ignored.
///
/// Clients that do not finish their headers within `deadline` get a 408.
pub(super) async fn read_http_request(
    socket: &mut TcpStream,
    deadline: Duration,
) -> Result<HttpRequest, RequestError> {
    let (buffer, header_end) = tokio::time::timeout(deadline, read_head(socket))
        .await
        .map_err(|elapsed| RequestError {
            status: StatusCode::REQUEST_TIMEOUT,
            message: format!("Request headers not received: {}", elapsed),
        })??;
    parse_head(&buffer, header_end)
}

async fn read_head(socket: &mut TcpStream) -> Result<(Vec<u8>, usize), RequestError> {
    let mut buffer: Vec<u8> = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];
    let header_end;

    loop {
        let bytes = socket
            .read(&mut chunk)
            .await
            .map_err(|err| RequestError::bad_request(format!("Failed to read request: {}", err)))?;
        if bytes == 0 {
            return Err(RequestError::bad_request("Empty request"));
        }
        let read_slice = chunk
            .get(..bytes)
            .ok_or_else(|| RequestError::bad_request("Invalid read length"))?;
        buffer.extend_from_slice(read_slice);
        if let Some(pos) = find_header_end(&buffer) {
            header_end = pos;
            break;
        }
        if buffer.len() > MAX_REQUEST_BYTES {
            return Err(RequestError {
                status: StatusCode::PAYLOAD_TOO_LARGE,
                message: "Request too large".to_owned(),
            });
        }
    }

    Ok((buffer, header_end))
}

fn parse_head(buffer: &[u8], header_end: usize) -> Result<HttpRequest, RequestError> {
    let header_bytes = buffer
        .get(..header_end)
        .ok_or_else(|| RequestError::bad_request("Malformed request headers"))?;
    let header_text = std::str::from_utf8(header_bytes)
        .map_err(|err| RequestError::bad_request(format!("Invalid request encoding: {}", err)))?;
    let request_line = header_text
        .split("\r\n")
        .next()
        .ok_or_else(|| RequestError::bad_request("Missing request line"))?;
    let mut parts = request_line.split_whitespace();
    let method = parts
        .next()
        .ok_or_else(|| RequestError::bad_request("Missing HTTP method"))?;
    let target = parts
        .next()
        .ok_or_else(|| RequestError::bad_request("Missing request path"))?;
    let version = parts
        .next()
        .ok_or_else(|| RequestError::bad_request("Missing HTTP version"))?;
    if !version.starts_with("HTTP/1.") {
        return Err(RequestError::bad_request(format!(
            "Unsupported HTTP version '{}'",
            version
        )));
    }

    let method = Method::from_bytes(method.as_bytes())
        .map_err(|err| RequestError::bad_request(format!("Invalid HTTP method: {}", err)))?;
    let path = target.split('?').next().unwrap_or(target).to_owned();

    Ok(HttpRequest { method, path })
}

fn find_header_end(buffer: &[u8]) -> Option<usize> {
    buffer.windows(4).position(|window| window == b"\r\n\r\n")
}

pub(super) async fn write_response(socket: &mut TcpStream, response: &HttpResponse) -> AppResult<()> {
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nCache-Control: no-store\r\nConnection: close\r\n\r\n",
        response.status.as_u16(),
        response.status.canonical_reason().unwrap_or("Unknown"),
        response.content_type,
        response.body.len()
    );
    socket.write_all(head.as_bytes()).await.map_err(|err| {
        AppError::server(ServerError::Io {
            context: "write response head",
            source: err,
        })
    })?;
    socket.write_all(&response.body).await.map_err(|err| {
        AppError::server(ServerError::Io {
            context: "write response body",
            source: err,
        })
    })?;
    socket.shutdown().await.map_err(|err| {
        AppError::server(ServerError::Io {
            context: "close connection",
            source: err,
        })
    })?;
    Ok(())
}
