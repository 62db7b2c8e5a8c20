use std::net::TcpListener;

/// Returns the first port in `start..start + attempts` that can be bound on
/// `host`, or `start` itself when none can.
///
/// The probe listener is dropped before returning, so the port may be taken
/// again by the time the caller binds it.
#[must_use]
pub fn find_free_port(host: &str, start: u16, attempts: u16) -> u16 {
    for offset in 0..attempts {
        let Some(port) = start.checked_add(offset) else {
            break;
        };
        match TcpListener::bind((host, port)) {
            Ok(listener) => {
                drop(listener);
                return port;
            }
            Err(err) => tracing::debug!("Port {} unavailable: {}", port, err),
        }
    }
    tracing::warn!(
        "No free port among {} attempts from {}, falling back to {}",
        attempts,
        start,
        start
    );
    start
}
