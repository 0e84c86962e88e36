//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::GatewayError;
use std::io::ErrorKind;

impl HttpServer {
    /// Turn a bind failure into an actionable startup error
    pub(crate) fn format_bind_error(error: std::io::Error, bind_addr: &str, port: u16) -> GatewayError {
        let message = match error.kind() {
            ErrorKind::AddrInUse => format!(
                "Port {} is already in use; stop the other process or set RELAY_PORT={}",
                port,
                port.saturating_add(1)
            ),
            ErrorKind::PermissionDenied => format!(
                "Permission denied for port {}; use a port >= 1024 via RELAY_PORT",
                port
            ),
            _ => format!("Failed to bind to {}: {}", bind_addr, error),
        };
        GatewayError::server(message)
    }
}
