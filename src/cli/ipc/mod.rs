//! IPC (Inter-Process Communication) module for daemon control
//!
//! Provides platform-specific implementations:
//! - Unix (Linux/macOS): Unix Domain Sockets
//! - Windows: Named Pipes

#[cfg(windows)]
mod named_pipe;
pub mod protocol;
#[cfg(unix)]
mod unix_socket;

#[cfg(windows)]
pub use named_pipe::{NamedPipeClient, NamedPipeServer, PipePath};
pub use protocol::{DaemonRequest, DaemonResponse, IpcMessage};
#[cfg(unix)]
pub use unix_socket::{SocketPath, UnixSocketClient, UnixSocketServer};

use std::io;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::{mpsc, oneshot};

use protocol::{encode_line, parse_request};

/// Trait for IPC servers that listen for daemon commands
#[async_trait::async_trait]
pub trait IpcServer: Send + Sync {
    /// Bind to the IPC endpoint
    fn bind(&mut self) -> io::Result<()>;

    /// Get the path/name of the IPC endpoint
    fn path(&self) -> String;

    /// Accept and handle connections
    ///
    /// Runs until the task is dropped. Each request is forwarded to `tx`
    /// and the connection waits for the daemon loop to reply.
    async fn run(&self, tx: mpsc::Sender<IpcMessage>) -> io::Result<()>;

    /// Cleanup IPC resources
    fn cleanup(&self);
}

/// Trait for IPC clients that send commands to the daemon
#[async_trait::async_trait]
pub trait IpcClient: Send + Sync {
    /// Check if daemon appears to be running (endpoint exists)
    fn is_daemon_running(&self) -> bool;

    /// Send one raw line and read one line back
    async fn send_line(&self, line: &str) -> io::Result<String>;

    /// Send a request and decode the reply
    async fn request(&self, request: &DaemonRequest) -> io::Result<DaemonResponse> {
        let line = encode_line(request).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let reply = self.send_line(&line).await?;
        if reply.trim().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "daemon closed the connection without replying",
            ));
        }
        serde_json::from_str(reply.trim()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Serve a single request on an accepted connection
pub(crate) async fn serve_connection<S>(stream: S, tx: mpsc::Sender<IpcMessage>) -> io::Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let (reader, mut writer) = tokio::io::split(stream);
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    reader.read_line(&mut line).await?;

    let response = match parse_request(&line) {
        Ok(request) => dispatch(request, &tx).await,
        Err(message) => DaemonResponse::error(message),
    };

    let reply = encode_line(&response).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writer.write_all(reply.as_bytes()).await?;
    writer.flush().await?;
    writer.shutdown().await?;

    Ok(())
}

async fn dispatch(request: DaemonRequest, tx: &mpsc::Sender<IpcMessage>) -> DaemonResponse {
    let (reply, response) = oneshot::channel();
    if tx.send(IpcMessage { request, reply }).await.is_err() {
        return DaemonResponse::error("daemon is shutting down");
    }
    response
        .await
        .unwrap_or_else(|_| DaemonResponse::error("daemon dropped the request"))
}

/// Create the appropriate IPC server for the current platform
#[cfg(unix)]
pub fn create_ipc_server() -> Box<dyn IpcServer> {
    Box::new(UnixSocketServer::new(SocketPath::new()))
}

#[cfg(windows)]
pub fn create_ipc_server() -> Box<dyn IpcServer> {
    Box::new(NamedPipeServer::new(PipePath::new()))
}

/// Create the appropriate IPC client for the current platform
#[cfg(unix)]
pub fn create_ipc_client() -> Box<dyn IpcClient> {
    Box::new(UnixSocketClient::new(SocketPath::new()))
}

#[cfg(windows)]
pub fn create_ipc_client() -> Box<dyn IpcClient> {
    Box::new(NamedPipeClient::new(PipePath::new()))
}
