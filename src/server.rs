//! TCP server for the single-file responder.
//!
//! Accepts connections and answers exactly one request per connection:
//! read a line, parse it, and reply with either the configured file or a
//! fixed error status. The connection is closed on every exit path.

use crate::config::Config;
use crate::http::parser;
use crate::http::response::Response;
use std::sync::Arc;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tracing::{debug, error, info};

/// Server instance
pub struct Server {
    config: Arc<Config>,
}

impl Server {
    /// Create a new server instance
    pub fn new(config: Config) -> Self {
        Server {
            config: Arc::new(config),
        }
    }

    /// Start the server and begin accepting connections.
    ///
    /// Accept errors are logged and the loop continues; they are never
    /// fatal. Each accepted connection runs on its own task, unbounded.
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let listener = TcpListener::bind(&self.config.listen).await?;
        info!(address = %self.config.listen, "Server listening");

        loop {
            match listener.accept().await {
                Ok((stream, addr)) => {
                    debug!(peer = %addr, "New connection");

                    let config = Arc::clone(&self.config);

                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(stream, config).await {
                            debug!(error = %e, "Connection error");
                        }
                    });
                }
                Err(e) => {
                    error!(error = %e, "Failed to accept connection");
                }
            }
        }
    }
}

/// Handle a single client connection.
///
/// Reads one request line, writes exactly one response, and returns. The
/// stream (and with it the connection) is dropped on every exit path,
/// including parse failures and mid-transfer write errors.
async fn handle_connection<S>(
    stream: S,
    config: Arc<Config>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let (reader, mut writer) = tokio::io::split(stream);
    let mut reader = BufReader::new(reader);

    // One line, no length cap, no deadline: a silent client parks this
    // task until it sends a newline or disconnects.
    let mut line = String::new();
    match reader.read_line(&mut line).await {
        // EOF before a newline, or a transport error mid-line
        Ok(_) if !line.ends_with('\n') => {
            writer.write_all(Response::bad_request()).await?;
            return Ok(());
        }
        Err(e) => {
            debug!(error = %e, "Failed to read request line");
            writer.write_all(Response::bad_request()).await?;
            return Ok(());
        }
        Ok(_) => {}
    }

    let request = match parser::parse(line.trim()) {
        Ok(request) => request,
        Err(e) => {
            debug!(error = %e, "Rejecting request");
            writer.write_all(Response::bad_request()).await?;
            return Ok(());
        }
    };

    // Method must be exactly GET; the version is only checked for its
    // prefix, so HTTP/anything passes.
    if request.method != "GET" || !request.version.starts_with("HTTP/") {
        debug!(
            method = request.method,
            version = request.version,
            "Rejecting request"
        );
        writer.write_all(Response::bad_request()).await?;
        return Ok(());
    }

    // "/" is an alias for the index page
    let path = if request.path == "/" {
        "/index.html"
    } else {
        request.path
    };

    if path != "/index.html" {
        debug!(path, "No route for path");
        writer.write_all(Response::not_found()).await?;
        return Ok(());
    }

    serve_file(&mut writer, &config).await
}

/// Stream the configured file to the client.
///
/// The file is opened fresh on every request. The status line always
/// comes from the configured status code, independent of what the open
/// actually returned.
async fn serve_file<W>(
    writer: &mut W,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    W: AsyncWrite + Unpin,
{
    let mut file = match File::open(&config.file).await {
        Ok(file) => file,
        Err(e) => {
            // The startup check passed, so the file vanished since then
            debug!(error = %e, file = %config.file.display(), "Failed to open file");
            writer.write_all(Response::not_found()).await?;
            return Ok(());
        }
    };

    let metadata = match file.metadata().await {
        Ok(metadata) => metadata,
        Err(e) => {
            debug!(error = %e, file = %config.file.display(), "Failed to stat file");
            writer.write_all(Response::internal_server_error()).await?;
            return Ok(());
        }
    };

    let header = Response::file_header(config.status, &config.headers, metadata.len());
    writer.write_all(&header).await?;

    // Write failures mid-transfer are not reported to the client; the
    // connection just closes.
    tokio::io::copy(&mut file, writer).await?;

    Ok(())
}
