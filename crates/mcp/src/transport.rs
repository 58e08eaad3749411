//! MCP transport layer.
//!
//! Messages are single JSON objects terminated by `\n`. Blank lines are
//! skipped. [`LineTransport`] works over any buffered async reader and async
//! writer, so the same code serves stdio and in-memory pipes.

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::error::McpError;

/// Trait for MCP message transport.
#[async_trait]
pub trait McpTransport: Send {
    /// Read the next JSON-RPC message line from the transport.
    /// Returns `None` when the transport is closed.
    async fn receive(&mut self) -> Result<Option<String>, McpError>;

    /// Write a JSON-RPC message line to the transport.
    async fn send(&mut self, message: &str) -> Result<(), McpError>;
}

/// Newline-delimited JSON over a reader/writer pair.
pub struct LineTransport<R, W> {
    reader: R,
    writer: W,
}

/// Reads stdin, writes stdout.
pub type StdioTransport = LineTransport<BufReader<tokio::io::Stdin>, tokio::io::Stdout>;

impl<R, W> LineTransport<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl StdioTransport {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

#[async_trait]
impl<R, W> McpTransport for LineTransport<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn receive(&mut self) -> Result<Option<String>, McpError> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line).await? == 0 {
                return Ok(None); // EOF
            }
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
    }

    async fn send(&mut self, message: &str) -> Result<(), McpError> {
        self.writer.write_all(message.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}
