//! Stdio transport: reads commands from stdin, writes responses to stdout.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use schema_harness::Engine;

use crate::protocol::{Dispatcher, Reply};
use crate::types::{ShimError, ShimResult};

use super::framing;

/// Line-oriented transport driving a [`Dispatcher`].
pub struct StdioTransport<E> {
    dispatcher: Dispatcher<E>,
}

impl<E: Engine> StdioTransport<E> {
    pub fn new(dispatcher: Dispatcher<E>) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &Dispatcher<E> {
        &self.dispatcher
    }

    /// Run over the process's stdin and stdout.
    pub async fn run(&mut self) -> ShimResult<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Read one line, handle it, write and flush its response, repeat.
    ///
    /// Returns `Ok` on `stop` or end of input. Any error is fatal and ends
    /// the loop without a response for the offending line.
    pub async fn serve<R, W>(&mut self, mut reader: R, mut writer: W) -> ShimResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut line = String::new();

        tracing::info!("Stdio transport started");

        loop {
            line.clear();
            let bytes_read = reader.read_line(&mut line).await.map_err(ShimError::Io)?;

            if bytes_read == 0 {
                tracing::info!("EOF on stdin, shutting down");
                break;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let command = framing::decode_command(trimmed).map_err(|e| {
                tracing::error!("Rejecting input line: {e}");
                e
            })?;
            let kind = command.kind();

            match self.dispatcher.handle(command) {
                Ok(Reply::Respond(response)) => {
                    let framed = framing::encode_response(&response)?;
                    writer
                        .write_all(framed.as_bytes())
                        .await
                        .map_err(ShimError::Io)?;
                    writer.flush().await.map_err(ShimError::Io)?;
                }
                Ok(Reply::Stop) => break,
                Err(e) => {
                    tracing::error!("Fatal error handling {}: {e}", kind.tag());
                    return Err(e);
                }
            }
        }

        writer.flush().await.map_err(ShimError::Io)?;
        Ok(())
    }
}
