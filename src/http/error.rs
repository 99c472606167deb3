use std::io;

use thiserror::Error;

/// Protocol-level errors, local to a single connection.
///
/// Parse-time variants cover the request side; `Transport` covers socket
/// failures while writing (and any unexpected I/O failure mid-read).
/// Callers branch on the variant, never on message text.
#[derive(Debug, Error)]
pub enum Error {
    /// The request line could not be split into method, path and version.
    #[error("malformed start line")]
    MalformedStartLine,

    /// A header line is missing the `": "` separator or its terminator.
    #[error("malformed header")]
    MalformedHeader,

    /// The Content-Length header is missing where required or not a
    /// decimal integer.
    #[error("invalid Content-Length")]
    InvalidContentLength,

    /// The stream ended before the declared Content-Length was read.
    #[error("truncated body")]
    TruncatedBody,

    /// The socket failed mid-sequence.
    #[error("transport: {0}")]
    Transport(#[from] io::Error),
}
