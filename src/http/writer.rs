use std::io::Write as _;

use bytes::{BufMut, BytesMut};
use flate2::Compression;
use flate2::write::GzEncoder;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::error::Error;
use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes and writes a response to the stream, exactly once.
///
/// `accept_encoding` is the originating request's `Accept-Encoding` value.
/// When it contains `gzip` and the body is non-empty, the body is
/// gzip-compressed and `Content-Encoding: gzip` is added before the length
/// is computed. Content-Length is injected from the actual byte length for
/// non-empty bodies; caller-supplied header values are never overwritten.
pub async fn write_response<W>(
    stream: &mut W,
    mut response: Response,
    accept_encoding: Option<&str>,
) -> Result<(), Error>
where
    W: AsyncWrite + Unpin,
{
    negotiate(&mut response, accept_encoding)?;

    let mut writer = ResponseWriter::new(&response);
    writer.write_to_stream(stream).await
}

/// Content negotiation first, length accounting second.
fn negotiate(response: &mut Response, accept_encoding: Option<&str>) -> Result<(), Error> {
    if accepts_gzip(accept_encoding)
        && !response.body.is_empty()
        && !response.headers.contains_key("Content-Encoding")
    {
        response.body = gzip_compress(&response.body)?;
        response
            .headers
            .insert("Content-Encoding".to_string(), "gzip".to_string());
    }

    // A zero-length body never gets an implicit Content-Length.
    if !response.body.is_empty() {
        let len = response.body.len();
        response
            .headers
            .entry("Content-Length".to_string())
            .or_insert_with(|| len.to_string());
    }

    Ok(())
}

fn accepts_gzip(accept_encoding: Option<&str>) -> bool {
    accept_encoding.is_some_and(|v| v.contains("gzip"))
}

fn gzip_compress(data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

fn serialize_response(resp: &Response) -> BytesMut {
    let mut buf = BytesMut::new();

    // Status line
    let status_line = format!("{} {} {}\r\n", HTTP_VERSION, resp.status, resp.reason);
    buf.put_slice(status_line.as_bytes());

    // Headers, in map iteration order
    for (k, v) in &resp.headers {
        buf.put_slice(k.as_bytes());
        buf.put_slice(b": ");
        buf.put_slice(v.as_bytes());
        buf.put_slice(b"\r\n");
    }

    // Header/body separator
    buf.put_slice(b"\r\n");

    // Body
    buf.put_slice(&resp.body);

    buf
}

/// Tracks progress through the serialized bytes so a short write resumes
/// where it left off. Any socket error or zero-length write aborts the
/// sequence with [`Error::Transport`].
pub struct ResponseWriter {
    buffer: BytesMut,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> Result<(), Error>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(Error::Transport(std::io::Error::new(
                    std::io::ErrorKind::WriteZero,
                    "connection closed while writing",
                )));
            }

            self.written += n;
        }

        Ok(())
    }
}
