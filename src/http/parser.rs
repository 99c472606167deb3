use std::collections::HashMap;
use std::io::ErrorKind;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::http::error::Error;
use crate::http::request::{Method, Request};

/// Reads and parses one HTTP request from the stream.
///
/// Returns `Ok(None)` if the peer closed the connection before sending any
/// bytes. Once the first byte has arrived the request must be complete and
/// well-formed, otherwise a tagged [`Error`] comes back.
///
/// The body is read when the method is POST (Content-Length then required)
/// or whenever any method declares a non-zero Content-Length. Exactly the
/// declared number of bytes is consumed; afterwards the header map's
/// Content-Length entry reflects the bytes actually read.
pub async fn read_request<R>(reader: &mut R) -> Result<Option<Request>, Error>
where
    R: AsyncBufRead + Unpin,
{
    let line = match read_line(reader).await {
        Ok(Some(line)) => line,
        // Peer closed without sending a request.
        Ok(None) => return Ok(None),
        Err(LineError::Malformed) => return Err(Error::MalformedStartLine),
        Err(LineError::Io(e)) => return Err(Error::Transport(e)),
    };

    let (method, path, version) = parse_start_line(&line)?;
    let mut headers = parse_headers(reader).await?;

    let declared_len = match headers.get("Content-Length") {
        Some(raw) => Some(
            raw.parse::<usize>()
                .map_err(|_| Error::InvalidContentLength)?,
        ),
        None => None,
    };

    let body = match (&method, declared_len) {
        (Method::POST, None) => return Err(Error::InvalidContentLength),
        (Method::POST, Some(n)) => read_body(reader, n).await?,
        (_, Some(n)) if n > 0 => read_body(reader, n).await?,
        _ => Vec::new(),
    };

    // The declared value sized the read; the stored entry reports the
    // length actually read.
    if declared_len.is_some() {
        headers.insert("Content-Length".to_string(), body.len().to_string());
    }

    Ok(Some(Request {
        method,
        path,
        version,
        headers,
        body,
    }))
}

enum LineError {
    Malformed,
    Io(std::io::Error),
}

/// Reads one line terminated by `\r` then `\n`, returning it without the
/// terminator. `Ok(None)` means EOF before any byte of the line.
async fn read_line<R>(reader: &mut R) -> Result<Option<String>, LineError>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let n = reader
        .read_until(b'\r', &mut buf)
        .await
        .map_err(LineError::Io)?;
    if n == 0 {
        return Ok(None);
    }
    if buf.pop() != Some(b'\r') {
        // EOF mid-line.
        return Err(LineError::Malformed);
    }

    // The line feed is consumed separately and must follow immediately.
    let mut lf = [0u8; 1];
    match reader.read_exact(&mut lf).await {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Err(LineError::Malformed),
        Err(e) => return Err(LineError::Io(e)),
    }
    if lf[0] != b'\n' {
        return Err(LineError::Malformed);
    }

    String::from_utf8(buf).map(Some).map_err(|_| LineError::Malformed)
}

/// Splits the start line on its outermost spaces: method before the first,
/// version after the last, path everything in between (internal spaces in
/// the path survive).
fn parse_start_line(line: &str) -> Result<(Method, String, String), Error> {
    let method_end = line.find(' ').ok_or(Error::MalformedStartLine)?;
    let version_start = line.rfind(' ').ok_or(Error::MalformedStartLine)?;
    if version_start <= method_end {
        return Err(Error::MalformedStartLine);
    }

    let method = Method::from_token(&line[..method_end]);
    let path = line[method_end + 1..version_start].to_string();
    let version = line[version_start + 1..].to_string();
    Ok((method, path, version))
}

/// Reads header lines until the blank line separating headers from body.
async fn parse_headers<R>(reader: &mut R) -> Result<HashMap<String, String>, Error>
where
    R: AsyncBufRead + Unpin,
{
    let mut headers = HashMap::new();
    loop {
        let line = match read_line(reader).await {
            Ok(Some(line)) => line,
            Ok(None) | Err(LineError::Malformed) => return Err(Error::MalformedHeader),
            Err(LineError::Io(e)) => return Err(Error::Transport(e)),
        };

        if line.is_empty() {
            break;
        }

        let (name, value) = line.split_once(": ").ok_or(Error::MalformedHeader)?;
        // Duplicate names: last occurrence wins.
        headers.insert(name.to_string(), value.to_string());
    }
    Ok(headers)
}

async fn read_body<R>(reader: &mut R, len: usize) -> Result<Vec<u8>, Error>
where
    R: AsyncBufRead + Unpin,
{
    let mut body = vec![0u8; len];
    match reader.read_exact(&mut body).await {
        Ok(_) => Ok(body),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(Error::TruncatedBody),
        Err(e) => Err(Error::Transport(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_line_splits_on_outermost_spaces() {
        let (method, path, version) = parse_start_line("GET /a b c HTTP/1.1").unwrap();
        assert_eq!(method, Method::GET);
        assert_eq!(path, "/a b c");
        assert_eq!(version, "HTTP/1.1");
    }

    #[test]
    fn start_line_needs_two_boundaries() {
        assert!(matches!(
            parse_start_line("GET/HTTP/1.1"),
            Err(Error::MalformedStartLine)
        ));
        assert!(matches!(
            parse_start_line("GET HTTP/1.1"),
            Err(Error::MalformedStartLine)
        ));
    }

    #[test]
    fn unknown_method_token_is_kept() {
        let (method, _, _) = parse_start_line("FROB / HTTP/1.1").unwrap();
        assert_eq!(method, Method::Other("FROB".to_string()));
    }
}
