use tokio::io::BufReader;
use tokio::net::TcpStream;

use crate::http::error::Error;
use crate::http::parser;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer;
use crate::server::handler::Handler;

/// Pairs a live connection with its parsed request.
///
/// Owned by the connection task for its entire lifetime. `respond` consumes
/// the context, so at most one response can ever be written; dropping the
/// context without responding closes the socket silently. Either way the
/// socket is closed exactly once, on every exit path.
pub struct Context {
    stream: TcpStream,
    request: Request,
}

impl Context {
    pub(crate) fn new(stream: TcpStream, request: Request) -> Self {
        Self { stream, request }
    }

    /// Read-only view of the parsed request.
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// Writes the response to the socket.
    ///
    /// Gzip negotiation uses the request's `Accept-Encoding` header; see
    /// [`writer::write_response`].
    pub async fn respond(mut self, response: Response) -> Result<(), Error> {
        let accept_encoding = self.request.headers.get("Accept-Encoding");
        writer::write_response(
            &mut self.stream,
            response,
            accept_encoding.map(|v| v.as_str()),
        )
        .await
    }
}

/// Parses one request off the socket and hands the context to the handler.
///
/// A peer that connects and closes without sending anything is not an
/// error. One request per connection: once the handler returns, the socket
/// is dropped regardless of whether a response was written.
pub(crate) async fn serve_connection<H>(stream: TcpStream, handler: H) -> anyhow::Result<()>
where
    H: Handler,
{
    let mut reader = BufReader::new(stream);
    let request = match parser::read_request(&mut reader).await? {
        Some(request) => request,
        None => return Ok(()),
    };

    let ctx = Context::new(reader.into_inner(), request);
    handler.handle(ctx).await
}
