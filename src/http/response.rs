use std::collections::HashMap;

/// Returns the canonical reason phrase for common status codes.
///
/// # Example
///
/// ```
/// # use beacon::http::response::reason_phrase;
/// assert_eq!(reason_phrase(200), "OK");
/// assert_eq!(reason_phrase(404), "Not Found");
/// ```
pub fn reason_phrase(code: u16) -> &'static str {
    match code {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        _ => "",
    }
}

/// Represents a complete HTTP response ready to be serialized.
///
/// The status code is a free integer in 100..=599 and the reason phrase is
/// free-form; the protocol version is fixed to HTTP/1.1 by the writer.
/// Headers stay mutable until the response is written. The writer may add
/// `Content-Encoding` and `Content-Length`, but never overwrites values
/// set here.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code (100..=599)
    pub status: u16,
    /// The reason phrase sent after the status code
    pub reason: String,
    /// HTTP headers as key-value pairs
    pub headers: HashMap<String, String>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// Unlike the request side, nothing here computes Content-Length: the
/// writer injects it after content negotiation, so the declared length
/// always matches the bytes that actually hit the wire.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(200)
///     .header("Content-Type", "application/json")
///     .body(b"{}".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    status: u16,
    reason: String,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code and
    /// its canonical reason phrase.
    pub fn new(status: u16) -> Self {
        debug_assert!((100..=599).contains(&status));
        Self {
            status,
            reason: reason_phrase(status).to_string(),
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Replaces the canonical reason phrase with a free-form one.
    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Adds or replaces a header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the final Response.
    pub fn build(self) -> Response {
        Response {
            status: self.status,
            reason: self.reason,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Creates a simple 200 OK response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(200).body(body.into()).build()
    }

    /// Creates a 201 Created response with an empty body.
    pub fn created() -> Self {
        ResponseBuilder::new(201).build()
    }

    /// Creates a 404 Not Found response.
    pub fn not_found() -> Self {
        ResponseBuilder::new(404).body(b"404 Not Found".to_vec()).build()
    }

    /// Creates a 500 Internal Server Error response.
    pub fn internal_error() -> Self {
        ResponseBuilder::new(500)
            .body(b"500 Internal Server Error".to_vec())
            .build()
    }
}
