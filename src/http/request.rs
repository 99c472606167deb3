use std::collections::HashMap;

/// HTTP request methods.
///
/// Method tokens are not validated beyond the start-line split; verbs the
/// server does not know land in `Other` rather than failing the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
    /// Any other method token, kept verbatim
    Other(String),
}

impl Method {
    /// Maps a start-line token to a method. Never fails.
    pub fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "HEAD" => Method::HEAD,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::Other(s) => s,
        }
    }
}

/// Represents a parsed HTTP request from a client.
///
/// Constructed once per connection by the parser and immutable afterwards.
/// Header names keep the exact casing sent by the client; duplicate names
/// resolve to the last occurrence on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request path as sent, unescaped (e.g. "/echo/abc")
    pub path: String,
    /// HTTP version from the start line (typically "HTTP/1.1")
    pub version: String,
    /// Request headers, case-sensitive keys
    pub headers: HashMap<String, String>,
    /// Request body, empty unless a Content-Length-sized read happened
    pub body: Vec<u8>,
}

impl Request {
    /// Retrieves a header value by name.
    ///
    /// Lookup is case-sensitive: use the exact casing clients emit,
    /// e.g. `Accept-Encoding`, `User-Agent`.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }
}
