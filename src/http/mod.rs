//! HTTP protocol implementation.
//!
//! This module implements a minimal HTTP/1.1 protocol layer directly on top
//! of a TCP stream: no HTTP library, no chunked transfer-encoding, one
//! request per connection.
//!
//! # Architecture
//!
//! - **`parser`**: reads a buffered byte stream and produces a [`request::Request`]
//! - **`request`**: parsed request representation (method, path, headers, body)
//! - **`response`**: response representation with builder pattern
//! - **`writer`**: serializes a response, handling gzip negotiation and
//!   Content-Length injection
//! - **`context`**: pairs the live socket with its parsed request and owns
//!   the single `respond` operation
//! - **`error`**: the closed set of protocol error kinds
//!
//! # Data flow
//!
//! ```text
//! socket ──▶ BufReader ──▶ parser ──▶ Request
//!                                       │
//!                                  route handler
//!                                       │
//! socket ◀── writer ◀── Response ◀──────┘
//! ```
//!
//! Each connection owns its request, response, and socket exclusively; the
//! parser always runs to completion before the writer starts, and the
//! socket is closed exactly once when the connection task finishes.

pub mod context;
pub mod error;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
