//! The slice of HTTP this server speaks.
//!
//! One request line in, one response out, connection closed:
//! - `parser`: request line parsing
//! - `response`: status lines and response framing
//!
//! ## Protocol Format
//!
//! ```text
//! Request:  GET /index.html HTTP/1.1\r\n
//! Response: HTTP/1.0 200 OK\r\nContent-Length: 20\r\n\r\n<file bytes>
//!
//! Request:  POST /index.html HTTP/1.1\r\n
//! Response: HTTP/1.1 400 Bad Request\r\n\r\n
//! ```

pub mod parser;
pub mod response;
