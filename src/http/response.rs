//! HTTP response generation.
//!
//! Every response is a status line, an optional header block, a blank
//! line, and a body. The early rejections carry an empty header block and
//! empty body; the file response carries the configured headers plus a
//! synthesized `Content-Length`, with the body streamed separately by the
//! connection handler.
//!
//! The version tokens are asymmetric on purpose: `HTTP/1.0` on the
//! file-serving status line, `HTTP/1.1` on the rejection responses. This
//! matches the reference behavior exactly and must not be unified.

use bytes::BytesMut;

/// Status line for the file-serving path, selected by the configured
/// status code. Codes outside the table fall back to 500.
pub fn status_line(code: u16) -> &'static str {
    match code {
        200 => "HTTP/1.0 200 OK",
        404 => "HTTP/1.0 404 Not Found",
        _ => "HTTP/1.0 500 Internal Server Error",
    }
}

/// Canned responses and file-response framing
pub struct Response;

impl Response {
    /// Rejection for unreadable or invalid request lines
    pub fn bad_request() -> &'static [u8] {
        b"HTTP/1.1 400 Bad Request\r\n\r\n"
    }

    /// Rejection for unroutable paths and files that fail to open
    pub fn not_found() -> &'static [u8] {
        b"HTTP/1.1 404 Not Found\r\n\r\n"
    }

    /// Rejection when an opened file cannot be stat'd
    pub fn internal_server_error() -> &'static [u8] {
        b"HTTP/1.1 500 Internal Server Error\r\n\r\n"
    }

    /// Build the status line and header block for a file response.
    ///
    /// Configured headers are emitted verbatim in their original order,
    /// followed by a synthesized `Content-Length` line, always last. The
    /// block is not deduplicated: a configured `Content-Length` header
    /// simply appears twice.
    pub fn file_header(status: u16, headers: &[String], content_length: u64) -> BytesMut {
        let mut response = BytesMut::new();
        response.extend_from_slice(status_line(status).as_bytes());
        response.extend_from_slice(b"\r\n");
        for header in headers {
            response.extend_from_slice(header.as_bytes());
            response.extend_from_slice(b"\r\n");
        }
        response.extend_from_slice(format!("Content-Length: {}\r\n", content_length).as_bytes());
        response.extend_from_slice(b"\r\n");
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_lookup() {
        assert_eq!(status_line(200), "HTTP/1.0 200 OK");
        assert_eq!(status_line(404), "HTTP/1.0 404 Not Found");
        assert_eq!(status_line(500), "HTTP/1.0 500 Internal Server Error");
    }

    #[test]
    fn test_status_line_fallback() {
        // Unrecognized codes render as 500
        assert_eq!(status_line(999), "HTTP/1.0 500 Internal Server Error");
        assert_eq!(status_line(0), "HTTP/1.0 500 Internal Server Error");
    }

    #[test]
    fn test_rejections_are_bare() {
        assert_eq!(Response::bad_request(), b"HTTP/1.1 400 Bad Request\r\n\r\n");
        assert_eq!(Response::not_found(), b"HTTP/1.1 404 Not Found\r\n\r\n");
        assert_eq!(
            Response::internal_server_error(),
            b"HTTP/1.1 500 Internal Server Error\r\n\r\n"
        );
    }

    #[test]
    fn test_file_header_no_custom_headers() {
        let header = Response::file_header(200, &[], 20);
        assert_eq!(&header[..], b"HTTP/1.0 200 OK\r\nContent-Length: 20\r\n\r\n");
    }

    #[test]
    fn test_file_header_preserves_order() {
        let headers = vec![
            "Server: serve-a-file".to_string(),
            "Cache-Control: no-cache".to_string(),
        ];
        let header = Response::file_header(200, &headers, 5);
        assert_eq!(
            &header[..],
            b"HTTP/1.0 200 OK\r\n\
              Server: serve-a-file\r\n\
              Cache-Control: no-cache\r\n\
              Content-Length: 5\r\n\r\n"
                .as_slice()
        );
    }

    #[test]
    fn test_file_header_does_not_deduplicate() {
        let headers = vec!["Content-Length: 999".to_string()];
        let header = Response::file_header(200, &headers, 5);
        assert_eq!(
            &header[..],
            b"HTTP/1.0 200 OK\r\n\
              Content-Length: 999\r\n\
              Content-Length: 5\r\n\r\n"
                .as_slice()
        );
    }

    #[test]
    fn test_file_header_uses_configured_status() {
        let header = Response::file_header(404, &[], 0);
        assert_eq!(
            &header[..],
            b"HTTP/1.0 404 Not Found\r\nContent-Length: 0\r\n\r\n"
        );
    }
}
