//! HTTP request line parser.

/// A parsed HTTP request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine<'a> {
    /// Request method (e.g. `GET`).
    pub method: &'a str,
    /// Request target (e.g. `/index.html`).
    pub path: &'a str,
    /// Protocol version token (e.g. `HTTP/1.1`).
    pub version: &'a str,
}

/// Request line parsing errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line did not split into exactly three tokens.
    MalformedRequestLine(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MalformedRequestLine(line) => {
                write!(f, "Invalid request line: {}", line)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a request line of the form `<method> <path> <version>`.
///
/// The line must already have its line ending stripped. Splitting is on
/// single spaces, so consecutive spaces produce empty tokens and fail the
/// three-token check. No grammar validation happens beyond the token
/// count; any three-token line parses, and the connection handler decides
/// whether the method and version are acceptable.
pub fn parse(line: &str) -> Result<RequestLine<'_>, ParseError> {
    let parts: Vec<&str> = line.split(' ').collect();
    if parts.len() != 3 {
        return Err(ParseError::MalformedRequestLine(line.to_string()));
    }

    Ok(RequestLine {
        method: parts[0],
        path: parts[1],
        version: parts[2],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_line() {
        let request = parse("GET /index.html HTTP/1.1").unwrap();
        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/index.html");
        assert_eq!(request.version, "HTTP/1.1");
    }

    #[test]
    fn test_parse_is_permissive() {
        // Any three tokens parse; validation is the caller's job
        let request = parse("GET ??? xyz").unwrap();
        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "???");
        assert_eq!(request.version, "xyz");
    }

    #[test]
    fn test_parse_missing_version() {
        match parse("GET /") {
            Err(ParseError::MalformedRequestLine(line)) => {
                assert_eq!(line, "GET /");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_parse_extra_token() {
        match parse("GET /index.html HTTP/1.1 extra") {
            Err(ParseError::MalformedRequestLine(_)) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_parse_consecutive_spaces() {
        // A double space yields an empty token, so the count is four
        match parse("GET  / HTTP/1.1") {
            Err(ParseError::MalformedRequestLine(_)) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty_line() {
        match parse("") {
            Err(ParseError::MalformedRequestLine(_)) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }
}
