#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParseError {
    Empty,
    NotGet,
    MissingPathEnd,
    BadPathStart,
    DoubleSlash,
    Traversal,
}

/// Parse the request line out of the raw bytes read from a connection.
/// Only the first line matters; headers and body are never inspected.
/// Returns the URL path token on success.
pub fn parse_request_line(buf: &[u8]) -> Result<&str, ParseError> {
    if buf.is_empty() {
        return Err(ParseError::Empty);
    }

    if !buf.starts_with(b"GET ") {
        return Err(ParseError::NotGet);
    }

    let rest = &buf[4..];
    let line = match rest.iter().position(|&b| b == b'\n') {
        Some(pos) => &rest[..pos],
        None => rest,
    };

    let path = match line.iter().position(|&b| b == b' ') {
        Some(pos) => &line[..pos],
        None => return Err(ParseError::MissingPathEnd),
    };
    let path = std::str::from_utf8(path).map_err(|_| ParseError::BadPathStart)?;

    if !path.starts_with('/') {
        return Err(ParseError::BadPathStart);
    }

    if path.starts_with("//") {
        return Err(ParseError::DoubleSlash);
    }

    if path.split('/').any(|seg| seg == "..") {
        return Err(ParseError::Traversal);
    }

    Ok(path)
}
