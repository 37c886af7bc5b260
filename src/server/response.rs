use chrono::Utc;
use std::fs::File;
use std::io::{self, Read, Write};

use super::http_status::HttpStatus;

const SERVER_NAME: &str = "fserv";
const CHUNK_SIZE: usize = 65536;

/// Response payload: fully-built buffer (listings, error pages) or an open
/// file streamed in fixed-size chunks, never loaded whole.
pub enum Body {
    Bytes(Vec<u8>),
    File(File, u64),
}

pub struct Response {
    status: HttpStatus,
    content_type: Option<&'static str>,
    body: Body,
}

impl Response {
    pub fn error(status: HttpStatus) -> Self {
        Self {
            status,
            content_type: Some("text/plain"),
            body: Body::Bytes(format!(":( {}", status.code()).into_bytes()),
        }
    }

    pub fn html(page: String) -> Self {
        Self {
            status: HttpStatus::Ok,
            content_type: Some("text/html"),
            body: Body::Bytes(page.into_bytes()),
        }
    }

    pub fn file(file: File, size: u64, content_type: Option<&'static str>) -> Self {
        Self {
            status: HttpStatus::Ok,
            content_type,
            body: Body::File(file, size),
        }
    }

    pub fn status(&self) -> HttpStatus {
        self.status
    }

    /// Serialize the whole response: status line, headers, blank line,
    /// body. Content-Length is known up front for both body kinds, so the
    /// headers can be emitted before any body byte.
    pub fn write_to<W: Write>(mut self, out: &mut W) -> io::Result<()> {
        let content_length = match &self.body {
            Body::Bytes(bytes) => bytes.len() as u64,
            Body::File(_, size) => *size,
        };

        let mut head = self.status.as_response_line();
        head.push_str("Connection: close\r\n");
        head.push_str(&format!("Server: {}\r\n", SERVER_NAME));
        head.push_str(&format!("Content-Length: {}\r\n", content_length));
        if let Some(content_type) = self.content_type {
            head.push_str(&format!("Content-Type: {}\r\n", content_type));
        }
        head.push_str(&format!("Date: {}\r\n\r\n", http_date()));

        out.write_all(head.as_bytes())?;

        match &mut self.body {
            Body::Bytes(bytes) => out.write_all(bytes)?,
            Body::File(file, _) => {
                let mut buffer = [0u8; CHUNK_SIZE];
                loop {
                    let n = file.read(&mut buffer)?;
                    if n == 0 {
                        break;
                    }
                    out.write_all(&buffer[..n])?;
                }
            }
        }

        out.flush()
    }
}

/// RFC 1123 HTTP-date, e.g. `Thu, 07 Aug 2026 12:00:00 GMT`.
fn http_date() -> String {
    Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
