use log::{debug, error, info, warn};
use std::fs::{self, File};
use std::io::{self, BufWriter, Read};
use std::net::TcpStream;
use std::path::Path;
use std::time::Duration;

use super::config::ServerConfig;
use super::http_status::HttpStatus;
use super::listing;
use super::mime;
use super::request;
use super::resolver::{self, Resolved};
use super::response::Response;

const INDEX_FILE: &str = "index.html";

enum ReadRequest {
    Complete(Vec<u8>),
    TooLong,
    Closed,
    Failed(io::Error),
}

/// Handle one connection: read the request, resolve it, write exactly one
/// response, close. Every error path still answers the client; nothing
/// escapes into the worker thread.
pub fn handle_client(mut stream: TcpStream, config: &ServerConfig) {
    let peer_addr = match stream.peer_addr() {
        Ok(addr) => addr.to_string(),
        Err(_) => "unknown".to_string(),
    };

    debug!("Handling request from {}", peer_addr);

    let timeout = Duration::from_secs(config.timeout_secs);
    if let Err(e) = stream
        .set_read_timeout(Some(timeout))
        .and_then(|_| stream.set_write_timeout(Some(timeout)))
    {
        error!("Failed to set deadlines for {}: {}", peer_addr, e);
        return;
    }

    let request_bytes = match read_request(&mut stream, config.max_request_bytes) {
        ReadRequest::Complete(bytes) => bytes,
        ReadRequest::TooLong => {
            warn!("Request line from {} exceeds the size limit", peer_addr);
            respond(stream, Response::error(HttpStatus::BadRequest), &peer_addr);
            return;
        }
        ReadRequest::Closed => {
            debug!("Connection closed by client {}", peer_addr);
            return;
        }
        ReadRequest::Failed(e) => {
            error!("Error reading from {}: {}", peer_addr, e);
            return;
        }
    };

    let url_path = match request::parse_request_line(&request_bytes) {
        Ok(path) => path,
        Err(e) => {
            warn!("Bad request from {}: {:?}", peer_addr, e);
            respond(stream, Response::error(HttpStatus::BadRequest), &peer_addr);
            return;
        }
    };

    let response = build_response(&config.root, url_path);
    info!(
        "{} GET {} -> {}",
        peer_addr,
        url_path,
        response.status().code()
    );
    respond(stream, response, &peer_addr);
}

/// Accumulate bytes until the end of the request line. The first line is
/// all this server acts on, so reading stops at the first newline; a line
/// longer than `limit` is rejected rather than truncated.
fn read_request(stream: &mut TcpStream, limit: usize) -> ReadRequest {
    let mut buf = vec![0u8; limit];
    let mut len = 0;

    loop {
        match stream.read(&mut buf[len..]) {
            Ok(0) => {
                if len == 0 {
                    return ReadRequest::Closed;
                }
                buf.truncate(len);
                return ReadRequest::Complete(buf);
            }
            Ok(n) => {
                len += n;
                if buf[..len].contains(&b'\n') {
                    buf.truncate(len);
                    return ReadRequest::Complete(buf);
                }
                if len == buf.len() {
                    return ReadRequest::TooLong;
                }
            }
            Err(e) => return ReadRequest::Failed(e),
        }
    }
}

/// Resolve a parsed URL path into the response: a file, the directory's
/// index.html, a generated listing, or an error status.
fn build_response(root: &Path, url_path: &str) -> Response {
    match resolver::resolve(root, url_path) {
        Resolved::Dir(dir) => {
            let index = dir.join(INDEX_FILE);
            match fs::metadata(&index) {
                Ok(meta) if meta.is_file() => serve_file(&index),
                _ => serve_listing(url_path, &dir),
            }
        }
        Resolved::File(path) => serve_file(&path),
        Resolved::Missing => Response::error(HttpStatus::NotFound),
    }
}

fn serve_file(path: &Path) -> Response {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            // The path classified as a regular file moments ago; a failed
            // open is a permission problem or a stat/open race.
            error!("Error opening {:?}: {}", path, e);
            return Response::error(HttpStatus::InternalServerError);
        }
    };

    let size = match file.metadata() {
        Ok(meta) => meta.len(),
        Err(e) => {
            error!("Error getting metadata for {:?}: {}", path, e);
            return Response::error(HttpStatus::InternalServerError);
        }
    };

    Response::file(file, size, mime::content_type(path))
}

fn serve_listing(url_path: &str, dir: &Path) -> Response {
    match listing::render(url_path, dir) {
        Ok(page) => Response::html(page),
        Err(e) => {
            error!("Error listing {:?}: {}", dir, e);
            Response::error(HttpStatus::InternalServerError)
        }
    }
}

fn respond(stream: TcpStream, response: Response, peer_addr: &str) {
    let mut writer = BufWriter::new(stream);
    if let Err(e) = response.write_to(&mut writer) {
        error!("Error sending response to {}: {}", peer_addr, e);
    }
}
