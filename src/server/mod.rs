pub mod config;
pub mod handler;
pub mod http_status;
pub mod listing;
pub mod mime;
pub mod request;
pub mod resolver;
pub mod response;

use log::{debug, error, info};
use std::io;
use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use threadpool::ThreadPool;

use config::ServerConfig;
use handler::handle_client;

pub struct HttpServer {
    config: Arc<ServerConfig>,
    listener: TcpListener,
    thread_pool: ThreadPool,
}

impl HttpServer {
    pub fn new(config: &ServerConfig) -> io::Result<Self> {
        let addr = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(&addr).map_err(|e| bind_error(e, config.port))?;

        info!("Server started on {}", addr);

        let thread_pool = ThreadPool::new(config.threads);

        Ok(Self {
            config: Arc::new(config.clone()),
            listener,
            thread_pool,
        })
    }

    /// The address actually bound; port 0 in the config resolves to an
    /// ephemeral port here.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept connections until the process is terminated. Each accepted
    /// stream is handled on a pool worker; accept errors never stop the
    /// loop.
    pub fn run(&self) {
        info!("Server running with {} threads", self.config.threads);

        loop {
            match self.listener.accept() {
                Ok((stream, addr)) => {
                    debug!("New connection from {}", addr);
                    let config = Arc::clone(&self.config);
                    self.thread_pool.execute(move || handle_client(stream, &config));
                }
                Err(e) => {
                    error!("Error accepting connection: {}", e);
                }
            }
        }
    }
}

fn bind_error(e: io::Error, port: u16) -> io::Error {
    let message = match e.kind() {
        io::ErrorKind::AddrInUse => format!("port {} is in use", port),
        io::ErrorKind::PermissionDenied => format!("port {} is protected", port),
        _ => format!("failed to bind port {}: {}", port, e),
    };
    io::Error::new(e.kind(), message)
}
