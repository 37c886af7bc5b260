use clap::Parser;
use std::path::PathBuf;

fn port_in_range(s: &str) -> Result<u16, String> {
    let port: u32 = s.parse().map_err(|_| format!("invalid port: {s}"))?;
    if 1024 < port && port < 65536 {
        Ok(port as u16)
    } else {
        Err(format!("invalid port: {s} (valid range is 1025..=65535)"))
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8000, value_parser = port_in_range)]
    pub port: u16,

    /// Number of worker threads in the pool
    #[arg(short, long, default_value_t = 10)]
    pub threads: usize,

    /// Document root directory
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Most bytes read while waiting for a request line
    #[arg(long, default_value_t = 1024)]
    pub max_request_bytes: usize,

    /// Per-connection read/write deadline in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            threads: 10,
            root: PathBuf::from("."),
            max_request_bytes: 1024,
            timeout_secs: 10,
        }
    }
}
