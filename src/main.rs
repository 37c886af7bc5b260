use clap::Parser;
use log::{error, info};

use fserv::logger;
use fserv::server::HttpServer;
use fserv::server::config::ServerConfig;

fn main() {
    logger::init();

    let config = ServerConfig::parse();
    info!("Starting fserv with config: {:?}", config);

    let server = match HttpServer::new(&config) {
        Ok(server) => server,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    server.run();
}
