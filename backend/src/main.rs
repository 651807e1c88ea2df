mod config;
mod error;
mod services;

use crate::config::HostConfig;
use crate::services::codegen::Relay;
use actix_web::{web, App, HttpServer};
use common::endpoints::API_BASE;
use env_logger::Env;
use log::{error, info};
use std::io;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = HostConfig::from_env().map_err(|e| {
        error!("{}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;
    let relay = Relay::new(&config).map_err(|e| {
        error!("{}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })?;
    let relay = web::Data::new(relay);
    let url = config.local_url();

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    info!("Server running at {}", url);
    info!("Relaying {} to {}", API_BASE, config.upstream_base());

    let max_body_bytes = config.max_body_bytes;
    HttpServer::new(move || {
        App::new()
            .app_data(web::PayloadConfig::new(max_body_bytes))
            .app_data(relay.clone())
            .service(services::codegen::configure_routes())
            .default_service(web::route().to(services::assets::serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
