use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use eatnsplit::{app::SplitApp, config::Config, routes};
use log::info;

fn cors(config: &Config) -> Cors {
    match &config.cors_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET"])
            .allow_any_header(),
        None => Cors::default(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;
    info!("Listening on {}", config.bind);
    if let Some(origin) = &config.cors_origin {
        info!("Allowing cross-origin reads from {}", origin);
    }

    let bind = config.bind;
    let state = web::Data::new(Mutex::new(SplitApp::default()));
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .app_data(config.clone())
            .configure(routes::configure)
            .service(
                web::scope("/api")
                    .wrap(cors(&config))
                    .configure(routes::configure_api),
            )
    })
    .bind(bind)?
    .run()
    .await
}
