use actix_web::{
    App,
    HttpServer,
    middleware::Logger,
};
use log::info;
use dotenv::dotenv;
mod models;
mod handlers;
mod routes;
mod utils;
mod config;
use config::ServerConfig;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenv().ok();

    let config = ServerConfig::load()?;

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.log_level.clone()));

    let bind_address = config.bind_address();
    info!("Starting server at http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors(&config))
            .wrap(Logger::default())
            .app_data(routes::json_config(&config))
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await?;

    info!("Server shutting down");
    Ok(())
}
