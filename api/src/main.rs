use actix_web::HttpServer;
use dotenvy::dotenv;
use log::info;

use ar_api::{config::Config, create_app};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.logging.level.as_str()));

    info!("Starting ApiResponse demo server ({})", config.environment);

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let settings = config.serializer;
    let mut server = HttpServer::new(move || create_app(settings));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await
}
