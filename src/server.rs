use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use tracing::info;

use crate::cli::ServeArgs;
use crate::config::Settings;
use crate::error::AppError;
use crate::routes::{self, AppState};
use crate::services::ListingRepository;

/// Load the inventory and serve the search API until shutdown
pub async fn run(args: ServeArgs, settings: Settings) -> Result<(), AppError> {
    let listings_path = args
        .listings
        .unwrap_or_else(|| settings.data.listings_path.clone());

    let repository = ListingRepository::load(&listings_path)?;
    let app_state = AppState::new(repository, listings_path, settings.search.clone());

    let host = args.host.unwrap_or_else(|| settings.server.host.clone());
    let port = args.port.unwrap_or(settings.server.port);
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await?;

    info!("HTTP server stopped");
    Ok(())
}
