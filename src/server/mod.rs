//! HTTP surface of the scenario service.
//!
//! - `GET /health`   — database reachability
//! - `GET /scenario` — one scenario for `?streak=n`
//! - `GET /stats`    — corpus counts
pub mod dto;
pub mod handlers;

use crate::config::Config;
use crate::corpus::Corpus;
use crate::selection::Selector;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;

/// Registers every route. Expects a [`Selector`] in app data.
pub fn routes(config: &mut web::ServiceConfig) {
    config
        .route("/health", web::get().to(handlers::health))
        .route("/scenario", web::get().to(handlers::scenario))
        .route("/stats", web::get().to(handlers::stats));
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    let pool = crate::store::pool(&config.db_url, config.pool_size)?;
    match pool.get().await {
        Ok(client) => crate::store::migrate(&client).await?,
        Err(e) => log::warn!("database unreachable at startup: {}", e),
    }
    let selector = web::Data::new(Selector::from(Arc::new(pool) as Arc<dyn Corpus>));
    log::info!("starting scenario server on {}", config.bind_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(selector.clone())
            .configure(routes)
    })
    .bind(&config.bind_addr)?
    .run()
    .await?;
    Ok(())
}
