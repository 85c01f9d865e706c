use super::handlers;
use crate::arena::Arena;
use crate::config::Config;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(config: Config) -> anyhow::Result<()> {
        let arena = web::Data::new(Arena::new(config.gazetteer()?, config.settings()));
        log::info!(
            "starting game server on {} ({}s turns, {} words)",
            config.bind,
            config.timeout,
            arena.gazetteer().len()
        );
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(arena.clone())
                .configure(Self::routes)
        })
        .workers(config.workers)
        .bind(&config.bind)?
        .run()
        .await?;
        Ok(())
    }

    pub fn routes(cfg: &mut web::ServiceConfig) {
        cfg.route("/health", web::get().to(handlers::health))
            .route("/register", web::post().to(handlers::register))
            .route("/status/{player_id}", web::get().to(handlers::status))
            .route("/move", web::post().to(handlers::submit));
    }
}
