use crate::api::docs::swagger_ui;
use crate::api::routes::users::users_routes;
use crate::error::ApiError;
use crate::store::user_store::MockUserStore;
use actix_web::middleware::{Compress, NormalizePath, TrailingSlash};
use actix_web::{middleware, web::Data, App, HttpServer};
use actix_web::{web, HttpResponse, Scope};
use anyhow::Error;
use log::info;
use serde_json::json;
use shared::security::cors::permissive_cors;
use std::sync::Arc;

pub const API_BASE_PATH: &str = "/api/v1";
const MAX_PAYLOAD_BYTES: usize = 2_097_152;

pub(crate) struct AppState {
    pub(crate) user_store: Arc<MockUserStore>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "user-api"
    }))
}

async fn not_found() -> HttpResponse {
    ApiError::RouteNotFound.into()
}

pub(crate) fn api_routes() -> Scope {
    web::scope(API_BASE_PATH).service(users_routes())
}

/// Registers every route of the service. Shared by the server and tests so
/// both dispatch identically.
pub(crate) fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::default().limit(MAX_PAYLOAD_BYTES))
        .service(web::resource("/health").route(web::get().to(health_check)))
        .service(swagger_ui())
        .service(api_routes().wrap(NormalizePath::new(TrailingSlash::Trim)))
        .default_service(web::route().to(not_found));
}

pub async fn start_server(
    config: ServerConfig,
    user_store: Arc<MockUserStore>,
) -> Result<(), Error> {
    info!("Starting server at http://{}:{}", config.host, config.port);
    info!(
        "Swagger UI available at http://{}:{}/swagger/",
        config.host, config.port
    );
    let app_state = Data::new(AppState { user_store });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(permissive_cors())
            .wrap(middleware::Logger::default())
            .wrap(Compress::default())
            .configure(configure_app)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;
    Ok(())
}
