//! Demo routes exercising every branch of the response contract

pub mod demo;

use actix_web::web;

pub mod paths {
    pub const HEALTH: &str = "/health";
    pub const VOID: &str = "/void";
    pub const VOID_ACTION: &str = "/void-action";
    pub const VOID_ACTION_ASYNC: &str = "/void-action-async";
    pub const VOID_ACTION_ERROR: &str = "/void-action-error";
    pub const DATA: &str = "/data";
    pub const ERROR: &str = "/error";
    pub const GENERIC_ERROR: &str = "/generic-error";
    pub const UNKNOWN_ERROR: &str = "/unknown-error";
    pub const INVALID_MODEL: &str = "/invalid-model";
    pub const PROFILE: &str = "/profile";
    pub const ORDER: &str = "/orders/{id}";
    pub const PRIVATE_VOID: &str = "/private";
    pub const PRIVATE_DATA: &str = "/private-data";
    pub const PRIVATE_DATA_ASYNC: &str = "/private-data-async";
    pub const PRIVATE_VOID_ACTION: &str = "/private-void-action";
    pub const PRIVATE_VOID_ACTION_ASYNC: &str = "/private-void-action-async";
}

/// Register the demo routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(paths::HEALTH, web::get().to(demo::health))
        .route(paths::VOID, web::get().to(demo::void))
        .route(paths::VOID_ACTION, web::get().to(demo::void_action))
        .route(paths::VOID_ACTION_ASYNC, web::get().to(demo::void_action_async))
        .route(paths::VOID_ACTION_ERROR, web::get().to(demo::void_action_error))
        .route(paths::DATA, web::post().to(demo::data))
        .route(paths::ERROR, web::post().to(demo::error))
        .route(paths::GENERIC_ERROR, web::get().to(demo::generic_error))
        .route(paths::UNKNOWN_ERROR, web::get().to(demo::unknown_error))
        .route(paths::INVALID_MODEL, web::get().to(demo::invalid_model))
        .route(paths::PROFILE, web::post().to(demo::profile))
        .route(paths::ORDER, web::get().to(demo::order))
        .route(paths::PRIVATE_VOID, web::post().to(demo::private_void))
        .route(paths::PRIVATE_DATA, web::post().to(demo::private_data))
        .route(paths::PRIVATE_DATA_ASYNC, web::post().to(demo::private_data_async))
        .route(paths::PRIVATE_VOID_ACTION, web::post().to(demo::private_void_action))
        .route(
            paths::PRIVATE_VOID_ACTION_ASYNC,
            web::post().to(demo::private_void_action_async),
        );
}
