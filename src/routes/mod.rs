// Route exports
pub mod errors;
pub mod recommend;
pub mod summary;

use actix_web::web;

pub use errors::json_config;
pub use recommend::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(recommend::configure),
    );
}
