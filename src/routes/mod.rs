// Route exports
pub mod engine;

use actix_web::web;

pub use engine::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(engine::configure),
    );
}
