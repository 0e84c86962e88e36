//! HTTP route modules

pub mod relay;

use crate::server::handlers::health_check;
use crate::server::state::RelayRoute;
use actix_web::web;

/// Mount `/health` and one relay endpoint per provider route
pub fn configure_routes(cfg: &mut web::ServiceConfig, routes: &[RelayRoute]) {
    cfg.route("/health", web::get().to(health_check));

    for route in routes {
        cfg.service(
            web::resource(route.path.as_str())
                .app_data(web::Data::new(route.clone()))
                .route(web::route().to(relay::relay)),
        );
    }
}
