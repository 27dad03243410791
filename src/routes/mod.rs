// Route exports
pub mod matches;
pub mod persona;

use actix_web::web;

/// Routes sit at the root: the demo client concatenates its base URL
/// with bare paths like `/match`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(matches::configure).configure(persona::configure);
}
