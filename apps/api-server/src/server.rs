//! HTTP server lifecycle.

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

/// Bind the HTTP server and return its handle.
///
/// The returned [`Server`] resolves when the server shuts down; callers
/// stop it through [`Server::handle`], which closes the listener and the
/// store along with it.
pub fn run(config: &AppConfig, state: AppState) -> std::io::Result<Server> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    Ok(server)
}
