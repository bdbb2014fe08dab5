#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use actix_web::{dev::Server, get, web, App, HttpResponse, HttpServer};
use serde_json::json;
use std::net::SocketAddr;
use tracing::{error, info};

use crate::domain::AppState;

#[get("/healthz")]
pub async fn healthz() -> HttpResponse {
    HttpResponse::Ok().json(json!({"status":"ok"}))
}

#[get("/status")]
pub async fn status(data: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(data.ctrl.snapshot())
}

#[get("/metrics")]
pub async fn scrape_metrics(data: web::Data<AppState>) -> HttpResponse {
    match data.metrics.encode_text() {
        Ok(buf) => HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4")
            .body(buf),
        Err(e) => {
            error!(error=%format!("{e:#}"), "encode metrics failed");
            HttpResponse::InternalServerError().body("encode metrics failed")
        }
    }
}

/// Binds the status listener. The returned server must be polled (spawned) to run.
pub fn serve(bind: SocketAddr, state: AppState) -> std::io::Result<Server> {
    info!(%bind, "starting status endpoint");
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .service(healthz)
            .service(status)
            .service(scrape_metrics)
    })
    .workers(1)
    .disable_signals()
    .bind(bind)?
    .run();
    Ok(server)
}
