//! HTTP endpoint serving the calculator.
//!
//! `/api/calculate` accepts the form fields as a POST body or a GET query
//! string and answers with the JSON result record. Missing mark fields count
//! as 0; marks that are present must be numbers in 0-100 or the request is
//! refused with `400 {"error": ...}`.

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::http::{Method, header};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::json;
use std::net::SocketAddr;
use tracing::{info, warn};

use crate::form::FormPayload;

pub const CALCULATE_PATH: &str = "/api/calculate";

/// Decodes, validates and computes one submission.
fn calculate_response(raw: &[u8]) -> HttpResponse {
    let input = match FormPayload::decode(raw).and_then(|form| form.validate()) {
        Ok(input) => input,
        Err(e) => {
            warn!(error = %e, "Rejected submission");
            return HttpResponse::BadRequest().json(json!({ "error": e.to_string() }));
        }
    };

    let record = input.compute();
    info!(
        roll = %record.roll_number,
        total = record.total,
        grade = %record.grade,
        "Result calculated"
    );
    HttpResponse::Ok().json(record)
}

async fn calculate_post(body: web::Bytes) -> HttpResponse {
    calculate_response(&body)
}

async fn calculate_get(req: HttpRequest) -> HttpResponse {
    calculate_response(req.query_string().as_bytes())
}

async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// Any origin may call the endpoint.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_header(header::CONTENT_TYPE)
}

/// Registers the calculate resource. Methods other than GET, POST and
/// OPTIONS get 405.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(CALCULATE_PATH)
            .route(web::post().to(calculate_post))
            .route(web::get().to(calculate_get))
            .route(web::method(Method::OPTIONS).to(preflight)),
    );
}

/// Binds the server without running it. Returns the server future and the
/// addresses it listens on (useful when binding port 0).
pub fn start(host: &str, port: u16) -> std::io::Result<(Server, Vec<SocketAddr>)> {
    let server = HttpServer::new(|| App::new().wrap(cors()).configure(configure))
        .bind((host, port))?;
    let addrs = server.addrs();
    Ok((server.run(), addrs))
}

pub async fn run_server(host: &str, port: u16) -> std::io::Result<()> {
    let (server, addrs) = start(host, port)?;
    for addr in &addrs {
        info!(%addr, endpoint = %format!("http://{addr}{CALCULATE_PATH}"), "Server started");
    }
    server.await
}
