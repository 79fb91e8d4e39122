//! Handlers not linked to a specific url

use ntex::web;
use serde_json::json;

use crate::front::errors;

/// Return a [UrlNotFound](errors::UserError::UrlNotFound) error for urls not defined
pub async fn serve_not_found() -> Result<web::HttpResponse, web::Error> {
    Err(errors::UserError::UrlNotFound.into())
}

/// Endpoint to report the service is alive
#[web::get("/")]
pub async fn index() -> Result<impl web::Responder, web::Error> {
    Ok(web::HttpResponse::Ok().json(&json!({
        "service": "echo-bot",
        "status": "ok",
    })))
}
