use derive_more::{Display, Error};
use ntex::{http, web};

#[derive(Debug, Display, Error)]
pub enum UserError {
    #[display("url not found")]
    UrlNotFound,
    #[display("unauthorized")]
    Unauthorized,
}

impl web::error::WebResponseError for UserError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        let reason = self.to_string();
        logfire::warn!("Request rejected: {reason}", reason = reason);

        web::HttpResponse::build(self.status_code()).json(&serde_json::json!({
            "ok": false,
            "error": self.to_string(),
        }))
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            UserError::UrlNotFound => http::StatusCode::NOT_FOUND,
            UserError::Unauthorized => http::StatusCode::UNAUTHORIZED,
        }
    }
}
