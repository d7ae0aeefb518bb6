use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use libreg::schema::SchemaViolations;
use serde::Serialize;
use strum_macros::Display;

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

#[derive(Debug, Display)]
pub enum ApiError {
    InvalidRequest(String),
    Other(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::InvalidRequest(err) | ApiError::Other(err) => {
                ErrorResponse { error: err.clone() }
            }
        };

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(serde_json::to_string(&body).expect("Couldn't create JSON body"))
    }
}

impl From<SchemaViolations> for ApiError {
    fn from(value: SchemaViolations) -> Self {
        ApiError::InvalidRequest(value.to_string())
    }
}
