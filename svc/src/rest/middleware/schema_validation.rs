use actix_web::error::ErrorBadRequest;
use actix_web::{dev::Payload, Error as ActixWebError};
use actix_web::{http::header, web, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use libreg::schema::Schema;
use serde::de::DeserializeOwned;

use crate::rest::api::ApiError;

/// Declares the schema a request body must satisfy.
pub trait RequestSchema {
    fn schema() -> Schema;
}

/// Extractor wrapping a handler with schema validation of the JSON body.
///
/// The body is parsed as JSON and checked against `T`'s schema before the
/// handler runs. A body that fails validation is answered with a 400 and a
/// warning is logged with the caller's User-Agent; the handler is never
/// invoked. A body that passes is deserialized into `T` and handed to the
/// handler unchanged.
pub struct Validated<T>(pub T);

impl<T> Validated<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for Validated<T>
where
    T: RequestSchema + DeserializeOwned + 'static,
{
    type Error = ActixWebError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let user_agent = req
            .headers()
            .get(header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("not set")
            .to_owned();
        let body = web::Bytes::from_request(req, payload);

        Box::pin(async move {
            let body = body.await?;

            // A body that isn't JSON at all gets the framework's default
            // bad-request answer.
            let value: serde_json::Value =
                serde_json::from_slice(&body).map_err(ErrorBadRequest)?;

            if let Err(violations) = T::schema().validate(&value) {
                tracing::warn!("validation error (UA: {}): {}", user_agent, violations);
                return Err(ApiError::from(violations).into());
            }

            let request = serde_json::from_value(value).map_err(ErrorBadRequest)?;
            Ok(Validated(request))
        })
    }
}
