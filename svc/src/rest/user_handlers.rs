use actix_web::{post, web::Json};
use serde_json::{json, Value};

use crate::rest::{
    api::ApiError, middleware::schema_validation::Validated, user_requests::RegisterRequest,
};

/// Registers a new user.
///
/// Only the shape of the request is checked; nothing is persisted and the
/// response body is an empty object.
#[post("/register")]
pub async fn post_register(_: Validated<RegisterRequest>) -> Result<Json<Value>, ApiError> {
    Ok(Json(json!({})))
}

#[cfg(test)]
mod test {
    use actix_web::{
        dev::ServiceResponse,
        http::{header, StatusCode},
        test, App,
    };
    use serde_json::json;

    use super::*;

    async fn post_register_body(body: &str) -> ServiceResponse {
        let app = test::init_service(App::new().service(post_register)).await;
        let request = test::TestRequest::post()
            .uri("/register")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .insert_header((header::USER_AGENT, "svc-tests"))
            .set_payload(body.to_owned())
            .to_request();
        test::call_service(&app, request).await
    }

    #[actix_web::test]
    async fn valid_body_returns_empty_object() {
        let response =
            post_register_body(r#"{"email":"test@test.com","password":"xyz"}"#).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body, json!({}));
    }

    #[actix_web::test]
    async fn no_password_in_body() {
        let response = post_register_body(r#"{"email":"test@test.com"}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("required key not provided: 'password'"));
    }

    #[actix_web::test]
    async fn no_email_in_body() {
        let response = post_register_body(r#"{"password":"xyz"}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn extra_keys_in_body() {
        let response = post_register_body(
            r#"{"email":"test@test.com","extra":"extra","password":"xyz"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("extra keys not allowed: 'extra'"));
    }

    #[actix_web::test]
    async fn invalid_body() {
        let response =
            post_register_body(r#"{"something":"test@test.com","or_other":"xyz"}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn non_string_values_in_body() {
        let response = post_register_body(r#"{"email":42,"password":"xyz"}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn malformed_json_body() {
        let response = post_register_body(r#"{"email": "#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn missing_user_agent_header() {
        let app = test::init_service(App::new().service(post_register)).await;
        let request = test::TestRequest::post()
            .uri("/register")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload(r#"{"email":"test@test.com"}"#)
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn get_method_is_not_allowed() {
        let app = test::init_service(App::new().service(post_register)).await;
        let request = test::TestRequest::get().uri("/register").to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_client_error());
    }
}
