use std::env;

use actix_web::{
    get,
    web::{self, Json},
    Scope,
};
use serde::Serialize;

use crate::rest::api::ApiError;

#[derive(Serialize)]
pub struct ReadinessResponse {
    status: String,
}

#[get("/readiness")]
pub async fn readiness() -> Result<Json<ReadinessResponse>, ApiError> {
    Ok(Json(ReadinessResponse {
        status: "ok".to_string(),
    }))
}

#[derive(Serialize)]
pub struct LivenessReponse {
    status: String,
    version: String,
    hostname: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pod_ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    node: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
}

#[get("/liveness")]
pub async fn liveness() -> Result<Json<LivenessReponse>, ApiError> {
    let version = env!("CARGO_PKG_VERSION").to_string();
    let hostname = sys_info::hostname().ok();
    let name = env::var("KUBERNETES_NAME").ok();
    let pod_ip = env::var("KUBERNETES_POD_IP").ok();
    let node = env::var("KUBERNETES_NODE_NAME").ok();
    let namespace = env::var("KUBERNETES_NAMESPACE").ok();

    Ok(Json(LivenessReponse {
        status: "ok".to_string(),
        version,
        hostname,
        name,
        pod_ip,
        node,
        namespace,
    }))
}

pub fn api() -> Scope {
    web::scope("/debug").service(readiness).service(liveness)
}

#[cfg(test)]
mod test {
    use actix_web::{http::StatusCode, test, App};

    use super::*;

    #[actix_web::test]
    async fn readiness_reports_ok() {
        let app = test::init_service(App::new().service(api())).await;
        let request = test::TestRequest::get().uri("/debug/readiness").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn liveness_reports_version() {
        let app = test::init_service(App::new().service(api())).await;
        let request = test::TestRequest::get().uri("/debug/liveness").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
