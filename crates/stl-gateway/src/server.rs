use std::sync::Arc;

use tokio::net::TcpListener;

use stl_contract::ContractRegistry;

use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::router::build_router;

/// The ledger gateway server.
pub struct GatewayServer {
    config: GatewayConfig,
    registry: Arc<ContractRegistry>,
}

impl GatewayServer {
    pub fn new(config: GatewayConfig, registry: Arc<ContractRegistry>) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.registry.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> GatewayResult<()> {
        if self.config.seed_on_start {
            self.registry.init_all()?;
        }
        let app = build_router(self.registry.clone());
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("gateway listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| GatewayError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use stl_state::InMemoryWorldState;

    fn test_router(seed: bool) -> axum::Router {
        let registry = Arc::new(ContractRegistry::new(Arc::new(InMemoryWorldState::new())));
        if seed {
            registry.init_all().unwrap();
        }
        build_router(registry)
    }

    fn post_json(body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/sensor-events")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn card_payload() -> Value {
        json!({
            "eventID": "card_001",
            "deviceType": "card_reader",
            "deviceID": "reader_01",
            "timestamp": "2025-03-14T10:15:30Z",
            "eventType": "swipe",
            "location": "Building A - Main Entrance",
            "metadata": "userID:user1; cardID:card1"
        })
    }

    #[test]
    fn server_construction() {
        let registry = Arc::new(ContractRegistry::new(Arc::new(InMemoryWorldState::new())));
        let server = GatewayServer::new(GatewayConfig::default(), registry);
        assert_eq!(server.config().bind_addr, "127.0.0.1:5000".parse().unwrap());
        let _router = server.router();
    }

    #[tokio::test]
    async fn submit_records_event() {
        let router = test_router(false);
        let response = router.clone().oneshot(post_json(&card_payload())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        let record: Value = serde_json::from_str(body["result"].as_str().unwrap()).unwrap();
        assert_eq!(record["docType"], "sensorEvent");
        assert_eq!(record["eventID"], "card_001");

        // The record is now readable by exact key.
        let response = router.oneshot(get("/sensor-events/card_001")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let record = body_json(response).await;
        assert_eq!(record["eventID"], "card_001");
        assert_eq!(record["docType"], "sensorEvent");
    }

    #[tokio::test]
    async fn missing_field_is_client_error_without_contract_call() {
        let router = test_router(false);
        let mut payload = card_payload();
        payload.as_object_mut().unwrap().remove("metadata");

        let response = router.clone().oneshot(post_json(&payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Missing required fields: metadata");

        // Nothing was written.
        let response = router.oneshot(get("/sensor-events/card_001")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn null_fields_count_as_missing() {
        let router = test_router(false);
        let mut payload = card_payload();
        payload["eventID"] = Value::Null;
        payload["location"] = Value::Null;

        let response = router.oneshot(post_json(&payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Missing required fields: eventID, location");
    }

    #[tokio::test]
    async fn duplicate_create_surfaces_contract_message() {
        let router = test_router(false);
        router.clone().oneshot(post_json(&card_payload())).await.unwrap();

        let response = router.oneshot(post_json(&card_payload())).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "the event card_001 already exists");
    }

    #[tokio::test]
    async fn missing_device_type_fails_at_contract_boundary() {
        let router = test_router(false);
        let mut payload = card_payload();
        payload.as_object_mut().unwrap().remove("deviceType");

        // The five required fields are present, so validation passes; the
        // typed contract-call boundary rejects instead.
        let response = router.oneshot(post_json(&payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn list_scoped_by_device_type() {
        let router = test_router(true);
        let response = router
            .oneshot(get("/sensor-events?deviceType=cctv"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let events = body["events"].as_array().unwrap();
        assert_eq!(events.len(), 3);
        for event in events {
            assert_eq!(event["docType"], "cctvEvent");
            assert_eq!(event["txStatus"], "committed");
        }
    }

    #[tokio::test]
    async fn list_unscoped_aggregates_all_contracts() {
        let router = test_router(true);
        let response = router.oneshot(get("/sensor-events")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["events"].as_array().unwrap().len(), 15);
    }

    #[tokio::test]
    async fn list_unknown_device_type_is_client_error() {
        let router = test_router(true);
        let response = router
            .oneshot(get("/sensor-events?deviceType=thermostat"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "unknown device type: thermostat");
    }

    #[tokio::test]
    async fn read_missing_event_is_not_found() {
        let router = test_router(false);
        let response = router.oneshot(get("/sensor-events/ghost")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["message"], "the event ghost does not exist");
    }

    #[tokio::test]
    async fn health_and_info() {
        let router = test_router(false);
        let response = router.clone().oneshot(get("/v1/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router.oneshot(get("/v1/info")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["name"], "stl-gateway");
    }
}
