use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

use stl_contract::ContractRegistry;
use stl_types::{DeviceType, SensorEvent};

/// Shared handler state: the contract registry over one world state.
pub type AppState = Arc<ContractRegistry>;

/// Fields the gateway requires before any contract invocation.
/// `deviceType` and `timestamp` are enforced only by the typed contract-call
/// boundary, not by this list.
const REQUIRED_FIELDS: [&str; 5] = ["eventID", "deviceID", "eventType", "metadata", "location"];

/// Uniform `{status, message, result}` reply body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl ApiResponse {
    fn success(message: impl Into<String>, result: String) -> Self {
        Self {
            status: "success".into(),
            message: message.into(),
            result: Some(result),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".into(),
            message: message.into(),
            result: None,
        }
    }
}

/// `POST /sensor-events` — validate an envelope and record it.
pub async fn submit_sensor_event(
    State(registry): State<AppState>,
    Json(body): Json<Value>,
) -> Response {
    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| body.get(*field).map_or(true, Value::is_null))
        .collect();
    if !missing.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format!(
                "Missing required fields: {}",
                missing.join(", ")
            ))),
        )
            .into_response();
    }

    let envelope: SensorEvent = match serde_json::from_value(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!(error = %e, "envelope failed contract-call typing");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("invalid envelope: {e}"))),
            )
                .into_response();
        }
    };

    info!(
        event_id = %envelope.event_id,
        device_type = %envelope.device_type,
        "sensor event received"
    );

    match registry
        .contract(envelope.device_type)
        .create_event(envelope)
    {
        Ok(result) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                "Sensor event successfully recorded on the ledger.",
                result,
            )),
        )
            .into_response(),
        // Contract errors surface verbatim so operators can tell a duplicate
        // write from an infrastructure failure.
        Err(e) => {
            warn!(error = %e, "contract rejected sensor event");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(e.to_string())),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "deviceType")]
    pub device_type: Option<String>,
}

/// `GET /sensor-events` — the read surface consumed by dashboards.
///
/// With `?deviceType=` the reply carries exactly that contract's enumeration;
/// without it, the object records of every contract. Each record gains a
/// derived `txStatus` field; the ledger itself never stores it.
pub async fn list_sensor_events(
    State(registry): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Response {
    let events = match query.device_type.as_deref() {
        Some(tag) => {
            let device_type: DeviceType = match tag.parse() {
                Ok(ty) => ty,
                Err(e) => {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ApiResponse::error(e.to_string())),
                    )
                        .into_response();
                }
            };
            match registry.contract(device_type).get_all_events() {
                Ok(events) => events,
                Err(e) => return contract_failure(e),
            }
        }
        None => {
            let mut all = Vec::new();
            for contract in registry.contracts() {
                match contract.get_all_events() {
                    // The aggregate keeps object records; pass-through raw
                    // strings are a per-contract enumeration concern.
                    Ok(events) => all.extend(events.into_iter().filter(Value::is_object)),
                    Err(e) => return contract_failure(e),
                }
            }
            all
        }
    };

    let events: Vec<Value> = events.into_iter().map(with_tx_status).collect();
    Json(json!({ "events": events })).into_response()
}

/// `GET /sensor-events/:event_id` — exact-key read of the stored encoding.
pub async fn read_sensor_event(
    State(registry): State<AppState>,
    Path(event_id): Path<String>,
) -> Response {
    match registry.read_event(&event_id) {
        Ok(raw) => match serde_json::from_str::<Value>(&raw) {
            Ok(record) => Json(record).into_response(),
            Err(_) => Json(Value::String(raw)).into_response(),
        },
        Err(e) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(e.to_string())),
        )
            .into_response(),
    }
}

/// `GET /v1/health` — liveness probe.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /v1/info` — build info.
pub async fn info_handler() -> Json<Value> {
    Json(json!({
        "name": "stl-gateway",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn with_tx_status(record: Value) -> Value {
    match record {
        Value::Object(mut map) => {
            map.insert("txStatus".into(), Value::String("committed".into()));
            Value::Object(map)
        }
        other => other,
    }
}

fn contract_failure(e: stl_contract::ContractError) -> Response {
    warn!(error = %e, "enumeration failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error(e.to_string())),
    )
        .into_response()
}
