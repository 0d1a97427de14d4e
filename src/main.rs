use axum::{extract::State, http::StatusCode, routing::post, Json};
use serde_json::json;
use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use eta_predictor::config::ServiceConfig;
use eta_predictor::features::{DeliveryRequest, FeatureVector};
use eta_predictor::model::DeliveryModel;
use eta_predictor::predict::{self, Predictor};
use eta_predictor::types::{PredictionOut, RoutePoints};

// ---------- Server state ----------

#[derive(Clone)]
struct AppState {
    mdl: Arc<DeliveryModel>,
}

// ---------- Handler ----------

async fn handle_predict(
    State(state): State<AppState>,
    Json(payload): Json<DeliveryRequest>,
) -> Result<Json<PredictionOut>, (StatusCode, Json<serde_json::Value>)> {
    let result = predict::estimate(state.mdl.as_ref(), &payload).map_err(|e| {
        let status = if e.is_client_error() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(json!({ "error": e.to_string() })))
    })?;

    tracing::debug!(
        "age={} rating={:.1} distance_km={:.2} minutes={:.2}",
        payload.age,
        payload.rating,
        result.distance_km,
        result.minutes
    );

    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64;
    Ok(Json(PredictionOut {
        ts_ms: now_ms,
        minutes: result.minutes,
        distance_km: result.distance_km,
        route: RoutePoints {
            restaurant: payload.restaurant,
            destination: payload.destination,
            center: payload.restaurant.midpoint(&payload.destination),
        },
    }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cfg = ServiceConfig::from_env()?;

    let mdl = DeliveryModel::load(&cfg.model_path)?;
    tracing::info!("loaded model from {}", cfg.model_path);

    // Warmup so the first client request is not the JIT's first forward
    let _ = mdl.predict_minutes(&FeatureVector::new(30.0, 4.0, 10.0))?;
    tracing::info!("warmup forward ok");

    let state = AppState { mdl: Arc::new(mdl) };

    let app = axum::Router::new()
        .route("/predict", post(handle_predict))
        .with_state(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], cfg.port));
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
