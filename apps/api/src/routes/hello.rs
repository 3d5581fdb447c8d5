use axum::Json;
use shared::HelloResponse;

/// GET /hello
pub async fn hello_handler() -> Json<HelloResponse> {
    Json(HelloResponse::default())
}
